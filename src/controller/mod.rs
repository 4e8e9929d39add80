//! Page controllers.
//!
//! One controller per page sequences validation, API calls, cache patches and rendering. All
//! controllers follow the same shape: a cheap-to-clone handle over shared state so Dioxus
//! event handlers can each own a copy, methods taking `&self`, and no `RefCell` borrow held
//! across an `.await`.
//!
//! Every action moves its page through idle → loading → success or error. Failures are
//! logged and converted to the one message the page shows with [`Error::user_message`].

pub mod admin;
pub mod auth;
pub mod dashboard;

use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    rc::Rc,
};

use dioxus_logger::tracing;

use crate::{
    api::ApiClient,
    error::Error,
    session::{Session, SessionStorage, SessionStore},
};

pub use admin::{AdminController, PollOutcome, UserForm};
pub use auth::AuthController;
pub use dashboard::DashboardController;

/// Where a page is in its current action
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PageStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl PageStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Message to show, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(message) | Self::Error(message) => Some(message),
            Self::Idle | Self::Loading => None,
        }
    }
}

/// Shared status cell of a page
#[derive(Clone, Debug, Default)]
pub struct StatusCell(Rc<RefCell<PageStatus>>);

impl StatusCell {
    pub fn get(&self) -> PageStatus {
        self.0.borrow().clone()
    }

    pub fn set(&self, status: PageStatus) {
        *self.0.borrow_mut() = status;
    }

    pub fn loading(&self) {
        self.set(PageStatus::Loading);
    }

    pub fn succeed(&self, message: impl Into<String>) {
        self.set(PageStatus::Success(message.into()));
    }

    /// Record a failed action and log it.
    ///
    /// Local rejections are logged at `warn`, failures of the backend at `error`.
    pub fn fail(&self, action: &str, err: &Error, fallback: &str) {
        if err.is_local() {
            tracing::warn!("{} rejected: {}", action, err);
        } else {
            tracing::error!("{} failed: {}", action, err);
        }

        self.set(PageStatus::Error(err.user_message(fallback)));
    }

    pub fn reset(&self) {
        self.set(PageStatus::Idle);
    }
}

/// Counts actions in flight; guards decrement on drop so every outcome releases the count.
#[derive(Clone, Debug, Default)]
pub struct BusyFlag(Rc<Cell<u32>>);

impl BusyFlag {
    pub fn is_busy(&self) -> bool {
        self.0.get() > 0
    }

    /// Enter unconditionally.
    pub fn enter(&self) -> BusyGuard {
        self.0.set(self.0.get() + 1);
        BusyGuard(self.0.clone())
    }

    /// Enter only if nothing else is in flight.
    pub fn try_enter(&self) -> Option<BusyGuard> {
        if self.is_busy() {
            return None;
        }
        Some(self.enter())
    }
}

pub struct BusyGuard(Rc<Cell<u32>>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

/// Record ids with an action in flight
#[derive(Clone, Debug, Default)]
pub struct InFlight(Rc<RefCell<HashSet<i64>>>);

impl InFlight {
    pub fn contains(&self, id: i64) -> bool {
        self.0.borrow().contains(&id)
    }

    /// Claim `id`, or `None` if an action for it is already running.
    pub fn try_begin(&self, id: i64) -> Option<InFlightGuard> {
        if !self.0.borrow_mut().insert(id) {
            return None;
        }

        Some(InFlightGuard {
            ids: self.0.clone(),
            id,
        })
    }
}

pub struct InFlightGuard {
    ids: Rc<RefCell<HashSet<i64>>>,
    id: i64,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.ids.borrow_mut().remove(&self.id);
    }
}

/// Load the stored session and authorize the client with its token.
///
/// Pages that require a login call this at initialization.
pub fn restore_session<S: SessionStorage>(
    sessions: &SessionStore<S>,
    api: &ApiClient,
) -> Result<Session, Error> {
    let session = sessions.current().ok_or(Error::Unauthenticated)?;
    api.set_token(session.token.clone());
    Ok(session)
}

use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, UserApi},
    controller::{BusyFlag, PageStatus, StatusCell},
    error::Error,
    model::user::{LoginDto, RegisterDto},
    session::{Session, SessionStorage, SessionStore},
    validation::{validate_login, validate_register, LoginForm, RegisterForm},
};

pub const LOGIN_FALLBACK: &str = "Invalid username or password";
pub const REGISTER_FALLBACK: &str = "Registration failed. Username may already exist.";
pub const REGISTER_SUCCESS: &str = "Account created successfully! Redirecting to login...";

/// Controller of the login and registration pages
#[derive(Clone)]
pub struct AuthController<S> {
    api: ApiClient,
    sessions: SessionStore<S>,
    status: StatusCell,
    submitting: BusyFlag,
}

impl<S: SessionStorage + Clone> AuthController<S> {
    pub fn new(api: ApiClient, sessions: SessionStore<S>) -> Self {
        Self {
            api,
            sessions,
            status: StatusCell::default(),
            submitting: BusyFlag::default(),
        }
    }

    pub fn status(&self) -> PageStatus {
        self.status.get()
    }

    /// True while a login or registration request is running
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_busy()
    }

    /// The stored session, if a user is already logged in
    pub fn current_session(&self) -> Option<Session> {
        self.sessions.current()
    }

    /// Validate credentials, log in and persist the session.
    ///
    /// On success the API client carries the new token for every following request.
    pub async fn login(&self, form: &LoginForm) -> Result<Session, Error> {
        let result = self.try_login(form).await;

        match &result {
            Ok(session) => {
                tracing::info!("User {} logged in", session.id);
                self.status.succeed(format!("Welcome back, {}!", session.username));
            }
            Err(err) => self.status.fail("Login", err, LOGIN_FALLBACK),
        }

        result
    }

    async fn try_login(&self, form: &LoginForm) -> Result<Session, Error> {
        let valid = validate_login(form)?;
        let _submitting = self
            .submitting
            .try_enter()
            .ok_or_else(|| Error::Busy("login".to_string()))?;
        self.status.loading();

        let dto = LoginDto {
            username: valid.username,
            password: valid.password,
        };
        let response = UserApi::new(&self.api).login(&dto).await?;

        let session = Session {
            id: response.id,
            username: response.username,
            token: response.token.filter(|token| !token.is_empty()),
        };

        self.sessions.save(&session)?;
        self.api.set_token(session.token.clone());

        Ok(session)
    }

    /// Validate and submit a registration.
    ///
    /// Registration does not log the user in; the page sends them to the login form.
    pub async fn register(&self, form: &RegisterForm) -> Result<(), Error> {
        let result = self.try_register(form).await;

        match &result {
            Ok(()) => self.status.succeed(REGISTER_SUCCESS),
            Err(err) => self.status.fail("Registration", err, REGISTER_FALLBACK),
        }

        result
    }

    async fn try_register(&self, form: &RegisterForm) -> Result<(), Error> {
        let valid = validate_register(form)?;
        let _submitting = self
            .submitting
            .try_enter()
            .ok_or_else(|| Error::Busy("registration".to_string()))?;
        self.status.loading();

        let dto = RegisterDto {
            username: valid.username,
            password: valid.password,
            email: valid.email,
        };
        let created = UserApi::new(&self.api).register(&dto).await?;

        match created {
            Some(user) => tracing::info!("Registered user {} ({})", user.username, user.id),
            None => tracing::info!("Registered user {}", dto.username),
        }

        Ok(())
    }

    /// Clear the session and the client's token.
    pub fn logout(&self) {
        if let Some(session) = self.sessions.current() {
            tracing::info!("User {} logged out", session.id);
        }

        self.sessions.clear();
        self.api.set_token(None);
        self.status.reset();
    }
}

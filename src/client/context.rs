use healcheck::{
    api::ApiClient,
    config::Config,
    controller::{AdminController, AuthController, DashboardController},
    error::Error,
    session::{SessionStore, WebStorage},
};

/// Shared by every page through the Dioxus context
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub api: ApiClient,
    pub sessions: SessionStore<WebStorage>,
}

/// Contexts built from the same configuration are interchangeable for rendering
impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self, Error> {
        let api = ApiClient::new(&config)?;
        let sessions = SessionStore::new(WebStorage);

        // Authorize the client right away if a previous visit left a session behind
        if let Some(session) = sessions.current() {
            api.set_token(session.token);
        }

        Ok(Self {
            config,
            api,
            sessions,
        })
    }

    pub fn auth(&self) -> AuthController<WebStorage> {
        AuthController::new(self.api.clone(), self.sessions.clone())
    }

    pub fn dashboard(&self) -> DashboardController<WebStorage> {
        DashboardController::new(self.api.clone(), self.sessions.clone(), self.config.clone())
    }

    pub fn admin(&self) -> AdminController<WebStorage> {
        AdminController::new(self.api.clone(), self.sessions.clone(), self.config.clone())
    }
}

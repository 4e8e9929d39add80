//! End-to-end flows across controllers.
//!
//! Each test wires the controllers the way the web client does: one shared `ApiClient` and
//! one session store, with a mock backend standing in for the analysis service.

mod admin_flow;
mod user_flow;

use healcheck::{
    api::{image::ImageFile, ApiClient},
    config::Config,
    controller::{AdminController, AuthController, DashboardController},
    session::{MemoryStorage, SessionStore},
};
use healcheck_test_utils::prelude::*;

/// Controllers sharing one client and one session store, as in the web client.
struct Portal {
    storage: MemoryStorage,
    config: Config,
    api: ApiClient,
}

impl Portal {
    fn new(test: &TestSetup) -> Self {
        Self::with_storage(test, MemoryStorage::new())
    }

    /// A fresh client over existing storage, like reopening the page.
    fn with_storage(test: &TestSetup, storage: MemoryStorage) -> Self {
        let config = Config::new(&test.url());
        let api = ApiClient::new(&config).unwrap();

        Self {
            storage,
            config,
            api,
        }
    }

    fn sessions(&self) -> SessionStore<MemoryStorage> {
        SessionStore::new(self.storage.clone())
    }

    fn auth(&self) -> AuthController<MemoryStorage> {
        AuthController::new(self.api.clone(), self.sessions())
    }

    fn dashboard(&self) -> DashboardController<MemoryStorage> {
        DashboardController::new(self.api.clone(), self.sessions(), self.config.clone())
    }

    fn admin(&self) -> AdminController<MemoryStorage> {
        AdminController::new(self.api.clone(), self.sessions(), self.config.clone())
    }
}

fn jpeg() -> ImageFile {
    ImageFile {
        file_name: "meal.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![b'x'; 2048],
    }
}

use mockito::{Mock, Server, ServerGuard};

use crate::{error::TestError, fixtures::endpoint::Endpoint};

/// A running mock backend and the endpoints registered on it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        Ok(TestSetup {
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL to configure the API client with
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Register an endpoint and return its mock.
    ///
    /// The mock is returned rather than stored so the test can remove it and register a
    /// different response for the same path later on.
    pub async fn create_endpoint(&mut self, endpoint: Endpoint) -> Mock {
        endpoint.mount(&mut self.server).await
    }

    /// Register an endpoint whose mock lives as long as the setup.
    pub async fn add_endpoint(&mut self, endpoint: Endpoint) {
        let mock = self.create_endpoint(endpoint).await;
        self.mocks.push(mock);
    }

    /// Assert all stored mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub async fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert_async().await;
        }
    }
}

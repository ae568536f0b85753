//! Mock Bitbucket API served from a private Tokio runtime.

use std::io;
use std::rc::Rc;

use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wiremock server together with the runtime that drives it.
///
/// The blocking gateway runs on the test thread, outside `block_on`, while
/// the runtime's workers keep answering requests.
#[derive(Clone)]
pub struct MockApi {
    runtime: Rc<Runtime>,
    server: Rc<MockServer>,
}

impl MockApi {
    /// Starts a runtime and a server on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tokio runtime cannot be created.
    pub fn start() -> io::Result<Self> {
        let runtime = Runtime::new()?;
        let server = runtime.block_on(MockServer::start());
        Ok(Self {
            runtime: Rc::new(runtime),
            server: Rc::new(server),
        })
    }

    /// Base URL handed to the gateway.
    pub fn api_base(&self) -> String {
        format!("{}/2.0", self.server.uri())
    }

    /// Answers `GET /2.0/{endpoint}` with `response`.
    pub fn respond(&self, endpoint: &str, response: ResponseTemplate) {
        let mock = Mock::given(method("GET"))
            .and(path(format!("/2.0/{endpoint}")))
            .respond_with(response);
        self.runtime.block_on(mock.mount(&self.server));
    }
}

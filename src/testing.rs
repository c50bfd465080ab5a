// Utilidades compartidas por los tests unitarios

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use url::{Position, Url};

use crate::config::QueryConfig;
use crate::error::HttpError;
use crate::services::api_client::ApiClient;
use crate::services::query_client::{QueryClient, QueryOptions};
use crate::services::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::state::{MemoryTokenStorage, Navigator, Route, SessionStore};

pub const TEST_BASE_URL: &str = "https://api.test";
pub const TEST_TOKEN_KEY: &str = "accessToken";

/// Future que devuelve `Pending` una vez y se despierta a sí mismo
pub struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

pub fn yield_now() -> YieldNow {
    YieldNow(false)
}

type Reply = Result<HttpResponse, HttpError>;

/// Transporte guionizado por método + ruta (con query). La última respuesta
/// de cada ruta se repite indefinidamente.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    calls: RefCell<Vec<HttpRequest>>,
    delay: Cell<bool>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.push(method, path, Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.push(method, path, Err(HttpError::network(message)));
    }

    /// Cede el control una vez antes de responder
    pub fn set_delay(&self, delay: bool) {
        self.delay.set(delay);
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, method: Method, path: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|req| req.method == method && path_of(&req.url) == path)
            .count()
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }
}

fn path_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(url) => url[Position::BeforePath..].to_string(),
        Err(_) => url.to_string(),
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.calls.borrow_mut().push(request.clone());
        if self.delay.get() {
            yield_now().await;
        }

        let path = path_of(&request.url);
        let mut routes = self.routes.borrow_mut();
        match routes.get_mut(&(request.method, path.clone())) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => Ok(HttpResponse {
                status: 404,
                body: serde_json::json!({ "message": format!("No route for {} {}", request.method.as_str(), path) })
                    .to_string(),
            }),
        }
    }
}

/// Navegador en memoria que registra las navegaciones
#[derive(Default)]
pub struct RecordingNavigator {
    routes: RefCell<Vec<Route>>,
    query: RefCell<String>,
    pushed: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: &str) -> Self {
        let navigator = Self::new();
        *navigator.query.borrow_mut() = query.to_string();
        navigator
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }

    pub fn pushed_queries(&self) -> Vec<String> {
        self.pushed.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }

    fn current_query(&self) -> String {
        self.query.borrow().clone()
    }

    fn push_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
        self.pushed.borrow_mut().push(query.to_string());
    }
}

pub struct Harness {
    pub transport: Rc<MockTransport>,
    pub navigator: Rc<RecordingNavigator>,
    pub storage: Rc<MemoryTokenStorage>,
    pub session: SessionStore,
    pub api: ApiClient,
    pub client: QueryClient,
}

pub fn harness() -> Harness {
    harness_with_query("")
}

pub fn harness_with_query(query: &str) -> Harness {
    let transport = Rc::new(MockTransport::new());
    let navigator = Rc::new(RecordingNavigator::with_query(query));
    let storage = Rc::new(MemoryTokenStorage::new());
    let session = SessionStore::new(storage.clone(), navigator.clone(), TEST_TOKEN_KEY);
    let api = ApiClient::new(TEST_BASE_URL, session.clone(), transport.clone());
    let client = QueryClient::new(QueryOptions::from(&QueryConfig::default()));
    Harness {
        transport,
        navigator,
        storage,
        session,
        api,
        client,
    }
}

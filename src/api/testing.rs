//! Scripted transport for tests

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use super::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

type Reply = Result<HttpResponse, TransportError>;

/// Replies per (method, path) in order; the last reply repeats.
/// Unrouted requests fail like a dropped connection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    routes: Rc<RefCell<HashMap<(Method, String), VecDeque<Reply>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, method: Method, path: &str, response: HttpResponse) {
        self.push(method, path, Ok(response));
    }

    pub fn fail(&self, method: Method, path: &str) {
        self.push(method, path, Err(TransportError("connection refused".into())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    /// Body of the n-th sent request, parsed as JSON
    pub fn body_json(&self, index: usize) -> Option<Value> {
        let sent = self.sent.borrow();
        let body = sent.get(index)?.body.as_deref()?;
        serde_json::from_str(body).ok()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.sent
            .borrow()
            .iter()
            .filter(|r| r.method == method && path_of(&r.url) == path)
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

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request.clone());

        let key = (request.method, path_of(&request.url).to_string());
        let mut routes = self.routes.borrow_mut();
        let Some(queue) = routes.get_mut(&key) else {
            return Err(TransportError(format!("no route for {}", request.url)));
        };
        match queue.len() {
            0 => Err(TransportError(format!("no route for {}", request.url))),
            1 => queue[0].clone(),
            _ => queue.pop_front().unwrap_or_else(|| Err(TransportError("empty".into()))),
        }
    }
}

fn path_of(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

pub fn json_response(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        status_text: status_text(status).to_string(),
        content_type: Some("application/json".to_string()),
        body: body.to_string(),
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}

//! In-process transport for exercising the client without a server

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::error::BarberResult;

type Responder = dyn Fn(&HttpRequest) -> BarberResult<HttpResponse> + Send + Sync;

/// Answers every request with a closure and records what was sent
pub(crate) struct FakeTransport {
    responder: Box<Responder>,
    log: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&HttpRequest) -> BarberResult<HttpResponse> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            log: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.log.lock().unwrap().clone()
    }

    /// Number of requests whose URL ends with `suffix`
    pub(crate) fn count(&self, suffix: &str) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url.ends_with(suffix))
            .count()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> BarberResult<HttpResponse> {
        self.log.lock().unwrap().push(request.clone());
        // Let other in-flight requests run, as a real network round trip would
        tokio::task::yield_now().await;
        (self.responder)(&request)
    }
}

pub(crate) fn json(status: u16, value: Value) -> BarberResult<HttpResponse> {
    Ok(HttpResponse::new(status, value.to_string()))
}

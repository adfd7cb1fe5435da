use crate::services::meter_api::status::Status;
use crate::services::meter_api::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::Mutex;

enum Reply {
    Respond(ApiResponse),
    Fail(String),
}

struct Route {
    method: HttpMethod,
    path: String,
    reply: Reply,
}

/// Transport that records every request and answers from registered routes.
/// Requests without a matching route get a 404.
#[derive(Default)]
pub struct RecordingTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn respond(&self, method: HttpMethod, path: &str, response: ApiResponse) {
        self.add_route(method, path, Reply::Respond(response));
    }

    pub fn fail(&self, method: HttpMethod, path: &str, message: &str) {
        self.add_route(method, path, Reply::Fail(message.to_string()));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_with(&self, method: HttpMethod) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.method == method)
            .collect()
    }

    fn add_route(&self, method: HttpMethod, path: &str, reply: Reply) {
        // Newer routes shadow older ones
        self.routes.lock().unwrap().insert(
            0,
            Route {
                method,
                path: path.to_string(),
                reply,
            },
        );
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn request(&self, request: ApiRequest) -> Result<ApiResponse, Status> {
        self.requests.lock().unwrap().push(request.clone());

        let reply = {
            let routes = self.routes.lock().unwrap();
            routes
                .iter()
                .find(|route| route.method == request.method && route.path == request.url.path())
                .map(|route| match &route.reply {
                    Reply::Respond(response) => Ok(response.clone()),
                    Reply::Fail(message) => Err(message.clone()),
                })
        };

        match reply {
            Some(Ok(response)) => response.classify(request.method, &request.url),
            Some(Err(message)) => Err(Status::Transport(anyhow!(message))),
            None => ApiResponse::new(404, "").classify(request.method, &request.url),
        }
    }
}

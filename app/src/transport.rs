//! ureq-backed executor for the core's host-does-IO requests.
//!
//! ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
//! responses come back as data rather than `Err`; status interpretation
//! belongs to the core's `parse_*` methods. Only failures that never
//! produced a response (connect, DNS, read) become `ApiError::Transport`.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};
use tracing::debug;

/// Executes `HttpRequest` values over real HTTP.
#[derive(Debug, Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// One blocking round-trip. Query pairs are attached through ureq so
    /// percent-encoding happens at the wire, not in the core.
    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = ?req.method, path = %req.path, "executing request");

        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => {
                let mut call = self.agent.get(&req.path);
                for (key, value) in &req.query {
                    call = call.query(key, value);
                }
                call.call()
            }
            (HttpMethod::Delete, _) => {
                let mut call = self.agent.delete(&req.path);
                for (key, value) in &req.query {
                    call = call.query(key, value);
                }
                call.call()
            }
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

use crate::error::{ClientError, Result};
use graphpath_core::request::RequestPayload;
use graphpath_core::response::SolveResponse;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/run";

/// Submits request payloads to the remote solver over HTTP.
pub struct SolverClient {
    client: Client,
    endpoint: Url,
}

impl SolverClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_timeout(endpoint, 30)
    }

    pub fn with_timeout(endpoint: &str, timeout_secs: u64) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ClientError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ClientError::InvalidEndpoint(format!(
                "{}: unsupported scheme '{}'",
                endpoint,
                endpoint.scheme()
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("graphpath/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST the payload as JSON and decode the reply.
    ///
    /// Non-2xx replies carry the solver's error body in `ClientError::Rejected`.
    pub async fn solve(&self, payload: &RequestPayload) -> Result<SolveResponse> {
        info!(
            "Submitting {} graph ({} nodes, {} edges) with algo {} to {}",
            payload.mode,
            payload.nodes.len(),
            payload.edges.len(),
            payload.algo,
            self.endpoint
        );

        let start = Instant::now();
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(
            "Solver answered {} in {:?} ({} bytes)",
            status,
            start.elapsed(),
            text.len()
        );

        if !status.is_success() {
            let body = match serde_json::from_str::<Value>(&text) {
                Ok(body) => body,
                Err(_) => Value::String(text),
            };
            warn!("Solver rejected request with status {}", status);
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<SolveResponse>(&text).map_err(|e| ClientError::Decode {
            reason: e.to_string(),
            body: text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphpath_core::builtin::default_graph;
    use graphpath_core::model::Mode;
    use graphpath_core::request::{RunRequest, prepare};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path},
    };

    fn endpoint(server: &MockServer) -> String {
        format!("{}/api/run", server.uri())
    }

    #[tokio::test]
    async fn test_solve_posts_payload_and_decodes_path() {
        let mock_server = MockServer::start().await;
        let payload = RequestPayload::build(Mode::Default, "1", "A", "F", default_graph().clone());

        Mock::given(method("POST"))
            .and(path("/api/run"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::to_value(&payload).unwrap()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "algo": "Dijkstra",
                "path": ["A", "B", "C", "F"],
                "cost": 7.0,
                "image": "iVBORw=="
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SolverClient::new(&endpoint(&mock_server)).unwrap();
        let response = client.solve(&payload).await.unwrap();

        assert_eq!(response.algo.as_deref(), Some("Dijkstra"));
        assert_eq!(
            response.path,
            Some(vec!["A".into(), "B".into(), "C".into(), "F".into()])
        );
        assert_eq!(response.cost, Some(7.0));
        assert_eq!(response.image.as_deref(), Some("iVBORw=="));
    }

    #[tokio::test]
    async fn test_custom_payload_is_sent_verbatim() {
        let mock_server = MockServer::start().await;
        let prepared = prepare(&RunRequest {
            mode: "custom".to_string(),
            algo: "2".to_string(),
            src: "a".to_string(),
            dst: "b".to_string(),
            node_text: Some("a,0,0\nb".to_string()),
            edge_text: Some("a,b,-1".to_string()),
        });

        Mock::given(method("POST"))
            .and(path("/api/run"))
            .and(body_json(json!({
                "mode": "custom",
                "algo": "2",
                "src": "a",
                "dst": "b",
                "nodes": [{"name": "A", "x": 0.0, "y": 0.0}, {"name": "B"}],
                "edges": [{"u": "A", "v": "B", "w": -1.0}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "algo": "Bellman-Ford",
                "negative_cycle": true
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = SolverClient::new(&endpoint(&mock_server)).unwrap();
        let response = client.solve(&prepared.payload).await.unwrap();
        assert!(response.negative_cycle);
        assert!(response.path.is_none());
    }

    #[tokio::test]
    async fn test_structured_error_body_is_returned() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/run"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "Invalid src/dst. Available: ['A', 'B']"
            })))
            .mount(&mock_server)
            .await;

        let client = SolverClient::new(&endpoint(&mock_server)).unwrap();
        let payload = RequestPayload::build(Mode::Default, "1", "Z", "F", default_graph().clone());

        match client.solve(&payload).await {
            Err(ClientError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body["error"], json!("Invalid src/dst. Available: ['A', 'B']"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_plain_text_error_body_is_wrapped() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let client = SolverClient::new(&endpoint(&mock_server)).unwrap();
        let payload = RequestPayload::build(Mode::Default, "1", "A", "F", default_graph().clone());

        match client.solve(&payload).await {
            Err(ClientError::Rejected { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, json!("Internal Server Error"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_decode_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_string(r#"{"algo": "Dijkstra", "path": ["A"], "cost": Infinity}"#),
            )
            .mount(&mock_server)
            .await;

        let client = SolverClient::new(&endpoint(&mock_server)).unwrap();
        let payload = RequestPayload::build(Mode::Default, "1", "A", "F", default_graph().clone());

        match client.solve(&payload).await {
            Err(ClientError::Decode { body, .. }) => assert!(body.contains("Infinity")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_endpoints() {
        assert!(matches!(
            SolverClient::new("not a url"),
            Err(ClientError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            SolverClient::new("ftp://example.com/api/run"),
            Err(ClientError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_default_endpoint_parses() {
        let client = SolverClient::new(DEFAULT_ENDPOINT).unwrap();
        assert_eq!(client.endpoint().path(), "/api/run");
    }
}

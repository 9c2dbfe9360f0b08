//! HTTP side of the waitlist: one POST per submission, one GET for the
//! signup counter.

use crate::config::WaitlistConfig;
use crate::waitlist::{FormId, SubmitOutcome, WaitlistError, WaitlistReceipt};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;

/// The waitlist backend as seen by the UI.
#[async_trait]
pub trait WaitlistClient: Send + Sync {
    /// Send `email` exactly once on behalf of `form`. No retries.
    async fn submit(&self, form: FormId, email: &str) -> SubmitOutcome;

    /// Number of addresses currently on the waitlist.
    async fn count(&self) -> std::result::Result<u64, WaitlistError>;
}

pub struct HttpWaitlistClient {
    http: reqwest::Client,
    submit_url: Url,
    count_url: Url,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

impl HttpWaitlistClient {
    pub fn new(config: &WaitlistConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid waitlist base_url '{}'", config.base_url))?;
        let submit_url = base
            .join(&config.submit_path)
            .with_context(|| format!("Invalid submit_path '{}'", config.submit_path))?;
        let count_url = base
            .join(&config.count_path)
            .with_context(|| format!("Invalid count_path '{}'", config.count_path))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("launchpad/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if is_loopback(&base) {
            builder = builder.no_proxy();
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            submit_url,
            count_url,
        })
    }

    pub fn submit_url(&self) -> &Url {
        &self.submit_url
    }
}

#[async_trait]
impl WaitlistClient for HttpWaitlistClient {
    async fn submit(&self, form: FormId, email: &str) -> SubmitOutcome {
        tracing::info!(url = %self.submit_url, form = form.name(), "submitting waitlist signup");
        let response = self
            .http
            .post(self.submit_url.clone())
            .form(&[("email", email)])
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        classify_response(form, status, &body)
    }

    async fn count(&self) -> std::result::Result<u64, WaitlistError> {
        let response = self.http.get(self.count_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WaitlistError::RequestFailed {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await?;
        let parsed: CountResponse = serde_json::from_slice(&body)
            .map_err(|e| WaitlistError::InvalidResponse(e.to_string()))?;
        Ok(parsed.count)
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_matches(|c| c == '[' || c == ']')
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false),
        None => false,
    }
}

/// Map a submission response onto the form outcome.
///
/// For forms that read the reply, 2xx needs a JSON body to count as success;
/// other forms accept any 2xx and keep whatever receipt fields parse. 409
/// means the address is already listed whatever the body says; anything else
/// is a failure.
pub fn classify_response(form: FormId, status: StatusCode, body: &[u8]) -> SubmitOutcome {
    if status.is_success() {
        return match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) => Ok(WaitlistReceipt::from_json(&value)),
            Err(e) if form.reads_reply() => Err(WaitlistError::InvalidResponse(e.to_string())),
            Err(_) => Ok(WaitlistReceipt::default()),
        };
    }
    if status == StatusCode::CONFLICT {
        return Err(WaitlistError::DuplicateEmail);
    }
    Err(WaitlistError::RequestFailed {
        status: status.as_u16(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    fn config_for(base_url: &str) -> WaitlistConfig {
        WaitlistConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: Some(5),
            ..WaitlistConfig::default()
        }
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + len {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Answer exactly one request with `status` and `body`, handing back the
    /// raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{}", addr), handle)
    }

    #[test]
    fn test_classify_success_with_json() {
        let outcome = classify_response(FormId::Main, StatusCode::OK, br#"{"ok":true}"#);
        assert_eq!(outcome, Ok(WaitlistReceipt::default()));

        let outcome = classify_response(
            FormId::Main,
            StatusCode::CREATED,
            br#"{"success":true,"message":"You have been successfully waitlisted!","email":"ada@example.com","id":7}"#,
        )
        .unwrap();
        assert_eq!(outcome.id, Some(7));
        assert_eq!(outcome.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_main_form_needs_json_reply() {
        let outcome = classify_response(FormId::Main, StatusCode::OK, b"<html>ok</html>");
        assert!(matches!(outcome, Err(WaitlistError::InvalidResponse(_))));
        let outcome = classify_response(FormId::Main, StatusCode::NO_CONTENT, b"");
        assert!(matches!(outcome, Err(WaitlistError::InvalidResponse(_))));
    }

    #[test]
    fn test_hero_form_accepts_any_success_reply() {
        assert_eq!(
            classify_response(FormId::Hero, StatusCode::NO_CONTENT, b""),
            Ok(WaitlistReceipt::default())
        );
        assert_eq!(
            classify_response(FormId::Hero, StatusCode::OK, b"<html>ok</html>"),
            Ok(WaitlistReceipt::default())
        );
        let receipt = classify_response(FormId::Hero, StatusCode::CREATED, br#"{"id":3}"#).unwrap();
        assert_eq!(receipt.id, Some(3));
    }

    #[test]
    fn test_classify_conflict_ignores_body() {
        assert_eq!(
            classify_response(FormId::Main, StatusCode::CONFLICT, b""),
            Err(WaitlistError::DuplicateEmail)
        );
        assert_eq!(
            classify_response(
                FormId::Hero,
                StatusCode::CONFLICT,
                br#"{"detail":"This email has already been waitlisted"}"#
            ),
            Err(WaitlistError::DuplicateEmail)
        );
    }

    #[test]
    fn test_classify_other_statuses_fail() {
        for code in [400u16, 404, 422, 500, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            assert_eq!(
                classify_response(FormId::Main, status, br#"{"detail":"nope"}"#),
                Err(WaitlistError::RequestFailed { status: code })
            );
        }
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(HttpWaitlistClient::new(&config_for("not a url")).is_err());
    }

    #[test]
    fn test_joins_paths_onto_base() {
        let client = HttpWaitlistClient::new(&config_for("http://localhost:8000")).unwrap();
        assert_eq!(client.submit_url().as_str(), "http://localhost:8000/api/waitlist");
    }

    #[tokio::test]
    async fn test_submit_posts_form_encoded_email() {
        let (base, server) = serve_once("200 OK", r#"{"ok":true}"#).await;
        let client = HttpWaitlistClient::new(&config_for(&base)).unwrap();

        let outcome = client.submit(FormId::Main, "ada@example.com").await;
        assert_eq!(outcome, Ok(WaitlistReceipt::default()));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/waitlist HTTP/1.1\r\n"));
        assert!(request
            .to_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.ends_with("\r\n\r\nemail=ada%40example.com"));
    }

    #[tokio::test]
    async fn test_submit_conflict_is_duplicate() {
        let (base, server) = serve_once(
            "409 Conflict",
            r#"{"detail":"This email has already been waitlisted"}"#,
        )
        .await;
        let client = HttpWaitlistClient::new(&config_for(&base)).unwrap();
        assert_eq!(
            client.submit(FormId::Main, "ada@example.com").await,
            Err(WaitlistError::DuplicateEmail)
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_server_error() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;
        let client = HttpWaitlistClient::new(&config_for(&base)).unwrap();
        assert_eq!(
            client.submit(FormId::Main, "ada@example.com").await,
            Err(WaitlistError::RequestFailed { status: 500 })
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_submit_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpWaitlistClient::new(&config_for(&format!("http://{}", addr))).unwrap();
        let outcome = client.submit(FormId::Main, "ada@example.com").await;
        assert!(matches!(outcome, Err(WaitlistError::NetworkUnavailable(_))));
    }

    #[tokio::test]
    async fn test_submit_timeout_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            // hold the connection open without answering
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);
        });

        let config = WaitlistConfig {
            request_timeout_secs: Some(1),
            ..config_for(&format!("http://{}", addr))
        };
        let client = HttpWaitlistClient::new(&config).unwrap();
        let outcome = client.submit(FormId::Main, "ada@example.com").await;
        assert!(matches!(outcome, Err(WaitlistError::NetworkUnavailable(_))));
        server.abort();
    }

    #[tokio::test]
    async fn test_count_parses_body() {
        let (base, server) = serve_once("200 OK", r#"{"count":1234}"#).await;
        let client = HttpWaitlistClient::new(&config_for(&base)).unwrap();
        assert_eq!(client.count().await, Ok(1234));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/waitlist/count HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_count_failure_status() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"detail":"db down"}"#).await;
        let client = HttpWaitlistClient::new(&config_for(&base)).unwrap();
        assert_eq!(
            client.count().await,
            Err(WaitlistError::RequestFailed { status: 500 })
        );
        server.await.unwrap();
    }
}

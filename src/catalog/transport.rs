use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{catalog::error::CatalogError, config::CatalogConfig};

/// Performs the single outbound read behind every catalog query.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, CatalogError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, CatalogError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        sync::oneshot,
    };

    /// Answers a single request on a local port with `response` and hands
    /// back the request head it saw.
    async fn serve_once(response: &'static str) -> (Url, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (seen_tx, seen_rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let _ = seen_tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());

            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        let url = Url::parse(&format!("http://{addr}/chart/0/tracks?limit=20")).unwrap();
        (url, seen_rx)
    }

    fn transport() -> HttpTransport {
        HttpTransport::new(&CatalogConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn returns_the_body_of_a_successful_response() {
        let (url, seen) = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 11\r\nconnection: close\r\n\r\n{\"data\":[]}",
        )
        .await;

        let body = transport().get(&url).await.unwrap();
        assert_eq!(body, br#"{"data":[]}"#);

        let request = seen.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /chart/0/tracks?limit=20 "));
        assert!(request.contains("user-agent: tunepeek/"));
    }

    #[tokio::test]
    async fn non_success_status_becomes_a_status_error() {
        let (url, _seen) = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;

        let err = transport().get(&url).await.unwrap_err();
        assert!(matches!(err, CatalogError::Status(503)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/search")).unwrap();
        let err = transport().get(&url).await.unwrap_err();
        assert!(matches!(err, CatalogError::Network(_)));
    }
}

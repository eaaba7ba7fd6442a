use async_trait::async_trait;
use reqwest::Client;

use super::Transport;

/// [`Transport`] backed by a reqwest [`Client`].
#[derive(Clone)]
pub struct ClientTransport {
    client: Client,
}

impl ClientTransport {
    /// Wraps the given reqwest client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ClientTransport {
    async fn execute(
        &self,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, reqwest::Error> {
        self.client.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_execute_performs_the_exchange() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .with_status(200)
            .with_body("pong")
            .create_async()
            .await;

        let transport = ClientTransport::new(Client::new());
        let url = format!("{}/ping", server.url()).parse().unwrap();
        let request = reqwest::Request::new(reqwest::Method::GET, url);

        let response = transport.execute(request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.bytes().await.unwrap().as_ref(), b"pong");
    }
}

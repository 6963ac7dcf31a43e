use crate::{
    config::ClientConfig,
    responses::{decode_body, ClientResult},
    Result,
};

use futures::future::BoxFuture;

pub static AUTHOR_NOT_FOUND: &str = "Author not found";

/// Performs a single GET. Implemented by [`ReqwestClient`]; swap in another
/// implementation through [`Client::with_transport`].
pub trait HttpClient: Send + Sync {
    fn request(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>>;
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        let inner = reqwest::Client::builder().build()?;
        Ok(Self { inner })
    }
}

impl HttpClient for ReqwestClient {
    fn request(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        Box::pin(async move {
            let response = self.inner.get(&request.url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Async client for the book catalog API.
pub struct Client<H: HttpClient = ReqwestClient> {
    base_url: String,
    transport: H,
}

impl Client<ReqwestClient> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(config, ReqwestClient::new()?))
    }
}

impl<H: HttpClient> Client<H> {
    pub fn with_transport(config: ClientConfig, transport: H) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_all_books(&self) -> ClientResult {
        self.get("/").await
    }

    pub async fn get_books_by_isbn(&self, isbn: &str) -> ClientResult {
        let path = format!("/isbn/{}", urlencoding::encode(isbn));
        self.get(&path).await
    }

    /// A 404 from the service is reported as "Author not found" regardless of
    /// the body's message.
    pub async fn get_books_by_author(&self, author: &str) -> ClientResult {
        let path = format!("/author/{}", urlencoding::encode(author));
        match self.get(&path).await {
            ClientResult::Failure {
                status: 404, data, ..
            } => ClientResult::failure(404, AUTHOR_NOT_FOUND, data),
            other => other,
        }
    }

    pub async fn get_books_by_title(&self, title: &str) -> ClientResult {
        let path = format!("/title/{}", urlencoding::encode(title));
        self.get(&path).await
    }

    async fn get(&self, path: &str) -> ClientResult {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "GET");

        match self.transport.request(HttpRequest { url }).await {
            Ok(response) => self.handle_response(response),
            Err(err) => {
                let result = ClientResult::from_transport_error(&err);
                tracing::warn!(error = %err, "request failed without a response");
                result
            }
        }
    }

    fn handle_response(&self, response: HttpResponse) -> ClientResult {
        let status = response.status;
        let data = decode_body(&response.body);
        if (200..300).contains(&status) {
            tracing::debug!(status, "request succeeded");
            ClientResult::success(status, data)
        } else {
            let result = ClientResult::from_error_response(status, data);
            tracing::warn!(
                status,
                error = result.error().unwrap_or_default(),
                "request failed"
            );
            result
        }
    }
}

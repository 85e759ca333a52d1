use crate::models::{Entry, MessageResponse};
use reqwest::{Client, Response, StatusCode, Url};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server rejected request ({status}): {msg}")]
    Rejected { status: u16, msg: String },
}

/// The five operations of the entry HTTP API, as seen from a client.
pub trait EntryApi {
    fn list(&self) -> impl Future<Output = Result<Vec<Entry>, ClientError>> + Send;

    fn get(&self, id: &str) -> impl Future<Output = Result<Entry, ClientError>> + Send;

    fn create(&self, entry: &Entry) -> impl Future<Output = Result<Entry, ClientError>> + Send;

    fn update(
        &self,
        id: &str,
        entry: &Entry,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    fn delete(&self, id: &str) -> impl Future<Output = Result<(), ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpEntryApi {
    base_url: Url,
    client: Client,
}

impl HttpEntryApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { base_url, client })
    }

    /// Appends path segments to the base url; ids are percent-encoded as single segments.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl EntryApi for HttpEntryApi {
    async fn list(&self) -> Result<Vec<Entry>, ClientError> {
        let response = self.client.get(self.url(&["get", ""])?).send().await?;
        Ok(accept(response).await?.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Entry, ClientError> {
        let response = self.client.get(self.url(&["get", id])?).send().await?;
        Ok(accept(response).await?.json().await?)
    }

    async fn create(&self, entry: &Entry) -> Result<Entry, ClientError> {
        let response = self
            .client
            .post(self.url(&["create", ""])?)
            .json(entry)
            .send()
            .await?;
        Ok(accept(response).await?.json().await?)
    }

    async fn update(&self, id: &str, entry: &Entry) -> Result<(), ClientError> {
        let response = self
            .client
            .put(self.url(&["update", id])?)
            .json(entry)
            .send()
            .await?;
        accept(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let response = self.client.delete(self.url(&["delete", id])?).send().await?;
        accept(response).await?;
        Ok(())
    }
}

/// Passes a 200 response through; anything else becomes `ClientError::Rejected`.
async fn accept(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    let msg = match response.json::<MessageResponse>().await {
        Ok(body) => body.msg,
        Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
    };
    Err(ClientError::Rejected {
        status: status.as_u16(),
        msg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_keep_trailing_slash_and_encode_ids() {
        let api = HttpEntryApi::new("http://127.0.0.1:3001").unwrap();
        assert_eq!(
            api.url(&["get", ""]).unwrap().as_str(),
            "http://127.0.0.1:3001/get/"
        );
        assert_eq!(
            api.url(&["delete", "a b/c"]).unwrap().as_str(),
            "http://127.0.0.1:3001/delete/a%20b%2Fc"
        );
    }

    #[test]
    fn urls_extend_a_base_path() {
        let api = HttpEntryApi::new("http://localhost/journal/").unwrap();
        assert_eq!(
            api.url(&["update", "1"]).unwrap().as_str(),
            "http://localhost/journal/update/1"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            HttpEntryApi::new("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpEntryApi::new("mailto:someone@example.com"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }
}

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::types::{Error, Result};

/// Issues a GET request and returns the decoded JSON body.
/// A connection failure and a non-success status are reported as different errors.
#[async_trait]
pub trait Transport {
    async fn get_json(&self, url: &Url, headers: &HeaderMap) -> Result<Value>;
}

#[async_trait]
impl Transport for Client {
    async fn get_json(&self, url: &Url, headers: &HeaderMap) -> Result<Value> {
        log::debug!("GET {}", url);
        let resp = self
            .get(url.clone())
            .headers(headers.clone())
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await;
            log::error!(
                "Request not successful, status code: {}, url: {}, body: {:?}",
                status,
                url,
                error_body,
            );
            return Err(Error::RequestNotOk {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }
}

use anyhow::{Context, Error};
use lazy_static::lazy_static;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use reqwest_tracing::TracingMiddleware;
use std::collections::HashMap;
use thiserror::Error as ThisError;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;
use url::Url;

lazy_static! {
    // No idle connections: a pooled connection stays bound to the runtime that opened it.
    static ref CLIENT: ClientWithMiddleware = {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        ClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .build()
    };
}

pub struct HttpClient;

#[derive(ThisError, Debug)]
pub enum HttpClientError {
    #[error(transparent)]
    ResponseError(#[from] Error),
    #[error("httpBuilderError {0}")]
    HTTPBuilderError(String),
    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("failed to deserialize response: {0}")]
    DeserializationError(String),
}

struct HeadersMapGenerator(HeaderMap);

impl HeadersMapGenerator {
    fn into_inner(self) -> HeaderMap {
        self.0
    }
}

impl TryFrom<HashMap<&'static str, String>> for HeadersMapGenerator {
    type Error = HttpClientError;

    fn try_from(value: HashMap<&'static str, String>) -> Result<Self, Self::Error> {
        let mut header_map = HeaderMap::new();

        for (key, value) in value.into_iter() {
            let value = HeaderValue::from_str(&value)
                .map_err(|err| HttpClientError::HTTPBuilderError(format!("{err} {value}")))?;
            header_map.insert(key, value);
        }
        Ok(Self(header_map))
    }
}

impl HttpClient {
    /// GETs `url` and decodes the body as `DTO`. Only a `200 OK` is accepted;
    /// the body is not read for any other status.
    #[tracing::instrument(err, skip(headers), level = "debug")]
    pub async fn get_json_with_headers<DTO: DeserializeOwned>(
        url: Url,
        headers: HashMap<&'static str, String>,
    ) -> Result<DTO, HttpClientError> {
        let header_map = HeadersMapGenerator::try_from(headers)?.into_inner();
        let response = CLIENT
            .get(url.clone())
            .headers(header_map)
            .send()
            .await
            .with_context(|| format!("Failed to fetch request from {url}"))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(HttpClientError::UnexpectedStatus(status));
        }

        let body = response
            .bytes()
            .await
            .context("Failed to get bytes response")?;
        serde_json::from_slice::<DTO>(&body)
            .map_err(|err| HttpClientError::DeserializationError(err.to_string()))
    }

    pub fn json_headers() -> HashMap<&'static str, String> {
        HashMap::from([
            ("Content-Type", "application/json".to_string()),
            ("Accept", "application/json".to_string()),
        ])
    }
}

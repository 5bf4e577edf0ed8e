mod mapping;
mod wire;

use crate::wire::{ResponseContainer, ShiftsDay};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use entities::errors::{DecodeError, NetworkError, ShiftsError};
use entities::shifts::Shift;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use shared_kernel::http_client::{HttpClient, HttpClientError};
use url::Url;
use use_cases::shifts_api::{ShiftsApi, ShiftsQuery};

/// Everything but RFC 3986 unreserved characters, so a space is `%20`, never `+`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub const AVAILABLE_SHIFTS_PATH: &str = "/api/v2/available_shifts";

/// Only the first 15 shifts of a response are kept, however many the server
/// sends. The endpoint has no page size parameter.
pub const MAX_RECORDS_PER_FETCH: usize = 15;

#[derive(Clone, Debug)]
pub struct AvailableShiftsConfig {
    pub host: Url,
    /// Sends the radius under the `end` key, the way older clients did.
    pub legacy_radius_key: bool,
}

pub struct AvailableShiftsClient {
    config: AvailableShiftsConfig,
}

impl AvailableShiftsClient {
    pub fn new(config: AvailableShiftsConfig) -> Self {
        Self { config }
    }

    pub fn request_url(&self, query: &ShiftsQuery) -> Result<Url, ShiftsError> {
        let mut url = self
            .config
            .host
            .join(AVAILABLE_SHIFTS_PATH)
            .map_err(|err| NetworkError::Transport(format!("invalid shifts url: {err}")))?;

        let window_start = iso8601(query.window.from);
        let window_end = iso8601(query.window.to);
        let radius = query.radius.map(|radius| radius.to_string());
        let mut pairs = vec![
            ("type", query.response_type.as_query_value()),
            ("start", window_start.as_str()),
            ("end", window_end.as_str()),
            ("address", query.address.as_ref()),
        ];
        if let Some(radius) = radius.as_deref() {
            let key = if self.config.legacy_radius_key {
                "end"
            } else {
                "radius"
            };
            pairs.push((key, radius));
        }

        let encoded = pairs
            .into_iter()
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&encoded));

        Ok(url)
    }
}

fn iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn to_shifts_error(error: HttpClientError) -> ShiftsError {
    match error {
        HttpClientError::UnexpectedStatus(status) => {
            NetworkError::BadResponse(status.as_u16()).into()
        }
        HttpClientError::DeserializationError(reason) => DecodeError::MalformedJson(reason).into(),
        HttpClientError::ResponseError(err) => NetworkError::Transport(format!("{err:#}")).into(),
        HttpClientError::HTTPBuilderError(reason) => NetworkError::Transport(reason).into(),
    }
}

#[async_trait]
impl ShiftsApi for AvailableShiftsClient {
    #[tracing::instrument(err, skip(self), level = "info")]
    async fn fetch_shifts(&self, query: ShiftsQuery) -> Result<Vec<Shift>, ShiftsError> {
        let url = self.request_url(&query)?;
        let response = HttpClient::get_json_with_headers::<ResponseContainer<Vec<ShiftsDay>>>(
            url,
            HttpClient::json_headers(),
        )
        .await
        .map_err(to_shifts_error)?;

        let mut shifts = response
            .data
            .into_iter()
            .flat_map(|day| {
                tracing::trace!(date = %day.date, count = day.shifts.len(), "decoding day");
                day.shifts
            })
            .map(Shift::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        shifts.truncate(MAX_RECORDS_PER_FETCH);
        Ok(shifts)
    }
}

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use geupsik_common::config::Config;
use geupsik_common::error::ApiError;

use super::envelope;

const RESPONSE_TYPE: &str = "json";
const PAGE_INDEX: &str = "1";
const PAGE_SIZE: &str = "100";

/// The NEIS hub services this crate talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SchoolInfo,
    MealServiceDietInfo,
}

impl Endpoint {
    /// Path segment under the hub root. Also the key of the envelope section.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::SchoolInfo => "schoolInfo",
            Endpoint::MealServiceDietInfo => "mealServiceDietInfo",
        }
    }
}

/// Thin wrapper over a `reqwest` client that knows the NEIS request conventions.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Clone)]
pub struct NeisClient {
    http: Client,
    config: Config,
}

impl NeisClient {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let http: Client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Issues one GET against `endpoint` and decodes its row list.
    ///
    /// `filters` are appended after the access key and paging parameters.
    pub async fn fetch_rows<R>(
        &self,
        endpoint: Endpoint,
        filters: &[(&str, &str)],
    ) -> Result<Vec<R>, ApiError>
    where
        R: DeserializeOwned,
    {
        let url: String = format!("{}/{}", self.config.base_url, endpoint.name());
        debug!(endpoint = endpoint.name(), ?filters, "querying NEIS");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("KEY", self.config.api_key()),
                ("Type", RESPONSE_TYPE),
                ("pIndex", PAGE_INDEX),
                ("pSize", PAGE_SIZE),
            ])
            .query(filters)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.without_url().to_string()))?;

        let status: u16 = response.status().as_u16();
        if let Err(e) = check_status(status) {
            debug!(endpoint = endpoint.name(), status, "non-success status");
            return Err(e);
        }

        let body: String = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.without_url().to_string()))?;

        let rows: Vec<R> = envelope::decode_rows(&body, endpoint.name())?;
        trace!(endpoint = endpoint.name(), rows = rows.len(), "decoded rows");
        Ok(rows)
    }
}

/// NEIS only ever answers data with 200; anything else is a failed exchange.
fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200 => Ok(()),
        _ => Err(ApiError::Status(status)),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

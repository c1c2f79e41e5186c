use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use geupsik_common::error::ApiError;
use geupsik_common::models::{LookupResult, SchoolIdentity, SchoolListing};
use geupsik_common::ports::SchoolResolver;

use super::client::{Endpoint, NeisClient};

/// One `schoolInfo` row. Only the columns we use are decoded.
#[derive(Debug, Deserialize)]
struct SchoolRow {
    #[serde(rename = "ATPT_OFCDC_SC_CODE")]
    office_code: String,
    #[serde(rename = "SD_SCHUL_CODE")]
    school_code: String,
    #[serde(rename = "SCHUL_NM")]
    name: String,
    #[serde(rename = "LCTN_SC_NM", default)]
    region: Option<String>,
    #[serde(rename = "SCHUL_KND_SC_NM", default)]
    kind: Option<String>,
}

impl SchoolRow {
    fn into_identity(self) -> SchoolIdentity {
        SchoolIdentity::new(self.office_code, self.school_code, self.name)
    }

    fn into_listing(self) -> SchoolListing {
        let SchoolRow {
            office_code,
            school_code,
            name,
            region,
            kind,
        } = self;
        SchoolListing {
            identity: SchoolIdentity::new(office_code, school_code, name),
            region,
            kind,
        }
    }
}

/// [`SchoolResolver`] backed by the NEIS `schoolInfo` service.
pub struct NeisSchoolResolver {
    client: NeisClient,
}

impl NeisSchoolResolver {
    pub fn new(client: NeisClient) -> Self {
        Self { client }
    }

    async fn query(&self, name: &str) -> Result<Vec<SchoolRow>, ApiError> {
        self.client
            .fetch_rows(Endpoint::SchoolInfo, &[("SCHUL_NM", name)])
            .await
    }
}

#[async_trait]
impl SchoolResolver for NeisSchoolResolver {
    async fn resolve(&self, name: &str) -> LookupResult {
        match self.query(name).await {
            Ok(rows) => {
                if rows.len() > 1 {
                    debug!(name, matches = rows.len(), "several schools match, taking the first");
                }
                LookupResult::from_first(rows.into_iter().map(SchoolRow::into_identity))
            }
            Err(e) => LookupResult::ApiError(e),
        }
    }

    async fn search(&self, name: &str) -> Result<Vec<SchoolListing>, ApiError> {
        let rows: Vec<SchoolRow> = self.query(name).await?;
        Ok(rows.into_iter().map(SchoolRow::into_listing).collect())
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

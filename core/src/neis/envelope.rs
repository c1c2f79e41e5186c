//! # NEIS Response Envelope
//!
//! Every hub service answers with the same wrapper:
//!
//! ```json
//! {"schoolInfo": [
//!     {"head": [{"list_total_count": 1}, {"RESULT": {"CODE": "INFO-000", "MESSAGE": "..."}}]},
//!     {"row": [ ... ]}
//! ]}
//! ```
//!
//! When nothing matches, the section is missing and only a top-level
//! `{"RESULT": {"CODE": "INFO-200", ...}}` comes back.
//!
//! Decoding is strict: any shape other than these becomes [`ApiError::Malformed`].

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::trace;

use geupsik_common::error::ApiError;

const RESULT_KEY: &str = "RESULT";
/// 정상 처리되었습니다.
const CODE_SUCCESS: &str = "INFO-000";
/// 해당하는 데이터가 없습니다.
const CODE_NO_DATA: &str = "INFO-200";

#[derive(Debug, Deserialize)]
struct ServiceResult {
    #[serde(rename = "CODE")]
    code: String,
    #[serde(rename = "MESSAGE", default)]
    message: String,
}

impl ServiceResult {
    fn into_error(self) -> ApiError {
        ApiError::Service {
            code: self.code,
            message: self.message,
        }
    }
}

#[derive(Debug, Deserialize)]
struct HeadEntry {
    list_total_count: Option<u64>,
    #[serde(rename = "RESULT")]
    result: Option<ServiceResult>,
}

#[derive(Debug, Deserialize)]
struct Block<R> {
    head: Option<Vec<HeadEntry>>,
    row: Option<Vec<R>>,
}

/// Decodes the row list of `section` out of a raw response.
///
/// Returns an empty list for the service's "no data" answer.
pub fn decode_rows<R>(body: &str, section: &str) -> Result<Vec<R>, ApiError>
where
    R: DeserializeOwned,
{
    let mut root: Map<String, Value> = serde_json::from_str(body)
        .map_err(|e| ApiError::Malformed(format!("body is not a JSON object: {e}")))?;

    if let Some(section_value) = root.remove(section) {
        let blocks: Vec<Block<R>> = serde_json::from_value(section_value)
            .map_err(|e| ApiError::Malformed(format!("unexpected `{section}` layout: {e}")))?;
        return rows_from_blocks(section, blocks);
    }

    if let Some(result_value) = root.remove(RESULT_KEY) {
        let result: ServiceResult = serde_json::from_value(result_value)
            .map_err(|e| ApiError::Malformed(format!("unexpected `{RESULT_KEY}` layout: {e}")))?;
        return match result.code.as_str() {
            CODE_NO_DATA => Ok(Vec::new()),
            _ => Err(result.into_error()),
        };
    }

    Err(ApiError::Malformed(format!("missing `{section}` section")))
}

fn rows_from_blocks<R>(section: &str, blocks: Vec<Block<R>>) -> Result<Vec<R>, ApiError> {
    let mut blocks = blocks.into_iter();

    let head: Vec<HeadEntry> = blocks
        .next()
        .and_then(|block| block.head)
        .unwrap_or_default();

    for entry in head {
        if let Some(count) = entry.list_total_count {
            trace!(section, count, "envelope reports total count");
        }
        if let Some(result) = entry.result {
            match result.code.as_str() {
                CODE_SUCCESS => {}
                CODE_NO_DATA => return Ok(Vec::new()),
                _ => return Err(result.into_error()),
            }
        }
    }

    blocks
        .next()
        .and_then(|block| block.row)
        .ok_or_else(|| ApiError::Malformed(format!("`{section}` has no row list")))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

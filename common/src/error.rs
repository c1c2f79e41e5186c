//! # Error Model
//!
//! Typed failures shared by every layer.
//!
//! * [`ApiError`]: anything that went wrong talking to the NEIS service.
//! * [`ConfigError`]: the process environment cannot produce a usable [`crate::config::Config`].
//! * [`LookupError`]: the terminal outcome of a failed lookup, as shown to the user.
//!
//! None of these are retried; each one ends the current request.

use thiserror::Error;

use crate::models::date::MealDate;

/// A failed exchange with the remote service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, timeout, connection reset).
    #[error("request failed: {0}")]
    Transport(String),

    /// The service answered with a non-200 HTTP status.
    #[error("service responded with HTTP {0}")]
    Status(u16),

    /// The body did not have the shape we decode.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The envelope carried a result code other than success or "no data".
    #[error("service error {code}: {message}")]
    Service { code: String, message: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("NEIS_API_KEY is not set; export your NEIS open API key before running a lookup")]
    MissingApiKey,

    #[error("invalid NEIS_TIMEOUT_SECS value '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("school name must not be empty")]
    EmptyName,

    #[error("학교 정보를 찾을 수 없습니다. 정확한 학교명을 입력해주세요. ('{name}')")]
    SchoolNotFound { name: String },

    #[error("{school}: 급식 정보가 없습니다 ({})", .date.korean_label())]
    NoMealToday { school: String, date: MealDate },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl LookupError {
    /// `true` for outcomes that are a notice rather than a failure.
    pub fn is_notice(&self) -> bool {
        matches!(self, LookupError::NoMealToday { .. })
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

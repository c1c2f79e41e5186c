use std::fmt::{self, Display};

use serde::Serialize;

use crate::error::ApiError;

/// A school as NEIS addresses it: the education office plus the school within it.
///
/// Fields are private so an identity cannot be edited after the directory
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SchoolIdentity {
    education_office_code: String,
    school_code: String,
    canonical_name: String,
}

impl SchoolIdentity {
    pub fn new(
        education_office_code: impl Into<String>,
        school_code: impl Into<String>,
        canonical_name: impl Into<String>,
    ) -> Self {
        Self {
            education_office_code: education_office_code.into(),
            school_code: school_code.into(),
            canonical_name: canonical_name.into(),
        }
    }

    /// `ATPT_OFCDC_SC_CODE`
    pub fn education_office_code(&self) -> &str {
        &self.education_office_code
    }

    /// `SD_SCHUL_CODE`
    pub fn school_code(&self) -> &str {
        &self.school_code
    }

    /// `SCHUL_NM`
    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }
}

impl Display for SchoolIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{})",
            self.canonical_name, self.education_office_code, self.school_code
        )
    }
}

/// One row of a school-directory search, with the context needed to tell
/// same-named schools apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolListing {
    pub identity: SchoolIdentity,
    /// `LCTN_SC_NM`, e.g. "서울특별시"
    pub region: Option<String>,
    /// `SCHUL_KND_SC_NM`, e.g. "고등학교"
    pub kind: Option<String>,
}

/// Outcome of resolving a free-text school name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(SchoolIdentity),
    NotFound,
    ApiError(ApiError),
}

impl LookupResult {
    /// Applies the first-match policy to the directory rows, in response order.
    pub fn from_first<I>(identities: I) -> Self
    where
        I: IntoIterator<Item = SchoolIdentity>,
    {
        match identities.into_iter().next() {
            Some(identity) => LookupResult::Found(identity),
            None => LookupResult::NotFound,
        }
    }
}

impl From<ApiError> for LookupResult {
    fn from(err: ApiError) -> Self {
        LookupResult::ApiError(err)
    }
}

//! # Ports
//!
//! The two remote lookups the application depends on, as traits.
//!
//! The NEIS HTTP adapters in `geupsik-core` implement them; tests swap in fakes.
//! Both are single-shot and stateless: one call, one outbound request.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{LookupResult, MealDate, MealQueryResult, SchoolIdentity, SchoolListing};

/// Turns a free-text school name into a [`SchoolIdentity`].
#[async_trait]
pub trait SchoolResolver: Send + Sync {
    /// Resolves `name`, keeping only the first match the directory returns.
    async fn resolve(&self, name: &str) -> LookupResult;

    /// Every school the directory returns for `name`, in response order.
    async fn search(&self, name: &str) -> Result<Vec<SchoolListing>, ApiError>;
}

/// Retrieves what a resolved school serves on a given day.
#[async_trait]
pub trait MealFetcher: Send + Sync {
    async fn fetch_meals(&self, identity: &SchoolIdentity, date: MealDate) -> MealQueryResult;
}

//! # Meal Lookup Service
//!
//! Implements the "what is for lunch today" use case.
//!
//! The service chains the two ports strictly in order: the meal query is only
//! issued with an identity the resolver just produced for the same request.

use tracing::{debug, info_span, Instrument};

use geupsik_common::config::Config;
use geupsik_common::error::LookupError;
use geupsik_common::models::{
    DailyMenu, LookupResult, MealDate, MealQueryResult, SchoolIdentity, SchoolListing,
};
use geupsik_common::ports::{MealFetcher, SchoolResolver};

use crate::neis::{NeisClient, NeisMealFetcher, NeisSchoolResolver};

/// Application service for school meal lookups.
///
/// Orchestrates a lookup by:
/// 1. resolving the school name through the [`SchoolResolver`].
/// 2. fetching that school's meals for the date through the [`MealFetcher`].
pub struct LookupService {
    resolver: Box<dyn SchoolResolver>,
    fetcher: Box<dyn MealFetcher>,
}

impl LookupService {
    pub fn new(resolver: Box<dyn SchoolResolver>, fetcher: Box<dyn MealFetcher>) -> Self {
        Self { resolver, fetcher }
    }

    /// Wires both ports to the NEIS adapters, sharing one HTTP client.
    pub fn neis(config: Config) -> Result<Self, LookupError> {
        let client: NeisClient = NeisClient::new(config)?;
        Ok(Self::new(
            Box::new(NeisSchoolResolver::new(client.clone())),
            Box::new(NeisMealFetcher::new(client)),
        ))
    }

    /// Resolves `name` to a single school using the first-match policy.
    pub async fn resolve_school(&self, name: &str) -> Result<SchoolIdentity, LookupError> {
        let name: &str = validate_name(name)?;

        match self.resolver.resolve(name).await {
            LookupResult::Found(identity) => {
                debug!(%identity, "school resolved");
                Ok(identity)
            }
            LookupResult::NotFound => Err(LookupError::SchoolNotFound {
                name: name.to_string(),
            }),
            LookupResult::ApiError(e) => Err(e.into()),
        }
    }

    /// Runs the full pipeline for `name` on `date`.
    ///
    /// A day without meals is reported as [`LookupError::NoMealToday`].
    pub async fn daily_menu(&self, name: &str, date: MealDate) -> Result<DailyMenu, LookupError> {
        let span = info_span!("lookup", school = name, date = %date);
        self.run_pipeline(name, date).instrument(span).await
    }

    async fn run_pipeline(&self, name: &str, date: MealDate) -> Result<DailyMenu, LookupError> {
        let school: SchoolIdentity = self.resolve_school(name).await?;

        match self.fetcher.fetch_meals(&school, date).await {
            MealQueryResult::Records(meals) => {
                debug!(meals = meals.len(), "meals fetched");
                Ok(DailyMenu { school, date, meals })
            }
            MealQueryResult::Empty => Err(LookupError::NoMealToday {
                school: school.canonical_name().to_string(),
                date,
            }),
            MealQueryResult::ApiError(e) => Err(e.into()),
        }
    }

    /// Every school matching `name`, first one being the one [`Self::daily_menu`] would use.
    pub async fn find_schools(&self, name: &str) -> Result<Vec<SchoolListing>, LookupError> {
        let name: &str = validate_name(name)?;
        let listings: Vec<SchoolListing> = self.resolver.search(name).await?;

        if listings.is_empty() {
            return Err(LookupError::SchoolNotFound {
                name: name.to_string(),
            });
        }
        Ok(listings)
    }
}

fn validate_name(name: &str) -> Result<&str, LookupError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(LookupError::EmptyName);
    }
    Ok(trimmed)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

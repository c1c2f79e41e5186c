//! # Domain Models
//!
//! Plain data shared by the adapters and the front-end. No IO lives here.

pub mod date;
pub mod meal;
pub mod school;

pub use date::MealDate;
pub use meal::{DailyMenu, MealQueryResult, MealRecord, MealType};
pub use school::{LookupResult, SchoolIdentity, SchoolListing};

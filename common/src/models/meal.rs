//! # Meal Model
//!
//! What a school served on a given day.
//!
//! NEIS packs a meal's dishes into one string separated by an HTML
//! `<br/>` marker; [`split_dishes`] turns that into an ordered dish list.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

use crate::error::ApiError;
use crate::models::date::MealDate;
use crate::models::school::SchoolIdentity;

/// Line-break markup embedded in `DDISH_NM`.
pub const LINE_BREAK_MARKER: &str = "<br/>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// Parses the `MMEAL_SC_CODE` column ("1", "2", "3").
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(MealType::Breakfast),
            "2" => Some(MealType::Lunch),
            "3" => Some(MealType::Dinner),
            _ => None,
        }
    }

    /// Label used by NEIS and the school itself.
    pub fn korean_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "조식",
            MealType::Lunch => "중식",
            MealType::Dinner => "석식",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    /// Accepts the NEIS names (`조식`, `중식`, `석식`) and the English names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "조식" => return Ok(MealType::Breakfast),
            "중식" => return Ok(MealType::Lunch),
            "석식" => return Ok(MealType::Dinner),
            _ => {}
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            _ => Err(format!("unknown meal type: {s}")),
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.korean_name())
    }
}

/// One meal service on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealRecord {
    meal_type: MealType,
    dishes: Vec<String>,
}

impl MealRecord {
    pub fn new(meal_type: MealType, dishes: Vec<String>) -> Self {
        Self { meal_type, dishes }
    }

    /// Builds a record from the raw `DDISH_NM` text.
    pub fn from_raw_dishes(meal_type: MealType, raw: &str) -> Self {
        Self::new(meal_type, split_dishes(raw))
    }

    pub fn meal_type(&self) -> MealType {
        self.meal_type
    }

    pub fn dishes(&self) -> &[String] {
        &self.dishes
    }
}

/// Splits a `DDISH_NM` value at every [`LINE_BREAK_MARKER`].
///
/// Text between markers is kept byte for byte and in order.
pub fn split_dishes(raw: &str) -> Vec<String> {
    raw.split(LINE_BREAK_MARKER).map(String::from).collect()
}

/// Outcome of one meal query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealQueryResult {
    Records(Vec<MealRecord>),
    /// Well-formed answer without rows: weekends, holidays, vacations.
    Empty,
    ApiError(ApiError),
}

impl MealQueryResult {
    pub fn from_records(records: Vec<MealRecord>) -> Self {
        if records.is_empty() {
            MealQueryResult::Empty
        } else {
            MealQueryResult::Records(records)
        }
    }
}

impl From<ApiError> for MealQueryResult {
    fn from(err: ApiError) -> Self {
        MealQueryResult::ApiError(err)
    }
}

/// A completed lookup: the resolved school and what it serves on `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyMenu {
    pub school: SchoolIdentity,
    pub date: MealDate,
    pub meals: Vec<MealRecord>,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

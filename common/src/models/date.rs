//! # Meal Date
//!
//! The calendar day a meal query targets. NEIS addresses days as 8-digit
//! `YYYYMMDD` strings, which is both the parse input and the [`Display`] output.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use serde::{Serialize, Serializer};

const WIRE_FORMAT: &str = "%Y%m%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MealDate(NaiveDate);

impl MealDate {
    /// The current day in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// `YYYYMMDD`, as sent in `MLSV_YMD`.
    pub fn to_wire(&self) -> String {
        self.0.format(WIRE_FORMAT).to_string()
    }

    /// `2025년 06월 15일`
    pub fn korean_label(&self) -> String {
        self.0.format("%Y년 %m월 %d일").to_string()
    }
}

impl FromStr for MealDate {
    type Err = String;

    /// Accepts exactly eight ASCII digits forming a valid date, or the keyword `today`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("today") {
            return Ok(Self::today());
        }

        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("invalid date '{s}': expected YYYYMMDD"));
        }

        NaiveDate::parse_from_str(s, WIRE_FORMAT)
            .map(Self)
            .map_err(|e| format!("invalid date '{s}': {e}"))
    }
}

impl Display for MealDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl Serialize for MealDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
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

use crate::terminal::colors;
use colored::*;
use geupsik_common::models::{MealRecord, SchoolListing};

/// `중식 · Lunch`
pub fn meal_title(record: &MealRecord) -> String {
    let meal_type = record.meal_type();
    format!("{} · {}", meal_type.korean_name(), meal_type.english_name())
}

/// Splits the allergy annotation NEIS appends to dish names, e.g. `된장국(5.6.13.)`.
///
/// Only a trailing parenthesised group of digits and dots counts as one.
pub fn split_allergy(dish: &str) -> (&str, Option<&str>) {
    let dish: &str = dish.trim();
    if !dish.ends_with(')') {
        return (dish, None);
    }

    match dish.rfind('(') {
        Some(open) => {
            let codes: &str = &dish[open + 1..dish.len() - 1];
            let is_allergy: bool =
                !codes.is_empty() && codes.chars().all(|c| c.is_ascii_digit() || c == '.');
            if is_allergy {
                (dish[..open].trim_end(), Some(codes))
            } else {
                (dish, None)
            }
        }
        None => (dish, None),
    }
}

pub fn dish_lines(record: &MealRecord) -> Vec<ColoredString> {
    record
        .dishes()
        .iter()
        .filter(|dish| !dish.trim().is_empty())
        .map(|dish| match split_allergy(dish) {
            (name, Some(codes)) => format!(
                "{} {}",
                name.color(colors::TEXT_DEFAULT),
                format!("({codes})").color(colors::MUTED)
            )
            .normal(),
            (name, None) => name.color(colors::TEXT_DEFAULT),
        })
        .collect()
}

pub fn listing_to_details(listing: &SchoolListing) -> Vec<(String, ColoredString)> {
    let mut details: Vec<(String, ColoredString)> = vec![
        (
            "Office".to_string(),
            listing.identity.education_office_code().color(colors::ACCENT),
        ),
        (
            "School".to_string(),
            listing.identity.school_code().color(colors::ACCENT),
        ),
    ];

    if let Some(region) = &listing.region {
        details.push(("Region".to_string(), region.as_str().normal()));
    }

    if let Some(kind) = &listing.kind {
        details.push(("Kind".to_string(), kind.as_str().normal()));
    }

    details
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

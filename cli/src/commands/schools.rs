use colored::*;

use crate::{mprint, terminal::{colors, format, print, spinner::Spinner}};
use geupsik_common::models::SchoolListing;
use geupsik_core::lookup::LookupService;

pub async fn schools(service: &LookupService, name: &str, spinner: bool) -> anyhow::Result<()> {
    let spinner = Spinner::start(format!("'{name}' 학교를 검색하는 중..."), spinner);
    let listings: Vec<SchoolListing> = service.find_schools(name).await?;
    drop(spinner);

    print::header(&format!("{} matches", listings.len()));

    for (idx, listing) in listings.iter().enumerate() {
        let title: String = if idx == 0 {
            format!("{} {}", listing.identity.canonical_name(), "(used by `today`)".color(colors::MUTED))
        } else {
            listing.identity.canonical_name().to_string()
        };
        print::tree_head(idx, &title);
        print::as_tree_one_level(format::listing_to_details(listing));
        if idx + 1 != listings.len() {
            mprint!();
        }
    }

    if listings.len() > 1 {
        mprint!();
        print::warning("Several schools share this name; `today` always uses the first one.");
    }
    Ok(())
}

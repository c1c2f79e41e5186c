use async_trait::async_trait;
use serde::Deserialize;

use geupsik_common::error::ApiError;
use geupsik_common::models::{MealDate, MealQueryResult, MealRecord, MealType, SchoolIdentity};
use geupsik_common::ports::MealFetcher;

use super::client::{Endpoint, NeisClient};

/// One `mealServiceDietInfo` row.
#[derive(Debug, Deserialize)]
struct MealRow {
    #[serde(rename = "MMEAL_SC_NM")]
    meal_name: String,
    #[serde(rename = "MMEAL_SC_CODE", default)]
    meal_code: Option<String>,
    #[serde(rename = "DDISH_NM")]
    dishes: String,
}

impl MealRow {
    fn into_record(self) -> Result<MealRecord, ApiError> {
        let meal_type: MealType = self
            .meal_name
            .parse()
            .ok()
            .or_else(|| self.meal_code.as_deref().and_then(MealType::from_code))
            .ok_or_else(|| ApiError::Malformed(format!("unknown meal type '{}'", self.meal_name)))?;

        Ok(MealRecord::from_raw_dishes(meal_type, &self.dishes))
    }
}

fn to_query_result(rows: Vec<MealRow>) -> MealQueryResult {
    match rows
        .into_iter()
        .map(MealRow::into_record)
        .collect::<Result<Vec<MealRecord>, ApiError>>()
    {
        Ok(records) => MealQueryResult::from_records(records),
        Err(e) => MealQueryResult::ApiError(e),
    }
}

/// [`MealFetcher`] backed by the NEIS `mealServiceDietInfo` service.
pub struct NeisMealFetcher {
    client: NeisClient,
}

impl NeisMealFetcher {
    pub fn new(client: NeisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MealFetcher for NeisMealFetcher {
    async fn fetch_meals(&self, identity: &SchoolIdentity, date: MealDate) -> MealQueryResult {
        let ymd: String = date.to_wire();
        let filters = [
            ("ATPT_OFCDC_SC_CODE", identity.education_office_code()),
            ("SD_SCHUL_CODE", identity.school_code()),
            ("MLSV_YMD", ymd.as_str()),
        ];

        match self
            .client
            .fetch_rows::<MealRow>(Endpoint::MealServiceDietInfo, &filters)
            .await
        {
            Ok(rows) => to_query_result(rows),
            Err(e) => MealQueryResult::ApiError(e),
        }
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

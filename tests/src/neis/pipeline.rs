use geupsik_common::config::Config;
use geupsik_common::error::{ApiError, ConfigError, LookupError};
use geupsik_common::models::{MealDate, MealType};
use geupsik_core::lookup::LookupService;

use crate::utils::StubServer;

const SCHOOL: &str = r#"{"schoolInfo":[{"head":[{"list_total_count":1},{"RESULT":{"CODE":"INFO-000","MESSAGE":"정상 처리되었습니다."}}]},{"row":[{"ATPT_OFCDC_SC_CODE":"B10","SD_SCHUL_CODE":"7010083","SCHUL_NM":"서울고등학교"}]}]}"#;

const MEALS: &str = r#"{"mealServiceDietInfo":[{"head":[{"list_total_count":2},{"RESULT":{"CODE":"INFO-000","MESSAGE":"정상 처리되었습니다."}}]},{"row":[
    {"MMEAL_SC_CODE":"2","MMEAL_SC_NM":"중식","DDISH_NM":"쌀밥 <br/>미역국(5.6.)<br/>배추김치(9.)"},
    {"MMEAL_SC_CODE":"3","MMEAL_SC_NM":"석식","DDISH_NM":"카레라이스<br/>요구르트(2.)"}
]}]}"#;

const NO_DATA: &str = r#"{"RESULT":{"CODE":"INFO-200","MESSAGE":"해당하는 데이터가 없습니다."}}"#;

fn date() -> MealDate {
    "20250616".parse().unwrap()
}

#[tokio::test]
async fn resolves_then_fetches_in_order() {
    let mut stub = StubServer::start(vec![(200, SCHOOL), (200, MEALS)]).await;
    let service = LookupService::neis(stub.config()).unwrap();

    let menu = service.daily_menu("서울고등학교", date()).await.unwrap();

    assert_eq!(menu.school.canonical_name(), "서울고등학교");
    assert_eq!(menu.date, date());
    let types: Vec<MealType> = menu.meals.iter().map(|m| m.meal_type()).collect();
    assert_eq!(types, vec![MealType::Lunch, MealType::Dinner]);
    assert_eq!(menu.meals[0].dishes(), ["쌀밥 ", "미역국(5.6.)", "배추김치(9.)"]);

    assert!(stub.next_request().await.starts_with("/hub/schoolInfo?"));
    let meal_request = stub.next_request().await;
    assert!(meal_request.starts_with("/hub/mealServiceDietInfo?"));
    assert!(meal_request.contains("SD_SCHUL_CODE=7010083"));
    assert!(meal_request.contains("MLSV_YMD=20250616"));
}

#[tokio::test]
async fn unknown_school_stops_after_one_request() {
    // A second queued answer would be served if the meal query ran
    let mut stub = StubServer::start(vec![(200, NO_DATA), (200, MEALS)]).await;
    let service = LookupService::neis(stub.config()).unwrap();

    let err = service.daily_menu("없는학교", date()).await.unwrap_err();
    assert_eq!(err, LookupError::SchoolNotFound { name: "없는학교".into() });

    assert!(stub.next_request().await.starts_with("/hub/schoolInfo?"));
    let pending = tokio::time::timeout(std::time::Duration::from_millis(200), stub.next_request()).await;
    assert!(pending.is_err(), "meal service must not be queried");
}

#[tokio::test]
async fn day_without_meals_is_a_notice() {
    let stub = StubServer::start(vec![(200, SCHOOL), (200, NO_DATA)]).await;
    let service = LookupService::neis(stub.config()).unwrap();

    let err = service.daily_menu("서울고등학교", date()).await.unwrap_err();
    assert!(err.is_notice());
    assert!(matches!(err, LookupError::NoMealToday { ref school, .. } if school == "서울고등학교"));
}

#[tokio::test]
async fn meal_service_outage_is_an_api_error() {
    let stub = StubServer::start(vec![(200, SCHOOL), (502, "")]).await;
    let service = LookupService::neis(stub.config()).unwrap();

    let err = service.daily_menu("서울고등학교", date()).await.unwrap_err();
    assert_eq!(err, LookupError::Api(ApiError::Status(502)));
}

#[test]
fn missing_key_fails_before_any_request() {
    let err = Config::from_lookup(|_| None).unwrap_err();
    assert_eq!(err, ConfigError::MissingApiKey);
    assert_eq!(
        LookupError::from(err).to_string(),
        ConfigError::MissingApiKey.to_string()
    );
}

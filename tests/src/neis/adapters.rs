use geupsik_common::error::ApiError;
use geupsik_common::models::{LookupResult, MealDate, MealQueryResult, MealRecord, MealType, SchoolIdentity};
use geupsik_common::ports::{MealFetcher, SchoolResolver};
use geupsik_core::neis::{NeisClient, NeisMealFetcher, NeisSchoolResolver};

use crate::utils::{unreachable_config, StubServer, TEST_KEY};

const SEOUL_HIGH: &str = r#"{"schoolInfo":[
    {"head":[{"list_total_count":1},{"RESULT":{"CODE":"INFO-000","MESSAGE":"정상 처리되었습니다."}}]},
    {"row":[{"ATPT_OFCDC_SC_CODE":"B10","SD_SCHUL_CODE":"1234","SCHUL_NM":"Seoul High School","LCTN_SC_NM":"서울특별시"}]}
]}"#;

const TWO_SCHOOLS: &str = r#"{"schoolInfo":[
    {"head":[{"list_total_count":2},{"RESULT":{"CODE":"INFO-000","MESSAGE":"정상 처리되었습니다."}}]},
    {"row":[
        {"ATPT_OFCDC_SC_CODE":"B10","SD_SCHUL_CODE":"1234","SCHUL_NM":"중앙고등학교","LCTN_SC_NM":"서울특별시"},
        {"ATPT_OFCDC_SC_CODE":"D10","SD_SCHUL_CODE":"5678","SCHUL_NM":"중앙고등학교","LCTN_SC_NM":"대구광역시"}
    ]}
]}"#;

const NO_DATA: &str = r#"{"RESULT":{"CODE":"INFO-200","MESSAGE":"해당하는 데이터가 없습니다."}}"#;

const LUNCH: &str = r#"{"mealServiceDietInfo":[
    {"head":[{"list_total_count":1},{"RESULT":{"CODE":"INFO-000","MESSAGE":"정상 처리되었습니다."}}]},
    {"row":[{"ATPT_OFCDC_SC_CODE":"B10","SD_SCHUL_CODE":"1234","MMEAL_SC_CODE":"2","MMEAL_SC_NM":"Lunch","MLSV_YMD":"20250615","DDISH_NM":"Rice<br/>Soup"}]}
]}"#;

fn seoul() -> SchoolIdentity {
    SchoolIdentity::new("B10", "1234", "Seoul High School")
}

fn resolver(stub: &StubServer) -> NeisSchoolResolver {
    NeisSchoolResolver::new(NeisClient::new(stub.config()).unwrap())
}

fn fetcher(stub: &StubServer) -> NeisMealFetcher {
    NeisMealFetcher::new(NeisClient::new(stub.config()).unwrap())
}

#[tokio::test]
async fn resolve_sends_name_filter_and_returns_first_row() {
    let mut stub = StubServer::start(vec![(200, SEOUL_HIGH)]).await;

    let result = resolver(&stub).resolve("Seoul High School").await;
    assert_eq!(result, LookupResult::Found(seoul()));

    let request = stub.next_request().await;
    assert!(request.starts_with("/hub/schoolInfo?"), "unexpected path: {request}");
    assert!(request.contains(&format!("KEY={TEST_KEY}")));
    assert!(request.contains("Type=json"));
    assert!(request.contains("pIndex=1"));
    assert!(request.contains("pSize=100"));
    assert!(request.contains("SCHUL_NM=Seoul+High+School"));
}

#[tokio::test]
async fn resolve_takes_first_of_many() {
    let stub = StubServer::start(vec![(200, TWO_SCHOOLS)]).await;

    let result = resolver(&stub).resolve("중앙고등학교").await;
    assert_eq!(
        result,
        LookupResult::Found(SchoolIdentity::new("B10", "1234", "중앙고등학교"))
    );
}

#[tokio::test]
async fn search_returns_every_row_in_order() {
    let stub = StubServer::start(vec![(200, TWO_SCHOOLS)]).await;

    let listings = resolver(&stub).search("중앙고등학교").await.unwrap();
    let offices: Vec<&str> = listings
        .iter()
        .map(|l| l.identity.education_office_code())
        .collect();
    assert_eq!(offices, vec!["B10", "D10"]);
    assert_eq!(listings[1].region.as_deref(), Some("대구광역시"));
}

#[tokio::test]
async fn resolve_reports_not_found() {
    let stub = StubServer::start(vec![(200, NO_DATA)]).await;
    assert_eq!(resolver(&stub).resolve("없는학교").await, LookupResult::NotFound);

    let stub = StubServer::start(vec![(200, r#"{"schoolInfo":[{"head":[]},{"row":[]}]}"#)]).await;
    assert_eq!(resolver(&stub).resolve("없는학교").await, LookupResult::NotFound);
}

#[tokio::test]
async fn resolve_surfaces_http_and_shape_failures() {
    let stub = StubServer::start(vec![(500, "oops")]).await;
    assert_eq!(
        resolver(&stub).resolve("Seoul High School").await,
        LookupResult::ApiError(ApiError::Status(500))
    );

    let stub = StubServer::start(vec![(200, r#"{"unexpected":true}"#)]).await;
    assert!(matches!(
        resolver(&stub).resolve("Seoul High School").await,
        LookupResult::ApiError(ApiError::Malformed(_))
    ));

    let stub = StubServer::start(vec![(200, r#"{"RESULT":{"CODE":"ERROR-290","MESSAGE":"인증키가 유효하지 않습니다."}}"#)]).await;
    assert!(matches!(
        resolver(&stub).resolve("Seoul High School").await,
        LookupResult::ApiError(ApiError::Service { .. })
    ));
}

#[tokio::test]
async fn fetch_meals_sends_codes_and_date() {
    let mut stub = StubServer::start(vec![(200, LUNCH)]).await;
    let date: MealDate = "20250615".parse().unwrap();

    let result = fetcher(&stub).fetch_meals(&seoul(), date).await;
    assert_eq!(
        result,
        MealQueryResult::Records(vec![MealRecord::new(
            MealType::Lunch,
            vec!["Rice".into(), "Soup".into()]
        )])
    );

    let request = stub.next_request().await;
    assert!(request.starts_with("/hub/mealServiceDietInfo?"), "unexpected path: {request}");
    assert!(request.contains("ATPT_OFCDC_SC_CODE=B10"));
    assert!(request.contains("SD_SCHUL_CODE=1234"));
    assert!(request.contains("MLSV_YMD=20250615"));
}

#[tokio::test]
async fn fetch_meals_on_a_day_off_is_empty() {
    let stub = StubServer::start(vec![(200, NO_DATA)]).await;
    let saturday: MealDate = "20250614".parse().unwrap();

    assert_eq!(fetcher(&stub).fetch_meals(&seoul(), saturday).await, MealQueryResult::Empty);
}

#[tokio::test]
async fn fetch_meals_surfaces_failures() {
    let date: MealDate = "20250615".parse().unwrap();

    let stub = StubServer::start(vec![(503, "")]).await;
    assert_eq!(
        fetcher(&stub).fetch_meals(&seoul(), date).await,
        MealQueryResult::ApiError(ApiError::Status(503))
    );

    let stub = StubServer::start(vec![(200, "<html>maintenance</html>")]).await;
    assert!(matches!(
        fetcher(&stub).fetch_meals(&seoul(), date).await,
        MealQueryResult::ApiError(ApiError::Malformed(_))
    ));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let client = NeisClient::new(unreachable_config().await).unwrap();
    let date: MealDate = "20250615".parse().unwrap();

    assert!(matches!(
        NeisSchoolResolver::new(client.clone()).resolve("Seoul High School").await,
        LookupResult::ApiError(ApiError::Transport(_))
    ));
    assert!(matches!(
        NeisMealFetcher::new(client).fetch_meals(&seoul(), date).await,
        MealQueryResult::ApiError(ApiError::Transport(_))
    ));
}

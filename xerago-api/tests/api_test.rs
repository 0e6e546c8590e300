use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use xerago_api::{app, AppState};
use xerago_core::{ContentRepository, SeededRandom};
use xerago_shared::Asset;
use xerago_store::{CouponConfig, MemoryRepository, SeedTarget};

const START_SCREEN: &str = "xeragotheme/components/smartRushGame/gamestartscreen";
const COUPON_FOLDER: &str = "/content/coupons/static";
const DAM: &str = "/content/dam/xerago/coupons.json";

async fn setup() -> (Router, MemoryRepository) {
    let repo = MemoryRepository::new();
    repo.load_json(
        "/content/xerago/rush",
        &json!({
            "jcr:content": {
                "start": { "sling:resourceType": START_SCREEN, "gameTitle": "Smart Rush" },
                "play": { "sling:resourceType": "xeragotheme/components/smartRushGame/gamescreen", "statTitle": "Score" },
                "wheel": {
                    "sling:resourceType": "citi/components/wheel-spin-game",
                    "title": "Spin & Save",
                    "segments": {
                        "item0": { "text": "Lucky Prize", "color": "#123456" },
                        "item1": { "text": "" }
                    }
                },
                "note": { "sling:resourceType": "foundation/components/text", "text": "hi" }
            }
        }),
    )
    .await
    .unwrap();

    let state = AppState::new(
        Arc::new(repo.clone()),
        Arc::new(SeededRandom::new(7)),
        CouponConfig::default(),
    );
    (app(state), repo)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn put_coupons(repo: &MemoryRepository, coupons: Value) {
    repo.put_asset(Asset::new(DAM, "application/json", coupons.to_string().into_bytes()))
        .await
        .unwrap();
}

fn import_uri(dam: &str, target: &str) -> String {
    format!("/bin/importcoupons?damPath={}&targetPath={}", dam, target)
}

#[tokio::test]
async fn test_health() {
    let (app, _) = setup().await;
    let (status, _, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_random_coupon_served_from_start_screen() {
    let (app, repo) = setup().await;
    repo.load_json(
        COUPON_FOLDER,
        &json!({
            "COUPON-123": { "id": "COUPON-123", "code": "SAVE10" },
            "COUPON-456": { "id": "COUPON-456", "code": "SAVE20" }
        }),
    )
    .await
    .unwrap();

    let (status, content_type, body) = get(&app, "/content/xerago/rush/jcr:content/start.coupon.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/json"));

    let coupon: Value = serde_json::from_slice(&body).unwrap();
    let id = coupon["id"].as_str().unwrap();
    assert!(id == "COUPON-123" || id == "COUPON-456");
}

#[tokio::test]
async fn test_random_coupon_missing_folder() {
    let (app, _) = setup().await;
    let (status, content_type, body) = get(&app, "/content/xerago/rush/jcr:content/start.coupon.json").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(content_type.unwrap().starts_with("text/plain"));
    assert_eq!(String::from_utf8(body).unwrap(), "coupon folder not found");
}

#[tokio::test]
async fn test_random_coupon_empty_folder() {
    let (app, repo) = setup().await;
    repo.load_json(COUPON_FOLDER, &json!({})).await.unwrap();

    let (status, _, body) = get(&app, "/content/xerago/rush/jcr:content/start.coupon.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(String::from_utf8(body).unwrap(), "No coupons available");
}

#[tokio::test]
async fn test_coupon_selector_only_on_start_screen() {
    let (app, repo) = setup().await;
    repo.load_json(COUPON_FOLDER, &json!({ "C1": { "id": "C1" } })).await.unwrap();

    let (status, _) = get_json(&app, "/content/xerago/rush/jcr:content/play.coupon.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(&app, "/content/xerago/missing.coupon.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_component_model() {
    let (app, _) = setup().await;
    let (status, model) = get_json(&app, "/content/xerago/rush/jcr:content/wheel.model.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(model["title"], json!("Spin & Save"));
    assert_eq!(model["buttonText"], json!("SPIN"));
    assert_eq!(model["segments"]["count"], json!(1));
    assert_eq!(model["segments"]["source"]["kind"], json!("authored"));
    assert_eq!(model["segments"]["entries"][0]["redeemCode"], json!("WHEELLUCKYPRI123"));

    let (status, model) = get_json(&app, "/content/xerago/rush/jcr:content/start.model.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(model["gameTitle"], json!("Smart Rush"));
}

#[tokio::test]
async fn test_unknown_component_and_selector() {
    let (app, _) = setup().await;

    let (status, body) = get_json(&app, "/content/xerago/rush/jcr:content/note.model.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("foundation/components/text"));

    let (status, _) = get_json(&app, "/content/xerago/rush/jcr:content/wheel.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_import_then_serve() {
    let (app, repo) = setup().await;
    put_coupons(&repo, json!([{ "id": "C1", "name": "coupon1" }, { "id": "C2", "name": "coupon2" }])).await;

    let (status, report) = get_json(&app, &import_uri(DAM, COUPON_FOLDER)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["targetPath"], json!(COUPON_FOLDER));
    assert_eq!(report["created"], json!(["C1", "C2"]));
    assert_eq!(report["skipped"], json!([]));
    assert!(report["importId"].is_string());
    assert!(report["completedAt"].is_string());

    let c1 = repo.get("/content/coupons/static/C1").await.unwrap().unwrap();
    assert_eq!(c1.property("name"), Some(&json!("coupon1")));

    let (status, coupon) = get_json(&app, "/content/xerago/rush/jcr:content/start.coupon.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(coupon["jcr:primaryType"], json!("nt:unstructured"));

    // Second run changes nothing
    let (status, report) = get_json(&app, &import_uri(DAM, COUPON_FOLDER)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["created"], json!([]));
    assert_eq!(report["skipped"], json!(["C1", "C2"]));
}

#[tokio::test]
async fn test_import_missing_parameters() {
    let (app, _) = setup().await;

    let (status, body) = get_json(&app, "/bin/importcoupons?damPath=/content/dam/x.json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("targetPath"));

    let (status, _) = get_json(&app, "/bin/importcoupons?damPath=&targetPath=/content/x").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_import_missing_source_has_no_effect() {
    let (app, repo) = setup().await;
    let (status, _) = get_json(&app, &import_uri("/content/dam/none.json", COUPON_FOLDER)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(repo.get("/content/coupons").await.unwrap().is_none());
}

#[tokio::test]
async fn test_import_rejects_bad_batch() {
    let (app, repo) = setup().await;
    put_coupons(&repo, json!([{ "id": "C1" }, { "name": "no id" }])).await;

    let (status, body) = get_json(&app, &import_uri(DAM, COUPON_FOLDER)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("no id"));
    assert!(repo.get(COUPON_FOLDER).await.unwrap().is_none());
}

#[tokio::test]
async fn test_coupon_folder_is_configurable() {
    let repo = MemoryRepository::new();
    repo.load_json("/content/rush", &json!({ "sling:resourceType": START_SCREEN })).await.unwrap();
    repo.load_json("/content/coupons/summer", &json!({ "S1": { "id": "S1" } })).await.unwrap();

    let coupons = CouponConfig {
        folder: "/content/coupons/summer".to_string(),
        ..CouponConfig::default()
    };
    let app = app(AppState::new(Arc::new(repo), Arc::new(SeededRandom::new(1)), coupons));

    let (status, coupon) = get_json(&app, "/content/rush.coupon.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(coupon["id"], json!("S1"));
}

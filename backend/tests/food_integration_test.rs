//! Integration tests for food creation

mod common;

use axum::http::StatusCode;
use common::{parse, TestApp};
use serde_json::{json, Value};

fn food_body(portion_unit: &str, homemade_measurement: Value) -> Value {
    json!({
        "name": "Rolled oats",
        "brand": "Quaker",
        "barcode": "7891000100103",
        "portion_info": {
            "portion_of_food": 30,
            "portion_of_food_unit": portion_unit,
            "homemade_measurement": homemade_measurement,
            "homemade_measurement_unit": "tablespoons"
        },
        "nutritional_information": {
            "calories": 117,
            "carbohydrates": 19.9,
            "protein": 4.3,
            "fat": 2.2,
            "fiber": 2.7
        }
    })
}

#[tokio::test]
async fn test_create_food_with_nutritional_information() {
    let app = TestApp::new();
    let (user, token) = app.authenticated_user().await;

    let body = food_body("g", json!(3));
    let (status, response) = app.post_auth("/api/v1/foods", &token, &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    let response = parse(&response);
    let food = &response["food"];
    assert_eq!(food["name"], "Rolled oats");
    assert_eq!(food["user_id"], user.id.as_str());
    assert_eq!(food["portion_of_food"], 30.0);
    assert_eq!(food["portion_of_food_unit"], "g");
    assert_eq!(food["homemade_measurement_unit"], "tablespoons");
    assert_eq!(food["is_favorite"], false);

    let info = &response["nutritional_information"];
    assert_eq!(info["food_id"], food["id"]);
    assert_eq!(info["calories"], 117.0);
    assert_eq!(info["protein"], 4.3);
    assert!(info["sodium"].is_null());
}

#[tokio::test]
async fn test_create_food_in_ml_without_nutrients() {
    let app = TestApp::new();
    let (_, token) = app.authenticated_user().await;

    let body = json!({
        "name": "Milk",
        "is_favorite": true,
        "portion_info": {
            "portion_of_food": 200,
            "portion_of_food_unit": "ml",
            "homemade_measurement": 1,
            "homemade_measurement_unit": "cup"
        }
    });
    let (status, response) = app.post_auth("/api/v1/foods", &token, &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    let response = parse(&response);
    assert_eq!(response["food"]["is_favorite"], true);
    assert!(response.get("nutritional_information").is_none());
}

#[tokio::test]
async fn test_create_food_with_disallowed_unit() {
    let app = TestApp::new();
    let (_, token) = app.authenticated_user().await;

    let body = food_body("kg", json!(3));
    let (status, response) = app.post_auth("/api/v1/foods", &token, &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&response)["error"]["code"], "INVALID_UNIT_MEASURE");
}

#[tokio::test]
async fn test_create_food_without_homemade_measurement() {
    let app = TestApp::new();
    let (_, token) = app.authenticated_user().await;

    for homemade in [json!(null), json!(0)] {
        let body = food_body("g", homemade);
        let (status, response) = app.post_auth("/api/v1/foods", &token, &body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse(&response)["error"]["code"], "INVALID_UNIT_MEASURE");
    }
}

#[tokio::test]
async fn test_create_food_without_portion_info() {
    let app = TestApp::new();
    let (_, token) = app.authenticated_user().await;

    let body = json!({ "name": "Mystery food" });
    let (status, _) = app.post_auth("/api/v1/foods", &token, &body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_food_requires_authentication() {
    let app = TestApp::new();

    let body = food_body("g", json!(3));
    let (status, _) = app.post("/api/v1/foods", &body.to_string()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

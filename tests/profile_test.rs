use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_profile, create_test_user_and_login, get_plan, spawn_app};

#[tokio::test]
async fn create_profile_generates_initial_plan() {
    // Arrange
    let test_app = spawn_app().await;
    let (_, _, token) = create_test_user_and_login(&test_app.address).await;

    // Act
    let profile = create_profile(&test_app.address, &token, "health", "intermediate").await;

    // Assert - the health template has two exercises on each of three days
    let plan = get_plan(&test_app.address, &token, profile["id"].as_str().unwrap()).await;
    assert_eq!(6, plan.len());
    assert!(profile["bmi"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn create_profile_rejects_out_of_range_age() {
    // Arrange
    let test_app = spawn_app().await;
    let (_, _, token) = create_test_user_and_login(&test_app.address).await;
    let client = Client::new();

    // Act
    let response = client
        .post(&format!("{}/profiles", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "age": 12,
            "height": 180.0,
            "weight": 80.0,
            "gender": "male",
            "goal": "health",
            "fitness_level": "beginner"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert - field-level message, nothing created
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["errors"]["age"].is_string());

    let list = client
        .get(&format!("{}/profiles", &test_app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    let list_body: serde_json::Value = list.json().await.unwrap();
    assert_eq!(0, list_body["data"].as_array().unwrap().len());
}

#[tokio::test]
async fn duplicate_profile_create_returns_existing_with_warning() {
    // Arrange
    let test_app = spawn_app().await;
    let (_, _, token) = create_test_user_and_login(&test_app.address).await;
    let first = create_profile(&test_app.address, &token, "health", "beginner").await;
    let client = Client::new();

    // Act - second create is recovered, not an error
    let response = client
        .post(&format!("{}/profiles", &test_app.address))
        .bearer_auth(&token)
        .json(&json!({
            "age": 40,
            "height": 170.0,
            "weight": 90.0,
            "gender": "female",
            "goal": "strength",
            "fitness_level": "advanced"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!("Profile already exists", body["message"].as_str().unwrap());
    assert_eq!(first["id"], body["data"]["id"]);
    // The existing profile is untouched
    assert_eq!("health", body["data"]["goal"].as_str().unwrap());
}

#[tokio::test]
async fn update_profile_does_not_regenerate_plan() {
    // Arrange
    let test_app = spawn_app().await;
    let (_, _, token) = create_test_user_and_login(&test_app.address).await;
    let profile = create_profile(&test_app.address, &token, "weight_loss", "intermediate").await;
    let profile_id = profile["id"].as_str().unwrap();
    let client = Client::new();

    // Act - change the goal without regenerating
    let response = client
        .put(&format!("{}/profiles/{}", &test_app.address, profile_id))
        .bearer_auth(&token)
        .json(&json!({
            "age": 30,
            "height": 180.0,
            "weight": 80.0,
            "gender": "male",
            "goal": "muscle_gain",
            "fitness_level": "intermediate"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    // Assert - the stored plan is still the weight-loss one (it has Wednesday entries;
    // the muscle-gain template has none)
    let plan = get_plan(&test_app.address, &token, profile_id).await;
    assert_eq!(9, plan.len());
    assert!(plan.iter().any(|item| item["day"] == "wednesday"));
    assert!(!plan.iter().any(|item| item["day"] == "tuesday"));
}

#[tokio::test]
async fn delete_profile_removes_it() {
    // Arrange
    let test_app = spawn_app().await;
    let (_, _, token) = create_test_user_and_login(&test_app.address).await;
    let profile = create_profile(&test_app.address, &token, "health", "beginner").await;
    let profile_id = profile["id"].as_str().unwrap();
    let client = Client::new();

    // Act
    let response = client
        .delete(&format!("{}/profiles/{}", &test_app.address, profile_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    // Assert
    let detail = client
        .get(&format!("{}/profiles/{}", &test_app.address, profile_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, detail.status().as_u16());
}

use std::collections::BTreeSet;

use reqwest::Client;

mod common;
use common::utils::{create_profile, create_test_user_and_login, get_plan, spawn_app};

#[tokio::test]
async fn regeneration_replaces_the_entire_prescription_set() {
    // Arrange
    let test_app = spawn_app().await;
    let (_, _, token) = create_test_user_and_login(&test_app.address).await;
    let profile = create_profile(&test_app.address, &token, "muscle_gain", "intermediate").await;
    let profile_id = profile["id"].as_str().unwrap();

    let before = get_plan(&test_app.address, &token, profile_id).await;
    assert_eq!(9, before.len());
    let before_ids: BTreeSet<String> = before
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect();

    // Act
    let client = Client::new();
    let response = client
        .post(&format!("{}/profiles/{}/generate_plan", &test_app.address, profile_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    // Assert - same deterministic content, but every row was replaced
    let after = get_plan(&test_app.address, &token, profile_id).await;
    assert_eq!(9, after.len());
    let after_ids: BTreeSet<String> = after
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect();
    assert!(before_ids.is_disjoint(&after_ids), "no prescription survives regeneration");

    let days: BTreeSet<&str> = after.iter().map(|item| item["day"].as_str().unwrap()).collect();
    assert_eq!(
        days,
        BTreeSet::from(["monday", "tuesday", "thursday"])
    );
    let monday_first = after
        .iter()
        .find(|item| item["day"] == "monday" && item["position"] == 0)
        .unwrap();
    assert_eq!("Жим штанги лежа", monday_first["exercise_name"].as_str().unwrap());
    assert_eq!(4, monday_first["sets"].as_i64().unwrap());

    // No stray rows beyond the fresh set
    let row_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM prescriptions")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to count prescriptions");
    assert_eq!(9, row_count);
}

#[tokio::test]
async fn regeneration_follows_the_profiles_current_goal() {
    // Arrange
    let test_app = spawn_app().await;
    let (_, _, token) = create_test_user_and_login(&test_app.address).await;
    let profile = create_profile(&test_app.address, &token, "weight_loss", "intermediate").await;
    let profile_id = profile["id"].as_str().unwrap();
    let client = Client::new();

    // Act - switch the goal, then explicitly regenerate
    let update = client
        .put(&format!("{}/profiles/{}", &test_app.address, profile_id))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "age": 30,
            "height": 180.0,
            "weight": 80.0,
            "gender": "male",
            "goal": "strength",
            "fitness_level": "intermediate"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, update.status().as_u16());

    let response = client
        .post(&format!("{}/profiles/{}/generate_plan", &test_app.address, profile_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());

    // Assert - six low-rep strength entries, no leftover cardio
    let plan = get_plan(&test_app.address, &token, profile_id).await;
    assert_eq!(6, plan.len());
    assert!(plan.iter().all(|item| item["reps"] != "20-30 мин"));
    assert!(plan.iter().any(|item| item["exercise_name"] == "Становая тяга"));
}

#[tokio::test]
async fn beginner_profile_gets_reduced_volume_end_to_end() {
    // Arrange
    let test_app = spawn_app().await;
    let (_, _, token) = create_test_user_and_login(&test_app.address).await;
    let profile = create_profile(&test_app.address, &token, "strength", "beginner").await;
    let profile_id = profile["id"].as_str().unwrap();

    // Assert - template sets of 5 drop to 4, sets of 3 drop to 2
    let plan = get_plan(&test_app.address, &token, profile_id).await;
    assert_eq!(6, plan.len());
    for item in &plan {
        let sets = item["sets"].as_i64().unwrap();
        assert!(sets == 4 || sets == 2, "unexpected set count {}", sets);
    }
}

#[tokio::test]
async fn beginner_duration_rewrite_applies_to_stored_plan() {
    // Arrange
    let test_app = spawn_app().await;
    let (_, _, token) = create_test_user_and_login(&test_app.address).await;
    let profile = create_profile(&test_app.address, &token, "weight_loss", "beginner").await;
    let profile_id = profile["id"].as_str().unwrap();

    // Assert
    let plan = get_plan(&test_app.address, &token, profile_id).await;
    let reps: Vec<&str> = plan.iter().map(|item| item["reps"].as_str().unwrap()).collect();
    assert!(reps.contains(&"10-20 мин"), "20-30 мин is rewritten for beginners");
    assert!(reps.contains(&"15-25 мин"), "25-35 мин is rewritten for beginners");
    assert!(!reps.contains(&"20-30 мин"));
    assert!(!reps.contains(&"25-35 мин"));
}

#[tokio::test]
async fn endurance_goal_falls_back_to_the_health_plan() {
    // Arrange
    let test_app = spawn_app().await;
    let (_, _, token) = create_test_user_and_login(&test_app.address).await;
    let profile = create_profile(&test_app.address, &token, "endurance", "intermediate").await;
    let profile_id = profile["id"].as_str().unwrap();

    // Assert - identical to the health template
    let plan = get_plan(&test_app.address, &token, profile_id).await;
    assert_eq!(6, plan.len());
    let days: BTreeSet<&str> = plan.iter().map(|item| item["day"].as_str().unwrap()).collect();
    assert_eq!(days, BTreeSet::from(["monday", "wednesday", "friday"]));
    assert!(plan.iter().any(|item| item["exercise_name"] == "Ходьба/Бег"));
}

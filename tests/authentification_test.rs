use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::spawn_app;

#[tokio::test]
async fn register_returns_200_for_valid_data() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();

    let username = format!("user{}", uuid::Uuid::new_v4());
    let user_request = json!({
        "username": username,
        "password": "password123",
        "email": format!("{}@example.com", username)
    });

    // Act
    let response = client
        .post(&format!("{}/register_user", &test_app.address))
        .json(&user_request)
        .send()
        .await
        .expect("Failed to execute registration request.");

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn register_returns_409_for_duplicate_email() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();

    let username = format!("user{}", uuid::Uuid::new_v4());
    let email = format!("{}@example.com", username);
    let user_request = json!({
        "username": username,
        "password": "password123",
        "email": email
    });

    let first = client
        .post(&format!("{}/register_user", &test_app.address))
        .json(&user_request)
        .send()
        .await
        .expect("Failed to execute registration request.");
    assert_eq!(200, first.status().as_u16());

    // Act - same email, different username
    let duplicate = json!({
        "username": format!("user{}", uuid::Uuid::new_v4()),
        "password": "password123",
        "email": email
    });
    let response = client
        .post(&format!("{}/register_user", &test_app.address))
        .json(&duplicate)
        .send()
        .await
        .expect("Failed to execute registration request.");

    // Assert
    assert_eq!(409, response.status().as_u16());
}

#[tokio::test]
async fn login_with_email_returns_200_for_valid_credentials() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();

    let username = format!("user{}", uuid::Uuid::new_v4());
    let password = "password123";
    let email = format!("{}@example.com", username);

    let user_request = json!({
        "username": username,
        "password": password,
        "email": email
    });

    let register_response = client
        .post(&format!("{}/register_user", &test_app.address))
        .json(&user_request)
        .send()
        .await
        .expect("Failed to execute registration request.");
    assert_eq!(200, register_response.status().as_u16(), "Registration should succeed");

    // Act - the email is the credential identifier
    let login_request = json!({
        "email": email,
        "password": password
    });

    let login_response = client
        .post(&format!("{}/login", &test_app.address))
        .json(&login_request)
        .send()
        .await
        .expect("Failed to execute login request.");

    // Assert
    assert_eq!(200, login_response.status().as_u16(), "Login should succeed");

    let response_body = login_response.json::<serde_json::Value>().await
        .expect("Failed to parse login response as JSON");
    assert!(response_body.get("token").is_some(), "Response should contain a token");
}

#[tokio::test]
async fn login_returns_401_for_invalid_credentials() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();

    // Act - Try to login with non-existent user
    let login_request = json!({
        "email": "nonexistent@example.com",
        "password": "wrongpassword"
    });

    let response = client
        .post(&format!("{}/login", &test_app.address))
        .json(&login_request)
        .send()
        .await
        .expect("Failed to execute login request.");

    // Assert
    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn protected_route_rejects_missing_token() {
    // Arrange
    let test_app = spawn_app().await;
    let client = Client::new();

    // Act
    let response = client
        .get(&format!("{}/profiles", &test_app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(401, response.status().as_u16());
}

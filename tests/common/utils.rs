use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;
use once_cell::sync::Lazy;
use reqwest::Client;

use fitplan_backend::run;
use fitplan_backend::config::settings::{get_config, get_jwt_settings, DatabaseSettings};
use fitplan_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    let connection_pool = configure_db(&configuration.database).await;
    let jwt_settings = get_jwt_settings(&configuration);
    let server = run(listener, connection_pool.clone(), jwt_settings)
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);
    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Register a fresh user and log in with their email, returning
/// (username, email, bearer token).
pub async fn create_test_user_and_login(app_address: &str) -> (String, String, String) {
    let client = Client::new();
    let username = format!("user{}", Uuid::new_v4());
    let password = "password123";
    let email = format!("{}@example.com", username);

    let user_request = json!({
        "username": username,
        "password": password,
        "email": email
    });

    let register_response = client
        .post(&format!("{}/register_user", app_address))
        .json(&user_request)
        .send()
        .await
        .expect("Failed to register user.");
    assert!(register_response.status().is_success(), "Registration should succeed");

    let login_request = json!({
        "email": email,
        "password": password
    });

    let login_response = client
        .post(&format!("{}/login", app_address))
        .json(&login_request)
        .send()
        .await
        .expect("Failed to execute login request.");

    let login_response: serde_json::Value = login_response.json().await.expect("Failed to parse login response");
    let token = login_response["token"].as_str().expect("No token in response");

    (username, email, token.to_string())
}

/// Create a profile for the authenticated user and return its JSON data.
pub async fn create_profile(
    app_address: &str,
    token: &str,
    goal: &str,
    fitness_level: &str,
) -> serde_json::Value {
    let client = Client::new();
    let response = client
        .post(&format!("{}/profiles", app_address))
        .bearer_auth(token)
        .json(&json!({
            "age": 30,
            "height": 180.0,
            "weight": 80.0,
            "gender": "male",
            "goal": goal,
            "fitness_level": fitness_level
        }))
        .send()
        .await
        .expect("Failed to create profile.");
    assert_eq!(200, response.status().as_u16(), "Profile creation should succeed");

    let body: serde_json::Value = response.json().await.expect("Failed to parse profile response");
    body["data"].clone()
}

/// Fetch the persisted plan for a profile.
pub async fn get_plan(app_address: &str, token: &str, profile_id: &str) -> Vec<serde_json::Value> {
    let client = Client::new();
    let response = client
        .get(&format!("{}/profiles/{}/plan", app_address, profile_id))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to fetch plan.");
    assert_eq!(200, response.status().as_u16(), "Plan fetch should succeed");

    let body: serde_json::Value = response.json().await.expect("Failed to parse plan response");
    body["data"].as_array().expect("Plan data should be an array").clone()
}

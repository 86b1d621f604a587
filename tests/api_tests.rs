// tests/api_tests.rs

use quiz_server::{config::Config, routes, seed, state::AppState};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
///
/// The client handle is lazy: tests that never touch the database (like the
/// 404 check) work without a running mongod.
async fn spawn_app(database_name: &str) -> String {
    let mongodb_uri = std::env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string());

    // 1. Build the client handle
    let client = mongodb::Client::with_uri_str(&mongodb_uri)
        .await
        .expect("Failed to build MongoDB client");
    let database = client.database(database_name);

    // 2. Create test configuration and state
    let config = Config {
        mongodb_uri,
        database_name: database_name.to_string(),
        rust_log: "error".to_string(),
    };

    let state = AppState { database, config };

    // 3. Create the router with the app state
    let app = routes::create_router(state);

    // 4. Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // 5. Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

#[tokio::test]
async fn health_check_404() {
    // Arrange
    let address = spawn_app("quiz_api_404_test").await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn questions_endpoint_returns_seeded_records() {
    // Requires a running mongod
    if std::env::var("MONGODB_URI").is_err() {
        eprintln!("skipping: MONGODB_URI not set");
        return;
    }

    // Arrange: seed the test database through the library
    let database_name = "quiz_api_questions_test";
    let address = spawn_app(database_name).await;
    let client = reqwest::Client::new();

    let mongodb_uri = std::env::var("MONGODB_URI").unwrap();
    let mongo = mongodb::Client::with_uri_str(&mongodb_uri)
        .await
        .expect("Failed to build MongoDB client");
    let database = mongo.database(database_name);

    let questions = seed::load_questions().expect("Packaged data must parse");
    let outcome = seed::seed_questions(&database, &questions)
        .await
        .expect("Seeding failed");
    assert_eq!(outcome.inserted, questions.len());

    // Act
    let response = client
        .get(&format!("{}/api/questions", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 200);

    let body: Vec<serde_json::Value> = response.json().await.unwrap();
    assert_eq!(body.len(), questions.len());
    assert_eq!(body[0]["question"], questions[0].question);
    // ObjectId serializes as extended JSON
    assert!(
        body[0]["_id"]["$oid"].is_string(),
        "records should carry a store-assigned id"
    );
}

#[tokio::test]
async fn unknown_question_id_is_404() {
    if std::env::var("MONGODB_URI").is_err() {
        eprintln!("skipping: MONGODB_URI not set");
        return;
    }

    let address = spawn_app("quiz_api_missing_id_test").await;
    let client = reqwest::Client::new();

    // A well-formed ObjectId that was never inserted
    let response = client
        .get(&format!("{}/api/questions/ffffffffffffffffffffffff", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);

    // A malformed id maps to 404 as well
    let response = client
        .get(&format!("{}/api/questions/not-an-object-id", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

// src/bin/seed.rs
//
// One-shot seed script: resets the questions collection and loads the
// packaged data set. Run it once against a ready database; it is not meant
// to run concurrently with itself.

use dotenvy::dotenv;
use quiz_server::config::Config;
use quiz_server::db;
use quiz_server::seed;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = Config::from_env();

    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .init();

    let questions = match seed::load_questions() {
        Ok(questions) => questions,
        Err(e) => {
            tracing::error!("Packaged question data is invalid: {}", e);
            std::process::exit(1);
        }
    };

    // Seeding only starts once the connection reports ready; if the database
    // never comes up, connect() gives up after its retries and we exit.
    let client = match db::connect(&config.mongodb_uri).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Database never became ready: {}", e);
            std::process::exit(1);
        }
    };
    let database = client.database(&config.database_name);

    match seed::seed_questions(&database, &questions).await {
        Ok(outcome) => {
            tracing::info!("Questions seeded! ({} records)", outcome.inserted);
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}

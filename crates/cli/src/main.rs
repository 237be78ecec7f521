//! CLI binary for the eduroute backend.

#![allow(clippy::missing_docs_in_private_items, reason = "Internal binary")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use eduroute_ai::AiClient;
use eduroute_auth::{
    FederatedVerifier, GoogleTokenVerifier, PasswordHasher, TokenSigner, DEFAULT_TOKEN_TTL_DAYS,
};
use eduroute_core::{env_parse_with_default, env_string_with_default};
use eduroute_http::{create_router, AppState};
use eduroute_service::{
    AccountService, AiServiceNotifier, ChatService, ProfileService, RoadmapService,
};
use eduroute_storage::PgStorage;

#[derive(Parser)]
#[command(name = "eduroute")]
#[command(about = "Career-guidance backend for students", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run schema migrations and start the HTTP server.
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Run schema migrations and exit.
    Migrate,
}

fn database_url() -> Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

fn jwt_secret() -> Result<String> {
    std::env::var("EDUROUTE_JWT_SECRET")
        .map_err(|_| anyhow::anyhow!("EDUROUTE_JWT_SECRET environment variable must be set"))
}

fn build_state(storage: PgStorage) -> Result<Arc<AppState>> {
    let storage = Arc::new(storage);

    let ttl_days = env_parse_with_default("EDUROUTE_TOKEN_TTL_DAYS", DEFAULT_TOKEN_TTL_DAYS);
    let signer = TokenSigner::new(&jwt_secret()?, ttl_days);

    let google_client_id = std::env::var("GOOGLE_CLIENT_ID").ok();
    let verifier: Arc<dyn FederatedVerifier> =
        Arc::new(GoogleTokenVerifier::new(google_client_id)?);

    let ai_url = env_string_with_default("AI_SERVICE_URL", "http://localhost:5001");
    let ai = Arc::new(AiClient::new(&ai_url)?);
    let notifier = Arc::new(AiServiceNotifier::new(Arc::clone(&ai)));

    let accounts = Arc::new(AccountService::new(
        Arc::clone(&storage) as _,
        PasswordHasher::default(),
        signer,
        verifier,
    ));
    let profiles = Arc::new(ProfileService::new(Arc::clone(&storage) as _));
    let roadmaps = Arc::new(RoadmapService::new(
        Arc::clone(&storage) as _,
        Arc::clone(&storage) as _,
        Arc::clone(&storage) as _,
        Arc::clone(&ai),
        notifier,
    ));
    let chat = Arc::new(ChatService::new(Arc::clone(&storage) as _, Arc::clone(&ai)));

    Ok(Arc::new(AppState { accounts, profiles, roadmaps, chat, ai }))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => {
            // Connecting runs migrations before the listener opens.
            let storage = PgStorage::new(&database_url()?).await?;
            let state = build_state(storage)?;
            let router = create_router(state);
            let addr = format!("{host}:{port}");
            tracing::info!("Starting HTTP server on {addr}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::Migrate => {
            let _storage = PgStorage::new(&database_url()?).await?;
            tracing::info!("Migrations applied");
        },
    }
    Ok(())
}

use std::io::{BufRead, Write};

use anyhow::Context;
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::{Parser, Subcommand};
use diesel::{Connection, SqliteConnection};
use serde_json::json;
use tower_http::cors::CorsLayer;

mod client;
mod data;
mod db;
mod features;
mod handlers;
mod schema;

use client::{ApiClient, SearchView};

#[derive(Parser)]
#[command(
    name = "burushaski-chatbot",
    about = "Burushaski language preservation API and console tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server
    Serve,
    /// Create the database tables and load the starter vocabulary
    Seed,
    /// Search the dictionary from the console; no query starts a prompt loop
    Search { query: Option<String> },
    /// Translate a text and print the raw JSON response
    Translate {
        text: String,
        #[arg(long, default_value = "burushaski")]
        source: String,
        #[arg(long, default_value = "english")]
        target: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Seed => seed(),
        Command::Search { query } => search(query).await,
        Command::Translate {
            text,
            source,
            target,
        } => translate(&text, &source, &target).await,
    }
}

fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "burushaski.db".into())
}

async fn serve() -> anyhow::Result<()> {
    let pool = db::init_pool(&database_url())?;
    {
        let mut conn = pool.get().context("Failed to get DB connection")?;
        db::init_schema(&mut conn).context("Failed to create tables")?;
    }

    let dictionary_router = Router::new()
        .route("/", post(handlers::dictionary::words::create_word))
        .route("/search", get(handlers::dictionary::search::search_words))
        .route("/suggest", get(handlers::dictionary::search::suggest))
        .route("/item/{id}", get(handlers::dictionary::words::get_word))
        .route(
            "/by-burushaski",
            get(handlers::dictionary::words::get_by_burushaski),
        )
        .route("/count", get(handlers::dictionary::words::count_words))
        .route("/random", get(handlers::dictionary::words::random_word))
        .route("/stats", get(handlers::dictionary::words::stats))
        .with_state(pool.clone());

    let translate_router = Router::new()
        .route("/", post(handlers::translate::translate::translate_text))
        .route(
            "/quick/{text}",
            get(handlers::translate::translate::quick_translate),
        )
        .route(
            "/batch",
            post(handlers::translate::translate::batch_translate),
        )
        .route(
            "/examples",
            get(handlers::translate::translate::translation_examples),
        )
        .with_state(pool);

    let api_router = Router::new()
        .nest("/dictionary", dictionary_router)
        .nest("/translate", translate_router);

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", api_router)
        .layer(CorsLayer::permissive());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".into());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    println!("Server running on http://{}", bind_addr);

    axum::serve(listener, app).await.context("Server error")
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Burushaski Language Preservation API",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "dictionary": "/api/dictionary",
            "translation": "/api/translate",
            "health": "/health"
        },
        "stats": {
            "languages_supported": ["Burushaski", "English", "Urdu"],
            "dialects": ["Hunza", "Nagar", "Yasin"]
        }
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "database": "connected",
        "api": "operational"
    }))
}

fn seed() -> anyhow::Result<()> {
    let url = database_url();
    let mut conn = SqliteConnection::establish(&url)
        .with_context(|| format!("Failed to open database {}", url))?;

    db::init_schema(&mut conn).context("Failed to create tables")?;
    let inserted = db::seed_words(&mut conn).context("Failed to seed words")?;

    println!("Seeded {} words into {}", inserted, url);
    Ok(())
}

async fn search(query: Option<String>) -> anyhow::Result<()> {
    let api = ApiClient::from_env();
    let mut view = SearchView::new();

    if let Some(query) = query {
        run_search(&mut view, &api, query).await;
        return Ok(());
    }

    println!("Dictionary search against {} (empty line to quit)", api.base_url());
    let stdin = std::io::stdin();
    loop {
        print!("search> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        run_search(&mut view, &api, query.to_string()).await;
    }
    Ok(())
}

async fn run_search(view: &mut SearchView, api: &ApiClient, query: String) {
    view.query = query;
    view.submit(api).await;

    // Error banner first; any results from an earlier search stay visible.
    if let Some(error) = view.error() {
        eprintln!("error: {}", error);
    }
    if view.results().is_empty() {
        if view.error().is_none() {
            println!("no results for {:?}", view.query);
        }
        return;
    }
    for line in view.render() {
        println!("{}", line);
    }
}

async fn translate(text: &str, source: &str, target: &str) -> anyhow::Result<()> {
    let api = ApiClient::from_env();
    let response = api
        .translate_between(text, source, target)
        .await
        .context("Translation request failed")?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

// src/main.rs
use clap::Parser;
use dotenvy::dotenv;
use sqlx::PgPool;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing_subscriber::fmt::init as tracing_init;

use products_api::cli::{Cli, Command};
use products_api::{app, database, schema, AppError};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    // Create database pool
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db_pool = database::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(db_pool).await,
        Command::CreateSchema => report(schema::create_schema(&db_pool).await, "Tables created."),
        Command::DropSchema => report(schema::drop_schema(&db_pool).await, "Tables dropped."),
        Command::Seed => report(schema::seed(&db_pool).await, "Table(s) seeded."),
    }
}

async fn serve(db_pool: PgPool) {
    let app = app::build(db_pool);

    // Start server with HOST/PORT env
    let host_str = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let host: IpAddr = host_str
        .parse()
        .unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let addr = SocketAddr::from((host, port));
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server running on {}", addr);
            listener
        }
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
    }
}

fn report(result: Result<(), AppError>, message: &str) {
    match result {
        Ok(()) => println!("{}", message),
        Err(e) => {
            tracing::error!(error = ?e, "Command failed");
            std::process::exit(1);
        }
    }
}

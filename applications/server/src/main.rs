/// Acue Server - account registration and login service
use acue_server::{api, config::ServerConfig, services::Credentials, state::AppState};
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "acue-server")]
#[command(about = "Acue Store account registration and login server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "ACUE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Register a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acue_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser { username, password } => {
            add_user(&config, username, password).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Acue Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Users file: {}", config.storage.users_file.display());
    if config.admin.token.is_none() {
        tracing::info!("Admin routes disabled (no admin token configured)");
    }

    let app_state = AppState::from_config(&config);
    let app = api::create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn add_user(
    config: &ServerConfig,
    username: String,
    password: String,
) -> anyhow::Result<()> {
    let app_state = AppState::from_config(config);
    let user = app_state
        .accounts
        .register(&Credentials::new(username, password))
        .await?;

    println!("Created user {} ({}) <{}>", user.username, user.id, user.email);
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let app_state = AppState::from_config(config);
    let users = app_state.accounts.list_users().await?;

    println!("Users:");
    for user in users {
        println!(
            "  {} - {} <{}> created {}",
            user.id, user.username, user.email, user.created_at
        );
    }

    Ok(())
}

//! Venture Command Line Interface
//!
//! Usage:
//!   venture serve                - Start the game API server
//!   venture status               - Check a running server
//!   venture create-startup       - Create a startup (admin)
//!   venture update-multiplier    - Adjust a pending startup's multiplier (admin)

use std::sync::Arc;

use clap::{Parser, Subcommand};

use venture_api::{create_server, server::serve, ApiConfig};
use venture_ledger::{LedgerStore, MemoryStore};

mod client;
mod error;

use client::VentureClient;

#[derive(Parser)]
#[command(name = "venture")]
#[command(about = "Venture investment game CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the game API server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Disable permissive CORS
        #[arg(long)]
        no_cors: bool,
        /// HS256 secret for session tokens, at least 32 bytes
        #[arg(long, env = "VENTURE_JWT_SECRET")]
        jwt_secret: String,
        /// Seed an admin account at startup (email)
        #[arg(long, requires = "admin_password")]
        admin_email: Option<String>,
        /// Seeded admin display name
        #[arg(long, default_value = "Administrator")]
        admin_name: String,
        /// Seeded admin password
        #[arg(long, env = "VENTURE_ADMIN_PASSWORD")]
        admin_password: Option<String>,
    },

    /// Check a running server
    Status {
        /// API server URL
        #[arg(short, long, default_value = "http://localhost:3000")]
        api_url: String,
    },

    /// Create a startup (admin credentials required)
    CreateStartup {
        /// API server URL
        #[arg(short, long, default_value = "http://localhost:3000")]
        api_url: String,
        /// Admin email
        #[arg(long)]
        email: String,
        /// Admin password
        #[arg(long, env = "VENTURE_ADMIN_PASSWORD")]
        password: String,
        /// Startup name
        #[arg(long)]
        name: String,
        /// Startup description
        #[arg(long)]
        description: String,
        /// Startup pitch
        #[arg(long)]
        pitch: String,
        /// Payout multiplier (game default when omitted)
        #[arg(long)]
        multiplier: Option<f64>,
    },

    /// Adjust a pending startup's multiplier (admin credentials required)
    UpdateMultiplier {
        /// API server URL
        #[arg(short, long, default_value = "http://localhost:3000")]
        api_url: String,
        /// Admin email
        #[arg(long)]
        email: String,
        /// Admin password
        #[arg(long, env = "VENTURE_ADMIN_PASSWORD")]
        password: String,
        /// Startup ID
        #[arg(long)]
        startup_id: String,
        /// New multiplier, at least 1.0
        #[arg(long)]
        multiplier: f64,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match cli.command {
        Commands::Serve {
            host,
            port,
            no_cors,
            jwt_secret,
            admin_email,
            admin_name,
            admin_password,
        } => {
            let config = ApiConfig {
                host,
                port,
                enable_cors: !no_cors,
                jwt_secret,
            };

            let store: Arc<dyn LedgerStore> = Arc::new(MemoryStore::new());
            let (router, addr, state) = create_server(&config, store)?;

            if let (Some(email), Some(password)) = (admin_email, admin_password) {
                state
                    .accounts
                    .create_admin(&admin_name, &email, &password)
                    .await?;
                tracing::info!(email = %email, "admin account seeded");
            }

            serve(router, addr).await
        }

        Commands::Status { api_url } => {
            let client = VentureClient::new(api_url)?;
            let health = client.health().await?;
            println!("{}", serde_json::to_string_pretty(&health)?);
            Ok(())
        }

        Commands::CreateStartup {
            api_url,
            email,
            password,
            name,
            description,
            pitch,
            multiplier,
        } => {
            let client = VentureClient::new(api_url)?;
            let token = client.login(&email, &password).await?;
            let created = client
                .create_startup(&token, &name, &description, &pitch, multiplier)
                .await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
            Ok(())
        }

        Commands::UpdateMultiplier {
            api_url,
            email,
            password,
            startup_id,
            multiplier,
        } => {
            let client = VentureClient::new(api_url)?;
            let token = client.login(&email, &password).await?;
            let updated = client
                .update_multiplier(&token, &startup_id, multiplier)
                .await?;
            println!("{}", serde_json::to_string_pretty(&updated)?);
            Ok(())
        }
    }
}

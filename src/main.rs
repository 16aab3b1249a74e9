use clap::{Parser, Subcommand};
use watchlist::{AppState, commands, config::Config, db, store::Store};

/// Personal movie watchlist
#[derive(Parser)]
#[command(name = "watchlist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web application (default)
    Serve,

    /// Create the database tables
    Initdb {
        /// Drop every table first
        #[arg(long)]
        drop: bool,
    },

    /// Insert sample movies
    Forge,

    /// Create the site owner, or change its credentials
    Admin {
        /// Login name
        #[arg(long)]
        username: String,
        /// Password, stored hashed
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,watchlist=debug,sqlx=warn".to_string()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let mut stdout = std::io::stdout();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await?,
        Commands::Initdb { drop } => {
            let store = Store::new(db::connect(&config.database_url).await?);
            commands::initdb(&store, drop, &mut stdout).await?;
        },
        Commands::Forge => {
            let store = Store::new(db::connect(&config.database_url).await?);
            commands::forge(&store, &mut stdout).await?;
        },
        Commands::Admin { username, password } => {
            let store = Store::new(db::connect(&config.database_url).await?);
            commands::admin(&store, &username, &password, &mut stdout).await?;
        },
    }

    Ok(())
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let db = db::connect_and_migrate(&config.database_url).await?;
    let addr = config.addr;
    let state = AppState::new(config, Store::new(db));
    let app = watchlist::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

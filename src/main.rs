use anyhow::Context;
use axum::Router;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vitrine::config::SiteConfig;
use vitrine::features::pages::{AppState, pages_router};
use vitrine::services::PageAssembler;
use vitrine::services::export::export_site;
use vitrine::store::build_store;

#[derive(Parser, Debug)]
#[command(name = "vitrine", about = "Assembles the site's pages from its JSON content")]
struct Cli {
    /// Content directory or site URL; overrides CONTENT_SOURCE
    #[arg(long, global = true)]
    content: Option<String>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve assembled pages over HTTP (default)
    Serve {
        /// Address to listen on; overrides BIND_ADDR
        #[arg(long)]
        bind: Option<String>,
    },
    /// Render every page into a directory
    Export {
        #[arg(long, default_value = "./dist")]
        out: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    // load centralized config, command line wins over the environment
    let mut config = SiteConfig::from_env();
    if let Some(content) = &cli.content {
        config = config.with_content_source(content);
    }

    let store = build_store(&config)?;
    let assembler = Arc::new(PageAssembler::new(store, config.nested_dir.clone()));

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Export { out } => {
            let written = export_site(&assembler, &out).await?;
            tracing::info!("Exported {} pages to {}", written.len(), out.display());
        }
        Command::Serve { bind } => {
            let bind_addr = bind.unwrap_or_else(|| config.bind_addr.clone());

            let app_state = AppState {
                assembler,
                static_dir: config.static_dir.clone(),
            };
            let app: Router = pages_router().with_state(app_state);

            let listener = tokio::net::TcpListener::bind(&bind_addr)
                .await
                .with_context(|| format!("Failed to bind {}", bind_addr))?;
            tracing::info!("Server listening on http://{}", bind_addr);

            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

//! Glint particle service.
//!
//! Serves the editor's particle listing over HTTP, backed by a local
//! document store.
//!
//! Usage:
//!   glint-server --port 2020 --db glint.db --seed

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use glint_catalog::{CATEGORY_COLLECTION, CatalogConfig, PARTICLE_COLLECTION, ParticleCatalog};
use glint_server::seed::{bootstrap_admin, install_demo_data};
use glint_server::{AppState, SessionRegistry, build_router};
use glint_store::DocumentStore;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "glint-server")]
#[command(about = "Glint particle listing service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "2020")]
    port: u16,

    /// Path to the document store
    #[arg(long, default_value = "glint.db")]
    db: String,

    /// Serve every document to every caller (no ownership scoping)
    #[arg(long)]
    open_access: bool,

    /// Ceiling on records per listing (unbounded when absent)
    #[arg(long)]
    max_list: Option<usize>,

    /// Install demo categories and particles into an empty store
    #[arg(long)]
    seed: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Glint server starting...");
    let store =
        Arc::new(DocumentStore::open(&args.db).context("failed to open document store")?);
    info!(
        "document store ready: {} particles, {} categories",
        store.count(PARTICLE_COLLECTION)?,
        store.count(CATEGORY_COLLECTION)?
    );

    let sessions = Arc::new(SessionRegistry::new());
    let (admin, admin_token) = bootstrap_admin(&sessions);

    let demo = if args.seed {
        install_demo_data(&store, &sessions).context("failed to install demo data")?
    } else {
        None
    };

    let config = CatalogConfig {
        ownership_enforced: !args.open_access,
        max_results: args.max_list,
    };
    let catalog = Arc::new(ParticleCatalog::new(Arc::clone(&store), config));
    let state = AppState {
        catalog,
        sessions: Arc::clone(&sessions),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .context("failed to bind HTTP port")?;

    println!("\n========================================");
    println!("  Glint Particle Service Running");
    println!("========================================");
    println!("  Port:        {}", args.port);
    println!("  Store:       {}", args.db);
    println!(
        "  Scoping:     {}",
        if args.open_access { "open access" } else { "per owner" }
    );
    println!("  Admin:       {} ({})", admin.name, admin.id);
    println!("  Admin token: {}", admin_token);
    if let Some(demo) = &demo {
        println!("  Demo user:   {} ({})", demo.editor.name, demo.editor.id);
        println!("  Demo token:  {}", demo.editor_token);
    }
    println!("========================================\n");

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}

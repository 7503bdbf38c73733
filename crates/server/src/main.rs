use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use clap::Parser;
use server::{app, cli::Cli, db::Storage, AppState};
use shared::{configure_tracing, load_dotenv};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Unable to listen for shutdown signal: {e}");
        // Keep serving, the process will have to be killed
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    load_dotenv()?;
    configure_tracing()?;

    let args = Cli::parse();
    debug!(?args);

    // Run the migrations and create the pool before launching the server
    let storage = Storage::open(&args.database_uri)?;

    let socket = SocketAddr::new(IpAddr::from_str(&args.bind_addr)?, args.port);

    let listener = TcpListener::bind(socket).await?;
    info!("Your app is listening on port {}", listener.local_addr()?.port());

    let state = AppState::new(storage.clone(), args);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close()?;

    Ok(())
}

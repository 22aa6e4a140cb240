use clap::Parser;
use tokio_util::sync::CancellationToken;

mod handlers;
mod logging;
mod pages;
mod routes;
mod state;


use self::state::AppContext;

/// 汝城话 pronunciation dictionary server.
#[derive(Parser)]
#[command(name = "fayin")]
#[command(about = "Rucheng dialect pronunciation dictionary server", version)]
struct Cli {
    /// Address to listen on, e.g. 127.0.0.1:8030
    #[arg(long)]
    listen: Option<String>,

    /// Dataset file path or http(s) URL
    #[arg(long)]
    dataset: Option<String>,

    /// Directory served under /static
    #[arg(long)]
    static_dir: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.log_json);

    let mut config = fayin_config::Config::new();
    if let Some(listen) = cli.listen {
        config.server.listen = listen;
    }
    if let Some(dataset) = cli.dataset {
        config.dataset.source = dataset;
    }
    if let Some(static_dir) = cli.static_dir {
        config.server.static_dir = static_dir;
    }

    let context = AppContext::new(config);

    let cancel = CancellationToken::new();
    context.spawn_load(cancel.clone());

    let listener = tokio::net::TcpListener::bind(&context.config.server.listen).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let router = routes::build_router(context);
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            routes::shutdown_signal().await;
            tracing::info!("Shutdown requested");
            cancel.cancel();
        })
        .await?;

    tracing::info!("Server exited");
    Ok(())
}

use clap::Parser;
use todo_core::TodoStore;
use todo_server::Config;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    todo_server::logging::init();

    let config = Config::parse();
    let store = TodoStore::seeded(config.id_policy);
    info!(items = store.len(), id_policy = %config.id_policy, "seeded todo store");

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    todo_server::run(listener, store).await?;
    Ok(())
}

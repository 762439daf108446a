use anyhow::Context;
use safebuy::kernel::config::load_config;
use safebuy_logger::Logging;
use safebuy_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = Logging::builder(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(Some("site")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}

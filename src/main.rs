use clap::Parser;
use line_kana_bot::utils::{logger, validation::Validate};
use line_kana_bot::{build_dispatcher, server, BotConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BotConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting line-kana-bot");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let dispatcher = build_dispatcher(&config);
    let app = server::router(dispatcher);

    server::serve(app, config.port).await?;

    tracing::info!("Server stopped");
    Ok(())
}

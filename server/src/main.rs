#![deny(clippy::pedantic)]

mod web;

use clap::Parser;
use dissect::app::{openai::OpenAi, Analyzer};
use dissect::config::Config;

#[derive(Debug, clap::Parser)]
#[command(version, about, long_about = None)]
struct App {
    /// Address to bind, as host:port. Defaults to 0.0.0.0 on $PORT (or 3000).
    #[clap(long, value_parser = web::parse_addr_option)]
    serve: Option<(String, u16)>,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] dissect::config::Error),

    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

fn default_addr() -> (String, u16) {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    ("0.0.0.0".to_string(), port)
}

#[actix_web::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let app = App::parse();
    let config = Config::from_env()?;
    let analyzer = Analyzer::new(OpenAi::from_config(&config)?);

    let addr = app.serve.unwrap_or_else(default_addr);
    log::info!("Dissect backend running on {}:{}", addr.0, addr.1);

    web::Server::new(addr, analyzer).run().await?;
    Ok(())
}

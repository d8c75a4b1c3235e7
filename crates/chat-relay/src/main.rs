use anthropic_api::Anthropic;
use clap::Parser;

use chat_relay::config::{DEFAULT_HOST, DEFAULT_PORT, RelayConfig};
use chat_relay::server;
use chat_relay::state::RelayState;

#[derive(Debug, Parser)]
#[command(name = "chat-relay", about = "Relay chat messages to the Anthropic Messages API")]
struct Args {
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Answer every POST with a canned payload without contacting the API.
    #[arg(long)]
    echo: bool,
}

fn build_client(config: &RelayConfig) -> anyhow::Result<Anthropic> {
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout))
        .build()?;
    Ok(Anthropic::builder()
        .api_key(config.api_key.clone().unwrap_or_default())
        .client(http)
        .build())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = RelayConfig::from_env()?;
    config.host = args.host;
    config.port = args.port;
    config.echo |= args.echo;

    if !config.echo && config.api_key.is_none() {
        anyhow::bail!("ANTHROPIC_API_KEY must be set (or run with --echo)");
    }

    let client = build_client(&config)?;
    let state = RelayState::new(&config, client);

    server::startup(config, state).await?;
    Ok(())
}

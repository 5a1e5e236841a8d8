use tvdash::adapters::ReqwestHttpClient;
use tvdash::api::ShowsApi;
use tvdash::cli::{parse_args, run_cli_command, run_dashboard_command};
use tvdash::startup::{configure_logging, DashConfig};
use tvdash::state::ShowStore;

use color_eyre::Result;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }

    configure_logging();

    let config = DashConfig::from_env();
    config.validate()?;
    debug!(base_url = %config.base_url, timeout_secs = config.timeout.as_secs(), "Starting tvdash");

    let client = ReqwestHttpClient::from_config(&config)?;
    let api = ShowsApi::from_config(client, &config);
    let store = ShowStore::from_config(api, &config);

    run_dashboard_command(&store, &command).await
}

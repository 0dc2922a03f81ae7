use auth::ApiCredentials;
use bingx_rest::BingxRestClient;
use common::BingxEnvironment;
use tracing::info;

/// Read-only entry point: sync the clock and look up one order.
///
/// Usage: `runner <symbol> <order-id>` with `BINGX_API_KEY` /
/// `BINGX_SECRET_KEY` (and optionally `BINGX_ENVIRONMENT`) set.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    common::init_logging();

    let mut args = std::env::args().skip(1);
    let (symbol, order_id) = match (args.next(), args.next()) {
        (Some(symbol), Some(order_id)) => (symbol, order_id.parse::<i64>()?),
        _ => {
            eprintln!("usage: runner <symbol> <order-id>");
            std::process::exit(2);
        }
    };

    let credentials = ApiCredentials::from_env()?;
    let environment = BingxEnvironment::from_env();

    info!(%environment, symbol = %symbol, order_id, "Querying order");

    let client = BingxRestClient::with_environment(credentials, environment)?;
    client.sync_time().await?;

    let order = client.query_order(&symbol, order_id).await?;

    println!(
        "{} | order {} | {} {} | status: {}",
        order.symbol, order.order_id, order.side, order.order_type, order.status
    );
    if let Some(executed) = order.executed_qty {
        println!("executed: {}", executed);
    }

    Ok(())
}

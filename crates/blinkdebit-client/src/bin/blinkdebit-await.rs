//! Wait for a Blink Debit resource to resolve.

use blinkdebit_client::{BlinkDebitClient, BlinkPayError, CancellationToken};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    QuickPayment,
    SingleConsent,
    EnduringConsent,
    Payment,
}

#[derive(Debug, Parser)]
#[command(
    name = "blinkdebit-await",
    version,
    about = "Poll a Blink Debit resource until it resolves"
)]
struct Cli {
    /// Resource to wait for
    #[arg(value_enum)]
    kind: Kind,

    /// Quick payment, consent or payment ID
    id: String,

    /// Time budget in seconds (0 checks exactly once)
    #[arg(default_value_t = 300)]
    max_wait_secs: u64,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let token = CancellationToken::new();
    let client = match BlinkDebitClient::from_env() {
        Ok(client) => client.with_cancellation(token.clone()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl-C received, stopping");
            token.cancel();
        }
    });

    let id = cli.id.as_str();
    let max_wait_secs = cli.max_wait_secs;
    tracing::info!(kind = ?cli.kind, id, max_wait_secs, "Waiting for resource");

    let result = match cli.kind {
        Kind::QuickPayment => client
            .await_successful_quick_payment(id, max_wait_secs)
            .await
            .and_then(to_json),
        Kind::SingleConsent => client
            .await_authorised_single_consent(id, max_wait_secs)
            .await
            .and_then(to_json),
        Kind::EnduringConsent => client
            .await_authorised_enduring_consent(id, max_wait_secs)
            .await
            .and_then(to_json),
        Kind::Payment => client
            .await_successful_payment(id, max_wait_secs)
            .await
            .and_then(to_json),
    };

    match result {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn to_json<T: serde::Serialize>(value: T) -> Result<String, BlinkPayError> {
    Ok(serde_json::to_string_pretty(&value)?)
}

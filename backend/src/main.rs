use std::process;
use tracing::{event, Level};
use tracing_subscriber::{prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "nightmode_backend=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let exit_code = match nightmode_backend::run().await {
        Err(e) => {
            event!(Level::ERROR, "Night mode server error {e}");
            // failure
            1
        }
        Ok(()) => 0,
    };

    process::exit(exit_code);
}

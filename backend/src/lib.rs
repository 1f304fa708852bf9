use rust_embed::RustEmbed;
use std::{env, net::IpAddr, str::FromStr, sync::Arc};
use tokio_util::sync::CancellationToken;
use tracing::{event, Level};

mod error;
mod web_server;

#[cfg(test)]
mod tests;

/// retrieve the version from Cargo.toml, note that this will yield an error
/// when compiling without cargo
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};

pub struct AppState {
    prefix: String,
    index: Option<String>,
}

#[derive(RustEmbed)]
#[folder = "../frontend/dist"]
pub struct Asset;

/// get a configuration from the environment or return default value
pub fn parse_env_var<T: FromStr>(name: &'static str, default: T) -> T {
    env::var(name)
        .unwrap_or_default()
        .parse::<T>()
        .unwrap_or(default)
}

/// normalize a path prefix to a single leading slash and no trailing slash
pub fn parse_prefix(raw: &str) -> Result<String> {
    let prefix = format!("/{}", raw.trim_matches('/'));

    if prefix.contains(['*', ':', '{', '}']) {
        return Err(Error::InvalidPrefix(raw.to_owned()));
    }

    Ok(prefix)
}

/// point the asset includes of the built page at the static route
fn rewrite_index(index: &str, path_prefix: &str) -> String {
    let path_prefix = if path_prefix == "/" { "" } else { path_prefix };

    index
        .replace("href=\"/", &format!("href=\"{path_prefix}/static/"))
        .replace(
            "'/nightmode-frontend",
            &format!("'{path_prefix}/static/nightmode-frontend"),
        )
}

fn load_index(path_prefix: &str) -> Option<String> {
    let index = Asset::get("index.html")?;
    let index = String::from_utf8(index.data.to_vec()).ok()?;

    Some(rewrite_index(&index, path_prefix))
}

#[derive(Clone, Debug)]
pub struct Config {
    pub http_host: IpAddr,
    pub http_port: u16,
    pub prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            http_host: parse_env_var("HTTP_HOST", [127, 0, 0, 1].into()),
            http_port: parse_env_var("HTTP_PORT", 1080),
            prefix: parse_prefix(&env::var("NIGHTMODE_PREFIX").unwrap_or_default())?,
        })
    }
}

/// serve the page until the token is cancelled
pub async fn serve(config: Config, token: CancellationToken) -> Result<()> {
    let index = load_index(&config.prefix);
    if index.is_none() {
        event!(
            Level::WARN,
            "no index.html embedded, build the frontend with trunk first"
        );
    }

    let state = Arc::new(AppState {
        prefix: config.prefix,
        index,
    });

    web_server::http_server(config.http_host, config.http_port, state, token).await
}

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let token = CancellationToken::new();

    let shutdown = token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            event!(Level::ERROR, "Could not listen for shutdown signal {e}");
        }

        event!(Level::INFO, "Shutting down");
        shutdown.cancel();
    });

    event!(
        Level::INFO,
        "Night mode HTTP server starting on {}:{}",
        config.http_host,
        config.http_port
    );

    serve(config, token).await
}

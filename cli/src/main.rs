use clap::{Parser, Subcommand};
use collectibles::{NftDetail, is_owner};
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status} for {path}: {message}")]
    ServerError { status: u16, path: String, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gallery-cli", about = "Collectibles gallery API CLI")]
struct Cli {
    #[arg(long, env = "GALLERY_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// List one page of the collection.
    Collection {
        #[arg(long)]
        start_after: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List the collectibles held by a wallet.
    Owned { address: String },
    /// Show one collectible with its physical print status.
    Nft { token_id: String },
    /// Print whether `--wallet` may order prints of a token.
    IsOwner {
        #[arg(long)]
        wallet: String,
        token_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Collection { start_after, limit } => {
            let url = api_url(&ctx.base_url, &["api", "nfts"], &collection_query(start_after.as_deref(), limit))?;
            print_json(&api_get(url).await?)
        }
        Command::Owned { address } => {
            let url = api_url(&ctx.base_url, &["api", "wallets", &address, "nfts"], &[])?;
            print_json(&api_get(url).await?)
        }
        Command::Nft { token_id } => {
            let url = api_url(&ctx.base_url, &["api", "nfts", &token_id], &[])?;
            print_json(&api_get(url).await?)
        }
        Command::IsOwner { wallet, token_id } => {
            let json = api_get(api_url(&ctx.base_url, &["api", "nfts", &token_id], &[])?).await?;
            println!("{}", wallet_owns(&json, &wallet)?);
            Ok(())
        }
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = api_url(&cli.base_url, &["healthz"], &[])?;
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            path: "/healthz".to_owned(),
            message: "health check failed".to_owned(),
        });
    }
    println!("ok");
    Ok(())
}

fn collection_query(start_after: Option<&str>, limit: Option<u32>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(start_after) = start_after.filter(|s| !s.trim().is_empty()) {
        params.push(("start_after", start_after.to_owned()));
    }
    if let Some(limit) = limit {
        params.push(("limit", limit.to_string()));
    }
    params
}

/// Join `segments` onto the base URL, percent-encoding each segment and
/// query value.
fn api_url(base_url: &str, segments: &[&str], query: &[(&str, String)]) -> Result<reqwest::Url, CliError> {
    let mut url = reqwest::Url::parse(base_url).map_err(|e| CliError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| CliError::InvalidBaseUrl(base_url.to_owned()))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}

/// Apply the gallery's ownership rule to a `/api/nfts/{id}` response.
fn wallet_owns(detail: &Value, wallet: &str) -> Result<bool, CliError> {
    let detail: NftDetail = serde_json::from_value(detail.clone())?;
    Ok(is_owner(Some(wallet), detail.nft.owner.as_deref()))
}

async fn api_get(url: reqwest::Url) -> Result<Value, CliError> {
    let client = reqwest::Client::new();
    let path = url.path().to_owned();

    let response = client.get(url).send().await?;
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or(Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), path, message: value.to_string() });
    }

    Ok(value)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

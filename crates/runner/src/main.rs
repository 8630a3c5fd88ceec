use auth::ApiCredentials;
use common::TuyaEnvironment;
use serde_json::Value;
use tracing::info;
use tuya_rest::{RequestParams, TuyaRestClient};

/// One-shot signed call against the open API.
///
/// Usage: `runner <path> [method] [body-json]`
///
/// Credentials come from `TUYA_CLIENT_ID`/`TUYA_SECRET` (or a `.env` file),
/// the data center from `TUYA_REGION`.
#[tokio::main]
async fn main() {
    common::init_logging();

    let credentials = match ApiCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .unwrap_or_else(|| "/v1.0/token?grant_type=1".to_string());
    let method = args.next().unwrap_or_else(|| "GET".to_string());
    let body = args.next();

    let environment = TuyaEnvironment::from_env();

    info!(region = %environment, method = %method, path = %path, "Issuing signed request");

    let mut params = RequestParams::new(
        credentials.client_id(),
        credentials.expose_secret(),
        environment.api_host(),
        &path,
        &method,
    );

    if let Some(raw) = body {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => params.body = value,
            Err(err) => {
                eprintln!("body is not valid JSON: {}", err);
                std::process::exit(1);
            }
        }
    }

    let client = match TuyaRestClient::new() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    match client.execute(params).await {
        Ok(payload) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
            );
        }
        Err(err) => {
            tracing::error!(error = %err, details = %err.details(), "Request failed");
            std::process::exit(1);
        }
    }
}

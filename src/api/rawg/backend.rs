use crate::Status;
use serde::de::DeserializeOwned;
use tracing::error;

use super::RawgConnection;

/// Sends a GET request to a RAWG service endpoint.
///
/// The account API key is attached as a query parameter on every request.
pub async fn get<T: DeserializeOwned>(
    connection: &RawgConnection,
    endpoint: &str,
    params: &[(&str, String)],
) -> Result<T, Status> {
    connection.qps.wait().await;

    let uri = format!("{RAWG_SERVICE_URL}/{endpoint}");
    let resp = reqwest::Client::new()
        .get(&uri)
        .query(params)
        .query(&[("key", connection.api_key.as_str())])
        .send()
        .await?;

    let text = resp.text().await?;
    let resp = serde_json::from_str::<T>(&text).map_err(|_| {
        let msg = format!("Received unexpected response: {text}\nuri: {uri}");
        error!(msg);
        Status::internal(msg)
    });

    resp
}

const RAWG_SERVICE_URL: &str = "https://api.rawg.io/api";

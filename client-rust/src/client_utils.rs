use crate::ContentApiError;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Issue a GET request with query pairs, parse the JSON response.
/// Throws error on non-success status code.
pub async fn get_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
    headers: reqwest::header::HeaderMap,
) -> Result<R, ContentApiError> {
    tracing::debug!(url, "content api request");
    let response = client.get(url).query(query).headers(headers).send().await?;
    if response.status().is_success() {
        Ok(response.json::<R>().await?)
    } else {
        Err(ContentApiError::StatusCode(
            response.status(),
            response.text().await.unwrap_or_default(),
        ))
    }
}

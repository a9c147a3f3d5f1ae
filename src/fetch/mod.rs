//! Page fetching.
//!
//! One GET, no retries. Anything but `200 OK` is a failure and stops the run.

use log::{debug, error, info};
use reqwest::StatusCode;

use crate::error_handling::FetchError;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Fetches the raw HTML of `url`.
///
/// # Arguments
///
/// * `client` - HTTP client from [`init_client`](crate::initialization::init_client)
/// * `url` - Page to fetch
///
/// # Errors
///
/// - `FetchError::Request` on transport failure
/// - `FetchError::Status` when the response status is not 200
/// - `FetchError::Body` when the body cannot be read
///
/// Every failure is logged at error level before it is returned.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    info!("Fetching {}", url);

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, ACCEPT_HTML)
        .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
        .send()
        .await
        .map_err(|source| {
            error!("Error: request to {} failed: {}", url, source);
            FetchError::Request {
                url: url.to_string(),
                source,
            }
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        error!("Failed to fetch data. Status code: {}", status.as_u16());
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| {
        error!("Error: reading body from {} failed: {}", url, source);
        FetchError::Body {
            url: url.to_string(),
            source,
        }
    })?;

    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

use std::fmt;

use gloo_net::http::Request;
use trail_guardian_lib::trail::{parse_trail_list, Trail};

pub const TRAILS_URL: &str = "http://localhost:8000/api/v1/trails/";

#[derive(Debug)]
pub enum FetchError {
    Network(gloo_net::Error),
    Status(u16),
    Decode(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(err) => write!(f, "request failed: {err}"),
            FetchError::Status(status) => write!(f, "server responded with status {status}"),
            FetchError::Decode(err) => write!(f, "response is not a list of trails: {err}"),
        }
    }
}

/// The one request made per page load. No retries.
pub async fn fetch_trails() -> Result<Vec<Trail>, FetchError> {
    let response = Request::get(TRAILS_URL)
        .send()
        .await
        .map_err(FetchError::Network)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response.text().await.map_err(FetchError::Network)?;

    parse_trail_list(&body).map_err(FetchError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(FetchError::Status(502).to_string(), "server responded with status 502");

        let decode = parse_trail_list("{}").unwrap_err();
        assert!(FetchError::Decode(decode).to_string().starts_with("response is not a list of trails"));
    }
}

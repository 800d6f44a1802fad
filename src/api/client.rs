use std::time::Duration;

use http::{HeaderMap, HeaderValue, header};
use reqwest::Client;

use crate::prelude::*;

/// Build a default client.
pub fn try_new() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));
    Ok(Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .default_headers(headers)
        .build()?)
}

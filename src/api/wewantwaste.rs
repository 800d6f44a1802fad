//! [We Want Waste](https://wewantwaste.co.uk) skips-by-location client.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;

use crate::{
    api::client,
    core::{catalog::CatalogSource, option::SkipOption},
    prelude::*,
};

pub struct Api {
    client: Client,
    url: Url,
}

/// Where the skip is going to be placed.
#[derive(Clone, Debug, Serialize)]
pub struct Location {
    pub postcode: String,
    pub area: String,
}

impl Api {
    /// Note that the base URL must end with a slash:
    /// for example, `https://app.wewantwaste.co.uk/api/`.
    #[instrument(skip_all, fields(base_url = %base_url))]
    pub fn new(base_url: &Url, location: &Location) -> Result<Self> {
        let mut url = base_url
            .join("skips/by-location")
            .with_context(|| format!("invalid base URL: `{base_url}`"))?;
        url.set_query(Some(&serde_qs::to_string(location)?));
        Ok(Self { client: client::try_new()?, url })
    }

    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn get_skips(&self) -> Result<Vec<SkipOption>> {
        info!("fetching skips…");
        let skips: Vec<SkipOption> = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .context("failed to call the skips API")?
            .error_for_status()
            .context("the skips API request failed")?
            .json()
            .await
            .context("failed to deserialize the skips")?;
        info!(n_skips = skips.len(), "fetched");
        Ok(skips)
    }
}

#[async_trait]
impl CatalogSource for Api {
    async fn fetch(&self) -> Result<Vec<SkipOption>> {
        self.get_skips().await
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;
    use crate::core::catalog::CatalogState;

    /// Answer the first request on a local port with the canned status and body.
    async fn serve_once(status: &'static str, body: &'static str) -> Result<Url> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;
        tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut request = [0; 4096];
                let _ = stream.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\n\
                     content-type: application/json\r\n\
                     content-length: {}\r\n\
                     connection: close\r\n\r\n{body}",
                    body.len(),
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        Ok(Url::parse(&format!("http://{address}/api/"))?)
    }

    fn lowestoft() -> Location {
        Location { postcode: "NR32".to_string(), area: "Lowestoft".to_string() }
    }

    #[test]
    fn url_ok() -> Result {
        let api = Api::new(&Url::parse("https://app.wewantwaste.co.uk/api/")?, &lowestoft())?;
        assert_eq!(
            api.url.as_str(),
            "https://app.wewantwaste.co.uk/api/skips/by-location?postcode=NR32&area=Lowestoft",
        );
        Ok(())
    }

    #[test]
    fn response_ok() -> Result {
        // language=json
        let body = r#"[
            {
                "id": 17933,
                "size": 4,
                "hire_period_days": 14,
                "transport_cost": null,
                "per_tonne_cost": null,
                "price_before_vat": 278,
                "vat": 20,
                "postcode": "NR32",
                "area": "",
                "forbidden": false,
                "created_at": "2025-04-03T13:51:46.897146",
                "updated_at": "2025-04-07T13:16:52.813",
                "allowed_on_road": true,
                "allows_heavy_waste": true
            },
            {
                "id": 17934,
                "size": 6,
                "hire_period_days": 14,
                "transport_cost": null,
                "per_tonne_cost": null,
                "price_before_vat": 305,
                "vat": 20,
                "postcode": "NR32",
                "area": "",
                "forbidden": false,
                "created_at": "2025-04-03T13:51:46.897146",
                "updated_at": "2025-04-07T13:16:52.813",
                "allowed_on_road": true,
                "allows_heavy_waste": true
            }
        ]"#;
        let skips = serde_json::from_str::<Vec<SkipOption>>(body)?;
        assert_eq!(skips.len(), 2);
        assert_eq!(skips[1].total_price().0, 366);
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_host_fails() -> Result {
        let api = Api::new(&Url::parse("http://127.0.0.1:9/api/")?, &lowestoft())?;
        assert!(matches!(api.load().await, CatalogState::Failed(_)));
        Ok(())
    }

    #[tokio::test]
    async fn served_skips_ok() -> Result {
        // language=json
        let body = r#"[
            {"id": 17934, "size": 6, "hire_period_days": 14, "price_before_vat": 305, "vat": 20}
        ]"#;
        let api = Api::new(&serve_once("200 OK", body).await?, &lowestoft())?;
        let state = api.load().await;
        assert_eq!(state.options().len(), 1);
        assert_eq!(state.options()[0].total_price().0, 366);
        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_fails() -> Result {
        let url = serve_once("200 OK", r#"[{"id": 17933, "size": "#).await?;
        let api = Api::new(&url, &lowestoft())?;
        let state = api.load().await;
        assert!(
            matches!(
                &state,
                CatalogState::Failed(reason) if reason.contains("failed to deserialize"),
            ),
            "{state:?}",
        );
        Ok(())
    }

    #[tokio::test]
    async fn error_status_fails() -> Result {
        let url = serve_once("503 Service Unavailable", "[]").await?;
        let api = Api::new(&url, &lowestoft())?;
        let state = api.load().await;
        assert!(
            matches!(&state, CatalogState::Failed(reason) if reason.contains("503")),
            "{state:?}",
        );
        Ok(())
    }

    #[tokio::test]
    #[ignore = "makes the API request"]
    async fn get_skips_ok() -> Result {
        let api = Api::new(&Url::parse("https://app.wewantwaste.co.uk/api/")?, &lowestoft())?;
        let skips = api.get_skips().await?;
        assert!(!skips.is_empty());
        Ok(())
    }
}

use async_trait::async_trait;
use itertools::Itertools;

use crate::{
    core::{
        option::{SkipOption, SkipSize},
        pricing,
    },
    prelude::*,
    quantity::{money::Pounds, percent::Percent},
};

/// Anything that can produce the ordered list of skips on offer.
#[async_trait]
pub trait CatalogSource: Sync {
    async fn fetch(&self) -> Result<Vec<SkipOption>>;

    /// Fetch and validate the catalog, folding any failure into [`CatalogState::Failed`].
    #[instrument(skip_all)]
    async fn load(&self) -> CatalogState {
        match self.fetch().await.and_then(validate) {
            Ok(options) => {
                info!(n_options = options.len(), "loaded the catalog");
                CatalogState::Loaded(options)
            }
            Err(error) => {
                warn!("failed to load the catalog: {error:#}");
                CatalogState::Failed(format!("{error:#}"))
            }
        }
    }
}

/// Where the catalog is at, as far as the grid is concerned.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogState {
    Loading,
    Loaded(Vec<SkipOption>),
    Failed(String),
}

impl CatalogState {
    /// Options on display, empty unless loaded.
    pub fn options(&self) -> &[SkipOption] {
        match self {
            Self::Loaded(options) => options,
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}

/// Reject catalogs with negative or unpriceable amounts, or duplicate sizes.
pub fn validate(options: Vec<SkipOption>) -> Result<Vec<SkipOption>> {
    for option in &options {
        ensure!(
            option.price_before_vat >= Pounds::zero(),
            "skip #{} has a negative price: {}",
            option.id,
            option.price_before_vat,
        );
        ensure!(
            option.vat >= Percent::zero(),
            "skip #{} has a negative VAT: {}",
            option.id,
            option.vat,
        );
        ensure!(
            pricing::checked_total_price(option.price_before_vat, option.vat).is_some(),
            "skip #{} is priced out of range: {} plus {} VAT",
            option.id,
            option.price_before_vat,
            option.vat,
        );
    }
    if let Some(duplicate) = options.iter().map(|option| option.size).duplicates().next() {
        bail!("duplicate skip size: {duplicate} yards");
    }
    Ok(options)
}

/// The compiled-in catalog.
pub struct StaticCatalog;

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self) -> Result<Vec<SkipOption>> {
        Ok(Self::options())
    }
}

impl StaticCatalog {
    pub fn options() -> Vec<SkipOption> {
        [
            (17933, 4, 278.0, true, false, "30-40 bin bags", "Small home projects"),
            (17934, 6, 305.0, true, true, "50-60 bin bags", "Kitchen renovations"),
            (17935, 8, 375.0, true, false, "70-80 bin bags", "Bathroom renovations"),
            (17936, 10, 400.0, false, false, "90-100 bin bags", "Large home projects"),
            (17937, 12, 439.0, false, false, "110-120 bin bags", "Commercial projects"),
            (17938, 14, 470.0, false, false, "130-140 bin bags", "Large commercial work"),
        ]
        .into_iter()
        .map(|(id, size, price_before_vat, capabilities, popular, capacity, ideal_for)| {
            SkipOption::builder()
                .id(id)
                .size(SkipSize(size))
                .hire_period_days(14)
                .price_before_vat(Pounds(price_before_vat))
                .vat(Percent(20.0))
                .allowed_on_road(capabilities)
                .allows_heavy_waste(capabilities)
                .popular(popular)
                .capacity(capacity)
                .ideal_for(ideal_for)
                .build()
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::money::WholePounds;

    struct FailingCatalog;

    #[async_trait]
    impl CatalogSource for FailingCatalog {
        async fn fetch(&self) -> Result<Vec<SkipOption>> {
            bail!("HTTP status server error (503 Service Unavailable)")
        }
    }

    struct EmptyCatalog;

    #[async_trait]
    impl CatalogSource for EmptyCatalog {
        async fn fetch(&self) -> Result<Vec<SkipOption>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn static_catalog_ok() {
        let state = StaticCatalog.load().await;
        let options = state.options();
        assert_eq!(options.len(), 6);
        assert_eq!(options.iter().filter(|option| option.popular).count(), 1);
        let six_yards = options.iter().find(|option| option.size == SkipSize(6)).unwrap();
        assert_eq!(six_yards.total_price(), WholePounds(366));
        assert!(six_yards.allowed_on_road);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_empty() {
        let state = FailingCatalog.load().await;
        assert!(matches!(&state, CatalogState::Failed(reason) if reason.contains("503")));
        assert!(state.options().is_empty());
        assert_ne!(state, EmptyCatalog.load().await);
    }

    #[tokio::test]
    async fn empty_catalog_is_loaded() {
        assert_eq!(EmptyCatalog.load().await, CatalogState::Loaded(Vec::new()));
    }

    #[test]
    fn validate_rejects_duplicate_sizes() {
        let mut options = StaticCatalog::options();
        options[1].size = SkipSize(4);
        let error = validate(options).unwrap_err();
        assert_eq!(error.to_string(), "duplicate skip size: 4 yards");
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut options = StaticCatalog::options();
        options[0].price_before_vat = Pounds(-1.0);
        assert!(validate(options).is_err());
    }

    #[test]
    fn validate_rejects_negative_vat() {
        let mut options = StaticCatalog::options();
        options[2].vat = Percent(-1.0);
        let error = validate(options).unwrap_err();
        assert_eq!(error.to_string(), "skip #17935 has a negative VAT: -1%");
    }

    #[test]
    fn validate_rejects_unpriceable_amounts() {
        let mut options = StaticCatalog::options();
        options[5].price_before_vat = Pounds(1e16);
        assert!(validate(options).is_err());

        let mut options = StaticCatalog::options();
        options[5].price_before_vat = Pounds(f64::NAN);
        assert!(validate(options).is_err());
    }

    #[test]
    fn validate_accepts_totals_beyond_u32() -> Result {
        let mut options = StaticCatalog::options();
        options[5].price_before_vat = Pounds(5_000_000_000.0);
        let options = validate(options)?;
        assert_eq!(options[5].total_price(), WholePounds(6_000_000_000));
        Ok(())
    }
}

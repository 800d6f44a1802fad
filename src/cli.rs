mod browse;
mod catalog;
mod show;

use std::{sync::Arc, time::Duration};

use clap::{Parser, Subcommand};
use reqwest::Url;

pub use self::{browse::BrowseArgs, catalog::CatalogCommandArgs, show::ShowArgs};
use crate::{
    api::wewantwaste::{self, Location},
    core::{
        catalog::{CatalogSource, CatalogState, StaticCatalog},
        continuation::{ContinueAction, SimulatedContinue},
        option::SkipSize,
        step::skip_size_flow,
        visibility::Viewport,
    },
    page::Page,
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the skip size page once.
    #[clap(name = "show")]
    Show(Box<ShowArgs>),

    /// Interact with the page line by line from the standard input.
    #[clap(name = "browse")]
    Browse(Box<BrowseArgs>),

    /// Print the available skips only.
    #[clap(name = "catalog")]
    Catalog(Box<CatalogCommandArgs>),
}

#[derive(Parser)]
pub struct CatalogArgs {
    /// Look the skips up for the postcode instead of using the built-in catalog.
    #[clap(long, env = "SKIPPER_POSTCODE", requires = "area")]
    pub postcode: Option<String>,

    #[clap(long, env = "SKIPPER_AREA", requires = "postcode")]
    pub area: Option<String>,

    /// Skips API base URL, must end with a slash.
    #[clap(
        long = "catalog-url",
        env = "SKIPPER_CATALOG_URL",
        default_value = "https://app.wewantwaste.co.uk/api/"
    )]
    pub base_url: Url,

    /// Skip size pre-selected with the built-in catalog, in yards.
    #[clap(long, env = "SKIPPER_DEFAULT_SIZE", default_value_t = SkipSize::DEFAULT)]
    pub default_size: SkipSize,
}

impl CatalogArgs {
    fn location(&self) -> Option<Location> {
        match (&self.postcode, &self.area) {
            (Some(postcode), Some(area)) => {
                Some(Location { postcode: postcode.clone(), area: area.clone() })
            }
            _ => None,
        }
    }

    /// Catalog source and the initial selection that goes with it.
    ///
    /// The built-in catalog comes with a pre-selected skip, the remote one with none.
    pub fn source(&self) -> Result<(Box<dyn CatalogSource>, Option<SkipSize>)> {
        match self.location() {
            Some(location) => {
                info!(
                    postcode = %location.postcode,
                    area = %location.area,
                    "using the remote catalog",
                );
                Ok((Box::new(wewantwaste::Api::new(&self.base_url, &location)?), None))
            }
            None => {
                info!(default_size = %self.default_size, "using the built-in catalog");
                Ok((Box::new(StaticCatalog), Some(self.default_size)))
            }
        }
    }
}

#[derive(Copy, Clone, Parser)]
pub struct ViewportArgs {
    /// Viewport width in pixels.
    #[clap(long, env = "SKIPPER_WIDTH", default_value = "1440")]
    pub width: u32,

    /// Viewport height in pixels.
    #[clap(long, env = "SKIPPER_HEIGHT", default_value = "900")]
    pub height: u32,
}

impl From<ViewportArgs> for Viewport {
    fn from(args: ViewportArgs) -> Self {
        Self { width: args.width, height: args.height }
    }
}

#[derive(Copy, Clone, Parser)]
pub struct ContinueArgs {
    /// How long continuing to the permits takes.
    #[clap(
        long = "continue-delay-millis",
        env = "SKIPPER_CONTINUE_DELAY_MILLIS",
        default_value = "1500"
    )]
    pub delay_millis: u64,
}

impl ContinueArgs {
    pub fn action(self) -> Arc<dyn ContinueAction> {
        Arc::new(SimulatedContinue { delay: Duration::from_millis(self.delay_millis) })
    }
}

#[derive(Parser)]
pub struct PageArgs {
    #[clap(flatten)]
    pub catalog: CatalogArgs,

    #[clap(flatten)]
    pub viewport: ViewportArgs,

    #[clap(flatten)]
    pub continuation: ContinueArgs,
}

impl PageArgs {
    /// Load the catalog and build the page on top of it.
    #[instrument(skip_all)]
    pub async fn load_page(&self) -> Result<Page> {
        let (source, initial_selection) = self.catalog.source()?;
        Ok(self.build_page(source.load().await, initial_selection))
    }

    pub fn build_page(&self, catalog: CatalogState, initial_selection: Option<SkipSize>) -> Page {
        Page::builder()
            .catalog(catalog)
            .maybe_initial_selection(initial_selection)
            .steps(skip_size_flow())
            .viewport(self.viewport.into())
            .continue_action(self.continuation.action())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_ok() {
        Args::command().debug_assert();
    }

    #[test]
    fn static_catalog_by_default() -> Result {
        let args = Args::try_parse_from(["skipper", "show"])?;
        let Command::Show(args) = args.command else { bail!("expected `show`") };
        assert!(args.page.catalog.location().is_none());
        let (_, initial_selection) = args.page.catalog.source()?;
        assert_eq!(initial_selection, Some(SkipSize::DEFAULT));
        assert_eq!(Viewport::from(args.page.viewport), Viewport::default());
        Ok(())
    }

    #[test]
    fn remote_catalog_has_no_selection() -> Result {
        let args = Args::try_parse_from([
            "skipper",
            "catalog",
            "--postcode",
            "NR32",
            "--area",
            "Lowestoft",
        ])?;
        let Command::Catalog(args) = args.command else { bail!("expected `catalog`") };
        let (_, initial_selection) = args.catalog.source()?;
        assert_eq!(initial_selection, None);
        Ok(())
    }

    #[test]
    fn default_size_is_configurable() -> Result {
        let args = Args::try_parse_from(["skipper", "catalog", "--default-size", "10"])?;
        let Command::Catalog(args) = args.command else { bail!("expected `catalog`") };
        let (_, initial_selection) = args.catalog.source()?;
        assert_eq!(initial_selection, Some(SkipSize(10)));
        Ok(())
    }

    #[test]
    fn postcode_requires_area() {
        assert!(Args::try_parse_from(["skipper", "show", "--postcode", "NR32"]).is_err());
    }
}

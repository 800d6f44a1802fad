use clap::Parser;

use crate::{cli::CatalogArgs, prelude::*, surface::grid::Grid};

#[derive(Parser)]
pub struct CatalogCommandArgs {
    #[clap(flatten)]
    pub catalog: CatalogArgs,
}

impl CatalogCommandArgs {
    #[instrument(skip_all)]
    pub async fn run(&self) -> Result {
        let (source, initial_selection) = self.catalog.source()?;
        println!("{}", Grid::new(&source.load().await, initial_selection));
        Ok(())
    }
}

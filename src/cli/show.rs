use clap::Parser;

use crate::{
    cli::PageArgs,
    core::option::SkipSize,
    page::{Event, Page},
    prelude::*,
};

#[derive(Parser)]
pub struct ShowArgs {
    #[clap(flatten)]
    pub page: PageArgs,

    /// Select the skip size, in yards, before rendering.
    #[clap(long)]
    pub select: Option<SkipSize>,

    /// Scroll the page down by this many pixels before rendering.
    #[clap(long, default_value = "0")]
    pub scroll: u32,
}

impl ShowArgs {
    #[instrument(skip_all)]
    pub async fn run(&self) -> Result {
        let mut page = self.page.load_page().await?;
        self.apply(&mut page);
        println!("{}", page.render());
        Ok(())
    }

    fn apply(&self, page: &mut Page) {
        if let Some(size) = self.select {
            page.handle(Event::Select(size));
        }
        page.handle(Event::Scroll(self.scroll));
    }
}

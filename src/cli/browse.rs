use std::str::FromStr;

use clap::Parser;
use tokio::{
    io::{AsyncBufReadExt, BufReader, stdin},
    sync::watch,
    task::{JoinError, JoinHandle},
};

use crate::{
    cli::PageArgs,
    core::{catalog::CatalogState, option::SkipSize, visibility::Viewport},
    page::{Event, Page},
    prelude::*,
};

#[derive(Parser)]
pub struct BrowseArgs {
    #[clap(flatten)]
    pub page: PageArgs,
}

impl BrowseArgs {
    #[instrument(skip_all)]
    pub async fn run(&self) -> Result {
        let (source, initial_selection) = self.page.catalog.source()?;
        let mut page = self.page.build_page(CatalogState::Loading, initial_selection);
        print_page(&page);
        page.handle(Event::CatalogLoaded(source.load().await));
        print_page(&page);

        let mut selection = page.subscribe_selection();
        let mut lines = BufReader::new(stdin()).lines();
        let mut pending_continue: Option<JoinHandle<Result>> = None;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("failed to read the standard input")? else {
                        break;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match line.parse::<Input>() {
                        Ok(Input::Quit) => break,
                        Ok(Input::Show) => print_page(&page),
                        Ok(Input::Continue) => {
                            if let Some(handle) = page.press_continue() {
                                pending_continue = Some(handle);
                                print_page(&page);
                            }
                        }
                        Ok(Input::Event(event)) => {
                            let is_changed = page.handle(event);
                            if announce_selection(&page, &mut selection) || is_changed {
                                trace_page(&page);
                                print_page(&page);
                            }
                        }
                        Err(error) => warn!("{error:#}"),
                    }
                }
                result = join_pending(&mut pending_continue) => {
                    pending_continue = None;
                    match result.context("the continue task has crashed")? {
                        Ok(()) => info!("continued to permits"),
                        Err(error) => error!("failed to continue: {error:#}"),
                    }
                    print_page(&page);
                }
            }
        }

        if let Some(handle) = pending_continue {
            info!("waiting for the pending continue…");
            handle.await.context("the continue task has crashed")??;
        }
        Ok(())
    }
}

fn print_page(page: &Page) {
    println!("{}\n", page.render());
}

/// Log the newly selected skip, returning whether the selection has changed since the last call.
fn announce_selection(page: &Page, selection: &mut watch::Receiver<Option<SkipSize>>) -> bool {
    if !selection.has_changed().unwrap_or(false) {
        return false;
    }
    let selected = *selection.borrow_and_update();
    match page.current_option() {
        Some(option) => info!(size = %option.size, total = %option.total_price(), "selected"),
        None => warn!(?selected, "the selected skip is not on offer"),
    }
    true
}

fn trace_page(page: &Page) {
    match page.sidebar() {
        Some(sidebar) => {
            let controller = sidebar.controller();
            debug!(
                selected = ?page.selected(),
                is_sidebar_visible = controller.is_visible(),
                layout = %controller.viewport().layout(),
                "handled",
            );
        }
        None => debug!(selected = ?page.selected(), "handled, no sidebar"),
    }
}

/// Wait for the pending task, or forever if there is none.
async fn join_pending(handle: &mut Option<JoinHandle<Result>>) -> Result<Result, JoinError> {
    match handle {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

/// Line typed in by the customer.
#[derive(Debug, PartialEq)]
enum Input {
    Event(Event),
    Continue,
    Show,
    Quit,
}

impl FromStr for Input {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = words.next().context("empty input")?;
        let input = match command {
            "select" => {
                let size = words.next().context("expected a skip size, for example: `select 8`")?;
                Self::Event(Event::Select(
                    size.parse::<SkipSize>()
                        .with_context(|| format!("invalid skip size: `{size}`"))?,
                ))
            }
            "scroll" => {
                let offset = words.next().context("expected an offset, for example: `scroll 300`")?;
                Self::Event(Event::Scroll(
                    offset.parse().with_context(|| format!("invalid offset: `{offset}`"))?,
                ))
            }
            "resize" => {
                let size =
                    words.next().context("expected a viewport, for example: `resize 390x844`")?;
                let (width, height) =
                    size.split_once('x').with_context(|| format!("invalid viewport: `{size}`"))?;
                Self::Event(Event::Resize(Viewport {
                    width: width.parse().with_context(|| format!("invalid width: `{width}`"))?,
                    height: height.parse().with_context(|| format!("invalid height: `{height}`"))?,
                }))
            }
            "toggle" => Self::Event(Event::ToggleSidebar),
            "expand" => Self::Event(Event::ToggleExpanded),
            "continue" => Self::Continue,
            "show" => Self::Show,
            "quit" | "exit" => Self::Quit,
            _ => bail!("unknown command: `{command}`"),
        };
        ensure!(words.next().is_none(), "unexpected trailing input: `{line}`");
        Ok(input)
    }
}

//! The skip size step: one selection, four surfaces.

use std::sync::Arc;

use bon::bon;
use tokio::{sync::watch, task::JoinHandle};

use crate::{
    core::{
        catalog::CatalogState,
        continuation::{ContinueAction, ContinueButton},
        option::{SkipOption, SkipSize},
        selection::SelectionStore,
        step::ProgressStep,
        visibility::{Viewport, WindowState},
    },
    prelude::*,
    surface::{
        grid::Grid,
        hero::build_hero_table,
        progress::build_progress_table,
        sidebar::{Sidebar, SidebarView},
        summary::build_summary_table,
    },
};

/// Everything the customer can do on the page, one at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Select(SkipSize),
    Scroll(u32),
    Resize(Viewport),
    ToggleSidebar,
    ToggleExpanded,
    CatalogLoaded(CatalogState),
}

pub struct Page {
    catalog: CatalogState,
    selection: SelectionStore,
    steps: Vec<ProgressStep>,
    window: watch::Sender<WindowState>,

    /// Mounted only while there is a current option.
    sidebar: Option<Sidebar>,

    continue_button: ContinueButton,
}

#[bon]
impl Page {
    #[builder]
    pub fn new(
        catalog: CatalogState,
        initial_selection: Option<SkipSize>,
        steps: Vec<ProgressStep>,
        #[builder(default)] viewport: Viewport,
        continue_action: Arc<dyn ContinueAction>,
    ) -> Self {
        let mut this = Self {
            catalog,
            selection: SelectionStore::new(initial_selection),
            steps,
            window: watch::Sender::new(WindowState { scroll_offset: 0, viewport }),
            sidebar: None,
            continue_button: ContinueButton::new(continue_action),
        };
        this.reconcile_sidebar();
        this
    }

    /// Handle the event, returning whether anything may have visibly changed.
    #[instrument(skip_all, fields(event = ?event))]
    pub fn handle(&mut self, event: Event) -> bool {
        let is_changed = match event {
            Event::Select(size) => self.selection.select(size),
            Event::Scroll(offset) => {
                self.window.send_if_modified(|state| {
                    let is_modified = state.scroll_offset != offset;
                    state.scroll_offset = offset;
                    is_modified
                })
            }
            Event::Resize(viewport) => {
                self.window.send_if_modified(|state| {
                    let is_modified = state.viewport != viewport;
                    state.viewport = viewport;
                    is_modified
                })
            }
            Event::ToggleSidebar => {
                if let Some(sidebar) = &mut self.sidebar {
                    sidebar.controller_mut().toggle();
                }
                self.sidebar.is_some()
            }
            Event::ToggleExpanded => {
                if let Some(sidebar) = &mut self.sidebar {
                    sidebar.controller_mut().toggle_expanded();
                }
                self.sidebar.is_some()
            }
            Event::CatalogLoaded(catalog) => {
                self.catalog = catalog;
                true
            }
        };
        self.reconcile_sidebar();
        is_changed
    }

    /// Press the continue button, `None` if there is nothing to continue with or it is disabled.
    pub fn press_continue(&self) -> Option<JoinHandle<Result>> {
        let Some(option) = self.current_option() else {
            warn!("no skip is selected");
            return None;
        };
        self.continue_button.press(option.clone())
    }

    pub fn is_continue_pending(&self) -> bool {
        self.continue_button.is_pending()
    }

    pub fn selected(&self) -> Option<SkipSize> {
        self.selection.selected()
    }

    /// Observe the selection, re-selections of the same size excluded.
    pub fn subscribe_selection(&self) -> watch::Receiver<Option<SkipSize>> {
        self.selection.subscribe()
    }

    pub fn current_option(&self) -> Option<&SkipOption> {
        self.selection.current_option(self.catalog.options())
    }

    pub const fn sidebar(&self) -> Option<&Sidebar> {
        self.sidebar.as_ref()
    }

    /// Render all the surfaces top to bottom.
    pub fn render(&self) -> String {
        let option = self.current_option();
        let is_continue_pending = self.is_continue_pending();
        let mut sections = vec![
            build_progress_table(&self.steps).to_string(),
            build_hero_table().to_string(),
            Grid::new(&self.catalog, self.selection.selected()).to_string(),
        ];
        if let Some(summary) = build_summary_table(option) {
            sections.push(summary.to_string());
        }
        sections.push(if is_continue_pending {
            "← Previous Step    ⏳ Continuing…".to_string()
        } else {
            "← Previous Step    Continue to Permits →".to_string()
        });
        if let Some(view) = self
            .sidebar
            .as_ref()
            .and_then(|sidebar| sidebar.render(option, &self.steps, is_continue_pending))
        {
            sections.push(render_sidebar_view(&view));
        }
        sections.join("\n\n")
    }

    /// Mount the sidebar when a current option appears and tear it down when it goes away.
    fn reconcile_sidebar(&mut self) {
        if self.current_option().is_none() {
            if self.sidebar.take().is_some() {
                debug!("unmounted the sidebar");
            }
            return;
        }
        if let Some(sidebar) = &mut self.sidebar {
            sidebar.sync();
        } else {
            debug!("mounting the sidebar…");
            self.sidebar = Some(Sidebar::mount(&self.window));
        }
    }
}

fn render_sidebar_view(view: &SidebarView) -> String {
    match view {
        SidebarView::ReopenButton(_) => format!("{view:>80}"),
        SidebarView::Panel(_) | SidebarView::CollapsedBar(_) | SidebarView::ExpandedBar(_) => {
            view.to_string()
        }
    }
}

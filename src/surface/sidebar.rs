//! Floating selection sidebar: a side panel on desktop, a bottom bar on mobile.

use std::fmt::{Display, Formatter};

use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use itertools::Itertools;
use tokio::sync::watch;

use crate::{
    core::{
        option::SkipOption,
        step::ProgressStep,
        visibility::{Layout, Orientation, VisibilityController, WindowState},
    },
    surface::{new_table, progress::format_progress_lines},
};

/// Mounted sidebar.
///
/// Listens to the window for as long as it lives: dropping it unsubscribes.
pub struct Sidebar {
    controller: VisibilityController,
    window: watch::Receiver<WindowState>,
}

impl Sidebar {
    pub fn mount(window: &watch::Sender<WindowState>) -> Self {
        let mut window = window.subscribe();
        let mut controller = VisibilityController::default();
        controller.observe(*window.borrow_and_update());
        Self { controller, window }
    }

    /// Apply the window changes since the last call.
    pub fn sync(&mut self) {
        if self.window.has_changed().unwrap_or(false) {
            let state = *self.window.borrow_and_update();
            self.controller.observe(state);
        }
    }

    pub const fn controller(&self) -> &VisibilityController {
        &self.controller
    }

    pub const fn controller_mut(&mut self) -> &mut VisibilityController {
        &mut self.controller
    }

    /// Render the sidebar, `None` meaning there is nothing to show at all.
    pub fn render(
        &self,
        option: Option<&SkipOption>,
        steps: &[ProgressStep],
        is_continue_pending: bool,
    ) -> Option<SidebarView> {
        let option = option?;
        let controller = &self.controller;
        let viewport = controller.viewport();
        if controller.is_manually_hidden() {
            return Some(SidebarView::ReopenButton(viewport.layout()));
        }
        if !controller.is_visible() {
            return None;
        }
        let view = match viewport.layout() {
            Layout::Desktop => SidebarView::Panel(build_panel_table(
                option,
                steps,
                is_continue_pending,
                viewport.orientation(),
            )),
            Layout::Mobile if controller.is_expanded() => SidebarView::ExpandedBar(
                build_expanded_bar_table(option, steps, is_continue_pending),
            ),
            Layout::Mobile => SidebarView::CollapsedBar(build_collapsed_bar_table(option)),
        };
        Some(view)
    }
}

pub enum SidebarView {
    /// The sidebar has been dismissed, only the button to bring it back is shown.
    ReopenButton(Layout),

    /// Desktop side panel.
    Panel(Table),

    /// Mobile one-line summary.
    CollapsedBar(Table),

    /// Mobile full panel.
    ExpandedBar(Table),
}

impl Display for SidebarView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReopenButton(Layout::Desktop) => f.pad("[🛒 View Selection]"),
            Self::ReopenButton(Layout::Mobile) => f.pad("[🛒]"),
            Self::Panel(table) | Self::CollapsedBar(table) | Self::ExpandedBar(table) => {
                write!(f, "{table}")
            }
        }
    }
}

fn build_panel_table(
    option: &SkipOption,
    steps: &[ProgressStep],
    is_continue_pending: bool,
    orientation: Orientation,
) -> Table {
    let mut table = new_table();
    table.set_content_arrangement(ContentArrangement::Dynamic).set_width(match orientation {
        Orientation::Landscape => 48,
        Orientation::Portrait => 40,
    });
    table.set_header(vec![
        Cell::new("Your Selection").add_attribute(Attribute::Bold),
        Cell::new("✕"),
    ]);
    add_headline_row(&mut table, option);
    add_detail_rows(&mut table, option, format_progress_lines(steps));
    add_continue_row(&mut table, is_continue_pending);
    table
}

fn build_collapsed_bar_table(option: &SkipOption) -> Table {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("{} Yard Skip", option.size)).add_attribute(Attribute::Bold),
        Cell::new(option.total_price()).add_attribute(Attribute::Bold),
        Cell::new("✕ ▲").add_attribute(Attribute::Dim),
    ]);
    table
}

fn build_expanded_bar_table(
    option: &SkipOption,
    steps: &[ProgressStep],
    is_continue_pending: bool,
) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Your Selection").add_attribute(Attribute::Bold),
        Cell::new("✕ ▼").add_attribute(Attribute::Dim),
    ]);
    add_headline_row(&mut table, option);
    let progress = steps.iter().map(|step| step.status().marker()).join(" ");
    add_detail_rows(&mut table, option, progress);
    add_continue_row(&mut table, is_continue_pending);
    table
}

fn add_headline_row(table: &mut Table, option: &SkipOption) {
    table.add_row(vec![
        Cell::new(format!("{} Yard Skip", option.size)).fg(Color::Blue),
        Cell::new(option.total_price())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
}

fn add_detail_rows(table: &mut Table, option: &SkipOption, progress: String) {
    table.add_row(vec![Cell::new("Capacity"), Cell::new(&option.capacity)]);
    table.add_row(vec![Cell::new("Ideal For"), Cell::new(&option.ideal_for)]);
    table.add_row(vec![
        Cell::new("Hire Period"),
        Cell::new(format!("{} days", option.hire_period_days)),
    ]);
    let features = option.features();
    if !features.is_empty() {
        table.add_row(vec![Cell::new("Features"), Cell::new(features.iter().join("\n"))]);
    }
    table.add_row(vec![Cell::new("Progress"), Cell::new(progress)]);
}

fn add_continue_row(table: &mut Table, is_pending: bool) {
    table.add_row(vec![
        Cell::new(""),
        if is_pending {
            Cell::new("⏳ Continuing…").add_attribute(Attribute::Dim)
        } else {
            Cell::new("Continue to Permits →").add_attribute(Attribute::Bold)
        },
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        catalog::StaticCatalog,
        option::SkipSize,
        selection::SelectionStore,
        step::skip_size_flow,
        visibility::Viewport,
    };

    const DESKTOP: Viewport = Viewport { width: 1440, height: 900 };
    const PHONE: Viewport = Viewport { width: 390, height: 844 };

    fn six_yards() -> SkipOption {
        StaticCatalog::options().remove(1)
    }

    #[test]
    fn hidden_before_scrolling() {
        let window = watch::Sender::new(WindowState { scroll_offset: 0, viewport: DESKTOP });
        let sidebar = Sidebar::mount(&window);
        assert!(sidebar.render(Some(&six_yards()), &skip_size_flow(), false).is_none());
    }

    #[test]
    fn desktop_panel_ok() {
        let window = watch::Sender::new(WindowState { scroll_offset: 0, viewport: DESKTOP });
        let mut sidebar = Sidebar::mount(&window);
        window.send_modify(|state| state.scroll_offset = 350);
        sidebar.sync();
        let view = sidebar.render(Some(&six_yards()), &skip_size_flow(), false).unwrap();
        assert!(matches!(view, SidebarView::Panel(_)));
        let rendered = view.to_string();
        assert!(rendered.contains("£366"));
        assert!(rendered.contains("Road Placement Allowed"));
        assert!(rendered.contains("Continue to Permits"));
    }

    #[test]
    fn pending_continue_is_disabled() {
        let window = watch::Sender::new(WindowState { scroll_offset: 500, viewport: DESKTOP });
        let sidebar = Sidebar::mount(&window);
        let rendered =
            sidebar.render(Some(&six_yards()), &skip_size_flow(), true).unwrap().to_string();
        assert!(rendered.contains("Continuing…"));
        assert!(!rendered.contains("Continue to Permits"));
    }

    #[test]
    fn no_current_option_renders_nothing() {
        let window = watch::Sender::new(WindowState { scroll_offset: 500, viewport: DESKTOP });
        let sidebar = Sidebar::mount(&window);
        let options = StaticCatalog::options();
        let store = SelectionStore::new(Some(SkipSize(40)));
        assert!(sidebar.render(store.current_option(&options), &skip_size_flow(), false).is_none());
    }

    #[test]
    fn dismissed_shows_reopen_button() {
        let window = watch::Sender::new(WindowState { scroll_offset: 500, viewport: DESKTOP });
        let mut sidebar = Sidebar::mount(&window);
        sidebar.controller_mut().toggle();
        let view = sidebar.render(Some(&six_yards()), &skip_size_flow(), false).unwrap();
        assert_eq!(view.to_string(), "[🛒 View Selection]");
    }

    #[test]
    fn mobile_bar_ok() {
        let window = watch::Sender::new(WindowState { scroll_offset: 500, viewport: PHONE });
        let mut sidebar = Sidebar::mount(&window);
        let option = six_yards();

        let collapsed = sidebar.render(Some(&option), &skip_size_flow(), false).unwrap();
        assert!(matches!(collapsed, SidebarView::CollapsedBar(_)));
        assert!(collapsed.to_string().contains("£366"));
        assert!(!collapsed.to_string().contains("Capacity"));

        sidebar.controller_mut().toggle_expanded();
        let expanded = sidebar.render(Some(&option), &skip_size_flow(), false).unwrap();
        assert!(matches!(expanded, SidebarView::ExpandedBar(_)));
        assert!(expanded.to_string().contains("50-60 bin bags"));
    }

    #[test]
    fn resize_switches_layout() {
        let window = watch::Sender::new(WindowState { scroll_offset: 500, viewport: DESKTOP });
        let mut sidebar = Sidebar::mount(&window);
        window.send_modify(|state| state.viewport = PHONE);
        sidebar.sync();
        let view = sidebar.render(Some(&six_yards()), &skip_size_flow(), false).unwrap();
        assert!(matches!(view, SidebarView::CollapsedBar(_)));
    }

    #[test]
    fn dropping_unsubscribes() {
        let window = watch::Sender::new(WindowState::default());
        let sidebar = Sidebar::mount(&window);
        assert_eq!(window.receiver_count(), 1);
        drop(sidebar);
        assert_eq!(window.receiver_count(), 0);
    }
}

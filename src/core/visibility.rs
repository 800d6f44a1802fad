//! Floating sidebar visibility.
//!
//! Three orthogonal axes decide what the sidebar shows:
//!
//! - whether the page is scrolled past [`SCROLL_THRESHOLD`],
//! - whether the customer has dismissed the sidebar,
//! - whether the mobile bottom bar is expanded.
//!
//! The sidebar is visible when scrolled past the threshold and not dismissed.
//! Re-opening a dismissed sidebar shows it at once, no matter the scroll position,
//! and only a subsequent threshold crossing may hide it again.
//!
//! The viewport decides placement and size only.

use std::fmt::{Display, Formatter};

use crate::prelude::*;

/// Scroll offset from the page top, in pixels, past which the sidebar floats in.
pub const SCROLL_THRESHOLD: u32 = 200;

/// Minimum viewport width of the desktop layout, in pixels.
pub const DESKTOP_MIN_WIDTH: u32 = 1280;

#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1440, height: 900 }
    }
}

impl Viewport {
    pub const fn orientation(self) -> Orientation {
        if self.width > self.height { Orientation::Landscape } else { Orientation::Portrait }
    }

    pub const fn layout(self) -> Layout {
        if self.width >= DESKTOP_MIN_WIDTH { Layout::Desktop } else { Layout::Mobile }
    }
}

/// What the window reports to its scroll and resize listeners.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct WindowState {
    pub scroll_offset: u32,
    pub viewport: Viewport,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Layout {
    /// Floating side panel.
    Desktop,

    /// Bottom bar, collapsed or expanded.
    Mobile,
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Desktop => write!(f, "desktop"),
            Self::Mobile => write!(f, "mobile"),
        }
    }
}

#[must_use]
#[derive(Clone, Debug, Default)]
pub struct VisibilityController {
    scrolled_past_threshold: bool,
    manually_hidden: bool,
    expanded: bool,
    scroll_offset: u32,
    viewport: Viewport,
}

impl VisibilityController {
    pub const fn is_visible(&self) -> bool {
        self.scrolled_past_threshold && !self.manually_hidden
    }

    pub const fn is_manually_hidden(&self) -> bool {
        self.manually_hidden
    }

    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Dismiss a shown sidebar, or re-open a dismissed one.
    #[instrument(skip_all)]
    pub fn toggle(&mut self) {
        if self.manually_hidden {
            self.manually_hidden = false;
            self.scrolled_past_threshold = true;
            info!("re-opened");
        } else {
            self.manually_hidden = true;
            info!("dismissed");
        }
    }

    #[instrument(skip_all, fields(offset = offset))]
    pub fn on_scroll(&mut self, offset: u32) {
        let was_past = self.scroll_offset > SCROLL_THRESHOLD;
        let is_past = offset > SCROLL_THRESHOLD;
        self.scroll_offset = offset;
        if was_past != is_past && !self.manually_hidden {
            debug!(is_past, "crossed the threshold");
            self.scrolled_past_threshold = is_past;
        }
    }

    /// Switch the mobile bottom bar between the one-line summary and the full panel.
    pub const fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!(width = viewport.width, height = viewport.height, "resized");
            self.viewport = viewport;
        }
    }

    /// Catch up with the window, as both scroll and resize listeners would.
    pub fn observe(&mut self, window: WindowState) {
        self.on_resize(window.viewport);
        self.on_scroll(window.scroll_offset);
    }
}

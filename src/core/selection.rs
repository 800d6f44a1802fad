use tokio::sync::watch;

use crate::{
    core::option::{SkipOption, SkipSize},
    prelude::*,
};

/// Holds the single selected skip size.
///
/// The store never validates the key against a catalog: selecting an unknown size is legal
/// and merely leaves the surfaces without a current option.
#[must_use]
#[derive(Debug)]
pub struct SelectionStore {
    selected: watch::Sender<Option<SkipSize>>,
}

impl SelectionStore {
    pub fn new(initial: Option<SkipSize>) -> Self {
        Self { selected: watch::Sender::new(initial) }
    }

    /// Overwrite the selection.
    ///
    /// Returns `false` when the size was already selected, i.e. nothing has visibly changed.
    #[instrument(skip_all, fields(size = %size))]
    pub fn select(&self, size: SkipSize) -> bool {
        self.selected.send_if_modified(|selected| {
            if *selected == Some(size) {
                debug!("already selected");
                return false;
            }
            info!(previous = ?selected, "selected");
            *selected = Some(size);
            true
        })
    }

    pub fn selected(&self) -> Option<SkipSize> {
        *self.selected.borrow()
    }

    /// Observe the selection changes, re-selections excluded.
    pub fn subscribe(&self) -> watch::Receiver<Option<SkipSize>> {
        self.selected.subscribe()
    }

    /// First catalog entry matching the selected size.
    pub fn current_option<'a>(&self, options: &'a [SkipOption]) -> Option<&'a SkipOption> {
        let selected = self.selected()?;
        options.iter().find(|option| option.size == selected)
    }
}

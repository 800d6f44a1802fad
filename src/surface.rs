//! Read-only renderings of the page state.

pub mod grid;
pub mod hero;
pub mod progress;
pub mod sidebar;
pub mod summary;

use comfy_table::{Table, modifiers, presets};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use crate::{core::option::SkipOption, surface::new_table};

/// Banner under the grid, or nothing when no known skip is selected.
pub fn build_summary_table(option: Option<&SkipOption>) -> Option<Table> {
    let option = option?;
    let mut table = new_table();
    table.add_row(vec![
        Cell::new(format!("⛟ {} Yard Skip Selected", option.size))
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(option.total_price())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(&option.ideal_for),
        Cell::new("including VAT & delivery").set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(format!("{} day hire • {}", option.hire_period_days, option.capacity))
            .add_attribute(Attribute::Dim),
        Cell::new("★ Premium Service").set_alignment(CellAlignment::Right),
    ]);
    Some(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{catalog::StaticCatalog, option::SkipSize, selection::SelectionStore};

    #[test]
    fn selected_six_yards_ok() {
        let options = StaticCatalog::options();
        let store = SelectionStore::new(Some(SkipSize(6)));
        let rendered = build_summary_table(store.current_option(&options)).unwrap().to_string();
        assert!(rendered.contains("6 Yard Skip Selected"));
        assert!(rendered.contains("£366"));
        assert!(rendered.contains("14 day hire • 50-60 bin bags"));
        assert!(rendered.contains("Kitchen renovations"));
    }

    #[test]
    fn nothing_selected_renders_nothing() {
        assert!(build_summary_table(None).is_none());
    }
}

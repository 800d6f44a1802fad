use std::fmt::{Display, Formatter};

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use itertools::Itertools;

use crate::{
    core::{
        catalog::CatalogState,
        option::{SkipOption, SkipSize},
        pricing::{list_price, saving},
    },
    surface::new_table,
};

/// The option grid in one of its mutually exclusive states.
pub enum Grid {
    Loading,
    Failed(String),
    Empty,
    Options(Table),
}

impl Grid {
    pub fn new(catalog: &CatalogState, selected: Option<SkipSize>) -> Self {
        match catalog {
            CatalogState::Loading => Self::Loading,
            CatalogState::Failed(reason) => Self::Failed(reason.clone()),
            CatalogState::Loaded(options) if options.is_empty() => Self::Empty,
            CatalogState::Loaded(options) => Self::Options(build_options_table(options, selected)),
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading available skips…"),
            Self::Failed(reason) => write!(f, "Could not load the available skips: {reason}"),
            Self::Empty => write!(f, "No skips are available for this location."),
            Self::Options(table) => write!(f, "{table}"),
        }
    }
}

fn build_options_table(options: &[SkipOption], selected: Option<SkipSize>) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "", "Skip", "Class", "Ideal for", "Capacity", "Hire", "Features", "Price", "Was", "Save",
        "",
    ]);
    for option in options {
        let is_selected = selected == Some(option.size);
        let total = option.total_price();
        let title = if option.popular {
            format!("{} Yard Skip\n★ Most Popular", option.size)
        } else {
            format!("{} Yard Skip", option.size)
        };
        table.add_row(vec![
            Cell::new(if is_selected { "✔" } else { "" }).fg(Color::Green),
            Cell::new(title).add_attribute(Attribute::Bold),
            Cell::new(option.size_class()).add_attribute(Attribute::Dim),
            Cell::new(&option.ideal_for),
            Cell::new(&option.capacity).add_attribute(Attribute::Dim),
            Cell::new(format!("{} days", option.hire_period_days)),
            Cell::new(option.features().iter().map(|feature| feature.short_label()).join("\n")),
            Cell::new(format!("{total}\ninc. VAT & delivery"))
                .set_alignment(CellAlignment::Right),
            Cell::new(list_price(total))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::CrossedOut),
            Cell::new(format!("Save {}", saving(total))).fg(Color::Green),
            if is_selected {
                Cell::new("Selected").fg(Color::Red)
            } else {
                Cell::new("Select This Skip →")
            },
        ]);
    }
    table
}

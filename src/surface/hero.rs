use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use itertools::Itertools;

use crate::surface::new_table;

const TRUST_INDICATORS: [(char, &str); 3] =
    [('◷', "Same Day Delivery"), ('✪', "Licensed & Insured"), ('⚡', "Instant Booking")];

/// Page heading followed by the trust indicators.
pub fn build_hero_table() -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Choose Your Perfect Skip")
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Center),
    ]);
    table.add_row(vec![
        Cell::new(
            "Select from our premium range of skip sizes, each designed to handle \
             your specific project needs with professional service guaranteed",
        )
        .fg(Color::DarkGrey),
    ]);
    table.add_row(vec![
        Cell::new(
            TRUST_INDICATORS.iter().map(|(icon, text)| format!("{icon} {text}")).join("    "),
        )
        .set_alignment(CellAlignment::Center),
    ]);
    table
}

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use itertools::Itertools;

use crate::{
    core::step::{ProgressStep, StepStatus},
    surface::new_table,
};

pub fn build_progress_table(steps: &[ProgressStep]) -> Table {
    let mut table = new_table();
    table.add_row(steps.iter().map(|step| {
        style(
            Cell::new(format!("{} {}", step.icon.glyph(), step.name))
                .set_alignment(CellAlignment::Center),
            step.status(),
        )
    }));
    table.add_row(steps.iter().map(|step| {
        let status = step.status();
        style(Cell::new(format!("{} {status}", status.marker())), status)
            .set_alignment(CellAlignment::Center)
    }));
    table
}

/// Compact, one step per line, for the sidebar.
pub fn format_progress_lines(steps: &[ProgressStep]) -> String {
    steps.iter().map(|step| format!("{} {}", step.status().marker(), step.name)).join("\n")
}

fn style(cell: Cell, status: StepStatus) -> Cell {
    match status {
        StepStatus::Completed => cell.fg(Color::Green),
        StepStatus::Current => cell.fg(Color::Blue).add_attribute(Attribute::Bold),
        StepStatus::Pending => cell.add_attribute(Attribute::Dim),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::step::skip_size_flow;

    #[test]
    fn build_progress_table_ok() {
        let rendered = build_progress_table(&skip_size_flow()).to_string();
        assert!(rendered.contains("Waste Type"));
        assert!(rendered.contains("● Current Step"));
        assert!(rendered.contains("✔ Completed"));
    }

    #[test]
    fn format_progress_lines_ok() {
        assert_eq!(
            format_progress_lines(&skip_size_flow()),
            "✔ Location\n✔ Waste Type\n● Skip Size\n○ Permits\n○ Schedule",
        );
    }
}

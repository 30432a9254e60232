use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::ListSummary;

/// Print the lists written during this run.
pub fn render(summaries: &[ListSummary], output_dir: &Path, quiet: bool) {
    let total: usize = summaries.iter().map(|s| s.entries).sum();

    if quiet {
        println!(
            "Lists: {}  Identifiers: {}  Output: {}",
            summaries.len().to_string().green(),
            total.to_string().green(),
            output_dir.display()
        );
        return;
    }

    println!(
        "\n {} v{}",
        "update-licence-lists".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Output: {}\n", output_dir.display());

    println!("{}", build_table(summaries));
    println!(
        "\n {} {} lists written\n",
        "✓".green(),
        summaries.len()
    );
}

fn build_table(summaries: &[ListSummary]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("List").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Entries").add_attribute(Attribute::Bold),
        ]);

    for summary in summaries {
        let count_color = if summary.entries == 0 {
            Color::Yellow
        } else {
            Color::Green
        };

        table.add_row(vec![
            Cell::new(&summary.file),
            Cell::new(&summary.origin),
            Cell::new(summary.entries)
                .fg(count_color)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

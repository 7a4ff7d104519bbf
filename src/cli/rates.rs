//! The `rates` subcommand output.

use crate::cli::convert::print_freshness;
use crate::cli::ui;
use crate::core::currency::{CurrencyCode, CurrencyTable};
use crate::core::rates::RatePair;
use crate::rate_store::SnapshotState;
use anyhow::Result;
use comfy_table::Cell;

pub fn display_rates(state: &SnapshotState, filter: Option<CurrencyCode>) -> Result<()> {
    let pairs: Vec<&RatePair> = match filter {
        Some(code) => state.snapshot.pairs_for(code).collect(),
        None => state.snapshot.pairs().iter().collect(),
    };

    if pairs.is_empty() {
        println!(
            "{}",
            ui::style_text("No rates to display.", ui::StyleType::Subtle)
        );
        print_freshness(state);
        return Ok(());
    }

    let title = match filter {
        Some(code) => format!("Exchange Rates ({code})"),
        None => "Exchange Rates".to_string(),
    };
    println!("{}", ui::style_text(&title, ui::StyleType::Title));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Pair"),
        ui::header_cell("Buy"),
        ui::header_cell("Sell"),
        ui::header_cell("Cross"),
    ]);

    for pair in pairs {
        let name = CurrencyTable::name(pair.base).unwrap_or("Unknown");
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{} → {}", pair.base, pair.quote)),
            ui::format_optional_cell(pair.buy, |v| format!("{v:.4}")),
            ui::format_optional_cell(pair.sell, |v| format!("{v:.4}")),
            ui::format_optional_cell(pair.cross, |v| format!("{v:.4}")),
        ]);
    }

    println!("{table}");
    println!(
        "{}",
        ui::style_text(
            &format!(
                "Last updated: {}",
                state.snapshot.fetched_at().format("%Y-%m-%d %H:%M UTC")
            ),
            ui::StyleType::Subtle
        )
    );
    print_freshness(state);
    Ok(())
}

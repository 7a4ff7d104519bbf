//! The `convert` subcommand output.

use crate::cli::ui;
use crate::core::currency::CurrencyCode;
use crate::core::resolve::RateResolver;
use crate::rate_store::SnapshotState;
use anyhow::Result;

pub fn display_conversion(
    amount: f64,
    from: CurrencyCode,
    to: CurrencyCode,
    resolver: &RateResolver,
    state: &SnapshotState,
) -> Result<()> {
    match resolver.convert(amount, from, to, &state.snapshot) {
        Some(converted) => {
            let result = format!("{amount} {from} = {converted:.2} {to}");
            println!("{}", ui::style_text(&result, ui::StyleType::Value));

            // An identity conversion has no interesting rate to echo.
            if from != to
                && let Some(rate) = resolver.resolve_rate(from, to, &state.snapshot)
            {
                let detail = format!("1 {from} = {rate:.4} {to}");
                println!("{}", ui::style_text(&detail, ui::StyleType::Subtle));
            }
        }
        None => {
            println!(
                "{} {}",
                ui::PLACEHOLDER,
                ui::style_text(
                    &format!("no rate available for {from} → {to}"),
                    ui::StyleType::Subtle
                )
            );
        }
    }

    print_freshness(state);
    Ok(())
}

pub fn print_freshness(state: &SnapshotState) {
    if state.is_stale {
        let warning = if state.snapshot.is_empty() {
            "Rate feed is unavailable and no cached rates exist.".to_string()
        } else {
            format!(
                "Rates may be out of date (last updated {}).",
                state.snapshot.fetched_at().format("%Y-%m-%d %H:%M UTC")
            )
        };
        eprintln!("{}", ui::style_text(&warning, ui::StyleType::Warning));
    }
}

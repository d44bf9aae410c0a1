//! Quote, index, mover and search panels.

use dashboard_core::types::{MarketMover, StockQuote, SymbolMatch, TopMovers};
use rust_decimal::Decimal;

use crate::format::{format_change_percent, format_inr, format_volume};

/// Render the header and price block of a stock.
pub fn render_quote(quote: &StockQuote) -> String {
    let sign = if quote.is_positive() { "+" } else { "" };

    format!(
        "{}\nLast Updated: {}\n{}  {}{:.2} ({})\n",
        quote.symbol,
        quote.latest_trading_day,
        format_inr(quote.price),
        sign,
        quote.change.round_dp(2),
        format_change_percent(quote.change_percent)
    )
}

/// One line of the market overview, e.g. for `^NSEI`.
pub fn render_index_line(name: &str, quote: Option<&StockQuote>) -> String {
    match quote {
        Some(q) => format!(
            "{:<10} {:>16} {:>9}",
            name,
            format_inr(q.price),
            format_change_percent(q.change_percent)
        ),
        None => format!("{:<10} {:>16}", name, "Data unavailable"),
    }
}

fn render_mover(mover: &MarketMover) -> String {
    let sign = if mover.change_percentage >= Decimal::ZERO { "+" } else { "" };

    format!(
        "  {:<12} {:>14} {:>10} {:>12}",
        mover.ticker,
        format_inr(mover.price),
        format!("{sign}{}%", mover.change_percentage),
        format_volume(mover.volume as f64)
    )
}

/// Render the first `limit` gainers and losers.
pub fn render_movers(movers: &TopMovers, limit: usize) -> String {
    let mut s = String::new();

    for (title, list) in [("TOP GAINERS", &movers.gainers), ("TOP LOSERS", &movers.losers)] {
        s.push_str(title);
        s.push('\n');
        if list.is_empty() {
            s.push_str("  No data\n");
        }
        for mover in list.iter().take(limit) {
            s.push_str(&render_mover(mover));
            s.push('\n');
        }
        s.push('\n');
    }
    s
}

/// Render symbol search results.
pub fn render_search(matches: &[SymbolMatch]) -> String {
    if matches.is_empty() {
        return "No matching Indian listings\n".to_string();
    }

    matches
        .iter()
        .map(|m| format!("  {:<20} {}\n", m.symbol, m.name))
        .collect()
}

//! Tabular price chart with moving average overlays.

use dashboard_core::error::IndicatorError;
use dashboard_core::types::TimeSeries;
use dashboard_indicators::moving_average::{OVERLAY_LONG_PERIOD, OVERLAY_SHORT_PERIOD};
use dashboard_indicators::sma_overlay;

use crate::format::format_volume;

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}

/// Render the last `days` bars with 20- and 50-day SMA overlays.
///
/// Overlays are computed over the whole history so the first visible rows
/// still get a value when enough earlier bars exist.
pub fn render_chart_table(series: &TimeSeries, days: usize) -> Result<String, IndicatorError> {
    let bars: Vec<_> = series.iter().collect();
    let closes: Vec<f64> = bars.iter().map(|(_, bar)| bar.close).collect();
    let short = sma_overlay(&closes, OVERLAY_SHORT_PERIOD)?;
    let long = sma_overlay(&closes, OVERLAY_LONG_PERIOD)?;

    let mut s = format!(
        "{:<12} {:>10} {:>12} {:>10} {:>10}\n",
        "Date",
        "Close",
        "Volume",
        format!("SMA{}", OVERLAY_SHORT_PERIOD),
        format!("SMA{}", OVERLAY_LONG_PERIOD)
    );

    let skip = bars.len().saturating_sub(days);
    for (i, (date, bar)) in bars.iter().enumerate().skip(skip) {
        s.push_str(&format!(
            "{:<12} {:>10.2} {:>12} {:>10} {:>10}\n",
            date.format("%Y-%m-%d").to_string(),
            bar.close,
            format_volume(bar.volume),
            cell(short[i]),
            cell(long[i])
        ));
    }

    Ok(s)
}

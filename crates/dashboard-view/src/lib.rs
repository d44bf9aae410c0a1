//! Text rendering and logging setup for the stock dashboard.

pub mod chart;
pub mod format;
pub mod logging;
pub mod market;
pub mod panels;

pub use chart::render_chart_table;
pub use format::{format_change_percent, format_inr, format_volume};
pub use logging::setup_logging;
pub use market::{render_index_line, render_movers, render_quote, render_search};
pub use panels::{
    render_method_catalog, render_method_info, render_prediction, render_prediction_prompt,
};

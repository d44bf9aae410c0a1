//! Prediction and method description panels.

use dashboard_indicators::{IndicatorResult, MethodInfo, PredictionMethod};

const RULE: &str = "───────────────────────────────────────────────────────────";
const DISCLAIMER: &str =
    "* This is a technical analysis prediction and should not be used as financial advice";

/// Render a prediction with its metric cards.
pub fn render_prediction(method: PredictionMethod, result: &IndicatorResult) -> String {
    let mut s = String::new();

    s.push_str("Trend Prediction\n");
    s.push_str(RULE);
    s.push('\n');
    s.push_str(&format!(
        "Based on {} analysis, the stock shows a {} trend\n",
        method, result.trend
    ));
    s.push_str(&result.details);
    s.push_str("\n\n");

    for metric in &result.metrics {
        s.push_str(&format!(
            "  {:<18} {:>10}   {}\n",
            metric.name,
            metric.formatted_value(),
            metric.description
        ));
    }

    s.push('\n');
    s.push_str(DISCLAIMER);
    s.push('\n');
    s
}

/// Placeholder shown while no method is selected.
pub fn render_prediction_prompt() -> String {
    format!(
        "Trend Prediction\n{RULE}\nPlease select a prediction model to analyze the stock trend.\n"
    )
}

/// Render a method description.
pub fn render_method_info(info: &MethodInfo) -> String {
    let mut s = String::new();

    s.push_str(&format!("{} [{}]\n", info.title, info.method.as_str()));
    s.push_str(RULE);
    s.push('\n');
    s.push_str(info.description);
    s.push('\n');
    for feature in info.features {
        s.push_str(&format!("  • {}\n", feature));
    }
    s.push_str(&format!("When to use: {}\n", info.best_use));
    s.push_str(&format!(
        "Needs at least {} closing prices\n",
        info.method.lookback()
    ));
    s
}

/// Render the description of every method.
pub fn render_method_catalog() -> String {
    let mut s = String::new();

    s.push_str("Prediction Models\n");
    s.push_str("═══════════════════════════════════════════════════════════\n\n");
    for method in PredictionMethod::all() {
        s.push_str(&render_method_info(&method.info()));
        s.push('\n');
    }
    s.push_str("Each model has different strengths; consider using several for better analysis.\n");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_indicators::predict_trend;

    #[test]
    fn test_render_prediction() {
        let prices: Vec<f64> = (10..40).map(|p| p as f64).collect();
        let result = predict_trend(&prices, PredictionMethod::Sma).unwrap();
        let panel = render_prediction(PredictionMethod::Sma, &result);

        assert!(panel.contains("Based on SMA analysis, the stock shows a Downward trend"));
        assert!(panel.contains("The 10-day SMA is 14.50 and the 20-day SMA is 19.50"));
        assert!(panel.contains("25.64%"));
        assert!(panel.ends_with("financial advice\n"));
    }

    #[test]
    fn test_render_prediction_prompt() {
        assert!(render_prediction_prompt().contains("Please select a prediction model"));
    }

    #[test]
    fn test_method_catalog_lists_all() {
        let catalog = render_method_catalog();

        for method in PredictionMethod::all() {
            assert!(catalog.contains(method.info().title));
        }
        assert!(catalog.contains("When to use: Best for identifying trend changes"));
        assert!(catalog.contains("Needs at least 26 closing prices"));
        assert!(catalog.contains("Needs at least 14 closing prices"));
    }
}

use analytics::PerformanceReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use regression::OlsFit;

const UNDEFINED: &str = "n/a";

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn number(value: f64) -> Cell {
    let text = if value.is_finite() {
        format!("{value:.6}")
    } else {
        UNDEFINED.to_string()
    };
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn optional(value: Option<f64>) -> Cell {
    number(value.unwrap_or(f64::NAN))
}

pub fn report_table(report: &PerformanceReport) -> Table {
    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Observations"),
        Cell::new(report.observations).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Periods per year"),
        Cell::new(report.scale).set_alignment(CellAlignment::Right),
    ]);
    for (label, value) in report.rows() {
        table.add_row(vec![Cell::new(label), optional(value)]);
    }
    table.add_row(vec![
        Cell::new("Timing model"),
        Cell::new(report.timing_model).set_alignment(CellAlignment::Right),
    ]);
    table
}

/// Coefficient table followed by a fit summary table.
pub fn fit_tables(names: &[String], fit: &OlsFit) -> (Table, Table) {
    let mut coefficients = new_table(vec!["Term", "Estimate", "Std. Error", "t", "p"]);
    for (i, name) in names.iter().enumerate() {
        coefficients.add_row(vec![
            Cell::new(name),
            number(fit.coefficients()[i]),
            number(fit.standard_errors()[i]),
            number(fit.t_stats()[i]),
            number(fit.p_values()[i]),
        ]);
    }

    let mut summary = new_table(vec!["Statistic", "Value"]);
    summary.add_row(vec![Cell::new("Observations"), Cell::new(fit.n())]);
    summary.add_row(vec![Cell::new("Degrees of freedom"), Cell::new(fit.df())]);
    summary.add_row(vec![Cell::new("R-squared"), number(fit.r_squared())]);
    summary.add_row(vec![Cell::new("Adj. R-squared"), number(fit.adj_r_squared())]);
    (coefficients, summary)
}

pub fn drawdown_table(returns: &[f64], drawdowns: &[f64]) -> Table {
    let mut table = new_table(vec!["Period", "Return", "Drawdown"]);
    for (i, (r, d)) in returns.iter().zip(drawdowns).enumerate() {
        table.add_row(vec![Cell::new(i + 1), number(*r), number(*d)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::TimingModel;

    #[test]
    fn undefined_values_render_as_placeholder() {
        let report = PerformanceReport::new(3, 12, TimingModel::TreynorMazuy);
        let rendered = report_table(&report).to_string();
        assert!(rendered.contains("Sharpe ratio"));
        assert!(rendered.contains(UNDEFINED));
        assert!(rendered.contains("treynor_mazuy"));
    }

    #[test]
    fn numbers_use_six_decimals() {
        let mut report = PerformanceReport::new(3, 12, TimingModel::TreynorMazuy);
        report.beta = Some(1.25);
        assert!(report_table(&report).to_string().contains("1.250000"));
    }

    #[test]
    fn drawdown_rows_follow_periods() {
        let table = drawdown_table(&[0.1, -0.1], &[0.0, -0.1]);
        assert_eq!(table.row_iter().count(), 2);
        assert!(table.to_string().contains("-0.100000"));
    }
}

//! Bundled dashboard metrics and their text/JSON reports.

use chrono::NaiveDate;
use dashboard_core::PriceSeries;
use serde::{Deserialize, Serialize};

use crate::change::{latest_close, year_over_year_change, PercentChange, YearOverYearChange};
use crate::range::{week52_range, Week52Range};

/// Everything the dashboard shows above the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Symbol the series belongs to
    pub symbol: String,
    /// Date of the most recent bar
    pub as_of: NaiveDate,
    /// Number of bars in the series
    pub bars: usize,
    /// Close of the most recent bar
    pub latest_close: f64,
    /// Year-over-year change
    pub change: YearOverYearChange,
    /// 52-week high/low
    pub range: Week52Range,
}

impl MetricSummary {
    /// Derive all metrics from a series.
    pub fn compute(series: &PriceSeries) -> Self {
        Self {
            symbol: series.symbol().to_string(),
            as_of: series.last().date,
            bars: series.len(),
            latest_close: latest_close(series),
            change: year_over_year_change(series),
            range: week52_range(series),
        }
    }

    /// Signed percentage for display, or `n/a` when the baseline was zero.
    pub fn percent_label(&self) -> String {
        match self.change.percent {
            PercentChange::Defined(p) => format!("{:+.2}%", p),
            PercentChange::Undefined => "n/a".to_string(),
        }
    }

    /// Where the latest close sits in the 52-week range, as a percentage.
    pub fn range_position_label(&self) -> String {
        match self.range.position_of(self.latest_close) {
            Some(p) => format!("{:.0}%", p * 100.0),
            None => "n/a".to_string(),
        }
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  {} as of {}\n", self.symbol, self.as_of));
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str(&format!("  Closing Price:       ${:.2}\n", self.latest_close));
        s.push_str(&format!(
            "  Annual Change:       ${:.2} ({})\n",
            self.change.difference,
            self.percent_label()
        ));
        s.push_str(&format!(
            "  Baseline:            ${:.2} on {}\n",
            self.change.reference, self.change.reference_date
        ));
        s.push_str(&format!("  52-Week High:        ${:.2}\n", self.range.high));
        s.push_str(&format!("  52-Week Low:         ${:.2}\n", self.range.low));
        s.push_str(&format!("  Range Position:      {}\n", self.range_position_label()));
        s.push('\n');
        s.push_str(&format!(
            "  Bars:                {} ({} in 52-week window)\n",
            self.bars, self.range.sessions
        ));

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

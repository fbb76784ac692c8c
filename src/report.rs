//! Frequency tables derived from a [`SimulationSummary`].
//!
//! Percentages are rounded only here, never in the engine.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::config::ReportConfig;
use crate::engine::SimulationSummary;

/// One rendered row of the frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// Face number.
    pub face: u32,
    /// Observed count.
    pub count: u64,
    /// Relative frequency in percent.
    pub percent: f64,
    /// Observed minus theoretical frequency (as a fraction, not percent).
    pub deviation: f64,
    /// Whether the face exceeds the outlier threshold.
    pub outlier: bool,
}

/// Frequency table for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Rows in ascending face order.
    pub rows: Vec<FrequencyRow>,
    /// Total number of rolls.
    pub total_rolls: u64,
    /// Theoretical per-face probability in percent.
    pub expected_percent: f64,
    /// Decimal places used when rendering.
    pub precision: usize,
}

impl FrequencyTable {
    /// Build the table for `summary`.
    ///
    /// A face is an outlier when its percentage is strictly greater than
    /// `expected_percent × outlier_ratio`.
    #[must_use]
    pub fn from_summary(summary: &SimulationSummary, config: &ReportConfig) -> Self {
        let expected = summary.theoretical_probability();
        let expected_percent = expected * 100.0;
        let threshold = expected_percent * config.outlier_ratio;

        let rows = summary
            .results()
            .iter()
            .map(|r| {
                let percent = r.frequency * 100.0;
                FrequencyRow {
                    face: r.face,
                    count: r.count,
                    percent,
                    deviation: r.frequency - expected,
                    outlier: percent > threshold,
                }
            })
            .collect();

        Self {
            rows,
            total_rolls: summary.total_rolls(),
            expected_percent,
            precision: config.precision,
        }
    }

    /// Faces flagged as outliers.
    #[must_use]
    pub fn outliers(&self) -> Vec<u32> {
        self.rows.iter().filter(|r| r.outlier).map(|r| r.face).collect()
    }

    /// Format a percentage with the configured precision.
    #[must_use]
    pub fn format_percent(&self, percent: f64) -> String {
        format!("{percent:.prec$}%", prec = self.precision)
    }

    /// Render the table as aligned plain text.
    #[must_use]
    pub fn render(&self) -> String {
        let count_width = self.total_rolls.to_string().len().max("Count".len());
        let pct_width = self.format_percent(100.0).len().max("Rel. Freq".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>5}  {:>cw$}  {:>pw$}",
            "Face",
            "Count",
            "Rel. Freq",
            cw = count_width,
            pw = pct_width
        );
        let _ = writeln!(out, "{}", "-".repeat(5 + 2 + count_width + 2 + pct_width + 2));

        for row in &self.rows {
            let marker = if row.outlier { " *" } else { "" };
            let _ = writeln!(
                out,
                "{:>5}  {:>cw$}  {:>pw$}{marker}",
                row.face,
                row.count,
                self.format_percent(row.percent),
                cw = count_width,
                pw = pct_width
            );
        }

        let _ = writeln!(out, "{}", "-".repeat(5 + 2 + count_width + 2 + pct_width + 2));
        let _ = writeln!(
            out,
            "{:>5}  {:>cw$}  {:>pw$}",
            "Total",
            self.total_rolls,
            self.format_percent(100.0),
            cw = count_width,
            pw = pct_width
        );
        let _ = writeln!(
            out,
            "\nTheoretical probability: {}",
            self.format_percent(self.expected_percent)
        );
        if self.rows.iter().any(|r| r.outlier) {
            let _ = writeln!(out, "* above the outlier threshold");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{simulate, SequenceSampler};

    fn uniform_d4() -> SimulationSummary {
        simulate(4, 4, SequenceSampler::cycling(4)).unwrap()
    }

    #[test]
    fn test_rows_follow_summary() {
        let table = FrequencyTable::from_summary(&uniform_d4(), &ReportConfig::default());
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.total_rolls, 4);
        for (i, row) in table.rows.iter().enumerate() {
            assert_eq!(row.face, i as u32 + 1);
            assert_eq!(row.count, 1);
            assert!((row.percent - 25.0).abs() < 1e-9);
            assert!(row.deviation.abs() < 1e-12);
            assert!(!row.outlier);
        }
        assert!((table.expected_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_outlier_threshold_is_strict() {
        // Face 1 gets 3 of 8 rolls on a d4: 37.5% == 25% * 1.5, not an outlier.
        let summary = simulate(4, 8, SequenceSampler::new(vec![1, 1, 1, 2, 2, 3, 3, 4])).unwrap();
        let table = FrequencyTable::from_summary(&summary, &ReportConfig::default());
        assert!(table.outliers().is_empty());

        let summary = simulate(4, 8, SequenceSampler::new(vec![1, 1, 1, 1, 2, 3, 3, 4])).unwrap();
        let table = FrequencyTable::from_summary(&summary, &ReportConfig::default());
        assert_eq!(table.outliers(), vec![1]);
    }

    #[test]
    fn test_outlier_ratio_configurable() {
        let summary = simulate(6, 6, SequenceSampler::new(vec![1, 1, 2, 3, 4, 5])).unwrap();
        let strict = ReportConfig {
            outlier_ratio: 1.0,
            ..ReportConfig::default()
        };
        let table = FrequencyTable::from_summary(&summary, &strict);
        assert_eq!(table.outliers(), vec![1]);

        let lax = ReportConfig {
            outlier_ratio: 3.0,
            ..ReportConfig::default()
        };
        let table = FrequencyTable::from_summary(&summary, &lax);
        assert!(table.outliers().is_empty());
    }

    #[test]
    fn test_format_percent_precision() {
        let mut table = FrequencyTable::from_summary(&uniform_d4(), &ReportConfig::default());
        assert_eq!(table.format_percent(16.666_666), "16.67%");
        table.precision = 0;
        assert_eq!(table.format_percent(16.666_666), "17%");
    }

    #[test]
    fn test_render_contains_rows_and_footer() {
        let summary = simulate(6, 6, SequenceSampler::cycling(6)).unwrap();
        let table = FrequencyTable::from_summary(&summary, &ReportConfig::default());
        let text = table.render();
        assert!(text.contains("Face"));
        assert!(text.contains("Rel. Freq"));
        assert!(text.contains("16.67%"));
        assert!(text.contains("Total"));
        assert!(text.contains("100.00%"));
        assert!(text.contains("Theoretical probability: 16.67%"));
        assert!(!text.contains('*'));
        assert_eq!(text.lines().filter(|l| l.contains("16.67%")).count(), 7);
    }

    #[test]
    fn test_render_marks_outliers() {
        let summary = simulate(4, 4, SequenceSampler::constant(2)).unwrap();
        let table = FrequencyTable::from_summary(&summary, &ReportConfig::default());
        let text = table.render();
        assert!(text.contains("100.00% *"));
        assert!(text.contains("above the outlier threshold"));
    }

    #[test]
    fn test_table_serializes() {
        let table = FrequencyTable::from_summary(&uniform_d4(), &ReportConfig::default());
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains("\"expected_percent\":25.0"));
        assert!(json.contains("\"outlier\":false"));
    }
}

//! Chart data shaping for the rendering collaborator.
//!
//! This module converts a [`DistributionSnapshot`] into chart-ready series.
//! The actual rendering belongs to the hosting application; this core only
//! produces labeled values in a stable order.
//!
//! # Examples
//!
//! ```
//! use sentira::aggregate::snapshot::DistributionSnapshot;
//! use sentira::chart::{ChartDataBuilder, ChartKind};
//!
//! let snapshot = DistributionSnapshot {
//!     positive: 1,
//!     negative: 1,
//!     neutral: 2,
//!     total: 4,
//! };
//!
//! let series = ChartDataBuilder::bar_series(&snapshot);
//! assert_eq!(series.kind, ChartKind::Bar);
//! assert_eq!(series.points[0].value, 25.0); // Positive share
//! assert_eq!(series.points[2].value, 50.0); // Neutral share
//! ```

use serde::{Deserialize, Serialize};

use crate::aggregate::snapshot::DistributionSnapshot;
use crate::sentiment::label::SentimentLabel;

/// The kind of chart a series is shaped for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Raw counts per label.
    Pie,
    /// Percentages per label, rounded to one decimal place.
    Bar,
}

/// One labeled value in a chart series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// The sentiment category this point represents.
    pub label: SentimentLabel,
    /// Count (pie) or percentage (bar).
    pub value: f64,
    /// Fixed hex color for this label.
    pub color: String,
}

/// An ordered, read-only sequence of labeled values ready for rendering.
///
/// Points are always ordered [Positive, Negative, Neutral] so chart legends
/// are stable across renders. A series is never mutated after creation; a
/// new request always produces a new series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// What the values mean.
    pub kind: ChartKind,
    /// Chart title for the rendering collaborator.
    pub title: String,
    /// The labeled values, in canonical label order.
    pub points: Vec<ChartPoint>,
}

/// Builds chart series out of distribution snapshots.
///
/// A snapshot with `total == 0` yields all-zero values rather than failing:
/// an empty dashboard is a valid, renderable state.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartDataBuilder;

impl ChartDataBuilder {
    /// Build a pie chart series: raw counts per label.
    pub fn pie_series(snapshot: &DistributionSnapshot) -> ChartSeries {
        ChartSeries {
            kind: ChartKind::Pie,
            title: "Sentiment Distribution".to_string(),
            points: SentimentLabel::CHART_ORDER
                .iter()
                .map(|&label| ChartPoint {
                    label,
                    value: snapshot.count(label) as f64,
                    color: label.color().to_string(),
                })
                .collect(),
        }
    }

    /// Build a bar chart series: percentages per label, rounded to one
    /// decimal place (round half away from zero).
    pub fn bar_series(snapshot: &DistributionSnapshot) -> ChartSeries {
        ChartSeries {
            kind: ChartKind::Bar,
            title: "Sentiment Comparison".to_string(),
            points: SentimentLabel::CHART_ORDER
                .iter()
                .map(|&label| ChartPoint {
                    label,
                    value: round_one_decimal(snapshot.percentage(label)),
                    color: label.color().to_string(),
                })
                .collect(),
        }
    }

    /// Build a series of the given kind.
    pub fn series(kind: ChartKind, snapshot: &DistributionSnapshot) -> ChartSeries {
        match kind {
            ChartKind::Pie => Self::pie_series(snapshot),
            ChartKind::Bar => Self::bar_series(snapshot),
        }
    }
}

/// Round to one decimal place, half away from zero.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(positive: u64, negative: u64, neutral: u64) -> DistributionSnapshot {
        DistributionSnapshot {
            positive,
            negative,
            neutral,
            total: positive + negative + neutral,
        }
    }

    #[test]
    fn test_pie_series_uses_counts() {
        let series = ChartDataBuilder::pie_series(&snapshot(3, 1, 2));

        assert_eq!(series.kind, ChartKind::Pie);
        assert_eq!(series.title, "Sentiment Distribution");
        let values: Vec<_> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_bar_series_uses_percentages() {
        // One Positive, one Negative, two Neutral
        let series = ChartDataBuilder::bar_series(&snapshot(1, 1, 2));

        let values: Vec<_> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, [25.0, 25.0, 50.0]);
    }

    #[test]
    fn test_bar_series_rounding() {
        // 1/3 = 33.333..% → 33.3, 2/3 = 66.666..% → 66.7
        let series = ChartDataBuilder::bar_series(&snapshot(1, 2, 0));

        assert_eq!(series.points[0].value, 33.3);
        assert_eq!(series.points[1].value, 66.7);
    }

    #[test]
    fn test_label_order_is_stable() {
        let series = ChartDataBuilder::pie_series(&snapshot(0, 5, 1));

        let labels: Vec<_> = series.points.iter().map(|p| p.label).collect();
        assert_eq!(labels, SentimentLabel::CHART_ORDER);
    }

    #[test]
    fn test_empty_snapshot_renders_zeros() {
        let empty = DistributionSnapshot::default();

        for series in [
            ChartDataBuilder::pie_series(&empty),
            ChartDataBuilder::bar_series(&empty),
        ] {
            assert_eq!(series.points.len(), 3);
            assert!(series.points.iter().all(|p| p.value == 0.0));
        }
    }

    #[test]
    fn test_series_dispatch() {
        let snapshot = snapshot(1, 0, 0);
        assert_eq!(
            ChartDataBuilder::series(ChartKind::Pie, &snapshot),
            ChartDataBuilder::pie_series(&snapshot)
        );
        assert_eq!(
            ChartDataBuilder::series(ChartKind::Bar, &snapshot),
            ChartDataBuilder::bar_series(&snapshot)
        );
    }

    #[test]
    fn test_colors_follow_labels() {
        let series = ChartDataBuilder::pie_series(&snapshot(1, 1, 1));
        assert_eq!(series.points[0].color, "#4CAF50");
        assert_eq!(series.points[1].color, "#F44336");
        assert_eq!(series.points[2].color, "#FFC107");
    }
}

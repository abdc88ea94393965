//! Date-aligned value series handed to a plotting tool.

use std::fmt::Write as _;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;

use crate::types::journal_data::WorkoutLog;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Weight,
    BodyFat,
}

impl Metric {
    pub fn title(self) -> &'static str {
        match self {
            Metric::Weight => "Weight",
            Metric::BodyFat => "Body Fat",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Weight => "kg",
            Metric::BodyFat => "%",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TimeSeries {
    pub metric: Metric,
    pub points: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn from_log(log: &WorkoutLog, metric: Metric) -> Self {
        let values = match metric {
            Metric::Weight => log.weights(),
            Metric::BodyFat => log.body_fats(),
        };
        let points = log
            .dates()
            .into_iter()
            .zip(values)
            .map(|(date, value)| SeriesPoint { date, value })
            .collect();
        TimeSeries { metric, points }
    }

    /// Drops the first `count` entries (placeholder sessions at the top of
    /// a journal).
    pub fn skip_leading(mut self, count: usize) -> Self {
        self.points.drain(..count.min(self.points.len()));
        self
    }

    pub fn present(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points.iter().filter_map(|p| p.value.map(|v| (p.date, v)))
    }

    /// Smallest and largest recorded value, for axis ticks.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.present().map(|(_, v)| v).fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.metric.title(), self.metric.unit())
    }

    /// `date<TAB>value` per line; a missing value leaves the field empty.
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        for point in &self.points {
            let _ = write!(out, "{}\t", point.date.format("%Y-%m-%d"));
            if let Some(value) = point.value {
                let _ = write!(out, "{value}");
            }
            out.push('\n');
        }
        out
    }
}

//! Two-slice proportion chart of infected versus healthy survivors.

use crate::dto::InfectionStats;
use std::f64::consts::TAU;

pub const LABELS: [&str; 2] = ["Infected", "Healthy"];
pub const DATASET_LABEL: &str = "Percentage infected and healthy";
pub const BACKGROUND_COLORS: [&str; 2] = ["rgba(255, 99, 132, 0.2)", "rgba(54, 162, 235, 0.2)"];
pub const BORDER_COLORS: [&str; 2] = ["rgba(255, 99, 132, 1)", "rgba(54, 162, 235, 1)"];

#[derive(Clone, Debug, PartialEq)]
pub struct PieDataset {
    pub label: &'static str,
    /// `None` until stats have arrived.
    pub data: [Option<f64>; 2],
    pub background_color: [&'static str; 2],
    pub border_color: [&'static str; 2],
    pub border_width: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: [&'static str; 2],
    pub datasets: Vec<PieDataset>,
}

impl ChartData {
    pub fn from_stats(stats: Option<&InfectionStats>) -> Self {
        let data = match stats {
            Some(s) => [Some(s.infected_percentage), Some(s.healthy_percentage)],
            None => [None, None],
        };
        Self {
            labels: LABELS,
            datasets: vec![PieDataset {
                label: DATASET_LABEL,
                data,
                background_color: BACKGROUND_COLORS,
                border_color: BORDER_COLORS,
                border_width: 1,
            }],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SliceShape {
    /// The slice covers the whole pie.
    Full,
    /// SVG path data on the unit circle centred at the origin.
    Wedge(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub value: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub shape: SliceShape,
}

/// Geometry for the first dataset, clockwise from twelve o'clock.
///
/// Undefined or non-finite values, or a non-positive total, give an empty
/// pie.
pub fn pie_slices(chart: &ChartData) -> Vec<PieSlice> {
    let Some(dataset) = chart.datasets.first() else {
        return Vec::new();
    };
    let mut values = [0.0; 2];
    for (slot, value) in values.iter_mut().zip(dataset.data) {
        match value {
            Some(v) if v.is_finite() && v >= 0.0 => *slot = v,
            _ => return Vec::new(),
        }
    }
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::new();
    let mut start = 0.0;
    for (i, value) in values.into_iter().enumerate() {
        if value == 0.0 {
            continue;
        }
        let sweep = value / total * TAU;
        let end = start + sweep;
        let from = point_at(start);
        let to = point_at(end);
        // An SVG arc whose endpoints coincide is not drawn at all.
        let shape = if value >= total || (from == to && sweep > TAU / 2.0) {
            SliceShape::Full
        } else if from == to {
            start = end;
            continue;
        } else {
            SliceShape::Wedge(wedge_path(from, to, sweep))
        };
        slices.push(PieSlice {
            label: chart.labels[i],
            value,
            fill: dataset.background_color[i],
            stroke: dataset.border_color[i],
            shape,
        });
        start = end;
    }
    slices
}

fn wedge_path(from: (String, String), to: (String, String), sweep: f64) -> String {
    let large_arc = u8::from(sweep > TAU / 2.0);
    let (x0, y0) = from;
    let (x1, y1) = to;
    format!("M 0 0 L {x0} {y0} A 1 1 0 {large_arc} 1 {x1} {y1} Z")
}

fn point_at(angle: f64) -> (String, String) {
    (coord(angle.sin()), coord(-angle.cos()))
}

fn coord(v: f64) -> String {
    let s = format!("{v:.4}");
    if s == "-0.0000" {
        "0.0000".into()
    } else {
        s
    }
}

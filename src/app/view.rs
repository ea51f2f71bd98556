//! Output of a render pass: a page is an ordered list of blocks.
//!
//! Charts are declarative: a kind, axis labels and a numeric table. Drawing
//! them is left to whatever adapter consumes the page.

use crate::app::view_model::PageId;
use crate::domain::model::TrendLine;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Area,
    Scatter,
    Box,
}

/// Horizontal dashed line drawn across a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Stable identifier, also used as the export file stem.
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    pub reference_lines: Vec<ReferenceLine>,
    pub trend: Option<TrendLine>,
}

impl Chart {
    pub fn new(id: &str, kind: ChartKind, title: impl Into<String>, x_label: &str, y_label: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.into(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            columns: vec![x_label.to_string(), y_label.to_string()],
            rows: Vec::new(),
            reference_lines: Vec::new(),
            trend: None,
        }
    }

    pub fn with_columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_rows(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_reference_line(mut self, y: f64, label: &str) -> Self {
        self.reference_lines.push(ReferenceLine {
            y,
            label: label.to_string(),
        });
        self
    }

    pub fn with_trend(mut self, trend: Option<TrendLine>) -> Self {
        self.trend = trend;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    Markdown { text: String },
    Metric { label: String, value: String },
    Notice { level: NoticeLevel, text: String },
    Chart { chart: Chart },
    Image {
        id: String,
        caption: String,
        width: u32,
        height: u32,
        #[serde(skip)]
        pixels: image::RgbImage,
    },
    Divider,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    pub page: PageId,
    pub title: String,
    pub blocks: Vec<Block>,
}

impl RenderedPage {
    pub fn new(page: PageId) -> Self {
        Self {
            page,
            title: page.title().to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Heading { text: text.into() });
        self
    }

    pub fn markdown(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Markdown { text: text.into() });
        self
    }

    pub fn metric(&mut self, label: &str, value: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Metric {
            label: label.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn notice(&mut self, level: NoticeLevel, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Notice {
            level,
            text: text.into(),
        });
        self
    }

    pub fn chart(&mut self, chart: Chart) -> &mut Self {
        self.blocks.push(Block::Chart { chart });
        self
    }

    pub fn image(&mut self, id: &str, caption: &str, pixels: image::RgbImage) -> &mut Self {
        self.blocks.push(Block::Image {
            id: id.to_string(),
            caption: caption.to_string(),
            width: pixels.width(),
            height: pixels.height(),
            pixels,
        });
        self
    }

    pub fn divider(&mut self) -> &mut Self {
        self.blocks.push(Block::Divider);
        self
    }

    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chart { chart } => Some(chart),
            _ => None,
        })
    }

    pub fn notices(&self, level: NoticeLevel) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(move |b| match b {
            Block::Notice { level: l, text } if *l == level => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn metric_value(&self, label: &str) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Metric { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }
}

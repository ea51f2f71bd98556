//! Plain-text rendering of a [`RenderedPage`] for the terminal.

use crate::app::view::{Block, Chart, ChartKind, NoticeLevel, RenderedPage};
use crate::config::toml_config::DashboardSection;
use crate::utils::error::Result;
use std::fmt::Write;

/// Charts longer than this print their head and tail only.
const MAX_TABLE_ROWS: usize = 24;

fn notice_prefix(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "ℹ️ ",
        NoticeLevel::Success => "✅",
        NoticeLevel::Warning => "⚠️ ",
        NoticeLevel::Error => "❌",
    }
}

fn chart_kind(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Line => "line",
        ChartKind::Area => "area",
        ChartKind::Scatter => "scatter",
        ChartKind::Box => "box",
    }
}

fn write_chart(out: &mut String, chart: &Chart) {
    let _ = writeln!(out, "📈 {} [{}]", chart.title, chart_kind(chart.kind));
    let _ = writeln!(out, "   x: {}  y: {}", chart.x_label, chart.y_label);
    for line in &chart.reference_lines {
        let _ = writeln!(out, "   --- {} at {:.0}", line.label, line.y);
    }
    if let Some(trend) = &chart.trend {
        let _ = writeln!(
            out,
            "   trend: y = {:.2} + {:.2}x (R² {:.2})",
            trend.intercept, trend.slope, trend.r_squared
        );
    }

    let _ = writeln!(out, "   {}", chart.columns.join(" | "));
    let rows = chart.rows.len();
    for (i, row) in chart.rows.iter().enumerate() {
        if rows > MAX_TABLE_ROWS && i == MAX_TABLE_ROWS / 2 {
            let _ = writeln!(out, "   ... {} more row(s) ...", rows - MAX_TABLE_ROWS);
        }
        if rows > MAX_TABLE_ROWS && i >= MAX_TABLE_ROWS / 2 && i < rows - MAX_TABLE_ROWS / 2 {
            continue;
        }
        let cells: Vec<String> = row.iter().map(|v| format!("{:.1}", v)).collect();
        let _ = writeln!(out, "   {}", cells.join(" | "));
    }
}

pub fn render_text(page: &RenderedPage, dashboard: &DashboardSection) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "🌱 {} | {} · {}",
        dashboard.name, page.title, dashboard.tagline
    );
    let _ = writeln!(out, "{}", "=".repeat(60));

    for block in &page.blocks {
        match block {
            Block::Heading { text } => {
                let _ = writeln!(out, "\n## {}\n", text);
            }
            Block::Markdown { text } => {
                let _ = writeln!(out, "{}\n", text);
            }
            Block::Metric { label, value } => {
                let _ = writeln!(out, "  {:<36} {}", format!("{}:", label), value);
            }
            Block::Notice { level, text } => {
                let _ = writeln!(out, "{} {}", notice_prefix(*level), text);
            }
            Block::Chart { chart } => {
                out.push('\n');
                write_chart(&mut out, chart);
            }
            Block::Image {
                caption,
                width,
                height,
                ..
            } => {
                let _ = writeln!(out, "🖼️  {} ({}x{})", caption, width, height);
            }
            Block::Divider => {
                let _ = writeln!(out, "{}", "-".repeat(60));
            }
        }
    }

    let _ = writeln!(out, "\nv{}", dashboard.version);
    out
}

/// Machine-readable dump of the page. Image pixels are left out.
pub fn render_json(page: &RenderedPage) -> Result<String> {
    Ok(serde_json::to_string_pretty(page)?)
}

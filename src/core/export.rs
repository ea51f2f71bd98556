//! Writes a rendered page's chart tables and images through a [`Storage`].

use crate::app::view::{Block, Chart, RenderedPage};
use crate::config::toml_config::ExportConfig;
use crate::domain::ports::Storage;
use crate::utils::error::{PhytoError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Cursor;

#[derive(Debug, Clone, Serialize)]
pub struct ExportManifest {
    pub page: String,
    pub generated_at: DateTime<Utc>,
    pub files: Vec<String>,
}

pub fn chart_to_csv(chart: &Chart) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&chart.columns)?;
    for row in &chart.rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.into_inner().map_err(|e| PhytoError::ExportError {
        target: chart.id.clone(),
        message: e.to_string(),
    })
}

pub fn image_to_png(image: &image::RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

/// Files land under `<page slug>/`; a `manifest.json` listing them is written last.
pub fn export_page<S: Storage>(
    storage: &S,
    page: &RenderedPage,
    config: &ExportConfig,
) -> Result<ExportManifest> {
    let dir = page.page.slug();
    let mut files = Vec::new();

    for block in &page.blocks {
        match block {
            Block::Chart { chart } if config.wants("csv") => {
                let path = format!("{}/{}.csv", dir, chart.id);
                storage.write_file(&path, &chart_to_csv(chart)?)?;
                tracing::debug!("wrote {}", storage.location(&path));
                files.push(path);
            }
            Block::Image { id, pixels, .. } if config.wants("png") => {
                // a zero-sized image cannot be encoded
                if pixels.width() == 0 || pixels.height() == 0 {
                    tracing::warn!("⚠️ Skipping empty image '{}'", id);
                    continue;
                }
                let path = format!("{}/{}.png", dir, id);
                storage.write_file(&path, &image_to_png(pixels)?)?;
                tracing::debug!("wrote {}", storage.location(&path));
                files.push(path);
            }
            _ => {}
        }
    }

    let manifest = ExportManifest {
        page: dir.to_string(),
        generated_at: Utc::now(),
        files,
    };
    let manifest_path = format!("{}/manifest.json", dir);
    storage.write_file(&manifest_path, &serde_json::to_vec_pretty(&manifest)?)?;

    tracing::info!(
        "📁 Exported {} file(s) to {}",
        manifest.files.len(),
        storage.location(dir)
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::ChartKind;

    #[test]
    fn test_chart_to_csv() {
        let chart = Chart::new("soil", ChartKind::Line, "Soil", "Week", "Soil Zinc (PPM)")
            .with_rows(vec![vec![1.0, 760.5], vec![2.0, 723.25]]);
        let csv = String::from_utf8(chart_to_csv(&chart).unwrap()).unwrap();
        assert_eq!(csv, "Week,Soil Zinc (PPM)\n1,760.5\n2,723.25\n");
    }

    #[test]
    fn test_png_header() {
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
        let png = image_to_png(&img).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");
    }
}

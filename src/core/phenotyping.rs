//! Greenness (Excess Green style) pixel classification for canopy photos.

use crate::domain::model::{BiomassEstimate, ImageAnalysisResult};
use crate::utils::error::{PhytoError, Result};
use image::{Rgb, RgbImage};

/// Grams of current biomass per percent of green canopy.
pub const BIOMASS_FACTOR: f64 = 3.5;
/// Growth multiplier from current biomass to the day-40 projection.
pub const GROWTH_FACTOR: f64 = 4.2;

#[inline]
pub fn is_green(pixel: &Rgb<u8>) -> bool {
    let [r, g, b] = pixel.0;
    g > r && g > b
}

/// ITU-R 601-2 luma in 16-bit fixed point, rounded.
#[inline]
pub fn luminance(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let l = (19595 * u32::from(r) + 38470 * u32::from(g) + 7471 * u32::from(b) + 0x8000) >> 16;
    l as u8
}

pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(PhytoError::ImageDecodeError {
            reason: "uploaded file is empty".to_string(),
        });
    }

    let decoded = image::load_from_memory(bytes).map_err(|e| PhytoError::ImageDecodeError {
        reason: e.to_string(),
    })?;
    Ok(decoded.to_rgb8())
}

pub fn analyze_greenness(image: &RgbImage) -> ImageAnalysisResult {
    let total = u64::from(image.width()) * u64::from(image.height());
    if total == 0 {
        return ImageAnalysisResult {
            green_ratio_percent: 0.0,
            masked_image: image.clone(),
        };
    }

    let mut masked = image.clone();
    let mut green = 0u64;
    for pixel in masked.pixels_mut() {
        if is_green(pixel) {
            green += 1;
        } else {
            let l = luminance(pixel);
            *pixel = Rgb([l, l, l]);
        }
    }

    ImageAnalysisResult {
        green_ratio_percent: green as f64 / total as f64 * 100.0,
        masked_image: masked,
    }
}

pub fn estimate_biomass(
    green_ratio_percent: f64,
    biomass_factor: f64,
    growth_factor: f64,
) -> BiomassEstimate {
    let current_biomass_g = green_ratio_percent * biomass_factor;
    BiomassEstimate {
        green_ratio_percent,
        current_biomass_g,
        projected_yield_g: current_biomass_g * growth_factor,
    }
}

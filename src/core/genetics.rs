//! Mock copy-number-variation population for the gene dosage charts.

use crate::domain::model::{
    CnvIndividual, CnvPopulation, CopyNumberGroup, FiveNumberSummary, TrendLine,
};
use rand::Rng;
use std::collections::BTreeMap;
use std::f64::consts::PI;

pub const DEFAULT_SEED: u64 = 42;
pub const MIN_COPY_NUMBER: u32 = 1;
/// Exclusive upper bound.
pub const MAX_COPY_NUMBER: u32 = 8;

pub const TOLERANCE_BASE: f64 = 100.0;
pub const TOLERANCE_PER_COPY: f64 = 150.0;
pub const TOLERANCE_NOISE_SD: f64 = 50.0;

pub const ACCUMULATION_BASE: f64 = 500.0;
pub const ACCUMULATION_PER_COPY: f64 = 800.0;
pub const ACCUMULATION_NOISE_SD: f64 = 200.0;

/// N(mean, sd) via Box-Muller.
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    let u1: f64 = rng.gen();
    let u2: f64 = rng.gen();
    let u1 = if u1 == 0.0 { f64::MIN_POSITIVE } else { u1 };
    mean + (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos() * sd
}

/// Draws all copy numbers first, then the tolerance noise, then the
/// accumulation noise, so each column is a contiguous run of the stream.
pub fn generate_individuals<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<CnvIndividual> {
    let copy_numbers: Vec<u32> = (0..size)
        .map(|_| rng.gen_range(MIN_COPY_NUMBER..MAX_COPY_NUMBER))
        .collect();
    let tolerance: Vec<f64> = copy_numbers
        .iter()
        .map(|&cn| {
            TOLERANCE_BASE + f64::from(cn) * TOLERANCE_PER_COPY + normal(rng, 0.0, TOLERANCE_NOISE_SD)
        })
        .collect();
    let accumulation: Vec<f64> = copy_numbers
        .iter()
        .map(|&cn| {
            ACCUMULATION_BASE
                + f64::from(cn) * ACCUMULATION_PER_COPY
                + normal(rng, 0.0, ACCUMULATION_NOISE_SD)
        })
        .collect();

    copy_numbers
        .into_iter()
        .zip(tolerance)
        .zip(accumulation)
        .enumerate()
        .map(|(i, ((copy_number, tolerance_index), leaf_accumulation_ppm))| CnvIndividual {
            plant_id: i + 1,
            copy_number,
            tolerance_index,
            leaf_accumulation_ppm,
        })
        .collect()
}

pub fn generate_population<R: Rng + ?Sized>(rng: &mut R, size: usize) -> CnvPopulation {
    let individuals = generate_individuals(rng, size);

    let xs: Vec<f64> = individuals.iter().map(|i| f64::from(i.copy_number)).collect();
    let ys: Vec<f64> = individuals.iter().map(|i| i.tolerance_index).collect();
    let tolerance_trend = ols_trend(&xs, &ys);

    let mut by_copy: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for ind in &individuals {
        by_copy
            .entry(ind.copy_number)
            .or_default()
            .push(ind.leaf_accumulation_ppm);
    }
    let groups = by_copy
        .into_iter()
        .filter_map(|(copy_number, values)| {
            five_number_summary(&values).map(|accumulation| CopyNumberGroup {
                copy_number,
                count: values.len(),
                accumulation,
            })
        })
        .collect();

    tracing::debug!(size, "generated CNV population");

    CnvPopulation {
        individuals,
        tolerance_trend,
        groups,
    }
}

/// Ordinary least squares fit. `None` when x has no spread.
pub fn ols_trend(xs: &[f64], ys: &[f64]) -> Option<TrendLine> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let mean_x = xs[..n].iter().sum::<f64>() / nf;
    let mean_y = ys[..n].iter().sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs[..n].iter().zip(&ys[..n]) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let r_squared = if syy == 0.0 { 1.0 } else { (sxy * sxy) / (sxx * syy) };
    Some(TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
        r_squared,
    })
}

/// Quartiles by linear interpolation between closest ranks.
pub fn five_number_summary(values: &[f64]) -> Option<FiveNumberSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let quantile = |q: f64| {
        let pos = q * (sorted.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = pos.ceil() as usize;
        sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
    };

    Some(FiveNumberSummary {
        min: sorted[0],
        q1: quantile(0.25),
        median: quantile(0.5),
        q3: quantile(0.75),
        max: sorted[sorted.len() - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_population() {
        let mut a = StdRng::seed_from_u64(DEFAULT_SEED);
        let mut b = StdRng::seed_from_u64(DEFAULT_SEED);
        assert_eq!(generate_population(&mut a, 150), generate_population(&mut b, 150));
    }

    #[test]
    fn test_copy_numbers_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let individuals = generate_individuals(&mut rng, 500);
        assert_eq!(individuals.len(), 500);
        assert!(individuals
            .iter()
            .all(|i| (MIN_COPY_NUMBER..MAX_COPY_NUMBER).contains(&i.copy_number)));
        assert_eq!(individuals[0].plant_id, 1);
        assert_eq!(individuals[499].plant_id, 500);
    }

    #[test]
    fn test_trend_recovers_effect_size() {
        let mut rng = StdRng::seed_from_u64(DEFAULT_SEED);
        let population = generate_population(&mut rng, 500);
        let trend = population.tolerance_trend.unwrap();
        // noise sd 50 against a 150-per-copy effect
        assert!((trend.slope - TOLERANCE_PER_COPY).abs() < 20.0);
        assert!(trend.r_squared > 0.8);
    }

    #[test]
    fn test_groups_cover_population() {
        let mut rng = StdRng::seed_from_u64(3);
        let population = generate_population(&mut rng, 200);
        let counted: usize = population.groups.iter().map(|g| g.count).sum();
        assert_eq!(counted, 200);
        for group in &population.groups {
            let s = group.accumulation;
            assert!(s.min <= s.q1 && s.q1 <= s.median && s.median <= s.q3 && s.q3 <= s.max);
        }
    }

    #[test]
    fn test_ols_exact_line() {
        let trend = ols_trend(&[1.0, 2.0, 3.0], &[5.0, 7.0, 9.0]).unwrap();
        assert!((trend.slope - 2.0).abs() < 1e-12);
        assert!((trend.intercept - 3.0).abs() < 1e-12);
        assert!((trend.r_squared - 1.0).abs() < 1e-12);
        assert!(ols_trend(&[2.0, 2.0], &[1.0, 3.0]).is_none());
    }

    #[test]
    fn test_five_number_summary() {
        let s = five_number_summary(&[4.0, 1.0, 3.0, 2.0, 5.0]).unwrap();
        assert_eq!((s.min, s.q1, s.median, s.q3, s.max), (1.0, 2.0, 3.0, 4.0, 5.0));
        assert!(five_number_summary(&[]).is_none());
    }
}

use phytoscout::core::remediation::{simulate, summarize, SAFE_LIMIT_PPM};
use phytoscout::domain::model::SimulationRequest;

fn requests() -> Vec<SimulationRequest> {
    let mut out = Vec::new();
    for &c0 in &[0.5, 1.0, 100.0, 800.0, 2000.0, 1.0e6] {
        for weeks in [1, 2, 3, 4, 12, 24, 52, 200] {
            out.push(SimulationRequest {
                initial_concentration: c0,
                duration_weeks: weeks,
            });
        }
    }
    out
}

#[test]
fn test_series_shape_and_monotonicity() {
    for request in requests() {
        let series = simulate(&request);
        assert_eq!(series.len(), request.duration_weeks as usize, "{:?}", request);

        for (i, point) in series.points.iter().enumerate() {
            assert_eq!(point.week, i as u32 + 1);
            assert!(point.soil_concentration > 0.0);
            assert!(point.plant_accumulation > 0.0);
        }

        for pair in series.points.windows(2) {
            assert!(
                pair[1].soil_concentration < pair[0].soil_concentration,
                "soil not strictly decreasing for {:?}",
                request
            );
            assert!(
                pair[1].plant_accumulation >= pair[0].plant_accumulation,
                "accumulation decreased for {:?}",
                request
            );
        }
    }
}

#[test]
fn test_simulation_is_idempotent() {
    for request in requests() {
        assert_eq!(simulate(&request), simulate(&request));
    }
}

#[test]
fn test_scenario_800_ppm_12_weeks() {
    let request = SimulationRequest {
        initial_concentration: 800.0,
        duration_weeks: 12,
    };
    let series = simulate(&request);
    let week12 = series.points[11];
    assert_eq!(week12.week, 12);
    assert!((week12.soil_concentration - 439.2).abs() < 0.5);
    assert!(week12.plant_accumulation > 0.0);

    // ceiling of the logistic is removed * 50
    let removed = 800.0 - week12.soil_concentration;
    assert!(week12.plant_accumulation < removed * 50.0);

    let summary = summarize(&request, &series, SAFE_LIMIT_PPM);
    assert!((summary.final_soil - week12.soil_concentration).abs() < 1e-12);
    assert!(!summary.within_safe_limit);
}

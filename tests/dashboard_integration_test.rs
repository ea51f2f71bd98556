use clap::Parser;
use image::{Rgb, RgbImage};
use phytoscout::app::view_model::{
    BiomassControls, DiagnosticsControls, GeneticsControls, MiningControls, RemediationControls,
    Upload,
};
use phytoscout::app::NoticeLevel;
use phytoscout::domain::model::CandidateGene;
use phytoscout::{CliConfig, Dashboard, DashboardConfig, LocalStorage, PageId, ViewModel};
use std::io::Cursor;
use tempfile::TempDir;

fn canopy_png() -> Vec<u8> {
    let mut img = RgbImage::from_pixel(10, 10, Rgb([110, 90, 70]));
    for y in 0..10 {
        for x in 0..3 {
            img.put_pixel(x, y, Rgb([40, 170, 50]));
        }
    }
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn all_view_models() -> Vec<ViewModel> {
    vec![
        ViewModel::Home,
        ViewModel::Remediation(RemediationControls::default()),
        ViewModel::Biomass(BiomassControls {
            upload: Some(Upload {
                name: "canopy.png".to_string(),
                bytes: canopy_png(),
            }),
        }),
        ViewModel::Diagnostics(DiagnosticsControls::default()),
        ViewModel::Genetics(GeneticsControls {
            gene: CandidateGene::Zip,
            population_size: 60,
            seed: 42,
        }),
        ViewModel::Mining(MiningControls::default()),
    ]
}

#[test]
fn test_every_page_renders_and_exports() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let dashboard = Dashboard::with_export(
        DashboardConfig::default(),
        LocalStorage::new(output_path.clone()),
    );

    let mut seen = Vec::new();
    for vm in all_view_models() {
        let output = dashboard.run(&vm).unwrap();
        assert_eq!(output.page.page, vm.page());
        assert!(!output.page.blocks.is_empty());
        seen.push(output.page.page);

        let manifest = output.manifest.unwrap();
        let dir = temp_dir.path().join(vm.page().slug());
        assert!(dir.join("manifest.json").exists());
        for file in &manifest.files {
            assert!(temp_dir.path().join(file).exists(), "missing {}", file);
        }
    }
    assert_eq!(seen, PageId::ALL.to_vec());

    let soil_csv =
        std::fs::read_to_string(temp_dir.path().join("remediation/soil_cleanup.csv")).unwrap();
    let mut lines = soil_csv.lines();
    assert_eq!(lines.next(), Some("Week,Soil Zinc (PPM)"));
    assert_eq!(lines.count(), 12);

    let mask = image::open(temp_dir.path().join("biomass/green_mask.png"))
        .unwrap()
        .to_rgb8();
    assert_eq!(mask.dimensions(), (10, 10));
    let background = mask.get_pixel(9, 9).0;
    assert_eq!(background[0], background[1]);
    assert_eq!(background[1], background[2]);
    assert_eq!(*mask.get_pixel(0, 0), Rgb([40, 170, 50]));
}

#[test]
fn test_render_passes_are_independent() {
    let dashboard: Dashboard<LocalStorage> = Dashboard::new(DashboardConfig::default());
    for vm in all_view_models() {
        assert_eq!(dashboard.render(&vm), dashboard.render(&vm));
    }
}

#[test]
fn test_out_of_range_controls_fail_validation() {
    let dashboard: Dashboard<LocalStorage> = Dashboard::new(DashboardConfig::default());
    let vm = ViewModel::Genetics(GeneticsControls {
        gene: CandidateGene::Hma4,
        population_size: 10,
        seed: 1,
    });
    assert!(dashboard.run(&vm).is_err());
}

#[test]
fn test_cli_biomass_reads_upload_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let photo = temp_dir.path().join("plant.png");
    std::fs::write(&photo, canopy_png()).unwrap();

    let cli = CliConfig::try_parse_from([
        "phytoscout",
        "biomass",
        "--image",
        photo.to_str().unwrap(),
    ])
    .unwrap();
    let config = DashboardConfig::default();
    let vm = cli
        .view_model(&config, &LocalStorage::new(".".to_string()))
        .unwrap();

    let dashboard: Dashboard<LocalStorage> = Dashboard::new(config);
    let output = dashboard.run(&vm).unwrap();
    assert_eq!(output.page.metric_value("Green Pixel Ratio"), Some("30.0%"));
    assert!(output.manifest.is_none());
}

#[test]
fn test_settings_file_changes_render() {
    let temp_dir = TempDir::new().unwrap();
    let settings = temp_dir.path().join("phytoscout.toml");
    std::fs::write(
        &settings,
        r#"
[remediation]
safe_limit_ppm = 500.0

[export]
formats = ["csv"]
"#,
    )
    .unwrap();

    let config = DashboardConfig::from_file(&settings).unwrap();
    let dashboard = Dashboard::with_export(
        config,
        LocalStorage::new(temp_dir.path().to_str().unwrap().to_string()),
    );

    // 800 * e^-1.2 ~ 241 < 500
    let vm = ViewModel::Remediation(RemediationControls {
        initial_zinc_ppm: 800.0,
        weeks: 24,
    });
    let output = dashboard.run(&vm).unwrap();
    assert_eq!(output.page.notices(NoticeLevel::Warning).count(), 0);

    let mining = ViewModel::Mining(MiningControls::default());
    let manifest = dashboard.run(&mining).unwrap().manifest.unwrap();
    assert!(manifest.files.is_empty());

    let biomass = ViewModel::Biomass(BiomassControls {
        upload: Some(Upload {
            name: "canopy.png".to_string(),
            bytes: canopy_png(),
        }),
    });
    let manifest = dashboard.run(&biomass).unwrap().manifest.unwrap();
    // png disabled in settings
    assert!(manifest.files.is_empty());
}

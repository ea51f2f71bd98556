use anyhow::Context;
use clap::Parser;
use phytoscout::adapters::terminal;
use phytoscout::config::LogFormat;
use phytoscout::utils::error::ErrorSeverity;
use phytoscout::utils::{logger, validation::Validate};
use phytoscout::{CliConfig, Dashboard, DashboardConfig, LocalStorage, PhytoError};

fn exit_code(e: &PhytoError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: &PhytoError) -> ! {
    tracing::error!(
        "❌ Render failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }),
        None => DashboardConfig::default(),
    };

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, config.logging.level.as_deref()),
        LogFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("🚀 Starting {} v{}", config.dashboard.name, config.dashboard.version);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let uploads = LocalStorage::new(".".to_string());
    let view_model = cli
        .view_model(&config, &uploads)
        .unwrap_or_else(|e| fail(&e));

    let dashboard = match cli.export_dir(&config) {
        Some(dir) => {
            tracing::info!("📁 Export enabled: {}", dir);
            Dashboard::with_export(config.clone(), LocalStorage::new(dir.to_string()))
        }
        None => Dashboard::new(config.clone()),
    };

    let output = dashboard.run(&view_model).unwrap_or_else(|e| fail(&e));

    if cli.json {
        let json = terminal::render_json(&output.page).context("serializing rendered page")?;
        println!("{}", json);
    } else {
        print!("{}", terminal::render_text(&output.page, &config.dashboard));
    }

    if let Some(manifest) = &output.manifest {
        println!("📁 Exported {} file(s) for page '{}'", manifest.files.len(), manifest.page);
    }

    Ok(())
}

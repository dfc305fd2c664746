use clap::Parser;
use sample_doc::utils::logger;
use sample_doc::{CliConfig, FixtureDriver};

fn main() {
    let config = CliConfig::parse();

    let fixture = match config.load_fixture() {
        Ok(fixture) => fixture,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, fixture.log_level());

    tracing::debug!("CLI config: {:?}", config);
    match &config.config {
        Some(path) => tracing::info!("📁 Loaded fixture from {}", path),
        None => tracing::debug!("Using built-in fixture"),
    }

    let driver = FixtureDriver::new(fixture);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = driver.run(&mut out).and_then(|doc| {
        if config.json {
            use std::io::Write;
            writeln!(out, "{}", doc.to_json_pretty()?)?;
        }
        Ok(doc)
    });

    if let Err(e) = result {
        tracing::error!("❌ Fixture run failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

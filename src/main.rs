use clap::Parser;
use roster::core::{ConfigProvider, PostSource, ReportStore};
use roster::domain::model::Member;
use roster::utils::{logger, validation::Validate};
use roster::{CliConfig, HttpPostSource, LocalReportStore, RosterEngine, StubPostSource, TomlConfig};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting roster CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let report_path = if let Some(path) = cli.config.clone() {
        let config = TomlConfig::from_file(&path)?;
        config.validate()?;
        let timeout = config.source.timeout();
        run(config, cli.offline, timeout).await?
    } else {
        let offline = cli.offline;
        run(cli, offline, Duration::from_secs(10)).await?
    };

    println!("Report saved to: {}", report_path);
    Ok(())
}

async fn run(
    config: impl ConfigProvider,
    offline: bool,
    timeout: Duration,
) -> roster::Result<String> {
    let store = LocalReportStore::new(config.output_path().to_string());

    if offline {
        drive(RosterEngine::new(StubPostSource::quick(), store, config)).await
    } else {
        let source = HttpPostSource::new(config.source_endpoint().to_string(), timeout)?;
        drive(RosterEngine::new(source, store, config)).await
    }
}

async fn drive<P: PostSource, S: ReportStore, C: ConfigProvider>(
    mut engine: RosterEngine<P, S, C>,
) -> roster::Result<String> {
    // A walk-in guest joins and leaves again before the report is written.
    engine.check_in(Member::Guest {
        name: "walk-in".to_string(),
        visit_count: 1,
    });
    let departed = engine.check_out()?;
    tracing::debug!("Departed before the report: {}", departed.name());

    engine.run().await
}

use clap::Parser;
use parking_finder::app::render;
use parking_finder::config::OutputFormat;
use parking_finder::utils::error::{ErrorSeverity, FinderError};
use parking_finder::utils::{logger, validation::Validate};
use parking_finder::{CliConfig, FinderConfig, ParkingFinder};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting parking-finder");
    tracing::debug!("CLI config: {:?}", cli);

    let (finder, format) = match setup(&cli).await {
        Ok(ready) => ready,
        Err(e) => exit_with(&e),
    };

    if cli.interactive {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            print_search(&finder, &line, format)?;
        }
    } else {
        print_search(&finder, &cli.command_text(), format)?;
    }

    Ok(())
}

async fn setup(cli: &CliConfig) -> parking_finder::Result<(ParkingFinder, OutputFormat)> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            FinderConfig::from_file(path)?
        }
        None => FinderConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let source = config.catalog_source()?;
    let finder = ParkingFinder::from_source(source.as_ref(), config.intent_extractor()?).await?;
    Ok((finder, config.output.format))
}

fn print_search(finder: &ParkingFinder, command: &str, format: OutputFormat) -> anyhow::Result<()> {
    let outcome = finder.search(command);
    if outcome.is_empty() {
        tracing::warn!(
            "No spots near {} within {} minutes",
            outcome.query.destination,
            outcome.query.time_budget
        );
    }

    match format {
        OutputFormat::Text => println!("{}", render::render_text(&outcome)),
        OutputFormat::Json => println!("{}", render::render_json(&outcome)?),
    }
    Ok(())
}

fn exit_with(e: &FinderError) -> ! {
    tracing::error!(
        "Setup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

use clap::Parser;
use skyline::config::cli::check_argument_count;
use skyline::utils::{logger, validation::Validate};
use skyline::{
    CliConfig, Destination, LocalStorage, Settings, SkylineEngine, SkylineError, SkylinePipeline,
};

fn fail(e: &SkylineError) -> ! {
    tracing::error!(
        "❌ Skyline run failed: {} (Severity: {:?})",
        e,
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = check_argument_count(std::env::args_os().len().saturating_sub(1)) {
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Usage: skyline [-t] [-h] <INPUT> [OUTPUT]");
        std::process::exit(e.exit_code());
    }

    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match Settings::from_cli(&config) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    if let Some(output) = &settings.output_path {
        println!("The result is stored in {}", output);
    }

    let storage = LocalStorage::default();
    let pipeline = SkylinePipeline::new(storage, settings);
    let engine = SkylineEngine::new(pipeline);

    match engine.run().await {
        Ok(Destination::File(path)) => {
            tracing::info!("✅ Skyline saved to: {}", path.display());
        }
        Ok(Destination::Stdout) => {}
        Err(e) => fail(&e),
    }

    Ok(())
}

use clap::Parser;
use imessage_probe::utils::logger::{self, LogFormat};
use imessage_probe::utils::validation::Validate;
use imessage_probe::{build_source, CliConfig, Probe};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, LogFormat::from_json_flag(config.log_json));

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        println!("FAILED: {}", e);
        std::process::exit(1);
    }

    let source = match build_source(&config) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("❌ Could not set up message source: {}", e);
            println!("FAILED: Exception occurred: {}", e);
            std::process::exit(1);
        }
    };

    let probe = Probe::new(source, config.hours);
    let mut stdout = std::io::stdout().lock();
    let status = probe.run(&mut stdout).await?;

    tracing::debug!("Probe finished with exit code {}", status.code());
    std::process::exit(status.code());
}

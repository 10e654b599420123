use clap::Parser;
use npe_demo::utils::logger;
use npe_demo::{demo, CliConfig, NullableString};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting npe-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // The reference is bound absent and read exactly once.
    let reference = NullableString::absent();
    let line = demo::run(&reference, "gfg");

    println!("{}", line);
}

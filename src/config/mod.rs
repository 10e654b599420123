use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "npe-demo")]
#[command(about = "Demonstrates catching a null dereference on an absent reference")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_takes_no_input() {
        let config = CliConfig::parse_from(["npe-demo"]);
        assert!(!config.verbose);
    }
}

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vcf2xlsx::cli;

fn main() -> anyhow::Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{}", cli::usage());
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("vcf2xlsx=debug,info")
    } else {
        EnvFilter::new("vcf2xlsx=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::run(cli)
}

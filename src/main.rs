use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use loc::{cli, logging, output};
use tracing::debug;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(logging::Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let options = args.run_options()?;
    debug!(
        source = ?options.source,
        config = %options.config_path.display(),
        format = args.format.as_str(),
        "starting"
    );

    let report = loc::run(&options).context("Failed to count lines of code")?;
    println!("{}", output::format_report(&report, args.format)?);

    Ok(())
}

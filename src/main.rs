use anyhow::Result;
use mazecut::{cli, config::Config, decimator, logger};

fn main() -> Result<()> {
    logger::init_logging()?;

    let config = Config::from_cli(cli::parse_args());
    decimator::decimate_file(&config)?;

    Ok(())
}

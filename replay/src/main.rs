mod args;
mod replay;
mod series;
mod summary;

use args::Args;
use clap::Parser;
use monitor::StoppingMonitor;
use replay::Replay;
use simplelog::{Config, SimpleLogger};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let monitor = StoppingMonitor::new(args.patience)?;
    log::info!("Replaying with patience {}", monitor.patience());

    let losses = series::load(args.input.as_deref())?;

    let summary = Replay::new(monitor, args.run_out).run(&losses);
    print!("{}", summary);

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    SimpleLogger::init(args.log_level.into(), Config::default())?;

    Ok(args)
}

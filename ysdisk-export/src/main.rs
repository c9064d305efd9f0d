use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use ysdisk::Drive;

use crate::export::export_drive;

mod export;

#[derive(Parser)]
#[command(version)]
/// Exports Yamaha sampler disk images to WAV files
pub struct Args {
    /// Path to the sample disc drive directory
    drive: PathBuf,
    #[arg(short, long)]
    /// Export the drive to DST (default: current dir)
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let env = Env::new().default_filter_or("info");
    env_logger::init_from_env(env);
    let args = Args::parse();
    let drive = Drive::new(args.drive);
    let dest = args.output.unwrap_or_else(|| PathBuf::from("."));
    export_drive(&drive, &dest).context("error exporting drive")?;
    Ok(())
}

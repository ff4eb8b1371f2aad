use std::path::PathBuf;
use std::process::ExitCode;

use akwf_convert::{convert_with, default_output_dir, ConvertOptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    about = "Convert AKWF WAV banks into normalized JSON waveform files",
    version
)]
struct Args {
    /// Directory containing the AKWF_* bank directories
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Where bank files and manifest.json are written
    #[arg(long, default_value_os_t = default_output_dir())]
    output_dir: PathBuf,

    /// Warn about and leave out malformed WAV files instead of aborting
    #[arg(long)]
    skip_invalid: bool,
}

impl From<Args> for ConvertOptions {
    fn from(args: Args) -> Self {
        Self {
            root: args.root,
            output_dir: args.output_dir,
            skip_invalid: args.skip_invalid,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let options = ConvertOptions::from(Args::parse());

    let result = convert_with(&options, |report| {
        println!(
            "Processed {}: {} waveforms",
            report.name, report.waveform_count
        );
    });

    match result {
        Ok(summary) => {
            println!(
                "Generated {} bank files and manifest.json",
                summary.banks.len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

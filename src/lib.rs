pub mod audio;
pub mod bank;
pub mod error;
pub mod manifest;

use std::fs;
use std::path::{Path, PathBuf};

pub use bank::BankReport;
pub use error::ConvertError;
pub use manifest::Manifest;

/// Directory name prefix that marks a waveform bank.
pub const BANK_PREFIX: &str = "AKWF_";

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory holding the `AKWF_*` bank directories.
    pub root: PathBuf,
    /// Where bank files and the manifest are written.
    pub output_dir: PathBuf,
    /// Log and leave out malformed sample files instead of aborting.
    pub skip_invalid: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: default_output_dir(),
            skip_invalid: false,
        }
    }
}

/// The converter's own directory, used when no output directory is given.
pub fn default_output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[derive(Debug)]
pub struct ConvertSummary {
    pub banks: Vec<BankReport>,
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
}

/// Find the `AKWF_*` entries directly under `root`, sorted by name.
///
/// Entries are returned whether or not they are directories; callers skip
/// the ones that are not.
pub fn discover_banks(root: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !root.is_dir() {
        return Err(ConvertError::RootNotDirectory(root.to_path_buf()));
    }

    let entries = fs::read_dir(root).map_err(|err| ConvertError::io(root, err))?;

    let mut banks = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| ConvertError::io(root, err))?;
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(BANK_PREFIX))
        {
            banks.push(entry.path());
        }
    }

    if banks.is_empty() {
        return Err(ConvertError::NoBanks(root.to_path_buf()));
    }

    banks.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(banks)
}

/// Convert every bank under `options.root` and write the manifest.
///
/// `on_bank` is called after each bank file is written, in processing order.
pub fn convert_with<F>(
    options: &ConvertOptions,
    mut on_bank: F,
) -> Result<ConvertSummary, ConvertError>
where
    F: FnMut(&BankReport),
{
    let bank_dirs = discover_banks(&options.root)?;
    log::info!(
        "Found {} bank candidates in {}",
        bank_dirs.len(),
        options.root.display()
    );

    fs::create_dir_all(&options.output_dir)
        .map_err(|err| ConvertError::io(&options.output_dir, err))?;

    let mut banks = Vec::new();
    for bank_dir in bank_dirs.iter().filter(|dir| dir.is_dir()) {
        if let Some(report) = bank::process_bank(bank_dir, &options.output_dir, options)? {
            on_bank(&report);
            banks.push(report);
        }
    }

    let manifest = Manifest::new(banks.iter().map(|report| report.name.clone()).collect());
    let manifest_path = manifest::write_manifest(&options.output_dir, &manifest)?;
    log::info!("Wrote manifest to {}", manifest_path.display());

    Ok(ConvertSummary {
        banks,
        manifest,
        manifest_path,
    })
}

pub fn convert(options: &ConvertOptions) -> Result<ConvertSummary, ConvertError> {
    convert_with(options, |_| {})
}

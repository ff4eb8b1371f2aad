//! Per-bank conversion: one directory of sample files in, one JSON file out.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::audio::{read_wav_samples, SampleRead};
use crate::error::ConvertError;
use crate::ConvertOptions;

const WAV_EXTENSION: &str = "wav";

/// A named, normalized waveform taken from one sample file.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub name: String,
    pub samples: Vec<f64>,
}

/// The waveforms of one bank in sorted file order.
///
/// Serializes as a JSON object keyed by waveform name, preserving order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bank {
    pub name: String,
    pub waveforms: Vec<Waveform>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            waveforms: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.waveforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waveforms.is_empty()
    }

    /// Write the bank as compact JSON to `<output_dir>/<name>.json`.
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf, ConvertError> {
        let path = output_dir.join(format!("{}.json", self.name));
        let file = File::create(&path).map_err(|err| ConvertError::io(&path, err))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush().map_err(|err| ConvertError::io(&path, err))?;
        Ok(path)
    }
}

impl Serialize for Bank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.waveforms.len()))?;
        for waveform in &self.waveforms {
            map.serialize_entry(&waveform.name, &waveform.samples)?;
        }
        map.end()
    }
}

/// Result of a bank that produced an output file.
#[derive(Debug, Clone, PartialEq)]
pub struct BankReport {
    pub name: String,
    pub waveform_count: usize,
    pub output_path: PathBuf,
}

/// List the `*.wav` files directly inside `dir`, sorted by file name.
///
/// Hidden files and anything that is not a regular file are ignored.
pub fn list_wav_files(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let entries = fs::read_dir(dir).map_err(|err| ConvertError::io(dir, err))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| ConvertError::io(dir, err))?;
        let path = entry.path();

        let visible = entry
            .file_name()
            .to_str()
            .is_some_and(|name| !name.starts_with('.'));
        let is_wav = path.extension().is_some_and(|ext| ext == WAV_EXTENSION);

        if visible && is_wav && path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read every mono sample file of a bank directory into a [`Bank`].
///
/// Stereo files are left out. A malformed file aborts the bank unless
/// `options.skip_invalid` is set, in which case it is logged and left out.
pub fn load_bank(bank_dir: &Path, options: &ConvertOptions) -> Result<Bank, ConvertError> {
    let mut bank = Bank::new(dir_name(bank_dir));

    for wav_path in list_wav_files(bank_dir)? {
        let Some(name) = wav_path.file_stem().and_then(|stem| stem.to_str()) else {
            log::warn!("Skipping non UTF-8 file name {}", wav_path.display());
            continue;
        };

        match read_wav_samples(&wav_path) {
            Ok(SampleRead::Mono(samples)) => bank.waveforms.push(Waveform {
                name: name.to_string(),
                samples,
            }),
            Ok(SampleRead::Skipped { .. }) => {}
            Err(err) if options.skip_invalid => {
                log::warn!("Skipping invalid sample file: {err}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(bank)
}

/// Convert one bank directory and write its JSON file if it has any waveforms.
///
/// Returns `None` when the bank holds no mono sample files, in which case
/// nothing is written.
pub fn process_bank(
    bank_dir: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<Option<BankReport>, ConvertError> {
    let bank = load_bank(bank_dir, options)?;

    if bank.is_empty() {
        log::debug!("Bank {} has no mono waveforms", bank.name);
        return Ok(None);
    }

    let output_path = bank.write(output_dir)?;
    log::info!(
        "Wrote {} waveforms to {}",
        bank.len(),
        output_path.display()
    );

    Ok(Some(BankReport {
        name: bank.name,
        waveform_count: bank.waveforms.len(),
        output_path,
    }))
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

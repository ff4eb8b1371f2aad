use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Index of the bank files written by a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub banks: Vec<String>,
}

impl Manifest {
    pub fn new(banks: Vec<String>) -> Self {
        Self { banks }
    }
}

/// Write the manifest as indented JSON to `<output_dir>/manifest.json`,
/// replacing any previous one.
pub fn write_manifest(output_dir: &Path, manifest: &Manifest) -> Result<PathBuf, ConvertError> {
    let path = output_dir.join(MANIFEST_FILE_NAME);
    let file = File::create(&path).map_err(|err| ConvertError::io(&path, err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, manifest)?;
    writer.flush().map_err(|err| ConvertError::io(&path, err))?;
    Ok(path)
}

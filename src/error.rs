use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("Directory {} not found", .0.display())]
    RootNotDirectory(PathBuf),
    #[error("No AKWF_* directories found in {}", .0.display())]
    NoBanks(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error(
        "unsupported sample format in {}: expected 16-bit Int, found {bits_per_sample}-bit {sample_format:?}",
        .path.display()
    )]
    UnsupportedFormat {
        path: PathBuf,
        bits_per_sample: u16,
        sample_format: hound::SampleFormat,
    },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

//! WAV reading and sample normalization.
//!
//! This module turns single-cycle AKWF sample files into normalized
//! waveforms ready to be written out as JSON.

use std::path::Path;

use crate::error::ConvertError;

/// Millionths per unit of `1 / 32768`, as the reduced fraction `15625 / 512`.
const MILLIONTHS_NUMERATOR: i64 = 15_625;
const MILLIONTHS_DENOMINATOR: i64 = 512;

/// Outcome of reading a single sample file.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleRead {
    /// A mono file, normalized to `[-1.0, 1.0]` in on-disk frame order.
    Mono(Vec<f64>),
    /// A file with more than one channel. Not an error, it is simply left out.
    Skipped { channels: u16 },
}

/// Convert a 16-bit PCM sample to a float in `[-1.0, 1.0]`.
///
/// The value is `sample / 32768` rounded to 6 decimal places, half to even.
/// The quotient is computed exactly in millionths so no intermediate binary
/// rounding can tip a result across a decimal boundary.
///
/// ```rust
/// use akwf_convert::audio::normalize_sample;
///
/// assert_eq!(normalize_sample(i16::MIN), -1.0);
/// assert_eq!(normalize_sample(i16::MAX), 0.999969);
/// assert_eq!(normalize_sample(0), 0.0);
/// ```
pub fn normalize_sample(sample: i16) -> f64 {
    let scaled = i64::from(sample) * MILLIONTHS_NUMERATOR;
    let mut millionths = scaled.div_euclid(MILLIONTHS_DENOMINATOR);
    let remainder = scaled.rem_euclid(MILLIONTHS_DENOMINATOR);
    let half = MILLIONTHS_DENOMINATOR / 2;

    if remainder > half || (remainder == half && millionths % 2 != 0) {
        millionths += 1;
    }

    millionths as f64 / 1_000_000.0
}

/// Read a WAV file and normalize its samples.
///
/// Files with more than one channel yield [`SampleRead::Skipped`] without
/// their payload being read. Mono files must hold 16-bit integer PCM; every
/// frame is converted with [`normalize_sample`].
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be opened or its header cannot be parsed
/// - A mono file is not 16-bit integer PCM
/// - The sample data is truncated or otherwise unreadable
///
/// # Examples
///
/// ```rust,no_run
/// use akwf_convert::audio::{read_wav_samples, SampleRead};
/// use std::path::Path;
///
/// match read_wav_samples(Path::new("AKWF_0001.wav"))? {
///     SampleRead::Mono(samples) => println!("Loaded {} samples", samples.len()),
///     SampleRead::Skipped { channels } => println!("Skipped {channels}-channel file"),
/// }
/// # Ok::<(), akwf_convert::ConvertError>(())
/// ```
pub fn read_wav_samples(wav_path: &Path) -> Result<SampleRead, ConvertError> {
    let wav_error = |source| ConvertError::Wav {
        path: wav_path.to_path_buf(),
        source,
    };

    let mut reader = hound::WavReader::open(wav_path).map_err(wav_error)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        log::debug!(
            "Skipping {} ({} channels)",
            wav_path.display(),
            spec.channels
        );
        return Ok(SampleRead::Skipped {
            channels: spec.channels,
        });
    }

    if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
        return Err(ConvertError::UnsupportedFormat {
            path: wav_path.to_path_buf(),
            bits_per_sample: spec.bits_per_sample,
            sample_format: spec.sample_format,
        });
    }

    let samples = reader
        .samples::<i16>()
        .map(|sample| sample.map(normalize_sample))
        .collect::<Result<Vec<f64>, _>>()
        .map_err(wav_error)?;

    log::debug!("Read {} frames from {}", samples.len(), wav_path.display());

    Ok(SampleRead::Mono(samples))
}

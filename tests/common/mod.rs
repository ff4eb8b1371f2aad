#![allow(dead_code)]

use std::error::Error;
use std::f64::consts::TAU;
use std::path::Path;

pub fn mono_spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate: 44_100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

pub fn stereo_spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: 2,
        ..mono_spec()
    }
}

pub fn write_wav(
    path: &Path,
    spec: hound::WavSpec,
    samples: &[i16],
) -> Result<(), Box<dyn Error>> {
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// One cycle of a sine wave at near full scale.
pub fn sine_cycle(frames: usize) -> Vec<i16> {
    (0..frames)
        .map(|i| ((i as f64 / frames as f64 * TAU).sin() * 32_000.0) as i16)
        .collect()
}

pub fn write_mono(path: &Path, samples: &[i16]) -> Result<(), Box<dyn Error>> {
    write_wav(path, mono_spec(), samples)
}

pub fn write_stereo(path: &Path, frames: usize) -> Result<(), Box<dyn Error>> {
    let samples: Vec<i16> = sine_cycle(frames)
        .into_iter()
        .flat_map(|sample| [sample, sample])
        .collect();
    write_wav(path, stereo_spec(), &samples)
}

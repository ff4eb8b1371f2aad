mod common;

use std::error::Error;
use std::fs;

use akwf_convert::audio::{normalize_sample, read_wav_samples, SampleRead};
use akwf_convert::ConvertError;
use common::{sine_cycle, write_mono, write_stereo};

#[test]
fn read_wav_samples_normalizes_full_range() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let wav_path = temp_dir.path().join("extreme.wav");
    write_mono(&wav_path, &[i16::MAX, i16::MIN, 0])?;

    let samples = match read_wav_samples(&wav_path)? {
        SampleRead::Mono(samples) => samples,
        other => panic!("expected mono samples, got {other:?}"),
    };

    assert_eq!(samples, vec![0.999969, -1.0, 0.0]);
    Ok(())
}

#[test]
fn mono_file_keeps_frame_count_and_order() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let wav_path = temp_dir.path().join("sine.wav");
    let source = sine_cycle(600);
    write_mono(&wav_path, &source)?;

    let SampleRead::Mono(samples) = read_wav_samples(&wav_path)? else {
        panic!("mono file was skipped");
    };

    assert_eq!(samples.len(), 600);
    assert!(samples.iter().all(|value| (-1.0..=1.0).contains(value)));
    let expected: Vec<f64> = source.iter().copied().map(normalize_sample).collect();
    assert_eq!(samples, expected);
    Ok(())
}

#[test]
fn silent_file_maps_to_zeros() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let wav_path = temp_dir.path().join("silence.wav");
    write_mono(&wav_path, &[0; 64])?;

    assert_eq!(read_wav_samples(&wav_path)?, SampleRead::Mono(vec![0.0; 64]));
    Ok(())
}

#[test]
fn stereo_file_is_skipped() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let wav_path = temp_dir.path().join("wide.wav");
    write_stereo(&wav_path, 600)?;

    assert_eq!(
        read_wav_samples(&wav_path)?,
        SampleRead::Skipped { channels: 2 }
    );
    Ok(())
}

#[test]
fn eight_bit_mono_is_rejected() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let wav_path = temp_dir.path().join("lofi.wav");
    let spec = hound::WavSpec {
        bits_per_sample: 8,
        ..common::mono_spec()
    };
    let mut writer = hound::WavWriter::create(&wav_path, spec)?;
    writer.write_sample(12i8)?;
    writer.finalize()?;

    let err = read_wav_samples(&wav_path).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::UnsupportedFormat {
            bits_per_sample: 8,
            ..
        }
    ));
    Ok(())
}

#[test]
fn garbage_file_is_a_read_error() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    let wav_path = temp_dir.path().join("broken.wav");
    fs::write(&wav_path, b"definitely not a RIFF header")?;

    let err = read_wav_samples(&wav_path).unwrap_err();
    assert!(matches!(err, ConvertError::Wav { .. }));
    assert!(err.to_string().contains("broken.wav"));

    Ok(())
}

use super::*;

#[test]
fn rejects_zero_channels() {
    let err = SampleBuffer::new(48_000, 0, vec![]).unwrap_err();
    assert!(matches!(err, WaveformError::Validation(_)));
}

#[test]
fn rejects_ragged_interleaving() {
    let err = SampleBuffer::new(48_000, 2, vec![0.0, 0.1, 0.2]).unwrap_err();
    assert!(err.to_string().contains("not a multiple"));
}

#[test]
fn addresses_interleaved_frames_by_channel() {
    let buf = SampleBuffer::new(8, 2, vec![0.1, -0.1, 0.2, -0.2, 0.3, -0.3]).unwrap();
    assert_eq!(buf.total_samples(), 3);
    assert_eq!(buf.channel_count(), 2);
    assert_eq!(buf.sample_at(0, 2).unwrap(), 0.3);
    assert_eq!(buf.sample_at(1, 1).unwrap(), -0.2);
    assert_eq!(buf.channel(1).unwrap(), vec![-0.1, -0.2, -0.3]);
}

#[test]
fn out_of_bounds_lookups_fail() {
    let buf = SampleBuffer::mono(48_000, vec![0.0; 4]);
    assert!(buf.sample_at(0, 4).unwrap_err().is_out_of_range());
    assert!(buf.sample_at(1, 0).unwrap_err().is_out_of_range());
    assert!(buf.channel(3).unwrap_err().is_out_of_range());
}

#[test]
fn duration_follows_rate() {
    let buf = SampleBuffer::mono(48_000, vec![0.0; 24_000]);
    assert!((buf.duration_secs() - 0.5).abs() < 1e-12);
    let silent_rate = SampleBuffer::mono(0, vec![0.0; 10]);
    assert_eq!(silent_rate.duration_secs(), 0.0);
}

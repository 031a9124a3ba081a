//! Raw PCM decoding for the remote synthesis payload.
//!
//! The service returns headerless signed 16-bit little-endian samples,
//! single channel, 24 kHz. No container parsing is involved.

use crate::error::NarrationError;

/// Sample rate of the remote synthesis payload.
pub const SAMPLE_RATE: u32 = 24_000;

/// Decode s16le bytes into normalized mono `f32` samples.
///
/// Normalization divides by 32768.0, not 32767: a full-scale negative
/// sample (-32768) maps to exactly -1.0 while a full-scale positive sample
/// (32767) maps to 32767/32768. Odd-length input is a decode error.
pub fn decode_pcm16(bytes: &[u8]) -> Result<Vec<f32>, NarrationError> {
    if bytes.len() % 2 != 0 {
        return Err(NarrationError::TruncatedPayload(bytes.len()));
    }
    let samples = bytes
        .chunks_exact(2)
        .map(|pair| f32::from(i16::from_le_bytes([pair[0], pair[1]])) / 32768.0)
        .collect();
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scale_negative_is_exactly_minus_one() {
        let samples = decode_pcm16(&[0x00, 0x80]).unwrap();
        assert_eq!(samples, vec![-1.0]);
    }

    #[test]
    fn full_scale_positive_is_just_under_one() {
        let samples = decode_pcm16(&[0xFF, 0x7F]).unwrap();
        assert_eq!(samples, vec![32767.0 / 32768.0]);
        assert!(samples[0] < 1.0);
    }

    #[test]
    fn zero_bytes_decode_to_silence() {
        let samples = decode_pcm16(&[0x00, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(samples, vec![0.0, 0.0]);
    }

    #[test]
    fn odd_length_payload_is_rejected() {
        let result = decode_pcm16(&[0x00, 0x80, 0x7F]);
        assert!(matches!(result, Err(NarrationError::TruncatedPayload(3))));
    }

    #[test]
    fn decoding_is_deterministic() {
        let bytes = [0x12, 0x34, 0xFE, 0xCA, 0x00, 0x80];
        assert_eq!(decode_pcm16(&bytes).unwrap(), decode_pcm16(&bytes).unwrap());
    }

    #[test]
    fn round_trip_stays_within_one_lsb() {
        let originals = [-1.0f32, -0.5, -0.25, 0.0, 0.25, 0.5, 0.75];
        let mut bytes = Vec::new();
        for sample in originals {
            let quantized = (sample * 32768.0).clamp(-32768.0, 32767.0) as i16;
            bytes.extend_from_slice(&quantized.to_le_bytes());
        }
        let decoded = decode_pcm16(&bytes).unwrap();
        for (original, decoded) in originals.iter().zip(decoded) {
            assert!((original - decoded).abs() <= 1.0 / 32768.0);
        }
    }
}

//! Luminance to character quantization.

use super::ramp::Ramp;

/// Ramp index for a luminance sample on a ramp of `levels` characters.
///
/// Floor-divides the 0-255 range into `levels` equal buckets:
/// `index = sample * levels / 256`, clamped to `levels - 1`.
/// `levels` must be at least 1.
#[inline]
pub fn ramp_index(sample: u8, levels: usize) -> usize {
    let idx = (sample as usize * levels) / 256;
    idx.min(levels - 1)
}

/// Map one luminance sample to its ramp character.
#[inline]
pub fn luminance_to_char(sample: u8, ramp: &Ramp) -> char {
    ramp.as_slice()[ramp_index(sample, ramp.len())]
}

/// Map luminance samples to ramp characters.
///
/// # Example
/// ```
/// use ascii_face::ascii::{map_to_chars, Ramp};
///
/// let ramp = Ramp::new(" #").unwrap();
/// assert_eq!(map_to_chars(&[0, 127, 128, 255], &ramp), vec![' ', ' ', '#', '#']);
/// ```
pub fn map_to_chars(samples: &[u8], ramp: &Ramp) -> Vec<char> {
    samples
        .iter()
        .map(|&sample| luminance_to_char(sample, ramp))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_floor_formula_for_all_samples() {
        for levels in 1..=300usize {
            for sample in 0..=255u8 {
                let expected = ((sample as usize * levels) / 256).min(levels - 1);
                assert_eq!(ramp_index(sample, levels), expected);
            }
        }
    }

    #[test]
    fn test_white_maps_to_last_index() {
        for levels in 1..=256usize {
            assert_eq!(ramp_index(255, levels), levels - 1);
        }
    }

    #[test]
    fn test_black_maps_to_first_index() {
        for levels in 1..=64usize {
            assert_eq!(ramp_index(0, levels), 0);
        }
    }

    #[test]
    fn test_floor_not_rounding() {
        // 10 levels: bucket width is 25.6, so 25 is still bucket 0 and
        // 26 starts bucket 1.
        assert_eq!(ramp_index(25, 10), 0);
        assert_eq!(ramp_index(26, 10), 1);
        assert_eq!(ramp_index(127, 2), 0);
        assert_eq!(ramp_index(128, 2), 1);
    }

    #[test]
    fn test_ramp_longer_than_luminance_range() {
        // Past 256 levels the tail of the ramp is unreachable.
        assert_eq!(ramp_index(255, 300), 298);
        assert_eq!(ramp_index(0, 300), 0);
    }

    #[test]
    fn test_map_to_chars_standard() {
        let ramp = Ramp::new(" .:-=+*#%@").unwrap();
        assert_eq!(map_to_chars(&[0, 255], &ramp), vec![' ', '@']);
    }
}

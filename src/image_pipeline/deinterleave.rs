//! Channel deinterleaving for 2-byte interleaved sensor output.
//!
//! The sensor emits two byte lanes interleaved by position. Reconstruction
//! splits the stream into its even and odd lanes and then reassembles them
//! with the lanes swapped: odd-lane bytes land on even output positions and
//! even-lane bytes on odd output positions.

use tracing::{debug, warn};

/// The two byte lanes of an interleaved capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channels {
    /// Bytes at offsets 0, 2, 4, ... (length ⌈N/2⌉)
    pub even: Vec<u8>,
    /// Bytes at offsets 1, 3, 5, ... (length ⌊N/2⌋)
    pub odd: Vec<u8>,
}

/// Channel-swapped recombination of a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedSequence {
    pub data: Vec<u8>,
    /// The final even slot had no odd-lane value and was left at zero
    pub padded_tail: bool,
    /// Trailing even-lane byte that had no odd slot to land in
    pub dropped_byte: Option<u8>,
}

impl MergedSequence {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

pub fn split_channels(raw: &[u8]) -> Channels {
    Channels {
        even: raw.iter().step_by(2).copied().collect(),
        odd: raw.iter().skip(1).step_by(2).copied().collect(),
    }
}

/// Places odd-lane values at even indices and even-lane values at odd
/// indices of a zero-initialised buffer of length `even.len() + odd.len()`.
pub fn merge_swapped(channels: &Channels) -> MergedSequence {
    let total = channels.even.len() + channels.odd.len();
    let mut data = vec![0u8; total];

    for (slot, &value) in data.iter_mut().step_by(2).zip(&channels.odd) {
        *slot = value;
    }

    let odd_slots = total / 2;
    for (slot, &value) in data.iter_mut().skip(1).step_by(2).zip(&channels.even) {
        *slot = value;
    }

    let even_slots = total - odd_slots;
    let padded_tail = channels.odd.len() < even_slots;
    let dropped_byte = channels.even.get(odd_slots).copied();

    MergedSequence {
        data,
        padded_tail,
        dropped_byte,
    }
}

/// Splits a capture into its two lanes and merges them back swapped.
///
/// For even lengths this is a pure pairwise byte swap and applying it twice
/// returns the input. For odd lengths the last output element is zero and
/// the last input byte is not carried over; both are reported on the result.
pub fn deinterleave_and_merge(raw: &[u8]) -> MergedSequence {
    let channels = split_channels(raw);
    debug!(
        "Split {} bytes into lanes of {} and {}",
        raw.len(),
        channels.even.len(),
        channels.odd.len()
    );

    let merged = merge_swapped(&channels);
    if merged.padded_tail {
        warn!(
            "Odd capture length {}: tail padded with zero, trailing byte {:?} discarded",
            raw.len(),
            merged.dropped_byte
        );
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_channels() {
        let channels = split_channels(b"ABCD");
        assert_eq!(channels.even, b"AC");
        assert_eq!(channels.odd, b"BD");
    }

    #[test]
    fn test_merge_swaps_lanes() {
        let merged = deinterleave_and_merge(b"ABCD");
        assert_eq!(merged.data, b"BADC");
        assert!(!merged.padded_tail);
        assert_eq!(merged.dropped_byte, None);
    }

    #[test]
    fn test_pairwise_swap_for_even_length() {
        let raw: Vec<u8> = (0..=255).collect();
        let merged = deinterleave_and_merge(&raw);
        assert_eq!(merged.len(), raw.len());
        for i in 0..raw.len() / 2 {
            assert_eq!(merged.data[2 * i], raw[2 * i + 1]);
            assert_eq!(merged.data[2 * i + 1], raw[2 * i]);
        }
    }

    #[test]
    fn test_swap_is_involution() {
        let raw: Vec<u8> = (0..64u8).map(|v| v.wrapping_mul(37)).collect();
        let twice = deinterleave_and_merge(&deinterleave_and_merge(&raw).data);
        assert_eq!(twice.data, raw);
    }

    #[test]
    fn test_odd_length_pads_tail() {
        let merged = deinterleave_and_merge(&[1, 2, 3, 4, 5]);
        assert_eq!(merged.data, vec![2, 1, 4, 3, 0]);
        assert!(merged.padded_tail);
        assert_eq!(merged.dropped_byte, Some(5));
    }

    #[test]
    fn test_single_byte() {
        let merged = deinterleave_and_merge(&[42]);
        assert_eq!(merged.data, vec![0]);
        assert_eq!(merged.dropped_byte, Some(42));
    }

    #[test]
    fn test_empty_input() {
        let merged = deinterleave_and_merge(&[]);
        assert!(merged.is_empty());
        assert!(!merged.padded_tail);
    }
}

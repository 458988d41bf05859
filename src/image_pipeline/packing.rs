//! Removal of packed low-order bits from 10-bit sensor streams.
//!
//! In 10-bit packed output every fifth byte carries the low two bits of the
//! four samples around it. After the lane swap those bytes sit at merged
//! indices 1, 6, 11, ...

/// Distance between packed low-bit bytes.
pub const PACKED_GROUP_LEN: usize = 5;

/// Offset of the first packed low-bit byte within the merged sequence.
pub const PACKED_PHASE: usize = 1;

/// Drops every element at an index `i` with `i % 5 == 1`.
pub fn strip_packed_low_bits(merged: &[u8]) -> Vec<u8> {
    merged
        .iter()
        .enumerate()
        .filter(|(i, _)| i % PACKED_GROUP_LEN != PACKED_PHASE)
        .map(|(_, &v)| v)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_every_fifth_from_phase() {
        let merged: Vec<u8> = (0..12).collect();
        assert_eq!(
            strip_packed_low_bits(&merged),
            vec![0, 2, 3, 4, 5, 7, 8, 9, 10]
        );
    }

    #[test]
    fn test_strip_short_input() {
        assert_eq!(strip_packed_low_bits(&[7]), vec![7]);
        assert!(strip_packed_low_bits(&[]).is_empty());
    }
}

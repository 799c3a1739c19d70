//! Digest extraction: turning raw bytes into a deterministic draw sequence.
//!
//! The extractor feeds fixed-size windows of the input into a single running
//! BLAKE3 hasher. After each window the hasher state is snapshotted and
//! finalized, and the 32-byte digest is split into little-endian `u64` draws.
//! Chaining every window through one hasher means a single flipped byte
//! perturbs every draw from its window onward, not just the draws of the
//! window it lives in.

/// A single numeric value drawn from the input stream.
pub type Draw = u64;

/// Input bytes consumed per extraction window. One window feeds one note,
/// so this also sets how much audio an input byte buys: small enough that
/// short files still sing, large enough that a multi-megabyte input stays a
/// listenable few minutes.
pub const WINDOW_LEN: usize = 1024;

/// Draws produced per window (32-byte digest, 8 bytes per draw).
pub const DRAWS_PER_WINDOW: usize = 4;

/// Extracts the deterministic draw sequence for `bytes`.
///
/// Produces `DRAWS_PER_WINDOW * ceil(len / WINDOW_LEN)` draws in input
/// order; a trailing partial window still yields a full set. Empty input
/// yields an empty sequence, not an error.
pub fn extract(bytes: &[u8]) -> Vec<Draw> {
    let mut hasher = blake3::Hasher::new();
    let mut draws = Vec::with_capacity(bytes.len().div_ceil(WINDOW_LEN) * DRAWS_PER_WINDOW);

    for window in bytes.chunks(WINDOW_LEN) {
        hasher.update(window);
        let digest = hasher.clone().finalize();
        for word in digest.as_bytes().chunks_exact(8) {
            let le: [u8; 8] = word.try_into().unwrap();
            draws.push(u64::from_le_bytes(le));
        }
    }

    draws
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_determinism() {
        let input: Vec<u8> = (0..100).collect();
        assert_eq!(extract(&input), extract(&input));
    }

    #[test]
    fn test_extract_empty_input() {
        assert!(extract(&[]).is_empty());
    }

    #[test]
    fn test_extract_draw_count_is_linear() {
        assert_eq!(extract(&[0u8; WINDOW_LEN]).len(), DRAWS_PER_WINDOW);
        assert_eq!(extract(&[0u8; 2 * WINDOW_LEN]).len(), 2 * DRAWS_PER_WINDOW);
        assert_eq!(extract(&[0u8; 10 * WINDOW_LEN]).len(), 10 * DRAWS_PER_WINDOW);
    }

    #[test]
    fn test_extract_partial_window_yields_full_group() {
        // Anything short of a window still draws.
        assert_eq!(extract(&[0xab]).len(), DRAWS_PER_WINDOW);
        assert_eq!(extract(&[0xab; WINDOW_LEN - 1]).len(), DRAWS_PER_WINDOW);
        // One full window plus a single trailing byte.
        assert_eq!(extract(&[0xab; WINDOW_LEN + 1]).len(), 2 * DRAWS_PER_WINDOW);
    }

    #[test]
    fn test_extract_depends_on_byte_order() {
        assert_ne!(extract(&[1, 2]), extract(&[2, 1]));
    }

    #[test]
    fn test_extract_avalanche_reaches_subsequent_windows() {
        let input: Vec<u8> = (0..4 * WINDOW_LEN).map(|i| i as u8).collect();
        let mut flipped = input.clone();
        flipped[WINDOW_LEN + 20] ^= 0x01; // inside the second window

        let a = extract(&input);
        let b = extract(&flipped);
        assert_eq!(a.len(), b.len());

        // Draws before the flipped window are untouched.
        assert_eq!(a[..DRAWS_PER_WINDOW], b[..DRAWS_PER_WINDOW]);
        // The flipped window and every window after it draw differently.
        for w in 1..4 {
            let range = w * DRAWS_PER_WINDOW..(w + 1) * DRAWS_PER_WINDOW;
            assert_ne!(a[range.clone()], b[range]);
        }
    }
}

//! Secure random source.
//!
//! Class picks, filler picks and the final shuffle all draw from the
//! operating system CSPRNG. There is no userspace state to seed or zero.

use rand::RngCore;
use zeroize::Zeroize;

pub use rand::rngs::OsRng;

#[inline]
pub fn source() -> OsRng {
    OsRng
}

pub fn source_name() -> &'static str {
    "OS CSPRNG (getrandom)"
}

/// Confirm the OS generator answers before any password work starts.
/// `OsRng` panics on failure during generation, so callers check here first.
pub fn probe() -> Result<(), rand::Error> {
    let mut buf = [0u8; 16];
    let res = source().try_fill_bytes(&mut buf);
    buf.zeroize();
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_succeeds_on_supported_platforms() {
        assert!(probe().is_ok());
    }

    #[test]
    fn consecutive_draws_differ() {
        let mut rng = source();
        let a = rng.next_u64();
        let b = rng.next_u64();
        let c = rng.next_u64();
        assert!(a != b || b != c);
    }
}

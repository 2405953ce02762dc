//! Password generation.

use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use super::{ClassSet, GenerateError, Password};
use crate::rng;

/// Generate one password from the OS CSPRNG.
pub fn generate(length: usize, classes: ClassSet) -> Result<Password, GenerateError> {
    generate_with(&mut rng::source(), length, classes)
}

/// Generate one password from the given secure source.
///
/// One character is drawn from each enabled class, the rest uniformly from
/// the universe, and the whole sequence is then shuffled so the guaranteed
/// characters carry no positional signal.
pub fn generate_with<R>(
    rng: &mut R,
    length: usize,
    classes: ClassSet,
) -> Result<Password, GenerateError>
where
    R: Rng + CryptoRng,
{
    validate(length, &classes)?;
    trace!(
        "generating password: length={}, classes={}",
        length,
        classes.describe()
    );

    let universe = classes.universe();
    let mut buf = Vec::with_capacity(length);

    for class in classes.iter() {
        buf.push(random_byte(rng, class.chars()));
    }
    fill(rng, &universe, length, &mut buf);
    shuffle(rng, &mut buf);
    debug_assert!(
        classes
            .iter()
            .all(|class| buf.iter().any(|&b| class.contains(b as char)))
    );

    debug!(
        "generated password: length={}, universe={} chars",
        buf.len(),
        universe.len()
    );
    Ok(Password::from_ascii(buf))
}

/// Check a request without consuming any randomness.
pub fn validate(length: usize, classes: &ClassSet) -> Result<(), GenerateError> {
    if classes.is_empty() {
        return Err(GenerateError::InvalidRequest);
    }
    let required = classes.len();
    if length < required {
        return Err(GenerateError::LengthTooShort { length, required });
    }
    Ok(())
}

/// Append uniform picks from `universe` until `buf` holds `length` bytes.
#[inline]
fn fill<R: Rng + CryptoRng>(rng: &mut R, universe: &[u8], length: usize, buf: &mut Vec<u8>) {
    let missing = length.saturating_sub(buf.len());
    buf.extend((0..missing).map(|_| random_byte(rng, universe)));
}

// `gen_range` rejects out-of-zone samples, so there is no modulo bias.
#[inline]
fn random_byte<R: Rng + CryptoRng>(rng: &mut R, chars: &[u8]) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}

#[inline]
fn shuffle<R: Rng + CryptoRng>(rng: &mut R, chars: &mut [u8]) {
    chars.shuffle(rng);
}

//! Generated password, zeroized on drop.

use std::fmt;

use zeroize::Zeroize;

pub struct Password(String);

impl Password {
    /// Takes ownership of ASCII bytes from the charset tables and zeroes the source buffer.
    pub(super) fn from_ascii(mut bytes: Vec<u8>) -> Self {
        // Sized up front so the secret never gets copied by a reallocation.
        let mut pass = String::with_capacity(bytes.len());
        pass.extend(bytes.iter().map(|&b| b as char));
        bytes.zeroize();
        Password(pass)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (all characters are single-byte ASCII).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

// Never print the secret through `{:?}`.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.len())
    }
}

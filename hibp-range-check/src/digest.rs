use std::fmt;

use sha1::{Digest, Sha1};

/// Length of an uppercase hex SHA1 digest (20 bytes, two chars each).
pub const DIGEST_HEX_LEN: usize = 40;

/// The length of the hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of the hash suffix matched locally against the range response.
pub const SUFFIX_LEN: usize = DIGEST_HEX_LEN - PREFIX_LEN;

/// Hex lookup table for digest conversion.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Uppercase hex SHA1 digest of a password, held on the stack.
///
/// Only the [`prefix`](Self::prefix) is ever meant to leave the process; the
/// [`suffix`](Self::suffix) is compared locally against the range response.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PasswordDigest {
    hex: [u8; DIGEST_HEX_LEN],
}

impl PasswordDigest {
    /// Hashes the UTF-8 bytes of `password` with SHA1.
    pub fn of(password: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password.as_bytes());
        let hash: [u8; 20] = hasher.finalize().into();

        Self { hex: hash_to_hex(&hash) }
    }

    /// The full 40 character digest.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: hex only ever holds bytes taken from HEX_CHARS, which is ASCII.
        unsafe { std::str::from_utf8_unchecked(&self.hex) }
    }

    /// First 5 hex characters, used as the range API key.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.as_str()[..PREFIX_LEN]
    }

    /// Remaining 35 hex characters.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.as_str()[PREFIX_LEN..]
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for PasswordDigest {
    // Keep the suffix out of debug output so it can't end up in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasswordDigest({}...)", self.prefix())
    }
}

/// Convert a raw SHA1 hash to 40 uppercase hex chars (stack allocated)
#[inline]
pub fn hash_to_hex(hash: &[u8; 20]) -> [u8; DIGEST_HEX_LEN] {
    let mut out = [0u8; DIGEST_HEX_LEN];
    for (i, byte) in hash.iter().enumerate() {
        out[i * 2] = HEX_CHARS[(byte >> 4) as usize];
        out[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
    }
    out
}

//! Checks a password against the [Have I Been Pwned](https://haveibeenpwned.com/Passwords)
//! Pwned Passwords range API.
//!
//! The password is hashed locally with SHA1. Only the first 5 hex characters of
//! the hash are sent to `api.pwnedpasswords.com/range/{prefix}`, which answers
//! with every known hash suffix sharing that prefix and its breach count. The
//! remaining 35 characters are matched locally, so neither the password nor its
//! full hash ever leaves the machine (k-anonymity).
//!
//! ```no_run
//! # async fn run() -> Result<(), hibp_range_check::Error> {
//! use hibp_range_check::{ClientConfig, RangeClient, check_password, report};
//!
//! let client = RangeClient::new(&ClientConfig::default())?;
//! let count = check_password(&client, "password123").await?;
//! println!("{}", report::render(count));
//! # Ok(())
//! # }
//! ```

pub mod digest;
pub mod error;
pub mod prompt;
pub mod range;
pub mod report;

pub use digest::{DIGEST_HEX_LEN, PREFIX_LEN, PasswordDigest, SUFFIX_LEN};
pub use error::Error;
pub use range::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT, RangeClient, parse_range_body};

/// Hashes `password` and returns its breach count from the range API (0 if not found).
pub async fn check_password(client: &RangeClient, password: &str) -> Result<u64, Error> {
    let digest = PasswordDigest::of(password);
    client.breach_count(&digest).await
}

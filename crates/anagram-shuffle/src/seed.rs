use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::RngExt as _;

/// Seed of a [`Shuffler`](crate::Shuffler).
///
/// Displayed and parsed as 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed([u8; 32]);

impl ShuffleSeed {
    /// Draws a fresh seed from the thread-local system generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of this seed.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for ShuffleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0; 32];
        hex::decode_to_slice(s.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }
}

/// Errors returned when parsing a [`ShuffleSeed`].
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseSeedError {
    /// The text is not 64 hex characters.
    #[display("invalid shuffle seed: {_0}")]
    Hex(hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn display_and_parse_agree() {
        let seed: ShuffleSeed = SEED.parse().unwrap();
        assert_eq!(seed.to_string(), SEED);
        assert_eq!(seed.to_bytes()[0], 0xc1);
        assert_eq!(ShuffleSeed::from_bytes(seed.to_bytes()), seed);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("".parse::<ShuffleSeed>().is_err());
        assert!("abcd".parse::<ShuffleSeed>().is_err());
        assert!(SEED.replace('c', "x").parse::<ShuffleSeed>().is_err());
        assert!(format!("{SEED}00").parse::<ShuffleSeed>().is_err());
    }

    #[test]
    fn random_seeds_differ() {
        assert_ne!(ShuffleSeed::random(), ShuffleSeed::random());
    }
}

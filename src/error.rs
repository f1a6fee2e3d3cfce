//! Error types for the `longmap` crate

/// Errors raised while configuring or constructing a [`crate::LongMap`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LongMapError {
    /// The bucket table must hold between 1 and `i64::MAX` slots.
    ///
    /// Every slot is computed as `key mod table_size`, so a zero sized table
    /// leaves the hash undefined and a table larger than `i64::MAX` can not be
    /// expressed as a modulus over the key type.
    #[error("invalid table size {0}, expected a value in 1..={max}", max = i64::MAX)]
    InvalidTableSize(i128),

    /// `set_option` was called with a name the map does not recognize.
    #[error("no such option: {0}")]
    UnknownOption(String),

    /// `set_option` was given a missing or unparsable value.
    #[error("bad value {value:?} for option {name}")]
    InvalidOptionValue { name: String, value: Option<String> },
}

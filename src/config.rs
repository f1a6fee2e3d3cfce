use crate::error::LongMapError;

/// Bucket count used when none is given explicitly.
pub const DEFAULT_TABLE_SIZE: usize = 4096;

const TABLE_SIZE_OPTION: &str = "TableSize";

/// Construction time settings for a [`crate::LongMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongMapConfig {
    /// Number of buckets. Fixed for the lifetime of the map.
    pub table_size: usize,
}

impl Default for LongMapConfig {
    fn default() -> LongMapConfig {
        LongMapConfig {
            table_size: DEFAULT_TABLE_SIZE,
        }
    }
}

impl LongMapConfig {
    pub fn with_table_size(table_size: usize) -> LongMapConfig {
        LongMapConfig { table_size }
    }

    /// Names of the options understood by [`LongMapConfig::set_option`].
    pub fn option_names() -> &'static [&'static str] {
        &[TABLE_SIZE_OPTION]
    }

    /// Set an option from its textual form, e.g. `("TableSize", Some("1024"))`.
    ///
    /// Values are range checked here so a config that went through
    /// `set_option` is always valid.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), LongMapError> {
        match name {
            TABLE_SIZE_OPTION => {
                let Some(Ok(size)) = value.map(|v| v.trim().parse::<i128>()) else {
                    return Err(LongMapError::InvalidOptionValue {
                        name: name.to_string(),
                        value: value.map(str::to_string),
                    });
                };
                self.table_size = checked_table_size(size)?;
                Ok(())
            }
            _ => Err(LongMapError::UnknownOption(name.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), LongMapError> {
        checked_table_size(self.table_size as i128).map(|_| ())
    }
}

fn checked_table_size(size: i128) -> Result<usize, LongMapError> {
    if size <= 0 || size > i64::MAX as i128 {
        return Err(LongMapError::InvalidTableSize(size));
    }
    usize::try_from(size).map_err(|_| LongMapError::InvalidTableSize(size))
}

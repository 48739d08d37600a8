use std::fmt;

/// Rejected roll configuration.
///
/// Raised by [`RollConfig::validate`](crate::config::RollConfig::validate) before any die is
/// rolled, so a caller that sees this error knows no partial sheet exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// More dice would be dropped than are rolled.
    TooManyDrops { nrolls: u32, ndrops: u32 },
    /// A die needs at least one face.
    ZeroSidedDie,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::TooManyDrops { .. } | ConfigError::ZeroSidedDie => "invalid_config",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::TooManyDrops { .. } => "can not drop more than nrolls rolls",
            ConfigError::ZeroSidedDie => "dice need at least one side",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooManyDrops { nrolls, ndrops } => write!(
                f,
                "{}: {} (nrolls={}, ndrops={})",
                self.code(),
                self.message(),
                nrolls,
                ndrops
            ),
            ConfigError::ZeroSidedDie => write!(f, "{}: {}", self.code(), self.message()),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_counts() {
        let err = ConfigError::TooManyDrops {
            nrolls: 3,
            ndrops: 4,
        };
        let text = err.to_string();
        assert!(text.starts_with("invalid_config"));
        assert!(text.contains("nrolls=3"));
        assert!(text.contains("ndrops=4"));
    }

    #[test]
    fn every_variant_shares_the_invalid_config_code() {
        assert_eq!(ConfigError::ZeroSidedDie.code(), "invalid_config");
        assert_eq!(
            ConfigError::TooManyDrops {
                nrolls: 0,
                ndrops: 1
            }
            .code(),
            "invalid_config"
        );
    }
}

//! Demo configuration, read from the environment.

use std::env::VarError;

use wizcoin_core::{DomainError, DomainResult};
use wizcoin_purse::CoinPurse;

/// Environment variable listing the purses to print, e.g. `"2,5,99;13,0,0"`.
pub const PURSES_ENV: &str = "WIZCOIN_PURSES";

/// Purses printed when `WIZCOIN_PURSES` is unset.
pub const DEFAULT_PURSES: [CoinPurse; 2] = [CoinPurse::new(2, 5, 99), CoinPurse::new(13, 0, 0)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub purses: Vec<CoinPurse>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            purses: DEFAULT_PURSES.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Load from `WIZCOIN_PURSES`, falling back to the default purses.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_var(std::env::var(PURSES_ENV))
    }

    /// Interpret the result of looking up `WIZCOIN_PURSES`.
    ///
    /// Unset or blank means the default purses; a value that is not valid
    /// unicode is rejected like any other malformed input.
    pub fn from_var(var: Result<String, VarError>) -> DomainResult<Self> {
        match var {
            Ok(raw) if !raw.trim().is_empty() => {
                tracing::info!(source = PURSES_ENV, "loading purses from environment");
                Self::parse(&raw)
            }
            Ok(_) | Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(DomainError::validation(format!(
                "{PURSES_ENV} is not valid unicode: {raw:?}"
            ))),
        }
    }

    /// Parse semicolon separated `galleons,sickles,knuts` triples.
    ///
    /// Empty entries (e.g. a trailing `;`) are skipped.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let purses = raw
            .split(';')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .enumerate()
            .map(|(i, entry)| {
                entry.parse::<CoinPurse>().map_err(|e| {
                    DomainError::validation(format!("{PURSES_ENV} entry {} ({entry:?}): {e}", i + 1))
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        if purses.is_empty() {
            return Err(DomainError::validation(format!(
                "{PURSES_ENV} does not name any purse"
            )));
        }

        Ok(Self { purses })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_two_demo_purses() {
        let config = DemoConfig::default();
        assert_eq!(
            config.purses,
            vec![CoinPurse::new(2, 5, 99), CoinPurse::new(13, 0, 0)]
        );
    }

    #[test]
    fn parses_multiple_entries() {
        let config = DemoConfig::parse("1,2,3; 4,5,6;").unwrap();
        assert_eq!(
            config.purses,
            vec![CoinPurse::new(1, 2, 3), CoinPurse::new(4, 5, 6)]
        );
    }

    #[test]
    fn error_names_the_failing_entry() {
        let err = DemoConfig::parse("1,2,3;4,-5,6").unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("entry 2") && msg.contains("sickles") => {}
            other => panic!("Expected validation error for entry 2, got {other:?}"),
        }
    }

    #[test]
    fn unset_variable_means_defaults() {
        let config = DemoConfig::from_var(Err(VarError::NotPresent)).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn blank_variable_means_defaults() {
        let config = DemoConfig::from_var(Ok("  ".to_string())).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn set_variable_is_parsed() {
        let config = DemoConfig::from_var(Ok("0,0,1".to_string())).unwrap();
        assert_eq!(config.purses, vec![CoinPurse::new(0, 0, 1)]);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_variable_is_rejected() {
        use std::os::unix::ffi::OsStringExt;

        let raw = std::ffi::OsString::from_vec(vec![b'1', 0xff, b'2']);
        let err = DemoConfig::from_var(Err(VarError::NotUnicode(raw))).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("not valid unicode") => {}
            other => panic!("Expected validation error for non-unicode value, got {other:?}"),
        }
    }

    #[test]
    fn separators_only_is_rejected() {
        assert!(DemoConfig::parse(" ; ;").is_err());
    }
}

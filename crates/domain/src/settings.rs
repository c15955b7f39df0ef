//! Runner settings
//!
//! Settings are read from the environment by the binary. Lookup is
//! injected so this module stays free of I/O.

use std::time::Duration;

use crate::error::{DomainError, DomainResult};

/// Environment variable holding the per-request deadline in milliseconds.
pub const TIMEOUT_ENV: &str = "RESTCASE_TIMEOUT_MS";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSettings {
    /// Deadline for the whole HTTP exchange, in milliseconds.
    pub timeout_ms: u64,
    /// User-Agent sent with the request.
    pub user_agent: String,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("restcase/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RunnerSettings {
    /// Builds settings from a variable lookup, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but unusable.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            settings.timeout_ms = raw.trim().parse().map_err(|e| {
                DomainError::invalid_setting(TIMEOUT_ENV, format!("`{raw}` is not a number: {e}"))
            })?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Sets the timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns the timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Checks that the settings can be used for a run.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero or the user agent is empty.
    pub fn validate(&self) -> DomainResult<()> {
        if self.timeout_ms == 0 {
            return Err(DomainError::invalid_setting(
                TIMEOUT_ENV,
                "timeout must be greater than zero",
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(DomainError::invalid_setting(
                "user_agent",
                "user agent must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_when_unset() {
        let settings = RunnerSettings::from_lookup(|_| None).unwrap();
        assert_eq!(settings.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(settings.user_agent.starts_with("restcase/"));
    }

    #[test]
    fn test_timeout_from_lookup() {
        let settings =
            RunnerSettings::from_lookup(|key| (key == TIMEOUT_ENV).then(|| " 1500 ".to_string()))
                .unwrap();
        assert_eq!(settings.timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn test_non_numeric_timeout_rejected() {
        let result = RunnerSettings::from_lookup(|_| Some("soon".to_string()));
        assert!(matches!(result, Err(DomainError::InvalidSetting { .. })));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = RunnerSettings::from_lookup(|_| Some("0".to_string()));
        assert!(result.is_err());
        assert!(RunnerSettings::default().with_timeout_ms(0).validate().is_err());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let settings = RunnerSettings {
            user_agent: "  ".to_string(),
            ..RunnerSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}

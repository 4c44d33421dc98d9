//! Telegram credentials from the process environment.

use std::fmt;
use std::path::Path;

use super::error::var;
use super::ConfigError;

/// Bot token and destination chat id.
///
/// `Debug` never prints the full token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Telegram bot token
    pub bot_token: String,
    /// Chat that receives notifications
    pub chat_id: String,
}

impl Credentials {
    /// Reads both values from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if either is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads both values through `lookup`, treating empty strings as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] naming the first missing variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::missing(key))
        };

        Ok(Self {
            bot_token: required(var::BOT_TOKEN)?,
            chat_id: required(var::CHAT_ID)?,
        })
    }

    /// Returns the token with everything but the bot id hidden.
    #[must_use]
    pub fn masked_token(&self) -> String {
        match self.bot_token.split_once(':') {
            Some((bot_id, _)) => format!("{bot_id}:****"),
            None => "****".to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &self.masked_token())
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Loads a dotenv file into the process environment.
///
/// Returns `false` if the file does not exist. Variables that are already
/// set keep their values.
///
/// # Errors
///
/// Returns [`ConfigError::EnvFile`] if the file exists but cannot be read
/// or parsed.
pub fn load_env_file(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(ConfigError::EnvFile {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    mod from_lookup {
        use super::*;

        #[test]
        fn reads_both_values() {
            let creds = Credentials::from_lookup(lookup_from(&[
                ("TELEGRAM_BOT_TOKEN", "123:abc"),
                ("TELEGRAM_CHAT_ID", "-100200"),
            ]))
            .unwrap();

            assert_eq!(creds.bot_token, "123:abc");
            assert_eq!(creds.chat_id, "-100200");
        }

        #[test]
        fn missing_token_is_an_error() {
            let result = Credentials::from_lookup(lookup_from(&[("TELEGRAM_CHAT_ID", "1")]));

            assert!(matches!(
                result,
                Err(ConfigError::MissingCredential {
                    var: "TELEGRAM_BOT_TOKEN"
                })
            ));
        }

        #[test]
        fn empty_chat_id_is_an_error() {
            let result = Credentials::from_lookup(lookup_from(&[
                ("TELEGRAM_BOT_TOKEN", "123:abc"),
                ("TELEGRAM_CHAT_ID", "  "),
            ]));

            assert!(matches!(
                result,
                Err(ConfigError::MissingCredential {
                    var: "TELEGRAM_CHAT_ID"
                })
            ));
        }

        #[test]
        fn missing_error_names_the_variable() {
            let error = Credentials::from_lookup(lookup_from(&[])).unwrap_err();

            assert_eq!(
                error.to_string(),
                "TELEGRAM_BOT_TOKEN is missing in the environment variables"
            );
        }
    }

    mod masking {
        use super::*;

        fn creds(token: &str) -> Credentials {
            Credentials {
                bot_token: token.to_string(),
                chat_id: "42".to_string(),
            }
        }

        #[test]
        fn keeps_bot_id_only() {
            assert_eq!(creds("123456:SECRET").masked_token(), "123456:****");
        }

        #[test]
        fn hides_unstructured_token_entirely() {
            assert_eq!(creds("SECRET").masked_token(), "****");
        }

        #[test]
        fn debug_does_not_leak_token() {
            let debug = format!("{:?}", creds("123456:SECRET"));

            assert!(!debug.contains("SECRET"));
            assert!(debug.contains("42"));
        }
    }

    mod env_file {
        use super::*;

        #[test]
        fn missing_file_is_not_an_error() {
            let dir = tempfile::tempdir().unwrap();

            let loaded = load_env_file(&dir.path().join(".env")).unwrap();

            assert!(!loaded);
        }

        #[test]
        fn existing_file_is_loaded() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "HOSTWATCH_TEST_ONLY_VAR=from-file").unwrap();

            let loaded = load_env_file(file.path()).unwrap();

            assert!(loaded);
            assert_eq!(
                std::env::var("HOSTWATCH_TEST_ONLY_VAR").as_deref(),
                Ok("from-file")
            );
        }

        #[test]
        fn malformed_file_is_an_error() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "NOT A VALID LINE ==").unwrap();

            let result = load_env_file(file.path());

            assert!(matches!(result, Err(ConfigError::EnvFile { .. })));
        }
    }
}

use std::num::ParseIntError;

use tracing::debug;

use crate::env::{ReadEnv, SystemEnv};
use crate::error::{EnvError, Result};

/// Typed reads over any [`ReadEnv`] source.
///
/// Two policies per type: `get_*` substitutes the fallback and never fails,
/// `require_*` returns an [`EnvError`]. A variable set to `""` reads as
/// unset under both.
///
/// ```
/// use std::collections::HashMap;
/// use trogon_env::EnvAccessor;
///
/// let vars = HashMap::from([("PORT".to_string(), "8080".to_string())]);
/// let env = EnvAccessor::new(vars);
///
/// assert_eq!(env.get_int("PORT", 3000), 8080);
/// assert_eq!(env.get_string("HOST", "localhost"), "localhost");
/// assert!(env.require_string("TOKEN").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvAccessor<E> {
    env: E,
}

impl EnvAccessor<SystemEnv> {
    /// Reads from the process environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E: ReadEnv> EnvAccessor<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn inner(&self) -> &E {
        &self.env
    }

    pub fn into_inner(self) -> E {
        self.env
    }

    pub fn get_string(&self, key: &str, fallback: &str) -> String {
        self.lookup(key).unwrap_or_else(|| fallback.to_string())
    }

    pub fn require_string(&self, key: &str) -> Result<String> {
        self.lookup(key).ok_or_else(|| missing(key))
    }

    /// Malformed values fall back silently; a `debug` event records the raw value.
    pub fn get_int(&self, key: &str, fallback: i64) -> i64 {
        let Some(raw) = self.lookup(key) else {
            return fallback;
        };
        match parse_int(&raw) {
            Ok(value) => value,
            Err(error) => {
                debug!(key, raw = %raw, %error, "ignoring non-integer env value");
                fallback
            }
        }
    }

    pub fn require_int(&self, key: &str) -> Result<i64> {
        let raw = self.require_string(key)?;
        parse_int(&raw).map_err(|source| EnvError::InvalidInt {
            key: key.to_string(),
            raw,
            source,
        })
    }

    /// `None` for unset, empty, and non-Unicode values alike.
    fn lookup(&self, key: &str) -> Option<String> {
        self.env.var(key).ok().filter(|v| !v.is_empty())
    }
}

/// Optional sign, ASCII digits, no whitespace, within `i64`.
fn parse_int(raw: &str) -> std::result::Result<i64, ParseIntError> {
    raw.parse()
}

fn missing(key: &str) -> EnvError {
    EnvError::MissingKey {
        key: key.to_string(),
    }
}

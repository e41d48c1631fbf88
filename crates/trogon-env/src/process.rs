//! Shorthands over [`EnvAccessor::system`] for callers that read the real
//! process environment directly.

use crate::accessor::EnvAccessor;
use crate::error::Result;

pub fn get_string(key: &str, fallback: &str) -> String {
    EnvAccessor::system().get_string(key, fallback)
}

pub fn require_string(key: &str) -> Result<String> {
    EnvAccessor::system().require_string(key)
}

pub fn get_int(key: &str, fallback: i64) -> i64 {
    EnvAccessor::system().get_int(key, fallback)
}

pub fn require_int(key: &str) -> Result<i64> {
    EnvAccessor::system().require_int(key)
}

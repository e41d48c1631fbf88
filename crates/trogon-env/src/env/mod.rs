//! Lookup seam for environment variables.
//!
//! Every accessor reads through [`ReadEnv`]. Production code uses
//! [`SystemEnv`]; tests hand in a plain map and never touch the process
//! environment.
//!
//! ```
//! use std::collections::BTreeMap;
//! use trogon_env::{EnvAccessor, EnvError, ReadEnv};
//!
//! fn worker_count<E: ReadEnv>(env: E) -> Result<i64, EnvError> {
//!     EnvAccessor::new(env).require_int("WORKERS")
//! }
//!
//! let env = BTreeMap::from([("WORKERS".to_string(), "8".to_string())]);
//! assert_eq!(worker_count(&env), Ok(8));
//!
//! let env = BTreeMap::from([("WORKERS".to_string(), String::new())]);
//! assert!(matches!(worker_count(&env), Err(EnvError::MissingKey { .. })));
//! ```

mod read_env;
mod system;

pub use read_env::ReadEnv;
pub use system::SystemEnv;

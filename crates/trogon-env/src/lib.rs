//! Typed environment variable reads for TrogonStack services.
//!
//! # Quick Start
//!
//! | Read | Lenient (fallback) | Strict ([`EnvError`]) |
//! |------|--------------------|-----------------------|
//! | `String` | [`get_string`] | [`require_string`] |
//! | `i64` | [`get_int`] | [`require_int`] |
//!
//! The free functions read the process environment. To read from anything
//! else (a `HashMap` or `BTreeMap` in tests), wrap it in an
//! [`EnvAccessor`]:
//!
//! ```
//! use trogon_env::{EnvAccessor, ReadEnv};
//!
//! struct ServerConfig {
//!     port: i64,
//!     token: String,
//! }
//!
//! impl ServerConfig {
//!     fn from_env<E: ReadEnv>(env: E) -> trogon_env::Result<Self> {
//!         let env = EnvAccessor::new(env);
//!         Ok(Self {
//!             port: env.get_int("PORT", 3000),
//!             token: env.require_string("TOKEN")?,
//!         })
//!     }
//! }
//!
//! let vars = std::collections::HashMap::from([
//!     ("TOKEN".to_string(), "s3cr3t".to_string()),
//! ]);
//! let config = ServerConfig::from_env(vars).unwrap();
//! assert_eq!(config.port, 3000);
//! assert_eq!(config.token, "s3cr3t");
//! ```
//!
//! # Empty values
//!
//! `NAME=` is read exactly like an unset `NAME`: lenient reads return the
//! fallback and strict reads fail with [`EnvError::MissingKey`].

mod accessor;
pub mod env;
pub mod error;
mod process;

pub use accessor::EnvAccessor;
pub use env::{ReadEnv, SystemEnv};
pub use error::{EnvError, Result};
pub use process::{get_int, get_string, require_int, require_string};

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// Same contract as [`std::env::var`].
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn spawn_work<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        (**self).var(key)
    }
}

impl<S: BuildHasher> ReadEnv for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.get(key).cloned().ok_or(env::VarError::NotPresent)
    }
}

impl ReadEnv for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.get(key).cloned().ok_or(env::VarError::NotPresent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<E: ReadEnv>(env: E, key: &str) -> Option<String> {
        env.var(key).ok()
    }

    #[test]
    fn test_hash_map_as_env() {
        let mut vars = HashMap::new();
        vars.insert("PORT".to_string(), "8080".to_string());

        assert_eq!(lookup(&vars, "PORT").as_deref(), Some("8080"));
        assert!(matches!(vars.var("HOST"), Err(env::VarError::NotPresent)));
    }

    #[test]
    fn test_btree_map_as_env() {
        let vars = BTreeMap::from([("NAME".to_string(), "trogon".to_string())]);

        assert_eq!(lookup(&vars, "NAME").as_deref(), Some("trogon"));
        assert!(lookup(&vars, "MISSING").is_none());
    }

    #[test]
    fn test_reference_delegates_to_inner() {
        let vars = HashMap::from([("KEY".to_string(), "value".to_string())]);
        let by_ref: &HashMap<String, String> = &vars;

        assert_eq!(lookup(&by_ref, "KEY").as_deref(), Some("value"));
    }

    #[test]
    fn test_map_env_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HashMap<String, String>>();
        assert_send_sync::<BTreeMap<String, String>>();
    }
}

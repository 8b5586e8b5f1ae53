use std::path::PathBuf;

use serde::Deserialize;

use crate::errors::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub field_a: String,
    pub field_b: i64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            field_a: std::env::var("HOOKWRAP_FIELD_A").unwrap_or_else(|_| "yakir".to_string()),
            field_b: std::env::var("HOOKWRAP_FIELD_B")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(33),
        }
    }
}

pub fn load(explicit: Option<PathBuf>) -> ServiceResult<ServiceConfig> {
    let path = resolve_config_path(explicit);
    if !path.exists() {
        return Ok(ServiceConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| ServiceError::Config(format!("Failed to read {}: {e}", path.display())))?;
    toml::from_str::<ServiceConfig>(&content)
        .map_err(|e| ServiceError::Config(format!("Invalid {}: {e}", path.display())))
}

fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    if let Ok(path) = std::env::var("HOOKWRAP_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from("hookwrap.toml")
}

#[cfg(test)]
mod tests {
    use super::{load, resolve_config_path, ServiceConfig};
    use std::path::PathBuf;
    use std::sync::{Mutex, PoisonError};

    // Default and resolve_config_path read process-global env vars, so
    // every test touching them serializes on this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("HOOKWRAP_FIELD_A");
            std::env::remove_var("HOOKWRAP_FIELD_B");
            std::env::remove_var("HOOKWRAP_CONFIG");
        }
    }

    #[test]
    fn full_toml_overrides_both_fields() {
        let config: ServiceConfig =
            toml::from_str("field_a = \"levi\"\nfield_b = 7\n").unwrap();

        assert_eq!(config.field_a, "levi");
        assert_eq!(config.field_b, 7);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();

        let config: ServiceConfig = toml::from_str("field_b = 7\n").unwrap();

        assert_eq!(config.field_a, "yakir");
        assert_eq!(config.field_b, 7);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();

        let config = load(Some(PathBuf::from("/nonexistent/hookwrap.toml"))).unwrap();

        assert_eq!(config.field_a, "yakir");
        assert_eq!(config.field_b, 33);
    }

    #[test]
    fn env_vars_override_built_in_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();
        unsafe {
            std::env::set_var("HOOKWRAP_FIELD_A", "env-a");
            std::env::set_var("HOOKWRAP_FIELD_B", "44");
        }

        let config = ServiceConfig::default();
        clear_env();

        assert_eq!(config.field_a, "env-a");
        assert_eq!(config.field_b, 44);
    }

    #[test]
    fn unparsable_env_field_b_keeps_the_default() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();
        unsafe {
            std::env::set_var("HOOKWRAP_FIELD_B", "not-a-number");
        }

        let config = ServiceConfig::default();
        clear_env();

        assert_eq!(config.field_b, 33);
    }

    #[test]
    fn config_path_precedence_is_explicit_then_env_then_cwd() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear_env();
        unsafe {
            std::env::set_var("HOOKWRAP_CONFIG", "/tmp/from-env.toml");
        }

        let explicit = PathBuf::from("/tmp/custom.toml");
        assert_eq!(resolve_config_path(Some(explicit.clone())), explicit);
        assert_eq!(
            resolve_config_path(None),
            PathBuf::from("/tmp/from-env.toml")
        );

        clear_env();
        assert_eq!(resolve_config_path(None), PathBuf::from("hookwrap.toml"));
    }
}

use std::env::{self, VarError};

use super::ReadEnv;

/// Zero-sized type — delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        env::var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_system_env_reads_scoped_variable() {
        temp_env::with_vars([("_ENV_READER_SYSTEM_SET", Some("value"))], || {
            assert_eq!(
                SystemEnv.var("_ENV_READER_SYSTEM_SET"),
                Ok("value".to_string())
            );
        });
    }

    #[test]
    #[serial]
    fn test_system_env_reports_absent_key() {
        temp_env::with_vars([("_ENV_READER_SYSTEM_UNSET", None::<&str>)], || {
            assert_eq!(
                SystemEnv.var("_ENV_READER_SYSTEM_UNSET"),
                Err(VarError::NotPresent)
            );
        });
    }

    #[test]
    #[serial]
    fn test_system_env_keeps_empty_value() {
        temp_env::with_vars([("_ENV_READER_SYSTEM_EMPTY", Some(""))], || {
            assert_eq!(SystemEnv.var("_ENV_READER_SYSTEM_EMPTY"), Ok(String::new()));
        });
    }

    #[test]
    fn test_generic_function_with_system_env() {
        fn get_value_or_default<E: ReadEnv>(env: &E, key: &str, default: &str) -> String {
            env.var(key).unwrap_or_else(|_| default.to_string())
        }

        let result = get_value_or_default(&SystemEnv, "_ENV_READER_NONEXISTENT_12345", "default");
        assert_eq!(result, "default");
    }

    #[test]
    fn test_system_env_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemEnv>();
    }
}

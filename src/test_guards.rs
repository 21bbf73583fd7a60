//! RAII guard for environment variables in tests.
//!
//! Tests that read `MOVIESEEK_HOME` or the `TMDB_*` variables must restore
//! them even if they panic. Environment variables are process-global, so tests
//! using the guard are still marked `#[serial]`.

use std::env;
use std::ffi::OsString;

/// Snapshots a variable on construction and restores it on drop.
pub struct EnvGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvGuard {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            original: env::var_os(key),
        }
    }

    /// Snapshot `key`, then set it to `value`.
    ///
    /// # Safety
    /// Calls `std::env::set_var`; the calling test must be `#[serial]`.
    pub unsafe fn set(key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let guard = Self::new(key);
        unsafe { env::set_var(key, value) };
        guard
    }

    /// Snapshot `key`, then remove it.
    ///
    /// # Safety
    /// Calls `std::env::remove_var`; the calling test must be `#[serial]`.
    pub unsafe fn remove(key: &str) -> Self {
        let guard = Self::new(key);
        unsafe { env::remove_var(key) };
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: guarded tests run under #[serial]
        match &self.original {
            Some(val) => unsafe { env::set_var(&self.key, val) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Guards that unset every TMDB credential/endpoint variable for the test's duration.
pub fn without_tmdb_env() -> [EnvGuard; 3] {
    // SAFETY: callers are #[serial]
    unsafe {
        [
            EnvGuard::remove(crate::config::ENV_ACCESS_TOKEN),
            EnvGuard::remove(crate::config::ENV_API_KEY),
            EnvGuard::remove(crate::config::ENV_BASE_URL),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_guard_restores_existing_var() {
        let key = "MOVIESEEK_TEST_GUARD_EXISTING";
        unsafe { env::set_var(key, "original") };
        {
            let _guard = unsafe { EnvGuard::set(key, "changed") };
            assert_eq!(env::var(key).unwrap(), "changed");
        }
        assert_eq!(env::var(key).unwrap(), "original");
        unsafe { env::remove_var(key) };
    }

    #[test]
    #[serial]
    fn test_env_guard_removes_var_that_was_absent() {
        let key = "MOVIESEEK_TEST_GUARD_ABSENT";
        unsafe { env::remove_var(key) };
        {
            let _guard = unsafe { EnvGuard::set(key, "temporary") };
            assert!(env::var(key).is_ok());
        }
        assert!(env::var(key).is_err());
    }
}

mod validation;

use std::env;

use tempfile::TempDir;

/// Variables that would leak host settings into a test run.
const AMBIENT_VARS: &[&str] = &[
    "PORT",
    "SUPABASE_URL",
    "SUPABASE_ANON_KEY",
    "SUPABASE_SERVICE_ROLE_KEY",
    "SUPABASE_JWT_SECRET",
    "OPENAI_API_KEY",
    "DISABLE_AUTH",
    "BLOG_SERVER_PORT",
    "BLOG_STORAGE_BACKEND",
    "BLOG_AUTH_ENABLED",
    "BLOG_AUTH_JWT_SECRET",
    "BLOG_LOG_LEVEL",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory, point BLOG_CONFIG_DIR at it and clear
/// deployment variables for the lifetime of the returned guards.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        "BLOG_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    )];
    guards.extend(AMBIENT_VARS.iter().copied().map(EnvGuard::remove));
    (temp, guards)
}

pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join("config.toml"), contents).unwrap();
}

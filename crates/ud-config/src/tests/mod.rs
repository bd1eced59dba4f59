
use tempfile::TempDir;

/// Restores the previous value of an environment variable on drop.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        // Tests touching the environment run under #[serial].
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => unsafe { std::env::set_var(self.key, value) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

/// Create a temp directory holding a `.ud/` config dir and point
/// UD_CONFIG_DIR at it.
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".ud");
    std::fs::create_dir_all(&config_dir).unwrap();
    let guard = EnvGuard::set("UD_CONFIG_DIR", config_dir.to_str().unwrap());
    (temp, guard)
}

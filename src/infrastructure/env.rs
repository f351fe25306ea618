use std::env;

/// Returns the value of an environment variable, or `None` when it is unset
/// or not valid unicode.
pub fn get_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

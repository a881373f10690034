use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Expand `~` and environment variable components in a path.
pub trait ExpandPath {
    /// Expands a leading `~` to the home directory, and any path component
    /// written as `%variable%`, `$Env:variable` or `$variable`.
    ///
    /// Components naming an unset variable are kept verbatim.
    fn expand(&self) -> PathBuf;
}

impl<T: AsRef<Path>> ExpandPath for T {
    fn expand(&self) -> PathBuf {
        let mut out = PathBuf::new();

        for (i, component) in self.as_ref().components().enumerate() {
            let Component::Normal(c) = component else {
                out.push(component);
                continue;
            };

            if i == 0 && c == OsStr::new("~") {
                match dirs::home_dir() {
                    Some(home) => out.push(home),
                    None => out.push(c),
                }
                continue;
            }

            match c.to_str().and_then(env_var_name).and_then(|v| std::env::var_os(v)) {
                Some(value) => out.push(value),
                None => out.push(c),
            }
        }

        out
    }
}

fn env_var_name(component: &str) -> Option<&str> {
    if let Some(var) = component
        .strip_prefix('%')
        .and_then(|c| c.strip_suffix('%'))
    {
        return Some(var).filter(|v| !v.is_empty());
    }

    let prefix = component.get(..5);
    if prefix.is_some_and(|p| p.eq_ignore_ascii_case("$env:")) {
        return Some(&component[5..]).filter(|v| !v.is_empty());
    }

    component.strip_prefix('$').filter(|v| !v.is_empty())
}

use regex::{Captures, Regex};
use std::env;
use std::path::Path;
use std::sync::LazyLock;

static ENV_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("env reference pattern is valid")
});

/// Replaces `$VAR` and `${VAR}` with values from the process environment.
/// Unset variables expand to an empty string.
pub fn expand_env_vars(input: &str) -> String {
    expand_env_vars_with(input, |name| env::var(name).ok())
}

/// Same as [`expand_env_vars`] with a caller supplied lookup.
pub fn expand_env_vars_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ENV_REF
        .replace_all(input, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            lookup(name).unwrap_or_default()
        })
        .into_owned()
}

/// Renders a program and its arguments the way a shell user would type them.
pub fn command_line(program: &Path, args: &[String]) -> String {
    let mut words = Vec::with_capacity(args.len() + 1);
    words.push(program.to_string_lossy().into_owned());
    words.extend(args.iter().cloned());
    shell_words::join(words)
}

//! Build metadata for `--version` output and the startup log line.

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git branch at build time, or "unknown" if unavailable.
pub const GIT_BRANCH: &str = match option_env!("VERGEN_GIT_BRANCH") {
    Some(branch) => branch,
    None => "unknown",
};

/// Git commit SHA at build time, or "unknown" if unavailable.
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

/// Build timestamp, if vergen emitted one.
pub const BUILD_TIMESTAMP: Option<&str> = option_env!("VERGEN_BUILD_TIMESTAMP");

/// Full version string: `{version}+{branch}.{sha}`, with `.dirty` appended
/// when the tree had local modifications.
pub fn version_string() -> String {
    let dirty = option_env!("VERGEN_GIT_DIRTY") == Some("true");
    let short_sha: String = GIT_SHA.chars().take(7).collect();
    format!(
        "{PKG_VERSION}+{GIT_BRANCH}.{short_sha}{}",
        if dirty { ".dirty" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_pkg_version() {
        assert!(version_string().starts_with(PKG_VERSION));
    }

    #[test]
    fn version_string_has_build_separator() {
        let version = version_string();
        let (_, meta) = version.split_once('+').expect("missing build metadata");
        assert!(meta.starts_with(GIT_BRANCH));
    }
}

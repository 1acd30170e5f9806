//! Version and build information for Startbook
//!
//! Build metadata is captured by `build.rs`; missing values read "unknown".

/// Full version string: "startbook {version} ({commit} {date}) rustc {rustc_version}"
pub fn version() -> String {
    format!(
        "startbook {} ({} {}) rustc {}",
        package_version(),
        build_commit(),
        build_date(),
        rustc_version()
    )
}

pub fn package_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn build_commit() -> &'static str {
    option_env!("STARTBOOK_COMMIT_SHA").unwrap_or("unknown")
}

pub fn build_date() -> &'static str {
    option_env!("STARTBOOK_BUILD_DATE").unwrap_or("unknown")
}

pub fn rustc_version() -> &'static str {
    option_env!("STARTBOOK_RUSTC_VERSION").unwrap_or("unknown")
}

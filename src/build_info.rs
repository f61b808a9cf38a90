//! Build metadata embedded by build.rs

/// Build counter as set by build.rs, "0" outside a cargo build
pub const BUILD_NUMBER: &str = match option_env!("KCALC_BUILD_NUMBER") {
    Some(s) => s,
    None => "0",
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("KCALC_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Numeric build counter; 0 if build.rs wrote something unparseable
pub fn build_number() -> u64 {
    BUILD_NUMBER.parse().unwrap_or(0)
}

/// Multi-line banner shown on startup
pub fn banner() -> String {
    let rule = "=".repeat(47);
    format!(
        "{rule}\n  kcalc - Calorie Calculator\n  Version: {} | Build: {}\n  Compiled: {}\n{rule}",
        VERSION,
        build_number(),
        BUILD_TIMESTAMP
    )
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("{}", banner());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_number_matches_embedded_value() {
        assert_eq!(build_number().to_string(), BUILD_NUMBER);
    }

    #[test]
    fn test_banner_mentions_version() {
        let banner = banner();
        assert!(banner.contains(&format!("Version: {}", VERSION)));
        assert!(banner.contains(&format!("Compiled: {}", BUILD_TIMESTAMP)));
    }
}

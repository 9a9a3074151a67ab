//! Program name and version, as reported by `geodms --version`.

/// Return the program name. Set `PROGRAM_NAME` at build time to override it.
pub const fn name() -> &'static str {
    match option_env!("PROGRAM_NAME") {
        Some(s) => s,
        None => "geodms",
    }
}

/// Return the crate version, if it was built by cargo.
pub const fn version() -> Option<&'static str> {
    option_env!("CARGO_PKG_VERSION")
}

/// One-line `name version` banner.
pub fn banner() -> String {
    match version() {
        Some(v) => format!("{} {}", name(), v),
        None => format!("{} (unknown version)", name()),
    }
}

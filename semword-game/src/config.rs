//! Build-time selection of the game service location.
//!
//! `SEMWORD_API_BASE`, when set at compile time, always wins. Otherwise
//! release builds talk to the same origin under `/api` and debug builds to
//! the local development server.

pub const PRODUCTION_API_BASE: &str = "/api";
pub const DEVELOPMENT_API_BASE: &str = "http://localhost:5000/api";

#[must_use]
pub fn api_base() -> &'static str {
    api_base_with(option_env!("SEMWORD_API_BASE"), !cfg!(debug_assertions))
}

fn api_base_with(override_base: Option<&'static str>, production: bool) -> &'static str {
    match override_base.map(str::trim) {
        Some(base) if !base.is_empty() => base,
        _ if production => PRODUCTION_API_BASE,
        _ => DEVELOPMENT_API_BASE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_profile() {
        assert_eq!(api_base_with(Some("https://x/api"), true), "https://x/api");
        assert_eq!(api_base_with(Some("  "), true), PRODUCTION_API_BASE);
    }

    #[test]
    fn profile_picks_relative_or_local() {
        assert_eq!(api_base_with(None, true), "/api");
        assert_eq!(api_base_with(None, false), "http://localhost:5000/api");
    }
}

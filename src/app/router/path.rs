use std::fmt;

/// A canonical absolute path, `/`-prefixed, with any query suffix kept
/// verbatim. Construct one through [`normalize`]; the string inside is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    /// The root route, `/`.
    pub fn root() -> Self {
        Route("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Coerce arbitrary input into a canonical route.
///
/// Leading/trailing whitespace is dropped, the empty string maps to `/`,
/// and anything not already `/`-prefixed gets the slash prepended. Total
/// over all inputs and idempotent: normalizing an already-canonical
/// string returns it unchanged, query suffix included.
pub fn normalize(input: &str) -> Route {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Route::root()
    } else if trimmed.starts_with('/') {
        Route(trimmed.to_string())
    } else {
        Route(format!("/{}", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_root() {
        assert_eq!(normalize("").as_str(), "/");
        assert_eq!(normalize("   ").as_str(), "/");
    }

    #[test]
    fn test_prepends_slash() {
        assert_eq!(normalize("about").as_str(), "/about");
        assert_eq!(normalize("brands/fashion").as_str(), "/brands/fashion");
    }

    #[test]
    fn test_absolute_unchanged() {
        assert_eq!(normalize("/media").as_str(), "/media");
        assert_eq!(normalize("/terms?x=1").as_str(), "/terms?x=1");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  contact  ").as_str(), "/contact");
        assert_eq!(normalize("\t/privacy\n").as_str(), "/privacy");
    }

    #[test]
    fn test_idempotent() {
        for input in ["", "about", "/about", "/terms?x=1", "  media ", "/", "a/b?c=d&e=f"] {
            let once = normalize(input);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "normalize not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_route_display() {
        assert_eq!(normalize("about").to_string(), "/about");
    }
}

use super::path::Route;

/// The fixed set of pages the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Brands,
    Media,
    Contact,
    Privacy,
    Terms,
}

impl Page {
    /// Canonical route for this page (what the nav links navigate to).
    pub fn route(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Brands => "/brands",
            Self::Media => "/media",
            Self::Contact => "/contact",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
        }
    }

    /// Title shown in the window bar.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Brands => "Brands",
            Self::Media => "Media",
            Self::Contact => "Contact",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Use",
        }
    }

    /// Pages listed in the header nav, in display order.
    pub fn nav_order() -> &'static [Page] {
        &[
            Self::Home,
            Self::About,
            Self::Brands,
            Self::Media,
            Self::Contact,
        ]
    }
}

/// Prefix table, evaluated top to bottom; first match wins. Matching on
/// prefixes rather than exact routes lets `/brands/fashion` or
/// `/terms?x=1` land on their parent page, since routes carry query
/// suffixes and sub-paths verbatim.
const PREFIXES: &[(&str, Page)] = &[
    ("/about", Page::About),
    ("/brands", Page::Brands),
    ("/media", Page::Media),
    ("/contact", Page::Contact),
    ("/privacy", Page::Privacy),
    ("/terms", Page::Terms),
];

/// Map a route to the page that renders it. Unknown routes fall back to
/// [`Page::Home`]. Pure: the same route always resolves the same way.
pub fn resolve(route: &Route) -> Page {
    PREFIXES
        .iter()
        .find(|(prefix, _)| route.as_str().starts_with(prefix))
        .map(|(_, page)| *page)
        .unwrap_or(Page::Home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::router::path::normalize;

    #[test]
    fn test_exact_routes() {
        for page in [
            Page::About,
            Page::Brands,
            Page::Media,
            Page::Contact,
            Page::Privacy,
            Page::Terms,
        ] {
            assert_eq!(resolve(&normalize(page.route())), page);
        }
    }

    #[test]
    fn test_root_is_home() {
        assert_eq!(resolve(&normalize("/")), Page::Home);
    }

    #[test]
    fn test_prefix_match_covers_subpaths() {
        assert_eq!(resolve(&normalize("/brands/anything")), Page::Brands);
        assert_eq!(resolve(&normalize("/media/episode-12")), Page::Media);
        // Prefix matching is literal: a longer first segment that merely
        // starts with a known prefix still resolves to that page.
        assert_eq!(resolve(&normalize("/aboutish")), Page::About);
    }

    #[test]
    fn test_query_suffix_still_resolves() {
        assert_eq!(resolve(&normalize("/terms?x=1")), Page::Terms);
        assert_eq!(resolve(&normalize("/contact?ref=footer")), Page::Contact);
    }

    #[test]
    fn test_unknown_falls_back_to_home() {
        assert_eq!(resolve(&normalize("/unknown")), Page::Home);
        assert_eq!(resolve(&normalize("/shop")), Page::Home);
    }

    #[test]
    fn test_resolution_is_stable() {
        let route = normalize("/brands?utm=mail");
        assert_eq!(resolve(&route), resolve(&route));
    }

    #[test]
    fn test_nav_order_routes_resolve_to_themselves() {
        for page in Page::nav_order() {
            assert_eq!(resolve(&normalize(page.route())), *page);
        }
    }
}

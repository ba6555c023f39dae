//! Static brand copy and the handful of runtime overrides read once at
//! startup. Everything the pages display lives here so the UI modules
//! stay layout-only.

use std::env;

pub const BRAND_NAME: &str = "Angel Kellogg";
pub const TAGLINE: &str = "Artist. Entrepreneur. Storyteller.";
pub const COPYRIGHT: &str = "\u{00a9} 2026 Angel Kellogg Media. All rights reserved.";

pub const DEFAULT_API_BASE: &str = "https://www.angelkellogg.com";

pub const DEFAULT_HERO_TITLE: &str = "Angel Kellogg";
pub const DEFAULT_HERO_SUBTITLE: &str =
    "Building brands, telling stories, and bringing people along for the ride.";

pub const ABOUT_BODY: &str = "\
Angel Kellogg is an artist and entrepreneur whose work spans music, \
fashion, and media. What started as late-night studio sessions grew \
into a family of ventures with one common thread: everything carries \
a story worth telling.\n\n\
Between launches, Angel hosts a weekly podcast on the craft of \
building things in public - the wins, the missteps, and the people \
met along the way.\n\n\
This app is the front door. Look around, listen in, and reach out.";

pub struct Venture {
    pub name: &'static str,
    pub blurb: &'static str,
    pub url: &'static str,
}

pub const VENTURES: &[Venture] = &[
    Venture {
        name: "AK Studios",
        blurb: "The label and production house where every project starts.",
        url: "https://studios.angelkellogg.com",
    },
    Venture {
        name: "Kellogg & Co.",
        blurb: "A small-batch apparel line cut for the stage and the street.",
        url: "https://shop.angelkellogg.com",
    },
    Venture {
        name: "Night Shift Media",
        blurb: "Video, visuals, and the stories behind the releases.",
        url: "https://nightshift.angelkellogg.com",
    },
];

pub const PODCAST_NAME: &str = "The Angel Kellogg Show";
pub const PODCAST_BLURB: &str = "\
New episodes every week: conversations with artists, founders, and \
the occasional troublemaker about making things that last.";

pub struct MediaLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const LISTEN_LINKS: &[MediaLink] = &[
    MediaLink {
        label: "Spotify",
        url: "https://open.spotify.com/show/angelkellogg",
    },
    MediaLink {
        label: "Apple Podcasts",
        url: "https://podcasts.apple.com/podcast/the-angel-kellogg-show",
    },
    MediaLink {
        label: "YouTube",
        url: "https://www.youtube.com/@angelkellogg",
    },
];

pub const SOCIAL_LINKS: &[MediaLink] = &[
    MediaLink {
        label: "Instagram",
        url: "https://www.instagram.com/angelkellogg",
    },
    MediaLink {
        label: "X",
        url: "https://x.com/angelkellogg",
    },
    MediaLink {
        label: "TikTok",
        url: "https://www.tiktok.com/@angelkellogg",
    },
];

/// Hero copy with optional runtime overrides. Read once when the home
/// page mounts; the environment is not watched afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

impl HeroContent {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; the env is just the production source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            title: non_empty("AK_HERO_TITLE").unwrap_or_else(|| DEFAULT_HERO_TITLE.to_string()),
            subtitle: non_empty("AK_HERO_SUBTITLE")
                .unwrap_or_else(|| DEFAULT_HERO_SUBTITLE.to_string()),
            image_url: non_empty("AK_HERO_IMAGE"),
            video_url: non_empty("AK_HERO_VIDEO"),
        }
    }
}

/// Base URL for the contact API, overridable for staging.
pub fn api_base() -> String {
    env::var("AK_API_BASE")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_defaults_when_nothing_set() {
        let hero = HeroContent::from_lookup(|_| None);
        assert_eq!(hero.title, DEFAULT_HERO_TITLE);
        assert_eq!(hero.subtitle, DEFAULT_HERO_SUBTITLE);
        assert!(hero.image_url.is_none());
        assert!(hero.video_url.is_none());
    }

    #[test]
    fn test_hero_overrides_apply() {
        let hero = HeroContent::from_lookup(|key| match key {
            "AK_HERO_TITLE" => Some("Tour 2026".to_string()),
            "AK_HERO_VIDEO" => Some("https://cdn.example.com/tour.mp4".to_string()),
            _ => None,
        });
        assert_eq!(hero.title, "Tour 2026");
        assert_eq!(hero.subtitle, DEFAULT_HERO_SUBTITLE);
        assert_eq!(
            hero.video_url.as_deref(),
            Some("https://cdn.example.com/tour.mp4")
        );
    }

    #[test]
    fn test_hero_blank_override_ignored() {
        let hero = HeroContent::from_lookup(|key| match key {
            "AK_HERO_TITLE" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(hero.title, DEFAULT_HERO_TITLE);
    }

    #[test]
    fn test_ventures_and_links_nonempty() {
        assert!(!VENTURES.is_empty());
        assert!(!LISTEN_LINKS.is_empty());
        assert!(!SOCIAL_LINKS.is_empty());
        for v in VENTURES {
            assert!(v.url.starts_with("https://"));
        }
    }
}

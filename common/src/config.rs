use std::{collections::BTreeMap, num::NonZeroU32};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{image::ImageItem, navigator::GalleryNavigator, options::GalleryOptions};

// site configuration
//
// everything the pages render that is data rather than layout: the metadata, the link lists in
// the chrome, the newsletter endpoint, the sponsors and the image galleries.  it is shipped as a
// toml document next to the webapp and parsed once at startup
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,

    // chrome
    pub navigation: Vec<NavLink>,
    pub footer: Vec<NavLink>,
    pub social: Vec<NavLink>,
    pub membership: NavLink,

    // widgets
    pub newsletter: NewsletterConfig,
    pub sponsors: SponsorConfig,

    // keyed by page, e.g. "moods"
    #[serde(default)]
    pub galleries: BTreeMap<String, GalleryConfig>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
    #[default]
    #[serde(rename = "_self")]
    SameTab,
    #[serde(rename = "_blank")]
    NewTab,
}

impl LinkTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkTarget::SameTab => "_self",
            LinkTarget::NewTab => "_blank",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub target: LinkTarget,
    #[serde(default)]
    pub rel: Option<String>,
}

impl NavLink {
    // anything not rooted at "/" leaves the site
    pub fn is_external(&self) -> bool {
        !self.href.starts_with('/')
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NewsletterConfig {
    pub action: String,
    #[serde(default = "default_newsletter_placeholder")]
    pub placeholder: String,
}

fn default_newsletter_placeholder() -> String {
    String::from("Subscribe to the newsletter")
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SponsorLogo {
    Ello,
    Gestalten,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Sponsor {
    pub logo: SponsorLogo,
    pub tagline: String,
    pub href: String,
}

// a zero interval_ms is rejected at parse time
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SponsorConfig {
    #[serde(default = "default_sponsor_interval")]
    pub interval_ms: NonZeroU32,
    #[serde(default = "default_sponsors_visible")]
    pub visible: usize,
    pub entries: Vec<Sponsor>,
}

const DEFAULT_SPONSOR_INTERVAL: NonZeroU32 = match NonZeroU32::new(5000) {
    Some(ms) => ms,
    None => panic!("sponsor interval must be positive"),
};

fn default_sponsor_interval() -> NonZeroU32 {
    DEFAULT_SPONSOR_INTERVAL
}

fn default_sponsors_visible() -> usize {
    4
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub options: GalleryOptions,
    #[serde(default)]
    pub images: Vec<ImageItem>,
}

impl GalleryConfig {
    pub fn navigator(&self) -> GalleryNavigator {
        GalleryNavigator::new(self.images.clone(), self.options.clone())
    }
}

impl SiteConfig {
    pub fn gallery(&self, name: &str) -> anyhow::Result<&GalleryConfig> {
        self.galleries
            .get(name)
            .ok_or_else(|| anyhow::Error::msg(format!("no gallery named {name} in site config")))
    }
}

// in order to extract the site table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlSiteFile {
    site: SiteConfig,
}

#[instrument(level = Level::DEBUG, skip(doc))]
pub fn parse_site_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("parsing site config");

    let data: TomlSiteFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!(
        galleries = data.site.galleries.len(),
        sponsors = data.site.sponsors.entries.len(),
        "successfully parsed site config"
    );
    Ok(data.site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Dismiss, ZoomTrigger};

    const SHIPPED: &str = include_str!("../../webapp/assets/site.toml");

    const MINIMAL: &str = r#"
        [site]
        name = "Dogan"
        description = "minimal"
        navigation = [{ label = "Moods", href = "/moods" }]
        footer = []
        social = [{ label = "Twitter", href = "https://twitter.com/x/", target = "_blank", rel = "noreferrer" }]
        membership = { label = "Become a Member", href = "/membership" }

        [site.newsletter]
        action = "https://example.com/subscribe"

        [site.sponsors]
        entries = [{ logo = "ello", tagline = "t", href = "https://example.com" }]

        [site.galleries.moods]
        images = [{ src = "/a.jpg", width = 10, height = 20 }]

        [site.galleries.moods.options]
        zoom = "disabled"
    "#;

    #[test]
    fn shipped_site_config_parses() {
        let site = parse_site_config(SHIPPED).unwrap();

        assert_eq!(site.name, "Dogan");
        assert_eq!(site.gallery("moods").unwrap().images.len(), 8);
        assert_eq!(site.gallery("architecture").unwrap().images.len(), 10);
        assert!(!site.sponsors.entries.is_empty());
        assert!(site.navigation.iter().any(|link| link.target == LinkTarget::NewTab));
    }

    #[test]
    fn minimal_config_fills_defaults() {
        let site = parse_site_config(MINIMAL).unwrap();

        assert_eq!(site.newsletter.placeholder, "Subscribe to the newsletter");
        assert_eq!(site.sponsors.interval_ms.get(), 5000);
        assert_eq!(site.sponsors.visible, 4);
        assert_eq!(site.navigation[0].target, LinkTarget::SameTab);
        assert!(!site.navigation[0].is_external());
        assert!(site.social[0].is_external());
        assert_eq!(site.social[0].rel.as_deref(), Some("noreferrer"));

        let moods = site.gallery("moods").unwrap();
        assert_eq!(moods.options.zoom, ZoomTrigger::Disabled);
        assert_eq!(moods.options.dismiss, Dismiss::Overlay);
    }

    #[test]
    fn gallery_builds_a_closed_navigator() {
        let site = parse_site_config(MINIMAL).unwrap();
        let nav = site.gallery("moods").unwrap().navigator();

        assert_eq!(nav.len(), 1);
        assert!(!nav.is_open());
    }

    #[test]
    fn missing_gallery_is_an_error() {
        let site = parse_site_config(MINIMAL).unwrap();

        assert!(site.gallery("furniture").is_err());
    }

    #[test]
    fn zero_sponsor_interval_is_rejected() {
        let doc = MINIMAL.replace(
            "[site.sponsors]\n",
            "[site.sponsors]\n        interval_ms = 0\n",
        );

        assert!(doc.contains("interval_ms = 0"));
        assert!(parse_site_config(&doc).is_err());
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = parse_site_config("[site]\nname = 3").unwrap_err();

        assert!(err.to_string().contains("failed to parse site config"));
    }
}

//! Static site content
//!
//! Everything the pages display that is not markup lives here: the owner's
//! name, the navigation links, the project records and the social links.
//! The content is parsed once at startup and handed to the component tree
//! as a context value.

use crate::Route;
use crate::highlight::LOGO_LABEL;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Content compiled into the binary
const BUILTIN_CONTENT: &str = include_str!("../assets/site.json");

/// Link value used by project records that have nowhere to go yet
const PLACEHOLDER_LINK: &str = "#";

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("navigation label `{0}` is used more than once")]
    DuplicateLabel(String),
    #[error("navigation label `{0}` is reserved for the home link")]
    ReservedLabel(String),
    #[error("navigation target `{target}` of `{label}` is not a page")]
    UnroutableTarget { label: String, target: String },
    #[error("site content has no projects")]
    NoProjects,
}

/// A navigation entry rendered in the navbar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display text, also the highlight key
    pub label: String,
    /// Path the link navigates to
    pub target: String,
}

/// One portfolio project shown as a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProjectRecord {
    /// Returns the outbound URL, or `None` when the link is a placeholder
    pub fn external_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty() && *link != PLACEHOLDER_LINK)
    }
}

/// A profile link shown on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialLink {
    /// Mail links open in place, everything else in a new browsing context
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub nav: Vec<NavLink>,
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl SiteContent {
    /// Loads the content bundled with the binary
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Parses and validates a content document
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        log::info!(
            "Loaded site content for {}: {} nav links, {} projects, {} social links",
            content.owner,
            content.nav.len(),
            content.projects.len(),
            content.socials.len()
        );
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for link in &self.nav {
            if link.label == LOGO_LABEL {
                return Err(ContentError::ReservedLabel(link.label.clone()));
            }
            if !seen.insert(link.label.as_str()) {
                return Err(ContentError::DuplicateLabel(link.label.clone()));
            }
            let routable = link.target.starts_with('/')
                && matches!(
                    link.target.parse::<Route>(),
                    Ok(route) if !matches!(route, Route::PageNotFound { .. })
                );
            if !routable {
                return Err(ContentError::UnroutableTarget {
                    label: link.label.clone(),
                    target: link.target.clone(),
                });
            }
        }
        if self.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        Ok(())
    }
}

//! Configuration types for Shotlist.
//!
//! This module provides configuration structures that control which parts of
//! a document are laid out, how tags are classified, and how shots are
//! rendered to text. All types implement [`serde::Deserialize`] so they can
//! be loaded from a TOML file; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`DocumentConfig`] - Which elements supply the layout root and the title.
//! - [`RenderConfig`] - Link decoration for rendered shot text.
//! - [`TagClassifier`] - Tag-to-role table driving the layout engine.
//! - [`CardConfig`] - How scenes are grouped into cards.
//!
//! # Example
//!
//! ```
//! # use shotlist::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [render]
//!     href = true
//!
//!     [classifier]
//!     h2 = ["scene", "shot"]
//!     li = ["shot"]
//! "#).expect("valid config");
//!
//! assert_eq!(config.document().root(), "body");
//! assert!(config.render().options().href);
//! assert!(config.classifier().roles("h1").is_empty());
//! ```

use serde::Deserialize;

use shotlist_core::{classify::TagClassifier, render::RenderOptions};

use crate::export::cards::CardConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Document section.
    #[serde(default)]
    document: DocumentConfig,

    /// Render section.
    #[serde(default)]
    render: RenderConfig,

    /// Classifier section; replaces the default HTML grammar when present.
    #[serde(default)]
    classifier: TagClassifier,

    /// Cards section.
    #[serde(default)]
    cards: CardConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        document: DocumentConfig,
        render: RenderConfig,
        classifier: TagClassifier,
        cards: CardConfig,
    ) -> Self {
        Self {
            document,
            render,
            classifier,
            cards,
        }
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns a mutable reference to the render configuration.
    pub fn render_mut(&mut self) -> &mut RenderConfig {
        &mut self.render
    }

    /// Returns the tag classifier.
    pub fn classifier(&self) -> &TagClassifier {
        &self.classifier
    }

    /// Returns the card configuration.
    pub fn cards(&self) -> &CardConfig {
        &self.cards
    }
}

/// Selects the parts of a parsed document that layout uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Tag of the element laid out; the whole tree is used if it is absent.
    root: String,

    /// Tag of the element whose text becomes the document title.
    title: String,
}

impl DocumentConfig {
    /// Creates a new [`DocumentConfig`].
    ///
    /// # Arguments
    ///
    /// * `root` - Tag of the element to lay out.
    /// * `title` - Tag of the element holding the title.
    pub fn new(root: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            title: title.into(),
        }
    }

    /// Tag of the layout root.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Tag of the title element.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self::new("body", "title")
    }
}

/// Link decoration used when shots are rendered to text.
///
/// Unlike [`RenderOptions::default`], link decoration is on by default here,
/// matching the outline the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    link_decorator: bool,
    href: bool,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    pub fn new(link_decorator: bool, href: bool) -> Self {
        Self {
            link_decorator,
            href,
        }
    }

    /// Enable or disable `[text]` link decoration.
    pub fn set_link_decorator(&mut self, link_decorator: bool) {
        self.link_decorator = link_decorator;
    }

    /// Enable or disable `(href)` after links.
    pub fn set_href(&mut self, href: bool) {
        self.href = href;
    }

    /// The equivalent [`RenderOptions`].
    pub fn options(&self) -> RenderOptions {
        RenderOptions::new(self.link_decorator, self.href)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(true, false)
    }
}

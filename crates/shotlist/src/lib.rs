//! Shotlist - restructure marked-up documents into scenes and shots.
//!
//! Parsing, layout, and export for turning an HTML-like document into a
//! shot list: an ordered list of scenes, each an ordered list of shots, each
//! an ordered list of text and link fragments.

pub mod config;
pub mod export;
pub mod layout;

mod error;

pub use shotlist_core::{classify, markup, model, render, span};

pub use error::{FormatError, ShotListError};

use log::{debug, info};

use config::AppConfig;
use export::{
    Exporter,
    cards::{self, Card, CardsExporter},
    outline::OutlineExporter,
};
use markup::Node;
use model::Document;

/// Builder for parsing, laying out, and exporting shot lists.
///
/// This provides an API for processing documents through the parsing,
/// layout, and export stages.
///
/// # Examples
///
/// ```
/// use shotlist::{ShotListBuilder, config::AppConfig};
///
/// let source = r#"
///     <html>
///       <head><title>Demo</title></head>
///       <body><h1>Welcome</h1><p>Hello <a href="/home">home</a></p></body>
///     </html>
/// "#;
///
/// let builder = ShotListBuilder::new(AppConfig::default());
///
/// // Parse source to a node tree
/// let tree = builder.parse(source).expect("Failed to parse");
///
/// // Lay the tree out into scenes and shots
/// let document = builder.layout(&tree, source).expect("Failed to lay out");
///
/// assert_eq!(
///     builder.render_outline(&document),
///     "Demo\n  h1\n    h1: Welcome\n    p: Hello [home]\n"
/// );
/// ```
#[derive(Default)]
pub struct ShotListBuilder {
    config: AppConfig,
}

impl ShotListBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including classifier and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configuration this builder uses.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse markup source into a node tree.
    ///
    /// # Errors
    ///
    /// Returns `ShotListError::Parse` if the source cannot be tokenized.
    pub fn parse(&self, source: &str) -> Result<Node, ShotListError> {
        info!("Parsing document");

        let tree = shotlist_parser::parse(source)
            .map_err(|err| ShotListError::new_parse_error(err, source))?;

        let span = tree.span();
        debug!(span:?; "Document parsed successfully");

        Ok(tree)
    }

    /// Lay out a parsed tree into a titled [`Document`].
    ///
    /// The configured root element is laid out (or the whole tree if it is
    /// missing), and the configured title element supplies the title.
    /// `source` is the text the tree was parsed from; it is attached to
    /// errors for reporting.
    ///
    /// # Errors
    ///
    /// Returns `ShotListError::Format` if a link has no `href`.
    pub fn layout(&self, tree: &Node, source: &str) -> Result<Document, ShotListError> {
        let document_config = self.config.document();

        let root = layout::find_root(tree, document_config.root());
        let title = layout::find_title(tree, document_config.title());
        info!(title:?; "Laying out document");

        let document = layout::layout(root, self.config.classifier())
            .map_err(|err| ShotListError::new_format_error(err, source))?;

        Ok(document.with_title(title))
    }

    /// Parse and lay out `source` in one step.
    ///
    /// # Errors
    ///
    /// Returns any error from [`ShotListBuilder::parse`] or
    /// [`ShotListBuilder::layout`].
    pub fn build(&self, source: &str) -> Result<Document, ShotListError> {
        let tree = self.parse(source)?;
        self.layout(&tree, source)
    }

    /// Render the indented outline of `document`.
    pub fn render_outline(&self, document: &Document) -> String {
        export::outline::outline(document, self.config.render().options())
    }

    /// Group `document` into cards.
    pub fn plan_cards(&self, document: &Document) -> Vec<Card> {
        cards::plan(document, self.config.cards(), self.config.render().options())
    }

    /// Write `document` to `writer` in the given format.
    ///
    /// # Errors
    ///
    /// Returns `ShotListError::Io` if writing fails.
    pub fn export<W: std::io::Write>(
        &self,
        document: &Document,
        format: OutputFormat,
        writer: W,
    ) -> Result<(), ShotListError> {
        let options = self.config.render().options();
        debug!(format:?; "Exporting document");

        match format {
            OutputFormat::Outline => {
                OutlineExporter::new(writer, options).export_document(document)?
            }
            OutputFormat::Cards => CardsExporter::new(writer, self.config.cards(), options)
                .export_document(document)?,
        }

        Ok(())
    }
}

/// Text formats a [`Document`] can be exported as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented scene/shot outline.
    #[default]
    Outline,
    /// Card plan.
    Cards,
}

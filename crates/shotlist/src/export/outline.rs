//! Indented text outline of a document.
//!
//! ```text
//! Storyboard
//!   h1
//!     h1: Act One
//!     p: Fade in on [the city].
//!   -
//!     -: Closing text
//! ```
//!
//! The title line is omitted for untitled documents. Anonymous scenes and
//! shots are labeled `-`.

use std::io::{self, Write};

use shotlist_core::{model::Document, render::RenderOptions};

use super::Exporter;

const ANONYMOUS: &str = "-";

/// Writes the outline of a document to `W`.
pub struct OutlineExporter<W: Write> {
    writer: W,
    options: RenderOptions,
}

impl<W: Write> OutlineExporter<W> {
    /// Create an exporter rendering shot text with `options`.
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self { writer, options }
    }

    /// Consume the exporter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Exporter for OutlineExporter<W> {
    fn export_document(&mut self, document: &Document) -> io::Result<()> {
        if let Some(title) = document.title() {
            writeln!(self.writer, "{title}")?;
        }

        for scene in document.scenes() {
            writeln!(self.writer, "  {}", scene.label().unwrap_or(ANONYMOUS))?;

            for shot in scene.shots() {
                writeln!(
                    self.writer,
                    "    {}: {}",
                    shot.label().unwrap_or(ANONYMOUS),
                    shot.plain_text(self.options)
                )?;
            }
        }

        self.writer.flush()
    }
}

/// Render the outline of `document` to a string.
///
/// # Examples
///
/// ```
/// # use shotlist::export::outline::outline;
/// # use shotlist::model::{Document, Fragment, Scene, Shot};
/// # use shotlist::render::RenderOptions;
/// let document = Document::new()
///     .with_title(Some("Demo".to_string()))
///     .with_scene(Scene::new(Some("h1".to_string())).with_shot(
///         Shot::new(Some("p".to_string())).with_fragment(Fragment::plain("Hello")),
///     ));
///
/// assert_eq!(
///     outline(&document, RenderOptions::default()),
///     "Demo\n  h1\n    p: Hello\n"
/// );
/// ```
pub fn outline(document: &Document, options: RenderOptions) -> String {
    let mut exporter = OutlineExporter::new(Vec::new(), options);

    // Writing into a Vec cannot fail.
    if exporter.export_document(document).is_err() {
        return String::new();
    }

    String::from_utf8_lossy(&exporter.into_inner()).into_owned()
}

//! Card plans: a document grouped into title cards.
//!
//! A card is one screenful of text: an optional heading over a body. Each
//! scene is turned into cards according to its label:
//!
//! - **Merged** scenes (default `h1`) become a single card. Heading shots
//!   form the card heading; every other shot joins the body, separated by a
//!   blank line.
//! - **Paired** scenes (default `dl`) become one card per body shot, headed by
//!   the heading shots seen since the previous card. Headings with no body
//!   after them are dropped.
//!
//! Scenes with any other label, including anonymous scenes, produce no cards.
//! Each merged or paired scene label maps to its own heading shot labels: by
//! default `h1` scenes are headed by `h1` shots and `dl` scenes by `dt`
//! shots.
//!
//! ```toml
//! [cards.merged]
//! h1 = ["h1"]
//!
//! [cards.paired]
//! dl = ["dt"]
//! ```

use std::{
    collections::BTreeMap,
    io::{self, Write},
};

use log::debug;
use serde::Deserialize;

use shotlist_core::{
    model::{Document, Scene},
    render::RenderOptions,
};

use super::Exporter;

/// Which scenes produce cards, and which of their shots are headings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Scene labels that become a single card, with their heading shot labels.
    merged: BTreeMap<String, Vec<String>>,

    /// Scene labels that become one card per body shot, with their heading
    /// shot labels.
    paired: BTreeMap<String, Vec<String>>,
}

impl CardConfig {
    /// Creates a [`CardConfig`] with no merged or paired scenes.
    pub fn empty() -> Self {
        Self {
            merged: BTreeMap::new(),
            paired: BTreeMap::new(),
        }
    }

    /// Merge scenes labeled `scene` into one card, headed by shots labeled
    /// with any of `headings`.
    pub fn with_merged<I, S>(mut self, scene: impl Into<String>, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headings = headings.into_iter().map(Into::into).collect();
        self.merged.insert(scene.into(), headings);
        self
    }

    /// Split scenes labeled `scene` into one card per body shot, headed by
    /// shots labeled with any of `headings`.
    pub fn with_paired<I, S>(mut self, scene: impl Into<String>, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headings = headings.into_iter().map(Into::into).collect();
        self.paired.insert(scene.into(), headings);
        self
    }

    fn grouping(&self, label: Option<&str>) -> Option<(Grouping, Headings<'_>)> {
        let label = label?;
        if let Some(headings) = self.merged.get(label) {
            Some((Grouping::Merged, Headings(headings)))
        } else {
            self.paired
                .get(label)
                .map(|headings| (Grouping::Paired, Headings(headings)))
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self::empty()
            .with_merged("h1", ["h1"])
            .with_paired("dl", ["dt"])
    }
}

#[derive(Debug, Clone, Copy)]
enum Grouping {
    Merged,
    Paired,
}

/// Heading shot labels of one scene grouping.
#[derive(Debug, Clone, Copy)]
struct Headings<'a>(&'a [String]);

impl Headings<'_> {
    fn contains(self, label: Option<&str>) -> bool {
        label.is_some_and(|label| self.0.iter().any(|heading| heading == label))
    }
}

/// A single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    heading: Option<String>,
    body: String,
}

impl Card {
    /// Create a card.
    pub fn new(heading: Option<String>, body: impl Into<String>) -> Self {
        Self {
            heading,
            body: body.into(),
        }
    }

    /// Heading text, if any.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Body text.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Group the scenes of `document` into cards.
pub fn plan(document: &Document, config: &CardConfig, options: RenderOptions) -> Vec<Card> {
    let mut cards = Vec::new();

    for scene in document.scenes() {
        match config.grouping(scene.label()) {
            Some((Grouping::Merged, headings)) => {
                cards.push(merged_card(scene, headings, options));
            }
            Some((Grouping::Paired, headings)) => {
                cards.extend(paired_cards(scene, headings, options));
            }
            None => debug!(scene = scene.label().unwrap_or("-"); "Scene produces no cards"),
        }
    }

    cards
}

fn merged_card(scene: &Scene, heading_labels: Headings<'_>, options: RenderOptions) -> Card {
    let mut headings = Vec::new();
    let mut body = Vec::new();

    for shot in scene.shots() {
        if heading_labels.contains(shot.label()) {
            headings.push(shot.plain_text(options));
        } else {
            body.push(shot.plain_text(options));
        }
    }

    Card::new(join_headings(headings), body.join("\n\n"))
}

fn paired_cards(
    scene: &Scene,
    heading_labels: Headings<'_>,
    options: RenderOptions,
) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut headings = Vec::new();

    for shot in scene.shots() {
        if heading_labels.contains(shot.label()) {
            headings.push(shot.plain_text(options));
        } else {
            let heading = join_headings(std::mem::take(&mut headings));
            cards.push(Card::new(heading, shot.plain_text(options)));
        }
    }

    cards
}

fn join_headings(headings: Vec<String>) -> Option<String> {
    if headings.is_empty() {
        None
    } else {
        Some(headings.join("\n"))
    }
}

/// Writes the card plan of a document to `W`.
///
/// Each card is a `[n]` header line, followed by the heading underlined with
/// `=` when present, then the body. Cards are separated by a blank line.
pub struct CardsExporter<'a, W: Write> {
    writer: W,
    config: &'a CardConfig,
    options: RenderOptions,
}

impl<'a, W: Write> CardsExporter<'a, W> {
    /// Create an exporter grouping scenes per `config`.
    pub fn new(writer: W, config: &'a CardConfig, options: RenderOptions) -> Self {
        Self {
            writer,
            config,
            options,
        }
    }

    /// Consume the exporter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Exporter for CardsExporter<'_, W> {
    fn export_document(&mut self, document: &Document) -> io::Result<()> {
        let cards = plan(document, self.config, self.options);

        for (index, card) in cards.iter().enumerate() {
            if index > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "[{}]", index + 1)?;
            if let Some(heading) = card.heading() {
                writeln!(self.writer, "{heading}")?;
                let width = heading.lines().map(|line| line.chars().count()).max();
                writeln!(self.writer, "{}", "=".repeat(width.unwrap_or(0)))?;
            }
            writeln!(self.writer, "{}", card.body())?;
        }

        self.writer.flush()
    }
}

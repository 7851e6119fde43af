//! Export functionality for laid-out documents.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing a [`Document`] out in a text format. It is the final stage in the
//! Shotlist processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Markup Source
//!     ↓ parse
//! Node Tree
//!     ↓ layout
//! Document (scenes → shots → fragments)
//!     ↓ export (this module)
//! Output Text
//! ```
//!
//! # Available Backends
//!
//! - [`outline`] - Indented scene/shot outline via [`outline::OutlineExporter`]
//! - [`cards`] - Card plan, one heading and body per card, via
//!   [`cards::CardsExporter`]

pub mod cards;
pub mod outline;

use std::io;

use shotlist_core::model::Document;

/// Abstraction for document export backends.
pub trait Exporter {
    /// Write `document` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] if writing to the underlying sink fails.
    fn export_document(&mut self, document: &Document) -> io::Result<()>;
}

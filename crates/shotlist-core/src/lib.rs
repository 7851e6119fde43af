//! Shotlist Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Shotlist
//! parser, layout engine, and CLI. It includes:
//!
//! - **Spans**: Byte ranges into markup source ([`span::Span`])
//! - **Markup**: The element/text node tree consumed by layout ([`markup`] module)
//! - **Classification**: Tag name to role mapping ([`classify::TagClassifier`])
//! - **Model**: The scene/shot/fragment document model ([`model`] module)
//! - **Render**: Plain-text linearization of shots ([`render`] module)

pub mod classify;
pub mod markup;
pub mod model;
pub mod render;
pub mod span;

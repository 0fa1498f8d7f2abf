//! Bitplan Core Types and Definitions
//!
//! This crate provides the foundational types shared by the bitplan parser,
//! layout engine and draw.io exporter. It includes:
//!
//! - **Semantic**: The parsed packet model ([`semantic::BitRange`])
//! - **Geometry**: Grid constants and pixel rectangles ([`geometry`] module)
//! - **Identifiers**: Cell identifiers of the generated document ([`identifier::CellId`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod geometry;
pub mod identifier;
pub mod semantic;

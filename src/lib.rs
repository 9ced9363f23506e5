// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cutlist Project

//! Cutlist Measurement Engine
//!
//! Lazily evaluated dimension expressions for woodworking parts, with
//! mixed-fraction inch output. A part's dimension may be a plain number or
//! an expression over other parts' dimensions; nothing is computed until a
//! value is requested, so parts only need to be declared after the nodes
//! they reference.

pub mod expr;
pub mod fraction;
pub mod part;
pub mod report;

pub use expr::{Measurement, Node, NodeKind};
pub use fraction::{FormatError, MixedFraction};
pub use part::Part;
pub use report::{CutList, OverallDimensions, PartRow};

/// Render a plain-text cut list for a set of parts.
pub fn render_cut_list(parts: &[Part]) -> Result<String, FormatError> {
    Ok(CutList::from_parts(parts)?.to_text())
}

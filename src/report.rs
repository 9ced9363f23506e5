// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cutlist Project

//! Cut-list assembly and rendering
//!
//! Resolves a set of parts into formatted report rows. Rows carry their
//! dimensions as already-formatted strings so the same structure serves
//! both the plain-text report and JSON export.

use crate::expr::Measurement;
use crate::fraction::{self, FormatError};
use crate::part::Part;
use serde::Serialize;
use std::fmt;

/// One formatted line of the cut list
#[derive(Debug, Clone, Serialize)]
pub struct PartRow {
    pub name: String,
    pub quantity: u32,
    pub thickness: String,
    pub width: String,
    pub length: String,
}

impl PartRow {
    pub fn from_part(part: &Part) -> Result<Self, FormatError> {
        Ok(Self {
            name: part.name.clone(),
            quantity: part.quantity,
            thickness: fraction::format(part.thickness.resolve())?,
            width: fraction::format(part.width.resolve())?,
            length: fraction::format(part.length.resolve())?,
        })
    }
}

impl fmt::Display for PartRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({}) {}\" X {}\" X {}\"",
            self.name, self.quantity, self.thickness, self.width, self.length
        )
    }
}

/// Finished outer dimensions of the assembly
#[derive(Debug, Clone, Serialize)]
pub struct OverallDimensions {
    pub height: String,
    pub width: String,
    pub depth: String,
}

impl OverallDimensions {
    pub fn new(
        height: impl Into<Measurement>,
        width: impl Into<Measurement>,
        depth: impl Into<Measurement>,
    ) -> Result<Self, FormatError> {
        Ok(Self {
            height: fraction::format(height.into().resolve())?,
            width: fraction::format(width.into().resolve())?,
            depth: fraction::format(depth.into().resolve())?,
        })
    }
}

impl fmt::Display for OverallDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\"H X {}\"W X {}\"D",
            self.height, self.width, self.depth
        )
    }
}

/// Ordered report rows plus optional overall dimensions
#[derive(Debug, Clone, Default, Serialize)]
pub struct CutList {
    pub parts: Vec<PartRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallDimensions>,
}

impl CutList {
    /// Resolve every part into a report row, preserving order.
    pub fn from_parts(parts: &[Part]) -> Result<Self, FormatError> {
        let rows = parts
            .iter()
            .map(PartRow::from_part)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            parts: rows,
            overall: None,
        })
    }

    pub fn with_overall(mut self, overall: OverallDimensions) -> Self {
        self.overall = Some(overall);
        self
    }

    /// Plain-text report: one line per part, then the overall dimensions.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.parts {
            out.push_str(&row.to_string());
            out.push('\n');
        }
        if let Some(overall) = &self.overall {
            out.push_str(&overall.to_string());
            out.push('\n');
        }
        out
    }
}

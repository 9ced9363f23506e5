// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cutlist Project

//! Named parts with lazily computed dimensions

use crate::expr::{Measurement, Node};
use crate::fraction::{self, FormatError};

/// A named component of an assembly: a quantity plus thickness, width and
/// length measurements.
///
/// Thickness is always wrapped in a literal node at construction time, so
/// it can feed later parts' expressions even when given as a raw number.
/// Width and length are stored as given.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub quantity: u32,
    pub thickness: Measurement,
    pub width: Measurement,
    pub length: Measurement,
}

impl Part {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        thickness: impl Into<Measurement>,
        width: impl Into<Measurement>,
        length: impl Into<Measurement>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            thickness: Measurement::from(Node::literal(thickness)),
            width: width.into(),
            length: length.into(),
        }
    }

    /// Render as `name: (quantity) thickness" X width" X length"`.
    pub fn display(&self) -> Result<String, FormatError> {
        Ok(format!(
            "{}: ({}) {}\" X {}\" X {}\"",
            self.name,
            self.quantity,
            fraction::format(self.thickness.resolve())?,
            fraction::format(self.width.resolve())?,
            fraction::format(self.length.resolve())?,
        ))
    }
}

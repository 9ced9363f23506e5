// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Cutlist Project

//! Measurement expression model
//!
//! Dimensions are built as a graph of lazily evaluated nodes. Nothing is
//! computed at construction time, so an early part's expression can refer
//! to any dimension node that already exists, and a node can feed any
//! number of later expressions. Nodes are immutable once built, which
//! keeps evaluation pure and makes reference cycles unconstructible.

use crate::fraction::{self, FormatError};
use std::rc::Rc;

/// A value usable as an operand in a dimension expression: either a raw
/// number of inches or a reference to an expression node.
#[derive(Debug, Clone)]
pub enum Measurement {
    Value(f64),
    Ref(Node),
}

impl Measurement {
    /// Obtain the numeric value, recursing through nodes as needed.
    pub fn resolve(&self) -> f64 {
        match self {
            Measurement::Value(value) => *value,
            Measurement::Ref(node) => node.value(),
        }
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Measurement::Value(value)
    }
}

impl From<i32> for Measurement {
    fn from(value: i32) -> Self {
        Measurement::Value(f64::from(value))
    }
}

impl From<Node> for Measurement {
    fn from(node: Node) -> Self {
        Measurement::Ref(node)
    }
}

impl From<&Node> for Measurement {
    fn from(node: &Node) -> Self {
        Measurement::Ref(node.clone())
    }
}

impl From<&Measurement> for Measurement {
    fn from(measurement: &Measurement) -> Self {
        measurement.clone()
    }
}

/// Shared handle to an expression node. Cloning the handle shares the
/// underlying node, so one dimension can appear in many expressions.
#[derive(Debug, Clone)]
pub struct Node(Rc<NodeKind>);

/// Expression node variants
#[derive(Debug)]
pub enum NodeKind {
    /// Wraps one measurement; unwraps a single level of indirection
    Literal(Measurement),
    /// Ordered operands; the empty sum evaluates to 0
    Sum(Vec<Measurement>),
    /// Exactly two operands
    Difference {
        minuend: Measurement,
        subtrahend: Measurement,
    },
}

impl Node {
    /// Wrap a measurement in a literal node.
    pub fn literal(measurement: impl Into<Measurement>) -> Node {
        Node(Rc::new(NodeKind::Literal(measurement.into())))
    }

    /// Sum of zero or more operands.
    pub fn sum<M: Into<Measurement>>(operands: Vec<M>) -> Node {
        Node(Rc::new(NodeKind::Sum(
            operands.into_iter().map(Into::into).collect(),
        )))
    }

    /// Difference of exactly two operands.
    pub fn difference(
        minuend: impl Into<Measurement>,
        subtrahend: impl Into<Measurement>,
    ) -> Node {
        Node(Rc::new(NodeKind::Difference {
            minuend: minuend.into(),
            subtrahend: subtrahend.into(),
        }))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.0
    }

    /// Evaluate the node by recursively resolving its operands.
    pub fn value(&self) -> f64 {
        match &*self.0 {
            NodeKind::Literal(measurement) => measurement.resolve(),
            NodeKind::Sum(operands) => operands.iter().map(Measurement::resolve).sum(),
            NodeKind::Difference {
                minuend,
                subtrahend,
            } => minuend.resolve() - subtrahend.resolve(),
        }
    }

    /// Render the resolved value as a mixed fraction of inches.
    pub fn display(&self) -> Result<String, FormatError> {
        fraction::format(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_resolves_raw_number() {
        assert_eq!(Node::literal(12.0).value(), 12.0);
        assert_eq!(Node::literal(13).value(), 13.0);
    }

    #[test]
    fn test_literal_unwraps_node_reference() {
        let half = Node::literal(15.0 / 32.0);
        let wrapped = Node::literal(&half);
        assert_eq!(wrapped.value(), half.value());
    }

    #[test]
    fn test_empty_sum_is_zero() {
        assert_eq!(Node::sum(Vec::<Measurement>::new()).value(), 0.0);
    }

    #[test]
    fn test_sum_folds_operands() {
        let inside = Node::literal(12.0);
        let half = Node::literal(15.0 / 32.0);
        let width = Node::sum(vec![&inside, &half, &half]);
        assert_eq!(width.value(), 12.9375);
    }

    #[test]
    fn test_sum_of_raw_numbers() {
        assert_eq!(Node::sum(vec![1.5, 2.25, 0.25]).value(), 4.0);
    }

    #[test]
    fn test_difference_of_mixed_operands() {
        let tq = Node::literal(23.0 / 32.0);
        let length = Node::difference(13.0, Node::sum(vec![&tq, &tq]));
        assert_eq!(length.value(), 11.5625);
    }

    #[test]
    fn test_shared_node_feeds_many_expressions() {
        let base = Node::literal(2.5);
        let doubled = Node::sum(vec![&base, &base]);
        let trimmed = Node::difference(&base, 0.5);
        assert_eq!(doubled.value(), 5.0);
        assert_eq!(trimmed.value(), 2.0);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let node = Node::difference(13.0, Node::literal(23.0 / 32.0));
        let first = node.value();
        assert_eq!(node.value(), first);
        assert_eq!(node.value(), first);
    }

    #[test]
    fn test_display_formats_resolved_value() {
        assert_eq!(Node::literal(23.0 / 32.0).display().unwrap(), "23/32");
        let width = Node::sum(vec![12.0, 15.0 / 32.0, 15.0 / 32.0]);
        assert_eq!(width.display().unwrap(), "12 15/16");
    }
}

//! Constraint descriptors
//!
//! A [`ConstraintSpec`] reads as
//! `first <relation> second + constant` (or `first <relation> constant` when
//! there is no second anchor). Activating a spec in the engine yields a
//! [`PinConstraint`], which carries the id used to deactivate it later.

use std::fmt;

use crate::options::{Priority, Relation};

use super::anchor::Anchor;
use super::view::ViewId;

/// Identifier of an activated constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId(pub(crate) usize);

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "constraint#{}", self.0)
    }
}

/// A linear constraint between two anchors, or between an anchor and a constant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintSpec {
    pub first: Anchor,
    pub second: Option<Anchor>,
    pub relation: Relation,
    pub constant: f64,
    pub priority: Priority,
}

impl ConstraintSpec {
    /// `first <relation> second + constant`
    pub fn between(
        first: Anchor,
        relation: Relation,
        second: Anchor,
        constant: f64,
        priority: Priority,
    ) -> Self {
        Self {
            first,
            second: Some(second),
            relation,
            constant,
            priority,
        }
    }

    /// `first <relation> constant`
    pub fn fixed(first: Anchor, relation: Relation, constant: f64, priority: Priority) -> Self {
        Self {
            first,
            second: None,
            relation,
            constant,
            priority,
        }
    }

    /// Whether either side refers to `view`
    pub fn involves(&self, view: ViewId) -> bool {
        self.first.view == view || self.second.is_some_and(|a| a.view == view)
    }
}

/// An activated constraint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinConstraint {
    pub id: ConstraintId,
    pub spec: ConstraintSpec,
}

impl PinConstraint {
    pub fn first(&self) -> Anchor {
        self.spec.first
    }

    pub fn second(&self) -> Option<Anchor> {
        self.spec.second
    }

    pub fn relation(&self) -> Relation {
        self.spec.relation
    }

    pub fn constant(&self) -> f64 {
        self.spec.constant
    }

    pub fn priority(&self) -> Priority {
        self.spec.priority
    }
}

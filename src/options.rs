//! Options for pinning requests
//!
//! Every builder operation takes a [`PinOptions`] instead of a list of
//! defaulted arguments. The defaults are zero insets, an `Equal` relation and
//! `Priority::REQUIRED`.

use std::fmt;

use serde::Deserialize;

use crate::edge::Edge;

/// Per-edge inset values
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "InsetsRepr")]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub const ZERO: Insets = Insets::uniform(0.0);

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on all four edges
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Vertical insets on top/bottom, horizontal insets on left/right
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn for_edge(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Left => self.left,
            Edge::Bottom => self.bottom,
            Edge::Right => self.right,
        }
    }
}

impl From<f64> for Insets {
    fn from(value: f64) -> Self {
        Insets::uniform(value)
    }
}

/// TOML accepts either `insets = 8` or `insets = { top = 10, left = 5 }`
#[derive(Deserialize)]
#[serde(untagged)]
enum InsetsRepr {
    Uniform(f64),
    PerEdge {
        #[serde(default)]
        top: f64,
        #[serde(default)]
        left: f64,
        #[serde(default)]
        bottom: f64,
        #[serde(default)]
        right: f64,
    },
}

impl From<InsetsRepr> for Insets {
    fn from(repr: InsetsRepr) -> Self {
        match repr {
            InsetsRepr::Uniform(value) => Insets::uniform(value),
            InsetsRepr::PerEdge {
                top,
                left,
                bottom,
                right,
            } => Insets::new(top, left, bottom, right),
        }
    }
}

/// Comparison operator of a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    #[default]
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

impl Relation {
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::LessOrEqual => "<=",
            Relation::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Constraint priority in `0..=1000`; 1000 means required
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(from = "f32")]
pub struct Priority(f32);

impl Priority {
    pub const REQUIRED: Priority = Priority(1000.0);
    pub const HIGH: Priority = Priority(750.0);
    pub const LOW: Priority = Priority(250.0);

    /// Create a priority, clamping into `0..=1000`
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Priority(0.0);
        }
        Priority(value.clamp(0.0, 1000.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn is_required(self) -> bool {
        self.0 >= 1000.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::REQUIRED
    }
}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        Priority::new(value)
    }
}

impl From<f64> for Priority {
    fn from(value: f64) -> Self {
        Priority::new(value as f32)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options shared by all pinning operations
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinOptions {
    /// Inset per edge; single-edge operations read the inset of the edge being pinned
    pub insets: Insets,

    /// Relation between the pinned edge and its target
    pub relation: Relation,

    /// Priority handed to the layout engine
    pub priority: Priority,
}

impl PinOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the same inset on every edge
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.insets = Insets::uniform(inset);
        self
    }

    /// Set per-edge insets
    pub fn with_insets(mut self, insets: impl Into<Insets>) -> Self {
        self.insets = insets.into();
        self
    }

    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relation = relation;
        self
    }

    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = priority.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PinOptions::default();
        assert_eq!(options.insets, Insets::ZERO);
        assert_eq!(options.relation, Relation::Equal);
        assert_eq!(options.priority, Priority::REQUIRED);
    }

    #[test]
    fn test_builder_pattern() {
        let options = PinOptions::new()
            .with_inset(8.0)
            .with_relation(Relation::GreaterOrEqual)
            .with_priority(750.0);

        assert_eq!(options.insets, Insets::uniform(8.0));
        assert_eq!(options.relation, Relation::GreaterOrEqual);
        assert_eq!(options.priority, Priority::HIGH);
    }

    #[test]
    fn test_insets_for_edge() {
        let insets = Insets::new(10.0, 5.0, 12.0, 7.0);
        assert_eq!(insets.for_edge(Edge::Top), 10.0);
        assert_eq!(insets.for_edge(Edge::Left), 5.0);
        assert_eq!(insets.for_edge(Edge::Bottom), 12.0);
        assert_eq!(insets.for_edge(Edge::Right), 7.0);
        assert_eq!(Insets::symmetric(4.0, 2.0), Insets::new(4.0, 2.0, 4.0, 2.0));
    }

    #[test]
    fn test_priority_clamps() {
        assert_eq!(Priority::new(2000.0), Priority::REQUIRED);
        assert_eq!(Priority::new(-5.0).value(), 0.0);
        assert_eq!(Priority::new(f32::NAN).value(), 0.0);
        assert!(Priority::REQUIRED.is_required());
        assert!(!Priority::new(999.0).is_required());
    }
}

//! Layout engine the pinning operations drive
//!
//! This module holds the view hierarchy, the constraint descriptors and the
//! kasuari-backed solver. Pinning code only reads superview links, flips the
//! per-view frame translation flag and activates constraints.

pub mod anchor;
pub mod constraint;
pub mod engine;
pub mod solver;
pub mod types;
pub mod view;

pub use anchor::{Anchor, XAnchor, YAnchor};
pub use constraint::{ConstraintId, ConstraintSpec, PinConstraint};
pub use engine::LayoutEngine;
pub use solver::SolverError;
pub use types::{BoundingBox, Point};
pub use view::{View, ViewId, ViewTree};

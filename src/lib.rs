//! Edgepin - edge pinning on top of a constraint layout engine
//!
//! This library turns short pinning requests ("pin all edges of this view to
//! its superview, inset by 8") into constraints for a Cassowary-based layout
//! engine. Views live in a [`LayoutEngine`]; the [`Pin`] adapter creates and
//! activates the constraints.
//!
//! # Example
//!
//! ```rust
//! use edgepin::{BoundingBox, Edge, LayoutEngine, PinOptions};
//!
//! let mut engine = LayoutEngine::new();
//! let root = engine.create_view("root", BoundingBox::new(0.0, 0.0, 300.0, 200.0));
//! let banner = engine.create_view("banner", BoundingBox::zero());
//! engine.add_subview(root, banner).unwrap();
//!
//! // Everything but the bottom edge, 8 points in
//! let pinned = engine
//!     .pin(banner)
//!     .edges_to_superview_excluding(Edge::Bottom, PinOptions::new().with_inset(8.0))
//!     .unwrap();
//! assert_eq!(pinned.len(), 3);
//! ```

pub mod config;
pub mod edge;
pub mod error;
pub mod layout;
pub mod options;
pub mod pin;

pub use config::{ConfigError, PinProfile};
pub use edge::{Axis, Edge, EdgeGroup, EdgeSet, LayoutAttribute};
pub use error::PinError;
pub use layout::{
    Anchor, BoundingBox, ConstraintId, ConstraintSpec, LayoutEngine, PinConstraint, Point,
    SolverError, ViewId, XAnchor, YAnchor,
};
pub use options::{Insets, PinOptions, Priority, Relation};
pub use pin::{Pin, PinAnchors};

//! Anchors: one attribute of one view
//!
//! [`XAnchor`] and [`YAnchor`] are typed by axis so that anchor-based pinning
//! cannot pair a horizontal attribute with a vertical one.

use crate::edge::{Edge, LayoutAttribute};

use super::view::ViewId;

/// An attribute of a specific view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub view: ViewId,
    pub attribute: LayoutAttribute,
}

impl Anchor {
    pub fn new(view: ViewId, attribute: LayoutAttribute) -> Self {
        Self { view, attribute }
    }
}

/// Horizontal-axis anchor (left, right, center x)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XAnchor(Anchor);

/// Vertical-axis anchor (top, bottom, center y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YAnchor(Anchor);

impl XAnchor {
    pub fn anchor(self) -> Anchor {
        self.0
    }
}

impl YAnchor {
    pub fn anchor(self) -> Anchor {
        self.0
    }
}

impl From<XAnchor> for Anchor {
    fn from(anchor: XAnchor) -> Self {
        anchor.0
    }
}

impl From<YAnchor> for Anchor {
    fn from(anchor: YAnchor) -> Self {
        anchor.0
    }
}

impl ViewId {
    /// Anchor for one edge of this view
    pub fn anchor(self, edge: Edge) -> Anchor {
        Anchor::new(self, edge.attribute())
    }

    pub fn top_anchor(self) -> YAnchor {
        YAnchor(Anchor::new(self, LayoutAttribute::Top))
    }

    pub fn bottom_anchor(self) -> YAnchor {
        YAnchor(Anchor::new(self, LayoutAttribute::Bottom))
    }

    pub fn center_y_anchor(self) -> YAnchor {
        YAnchor(Anchor::new(self, LayoutAttribute::CenterY))
    }

    pub fn left_anchor(self) -> XAnchor {
        XAnchor(Anchor::new(self, LayoutAttribute::Left))
    }

    pub fn right_anchor(self) -> XAnchor {
        XAnchor(Anchor::new(self, LayoutAttribute::Right))
    }

    pub fn center_x_anchor(self) -> XAnchor {
        XAnchor(Anchor::new(self, LayoutAttribute::CenterX))
    }
}

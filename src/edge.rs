//! Edges, axes and edge groups
//!
//! An [`Edge`] is one side of a view's rectangle. Edges carry a directional
//! multiplier so that a positive inset always moves the pinned edge inward,
//! and map 1:1 onto the [`LayoutAttribute`] the engine constrains.

use std::fmt;

/// Attributes of a view the layout engine can constrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutAttribute {
    Top,
    Bottom,
    Left,
    Right,
    Width,
    Height,
    /// Left + Width/2 (derived)
    CenterX,
    /// Top + Height/2 (derived)
    CenterY,
}

impl LayoutAttribute {
    /// Axis this attribute positions, or `None` for dimensions
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::Left | Self::Right | Self::CenterX => Some(Axis::Horizontal),
            Self::Top | Self::Bottom | Self::CenterY => Some(Axis::Vertical),
            Self::Width | Self::Height => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Width => "width",
            Self::Height => "height",
            Self::CenterX => "center_x",
            Self::CenterY => "center_y",
        }
    }
}

impl fmt::Display for LayoutAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One side of a view's rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// All edges in canonical order
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    /// Sign applied to an inset so that positive insets point inward
    pub fn multiplier(self) -> f64 {
        match self {
            Edge::Top | Edge::Left => 1.0,
            Edge::Bottom | Edge::Right => -1.0,
        }
    }

    pub fn attribute(self) -> LayoutAttribute {
        match self {
            Edge::Top => LayoutAttribute::Top,
            Edge::Bottom => LayoutAttribute::Bottom,
            Edge::Left => LayoutAttribute::Left,
            Edge::Right => LayoutAttribute::Right,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Vertical,
            Edge::Left | Edge::Right => Axis::Horizontal,
        }
    }

    pub fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// Whether two edges can be paired in a single constraint
    pub fn shares_axis_with(self, other: Edge) -> bool {
        self.axis() == other.axis()
    }

    fn bit(self) -> u8 {
        match self {
            Edge::Top => 0b0001,
            Edge::Left => 0b0010,
            Edge::Bottom => 0b0100,
            Edge::Right => 0b1000,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute().name())
    }
}

/// Named, fixed-order groups of edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeGroup {
    All,
    /// Left and right
    Horizontal,
    /// Top and bottom
    Vertical,
}

impl EdgeGroup {
    pub fn edges(self) -> &'static [Edge] {
        match self {
            EdgeGroup::All => &Edge::ALL,
            EdgeGroup::Horizontal => &[Edge::Left, Edge::Right],
            EdgeGroup::Vertical => &[Edge::Top, Edge::Bottom],
        }
    }
}

/// A set of edges that always iterates in canonical order
/// (top, left, bottom, right), regardless of how it was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EdgeSet(u8);

impl EdgeSet {
    pub const EMPTY: EdgeSet = EdgeSet(0);
    pub const ALL: EdgeSet = EdgeSet(0b1111);

    pub fn contains(self, edge: Edge) -> bool {
        self.0 & edge.bit() != 0
    }

    pub fn with(self, edge: Edge) -> EdgeSet {
        EdgeSet(self.0 | edge.bit())
    }

    pub fn without(self, edge: Edge) -> EdgeSet {
        EdgeSet(self.0 & !edge.bit())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |edge| self.contains(*edge))
    }
}

impl From<Edge> for EdgeSet {
    fn from(edge: Edge) -> Self {
        EdgeSet::EMPTY.with(edge)
    }
}

impl From<EdgeGroup> for EdgeSet {
    fn from(group: EdgeGroup) -> Self {
        group.edges().iter().copied().collect()
    }
}

impl From<&[Edge]> for EdgeSet {
    fn from(edges: &[Edge]) -> Self {
        edges.iter().copied().collect()
    }
}

impl<const N: usize> From<[Edge; N]> for EdgeSet {
    fn from(edges: [Edge; N]) -> Self {
        edges.into_iter().collect()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        iter.into_iter().fold(EdgeSet::EMPTY, EdgeSet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_points_inward() {
        assert_eq!(Edge::Top.multiplier(), 1.0);
        assert_eq!(Edge::Left.multiplier(), 1.0);
        assert_eq!(Edge::Bottom.multiplier(), -1.0);
        assert_eq!(Edge::Right.multiplier(), -1.0);
    }

    #[test]
    fn test_attribute_mapping() {
        for edge in Edge::ALL {
            assert_eq!(edge.attribute().axis(), Some(edge.axis()));
            assert_eq!(edge.to_string(), edge.attribute().name());
        }
    }

    #[test]
    fn test_axis_pairing() {
        assert!(Edge::Top.shares_axis_with(Edge::Bottom));
        assert!(Edge::Left.shares_axis_with(Edge::Right));
        assert!(!Edge::Top.shares_axis_with(Edge::Left));
        assert!(!Edge::Right.shares_axis_with(Edge::Bottom));
        for edge in Edge::ALL {
            assert!(edge.shares_axis_with(edge.opposite()));
            assert_eq!(edge.opposite().multiplier(), -edge.multiplier());
        }
    }

    #[test]
    fn test_group_tables() {
        assert_eq!(
            EdgeGroup::All.edges(),
            &[Edge::Top, Edge::Left, Edge::Bottom, Edge::Right]
        );
        assert_eq!(EdgeGroup::Horizontal.edges(), &[Edge::Left, Edge::Right]);
        assert_eq!(EdgeGroup::Vertical.edges(), &[Edge::Top, Edge::Bottom]);
    }

    #[test]
    fn test_edge_set_iterates_in_canonical_order() {
        let set = EdgeSet::from([Edge::Right, Edge::Top, Edge::Right, Edge::Bottom]);
        let edges: Vec<_> = set.iter().collect();
        assert_eq!(edges, vec![Edge::Top, Edge::Bottom, Edge::Right]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_edge_set_without() {
        let set = EdgeSet::ALL.without(Edge::Bottom);
        assert!(!set.contains(Edge::Bottom));
        assert_eq!(set.len(), 3);
        assert!(EdgeSet::from(Edge::Top).without(Edge::Top).is_empty());
    }

    #[test]
    fn test_edge_set_from_group() {
        assert_eq!(EdgeSet::from(EdgeGroup::All), EdgeSet::ALL);
        let horizontal: Vec<_> = EdgeSet::from(EdgeGroup::Horizontal).iter().collect();
        assert_eq!(horizontal, vec![Edge::Left, Edge::Right]);
    }
}

//! Pinning operations
//!
//! [`Pin`] is an adapter over one source view, obtained with
//! [`LayoutEngine::pin`]. Each operation turns a pinning request into one
//! constraint per edge, with `constant = inset * edge.multiplier()` so that
//! positive insets move the source edge inward.
//!
//! ```rust
//! use edgepin::{BoundingBox, EdgeGroup, Insets, LayoutEngine, PinOptions};
//!
//! let mut engine = LayoutEngine::new();
//! let root = engine.create_view("root", BoundingBox::new(0.0, 0.0, 320.0, 480.0));
//! let card = engine.create_view("card", BoundingBox::zero());
//! engine.add_subview(root, card).unwrap();
//!
//! let options = PinOptions::new().with_insets(Insets::new(10.0, 5.0, 10.0, 5.0));
//! let constraints = engine.pin(card).edges_to_superview(EdgeGroup::All, options).unwrap();
//! assert_eq!(constraints.len(), 4);
//!
//! engine.layout().unwrap();
//! let frame = engine.frame(card).unwrap();
//! assert!((frame.width - 310.0).abs() < 1e-6);
//! ```
//!
//! Requests that need a missing relationship (no superview, no anchors) are
//! silent no-ops. The only request-level error is pairing edges from
//! different axes, which is reported before anything is changed.

use crate::edge::{Edge, EdgeSet};
use crate::error::PinError;
use crate::layout::anchor::{Anchor, XAnchor, YAnchor};
use crate::layout::constraint::{ConstraintSpec, PinConstraint};
use crate::layout::engine::LayoutEngine;
use crate::layout::view::ViewId;
use crate::options::{PinOptions, Relation};

impl LayoutEngine {
    /// Start a pinning request for `view`
    pub fn pin(&mut self, view: ViewId) -> Pin<'_> {
        Pin { engine: self, view }
    }
}

/// Up to four anchors for [`Pin::to_anchors`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinAnchors {
    pub top: Option<YAnchor>,
    pub left: Option<XAnchor>,
    pub bottom: Option<YAnchor>,
    pub right: Option<XAnchor>,
}

impl PinAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    /// All four edge anchors of `view`
    pub fn of(view: ViewId) -> Self {
        Self {
            top: Some(view.top_anchor()),
            left: Some(view.left_anchor()),
            bottom: Some(view.bottom_anchor()),
            right: Some(view.right_anchor()),
        }
    }

    pub fn top(mut self, anchor: YAnchor) -> Self {
        self.top = Some(anchor);
        self
    }

    pub fn left(mut self, anchor: XAnchor) -> Self {
        self.left = Some(anchor);
        self
    }

    pub fn bottom(mut self, anchor: YAnchor) -> Self {
        self.bottom = Some(anchor);
        self
    }

    pub fn right(mut self, anchor: XAnchor) -> Self {
        self.right = Some(anchor);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.left.is_none() && self.bottom.is_none() && self.right.is_none()
    }

    /// Present anchors paired with the source edge they pin, in canonical order
    fn pairs(&self) -> impl Iterator<Item = (Edge, Anchor)> {
        [
            (Edge::Top, self.top.map(Anchor::from)),
            (Edge::Left, self.left.map(Anchor::from)),
            (Edge::Bottom, self.bottom.map(Anchor::from)),
            (Edge::Right, self.right.map(Anchor::from)),
        ]
        .into_iter()
        .filter_map(|(edge, anchor)| anchor.map(|a| (edge, a)))
    }
}

/// Pinning adapter for a single source view
pub struct Pin<'a> {
    engine: &'a mut LayoutEngine,
    view: ViewId,
}

impl Pin<'_> {
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Pin `edge` of the source view to `target_edge` of `target`.
    ///
    /// Fails with [`PinError::AxisMismatch`] when the edges lie on different
    /// axes; in that case no constraint is created and the source view is
    /// left untouched.
    pub fn edge_to_edge(
        &mut self,
        edge: Edge,
        target: ViewId,
        target_edge: Edge,
        options: PinOptions,
    ) -> Result<PinConstraint, PinError> {
        if !edge.shares_axis_with(target_edge) {
            return Err(PinError::axis_mismatch(edge, target_edge));
        }
        self.engine.ensure_view(target)?;
        self.engine.set_translates_frame(self.view, false)?;

        let constant = options.insets.for_edge(edge) * edge.multiplier();
        self.engine.activate(ConstraintSpec::between(
            self.view.anchor(edge),
            options.relation,
            target.anchor(target_edge),
            constant,
            options.priority,
        ))
    }

    /// Pin `edge` of the source view to the same edge of `target`
    pub fn edge_to_same_edge(
        &mut self,
        edge: Edge,
        target: ViewId,
        options: PinOptions,
    ) -> Result<PinConstraint, PinError> {
        self.edge_to_edge(edge, target, edge, options)
    }

    /// Pin every edge in `edges` to the same edge of `target`.
    ///
    /// Edges are processed in canonical order (top, left, bottom, right). The
    /// call is not atomic: if the solver rejects a later edge, constraints
    /// created for earlier edges stay active.
    pub fn edges_to_same_edges(
        &mut self,
        edges: impl Into<EdgeSet>,
        target: ViewId,
        options: PinOptions,
    ) -> Result<Vec<PinConstraint>, PinError> {
        edges
            .into()
            .iter()
            .map(|edge| self.edge_to_same_edge(edge, target, options))
            .collect()
    }

    /// Pin every edge except `excluded` to the same edge of `target`
    pub fn edges_to_same_edges_excluding(
        &mut self,
        excluded: Edge,
        target: ViewId,
        options: PinOptions,
    ) -> Result<Vec<PinConstraint>, PinError> {
        self.edges_to_same_edges(EdgeSet::ALL.without(excluded), target, options)
    }

    /// Current superview, or `None` after logging that the request is skipped
    fn superview_or_skip(&self, request: &str) -> Result<Option<ViewId>, PinError> {
        let superview = self.engine.superview(self.view)?;
        if superview.is_none() {
            tracing::debug!(
                view = %self.engine.view(self.view)?.name,
                request,
                "view has no superview, pin request ignored"
            );
        }
        Ok(superview)
    }

    /// Pin `edge` to the same edge of the superview; `None` without a superview
    pub fn edge_to_superview(
        &mut self,
        edge: Edge,
        options: PinOptions,
    ) -> Result<Option<PinConstraint>, PinError> {
        self.edge_to_superview_edge(edge, edge, options)
    }

    /// Pin `edge` to `superview_edge` of the superview.
    ///
    /// The axis check runs first, so a mismatch is reported even for a
    /// detached view.
    pub fn edge_to_superview_edge(
        &mut self,
        edge: Edge,
        superview_edge: Edge,
        options: PinOptions,
    ) -> Result<Option<PinConstraint>, PinError> {
        if !edge.shares_axis_with(superview_edge) {
            return Err(PinError::axis_mismatch(edge, superview_edge));
        }
        match self.superview_or_skip("edge_to_superview_edge")? {
            Some(superview) => self
                .edge_to_edge(edge, superview, superview_edge, options)
                .map(Some),
            None => Ok(None),
        }
    }

    /// Pin every edge in `edges` to the superview; empty without a superview
    pub fn edges_to_superview(
        &mut self,
        edges: impl Into<EdgeSet>,
        options: PinOptions,
    ) -> Result<Vec<PinConstraint>, PinError> {
        match self.superview_or_skip("edges_to_superview")? {
            Some(superview) => self.edges_to_same_edges(edges, superview, options),
            None => Ok(Vec::new()),
        }
    }

    /// Pin every edge except `excluded` to the superview
    pub fn edges_to_superview_excluding(
        &mut self,
        excluded: Edge,
        options: PinOptions,
    ) -> Result<Vec<PinConstraint>, PinError> {
        self.edges_to_superview(EdgeSet::ALL.without(excluded), options)
    }

    /// Pin the source edges to explicit anchors.
    ///
    /// Every present anchor yields an `Equal` constraint (the relation in
    /// `options` is not used) with constant `+inset` for top/left and
    /// `-inset` for bottom/right. No anchors means no constraints.
    pub fn to_anchors(
        &mut self,
        anchors: PinAnchors,
        options: PinOptions,
    ) -> Result<Vec<PinConstraint>, PinError> {
        if anchors.is_empty() {
            tracing::debug!(
                view = %self.engine.view(self.view)?.name,
                "no anchors given, pin request ignored"
            );
            return Ok(Vec::new());
        }
        for (_, anchor) in anchors.pairs() {
            self.engine.ensure_view(anchor.view)?;
        }
        self.engine.set_translates_frame(self.view, false)?;

        let view = self.view;
        let priority = options.priority;
        anchors
            .pairs()
            .map(|(edge, anchor)| {
                let constant = options.insets.for_edge(edge) * edge.multiplier();
                self.engine.activate(ConstraintSpec::between(
                    view.anchor(edge),
                    Relation::Equal,
                    anchor,
                    constant,
                    priority,
                ))
            })
            .collect()
    }
}

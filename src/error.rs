//! Error types for pinning and engine operations

use thiserror::Error;

use crate::edge::Edge;
use crate::layout::constraint::ConstraintId;
use crate::layout::solver::SolverError;
use crate::layout::view::ViewId;

/// Errors returned by pinning operations and the layout engine
#[derive(Debug, Error)]
pub enum PinError {
    /// Two edges on different axes were paired; a bug at the call site
    #[error("cannot pin {edge} to {target_edge}: edges lie on different axes")]
    AxisMismatch { edge: Edge, target_edge: Edge },

    /// Handle does not belong to this engine
    #[error("unknown view {0}")]
    UnknownView(ViewId),

    #[error("unknown constraint {0}")]
    UnknownConstraint(ConstraintId),

    /// Adding the subview would make a view its own ancestor
    #[error("cannot add {child} as a subview of {parent}: {child} is an ancestor of {parent}")]
    HierarchyCycle { parent: ViewId, child: ViewId },

    /// The solver rejected a constraint
    #[error("constraint solver error: {0}")]
    Solver(#[from] SolverError),
}

impl PinError {
    /// Create an axis mismatch error
    pub fn axis_mismatch(edge: Edge, target_edge: Edge) -> Self {
        Self::AxisMismatch { edge, target_edge }
    }

    /// Whether the error reports a call-site bug rather than an engine condition
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::AxisMismatch { .. } | Self::UnknownView(_) | Self::HierarchyCycle { .. }
        )
    }
}

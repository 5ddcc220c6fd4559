//! Layout engine
//!
//! [`LayoutEngine`] owns the view tree, the kasuari solver and the registry of
//! activated constraints. Pinning operations drive it through
//! [`LayoutEngine::activate`]; application code builds the hierarchy and
//! reads solved frames after calling [`LayoutEngine::layout`].
//!
//! Views whose `translates_frame` flag is set get four required constraints
//! derived from their frame (origin relative to the superview, fixed size).
//! Those constraints are synced lazily at layout time, except that turning
//! the flag off removes them immediately.

use std::collections::BTreeSet;
use std::collections::HashMap;

use kasuari::Constraint as KasuariConstraint;

use crate::edge::{Edge, LayoutAttribute};
use crate::error::PinError;
use crate::options::{Priority, Relation};

use super::anchor::Anchor;
use super::constraint::{ConstraintId, ConstraintSpec, PinConstraint};
use super::solver::{ConstraintSolver, LayoutProperty};
use super::types::{BoundingBox, Point};
use super::view::{View, ViewId, ViewTree};

struct Registered {
    constraint: PinConstraint,
    /// Solver handle while active
    handle: Option<KasuariConstraint>,
}

/// View hierarchy plus constraint solver
pub struct LayoutEngine {
    views: ViewTree,
    solver: ConstraintSolver,
    constraints: Vec<Registered>,
    frame_constraints: HashMap<ViewId, Vec<KasuariConstraint>>,
    /// Views whose frame constraints must be rebuilt before the next solve
    dirty_frames: BTreeSet<ViewId>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            views: ViewTree::new(),
            solver: ConstraintSolver::new(),
            constraints: Vec::new(),
            frame_constraints: HashMap::new(),
            dirty_frames: BTreeSet::new(),
        }
    }

    pub fn views(&self) -> &ViewTree {
        &self.views
    }

    pub fn view(&self, id: ViewId) -> Result<&View, PinError> {
        self.views.get(id).ok_or(PinError::UnknownView(id))
    }

    fn view_mut(&mut self, id: ViewId) -> Result<&mut View, PinError> {
        self.views.get_mut(id).ok_or(PinError::UnknownView(id))
    }

    pub(crate) fn ensure_view(&self, id: ViewId) -> Result<(), PinError> {
        self.view(id).map(|_| ())
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// View hierarchy
// ============================================================================

impl LayoutEngine {
    /// Create a detached view that translates its frame into constraints
    pub fn create_view(&mut self, name: impl Into<String>, frame: BoundingBox) -> ViewId {
        let id = self.views.insert(name, frame);
        self.dirty_frames.insert(id);
        id
    }

    /// Add `child` under `parent`, moving it out of its current superview
    pub fn add_subview(&mut self, parent: ViewId, child: ViewId) -> Result<(), PinError> {
        self.ensure_view(parent)?;
        self.ensure_view(child)?;
        if self.views.is_ancestor(child, parent) {
            return Err(PinError::HierarchyCycle { parent, child });
        }
        if self.views.superview(child) == Some(parent) {
            return Ok(());
        }
        self.remove_from_superview(child)?;
        self.views.attach(parent, child);
        self.dirty_frames.insert(child);
        Ok(())
    }

    /// Detach a view from its superview. Constraints that cross the boundary
    /// of the detached subtree are deactivated; constraints between views
    /// inside it are kept. No-op for a detached view.
    pub fn remove_from_superview(&mut self, view: ViewId) -> Result<(), PinError> {
        self.ensure_view(view)?;
        if self.views.superview(view).is_none() {
            return Ok(());
        }
        let subtree: BTreeSet<ViewId> = self
            .views
            .iter()
            .map(|v| v.id)
            .filter(|id| self.views.is_ancestor(view, *id))
            .collect();
        let crossing: Vec<ConstraintId> = self
            .active_constraints()
            .filter(|c| match c.spec.second {
                Some(second) => {
                    subtree.contains(&c.spec.first.view) != subtree.contains(&second.view)
                }
                None => false,
            })
            .map(|c| c.id)
            .collect();
        for id in crossing {
            self.deactivate(id)?;
        }
        self.views.detach(view);
        self.dirty_frames.insert(view);
        Ok(())
    }

    pub fn superview(&self, view: ViewId) -> Result<Option<ViewId>, PinError> {
        Ok(self.view(view)?.superview)
    }

    pub fn subviews(&self, view: ViewId) -> Result<&[ViewId], PinError> {
        Ok(&self.view(view)?.subviews)
    }

    /// Set the frame (superview coordinates). Only affects layout while the
    /// view translates its frame into constraints.
    pub fn set_frame(&mut self, view: ViewId, frame: BoundingBox) -> Result<(), PinError> {
        let v = self.view_mut(view)?;
        v.frame = frame;
        if v.translates_frame {
            self.dirty_frames.insert(view);
        }
        Ok(())
    }

    pub fn translates_frame(&self, view: ViewId) -> Result<bool, PinError> {
        Ok(self.view(view)?.translates_frame)
    }

    pub fn set_translates_frame(&mut self, view: ViewId, enabled: bool) -> Result<(), PinError> {
        let v = self.view_mut(view)?;
        if v.translates_frame == enabled {
            return Ok(());
        }
        v.translates_frame = enabled;
        if enabled {
            self.dirty_frames.insert(view);
        } else {
            self.dirty_frames.remove(&view);
            self.remove_frame_constraints(view)?;
        }
        Ok(())
    }

    fn remove_frame_constraints(&mut self, view: ViewId) -> Result<(), PinError> {
        if let Some(handles) = self.frame_constraints.remove(&view) {
            for handle in &handles {
                self.solver.remove_constraint(handle, "frame constraint")?;
            }
        }
        Ok(())
    }

    fn frame_specs(view: &View) -> [ConstraintSpec; 4] {
        let origin = |edge: Edge, value: f64| match view.superview {
            Some(parent) => ConstraintSpec::between(
                view.id.anchor(edge),
                Relation::Equal,
                parent.anchor(edge),
                value,
                Priority::REQUIRED,
            ),
            None => ConstraintSpec::fixed(
                view.id.anchor(edge),
                Relation::Equal,
                value,
                Priority::REQUIRED,
            ),
        };
        let size = |attribute: LayoutAttribute, value: f64| {
            ConstraintSpec::fixed(
                Anchor::new(view.id, attribute),
                Relation::Equal,
                value,
                Priority::REQUIRED,
            )
        };
        [
            origin(Edge::Left, view.frame.x),
            origin(Edge::Top, view.frame.y),
            size(LayoutAttribute::Width, view.frame.width),
            size(LayoutAttribute::Height, view.frame.height),
        ]
    }

    /// Rebuild frame constraints for every pending view. A view whose rebuild
    /// fails stays pending, as do the views not reached yet.
    fn sync_frame_constraints(&mut self) -> Result<(), PinError> {
        while let Some(id) = self.dirty_frames.pop_first() {
            if let Err(err) = self.rebuild_frame_constraints(id) {
                self.dirty_frames.insert(id);
                return Err(err);
            }
        }
        Ok(())
    }

    fn rebuild_frame_constraints(&mut self, id: ViewId) -> Result<(), PinError> {
        self.remove_frame_constraints(id)?;
        let view = self.view(id)?;
        if !view.translates_frame {
            return Ok(());
        }
        tracing::trace!(view = %view.name, frame = ?view.frame, "rebuilding frame constraints");
        let specs = Self::frame_specs(view);
        let mut handles = Vec::with_capacity(specs.len());
        for spec in &specs {
            let description = self.describe_spec(spec);
            match self.solver.add_constraint(spec, &description) {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    // Roll back the partial set so the view holds none
                    for handle in &handles {
                        self.solver.remove_constraint(handle, "frame constraint")?;
                    }
                    return Err(err.into());
                }
            }
        }
        self.frame_constraints.insert(id, handles);
        Ok(())
    }
}

// ============================================================================
// Constraint registry
// ============================================================================

impl LayoutEngine {
    /// Add a constraint to the solver and register it.
    ///
    /// Identical specs are never merged: every call creates a new constraint.
    pub fn activate(&mut self, spec: ConstraintSpec) -> Result<PinConstraint, PinError> {
        self.ensure_view(spec.first.view)?;
        if let Some(second) = spec.second {
            self.ensure_view(second.view)?;
        }
        let description = self.describe_spec(&spec);
        let handle = self.solver.add_constraint(&spec, &description)?;
        let constraint = PinConstraint {
            id: ConstraintId(self.constraints.len()),
            spec,
        };
        tracing::debug!(id = %constraint.id, constraint = %description, "activated constraint");
        self.constraints.push(Registered {
            constraint,
            handle: Some(handle),
        });
        Ok(constraint)
    }

    /// Remove a constraint from the solver; it stays registered and can be
    /// reactivated. Deactivating an inactive constraint is a no-op.
    pub fn deactivate(&mut self, id: ConstraintId) -> Result<(), PinError> {
        let entry = self
            .constraints
            .get_mut(id.0)
            .ok_or(PinError::UnknownConstraint(id))?;
        if let Some(handle) = entry.handle.take() {
            self.solver.remove_constraint(&handle, &id.to_string())?;
            tracing::debug!(id = %id, "deactivated constraint");
        }
        Ok(())
    }

    /// Add a previously deactivated constraint back to the solver
    pub fn reactivate(&mut self, id: ConstraintId) -> Result<(), PinError> {
        let entry = self
            .constraints
            .get(id.0)
            .ok_or(PinError::UnknownConstraint(id))?;
        if entry.handle.is_some() {
            return Ok(());
        }
        let spec = entry.constraint.spec;
        let description = self.describe_spec(&spec);
        let handle = self.solver.add_constraint(&spec, &description)?;
        if let Some(entry) = self.constraints.get_mut(id.0) {
            entry.handle = Some(handle);
        }
        Ok(())
    }

    pub fn is_active(&self, id: ConstraintId) -> bool {
        self.constraints
            .get(id.0)
            .is_some_and(|entry| entry.handle.is_some())
    }

    pub fn constraint(&self, id: ConstraintId) -> Option<&PinConstraint> {
        self.constraints.get(id.0).map(|entry| &entry.constraint)
    }

    /// Active constraints in activation order
    pub fn active_constraints(&self) -> impl Iterator<Item = &PinConstraint> {
        self.constraints
            .iter()
            .filter(|entry| entry.handle.is_some())
            .map(|entry| &entry.constraint)
    }

    /// Active constraints that reference `view` on either side
    pub fn constraints_for(&self, view: ViewId) -> Vec<PinConstraint> {
        self.active_constraints()
            .filter(|c| c.spec.involves(view))
            .copied()
            .collect()
    }

    /// Render a constraint as `child.top == root.top + 10 @1000`
    pub fn describe(&self, constraint: &PinConstraint) -> String {
        self.describe_spec(&constraint.spec)
    }

    pub fn describe_spec(&self, spec: &ConstraintSpec) -> String {
        let anchor = |a: Anchor| match self.views.get(a.view) {
            Some(view) => format!("{}.{}", view.name, a.attribute),
            None => format!("{}.{}", a.view, a.attribute),
        };
        let rhs = match spec.second {
            Some(second) if spec.constant > 0.0 => {
                format!("{} + {}", anchor(second), spec.constant)
            }
            Some(second) if spec.constant < 0.0 => {
                format!("{} - {}", anchor(second), -spec.constant)
            }
            Some(second) => anchor(second),
            None => spec.constant.to_string(),
        };
        format!(
            "{} {} {} @{}",
            anchor(spec.first),
            spec.relation,
            rhs,
            spec.priority
        )
    }
}

// ============================================================================
// Solving
// ============================================================================

impl LayoutEngine {
    /// Sync frame constraints and pull the current solution
    pub fn layout(&mut self) -> Result<(), PinError> {
        self.sync_frame_constraints()?;
        self.solver.refresh()?;
        Ok(())
    }

    /// Frame in root coordinates as of the last [`layout`](Self::layout)
    pub fn absolute_frame(&self, view: ViewId) -> Result<BoundingBox, PinError> {
        self.ensure_view(view)?;
        Ok(BoundingBox::new(
            self.solver.value(view, LayoutProperty::X),
            self.solver.value(view, LayoutProperty::Y),
            self.solver.value(view, LayoutProperty::Width),
            self.solver.value(view, LayoutProperty::Height),
        ))
    }

    /// Solved frame in superview coordinates
    pub fn frame(&self, view: ViewId) -> Result<BoundingBox, PinError> {
        let absolute = self.absolute_frame(view)?;
        match self.superview(view)? {
            Some(parent) => Ok(absolute.relative_to(self.absolute_frame(parent)?.origin())),
            None => Ok(absolute.relative_to(Point::default())),
        }
    }
}

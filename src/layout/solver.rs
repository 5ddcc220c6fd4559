//! Constraint solver integration
//!
//! This module wraps the kasuari Cassowary solver. Each view owns four base
//! variables (x, y, width, height); edge and center attributes are
//! expressions over them. Constraint specs are translated into kasuari
//! constraints, and solved values are cached from the solver's change feed.
//!
//! The change feed only reports variables that are still part of the
//! system, so a removal marks the cache stale and the next refresh replays
//! the installed constraints into a fresh solver.

use std::collections::HashMap;

use kasuari::{
    Constraint as KasuariConstraint, Expression, Solver as KasuariSolver, Strength,
    Variable as KasuariVariable, WeightedRelation::*,
};
use thiserror::Error;

use crate::edge::LayoutAttribute;
use crate::options::{Priority, Relation};

use super::anchor::Anchor;
use super::constraint::ConstraintSpec;
use super::view::ViewId;

/// Base properties stored as solver variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutProperty {
    X,
    Y,
    Width,
    Height,
}

/// A variable in the constraint system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutVariable {
    pub view: ViewId,
    pub property: LayoutProperty,
}

impl LayoutVariable {
    pub fn new(view: ViewId, property: LayoutProperty) -> Self {
        Self { view, property }
    }
}

/// Errors from the constraint solver
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Unsatisfiable constraint {constraint}: {reason}")]
    Unsatisfiable { constraint: String, reason: String },

    #[error("Internal solver error: {0}")]
    Internal(String),
}

/// Map a 0..=1000 priority onto a kasuari strength.
///
/// 1000 is required; anything lower scales to `priority * 1000`, which keeps
/// 999 below required and 1 at the medium strength.
pub fn strength_for(priority: Priority) -> Strength {
    if priority.is_required() {
        Strength::REQUIRED
    } else {
        Strength::new(f64::from(priority.value()) * 1000.0)
    }
}

/// Wrapper around kasuari solver
pub struct ConstraintSolver {
    solver: KasuariSolver,
    /// Maps our variables to kasuari variables
    variables: HashMap<LayoutVariable, KasuariVariable>,
    /// Last solved value of every kasuari variable that has changed
    values: HashMap<KasuariVariable, f64>,
    /// Constraints currently added, in insertion order
    installed: Vec<KasuariConstraint>,
    stale: bool,
}

impl ConstraintSolver {
    pub fn new() -> Self {
        Self {
            solver: KasuariSolver::new(),
            variables: HashMap::new(),
            values: HashMap::new(),
            installed: Vec::new(),
            stale: false,
        }
    }

    fn get_or_create_var(&mut self, view: ViewId, property: LayoutProperty) -> KasuariVariable {
        *self
            .variables
            .entry(LayoutVariable::new(view, property))
            .or_insert_with(KasuariVariable::new)
    }

    /// Expression for an anchor in terms of its view's base variables
    fn expression(&mut self, anchor: Anchor) -> Expression {
        let view = anchor.view;
        match anchor.attribute {
            LayoutAttribute::Left => self.get_or_create_var(view, LayoutProperty::X).into(),
            LayoutAttribute::Top => self.get_or_create_var(view, LayoutProperty::Y).into(),
            LayoutAttribute::Width => self.get_or_create_var(view, LayoutProperty::Width).into(),
            LayoutAttribute::Height => self.get_or_create_var(view, LayoutProperty::Height).into(),
            LayoutAttribute::Right => {
                let x = self.get_or_create_var(view, LayoutProperty::X);
                let width = self.get_or_create_var(view, LayoutProperty::Width);
                x + width
            }
            LayoutAttribute::Bottom => {
                let y = self.get_or_create_var(view, LayoutProperty::Y);
                let height = self.get_or_create_var(view, LayoutProperty::Height);
                y + height
            }
            LayoutAttribute::CenterX => {
                let x = self.get_or_create_var(view, LayoutProperty::X);
                let width = self.get_or_create_var(view, LayoutProperty::Width);
                x + width * 0.5
            }
            LayoutAttribute::CenterY => {
                let y = self.get_or_create_var(view, LayoutProperty::Y);
                let height = self.get_or_create_var(view, LayoutProperty::Height);
                y + height * 0.5
            }
        }
    }

    /// Build the kasuari constraint for a spec without adding it
    fn build(&mut self, spec: &ConstraintSpec) -> KasuariConstraint {
        let strength = strength_for(spec.priority);
        let relation = match spec.relation {
            Relation::Equal => EQ(strength),
            Relation::LessOrEqual => LE(strength),
            Relation::GreaterOrEqual => GE(strength),
        };
        let lhs = self.expression(spec.first);
        match spec.second {
            Some(second) => lhs | relation | self.expression(second) + spec.constant,
            None => lhs | relation | spec.constant,
        }
    }

    /// Add a constraint; the returned handle removes it again
    pub fn add_constraint(
        &mut self,
        spec: &ConstraintSpec,
        description: &str,
    ) -> Result<KasuariConstraint, SolverError> {
        let constraint = self.build(spec);
        self.solver
            .add_constraint(constraint.clone())
            .map_err(|e| convert_add_error(e, description))?;
        self.installed.push(constraint.clone());
        Ok(constraint)
    }

    pub fn remove_constraint(
        &mut self,
        constraint: &KasuariConstraint,
        description: &str,
    ) -> Result<(), SolverError> {
        self.solver.remove_constraint(constraint).map_err(|e| {
            SolverError::Internal(format!("Failed to remove {}: {}", description, e))
        })?;
        self.installed.retain(|c| c != constraint);
        self.stale = true;
        Ok(())
    }

    /// Pull the latest solution from kasuari into the value cache
    pub fn refresh(&mut self) -> Result<(), SolverError> {
        if self.stale {
            self.rebuild()?;
        }
        for (kvar, value) in self.solver.fetch_changes() {
            self.values.insert(*kvar, *value);
        }
        Ok(())
    }

    fn rebuild(&mut self) -> Result<(), SolverError> {
        tracing::trace!(constraints = self.installed.len(), "rebuilding solver");
        let mut solver = KasuariSolver::new();
        for constraint in &self.installed {
            solver
                .add_constraint(constraint.clone())
                .map_err(|e| convert_add_error(e, "installed constraint"))?;
        }
        self.solver = solver;
        self.values.clear();
        self.stale = false;
        Ok(())
    }

    /// Solved value of a base property; unconstrained variables read as 0
    pub fn value(&self, view: ViewId, property: LayoutProperty) -> f64 {
        self.variables
            .get(&LayoutVariable::new(view, property))
            .and_then(|kvar| self.values.get(kvar))
            .copied()
            .unwrap_or(0.0)
    }
}

impl Default for ConstraintSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a kasuari error to a SolverError with context
fn convert_add_error(e: kasuari::AddConstraintError, description: &str) -> SolverError {
    match e {
        kasuari::AddConstraintError::UnsatisfiableConstraint => SolverError::Unsatisfiable {
            constraint: description.to_string(),
            reason: "conflicts with existing required constraints".to_string(),
        },
        kasuari::AddConstraintError::DuplicateConstraint => {
            SolverError::Internal(format!("Duplicate constraint: {}", description))
        }
        kasuari::AddConstraintError::InternalSolverError(msg) => {
            SolverError::Internal(format!("Internal solver error for {}: {}", description, msg))
        }
    }
}

//! Constrained-optimization model
//!
//! Two layers. [`builder`] is the generic, solver-facing surface: variables
//! with domains, linear constraints, one objective, assembled through
//! [`ModelBuilder`] into an immutable [`Model`] value. [`show`] is the
//! slideshow formulation on top of it: selection, adjacency and ordering
//! variables over a candidate list, frozen into a [`ShowModel`] that keeps
//! the variable index maps the extractor needs to interpret an assignment.

mod builder;
mod show;

pub use builder::{
    Constraint, Direction, LinExpr, Model, ModelBuilder, Relation, VarId, VarKind,
};
pub use show::ShowModel;

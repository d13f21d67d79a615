//! Objective functions turn link metrics and advertised ranks into a rank for
//! this node, and order candidate parents against each other.
//!
//! An objective function is a stateless `'static` value. It is looked up by its
//! Objective Code Point through an [`ObjectiveRegistry`], and handed shared
//! borrows of the DODAG manager's records on every call.

use std::cmp::Ordering;

use crate::concepts::dodag::Dodag;
use crate::concepts::parent::{Parent, ParentState};
use crate::concepts::rank::{Ocp, Rank};
use crate::framework::RplSystem;

pub mod mrhof;
pub mod of0;
pub mod registry;

pub use mrhof::{Mrhof, MRHOF};
pub use of0::{Of0, OF0};
pub use registry::ObjectiveRegistry;

pub trait ObjectiveFunction<T: RplSystem + ?Sized>: Sync {
    fn ocp(&self) -> Ocp;

    /// Computes our rank in `dodag`.
    ///
    /// `base_rank` is zero unless this node is the root, or is repairing with a
    /// known previous rank.
    fn calc_rank(&self, dodag: &Dodag<T>, base_rank: Rank) -> Rank;

    /// Orders two candidate parents, `Less` means `parent1` is preferred.
    fn parent_cmp(&self, parent1: &Parent<T>, parent2: &Parent<T>) -> Ordering;

    /// Picks the preferred of two dodags.
    fn which_dodag<'a>(&self, dodag1: &'a Dodag<T>, dodag2: &'a Dodag<T>) -> &'a Dodag<T>;

    /// Clears any per-dodag state this objective function keeps.
    fn reset(&self, dodag: &Dodag<T>);

    /// Called once, when the objective function is registered.
    fn init(&self) {}

    /// Called by the DODAG manager after `parent` moved to `new_state`.
    fn parent_state_callback(&self, _parent: &Parent<T>, _new_state: ParentState) {}

    /// Called by the DODAG manager for every DIO received for `dodag`.
    fn process_dio(&self, _dodag: &Dodag<T>, _dio: &[u8]) {}

    /// The parent our rank is derived from: the active parent, or failing
    /// that the best usable parent according to [`Self::parent_cmp`].
    fn primary_parent<'a>(&self, dodag: &'a Dodag<T>) -> Option<&'a Parent<T>> {
        dodag
            .active_parent()
            .or_else(|| dodag.usable_parents().min_by(|a, b| self.parent_cmp(a, b)))
    }
}

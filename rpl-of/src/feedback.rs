use educe::Educe;
use thiserror::Error;

use crate::concepts::rank::Ocp;
use crate::framework::RplSystem;

/// Errors surfaced to the DODAG manager
#[derive(Error)]
#[derive(Educe)]
#[educe(Debug(bound()))]
pub enum RplError<T: RplSystem + ?Sized> {
    /// The dodag advertises an objective function this node cannot run, it must not join.
    #[error("Objective code point {ocp:#06x} is not supported.")]
    UnsupportedObjective {
        ocp: Ocp
    },
    #[error("An objective function is already registered for code point {ocp:#06x}.")]
    DuplicateObjective {
        ocp: Ocp
    },
    #[error("No parent with address {address:?} in this dodag.")]
    UnknownParent {
        address: T::LinkAddress
    },
}

/// Although this is an error enum, these should be treated as warnings.
/// They are logged, never returned.
#[derive(Error)]
#[derive(Educe)]
#[educe(Debug(bound()))]
pub enum RplWarning<T: RplSystem + ?Sized> {
    /// Path cost was requested without a parent, which only a root should ever do.
    /// The minimum hop rank increase is used in place of a path cost.
    #[error("Path cost computed without a parent, assuming root.")]
    PathCostWithoutParent,
    /// The link metric has not been estimated yet, the path through this parent is disallowed until it is.
    #[error("Link metric to {address:?} is zero, path disallowed.")]
    MetricIsZero {
        address: T::LinkAddress
    },
}

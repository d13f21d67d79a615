use educe::Educe;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::rank::{Etx, Rank};
use crate::framework::RplSystem;

/// Lifecycle of a parent entry, driven by the DODAG manager.
///
/// Unused -> Candidate -> Active -> {Candidate, Unused}
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParentState {
    /// slot is allocated but the neighbour is not a parent candidate
    #[default]
    Unused,
    Candidate,
    /// the preferred parent, used for forwarding
    Active,
}

/// A candidate next hop towards the dodag root
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Parent<T: RplSystem + ?Sized> {
    /// the link-layer address of the parent, unique within a dodag
    pub address: T::LinkAddress,
    /// the rank the parent advertised
    pub rank: Rank,
    pub state: ParentState,
    /// ETX of the link to this parent, as reported by the link estimator. Zero if unknown.
    pub link_metric: Etx,
}

impl<T: RplSystem + ?Sized> Parent<T> {
    pub fn new(address: T::LinkAddress, rank: Rank, link_metric: Etx) -> Self {
        Self {
            address,
            rank,
            state: ParentState::Candidate,
            link_metric,
        }
    }

    pub fn with_state(mut self, state: ParentState) -> Self {
        self.state = state;
        self
    }

    pub fn is_active(&self) -> bool {
        self.state == ParentState::Active
    }

    /// whether the parent may take part in parent selection
    pub fn is_usable(&self) -> bool {
        self.state != ParentState::Unused
    }
}

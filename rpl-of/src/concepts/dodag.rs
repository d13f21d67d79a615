use std::collections::BTreeMap;

use educe::Educe;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::parent::{Parent, ParentState};
use crate::concepts::rank::{Etx, Ocp, Rank, INFINITE_RANK};
use crate::feedback::RplError;
use crate::framework::{ProtocolParams, RplSystem};
use crate::objective::ObjectiveFunction;

/// One dodag this node participates in, as maintained by the DODAG manager.
///
/// Objective functions only ever get shared borrows of a dodag. All mutation
/// goes through the manager, which keeps at most one parent `Active`.
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
pub struct Dodag<T: RplSystem + ?Sized> {
    /// parent table, keyed by the parent's link address
    #[cfg_attr(feature = "serde", serde(with = "serde_with::As::<Vec<(serde_with::Same, serde_with::Same)>>"))]
    parents: BTreeMap<T::LinkAddress, Parent<T>>,
    pub min_hop_rank_increase: u16,
    /// objective function advertised for this dodag
    pub ocp: Ocp,
    /// our own rank, INFINITE_RANK until computed
    pub rank: Rank,
}

impl<T: RplSystem + ?Sized> Default for Dodag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RplSystem + ?Sized> Dodag<T> {
    pub fn new() -> Self {
        Self::with_params(&T::config())
    }

    pub fn with_params(params: &ProtocolParams) -> Self {
        Self {
            parents: BTreeMap::new(),
            min_hop_rank_increase: params.min_hop_rank_increase,
            ocp: params.objective_code_point,
            rank: INFINITE_RANK,
        }
    }

    // region Parent table
    /// inserts or replaces a parent, returning the entry it replaced
    pub fn add_parent(&mut self, parent: Parent<T>) -> Option<Parent<T>> {
        if parent.is_active() {
            self.demote_active_except(&parent.address);
        }
        self.parents.insert(parent.address.clone(), parent)
    }

    /// records a new advertised rank and link estimate for a known parent
    pub fn update_parent(
        &mut self,
        address: &T::LinkAddress,
        rank: Rank,
        link_metric: Etx,
    ) -> Result<(), RplError<T>> {
        let parent = self.parents.get_mut(address).ok_or_else(|| RplError::UnknownParent {
            address: address.clone(),
        })?;
        parent.rank = rank;
        parent.link_metric = link_metric;
        Ok(())
    }

    pub fn remove_parent(&mut self, address: &T::LinkAddress) -> Option<Parent<T>> {
        self.parents.remove(address)
    }

    pub fn parent(&self, address: &T::LinkAddress) -> Option<&Parent<T>> {
        self.parents.get(address)
    }

    /// all parent entries in address order, including unused ones
    pub fn parents(&self) -> impl Iterator<Item = &Parent<T>> {
        self.parents.values()
    }

    /// parents that may take part in parent selection
    pub fn usable_parents(&self) -> impl Iterator<Item = &Parent<T>> {
        self.parents.values().filter(|p| p.is_usable())
    }

    pub fn has_parents(&self) -> bool {
        self.usable_parents().next().is_some()
    }

    pub fn active_parent(&self) -> Option<&Parent<T>> {
        self.parents.values().find(|p| p.is_active())
    }

    /// Moves a parent to `state`, returning its previous state.
    /// Activating a parent demotes the previously active one to `Candidate`.
    pub fn set_parent_state(
        &mut self,
        address: &T::LinkAddress,
        state: ParentState,
    ) -> Result<ParentState, RplError<T>> {
        let old = match self.parents.get(address) {
            Some(parent) => parent.state,
            None => {
                return Err(RplError::UnknownParent {
                    address: address.clone(),
                })
            }
        };
        if state == ParentState::Active {
            self.demote_active_except(address);
        }
        if let Some(parent) = self.parents.get_mut(address) {
            parent.state = state;
        }
        Ok(old)
    }

    fn demote_active_except(&mut self, address: &T::LinkAddress) {
        for parent in self.parents.values_mut() {
            if parent.is_active() && parent.address != *address {
                parent.state = ParentState::Candidate;
            }
        }
    }
    // endregion

    // region Parent selection
    /// Re-evaluates the parent set with `of` and makes the winner the active parent.
    ///
    /// Every state transition is reported to `of` through its parent state
    /// callback. Returns the address of the preferred parent, if any usable
    /// parent is left.
    ///
    /// An active parent that no longer yields a finite rank loses its
    /// incumbent status for the comparison, so any usable challenger replaces it.
    pub fn select_preferred_parent(
        &mut self,
        of: &dyn ObjectiveFunction<T>,
    ) -> Option<T::LinkAddress> {
        let current = self.active_parent().map(|p| p.address.clone());
        let mut contenders: Vec<Parent<T>> = self.usable_parents().cloned().collect();
        if current.is_some() && of.calc_rank(self, 0) == INFINITE_RANK {
            if let Some(i) = contenders.iter().position(|p| p.is_active()) {
                let mut stale = contenders.remove(i);
                stale.state = ParentState::Candidate;
                // ties still go to the incumbent
                contenders.insert(0, stale);
            }
        }
        let best = contenders
            .iter()
            .min_by(|a, b| of.parent_cmp(a, b))
            .map(|p| p.address.clone());

        if current != best {
            if let Some(old) = current {
                self.transition(&old, ParentState::Candidate, of);
            }
            if let Some(new) = &best {
                self.transition(new, ParentState::Active, of);
            }
        }
        best
    }

    fn transition(&mut self, address: &T::LinkAddress, state: ParentState, of: &dyn ObjectiveFunction<T>) {
        if let Some(parent) = self.parents.get_mut(address) {
            debug!("parent {:?}: {:?} -> {:?}", parent.address, parent.state, state);
            parent.state = state;
            of.parent_state_callback(parent, state);
        }
    }
    // endregion
}

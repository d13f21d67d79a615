//! Minimum Rank with Hysteresis Objective Function (RFC 6719), ETX metric only.
//!
//! The rank of a node is the ETX-weighted cost of the path through its
//! preferred parent. A challenger only displaces the active parent once its
//! path is cheaper by more than [`PARENT_SWITCH_THRESHOLD`], so noisy link
//! estimates do not make the node flap between parents.

use std::cmp::{max, Ordering};

use log::{trace, warn};

use crate::concepts::dodag::Dodag;
use crate::concepts::parent::Parent;
use crate::concepts::rank::{Etx, Ocp, PathCost, Rank, DEFAULT_MIN_HOP_RANK_INCREASE, INFINITE_RANK, OCP_MRHOF};
use crate::feedback::RplWarning;
use crate::framework::RplSystem;
use crate::objective::ObjectiveFunction;
use crate::util::{checked_cost, rank_add, scale_etx};

/// Disallow links with an expected transmission count of 4 or more.
pub const MAX_LINK_METRIC: u32 = 512;

/// Disallow paths with an expected transmission count of 256 or more.
pub const MAX_PATH_COST: PathCost = 0x8000;

/// Switch to a new path only if it is expected to require at least 1.5
/// fewer transmissions than the current path.
pub const PARENT_SWITCH_THRESHOLD: PathCost = 192;

/// Rank is ETX * 128, the ETX representation of RFC 6551.
pub const RANK_MULTIPLIER: u16 = 0x80;

pub static MRHOF: Mrhof = Mrhof;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mrhof;

impl Mrhof {
    /// Cost of the path to the root through `parent`.
    ///
    /// Returns [`MAX_PATH_COST`] when the path must not be used: the link is too
    /// lossy, its ETX is still unknown, or the sum would not fit in 16 bits.
    pub fn path_cost<T: RplSystem + ?Sized>(parent: Option<&Parent<T>>) -> PathCost {
        trace!("calc_path_cost");

        let Some(parent) = parent else {
            // only a root can get here
            warn!("{}", RplWarning::<T>::PathCostWithoutParent);
            return DEFAULT_MIN_HOP_RANK_INCREASE;
        };

        if parent.link_metric == Etx::ZERO {
            warn!(
                "{}",
                RplWarning::<T>::MetricIsZero {
                    address: parent.address.clone()
                }
            );
            return MAX_PATH_COST;
        }

        let link_cost = scale_etx(parent.link_metric, RANK_MULTIPLIER);
        if link_cost >= MAX_LINK_METRIC {
            return MAX_PATH_COST;
        }

        checked_cost(link_cost, parent.rank).unwrap_or(MAX_PATH_COST)
    }
}

impl<T: RplSystem + ?Sized> ObjectiveFunction<T> for Mrhof {
    fn ocp(&self) -> Ocp {
        OCP_MRHOF
    }

    fn calc_rank(&self, dodag: &Dodag<T>, base_rank: Rank) -> Rank {
        trace!("calc_rank");

        let Some(parent) = self.primary_parent(dodag) else {
            if base_rank == 0 {
                // no parent and not a root
                return INFINITE_RANK;
            }
            // a repairing node always keeps its parent, so this is the root
            return dodag.min_hop_rank_increase;
        };

        let cost = Self::path_cost(Some(parent));
        if cost < MAX_PATH_COST {
            max(rank_add(parent.rank, dodag.min_hop_rank_increase), cost)
        } else {
            INFINITE_RANK
        }
    }

    fn parent_cmp(&self, parent1: &Parent<T>, parent2: &Parent<T>) -> Ordering {
        trace!("parent_cmp");

        let mut cost1 = u32::from(Self::path_cost(Some(parent1)));
        let mut cost2 = u32::from(Self::path_cost(Some(parent2)));

        if parent1.is_active() {
            cost2 += u32::from(PARENT_SWITCH_THRESHOLD);
        } else if parent2.is_active() {
            cost1 += u32::from(PARENT_SWITCH_THRESHOLD);
        }

        cost1.cmp(&cost2)
    }

    /// Only a single dodag is supported, the first one always wins.
    fn which_dodag<'a>(&self, dodag1: &'a Dodag<T>, _dodag2: &'a Dodag<T>) -> &'a Dodag<T> {
        dodag1
    }

    fn reset(&self, _dodag: &Dodag<T>) {}
}

//! Objective Function Zero (RFC 6552), a hop-count objective function.
//!
//! Every hop adds the same rank increase, link metrics are ignored.

use std::cmp::Ordering;

use log::trace;

use crate::concepts::dodag::Dodag;
use crate::concepts::parent::Parent;
use crate::concepts::rank::{Ocp, Rank, INFINITE_RANK, OCP_OF0};
use crate::framework::RplSystem;
use crate::objective::ObjectiveFunction;
use crate::util::rank_add;

pub const DEFAULT_RANK_FACTOR: u16 = 1;
pub const DEFAULT_STEP_OF_RANK: u16 = 3;
pub const DEFAULT_RANK_STRETCH: u16 = 0;

pub static OF0: Of0 = Of0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Of0;

impl Of0 {
    /// (Rf * Sp + Sr) * MinHopRankIncrease, saturating
    pub fn rank_increase<T: RplSystem + ?Sized>(dodag: &Dodag<T>) -> u16 {
        DEFAULT_RANK_FACTOR
            .saturating_mul(DEFAULT_STEP_OF_RANK)
            .saturating_add(DEFAULT_RANK_STRETCH)
            .saturating_mul(dodag.min_hop_rank_increase)
    }
}

impl<T: RplSystem + ?Sized> ObjectiveFunction<T> for Of0 {
    fn ocp(&self) -> Ocp {
        OCP_OF0
    }

    fn calc_rank(&self, dodag: &Dodag<T>, base_rank: Rank) -> Rank {
        trace!("of0 calc_rank");

        match self.primary_parent(dodag) {
            Some(parent) => rank_add(parent.rank, Self::rank_increase(dodag)),
            None if base_rank == 0 => INFINITE_RANK,
            None => dodag.min_hop_rank_increase,
        }
    }

    fn parent_cmp(&self, parent1: &Parent<T>, parent2: &Parent<T>) -> Ordering {
        trace!("of0 parent_cmp");

        parent1.rank.cmp(&parent2.rank).then_with(|| {
            match (parent1.is_active(), parent2.is_active()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        })
    }

    fn which_dodag<'a>(&self, dodag1: &'a Dodag<T>, _dodag2: &'a Dodag<T>) -> &'a Dodag<T> {
        dodag1
    }

    fn reset(&self, _dodag: &Dodag<T>) {}
}

use std::fmt::Debug;
use std::hash::Hash;

use cfg_if::cfg_if;

use crate::concepts::rank::{Ocp, DEFAULT_MIN_HOP_RANK_INCREASE, OCP_MRHOF};

cfg_if! {
    if #[cfg(feature = "serde")] {
        use serde::de::DeserializeOwned;
        use serde::Serialize;

        pub trait RplData: Clone + Debug + Serialize + DeserializeOwned + Sized {}
        impl<T: Clone + Debug + Serialize + DeserializeOwned + Sized> RplData for T {}
    } else {
        pub trait RplData: Clone + Debug + Sized {}
        impl<T: Clone + Debug + Sized> RplData for T {}
    }
}

pub trait RplKey: Eq + PartialEq + Hash {}
impl<T: Eq + PartialEq + Hash> RplKey for T {}

/// Describes the host network stack the objective functions run inside of.
pub trait RplSystem: 'static {
    /// Link-layer address of a neighbour, opaque to the objective functions.
    /// Used as the stable key of a dodag's parent table.
    type LinkAddress: Ord + PartialOrd + RplData + RplKey;
    fn config() -> ProtocolParams {
        Default::default()
    }
}

/// RFC 6550 §17, RPL Constants and Variables
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolParams {
    /// MinHopRankIncrease used by new dodags
    pub min_hop_rank_increase: u16,
    /// objective function a new dodag is created with
    pub objective_code_point: Ocp,
}
impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            min_hop_rank_increase: DEFAULT_MIN_HOP_RANK_INCREASE,
            objective_code_point: OCP_MRHOF,
        }
    }
}

use fixed::types::U16F16;

/// Distance-like metric, strictly increasing away from the dodag root.
pub type Rank = u16;
/// Estimated cost of the path to the root through one specific parent.
pub type PathCost = u16;
/// Objective Code Point, identifies an objective function.
pub type Ocp = u16;
/// Expected transmission count of a link, unsigned Q16.16.
///
/// `1.0` is a perfect link, `0` means the link has not been estimated yet.
pub type Etx = U16F16;

/// The node has no path to the root and cannot route.
pub const INFINITE_RANK: Rank = 0xFFFF;
pub const DEFAULT_MIN_HOP_RANK_INCREASE: u16 = 256;
/// Rank advertised by a dodag root with the default MinHopRankIncrease
pub const ROOT_RANK: Rank = DEFAULT_MIN_HOP_RANK_INCREASE;

/// Objective Function Zero, RFC 6552
pub const OCP_OF0: Ocp = 0x0;
/// Minimum Rank with Hysteresis Objective Function, RFC 6719
pub const OCP_MRHOF: Ocp = 0x1;

use proptest::prelude::*;
use rpl_of::concepts::parent::Parent;
use rpl_of::concepts::rank::{Etx, DEFAULT_MIN_HOP_RANK_INCREASE};
use rpl_of::objective::mrhof::{Mrhof, MAX_PATH_COST};

use crate::common::fixtures::{addr, candidate, init_logging, TestSystem};

mod common;

#[test]
fn link_times_multiplier_plus_rank() {
    assert_eq!(Mrhof::path_cost(Some(&candidate("a", 256, 1.0))), 384);
    assert_eq!(Mrhof::path_cost(Some(&candidate("a", 256, 1.5))), 448);
    assert_eq!(Mrhof::path_cost(Some(&candidate("a", 0, 2.0))), 256);
    // 3.99 * 128 = 510.72
    assert_eq!(Mrhof::path_cost(Some(&candidate("a", 100, 3.99))), 610);
}

#[test]
fn fractional_link_cost_is_truncated() {
    // ETX 1 + 1/256 scales to 128.5, which must not round up
    let parent = Parent::<TestSystem>::new(addr("a"), 256, Etx::from_bits(0x0001_0100));
    assert_eq!(Mrhof::path_cost(Some(&parent)), 384);

    // ETX just below 2 scales to 255.99..
    let parent = Parent::<TestSystem>::new(addr("a"), 0, Etx::from_bits(0x0001_FFFF));
    assert_eq!(Mrhof::path_cost(Some(&parent)), 255);
}

#[test]
fn lossy_links_are_disallowed() {
    assert_eq!(Mrhof::path_cost(Some(&candidate("a", 256, 4.0))), MAX_PATH_COST);
    assert_eq!(Mrhof::path_cost(Some(&candidate("a", 0, 4.5))), MAX_PATH_COST);
    assert_eq!(Mrhof::path_cost(Some(&candidate("a", 0, 100.0))), MAX_PATH_COST);
}

#[test]
fn overflow_saturates_instead_of_wrapping() {
    assert_eq!(Mrhof::path_cost(Some(&candidate("a", 0xFEFF, 2.0))), 0xFFFF);
    assert_eq!(Mrhof::path_cost(Some(&candidate("a", 0xFF00, 2.0))), MAX_PATH_COST);
    assert_eq!(Mrhof::path_cost(Some(&candidate("a", u16::MAX, 1.0))), MAX_PATH_COST);
}

#[test]
fn unknown_link_metric_is_disallowed() {
    init_logging();
    let parent = Parent::<TestSystem>::new(addr("a"), 256, Etx::ZERO);
    assert_eq!(Mrhof::path_cost(Some(&parent)), MAX_PATH_COST);
}

#[test]
fn no_parent_falls_back_to_min_hop_rank_increase() {
    init_logging();
    assert_eq!(Mrhof::path_cost::<TestSystem>(None), DEFAULT_MIN_HOP_RANK_INCREASE);
}

fn cost(bits: u32, rank: u16) -> u16 {
    Mrhof::path_cost(Some(&Parent::<TestSystem>::new(addr("p"), rank, Etx::from_bits(bits))))
}

const ETX_FOUR: u32 = 4 << 16;

proptest! {
    #[test]
    fn below_limit_is_exact(bits in 1u32..ETX_FOUR, rank in 0u16..=(u16::MAX - 511)) {
        let link = ((u64::from(bits) * 128) >> 16) as u16;
        prop_assert_eq!(cost(bits, rank), link + rank);
    }

    #[test]
    fn strictly_increasing_in_rank(bits in 1u32..ETX_FOUR, rank in 0u16..(u16::MAX - 511)) {
        prop_assert!(cost(bits, rank + 1) > cost(bits, rank));
    }

    #[test]
    fn increasing_in_link_metric(bits in 1u32..(ETX_FOUR - 512), rank in 0u16..=(u16::MAX - 511)) {
        // 512 bits is 1/128 ETX, one rank unit
        prop_assert!(cost(bits + 512, rank) > cost(bits, rank));
    }

    #[test]
    fn four_or_more_is_max(bits in ETX_FOUR..=u32::MAX, rank in any::<u16>()) {
        prop_assert_eq!(cost(bits, rank), MAX_PATH_COST);
    }

    #[test]
    fn never_wraps(bits in (1u32 << 16)..ETX_FOUR, gap in 0u16..128) {
        prop_assert_eq!(cost(bits, u16::MAX - gap), MAX_PATH_COST);
    }
}

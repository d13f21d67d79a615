use crate::concepts::rank::{Etx, Rank, INFINITE_RANK};

/// Scales a link ETX into rank units, truncating any fraction towards zero.
///
/// The multiplication is done on the raw fixed-point bits, so the result is
/// exact and platform independent.
///
/// # Examples
///
/// ```
/// use rpl_of::concepts::rank::Etx;
/// use rpl_of::util::scale_etx;
///
/// assert_eq!(scale_etx(Etx::from_num(1), 128), 128);
/// assert_eq!(scale_etx(Etx::from_num(1.5), 128), 192);
/// // 1 + 1/256 is 128.5 in rank units
/// assert_eq!(scale_etx(Etx::from_bits(0x0001_0100), 128), 128);
/// ```
pub fn scale_etx(etx: Etx, multiplier: u16) -> u32 {
    let scaled = (u64::from(etx.to_bits()) * u64::from(multiplier)) >> Etx::FRAC_NBITS;
    // at most (2^32 - 1) * (2^16 - 1) >> 16, which fits
    scaled as u32
}

/// Adds a rank increase to a rank, INFINITE_RANK absorbs.
///
/// # Examples
///
/// ```
/// use rpl_of::concepts::rank::INFINITE_RANK;
/// use rpl_of::util::rank_add;
///
/// assert_eq!(rank_add(256, 256), 512);
/// assert_eq!(rank_add(INFINITE_RANK, 1), INFINITE_RANK);
/// assert_eq!(rank_add(0xFF00, 0x0200), INFINITE_RANK);
/// ```
pub fn rank_add(rank: Rank, increase: u16) -> Rank {
    if rank == INFINITE_RANK {
        INFINITE_RANK
    } else {
        rank.saturating_add(increase)
    }
}

/// Adds a scaled link cost to a rank, None if the sum does not fit in 16 bits.
pub fn checked_cost(link_cost: u32, rank: Rank) -> Option<u16> {
    u16::try_from(link_cost + u32::from(rank)).ok()
}

//! IEEE EUI-64 node identifiers.
//!
//! A node either has an EUI-64 burned into its hardware, or derives a locally
//! administered one from a locally unique id.

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// short (16-bit) IEEE 802.15.4 address
pub const IEEE802154_SHORT_ADDRESS_LEN: usize = 2;
/// long IEEE 802.15.4 address (EUI-64)
pub const IEEE802154_LONG_ADDRESS_LEN: usize = 8;

const MULTICAST_BIT: u8 = 0x01;
const LOCAL_BIT: u8 = 0x02;

/// EUI-64 in network byte order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Eui64(pub [u8; IEEE802154_LONG_ADDRESS_LEN]);

/// Board hook providing the raw material for a node's EUI-64
pub trait Eui64Provider {
    /// EUI-64 stored in hardware, most significant byte first
    fn hardware_eui64(&self) -> Option<[u8; IEEE802154_LONG_ADDRESS_LEN]> {
        None
    }
    /// An id that is unique among the nodes of this network
    fn luid(&self) -> [u8; IEEE802154_LONG_ADDRESS_LEN];
}

impl Eui64 {
    /// Hardware EUI-64 when the board has one, otherwise a locally
    /// administered unicast id derived from the board's LUID.
    pub fn get(provider: &impl Eui64Provider) -> Self {
        match provider.hardware_eui64() {
            Some(bytes) => Self(bytes),
            None => Self::locally_administered(provider.luid()),
        }
    }

    pub fn locally_administered(mut bytes: [u8; IEEE802154_LONG_ADDRESS_LEN]) -> Self {
        bytes[0] &= !MULTICAST_BIT;
        bytes[0] |= LOCAL_BIT;
        Self(bytes)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(value.to_be_bytes())
    }

    pub fn to_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; IEEE802154_LONG_ADDRESS_LEN] {
        &self.0
    }

    pub fn is_multicast(&self) -> bool {
        self.0[0] & MULTICAST_BIT != 0
    }

    /// locally administered, as opposed to globally unique
    pub fn is_local(&self) -> bool {
        self.0[0] & LOCAL_BIT != 0
    }
}

impl From<[u8; IEEE802154_LONG_ADDRESS_LEN]> for Eui64 {
    fn from(value: [u8; IEEE802154_LONG_ADDRESS_LEN]) -> Self {
        Self(value)
    }
}

impl Display for Eui64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

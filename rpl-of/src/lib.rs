//! I/O free objective functions for RPL (RFC 6550).
//!
//! The DODAG manager of a host stack keeps its parents and dodags in
//! [`Dodag`](concepts::dodag::Dodag) records, looks up the advertised objective
//! function in an [`ObjectiveRegistry`](objective::ObjectiveRegistry), and asks
//! it for ranks and parent orderings. Nothing in this crate sends, receives or
//! waits.

pub mod concepts;
pub mod eui64;
pub mod feedback;
pub mod framework;
pub mod objective;
pub mod util;

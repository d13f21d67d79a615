pub mod dodag;
pub mod parent;
pub mod rank;

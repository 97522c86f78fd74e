//! DNS Provider 实现

pub(crate) mod common;
pub mod nfsn;

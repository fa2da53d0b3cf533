//! View-models returned by the explorer server functions.

pub mod address;
pub mod block;
pub mod dashboard;
pub mod network;
pub mod transaction;

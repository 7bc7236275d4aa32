pub mod error;
pub mod id;

mod network;

pub use network::*;

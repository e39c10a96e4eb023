//! Drunken bishop art for key fingerprints

pub mod digest;
pub mod draw;
pub mod error;
pub mod types;
pub mod utils;

pub mod cache;
pub mod storage;

mod client;

pub use client::ClientDirectory;

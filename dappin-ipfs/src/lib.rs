//! IPFS daemon client for dappin.
//!
//! Talks to a Kubo-compatible `/api/v0` RPC: uploads one file, pins it, and
//! optionally lists pins and reads the block back.

mod client;
mod config;
mod operation;

pub use client::IpfsClient;
pub use config::DaemonConfig;
pub use operation::{load_upload, run, run_file, RunOptions};

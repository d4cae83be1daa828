//! Subnet calculation logic.
//!
//! This module contains the arithmetic and its entry points:
//! - [`calculator`] - Network, broadcast, usable range and host counts
//! - [`cidr`] - Raw text and `a.b.c.d/n` entry points
//! - [`batch`] - Evaluating many entries from a file

mod batch;
mod calculator;
mod cidr;

// Re-export public functions
pub use batch::{calculate_batch, read_batch_file, BatchEntry};
pub use calculator::{
    broadcast_addr, compute, compute_subnet, compute_subnet_with_policy, network_addr, HostPolicy,
};
pub use cidr::{calculate, calculate_cidr, parse_cidr};

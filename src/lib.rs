//! cardfold
//!
//! Size-bounded content pagination with clamped cursor navigation and a
//! TUI pager.
//!
//! This is the library root, following a Pure Core / Impure Shell
//! architecture: [`model`], [`pack`], and [`state`] are pure and fully
//! deterministic, while [`source`] and [`view`] touch the filesystem and
//! the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod pack;
pub mod render;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;

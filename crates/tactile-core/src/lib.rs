//! Hardware-independent touch interaction core
//!
//! This crate contains the platform-agnostic interaction logic shared by
//! every button-like and slider-like control: the press/click gesture state
//! machine, the interaction-state composition consumed by styling lookups,
//! and the value mapping used by single and dual-thumb sliders.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for simulators and tests).

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod config;
pub mod constants;
pub mod error;
pub mod ui;

pub use config::InteractionConfig;
pub use error::{DomainError, DomainResult, RangeLayoutError};

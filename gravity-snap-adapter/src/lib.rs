//! Adapter utilities for the `gravity-snap` crate.
//!
//! The `gravity-snap` crate is UI-agnostic and only computes snap targets and scroll deltas.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A simulated single-axis list host ([`LinearLayout`]), handy for tests and for driving
//!   snapping from a TUI that lays out its own rows
//! - Tween-based smooth scrolling ([`Tween`], [`Easing`])
//! - A gesture controller ([`SnapController`]) that turns drag/release events and a clock
//!   into fling, snap and settle
//!
//! No ratatui/egui bindings live here.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod linear;
mod tween;


pub use controller::{DEFAULT_MIN_FLING_VELOCITY, MAX_FLING_VELOCITY, SnapController};
pub use linear::{LinearLayout, SmoothScroll};
pub use tween::{Easing, Tween};

//! A headless edge-snapping helper for scrollable lists.
//!
//! For adapter-level utilities (a simulated list host, tweens, a gesture controller), see the
//! `gravity-snap-adapter` crate.
//!
//! After a fling or drag, a list snapped with this crate settles so that an item's leading
//! edge, trailing edge, or center lines up with a configurable edge of the viewport. The
//! crate covers the algorithmic part: resolving the requested [`Gravity`] to a physical edge,
//! finding the closest item, computing the scroll delta that aligns it, clamping fling
//! distances, and notifying a listener once per settle.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide (via [`GeometryQuery`] and
//! [`SnapHost`]):
//! - the attached items along the scroll axis and the viewport bounds
//! - first/last completely visible indexes and the item count
//! - scroll commands (`scroll_by` / `smooth_scroll_by`)
//! - scroll state changes (forwarded to [`GravitySnapHelper::on_scroll_state_changed`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod distance;
mod error;
mod fling;
mod helper;
mod host;
mod locate;
mod resolve;
mod session;
mod types;


pub use config::{DEFAULT_SCROLL_MS_PER_INCH, FlingLimit, SnapConfig, SnapMode};
pub use distance::{distance, scroll_delta};
pub use error::ConfigError;
pub use fling::{FlingPhysics, clamp_fling};
pub use helper::{GravitySnapHelper, SnapListener, SnapStrategy};
pub use host::{DEFAULT_DENSITY_DPI, GeometryQuery, SnapHost};
pub use locate::{is_at_list_edge, locate};
pub use resolve::resolve;
pub use session::{ScrollState, SettleAction, SnapSessionState};
pub use types::{
    AttachedItem, Axis, AxisSnapshot, Edge, Gravity, ScrollDelta, SnapTarget, ViewportBounds,
};

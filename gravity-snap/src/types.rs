use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::ConfigError;

/// The requested alignment for snapping.
///
/// `Start`/`End` pertain to the horizontal axis and follow the layout direction (RTL swaps
/// them). `Top`/`Bottom` pertain to the vertical axis. `Center` applies to whichever axis the
/// viewport can scroll along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gravity {
    Start,
    Top,
    End,
    Bottom,
    Center,
}

impl Gravity {
    /// Attribute codes, in the order list widgets usually declare them.
    pub const ALL: [Gravity; 5] = [
        Gravity::Start,
        Gravity::Top,
        Gravity::End,
        Gravity::Bottom,
        Gravity::Center,
    ];

    pub fn code(self) -> u8 {
        match self {
            Self::Start => 0,
            Self::Top => 1,
            Self::End => 2,
            Self::Bottom => 3,
            Self::Center => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Top => "top",
            Self::End => "end",
            Self::Bottom => "bottom",
            Self::Center => "center",
        }
    }
}

impl TryFrom<u8> for Gravity {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(ConfigError::InvalidGravity(code))
    }
}

impl FromStr for Gravity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownGravity(s.into()))
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A physical edge of the scroll axis (after RTL resolution), or the axis center.
///
/// `Lead` is the edge with the smaller coordinate (left / top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Lead,
    Trail,
    Center,
}

/// The canonical `(axis, edge)` pair a [`Gravity`] resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapTarget {
    pub axis: Axis,
    pub edge: Edge,
}

/// A signed scroll amount in pixels.
///
/// Positive values scroll towards larger coordinates: content moves left/up by `dx`/`dy`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollDelta {
    pub dx: i32,
    pub dy: i32,
}

impl ScrollDelta {
    pub const ZERO: ScrollDelta = ScrollDelta { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// A delta of `amount` along `axis` and zero on the other axis.
    pub fn on_axis(axis: Axis, amount: i32) -> Self {
        match axis {
            Axis::Horizontal => Self { dx: amount, dy: 0 },
            Axis::Vertical => Self { dx: 0, dy: amount },
        }
    }

    pub fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.dx,
            Axis::Vertical => self.dy,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// An item that is currently laid out, with its decorated bounds along the scroll axis.
///
/// Offsets are physical pixels relative to the viewport's padding-inclusive start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttachedItem {
    pub index: usize,
    pub lead: i32,
    pub trail: i32,
    pub size: i32,
}

impl AttachedItem {
    pub fn new(index: usize, lead: i32, size: i32) -> Self {
        Self {
            index,
            lead,
            trail: lead.saturating_add(size),
            size,
        }
    }

    pub fn center(&self) -> i32 {
        self.lead.saturating_add(self.size / 2)
    }

    /// Returns this item moved by a scroll of `amount` pixels.
    pub fn scrolled_by(&self, amount: i32) -> Self {
        Self {
            index: self.index,
            lead: self.lead.saturating_sub(amount),
            trail: self.trail.saturating_sub(amount),
            size: self.size,
        }
    }
}

/// Viewport bounds along one axis.
///
/// The padding-inclusive start is always `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportBounds {
    pub start_after_padding: i32,
    pub end_after_padding: i32,
    /// Padding-inclusive end (the viewport extent).
    pub end: i32,
}

impl ViewportBounds {
    pub fn new(extent: i32, padding_start: i32, padding_end: i32) -> Self {
        Self {
            start_after_padding: padding_start,
            end_after_padding: extent.saturating_sub(padding_end),
            end: extent,
        }
    }

    pub fn total_space(&self) -> i32 {
        self.end_after_padding - self.start_after_padding
    }

    pub fn padding_end(&self) -> i32 {
        self.end - self.end_after_padding
    }
}

/// A per-query description of the laid-out items along one axis.
///
/// Snapshots are cheap to build and are never cached beyond a single computation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSnapshot {
    pub axis: Axis,
    /// Attached items, in the order the host lays them out.
    pub items: Vec<AttachedItem>,
    pub viewport: ViewportBounds,
    pub item_count: usize,
    pub first_completely_visible: Option<usize>,
    pub last_completely_visible: Option<usize>,
    /// `true` when items flow from the trail edge towards the lead edge (reverse layout,
    /// or a horizontal RTL layout).
    pub reversed: bool,
}

impl AxisSnapshot {
    pub fn item(&self, index: usize) -> Option<&AttachedItem> {
        self.items.iter().find(|it| it.index == index)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the geometry after scrolling by `amount` pixels along this axis.
    ///
    /// Visibility indexes are left as-is; callers that depend on them should re-query the host.
    pub fn scrolled_by(&self, amount: i32) -> Self {
        Self {
            items: self.items.iter().map(|it| it.scrolled_by(amount)).collect(),
            ..self.clone()
        }
    }
}

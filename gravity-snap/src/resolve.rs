use crate::{Axis, Edge, Gravity, SnapTarget};

/// Resolves a gravity to the physical `(axis, edge)` pair the rest of the pipeline works with.
///
/// `Start`/`End` are mirrored when `is_rtl` is set. `Center` picks the horizontal axis when the
/// viewport can scroll horizontally and the vertical axis otherwise.
pub fn resolve(gravity: Gravity, is_rtl: bool, can_scroll_horizontally: bool) -> SnapTarget {
    let (axis, edge) = match gravity {
        Gravity::Start if is_rtl => (Axis::Horizontal, Edge::Trail),
        Gravity::Start => (Axis::Horizontal, Edge::Lead),
        Gravity::End if is_rtl => (Axis::Horizontal, Edge::Lead),
        Gravity::End => (Axis::Horizontal, Edge::Trail),
        Gravity::Top => (Axis::Vertical, Edge::Lead),
        Gravity::Bottom => (Axis::Vertical, Edge::Trail),
        Gravity::Center if can_scroll_horizontally => (Axis::Horizontal, Edge::Center),
        Gravity::Center => (Axis::Vertical, Edge::Center),
    };
    SnapTarget { axis, edge }
}

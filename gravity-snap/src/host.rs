use alloc::vec::Vec;

use crate::{AttachedItem, Axis, AxisSnapshot, ScrollDelta, ViewportBounds};

pub const DEFAULT_DENSITY_DPI: f32 = 160.0;

/// Geometry the host list exposes along its scroll axes.
///
/// All offsets are physical pixels relative to the viewport's padding-inclusive start.
pub trait GeometryQuery {
    /// Whether a layout is available at all. When `false`, every query yields "no target".
    fn has_layout(&self) -> bool {
        true
    }

    fn can_scroll(&self, axis: Axis) -> bool;

    /// Emits the attached items along `axis`, in layout order.
    fn for_each_attached_item(&self, axis: Axis, f: &mut dyn FnMut(AttachedItem));

    fn viewport_bounds(&self, axis: Axis) -> ViewportBounds;

    fn item_count(&self) -> usize;

    fn first_completely_visible_index(&self) -> Option<usize>;

    fn last_completely_visible_index(&self) -> Option<usize>;

    /// Whether items along `axis` flow from the trail edge towards the lead edge.
    fn is_axis_reversed(&self, axis: Axis) -> bool;

    fn is_rtl_locale(&self) -> bool;

    fn density_dpi(&self) -> f32 {
        DEFAULT_DENSITY_DPI
    }

    /// Collects a fresh snapshot of `axis`.
    fn snapshot(&self, axis: Axis) -> AxisSnapshot {
        let mut items = Vec::new();
        self.for_each_attached_item(axis, &mut |it| items.push(it));
        AxisSnapshot {
            axis,
            items,
            viewport: self.viewport_bounds(axis),
            item_count: self.item_count(),
            first_completely_visible: self.first_completely_visible_index(),
            last_completely_visible: self.last_completely_visible_index(),
            reversed: self.is_axis_reversed(axis),
        }
    }
}

/// A host list the helper can attach to and scroll.
pub trait SnapHost: GeometryQuery {
    fn scroll_by(&mut self, delta: ScrollDelta);

    fn smooth_scroll_by(&mut self, delta: ScrollDelta, duration_ms: u32);

    /// Called when the helper starts observing this host's scroll state.
    ///
    /// Hosts typically drop any competing fling handling here and start forwarding scroll state
    /// changes to [`crate::GravitySnapHelper::on_scroll_state_changed`].
    fn on_snap_attached(&mut self) {}

    /// Called before the helper lets go of this host. Stop forwarding scroll state changes.
    fn on_snap_detached(&mut self) {}
}

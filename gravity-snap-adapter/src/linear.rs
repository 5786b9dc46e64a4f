use alloc::vec::Vec;

use gravity_snap::{
    AttachedItem, Axis, DEFAULT_DENSITY_DPI, GeometryQuery, ScrollDelta, SnapHost,
    ViewportBounds,
};

/// A smooth scroll request recorded by [`LinearLayout`], waiting for an adapter to animate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothScroll {
    pub delta: ScrollDelta,
    pub duration_ms: u32,
}

/// A simulated single-axis list that lays out every item and scrolls by a physical offset.
///
/// Items flow from the lead edge (left/top), or from the trail edge when the flow is reversed:
/// a reverse layout, or a horizontal list in an RTL locale (both together cancel out).
/// Padding is physical: `padding.0` sits on the lead side, `padding.1` on the trail side.
///
/// The scroll offset is signed: `scroll_by` with a positive delta moves content towards the
/// lead edge. It is clamped to `[0, max]` for a normal flow and `[-max, 0]` when reversed, where
/// `max` is the content size minus the space between the paddings.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearLayout {
    axis: Axis,
    /// `starts[i]` is the flow offset of item `i`; the last entry is the content size.
    starts: Vec<i32>,
    extent: i32,
    padding: (i32, i32),
    reverse_layout: bool,
    rtl: bool,
    clip_to_padding: bool,
    density_dpi: f32,
    scroll: i32,
    pending: Option<SmoothScroll>,
    observing: bool,
}

impl LinearLayout {
    pub fn new(axis: Axis, extent: u32, item_sizes: impl IntoIterator<Item = u32>) -> Self {
        let mut layout = Self {
            axis,
            starts: Vec::new(),
            extent: to_px(extent),
            padding: (0, 0),
            reverse_layout: false,
            rtl: false,
            clip_to_padding: true,
            density_dpi: DEFAULT_DENSITY_DPI,
            scroll: 0,
            pending: None,
            observing: false,
        };
        layout.set_item_sizes(item_sizes);
        layout
    }

    /// `count` items of `size` pixels each.
    pub fn uniform(axis: Axis, extent: u32, count: usize, size: u32) -> Self {
        Self::new(axis, extent, core::iter::repeat_n(size, count))
    }

    pub fn with_padding(mut self, lead: u32, trail: u32) -> Self {
        self.padding = (to_px(lead), to_px(trail));
        self.clamp_scroll();
        self
    }

    pub fn with_reverse_layout(mut self, reverse_layout: bool) -> Self {
        self.set_reverse_layout(reverse_layout);
        self
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.set_rtl(rtl);
        self
    }

    /// When set (the default), only items intersecting the padded area are attached.
    pub fn with_clip_to_padding(mut self, clip_to_padding: bool) -> Self {
        self.clip_to_padding = clip_to_padding;
        self
    }

    pub fn with_density_dpi(mut self, dpi: f32) -> Self {
        self.density_dpi = dpi;
        self
    }

    pub fn with_scroll_offset(mut self, offset: i32) -> Self {
        self.set_scroll_offset(offset);
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn extent(&self) -> u32 {
        self.extent.max(0) as u32
    }

    pub fn content_size(&self) -> i32 {
        self.starts.last().copied().unwrap_or(0)
    }

    pub fn scroll_offset(&self) -> i32 {
        self.scroll
    }

    /// Whether items flow from the trail edge towards the lead edge.
    pub fn is_flow_reversed(&self) -> bool {
        self.reverse_layout ^ (self.rtl && self.axis == Axis::Horizontal)
    }

    /// The inclusive range the scroll offset is clamped to.
    pub fn scroll_range(&self) -> (i32, i32) {
        let space = self.extent - self.padding.0 - self.padding.1;
        let max = self.content_size().saturating_sub(space).max(0);
        if self.is_flow_reversed() {
            (-max, 0)
        } else {
            (0, max)
        }
    }

    /// Whether a snap helper currently observes this list's scroll state.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn pending_smooth_scroll(&self) -> Option<SmoothScroll> {
        self.pending
    }

    pub fn take_pending_smooth_scroll(&mut self) -> Option<SmoothScroll> {
        self.pending.take()
    }

    pub fn set_item_sizes(&mut self, item_sizes: impl IntoIterator<Item = u32>) {
        self.starts.clear();
        self.starts.push(0);
        let mut acc = 0i32;
        for size in item_sizes {
            acc = acc.saturating_add(to_px(size));
            self.starts.push(acc);
        }
        self.clamp_scroll();
    }

    pub fn set_extent(&mut self, extent: u32) {
        self.extent = to_px(extent);
        self.clamp_scroll();
    }

    pub fn set_reverse_layout(&mut self, reverse_layout: bool) {
        self.reverse_layout = reverse_layout;
        self.clamp_scroll();
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
        self.clamp_scroll();
    }

    pub fn set_scroll_offset(&mut self, offset: i32) {
        let (lo, hi) = self.scroll_range();
        self.scroll = offset.clamp(lo, hi);
    }

    /// Scrolls by `amount` pixels along the list's axis and returns the amount consumed.
    pub fn scroll_along(&mut self, amount: i32) -> i32 {
        let before = self.scroll;
        self.set_scroll_offset(before.saturating_add(amount));
        self.scroll - before
    }

    /// The lead offset of item `index`, whether or not it is attached.
    pub fn item_lead(&self, index: usize) -> Option<i32> {
        let start = *self.starts.get(index)?;
        let end = *self.starts.get(index + 1)?;
        let lead = if self.is_flow_reversed() {
            self.extent - self.padding.1 - end
        } else {
            self.padding.0 + start
        };
        Some(lead - self.scroll)
    }

    fn item(&self, index: usize) -> Option<AttachedItem> {
        let size = self.starts.get(index + 1)? - self.starts.get(index)?;
        Some(AttachedItem::new(index, self.item_lead(index)?, size))
    }

    fn items(&self) -> impl Iterator<Item = AttachedItem> + '_ {
        (0..self.starts.len().saturating_sub(1)).filter_map(|i| self.item(i))
    }

    fn attach_window(&self) -> (i32, i32) {
        if self.clip_to_padding {
            (self.padding.0, self.extent - self.padding.1)
        } else {
            (0, self.extent)
        }
    }

    fn completely_visible(&self) -> impl Iterator<Item = usize> + '_ {
        let (lo, hi) = (self.padding.0, self.extent - self.padding.1);
        self.items()
            .filter(move |it| it.lead >= lo && it.trail <= hi)
            .map(|it| it.index)
    }

    fn clamp_scroll(&mut self) {
        self.set_scroll_offset(self.scroll);
    }
}

impl GeometryQuery for LinearLayout {
    fn can_scroll(&self, axis: Axis) -> bool {
        axis == self.axis
    }

    fn for_each_attached_item(&self, axis: Axis, f: &mut dyn FnMut(AttachedItem)) {
        if axis != self.axis {
            return;
        }
        let (lo, hi) = self.attach_window();
        for item in self.items() {
            if item.lead < hi && item.trail > lo {
                f(item);
            }
        }
    }

    fn viewport_bounds(&self, axis: Axis) -> ViewportBounds {
        if axis != self.axis {
            return ViewportBounds::default();
        }
        ViewportBounds::new(self.extent, self.padding.0, self.padding.1)
    }

    fn item_count(&self) -> usize {
        self.starts.len().saturating_sub(1)
    }

    fn first_completely_visible_index(&self) -> Option<usize> {
        self.completely_visible().min()
    }

    fn last_completely_visible_index(&self) -> Option<usize> {
        self.completely_visible().max()
    }

    fn is_axis_reversed(&self, axis: Axis) -> bool {
        axis == self.axis && self.is_flow_reversed()
    }

    fn is_rtl_locale(&self) -> bool {
        self.rtl
    }

    fn density_dpi(&self) -> f32 {
        self.density_dpi
    }
}

impl SnapHost for LinearLayout {
    fn scroll_by(&mut self, delta: ScrollDelta) {
        self.scroll_along(delta.along(self.axis));
        atrace!(delta = ?delta, offset = self.scroll, "LinearLayout::scroll_by");
    }

    fn smooth_scroll_by(&mut self, delta: ScrollDelta, duration_ms: u32) {
        adebug!(delta = ?delta, duration_ms, "LinearLayout::smooth_scroll_by");
        self.pending = Some(SmoothScroll { delta, duration_ms });
    }

    fn on_snap_attached(&mut self) {
        self.observing = true;
    }

    fn on_snap_detached(&mut self) {
        self.observing = false;
        self.pending = None;
    }
}

fn to_px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

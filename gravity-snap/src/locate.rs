use crate::{AttachedItem, AxisSnapshot, Edge, SnapConfig, ViewportBounds};

/// Returns the index of the attached item whose `edge` (or center) is closest to the matching
/// point of the viewport.
///
/// With `check_list_edge`, no target is returned while the list sits at the edge where snapping
/// would hide the first/last item, unless `config.snap_last_item` is set.
///
/// Ties go to the item encountered first in `snapshot.items`.
pub fn locate(
    snapshot: &AxisSnapshot,
    edge: Edge,
    config: &SnapConfig,
    check_list_edge: bool,
) -> Option<usize> {
    if snapshot.items.is_empty() {
        return None;
    }

    if check_list_edge && !config.snap_last_item && is_at_list_edge(snapshot, edge) {
        strace!(
            axis = ?snapshot.axis,
            edge = ?edge,
            "locate: suppressed at list edge"
        );
        return None;
    }

    let viewport = &snapshot.viewport;
    let mut best: Option<(u32, usize)> = None;
    for item in &snapshot.items {
        let d = distance_to_target(item, viewport, edge, config.snap_to_padding);
        if best.is_none_or(|(min, _)| d < min) {
            best = Some((d, item.index));
        }
    }

    strace!(axis = ?snapshot.axis, edge = ?edge, best = ?best, "locate");
    best.map(|(_, index)| index)
}

/// Whether the list is scrolled to the edge where snapping to `edge` would cut off an item.
///
/// Snapping to the lead edge needs room past the trailing content, so it is blocked once the
/// content's final item is completely visible; the content's final item is the last one unless
/// the flow is reversed. Center snapping is blocked at either end.
pub fn is_at_list_edge(snapshot: &AxisSnapshot, edge: Edge) -> bool {
    let at_last = snapshot.item_count > 0
        && snapshot.last_completely_visible == Some(snapshot.item_count - 1);
    let at_first = snapshot.first_completely_visible == Some(0);

    match (edge, snapshot.reversed) {
        (Edge::Lead, false) | (Edge::Trail, true) => at_last,
        (Edge::Lead, true) | (Edge::Trail, false) => at_first,
        (Edge::Center, _) => at_first || at_last,
    }
}

pub(crate) fn center_point(viewport: &ViewportBounds, snap_to_padding: bool) -> i32 {
    if snap_to_padding {
        viewport.start_after_padding + viewport.total_space() / 2
    } else {
        viewport.end / 2
    }
}

fn distance_to_target(
    item: &AttachedItem,
    viewport: &ViewportBounds,
    edge: Edge,
    snap_to_padding: bool,
) -> u32 {
    match edge {
        Edge::Lead if snap_to_padding => viewport.start_after_padding.abs_diff(item.lead),
        Edge::Lead => item.lead.unsigned_abs(),
        Edge::Trail if snap_to_padding => viewport.end_after_padding.abs_diff(item.trail),
        Edge::Trail => item.trail.abs_diff(viewport.end),
        Edge::Center => item.center().abs_diff(center_point(viewport, snap_to_padding)),
    }
}

use crate::{AttachedItem, AxisSnapshot, Edge, ScrollDelta, SnapConfig};

/// Returns the signed distance the viewport must scroll so that `item`'s `edge` lands on the
/// matching viewport point.
///
/// Without `snap_to_padding`, an item that already sits within half the padding of the
/// viewport edge is aligned with the viewport edge instead of the padding edge, so lists that
/// draw into their padding don't over-scroll near the boundary.
///
/// `Center` always aligns with the center of the padded area, whatever `snap_to_padding` says.
pub fn distance(
    snapshot: &AxisSnapshot,
    edge: Edge,
    item: &AttachedItem,
    config: &SnapConfig,
) -> i32 {
    let viewport = &snapshot.viewport;
    match edge {
        Edge::Lead => {
            let child_lead = item.lead;
            let padded = viewport.start_after_padding;
            if config.snap_to_padding || child_lead >= padded / 2 {
                child_lead - padded
            } else {
                child_lead
            }
        }
        Edge::Trail => {
            let child_trail = item.trail;
            if config.snap_to_padding {
                child_trail - viewport.end_after_padding
            } else if child_trail >= viewport.end - viewport.padding_end() / 2 {
                child_trail - viewport.end
            } else {
                child_trail - viewport.end_after_padding
            }
        }
        Edge::Center => {
            item.center() - (viewport.start_after_padding + viewport.total_space() / 2)
        }
    }
}

/// Like [`distance`], placed on the snapshot's axis.
///
/// Returns `None` when `index` is not attached.
pub fn scroll_delta(
    snapshot: &AxisSnapshot,
    edge: Edge,
    index: usize,
    config: &SnapConfig,
) -> Option<ScrollDelta> {
    let item = snapshot.item(index)?;
    let d = distance(snapshot, edge, item, config);
    Some(ScrollDelta::on_axis(snapshot.axis, d))
}

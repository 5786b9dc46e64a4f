// Example: resolve a gravity, pick the closest item and compute the snap delta.
use gravity_snap::{
    AttachedItem, Axis, AxisSnapshot, Gravity, SnapConfig, ViewportBounds, locate, resolve,
    scroll_delta,
};

fn main() {
    // 10 items of 100px in a 300px viewport, scrolled by 150px.
    let items = (1..=4)
        .map(|i| AttachedItem::new(i, i as i32 * 100 - 150, 100))
        .collect();
    let snapshot = AxisSnapshot {
        axis: Axis::Horizontal,
        items,
        viewport: ViewportBounds::new(300, 0, 0),
        item_count: 10,
        first_completely_visible: Some(2),
        last_completely_visible: Some(3),
        reversed: false,
    };
    let config = SnapConfig::default();

    for gravity in [Gravity::Start, Gravity::End, Gravity::Center] {
        for is_rtl in [false, true] {
            let target = resolve(gravity, is_rtl, true);
            let index = locate(&snapshot, target.edge, &config, true);
            let delta = index.and_then(|i| scroll_delta(&snapshot, target.edge, i, &config));
            println!("{gravity} rtl={is_rtl}: target={target:?} index={index:?} delta={delta:?}");
        }
    }
}

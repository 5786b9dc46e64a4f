use gravity_snap::{Axis, Gravity, GravitySnapHelper};
use gravity_snap_adapter::{LinearLayout, SnapController};

fn main() {
    // Example: a controller driving drag -> fling -> snap -> settle without holding any UI objects.
    //
    // An adapter would:
    // - forward pointer drag/release events
    // - call tick(now_ms) in a frame loop / timer while animating
    // - render the items at the layout's offsets
    let mut helper = GravitySnapHelper::new(Gravity::Top)
        .with_snap_listener(|pos| println!("settled on item {pos}"));
    helper.set_max_fling_distance(Some(600));

    let layout = LinearLayout::uniform(Axis::Vertical, 480, 1_000, 72).with_padding(16, 16);
    let mut c = SnapController::new(helper, layout);

    c.on_drag_start();
    for _ in 0..5 {
        c.on_drag(9);
    }
    c.on_release(0.0, 2_400.0, 0);

    let mut now_ms = 0u64;
    while let Some(off) = c.tick(now_ms) {
        if now_ms % 64 == 0 {
            println!("t={now_ms} off={off} state={:?}", c.scroll_state());
        }
        now_ms += 16;
    }

    println!("done: off={:?}", c.layout().map(|l| l.scroll_offset()));
}

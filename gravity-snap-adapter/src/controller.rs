use gravity_snap::{Axis, Gravity, GravitySnapHelper, ScrollState, SnapMode};

use crate::{Easing, LinearLayout, SmoothScroll, Tween};

/// Releases slower than this (px/s) snap directly instead of flinging.
pub const DEFAULT_MIN_FLING_VELOCITY: f32 = 50.0;

/// Release velocities are clamped to this magnitude (px/s).
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Dragging,
    Flinging,
    Settling,
}

/// A framework-neutral controller that drives a [`GravitySnapHelper`] attached to a
/// [`LinearLayout`] through drag, fling, snap and settle.
///
/// This type does not hold any UI objects or timers. Adapters drive it by calling:
/// - `on_drag_start` / `on_drag` / `on_release` when pointer events occur
/// - `tick(now_ms)` each frame/timer tick while [`Self::is_animating`]
///
/// The helper sees one `Scrolling` report when a gesture (or an animated snap) begins and one
/// `Idle` report when the final snap animation finishes, so its listener fires once per settle.
#[derive(Debug)]
pub struct SnapController {
    helper: GravitySnapHelper<LinearLayout>,
    phase: Phase,
    tween: Option<Tween>,
    /// How much of the active tween has been applied to the layout.
    applied: i64,
    min_fling_velocity: f32,
    snap_easing: Easing,
}

impl SnapController {
    /// Attaches `helper` to `layout` and wraps both.
    pub fn new(mut helper: GravitySnapHelper<LinearLayout>, layout: LinearLayout) -> Self {
        helper.attach(layout);
        Self {
            helper,
            phase: Phase::Idle,
            tween: None,
            applied: 0,
            min_fling_velocity: DEFAULT_MIN_FLING_VELOCITY,
            snap_easing: Easing::Decelerate,
        }
    }

    pub fn with_min_fling_velocity(mut self, px_per_s: f32) -> Self {
        self.min_fling_velocity = px_per_s;
        self
    }

    /// The curve of snap animations. Flings always decelerate.
    pub fn with_snap_easing(mut self, easing: Easing) -> Self {
        self.snap_easing = easing;
        self
    }

    pub fn helper(&self) -> &GravitySnapHelper<LinearLayout> {
        &self.helper
    }

    pub fn helper_mut(&mut self) -> &mut GravitySnapHelper<LinearLayout> {
        &mut self.helper
    }

    pub fn layout(&self) -> Option<&LinearLayout> {
        self.helper.host()
    }

    /// Detaches the layout and hands back both parts.
    pub fn into_parts(mut self) -> (GravitySnapHelper<LinearLayout>, Option<LinearLayout>) {
        let layout = self.helper.detach();
        (self.helper, layout)
    }

    pub fn scroll_state(&self) -> ScrollState {
        match self.phase {
            Phase::Idle => ScrollState::Idle,
            _ => ScrollState::Scrolling,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Stops any fling or snap animation where it is. The list reports `Idle` unless a drag is
    /// in progress.
    pub fn cancel_animation(&mut self) {
        self.tween = None;
        if self.phase != Phase::Dragging {
            self.set_phase(Phase::Idle);
        }
    }

    /// Call this when the pointer goes down and starts dragging the list.
    ///
    /// This cancels any active animation.
    pub fn on_drag_start(&mut self) {
        self.tween = None;
        self.set_phase(Phase::Dragging);
    }

    /// Scrolls the list by `delta` pixels along its axis (positive moves content towards the
    /// lead edge). Returns the amount the layout consumed.
    pub fn on_drag(&mut self, delta: i32) -> i32 {
        if self.phase != Phase::Dragging {
            self.on_drag_start();
        }
        self.helper
            .host_mut()
            .map_or(0, |layout| layout.scroll_along(delta))
    }

    /// Call this when the pointer is released with velocity `(vx, vy)` px/s.
    ///
    /// Slow releases snap right away. Faster ones first fling by the (clamped) ballistic
    /// distance, then snap once [`Self::tick`] finishes the fling. In [`SnapMode::Pager`] a
    /// fast release snaps straight to the neighbouring item in the fling direction.
    pub fn on_release(&mut self, vx: f32, vy: f32, now_ms: u64) {
        let Some(axis) = self.helper.host().map(LinearLayout::axis) else {
            return;
        };
        let v = match axis {
            Axis::Horizontal => vx,
            Axis::Vertical => vy,
        };
        let v = if v.is_finite() {
            v.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY)
        } else {
            0.0
        };
        let speed = abs_f32(v);
        if speed < self.min_fling_velocity {
            self.settle(now_ms);
            return;
        }

        let release = match axis {
            Axis::Horizontal => (v, 0.0),
            Axis::Vertical => (0.0, v),
        };
        if self.helper.config().snap_mode == SnapMode::Pager {
            self.page(release, now_ms);
            return;
        }

        // A fling handler looks for the snap target first, which also pins the active axis
        // for fling clamping.
        self.helper.find_snap_target(true);
        let travel = self
            .helper
            .calculate_scroll_distance(release.0, release.1)
            .along(axis);
        if travel == 0 {
            self.settle(now_ms);
            return;
        }

        // Quadratic ease-out starts at 2 * travel / duration; match the release speed.
        let duration_ms = ceil_ms(2.0 * travel.unsigned_abs() as f32 / speed * 1000.0);
        adebug!(v, travel, duration_ms, "SnapController: fling");
        self.start_tween(i64::from(travel), now_ms, duration_ms, Phase::Flinging);
    }

    /// Advances the active animation.
    ///
    /// Returns the layout's scroll offset while animating, `None` when nothing is animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<i32> {
        let tween = self.tween?;
        let pos = tween.sample(now_ms);
        let step = saturate_i32(pos - self.applied);
        self.applied = pos;
        let consumed = self
            .helper
            .host_mut()
            .map_or(0, |layout| layout.scroll_along(step));

        let blocked = step != 0 && consumed == 0;
        if tween.is_done(now_ms) || blocked {
            atrace!(now_ms, blocked, "SnapController: animation finished");
            self.tween = None;
            match self.phase {
                Phase::Flinging => self.settle(now_ms),
                _ => self.set_phase(Phase::Idle),
            }
        }
        self.layout().map(|l| l.scroll_offset())
    }

    /// Animates the attached item `index` onto the snap edge.
    ///
    /// Returns `false` when the item isn't attached.
    pub fn scroll_to_position(&mut self, index: usize, now_ms: u64) -> bool {
        self.tween = None;
        self.discard_pending();
        if !self.helper.scroll_to_position(index, true) {
            return false;
        }
        self.animate_or_stop(now_ms);
        true
    }

    /// Changes the gravity and animates the list onto the new edge.
    pub fn set_gravity(&mut self, gravity: Gravity, now_ms: u64) {
        self.tween = None;
        self.discard_pending();
        self.helper.set_gravity(gravity, true);
        self.animate_or_stop(now_ms);
    }

    fn page(&mut self, (vx, vy): (f32, f32), now_ms: u64) {
        self.tween = None;
        self.discard_pending();
        let Some(index) = self.helper.find_target_snap_position(vx, vy) else {
            self.settle(now_ms);
            return;
        };
        adebug!(vx, vy, index, "SnapController: page");
        self.helper.scroll_to_position(index, true);
        if !self.animate_pending(now_ms) {
            self.set_phase(Phase::Idle);
        }
    }

    fn animate_or_stop(&mut self, now_ms: u64) {
        if !self.animate_pending(now_ms) && self.phase != Phase::Dragging {
            self.set_phase(Phase::Idle);
        }
    }

    fn settle(&mut self, now_ms: u64) {
        self.tween = None;
        self.discard_pending();
        self.helper.update_snap(true, true);
        if !self.animate_pending(now_ms) {
            self.set_phase(Phase::Idle);
        }
    }

    fn animate_pending(&mut self, now_ms: u64) -> bool {
        let Some(layout) = self.helper.host_mut() else {
            return false;
        };
        let axis = layout.axis();
        let Some(SmoothScroll { delta, duration_ms }) = layout.take_pending_smooth_scroll() else {
            return false;
        };
        let amount = delta.along(axis);
        if amount == 0 {
            return false;
        }
        self.start_tween(
            i64::from(amount),
            now_ms,
            u64::from(duration_ms),
            Phase::Settling,
        );
        true
    }

    fn discard_pending(&mut self) {
        if let Some(layout) = self.helper.host_mut() {
            layout.take_pending_smooth_scroll();
        }
    }

    fn start_tween(&mut self, travel: i64, now_ms: u64, duration_ms: u64, phase: Phase) {
        let easing = match phase {
            Phase::Settling => self.snap_easing,
            _ => Easing::Decelerate,
        };
        self.tween = Some(Tween::new(0, travel, now_ms, duration_ms, easing));
        self.applied = 0;
        self.set_phase(phase);
    }

    fn set_phase(&mut self, phase: Phase) {
        let before = self.scroll_state();
        self.phase = phase;
        let after = self.scroll_state();
        if before != after {
            self.helper.on_scroll_state_changed(after);
        }
    }
}

fn abs_f32(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}

fn ceil_ms(ms: f32) -> u64 {
    if ms.is_nan() || ms <= 0.0 {
        return 0;
    }
    if ms >= u64::MAX as f32 {
        return u64::MAX;
    }
    let whole = ms as u64;
    if (whole as f32) < ms { whole.saturating_add(1) } else { whole }
}

fn saturate_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

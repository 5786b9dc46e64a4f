use alloc::boxed::Box;

use crate::config::{validate_fraction, validate_ms_per_inch};
use crate::{
    Axis, ConfigError, FlingPhysics, GeometryQuery, Gravity, ScrollDelta, ScrollState,
    SettleAction, SnapConfig, SnapHost, SnapMode, SnapSessionState, SnapTarget, clamp_fling,
    distance, locate, resolve, scroll_delta,
};

/// A callback fired with the adapter position of the item the list settled on.
pub type SnapListener = Box<dyn FnMut(usize) + Send>;

/// Ratio between the deceleration phase of a smooth snap and a linear scroll of the same
/// distance.
const DECELERATION_TIME_RATIO: f32 = 0.3356;

/// The hooks a host's snapping machinery calls into.
///
/// Host adapters that already have a "snap helper" slot (find a target view, compute the
/// distance to it, compute a fling's travel) can drive any implementation through this trait.
pub trait SnapStrategy {
    /// Finds the item to snap to, or `None` when no snap should happen.
    fn locate_target(&mut self, check_list_edge: bool) -> Option<usize>;

    /// Computes the scroll needed to align the attached item `index`.
    fn compute_delta(&mut self, index: usize) -> Option<ScrollDelta>;

    /// Computes the total scroll distance of a fling released at `(vx, vy)` px/s.
    fn clamp_fling(&self, vx: f32, vy: f32) -> ScrollDelta;

    /// Finds the item a pager-style fling released at `(vx, vy)` px/s should land on.
    fn find_target_snap_position(&mut self, vx: f32, vy: f32) -> Option<usize>;
}

/// Snaps a host list to an edge (or the center) of its viewport.
///
/// The helper owns its configuration, its per-attachment session state and, while attached,
/// the host itself. It does not hold any UI objects beyond `H`: the adapter forwards scroll
/// state changes to [`Self::on_scroll_state_changed`] and asks for targets/distances when its
/// own snapping machinery needs them (see [`SnapStrategy`]).
pub struct GravitySnapHelper<H> {
    gravity: Gravity,
    config: SnapConfig,
    session: SnapSessionState,
    /// The axis of the most recent query since attach. Fling clamping waits for it.
    active_axis: Option<Axis>,
    listener: Option<SnapListener>,
    host: Option<H>,
}

impl<H> GravitySnapHelper<H> {
    pub fn new(gravity: Gravity) -> Self {
        Self {
            gravity,
            config: SnapConfig::default(),
            session: SnapSessionState::default(),
            active_axis: None,
            listener: None,
            host: None,
        }
    }

    /// Creates a helper from a raw gravity attribute code (`0..=4`).
    pub fn from_raw_gravity(code: u8) -> Result<Self, ConfigError> {
        let gravity = match Gravity::try_from(code) {
            Ok(gravity) => gravity,
            Err(err) => {
                swarn!(code, "GravitySnapHelper: rejected gravity code");
                return Err(err);
            }
        };
        Ok(Self::new(gravity))
    }

    /// Replaces the configuration after validating it.
    pub fn with_config(mut self, config: SnapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn with_snap_listener(mut self, listener: impl FnMut(usize) + Send + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    pub fn session(&self) -> &SnapSessionState {
        &self.session
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn set_snap_listener(&mut self, listener: Option<impl FnMut(usize) + Send + 'static>) {
        self.listener = listener.map(|f| Box::new(f) as _);
    }

    pub fn has_snap_listener(&self) -> bool {
        self.listener.is_some()
    }

    pub fn set_snap_to_padding(&mut self, snap_to_padding: bool) {
        self.config.snap_to_padding = snap_to_padding;
    }

    /// Enables snapping while the list sits at its edge.
    ///
    /// Off by default, because the first/last item can't be completely visible then.
    pub fn set_snap_last_item(&mut self, snap_last_item: bool) {
        self.config.snap_last_item = snap_last_item;
    }

    /// Bounds fling travel in pixels. Clears any size-fraction bound.
    pub fn set_max_fling_distance(&mut self, px: Option<u32>) {
        self.config = self.config.with_max_fling_distance(px);
        sdebug!(limit = ?self.config.fling_limit, "set_max_fling_distance");
    }

    /// Bounds fling travel to a fraction of the viewport. Clears any distance bound.
    pub fn set_max_fling_size_fraction(&mut self, fraction: Option<f32>) -> Result<(), ConfigError> {
        if let Some(f) = fraction {
            validate_fraction(f)?;
        }
        self.config = self.config.with_max_fling_size_fraction(fraction);
        sdebug!(limit = ?self.config.fling_limit, "set_max_fling_size_fraction");
        Ok(())
    }

    pub fn set_snap_mode(&mut self, snap_mode: SnapMode) {
        self.config.snap_mode = snap_mode;
        sdebug!(snap_mode = ?snap_mode, "set_snap_mode");
    }

    pub fn set_scroll_ms_per_inch(&mut self, ms: f32) -> Result<(), ConfigError> {
        validate_ms_per_inch(ms)?;
        self.config.scroll_ms_per_inch = ms;
        Ok(())
    }

    fn notify(&mut self, position: usize) {
        if let Some(listener) = self.listener.as_mut() {
            sdebug!(position, "snap listener");
            listener(position);
        }
    }
}

impl<H: GeometryQuery> GravitySnapHelper<H> {
    fn target_for(&self, host: &H) -> SnapTarget {
        resolve(
            self.gravity,
            self.config.is_rtl,
            host.can_scroll(Axis::Horizontal),
        )
    }

    /// The `(axis, edge)` the current gravity resolves to on the attached host.
    pub fn snap_target(&self) -> Option<SnapTarget> {
        self.host.as_ref().map(|host| self.target_for(host))
    }

    /// Finds the item to snap to and records it as the next snap position.
    ///
    /// `check_list_edge = false` forces a target even while the list sits at its edge.
    pub fn find_snap_target(&mut self, check_list_edge: bool) -> Option<usize> {
        let host = self.host.as_ref()?;
        if !host.has_layout() {
            self.session.record_target(None);
            return None;
        }

        let target = self.target_for(host);
        self.active_axis = Some(target.axis);
        let found = if host.can_scroll(target.axis) {
            let snapshot = host.snapshot(target.axis);
            locate(&snapshot, target.edge, &self.config, check_list_edge)
        } else {
            None
        };

        strace!(
            gravity = %self.gravity,
            target = ?target,
            check_list_edge,
            found = ?found,
            "find_snap_target"
        );
        self.session.record_target(found);
        found
    }

    /// Computes the scroll that aligns the attached item `index` with the snap edge.
    ///
    /// Returns `None` when detached, without layout, or when `index` isn't attached. The
    /// component on an axis the viewport can't scroll is zero.
    pub fn calculate_distance_to_final_snap(&mut self, index: usize) -> Option<ScrollDelta> {
        let host = self.host.as_ref()?;
        if !host.has_layout() {
            return None;
        }

        let target = self.target_for(host);
        self.active_axis = Some(target.axis);
        if !host.can_scroll(target.axis) {
            return Some(ScrollDelta::ZERO);
        }
        let snapshot = host.snapshot(target.axis);
        let delta = scroll_delta(&snapshot, target.edge, index, &self.config);
        strace!(index, delta = ?delta, "calculate_distance_to_final_snap");
        delta
    }

    /// Finds the item a fling released at `(vx, vy)` px/s lands on in pager mode, and records
    /// it as the next snap position.
    ///
    /// That is the attached item closest to the snap edge on the side the fling moves
    /// towards, so a list resting on item `i` pages to `i + 1` or `i - 1`. A zero velocity
    /// along the snap axis keeps the current target.
    pub fn find_target_snap_position(&mut self, vx: f32, vy: f32) -> Option<usize> {
        let host = self.host.as_ref()?;
        if !host.has_layout() {
            self.session.record_target(None);
            return None;
        }

        let target = self.target_for(host);
        let velocity = along(target.axis, vx, vy);
        if velocity == 0.0 || velocity.is_nan() {
            return self.find_snap_target(false);
        }
        self.active_axis = Some(target.axis);
        let found = self.next_page(host, target, velocity).map(|(index, _)| index);
        strace!(vx, vy, target = ?target, found = ?found, "find_target_snap_position");
        self.session.record_target(found);
        found
    }

    /// The attached item ahead of the snap edge in the direction of `velocity`, with its
    /// distance.
    fn next_page(&self, host: &H, target: SnapTarget, velocity: f32) -> Option<(usize, i32)> {
        if !host.can_scroll(target.axis) {
            return None;
        }
        let snapshot = host.snapshot(target.axis);
        let forward = velocity > 0.0;
        let mut best: Option<(usize, i32)> = None;
        for item in &snapshot.items {
            let d = distance(&snapshot, target.edge, item, &self.config);
            if d == 0 || (d > 0) != forward {
                continue;
            }
            if best.is_none_or(|(_, closest)| d.unsigned_abs() < closest.unsigned_abs()) {
                best = Some((item.index, d));
            }
        }
        best
    }

    /// Computes the total travel of a fling released at `(vx, vy)` px/s.
    ///
    /// The configured fling limit applies once a query has established the active axis;
    /// before that (and while detached) this is the unclamped ballistic travel.
    ///
    /// In [`SnapMode::Pager`] the travel is the distance to the item
    /// [`Self::find_target_snap_position`] picks, or zero when there is none.
    pub fn calculate_scroll_distance(&self, vx: f32, vy: f32) -> ScrollDelta {
        if self.config.snap_mode == SnapMode::Pager {
            return self.pager_travel(vx, vy);
        }
        let physics = self
            .host
            .as_ref()
            .map_or_else(FlingPhysics::default, |host| {
                FlingPhysics::for_density_dpi(host.density_dpi())
            });
        let bound = match (self.host.as_ref(), self.active_axis) {
            (Some(host), Some(axis)) => self
                .config
                .fling_limit
                .resolve(host.viewport_bounds(axis).end),
            _ => None,
        };
        let delta = clamp_fling(&physics, vx, vy, bound);
        strace!(vx, vy, bound = ?bound, delta = ?delta, "calculate_scroll_distance");
        delta
    }

    fn pager_travel(&self, vx: f32, vy: f32) -> ScrollDelta {
        let Some(host) = self.host.as_ref().filter(|host| host.has_layout()) else {
            return ScrollDelta::ZERO;
        };
        let target = self.target_for(host);
        let velocity = along(target.axis, vx, vy);
        if velocity == 0.0 || velocity.is_nan() {
            return ScrollDelta::ZERO;
        }
        let delta = self
            .next_page(host, target, velocity)
            .map_or(ScrollDelta::ZERO, |(_, d)| ScrollDelta::on_axis(target.axis, d));
        strace!(vx, vy, delta = ?delta, "pager travel");
        delta
    }

    /// The position the list would snap to right now, if any.
    pub fn current_snapped_position(&mut self) -> Option<usize> {
        self.find_snap_target(true)
    }

    /// Feeds a scroll state change from the host.
    ///
    /// On the `Scrolling -> Idle` transition, the listener is notified exactly once with the
    /// recorded snap position, or with a target found without list-edge suppression. Does
    /// nothing while detached.
    pub fn on_scroll_state_changed(&mut self, state: ScrollState) {
        if self.host.is_none() {
            return;
        }
        match self
            .session
            .on_scroll_state_changed(state, self.listener.is_some())
        {
            SettleAction::None => {}
            SettleAction::Notify(position) => self.notify(position),
            SettleAction::Requery => {
                if let Some(position) = self.find_snap_target(false) {
                    self.notify(position);
                }
            }
        }
    }

    /// Duration of a smooth snap over `delta`, from `scroll_ms_per_inch` and the host density.
    pub fn smooth_scroll_duration(&self, delta: ScrollDelta) -> u32 {
        let dpi = self
            .host
            .as_ref()
            .map_or(crate::DEFAULT_DENSITY_DPI, |host| host.density_dpi());
        if dpi <= 0.0 {
            return 0;
        }
        let ms_per_px = self.config.scroll_ms_per_inch / dpi;
        let travel = delta.dx.unsigned_abs().max(delta.dy.unsigned_abs());
        let scroll_ms = ceil_ms(travel as f32 * ms_per_px);
        ceil_ms(scroll_ms as f32 / DECELERATION_TIME_RATIO)
    }
}

impl<H: SnapHost> GravitySnapHelper<H> {
    /// Attaches to `host`, detaching (and returning) any previously attached host first.
    pub fn attach(&mut self, mut host: H) -> Option<H> {
        let previous = self.detach();
        self.config.is_rtl = host.is_rtl_locale();
        host.on_snap_attached();
        sdebug!(
            gravity = %self.gravity,
            is_rtl = self.config.is_rtl,
            "GravitySnapHelper::attach"
        );
        self.host = Some(host);
        previous
    }

    /// Detaches from the current host and discards the session state.
    pub fn detach(&mut self) -> Option<H> {
        let mut host = self.host.take()?;
        host.on_snap_detached();
        self.session.reset();
        self.active_axis = None;
        sdebug!("GravitySnapHelper::detach");
        Some(host)
    }

    /// Changes the gravity and re-snaps the attached list to the new edge.
    pub fn set_gravity(&mut self, gravity: Gravity, smooth: bool) {
        if self.gravity == gravity {
            return;
        }
        sdebug!(from = %self.gravity, to = %gravity, smooth, "set_gravity");
        self.gravity = gravity;
        self.update_snap(smooth, false);
    }

    /// Like [`Self::set_gravity`], from a raw attribute code. Nothing changes on error.
    pub fn set_raw_gravity(&mut self, code: u8, smooth: bool) -> Result<(), ConfigError> {
        let gravity = match Gravity::try_from(code) {
            Ok(gravity) => gravity,
            Err(err) => {
                swarn!(code, "set_raw_gravity: rejected gravity code");
                return Err(err);
            }
        };
        self.set_gravity(gravity, smooth);
        Ok(())
    }

    /// Locates a target and scrolls the attached list onto it.
    pub fn update_snap(&mut self, smooth: bool, check_list_edge: bool) {
        let Some(index) = self.find_snap_target(check_list_edge) else {
            return;
        };
        if let Some(delta) = self.calculate_distance_to_final_snap(index) {
            self.scroll(delta, smooth);
        }
    }

    /// Scrolls so the attached item `index` is snapped.
    ///
    /// Returns `false` when the item isn't attached (or the helper is detached), so the host
    /// can fall back to its own scroll-to-position.
    pub fn scroll_to_position(&mut self, index: usize, smooth: bool) -> bool {
        match self.calculate_distance_to_final_snap(index) {
            Some(delta) => {
                self.scroll(delta, smooth);
                true
            }
            None => false,
        }
    }

    fn scroll(&mut self, delta: ScrollDelta, smooth: bool) {
        if delta.is_zero() {
            return;
        }
        let duration_ms = self.smooth_scroll_duration(delta);
        let Some(host) = self.host.as_mut() else {
            return;
        };
        if smooth {
            host.smooth_scroll_by(delta, duration_ms);
        } else {
            host.scroll_by(delta);
        }
    }
}

impl<H: GeometryQuery> SnapStrategy for GravitySnapHelper<H> {
    fn locate_target(&mut self, check_list_edge: bool) -> Option<usize> {
        self.find_snap_target(check_list_edge)
    }

    fn compute_delta(&mut self, index: usize) -> Option<ScrollDelta> {
        self.calculate_distance_to_final_snap(index)
    }

    fn clamp_fling(&self, vx: f32, vy: f32) -> ScrollDelta {
        self.calculate_scroll_distance(vx, vy)
    }

    fn find_target_snap_position(&mut self, vx: f32, vy: f32) -> Option<usize> {
        GravitySnapHelper::find_target_snap_position(self, vx, vy)
    }
}

impl<H: core::fmt::Debug> core::fmt::Debug for GravitySnapHelper<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GravitySnapHelper")
            .field("gravity", &self.gravity)
            .field("config", &self.config)
            .field("session", &self.session)
            .field("active_axis", &self.active_axis)
            .field("has_listener", &self.listener.is_some())
            .field("host", &self.host)
            .finish()
    }
}

fn along(axis: Axis, vx: f32, vy: f32) -> f32 {
    match axis {
        Axis::Horizontal => vx,
        Axis::Vertical => vy,
    }
}

fn ceil_ms(ms: f32) -> u32 {
    if ms.is_nan() || ms <= 0.0 {
        return 0;
    }
    if ms >= u32::MAX as f32 {
        return u32::MAX;
    }
    let whole = ms as u32;
    if (whole as f32) < ms { whole.saturating_add(1) } else { whole }
}

/// Scroll state reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollState {
    Idle,
    /// Dragging or settling.
    Scrolling,
}

/// What the owner of a [`SnapSessionState`] should do after a scroll state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleAction {
    None,
    /// Notify the listener with this position.
    Notify(usize),
    /// The list settled without a recorded target: locate again without list-edge
    /// suppression and notify if something is found.
    Requery,
}

/// Per-attachment snap bookkeeping.
///
/// Lives as long as the attachment to one viewport; [`Self::reset`] on detach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapSessionState {
    pub next_snap_position: Option<usize>,
    pub is_scrolling: bool,
}

impl SnapSessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records the outcome of the most recent locate.
    pub fn record_target(&mut self, position: Option<usize>) {
        self.next_snap_position = position;
    }

    /// Advances the `Idle`/`Scrolling` state machine.
    ///
    /// Only the `Scrolling -> Idle` transition produces an action, and only when a listener is
    /// registered. Repeated `Scrolling` reports don't add notifications.
    pub fn on_scroll_state_changed(
        &mut self,
        new_state: ScrollState,
        has_listener: bool,
    ) -> SettleAction {
        let was_scrolling = self.is_scrolling;
        self.is_scrolling = new_state == ScrollState::Scrolling;

        if new_state != ScrollState::Idle || !was_scrolling || !has_listener {
            return SettleAction::None;
        }
        match self.next_snap_position {
            Some(position) => SettleAction::Notify(position),
            None => SettleAction::Requery,
        }
    }
}

//! View controller: owns the current view and its history, and is the only
//! place view state is mutated.
//!
//! Event callbacks never touch the view directly; they produce an
//! [`InputEvent`] that the control loop feeds through [`ViewController::handle`].
//! The controller is a two-phase state machine: `Idle` while waiting for
//! input, `Pending` once an event has changed the view and a render is due.
//! The render loop drains the pending view with [`ViewController::take_pending`].

use log::{debug, info};
use tetrascope_core::{CoreError, ViewHistory, ViewState};

/// Input events consumed by the control loop.
///
/// Zoom coordinates are in plane units, already translated from the display
/// position by the event layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    ZoomIn { x: f64, y: f64 },
    ZoomOut,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
}

pub struct ViewController {
    current: ViewState,
    history: ViewHistory,
    zoom_factor: f64,
    phase: Phase,
}

impl ViewController {
    /// Start at the given view with an empty zoom history.
    ///
    /// The controller begins in `Pending` so the loop renders the initial
    /// view before any input arrives.
    pub fn new(initial: ViewState, zoom_factor: f64) -> Self {
        Self {
            current: initial,
            history: ViewHistory::new(initial),
            zoom_factor,
            phase: Phase::Pending,
        }
    }

    pub fn current(&self) -> &ViewState {
        &self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply an input event to the view state.
    ///
    /// - `ZoomIn` pushes the current view, re-centers at the click point and
    ///   shrinks both half extents by the zoom factor.
    /// - `ZoomOut` restores the most recent snapshot; at the base view it is
    ///   a defined no-op.
    /// - `Close` is not a view transition; the control loop observes it and
    ///   shuts down, so here it is ignored.
    ///
    /// Events arriving while a render is already pending are dropped: the
    /// loop finishes the in-flight cycle before processing further input.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), CoreError> {
        if self.phase == Phase::Pending {
            debug!("dropping {event:?}: render already pending");
            return Ok(());
        }
        match event {
            InputEvent::ZoomIn { x, y } => {
                info!("zooming in {}x at x={x}, y={y}", self.zoom_factor);
                // Snapshot only once the transition is known to succeed, so
                // a rejected zoom leaves the history exactly as it was.
                let zoomed = self.current.zoomed_to(x, y, self.zoom_factor)?;
                self.history.push(self.current);
                self.current = zoomed;
                self.phase = Phase::Pending;
            }
            InputEvent::ZoomOut => match self.history.pop() {
                Some(previous) => {
                    info!(
                        "zooming out to x={}, y={}",
                        previous.center.0, previous.center.1
                    );
                    self.current = previous;
                    self.phase = Phase::Pending;
                }
                None => {
                    debug!("already at the base view, ignoring zoom out");
                }
            },
            InputEvent::Close => {}
        }
        Ok(())
    }

    /// Render-loop consumption: returns the view to render and transitions
    /// back to `Idle`, or None when nothing changed since the last cycle.
    pub fn take_pending(&mut self) -> Option<ViewState> {
        match self.phase {
            Phase::Pending => {
                self.phase = Phase::Idle;
                Some(self.current)
            }
            Phase::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ViewController {
        let initial = ViewState::with_aspect(0.0, 0.0, 5.0, 16, 9).unwrap();
        ViewController::new(initial, 500.0)
    }

    fn drained(controller: &mut ViewController) -> &mut ViewController {
        controller.take_pending();
        controller
    }

    #[test]
    fn starts_pending_so_initial_view_renders() {
        let mut c = controller();
        assert_eq!(c.phase(), Phase::Pending);
        let view = c.take_pending().unwrap();
        assert_eq!(view, *c.current());
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn take_pending_when_idle_returns_none() {
        let mut c = controller();
        c.take_pending();
        assert_eq!(c.take_pending(), None);
    }

    #[test]
    fn zoom_in_recenters_and_goes_pending() {
        let mut c = controller();
        drained(&mut c)
            .handle(InputEvent::ZoomIn { x: 1.0, y: -0.5 })
            .unwrap();
        assert_eq!(c.phase(), Phase::Pending);
        assert_eq!(c.current().center, (1.0, -0.5));
        assert_eq!(c.current().half_extent_x, 5.0 / 500.0);
    }

    #[test]
    fn zoom_out_restores_exact_prior_view() {
        let mut c = controller();
        let before = *drained(&mut c).current();
        c.handle(InputEvent::ZoomIn { x: 0.7, y: 0.2 }).unwrap();
        c.take_pending();
        c.handle(InputEvent::ZoomOut).unwrap();
        assert_eq!(*c.current(), before);
        assert_eq!(c.phase(), Phase::Pending);
    }

    #[test]
    fn three_nested_zooms_unwind_bit_identically() {
        let mut c = controller();
        c.take_pending();

        let mut snapshots = vec![*c.current()];
        for (x, y) in [(1.0, 0.5), (1.002, 0.501), (1.002001, 0.500999)] {
            c.handle(InputEvent::ZoomIn { x, y }).unwrap();
            c.take_pending();
            snapshots.push(*c.current());
        }

        for expected in snapshots.iter().rev().skip(1) {
            c.handle(InputEvent::ZoomOut).unwrap();
            c.take_pending();
            assert_eq!(c.current(), expected);
        }
    }

    #[test]
    fn zoom_out_at_base_is_noop() {
        let mut c = controller();
        let base = *drained(&mut c).current();
        c.handle(InputEvent::ZoomOut).unwrap();
        assert_eq!(*c.current(), base);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn rejected_zoom_leaves_history_untouched() {
        // Extents underflow to zero at extreme depth and the transition is
        // rejected; no stale snapshot may be left behind.
        let initial = ViewState::new(0.0, 0.0, 1e-323, 1e-323).unwrap();
        let mut c = ViewController::new(initial, 500.0);
        let base = *drained(&mut c).current();

        assert!(c.handle(InputEvent::ZoomIn { x: 0.0, y: 0.0 }).is_err());
        assert_eq!(*c.current(), base);
        assert_eq!(c.phase(), Phase::Idle);

        // Zoom out must still be the base-view no-op, not a duplicate pop
        c.handle(InputEvent::ZoomOut).unwrap();
        assert_eq!(*c.current(), base);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn events_while_pending_are_dropped() {
        let mut c = controller();
        // initial render not yet consumed
        c.handle(InputEvent::ZoomIn { x: 2.0, y: 2.0 }).unwrap();
        assert_eq!(c.current().center, (0.0, 0.0));
    }

    #[test]
    fn close_does_not_change_view_state() {
        let mut c = controller();
        let before = *drained(&mut c).current();
        c.handle(InputEvent::Close).unwrap();
        assert_eq!(*c.current(), before);
        assert_eq!(c.phase(), Phase::Idle);
    }
}

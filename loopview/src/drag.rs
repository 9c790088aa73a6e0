//! Scroll-vs-item drag arbitration.
//!
//! A gesture starts `Idle`. Every move checks whether a view registered itself as the
//! candidate through its [`DragHook`] and whether the move's angle to the scroll axis falls in
//! `[threshold, 180 - threshold]`. If so, the item claims the gesture (`ItemDragging`) and the
//! scroll container's bindings are suspended until the gesture ends. Otherwise the container
//! keeps scrolling (`ScrollDragging`) until a later move claims it. A claim lasts until the
//! gesture ends.

use std::cell::Cell;
use std::rc::Rc;

use crate::host::ScrollHost;
use crate::pool::ViewId;
use crate::{Axis, Vec2};

/// A pointer drag sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragEvent {
    pub position: Vec2,
    /// Movement since the previous event.
    pub delta: Vec2,
    /// Movement since the gesture started.
    pub total_delta: Vec2,
}

impl DragEvent {
    pub fn new(position: Vec2, delta: Vec2, total_delta: Vec2) -> Self {
        Self {
            position,
            delta,
            total_delta,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragState {
    #[default]
    Idle,
    ScrollDragging,
    ItemDragging,
}

/// Shared slot holding the view that received the latest pointer-down.
#[derive(Clone, Debug, Default)]
pub struct DragRegistrar {
    candidate: Rc<Cell<Option<ViewId>>>,
}

impl DragRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hook_for(&self, view: ViewId) -> DragHook {
        DragHook {
            view,
            candidate: Rc::clone(&self.candidate),
        }
    }

    pub fn candidate(&self) -> Option<ViewId> {
        self.candidate.get()
    }

    pub fn clear(&self) {
        self.candidate.set(None);
    }
}

/// Installed once on every drag-capable view.
#[derive(Clone, Debug)]
pub struct DragHook {
    view: ViewId,
    candidate: Rc<Cell<Option<ViewId>>>,
}

impl DragHook {
    pub fn view_id(&self) -> ViewId {
        self.view
    }

    /// Registers the owning view as the candidate for the next gesture.
    pub fn pointer_down(&self) {
        self.candidate.set(Some(self.view));
    }
}

/// Angle in degrees between `delta` and `axis`, in `[0, 180]`. A zero delta is 0°.
pub fn drag_angle(delta: Vec2, axis: Axis) -> f32 {
    let len = delta.length();
    if len <= f32::EPSILON {
        return 0.0;
    }
    let unit = axis.unit();
    let cos = ((delta.x * unit.x + delta.y * unit.y) / len).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Whether a move at `angle` degrees lets an item claim the gesture.
pub fn claims_item(angle: f32, threshold_deg: f32) -> bool {
    angle >= threshold_deg && angle <= 180.0 - threshold_deg
}

/// Explicit three-state gesture machine.
///
/// Entering `ItemDragging` stops the container and suspends its bindings; leaving it restores
/// them. `B` is the host's `ScrollHost::Bindings`.
#[derive(Debug)]
pub struct DragArbiter<B> {
    state: DragState,
    claimed: Option<ViewId>,
    suspended: Option<B>,
}

impl<B> Default for DragArbiter<B> {
    fn default() -> Self {
        Self {
            state: DragState::Idle,
            claimed: None,
            suspended: None,
        }
    }
}

impl<B> DragArbiter<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// The view that owns the current gesture, if an item claimed it.
    pub fn claimed(&self) -> Option<ViewId> {
        self.claimed
    }

    /// Decides the owner of a gesture for one move. No-op once an item owns the gesture.
    pub fn open<H>(
        &mut self,
        host: &mut H,
        axis: Axis,
        delta: Vec2,
        candidate: Option<ViewId>,
        threshold_deg: f32,
    ) -> DragState
    where
        H: ScrollHost<Bindings = B>,
    {
        if self.state == DragState::ItemDragging {
            return self.state;
        }
        let angle = drag_angle(delta, axis);
        match candidate {
            Some(view) if claims_item(angle, threshold_deg) => {
                host.stop_movement();
                self.suspended = Some(host.suspend_bindings());
                self.claimed = Some(view);
                self.state = DragState::ItemDragging;
                ltrace!(view = view.get(), angle, "drag: item claimed gesture");
            }
            _ => {
                self.state = DragState::ScrollDragging;
                ltrace!(angle, "drag: gesture left to scroll container");
            }
        }
        self.state
    }

    /// Ends the gesture: restores suspended bindings and returns to `Idle`.
    pub fn close<H>(&mut self, host: &mut H)
    where
        H: ScrollHost<Bindings = B>,
    {
        if let Some(bindings) = self.suspended.take() {
            host.restore_bindings(bindings);
        }
        self.claimed = None;
        self.state = DragState::Idle;
    }
}

//! Drag-and-drop reordering.
//!
//! Tracks one in-flight drag: the dragged event, the hovered target and its
//! above/below half. A drop computes the fully reassembled event list in one
//! shot, so the caller replaces its collection atomically; no event is
//! duplicated or lost and ids are preserved. Every terminal path (drop,
//! drag end, global cancel) funnels through the same idempotent reset.

use chrono::{NaiveDateTime, Timelike};

use crate::models::event::{Event, EventId};
use crate::utils::date;

/// Which half of the hover target the pointer is over; decides whether the
/// dragged event is inserted before or after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropHalf {
    Above,
    Below,
}

/// Ephemeral state of one pointer-drag gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    pub dragged: Option<EventId>,
    pub hover_target: Option<EventId>,
    pub hover_half: Option<DropHalf>,
}

#[derive(Debug, Default)]
pub struct DragReorderController {
    state: DragState,
}

impl DragReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging an event. Holiday events are not draggable; the
    /// request is refused and state stays idle.
    pub fn start_drag(&mut self, events: &[Event], id: &EventId) -> bool {
        let draggable = events
            .iter()
            .find(|event| &event.id == id)
            .is_some_and(|event| !event.is_holiday);
        if !draggable {
            log::debug!("ignoring drag start for non-draggable event {}", id);
            return false;
        }
        self.state = DragState {
            dragged: Some(id.clone()),
            hover_target: None,
            hover_half: None,
        };
        true
    }

    /// Record the hovered target and which half the pointer is in, from the
    /// pointer's Y position against the target element's vertical midpoint.
    pub fn hover_over_event(
        &mut self,
        target: &EventId,
        pointer_y: f32,
        target_top: f32,
        target_height: f32,
    ) {
        if self.state.dragged.is_none() {
            return;
        }
        let midpoint = target_top + target_height / 2.0;
        self.state.hover_target = Some(target.clone());
        self.state.hover_half = Some(if pointer_y < midpoint {
            DropHalf::Above
        } else {
            DropHalf::Below
        });
    }

    /// Pointer left the hovered event without dropping.
    pub fn clear_hover(&mut self) {
        self.state.hover_target = None;
        self.state.hover_half = None;
    }

    /// Drop the dragged event onto `drop_day`.
    ///
    /// Returns the replacement event list, or `None` when the dragged event
    /// no longer exists (the drop is a no-op). Either way the drag state is
    /// reset. With a hovered target the dragged event lands immediately
    /// before (`Above`) or after (`Below`) it inside the day's bucket; with
    /// no resolvable target it is appended to the bucket's end. The list is
    /// reassembled as other-days events followed by the reordered day.
    pub fn drop_on_day(&mut self, events: &[Event], drop_day: NaiveDateTime) -> Option<Vec<Event>> {
        let state = std::mem::take(&mut self.state);
        let dragged_id = state.dragged?;

        let mut dragged = events.iter().find(|e| e.id == dragged_id).cloned()?;
        dragged.date = retarget_date(dragged.date, drop_day);

        let mut others: Vec<Event> = Vec::with_capacity(events.len());
        let mut day_bucket: Vec<Event> = Vec::new();
        for event in events {
            if event.id == dragged_id {
                continue;
            }
            if date::is_same_day(event.date, drop_day) {
                day_bucket.push(event.clone());
            } else {
                others.push(event.clone());
            }
        }

        let target_index = state.hover_target.as_ref().and_then(|target_id| {
            if *target_id == dragged_id {
                return None;
            }
            day_bucket.iter().position(|e| e.id == *target_id)
        });

        let insert_at = match (target_index, state.hover_half) {
            (Some(index), Some(DropHalf::Above)) => index,
            (Some(index), Some(DropHalf::Below)) | (Some(index), None) => index + 1,
            // Empty cell, vanished target, or a non-reorderable (holiday)
            // anchor: append to the end of the day.
            (None, _) => day_bucket.len(),
        };
        let insert_at = insert_at.min(day_bucket.len());
        day_bucket.insert(insert_at, dragged);

        others.extend(day_bucket);
        Some(others)
    }

    /// Reset to idle. Safe to call from any trigger path, any number of
    /// times: explicit drop, drag end, or the global cancel signal.
    pub fn cancel(&mut self) {
        self.state = DragState::default();
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragged.is_some()
    }

    pub fn dragged_id(&self) -> Option<&EventId> {
        self.state.dragged.as_ref()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }
}

/// Move a timestamp to another calendar day, keeping its time-of-day.
fn retarget_date(original: NaiveDateTime, drop_day: NaiveDateTime) -> NaiveDateTime {
    drop_day
        .date()
        .and_hms_opt(original.hour(), original.minute(), original.second())
        .unwrap_or_else(|| drop_day.date().and_hms_opt(0, 0, 0).unwrap_or(drop_day))
}

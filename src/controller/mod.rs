//! Top-level calendar controller.
//!
//! Owns the authoritative state: reference date, view mode, selection, the
//! user event collection, search query, theme context, and the holiday
//! overlay. Renderers pull cells and per-cell events from here; gestures
//! come back in as the method calls below. All mutation is synchronous
//! inside a gesture, so each read sees a complete state.

use chrono::{Datelike, NaiveDateTime};

use crate::models::event::{Event, EventDraft, EventDraftError, EventId};
use crate::models::selection::Selection;
use crate::models::view_mode::ViewMode;
use crate::services::drag::DragReorderController;
use crate::services::grid::{self, DayCell};
use crate::services::holiday::{HolidayService, HolidaySource};
use crate::services::index;
use crate::theme::{BrandColor, ThemeContext};
use crate::utils::date;

mod navigation;

pub struct CalendarController {
    reference_date: NaiveDateTime,
    view_mode: ViewMode,
    selection: Selection,
    /// User events only; the holiday overlay lives in `holidays`.
    events: Vec<Event>,
    next_serial: u64,
    search_query: String,
    theme: ThemeContext,
    holidays: HolidayService,
    drag: DragReorderController,
}

impl CalendarController {
    pub fn new(theme: ThemeContext, source: Box<dyn HolidaySource>, countries: Vec<String>) -> Self {
        let now = date::now_local();
        Self {
            reference_date: now,
            view_mode: ViewMode::Month,
            selection: Selection::Day(now),
            events: Vec::new(),
            next_serial: 0,
            search_query: String::new(),
            theme,
            holidays: HolidayService::new(source, countries),
            drag: DragReorderController::new(),
        }
    }

    // --- read surface ---------------------------------------------------

    pub fn reference_date(&self) -> NaiveDateTime {
        self.reference_date
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// The user event collection in storage order (drag order included).
    pub fn user_events(&self) -> &[Event] {
        &self.events
    }

    /// The cells the current view renders, in display order.
    pub fn visible_cells(&self) -> Vec<DayCell> {
        grid::visible_cells(self.reference_date, self.view_mode)
    }

    /// Header title for the current view.
    pub fn view_title(&self) -> String {
        grid::view_title(self.reference_date, &self.selection, self.view_mode)
    }

    /// Events to render in `day`'s cell: holidays first, then user events in
    /// their stored order, filtered by the active search query.
    pub fn events_for(&self, day: NaiveDateTime) -> Vec<Event> {
        index::day_events(
            self.holidays.holidays(),
            &self.events,
            day,
            &self.search_query,
        )
    }

    // --- selection ------------------------------------------------------

    pub fn select_day(&mut self, day: NaiveDateTime) {
        self.selection.select_day(day);
    }

    pub fn select_column(&mut self, weekday: u8) {
        self.selection.toggle_column(weekday);
    }

    /// Hour rows exist only in Day view; clicks from other views are stale.
    pub fn select_hour(&mut self, hour: u32) {
        if self.view_mode == ViewMode::Day {
            self.selection.select_hour(hour);
        }
    }

    /// (Day, hour) cells exist only in the week views.
    pub fn select_day_hour(&mut self, day: NaiveDateTime, hour: u32) {
        if matches!(self.view_mode, ViewMode::Week | ViewMode::WorkWeek) {
            self.selection.select_day_hour(day, hour);
        }
    }

    // --- events ---------------------------------------------------------

    /// Persist a draft from the event form.
    ///
    /// With `editing` the matching event's mutable fields are replaced in
    /// place, id preserved; an id that no longer exists is a silent no-op.
    /// Without it a fresh id is minted and the event appended. Invalid
    /// drafts are rejected before any state changes.
    pub fn save_event(
        &mut self,
        draft: EventDraft,
        editing: Option<&EventId>,
    ) -> Result<EventId, EventDraftError> {
        draft.validate()?;

        if let Some(id) = editing {
            if let Some(event) = self.events.iter_mut().find(|e| e.id == *id) {
                event.title = draft.title.trim().to_string();
                event.color = draft.color;
                event.priority = draft.priority.ok_or(EventDraftError::MissingPriority)?;
                event.date = draft.date;
            } else {
                log::debug!("edit of missing event {} ignored", id);
            }
            return Ok(id.clone());
        }

        self.next_serial += 1;
        let id = EventId::from_serial(self.next_serial);
        let event = draft.into_event(id.clone())?;
        self.events.push(event);
        Ok(id)
    }

    /// Remove an event by id. Unknown ids no-op, so the call is idempotent.
    /// Holiday events are not part of this collection and cannot be deleted.
    pub fn delete_event(&mut self, id: &EventId) {
        self.events.retain(|event| event.id != *id);
    }

    // --- search ---------------------------------------------------------

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    // --- drag and drop --------------------------------------------------

    /// Begin dragging a user event. Holidays (and unknown ids) are refused.
    pub fn begin_drag(&mut self, id: &EventId) -> bool {
        self.drag.start_drag(&self.events, id)
    }

    pub fn drag_hover(&mut self, target: &EventId, pointer_y: f32, target_top: f32, target_height: f32) {
        self.drag.hover_over_event(target, pointer_y, target_top, target_height);
    }

    pub fn drag_leave(&mut self) {
        self.drag.clear_hover();
    }

    /// Drop the dragged event onto `day`, atomically replacing the event
    /// collection. A drag whose event vanished is a no-op.
    pub fn drop_on(&mut self, day: NaiveDateTime) {
        if let Some(reordered) = self.drag.drop_on_day(&self.events, day) {
            self.events = reordered;
        }
    }

    /// Terminal path for drag-end and the global cancel signal; idempotent.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    // --- theme & holidays -----------------------------------------------

    /// Change the highlight color; holiday styling follows it, so the
    /// overlay re-syncs.
    pub fn set_theme_color(&mut self, color: BrandColor) {
        self.theme.set_current_color(color);
        self.sync_holidays();
    }

    pub fn toggle_theme_mode(&mut self) {
        self.theme.toggle_mode();
    }

    /// Bring the holiday overlay in line with the visible year and the
    /// current highlight color. Cheap when nothing changed; fetch failures
    /// keep the previous overlay.
    pub fn sync_holidays(&mut self) {
        let year = self.reference_date.year();
        let hex = self.theme.highlight_hex();
        self.holidays.sync(year, hex);
    }

    pub fn holiday_events(&self) -> &[Event] {
        self.holidays.holidays()
    }
}

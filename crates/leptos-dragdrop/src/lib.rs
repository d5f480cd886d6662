//! Leptos DragDrop Utilities
//!
//! Sortable lists for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports
//! the finished gesture as an `(old_index, new_index)` pair.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Result of a finished reorder gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortEnd {
    pub old_index: usize,
    pub new_index: usize,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_index_read: ReadSignal<Option<usize>>,
    pub dragging_index_write: WriteSignal<Option<usize>>,
    /// Row currently under the pointer while dragging
    pub over_index_read: ReadSignal<Option<usize>>,
    pub over_index_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_index_read: ReadSignal<Option<usize>>,
    pub pending_index_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set after a drop
const JUST_ENDED_MS: u32 = 100;

pub fn create_sort_signals() -> SortSignals {
    let (dragging_index_read, dragging_index_write) = signal(None::<usize>);
    let (over_index_read, over_index_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_index_read, pending_index_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_index_read,
        dragging_index_write,
        over_index_read,
        over_index_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_index_read,
        pending_index_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Decide whether a release should produce a reorder.
///
/// Nothing happens unless a drag is active over a row, and dropping a row
/// onto itself is not a move.
pub fn resolve_sort_end(dragging: Option<usize>, over: Option<usize>) -> Option<SortEnd> {
    match (dragging, over) {
        (Some(old_index), Some(new_index)) if old_index != new_index => {
            Some(SortEnd { old_index, new_index })
        }
        _ => None,
    }
}

/// What a mouse release means for the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Release {
    pub sort_end: Option<SortEnd>,
    /// Only a real drag suppresses the click that follows the release
    pub was_dragging: bool,
}

pub fn resolve_release(dragging: Option<usize>, over: Option<usize>) -> Release {
    Release {
        sort_end: resolve_sort_end(dragging, over),
        was_dragging: dragging.is_some(),
    }
}

/// Whether the pointer has moved far enough from the press to start a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Clear pending and active drag state
pub fn reset_drag(dnd: &SortSignals) {
    dnd.dragging_index_write.set(None);
    dnd.over_index_write.set(None);
    dnd.pending_index_write.set(None);
}

/// End a drag that actually started; flags `drag_just_ended` briefly
pub fn end_drag(dnd: &SortSignals) {
    reset_drag(dnd);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    Timeout::new(JUST_ENDED_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for a drag handle
/// Records pending drag with start position
pub fn make_on_handle_mousedown(dnd: SortSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses that land on controls inside the handle
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Keep the browser from starting a text selection
        ev.prevent_default();
        dnd.pending_index_write.set(Some(index));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind mousemove on document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_index_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_index_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_index_write.set(pending);
                dnd.over_index_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (become drop position)
pub fn make_on_item_mouseenter(dnd: SortSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_index_read.get_untracked().is_some() {
            dnd.over_index_write.set(Some(index));
        }
    }
}

/// Create mouseleave handler for the list container; dropping outside cancels
pub fn make_on_list_mouseleave(dnd: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_index_read.get_untracked().is_some() {
            dnd.over_index_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: SortSignals, on_sort_end: F)
where
    F: Fn(SortEnd) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let release = resolve_release(
            dnd.dragging_index_read.get_untracked(),
            dnd.over_index_read.get_untracked(),
        );

        // Clear state before the callback so a re-render sees a settled list.
        // Plain clicks must not raise `drag_just_ended`.
        if release.was_dragging {
            end_drag(&dnd);
        } else {
            reset_drag(&dnd);
        }
        if let Some(sort_end) = release.sort_end {
            on_sort_end(sort_end);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

//! Leptos Sortable List Utilities
//!
//! Mouse-driven reordering for flat lists.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Sort state signals for one list
#[derive(Clone, Copy)]
pub struct SortSignals {
    /// Index of the row being dragged
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Index the dragged row would be dropped at
    pub hover_read: ReadSignal<Option<usize>>,
    pub hover_write: WriteSignal<Option<usize>>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_sort_signals() -> SortSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (hover_read, hover_write) = signal(None::<usize>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_read,
        dragging_write,
        hover_read,
        hover_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Move the row at `from` so it ends up at `to`, shifting the rows between.
/// Out-of-range indices leave the list untouched.
pub fn apply_move<T>(rows: &mut Vec<T>, from: usize, to: usize) {
    if from >= rows.len() || to >= rows.len() || from == to {
        return;
    }
    let row = rows.remove(from);
    rows.insert(to, row);
}

/// End drag operation
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_write.set(None);
    sort.hover_write.set(None);
    sort.pending_write.set(None);
}

/// Create mousedown handler for sortable rows
/// Records pending drag with start position
pub fn make_on_mousedown(sort: SortSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            sort.pending_write.set(Some(index));
            sort.start_x_write.set(ev.client_x());
            sort.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && sort.dragging_read.get_untracked().is_none() {
            let start_x = sort.start_x_read.get_untracked();
            let start_y = sort.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                sort.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for rows (drop position target)
pub fn make_on_row_mouseenter(sort: SortSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_read.get_untracked().is_some() {
            sort.hover_write.set(Some(index));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_read.get_untracked().is_some() {
            sort.hover_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` fires on every drag end, even when the row was released where
/// it started (`to` is None then); plain clicks never fire it.
pub fn bind_global_mouseup<F>(sort: SortSignals, on_drop: F)
where
    F: Fn(usize, Option<usize>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = sort.dragging_read.get_untracked();
        let hover = sort.hover_read.get_untracked();

        // Clear pending state first
        sort.pending_write.set(None);

        // If we were actually dragging (not just clicking)
        if let Some(from) = dragging {
            end_drag(&sort);
            on_drop(from, hover);
        } else {
            // Not dragging - just end any pending state
            end_drag(&sort);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(sort);
}

#[cfg(test)]
mod tests {
    use super::apply_move;

    #[test]
    fn move_forward_shifts_rows_between() {
        let mut rows = vec!["a", "b", "c", "d"];
        apply_move(&mut rows, 0, 2);
        assert_eq!(rows, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn move_backward_shifts_rows_between() {
        let mut rows = vec!["a", "b", "c", "d"];
        apply_move(&mut rows, 3, 1);
        assert_eq!(rows, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn dropping_a_row_at_every_position_matches_read_order() {
        // After a drop at position k, the list read top-to-bottom must equal
        // the permutation the gesture produced, for every (from, k) pair.
        let n = 5;
        for from in 0..n {
            for to in 0..n {
                let mut rows: Vec<usize> = (0..n).collect();
                apply_move(&mut rows, from, to);

                let mut expected: Vec<usize> = (0..n).collect();
                let moved = expected.remove(from);
                expected.insert(to, moved);
                assert_eq!(rows, expected, "from={from} to={to}");

                assert_eq!(rows.len(), n);
                assert_eq!(rows[to], from, "dragged row lands at drop position");
            }
        }
    }

    #[test]
    fn same_position_is_a_no_op() {
        let mut rows = vec![1, 2, 3];
        apply_move(&mut rows, 1, 1);
        assert_eq!(rows, vec![1, 2, 3]);
    }

    #[test]
    fn out_of_range_indices_leave_list_untouched() {
        let mut rows = vec![1, 2, 3];
        apply_move(&mut rows, 5, 0);
        assert_eq!(rows, vec![1, 2, 3]);
        apply_move(&mut rows, 0, 3);
        assert_eq!(rows, vec![1, 2, 3]);
    }

    #[test]
    fn empty_and_single_row_lists() {
        let mut empty: Vec<u32> = vec![];
        apply_move(&mut empty, 0, 0);
        assert!(empty.is_empty());

        let mut one = vec![7];
        apply_move(&mut one, 0, 0);
        assert_eq!(one, vec![7]);
    }
}

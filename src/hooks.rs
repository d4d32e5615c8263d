//! Scroll, viewport, and timer hooks. Each hook owns exactly the browser
//! resources it registers and releases them in its effect teardown, so a
//! remounted section never stacks listeners or frame loops.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::{self, NavState, NavTracker, ScrollRange};

const REVEAL_THRESHOLD: f64 = 0.15;

pub fn window_scroll_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

/// One-shot loading gate: true for `delay_ms` after first mount, then false
/// for the rest of the session. The pending timeout is cleared if the owner
/// unmounts early.
#[hook]
pub fn use_loading_gate(delay_ms: i32) -> bool {
    let loading = use_state_eq(|| true);

    {
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let callback = Closure::<dyn FnMut()>::new(move || loading.set(false));
            let handle = window().and_then(|win| {
                win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    delay_ms,
                )
                .ok()
            });

            move || {
                if let (Some(win), Some(id)) = (window(), handle) {
                    win.clear_timeout_with_handle(id);
                }
                drop(callback);
            }
        });
    }

    *loading
}

/// Whether the navbar should currently be off-screen, re-derived from the
/// window scroll stream through [`NavTracker`].
#[hook]
pub fn use_nav_hidden() -> bool {
    let hidden = use_state_eq(|| false);

    {
        let hidden = hidden.clone();
        use_effect_with((), move |_| {
            let mut tracker = NavTracker::new(window_scroll_y());
            let listener = Closure::<dyn FnMut()>::new(move || {
                let state = tracker.observe(window_scroll_y());
                hidden.set(state == NavState::Hidden);
            });

            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *hidden
}

/// Continuous [0, 1] progress of `node` through its scroll range, updated
/// from scroll and resize events.
#[hook]
pub fn use_scroll_progress(node: NodeRef, range: ScrollRange) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with(node, move |node| {
            let node = node.clone();
            let apply = move || {
                if let Some(element) = node.cast::<web_sys::Element>() {
                    let rect = element.get_bounding_client_rect();
                    progress.set(motion::scroll_progress(
                        rect.top(),
                        rect.height(),
                        viewport_height(),
                        range,
                    ));
                }
            };
            apply();

            let listener = Closure::<dyn FnMut()>::new(apply);
            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                let _ = win
                    .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *progress
}

/// Latches to true the first time `node` intersects the viewport and stays
/// true for the lifetime of the mounted instance. The observer disconnects
/// as soon as it fires, so scrolling back out never re-triggers.
#[hook]
pub fn use_reveal_once(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let mut active: Option<(
                IntersectionObserver,
                Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
            )> = None;

            if let Some(element) = node.cast::<web_sys::Element>() {
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        let entered = entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .any(|entry| entry.is_intersecting());
                        if entered {
                            revealed.set(true);
                            observer.disconnect();
                        }
                    },
                );

                let init = IntersectionObserverInit::new();
                init.set_threshold(&js_sys::Array::of1(&REVEAL_THRESHOLD.into()));

                if let Ok(observer) = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &init,
                ) {
                    observer.observe(&element);
                    active = Some((observer, callback));
                }
            }

            move || {
                if let Some((observer, _callback)) = active {
                    observer.disconnect();
                }
            }
        });
    }

    *revealed
}

/// A running requestAnimationFrame loop that reschedules itself until
/// cancelled. Dropping the handle cancels the pending frame, which is how
/// the decorative effects release their loops on unmount.
pub struct FrameLoop {
    // Held only to keep the callback alive for the browser.
    _closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    handle: Rc<Cell<i32>>,
    cancelled: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut(f64) + 'static) -> Self {
        let closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(0));
        let cancelled = Rc::new(Cell::new(false));

        let weak = Rc::downgrade(&closure);
        let next_handle = handle.clone();
        let cancel_flag = cancelled.clone();
        *closure.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            if cancel_flag.get() {
                return;
            }
            frame(timestamp);

            let Some(slot) = weak.upgrade() else {
                return;
            };
            if let Some(win) = window() {
                if let Some(callback) = slot.borrow().as_ref() {
                    if let Ok(id) =
                        win.request_animation_frame(callback.as_ref().unchecked_ref())
                    {
                        next_handle.set(id);
                    }
                }
            }
        }));

        if let Some(win) = window() {
            if let Some(callback) = closure.borrow().as_ref() {
                if let Ok(id) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    handle.set(id);
                }
            }
        }

        Self {
            _closure: closure,
            handle,
            cancelled,
        }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(win) = window() {
            let _ = win.cancel_animation_frame(self.handle.get());
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

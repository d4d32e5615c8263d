//! Decorative hero effects. Purely visual: if the canvas context or window
//! is unavailable the component renders an inert element and the rest of the
//! page is unaffected.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::{viewport_height, viewport_width, FrameLoop};
use crate::motion::{self, Glide};

const DOT_SPACING: f64 = 48.0;
const DOT_COLOR: &str = "#8a8a82";
const DOT_MIN_RADIUS: f64 = 1.2;
const DOT_RADIUS_JITTER: f64 = 1.3;

struct Dot {
    x: f64,
    y: f64,
    phase: f64,
    radius: f64,
}

fn build_dots(width: f64, height: f64) -> Vec<Dot> {
    let mut dots = Vec::new();
    let mut y = DOT_SPACING / 2.0;
    while y < height {
        let mut x = DOT_SPACING / 2.0;
        while x < width {
            dots.push(Dot {
                x,
                y,
                phase: js_sys::Math::random() * TAU,
                radius: DOT_MIN_RADIUS + js_sys::Math::random() * DOT_RADIUS_JITTER,
            });
            x += DOT_SPACING;
        }
        y += DOT_SPACING;
    }
    dots
}

fn canvas_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Full-bleed canvas of softly pulsing dots behind the hero. The render loop
/// and the resize listener are both released on unmount.
#[function_component(DotField)]
pub fn dot_field() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let mut resources: Option<(FrameLoop, Closure<dyn FnMut()>)> = None;

            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Some(context) = canvas_context(&canvas) {
                    let dots = Rc::new(RefCell::new(Vec::new()));
                    let size = Rc::new(Cell::new((0.0_f64, 0.0_f64)));

                    let fit = {
                        let canvas = canvas.clone();
                        let dots = dots.clone();
                        let size = size.clone();
                        move || {
                            let width = f64::from(canvas.client_width().max(0));
                            let height = f64::from(canvas.client_height().max(0));
                            canvas.set_width(width as u32);
                            canvas.set_height(height as u32);
                            size.set((width, height));
                            *dots.borrow_mut() = build_dots(width, height);
                        }
                    };
                    fit();

                    let resize = Closure::<dyn FnMut()>::new(fit);
                    if let Some(win) = window() {
                        let _ = win.add_event_listener_with_callback(
                            "resize",
                            resize.as_ref().unchecked_ref(),
                        );
                    }

                    context.set_fill_style_str(DOT_COLOR);
                    let frame_loop = FrameLoop::start(move |time| {
                        let (width, height) = size.get();
                        context.clear_rect(0.0, 0.0, width, height);
                        for dot in dots.borrow().iter() {
                            context.set_global_alpha(motion::pulse_alpha(dot.phase, time));
                            context.begin_path();
                            let _ = context.arc(dot.x, dot.y, dot.radius, 0.0, TAU);
                            context.fill();
                        }
                    });

                    resources = Some((frame_loop, resize));
                }
            }

            move || {
                if let Some((frame_loop, resize)) = resources {
                    if let Some(win) = window() {
                        let _ = win.remove_event_listener_with_callback(
                            "resize",
                            resize.as_ref().unchecked_ref(),
                        );
                    }
                    drop(frame_loop);
                }
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class="dot-field" aria-hidden="true"></canvas>
    }
}

/// Radial gradient that trails the pointer. Raw cursor coordinates feed a
/// damped follower each frame, so the glow drifts rather than snaps.
#[function_component(PointerGlow)]
pub fn pointer_glow() -> Html {
    let glow_ref = use_node_ref();

    {
        let glow_ref = glow_ref.clone();
        use_effect_with((), move |_| {
            let mut resources: Option<(FrameLoop, Closure<dyn FnMut(MouseEvent)>)> = None;

            if let Some(element) = glow_ref.cast::<HtmlElement>() {
                let rest = (viewport_width() / 2.0, viewport_height() / 3.0);
                let target = Rc::new(Cell::new(rest));

                let listener = {
                    let target = target.clone();
                    Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                        target.set((f64::from(event.client_x()), f64::from(event.client_y())));
                    })
                };
                if let Some(win) = window() {
                    let _ = win.add_event_listener_with_callback(
                        "pointermove",
                        listener.as_ref().unchecked_ref(),
                    );
                }

                let mut glide = Glide::new(rest.0, rest.1);
                let frame_loop = FrameLoop::start(move |_time| {
                    let (x, y) = target.get();
                    glide.step(x, y);
                    let style = element.style();
                    let _ = style.set_property("--glow-x", &format!("{:.1}px", glide.x));
                    let _ = style.set_property("--glow-y", &format!("{:.1}px", glide.y));
                });

                resources = Some((frame_loop, listener));
            }

            move || {
                if let Some((frame_loop, listener)) = resources {
                    if let Some(win) = window() {
                        let _ = win.remove_event_listener_with_callback(
                            "pointermove",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    drop(frame_loop);
                }
            }
        });
    }

    html! {
        <div ref={glow_ref} class="pointer-glow" aria-hidden="true"></div>
    }
}

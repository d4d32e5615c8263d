//! Theme selection and persistence. `ThemeSwitcher` is a self-contained
//! fixed control that can be mounted anywhere; the composed page does not
//! mount it today, but it stays fully functional on its own.

use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Storage};
use yew::prelude::*;

use crate::content::Theme;

const THEME_KEY: &str = "site-theme";

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_theme() -> Option<Theme> {
    let value = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
    Theme::from_str(&value)
}

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn resolve_theme() -> Theme {
    read_stored_theme().unwrap_or_else(|| {
        if system_prefers_dark() {
            Theme::Moon
        } else {
            Theme::Light
        }
    })
}

pub fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Swap themes inside `document.startViewTransition` when the browser offers
/// it, falling back to a plain attribute swap everywhere else.
pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::<dyn FnMut()>::new(move || {
        apply_theme(theme);
    });

    if start_view_transition
        .call1(&document_js, callback.as_ref().unchecked_ref())
        .is_ok()
    {
        // The browser invokes the callback asynchronously; hand it over.
        callback.forget();
    } else {
        apply_theme(theme);
    }
}

pub fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher() -> Html {
    let current = use_state_eq(resolve_theme);

    {
        let initial = *current;
        use_effect_with((), move |_| {
            apply_theme(initial);
            || ()
        });
    }

    let pick = {
        let current = current.clone();
        Callback::from(move |theme: Theme| {
            persist_theme(theme);
            apply_theme_with_transition(theme);
            current.set(theme);
        })
    };

    html! {
        <div class="theme-switcher">
            <div class="theme-switcher-title">{"/Choose your theme"}</div>
            <div class="theme-switcher-options">
                { for Theme::ALL.iter().map(|theme| {
                    let theme = *theme;
                    let active = *current == theme;
                    let onclick = {
                        let pick = pick.clone();
                        Callback::from(move |_| pick.emit(theme))
                    };
                    html! {
                        <button
                            type="button"
                            key={theme.as_str()}
                            class={classes!("theme-btn", active.then_some("is-active"))}
                            aria-pressed={active.to_string()}
                            {onclick}
                        >
                            <span class="theme-glyph" aria-hidden="true">{theme.glyph()}</span>
                            {theme.label()}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

//! Page composition: the loading gate, the auto-hiding navbar, the sections
//! in fixed order, and the footer.

use web_sys::window;
use yew::prelude::*;

use crate::content;
use crate::hooks::{use_loading_gate, use_nav_hidden};
use crate::sections::{About, Contact, Hero, Skills, Work};

const LOADING_DELAY_MS: i32 = 1500;

#[derive(Properties, PartialEq)]
struct LoadingScreenProps {
    visible: bool,
}

#[function_component(LoadingScreen)]
fn loading_screen(props: &LoadingScreenProps) -> Html {
    if !props.visible {
        return Html::default();
    }

    html! {
        <div class="loading-screen">
            <span class="loading-text">{":p"}</span>
        </div>
    }
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let hidden = use_nav_hidden();

    html! {
        <nav
            class={classes!("navbar", hidden.then_some("navbar-hidden"))}
            aria-label="Primary"
        >
            <div class="navbar-inner">
                <a class="navbar-logo intro-fade" style="animation-delay: 0.5s;" href="#">
                    {content::OWNER_INITIALS}
                </a>
                <div class="navbar-links intro-fade" style="animation-delay: 0.6s;">
                    { for content::NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href}>{link.label}</a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <span class="footer-copyright">
                    {format!("© {year} {}.", content::OWNER_NAME)}
                </span>
                <span class="footer-note">{"Open to opportunities"}</span>
            </div>
        </footer>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let loading = use_loading_gate(LOADING_DELAY_MS);

    html! {
        <div class="page">
            <LoadingScreen visible={loading} />
            <div class="noise-overlay" aria-hidden="true"></div>
            <Navbar />
            <main>
                <Hero />
                <div class="section-divider" aria-hidden="true"></div>
                <About />
                <div class="section-divider" aria-hidden="true"></div>
                <Work />
                <div class="section-divider" aria-hidden="true"></div>
                <Skills />
                <div class="section-divider" aria-hidden="true"></div>
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

//! The page sections in composition order: hero, about, work, skills,
//! contact. Each section reads its own scroll progress and reveal state;
//! nothing is shared across sections.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{
    self, AboutTrait, ContactIcon, MiniProject, Project, SkillGroup, VISIBLE_TECH_TAGS,
};
use crate::effects::{DotField, PointerGlow};
use crate::hooks::{use_reveal_once, use_scroll_progress};
use crate::motion::{self, ScrollRange};

const HERO_OPACITY_IN: [f64; 2] = [0.0, 0.5];
const HERO_OPACITY_OUT: [f64; 2] = [1.0, 0.0];
const HERO_Y_OUT: [f64; 2] = [0.0, 150.0];
const ABOUT_Y_OUT: [f64; 2] = [120.0, -50.0];
const PROJECT_IMAGE_Y_OUT: [f64; 2] = [40.0, -40.0];
const UNIT: [f64; 2] = [0.0, 1.0];

fn reveal(on: bool) -> Classes {
    classes!("reveal", on.then_some("is-revealed"))
}

fn delay_style(seconds: f64) -> String {
    format!("transition-delay: {seconds:.2}s;")
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let container_ref = use_node_ref();
    let progress = use_scroll_progress(container_ref.clone(), ScrollRange::ExitTop);

    let opacity = motion::piecewise(&HERO_OPACITY_IN, &HERO_OPACITY_OUT, progress);
    let y = motion::piecewise(&UNIT, &HERO_Y_OUT, progress);
    let drift = format!("opacity: {opacity:.3}; transform: translateY({y:.1}px);");

    html! {
        <section ref={container_ref} class="hero">
            <DotField />
            <PointerGlow />
            <svg class="hero-sigil" viewBox="0 0 120 120" aria-hidden="true">
                <circle class="sigil-ring" cx="60" cy="60" r="52" />
                <path class="sigil-stroke" d="M30 78 L60 36 L90 78" />
            </svg>
            <div class="hero-inner" style={drift}>
                <div class="intro-rise" style="animation-delay: 0.2s;">
                    <span class="eyebrow">{"Hi, I'm"}</span>
                    <h1 class="hero-name">{content::OWNER_NAME}{"."}</h1>
                </div>
                <p class="hero-lead intro-rise" style="animation-delay: 0.4s;">
                    {"Full Stack Developer who builds scalable web applications from scratch."}
                </p>
                <p class="hero-sub intro-rise" style="animation-delay: 0.6s;">
                    {"I think in products, not just code. End-to-end solutions with clean architecture."}
                </p>
                <div class="intro-rise" style="animation-delay: 0.8s;">
                    <a class="hero-cta" href="#work">
                        {"View My Work"}
                        <span class="cta-arrow" aria-hidden="true">{"↓"}</span>
                    </a>
                </div>
            </div>
            <div class="scroll-cue intro-fade" style="animation-delay: 1.5s;" aria-hidden="true">
                <span class="scroll-cue-line"></span>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TraitCardProps {
    item: AboutTrait,
    index: usize,
}

#[function_component(TraitCard)]
fn trait_card(props: &TraitCardProps) -> Html {
    let card_ref = use_node_ref();
    let revealed = use_reveal_once(card_ref.clone());
    let delay = 0.2 + props.index as f64 * 0.1;

    html! {
        <div ref={card_ref} class={classes!(reveal(revealed), "trait")} style={delay_style(delay)}>
            <span class="trait-number">{format!("0{}", props.index + 1)}</span>
            <h3 class="trait-title">{props.item.title}</h3>
            <p class="trait-copy">{props.item.description}</p>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let container_ref = use_node_ref();
    let progress = use_scroll_progress(container_ref.clone(), ScrollRange::Traverse);
    let text_y = motion::piecewise(&UNIT, &ABOUT_Y_OUT, progress);

    let header_ref = use_node_ref();
    let header_on = use_reveal_once(header_ref.clone());
    let statement_ref = use_node_ref();
    let statement_on = use_reveal_once(statement_ref.clone());

    html! {
        <section ref={container_ref} id="about" class="about">
            <div class="about-inner" style={format!("transform: translateY({text_y:.1}px);")}>
                <div ref={header_ref} class={reveal(header_on)}>
                    <div class="about-heading">
                        <h2>{"About"}</h2>
                        <span class="about-heading-aside">{"mee.."}</span>
                    </div>
                </div>
                <div ref={statement_ref} class={reveal(statement_on)} style={delay_style(0.1)}>
                    <p class="about-statement">
                        <span class="about-name">{content::OWNER_NAME}</span>
                        {" "}
                        <span class="pronoun">{"(HE/HIM)"}</span>
                        {" is a Full Stack Developer specializing in MERN stack with a focus on \
                          building complete, production-ready applications. From authentication \
                          systems to payment integrations, I handle the full spectrum."}
                    </p>
                </div>
                <div class="trait-grid">
                    { for content::ABOUT_TRAITS.iter().enumerate().map(|(index, item)| html! {
                        <TraitCard key={item.title} item={*item} {index} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: usize,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let article_ref = use_node_ref();
    let revealed = use_reveal_once(article_ref.clone());
    let progress = use_scroll_progress(article_ref.clone(), ScrollRange::Traverse);
    let image_y = motion::piecewise(&UNIT, &PROJECT_IMAGE_Y_OUT, progress);

    let media_ref = use_node_ref();
    let tilt = use_state_eq(String::new);

    let onmousemove = {
        let media_ref = media_ref.clone();
        let tilt = tilt.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(element) = media_ref.cast::<web_sys::Element>() {
                let rect = element.get_bounding_client_rect();
                let pointer = motion::tilt_for_pointer(
                    f64::from(event.client_x()) - rect.left(),
                    f64::from(event.client_y()) - rect.top(),
                    rect.width(),
                    rect.height(),
                );
                tilt.set(motion::tilt_style(pointer));
            }
        })
    };
    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(String::new()))
    };

    let project = &props.project;
    let overflow = project.hidden_tech_count();

    html! {
        <article ref={article_ref} class={classes!(reveal(revealed), "project-card")}>
            <div class="project-grid">
                { project.image.map(|src| html! {
                    <div
                        ref={media_ref}
                        class="project-media"
                        style={(*tilt).clone()}
                        {onmousemove}
                        {onmouseleave}
                    >
                        <div
                            class="project-media-frame"
                            style={format!("transform: translateY({image_y:.1}px);")}
                        >
                            <img src={src} alt={project.title} loading="lazy" />
                        </div>
                    </div>
                }).unwrap_or_default() }
                <div class="project-copy">
                    <div class="project-meta">
                        <span class="project-number">
                            {format!("Project {:02}", props.index + 1)}
                        </span>
                        <span class="meta-rule" aria-hidden="true"></span>
                        <span class="project-category">{project.category}</span>
                    </div>
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-outcome">{project.outcome}</p>
                    <ul class="tech-tags">
                        { for project.technologies.iter().take(VISIBLE_TECH_TAGS).map(|tech| html! {
                            <li key={*tech} class="tech-tag">{*tech}</li>
                        }) }
                        { if overflow > 0 {
                            html! { <li class="tech-tag tech-more">{format!("+{overflow}")}</li> }
                        } else {
                            Html::default()
                        } }
                    </ul>
                    <div class="project-links">
                        { project.live_link.map(|href| html! {
                            <ExternalLink {href} label="View Live" />
                        }).unwrap_or_default() }
                        { project.github_link.map(|href| html! {
                            <ExternalLink {href} label="View Code" />
                        }).unwrap_or_default() }
                    </div>
                </div>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct MiniCardProps {
    mini: MiniProject,
    index: usize,
}

#[function_component(MiniCard)]
fn mini_card(props: &MiniCardProps) -> Html {
    let card_ref = use_node_ref();
    let revealed = use_reveal_once(card_ref.clone());
    let delay = props.index as f64 * 0.1;
    let mini = &props.mini;

    html! {
        <a
            ref={card_ref}
            class={classes!(reveal(revealed), "mini-card")}
            style={delay_style(delay)}
            href={mini.link}
            target="_blank"
            rel="noopener noreferrer"
        >
            <div class="mini-card-head">
                <h4>{mini.title}</h4>
                <span class="mini-card-arrow" aria-hidden="true">{"↗"}</span>
            </div>
            <p class="mini-card-copy">{mini.description}</p>
            <span class="mini-card-tech">{mini.tech}</span>
        </a>
    }
}

#[function_component(Work)]
pub fn work() -> Html {
    let header_ref = use_node_ref();
    let header_on = use_reveal_once(header_ref.clone());
    let minis_ref = use_node_ref();
    let minis_on = use_reveal_once(minis_ref.clone());

    html! {
        <section id="work" class="work">
            <div class="work-inner">
                <div ref={header_ref} class={reveal(header_on)}>
                    <span class="section-eyebrow">{"Selected Work"}</span>
                    <h2 class="work-title">{"Projects"}</h2>
                    <p class="work-lead">{"Not just what I built, but how I think."}</p>
                </div>
                <div class="project-list">
                    { for content::PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.title} project={*project} {index} />
                    }) }
                </div>
                <div ref={minis_ref} class={classes!(reveal(minis_on), "mini-block")}>
                    <span class="section-eyebrow">{"Other Work"}</span>
                    <h3 class="mini-title">{"Mini Projects"}</h3>
                    <div class="mini-grid">
                        { for content::MINI_PROJECTS.iter().enumerate().map(|(index, mini)| html! {
                            <MiniCard key={mini.title} mini={*mini} {index} />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillCardProps {
    group: SkillGroup,
    delay: f64,
    wide: bool,
}

#[function_component(SkillCard)]
fn skill_card(props: &SkillCardProps) -> Html {
    let card_ref = use_node_ref();
    let revealed = use_reveal_once(card_ref.clone());
    let group = &props.group;
    let style = format!(
        "background-color: {}; transition-delay: {:.2}s;",
        group.bg, props.delay
    );

    html! {
        <div
            ref={card_ref}
            class={classes!(
                reveal(revealed),
                "skill-card",
                if props.wide { "skill-card-wide" } else { "skill-card-narrow" }
            )}
            {style}
        >
            <div>
                <h3 class="skill-card-title">{group.title}</h3>
                <p class="skill-card-copy">{group.description}</p>
            </div>
            <ul class="skill-tags">
                { for group.skills.iter().map(|skill| html! {
                    <li key={*skill} class="skill-tag">{*skill}</li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let header_ref = use_node_ref();
    let header_on = use_reveal_once(header_ref.clone());

    html! {
        <section id="skills" class="skills">
            <div class="skills-inner">
                <div ref={header_ref} class={reveal(header_on)}>
                    <span class="section-eyebrow">{"Skills"}</span>
                    <h2 class="skills-title">{"What I Work With"}</h2>
                    <p class="skills-lead">
                        {"Technologies I've used in real production systems — not theory."}
                    </p>
                </div>
                <div class="skill-row skill-row-top">
                    { for content::TOP_SKILLS.iter().enumerate().map(|(index, group)| {
                        let delay = index as f64 * 0.08;
                        html! {
                            <SkillCard key={group.title} group={*group} {delay} wide={true} />
                        }
                    }) }
                </div>
                <div class="skill-row skill-row-bottom">
                    { for content::BOTTOM_SKILLS.iter().enumerate().map(|(index, group)| {
                        let delay = 0.15 + index as f64 * 0.08;
                        html! {
                            <SkillCard key={group.title} group={*group} {delay} wide={false} />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

fn contact_icon(icon: ContactIcon) -> Html {
    match icon {
        ContactIcon::Mail => html! {
            <svg class="contact-icon" viewBox="0 0 24 24" aria-hidden="true">
                <rect x="2" y="5" width="20" height="14" rx="2" />
                <path d="M2 7l10 6 10-6" />
            </svg>
        },
        ContactIcon::GitHub => html! {
            <svg class="contact-icon" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M12 2a10 10 0 0 0-3.2 19.5c.5.1.7-.2.7-.5v-1.8c-2.8.6-3.4-1.2-3.4-1.2-.5-1.2-1.1-1.5-1.1-1.5-.9-.6.1-.6.1-.6 1 .1 1.5 1 1.5 1 .9 1.5 2.4 1.1 3 .8.1-.6.4-1.1.6-1.3-2.2-.3-4.6-1.1-4.6-5a3.9 3.9 0 0 1 1-2.7 3.6 3.6 0 0 1 .1-2.7s.9-.3 2.8 1a9.4 9.4 0 0 1 5 0c1.9-1.3 2.8-1 2.8-1a3.6 3.6 0 0 1 .1 2.7 3.9 3.9 0 0 1 1 2.7c0 3.9-2.4 4.7-4.6 5 .4.3.7.9.7 1.9v2.7c0 .3.2.6.7.5A10 10 0 0 0 12 2z" />
            </svg>
        },
        ContactIcon::LinkedIn => html! {
            <svg class="contact-icon" viewBox="0 0 24 24" aria-hidden="true">
                <rect x="2" y="9" width="4" height="13" />
                <circle cx="4" cy="4" r="2" />
                <path d="M10 9h4v2a4.4 4.4 0 0 1 4-2c3 0 4 2 4 5v8h-4v-7c0-1.7-.6-3-2.2-3S13 13.3 13 15v7h-3z" />
            </svg>
        },
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let header_ref = use_node_ref();
    let header_on = use_reveal_once(header_ref.clone());
    let cta_ref = use_node_ref();
    let cta_on = use_reveal_once(cta_ref.clone());
    let links_ref = use_node_ref();
    let links_on = use_reveal_once(links_ref.clone());

    html! {
        <section id="contact" class="contact">
            <div class="contact-spotlight" aria-hidden="true"></div>
            <div class="contact-inner">
                <div ref={header_ref} class={reveal(header_on)}>
                    <span class="section-eyebrow">{"Contact"}</span>
                    <h2 class="contact-title">{"Let's Work"}<br />{"Together"}</h2>
                    <p class="contact-lead">
                        {"Have a project in mind or looking for a developer? \
                          I'm open to opportunities and collaborations."}
                    </p>
                </div>
                <a
                    ref={cta_ref}
                    class={classes!(reveal(cta_on), "contact-cta")}
                    style={delay_style(0.2)}
                    href={format!("mailto:{}", content::CONTACT_EMAIL)}
                >
                    { contact_icon(ContactIcon::Mail) }
                    {"Send me an email"}
                </a>
                <div class="contact-divider" aria-hidden="true"></div>
                <div
                    ref={links_ref}
                    class={classes!(reveal(links_on), "contact-links")}
                    style={delay_style(0.35)}
                >
                    { for content::CONTACT_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            class="contact-link"
                            href={link.href}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { contact_icon(link.icon) }
                            {link.label}
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}

use std::cell::RefCell;

use log::info;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::floating_nav::FloatingNav;
use crate::components::footer::Footer;
use crate::components::progress_bar::ProgressBar;
use crate::config;
use crate::scroll::controller::{PageController, Snapshot};
use crate::scroll::dom::{self, AnchorScroller, WindowListener};
use crate::scroll::sections::SectionRegistry;
use crate::sections::{about::About, contact::Contact, hero::Hero, projects::Projects, skills::Skills};

/// Shared with every view below the portfolio page.
#[derive(Clone, PartialEq)]
pub struct PageContext {
    pub snapshot: Snapshot,
    pub navigate: Callback<String>,
    /// Re-measures the sections, e.g. once an image has loaded.
    pub relayout: Callback<()>,
}

impl PageContext {
    /// `reveal` until the section has been on screen, then `reveal revealed`.
    pub fn reveal_classes(&self, section_id: &str) -> Classes {
        classes!("reveal", self.snapshot.is_revealed(section_id).then(|| "revealed"))
    }
}

fn remeasure(controller: &RefCell<PageController>) {
    if let Some(window) = web_sys::window() {
        let registry = dom::measure_sections(&window, config::SECTION_IDS);
        controller
            .borrow_mut()
            .relayout(registry, dom::read_viewport(&window));
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let controller = use_mut_ref(|| {
        PageController::new(
            SectionRegistry::from_ids(config::SECTION_IDS),
            config::HIDE_THRESHOLD_PX,
        )
        .with_reveal_amount(config::reveal_amount)
    });
    let snapshot = use_state_eq(|| controller.borrow().snapshot());

    // Mirror every published snapshot into component state
    {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = controller
                    .borrow()
                    .subscribe(move |s| snapshot.set(s.clone()));
                move || drop(subscription)
            },
            (),
        );
    }

    // Measure once mounted, then follow the scroll position until unmount
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    remeasure(&controller);
                    let handler_window = window.clone();
                    WindowListener::attach(&window, "scroll", move || {
                        let layout = dom::measure_sections(&handler_window, config::SECTION_IDS);
                        controller
                            .borrow_mut()
                            .on_scroll_with_layout(layout, dom::read_viewport(&handler_window));
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    {
        let controller = controller.clone();
        use_event_with_window("resize", move |_: Event| remeasure(&controller));
    }
    {
        let controller = controller.clone();
        use_event_with_window("load", move |_: Event| remeasure(&controller));
    }

    // images in the hero and project cards shift the layout once loaded
    let relayout = {
        let controller = controller.clone();
        Callback::from(move |_: ()| remeasure(&controller))
    };

    let navigate = {
        let controller = controller.clone();
        Callback::from(move |section_id: String| {
            info!("navigating to #{}", section_id);
            // a missing anchor is already logged by the controller
            controller.borrow().navigate_to(&AnchorScroller, &section_id).ok();
        })
    };

    let context = PageContext {
        snapshot: (*snapshot).clone(),
        navigate,
        relayout,
    };

    html! {
        <ContextProvider<PageContext> context={context}>
            <div class="portfolio">
                <style>
                    {r#"
                    .portfolio {
                        position: relative;
                        min-height: 100vh;
                        background: #FAFAF9;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #0f172a;
                    }
                    .portfolio section {
                        padding: 6rem 1.5rem;
                    }
                    .section-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .section-title {
                        font-size: 2.75rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .section-rule {
                        width: 6rem;
                        height: 4px;
                        margin: 0 auto 1.5rem;
                        background: linear-gradient(to right, #3b82f6, #a855f7);
                    }
                    .section-lead {
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                        text-align: center;
                        font-size: 1.125rem;
                        color: #475569;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @media (max-width: 768px) {
                        .section-title {
                            font-size: 2.25rem;
                        }
                    }
                    "#}
                </style>
                <ProgressBar />
                <FloatingNav />
                <Hero />
                <About />
                <Projects />
                <Skills />
                <Contact />
                <Footer />
            </div>
        </ContextProvider<PageContext>>
    }
}

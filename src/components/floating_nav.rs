use yew::prelude::*;

use crate::config;
use crate::pages::portfolio::PageContext;

#[function_component(FloatingNav)]
pub fn floating_nav() -> Html {
    let page = match use_context::<PageContext>() {
        Some(page) => page,
        None => return html! {},
    };
    let visible = page.snapshot.visibility.is_visible();

    html! {
        <nav class={classes!("floating-nav", (!visible).then(|| "nav-hidden"))}>
            <style>
                {r#"
                .floating-nav {
                    position: fixed;
                    top: 1.5rem;
                    left: 50%;
                    transform: translate(-50%, 0);
                    z-index: 40;
                    transition: transform 0.3s ease-out, opacity 0.3s ease-out;
                }
                .floating-nav.nav-hidden {
                    transform: translate(-50%, -100px);
                    opacity: 0;
                    pointer-events: none;
                }
                .floating-nav-bar {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1rem;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(226, 232, 240, 0.5);
                    border-radius: 9999px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .nav-item {
                    position: relative;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: #475569;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: color 0.2s, background 0.3s;
                }
                .nav-item:hover {
                    color: #3b82f6;
                }
                .nav-item.active {
                    color: #fff;
                    background: linear-gradient(to right, #3b82f6, #a855f7);
                }
                @media (max-width: 768px) {
                    .nav-item {
                        padding: 0.5rem 0.6rem;
                        font-size: 0.75rem;
                    }
                }
                "#}
            </style>
            <div class="floating-nav-bar">
                {
                    config::NAV_ITEMS.iter().map(|(id, label)| {
                        let onclick = {
                            let navigate = page.navigate.clone();
                            let id = id.to_string();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                navigate.emit(id.clone());
                            })
                        };
                        html! {
                            <button
                                key={*id}
                                class={classes!("nav-item", page.snapshot.is_active(id).then(|| "active"))}
                                {onclick}
                            >
                                {*label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        </nav>
    }
}

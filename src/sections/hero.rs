use yew::prelude::*;

use crate::pages::portfolio::PageContext;

/// Where the chevron at the bottom of the hero leads: the section right below.
const SCROLL_DOWN_TARGET: &str = "about";

#[function_component(Hero)]
pub fn hero() -> Html {
    let page = use_context::<PageContext>();
    let on_portrait_load = page
        .as_ref()
        .map(|p| p.relayout.reform(|_: Event| ()))
        .unwrap_or_default();
    let scroll_to = |section_id: &'static str| {
        let navigate = page.as_ref().map(|p| p.navigate.clone());
        Callback::from(move |_: MouseEvent| {
            if let Some(navigate) = &navigate {
                navigate.emit(section_id.to_string());
            }
        })
    };

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                .portfolio section.hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #0f172a, #1e293b, #0f172a);
                    color: #fff;
                }
                @keyframes drift {
                    0%, 100% { transform: translate(0, 0); }
                    50% { transform: translate(100px, 50px); }
                }
                .hero-blob {
                    position: absolute;
                    width: 18rem;
                    height: 18rem;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation: drift 20s ease-in-out infinite;
                }
                .hero-blob.blue {
                    top: 5rem;
                    left: 5rem;
                    background: rgba(59, 130, 246, 0.2);
                }
                .hero-blob.purple {
                    bottom: 5rem;
                    right: 5rem;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(168, 85, 247, 0.2);
                    animation-duration: 15s;
                    animation-direction: reverse;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 72rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    align-items: center;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    margin-bottom: 2rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 0.875rem;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .hero-name {
                    display: block;
                    background: linear-gradient(to right, #60a5fa, #c084fc, #f472b6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero h2 {
                    font-size: 1.5rem;
                    color: #cbd5e1;
                    margin-bottom: 1rem;
                }
                .hero p {
                    color: #94a3b8;
                    font-size: 1.125rem;
                    margin-bottom: 2rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .hero-button {
                    padding: 0.875rem 1.75rem;
                    border-radius: 0.5rem;
                    font-size: 1rem;
                    cursor: pointer;
                    border: none;
                    color: #fff;
                    background: linear-gradient(to right, #3b82f6, #a855f7);
                }
                .hero-button.outline {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                }
                .hero-portrait {
                    width: 100%;
                    max-width: 22rem;
                    justify-self: center;
                    border-radius: 50%;
                    box-shadow: 0 25px 50px rgba(59, 130, 246, 0.25);
                }
                @keyframes bob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }
                .hero-scroll-down {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    z-index: 10;
                    border: none;
                    background: transparent;
                    color: rgba(255, 255, 255, 0.6);
                    cursor: pointer;
                    animation: bob 2s ease-in-out infinite;
                }
                .hero-scroll-down:hover {
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .hero-content {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 2.5rem;
                    }
                    .hero-actions {
                        justify-content: center;
                    }
                }
                "#}
            </style>
            <div class="hero-blob blue"></div>
            <div class="hero-blob purple"></div>
            <div class="hero-content">
                <div>
                    <div class="hero-badge">{"Available for Freelance Work"}</div>
                    <h1>
                        {"Hi, I'm"}
                        <span class="hero-name">{"Pushpit Raj"}</span>
                    </h1>
                    <h2>{"Full-Stack Developer & Creative Problem Solver"}</h2>
                    <p>
                        {"4th Year Computer Science Student specializing in React & Django. \
                          Building beautiful, scalable web applications that make a difference."}
                    </p>
                    <div class="hero-actions">
                        <button class="hero-button" onclick={scroll_to("contact")}>
                            {"Get In Touch"}
                        </button>
                        <button class="hero-button outline" onclick={scroll_to("about")}>
                            {"View My Work"}
                        </button>
                    </div>
                </div>
                <img class="hero-portrait" src="/praj.jpg" alt="Pushpit Raj" onload={on_portrait_load} />
            </div>
            <button class="hero-scroll-down" aria-label="Scroll to about" onclick={scroll_to(SCROLL_DOWN_TARGET)}>
                <svg width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <polyline points="6 9 12 15 18 9" />
                </svg>
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn scroll_down_leads_to_the_next_section() {
        let home = config::SECTION_IDS.iter().position(|id| *id == "home");
        let target = config::SECTION_IDS.iter().position(|id| *id == SCROLL_DOWN_TARGET);
        assert_eq!(home.map(|i| i + 1), target);
    }
}

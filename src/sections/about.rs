use yew::prelude::*;

use crate::pages::portfolio::PageContext;

const HIGHLIGHTS: [(&str, &str); 4] = [
    ("Full-Stack Expertise", "Proficient in React & Django, building end-to-end solutions"),
    ("Project Experience", "Developed LMS and Freelancing platforms with real-world impact"),
    ("Passionate Freelancer", "Love collaborating with clients to bring their visions to life"),
    ("Fast Learner", "Quick to adapt to new technologies and frameworks"),
];

#[function_component(About)]
pub fn about() -> Html {
    let reveal = use_context::<PageContext>()
        .map(|page| page.reveal_classes("about"))
        .unwrap_or_default();

    html! {
        <section id="about" class="about">
            <style>
                {r#"
                .portfolio section.about {
                    background: #fff;
                }
                .highlight-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 4rem;
                }
                .highlight-card {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: #f8fafc;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                }
                .highlight-card h3 {
                    font-size: 1.25rem;
                    margin-bottom: 0.5rem;
                }
                .highlight-card p {
                    color: #475569;
                }
                .mission {
                    padding: 2.5rem;
                    border-radius: 1rem;
                    background: linear-gradient(to right, #eff6ff, #faf5ff);
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .highlight-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class={classes!("section-inner", reveal)}>
                <h2 class="section-title">{"About Me"}</h2>
                <div class="section-rule"></div>
                <p class="section-lead">
                    {"I'm a 4th year Computer Science student with a passion for creating elegant solutions \
                      to complex problems. My journey in web development started with curiosity and has grown \
                      into a deep commitment to crafting exceptional digital experiences."}
                </p>
                <div class="highlight-grid">
                    {
                        HIGHLIGHTS.iter().map(|(title, description)| html! {
                            <div key={*title} class="highlight-card">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="mission">
                    <h3>{"My Mission"}</h3>
                    <p>
                        {"To bridge the gap between innovative ideas and functional reality. I believe in writing \
                          clean, maintainable code that not only works but delights users."}
                    </p>
                </div>
            </div>
        </section>
    }
}

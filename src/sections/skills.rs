use yew::prelude::*;

use crate::pages::portfolio::PageContext;

struct SkillGroup {
    category: &'static str,
    gradient: &'static str,
    // (name, level out of 100)
    items: &'static [(&'static str, u8)],
}

const SKILLS: [SkillGroup; 3] = [
    SkillGroup {
        category: "Frontend",
        gradient: "linear-gradient(to right, #3b82f6, #06b6d4)",
        items: &[("React", 90), ("JavaScript", 85), ("HTML/CSS", 90), ("Tailwind CSS", 85), ("Redux", 75)],
    },
    SkillGroup {
        category: "Backend",
        gradient: "linear-gradient(to right, #22c55e, #10b981)",
        items: &[("Django", 85), ("Python", 90), ("REST APIs", 85), ("PostgreSQL", 75), ("MySQL", 75)],
    },
    SkillGroup {
        category: "Tools & Others",
        gradient: "linear-gradient(to right, #a855f7, #ec4899)",
        items: &[("Git & GitHub", 85), ("Docker", 70), ("AWS", 65), ("Figma", 70), ("Agile/Scrum", 75)],
    },
];

#[function_component(Skills)]
pub fn skills() -> Html {
    let page = use_context::<PageContext>();
    let revealed = page
        .as_ref()
        .map(|p| p.snapshot.is_revealed("skills"))
        .unwrap_or(false);
    let reveal = page.map(|p| p.reveal_classes("skills")).unwrap_or_default();

    html! {
        <section id="skills" class="skills">
            <style>
                {r#"
                .portfolio section.skills {
                    background: #fff;
                }
                .skill-groups {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .skill-group {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: #f8fafc;
                }
                .skill-category {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    margin-bottom: 1.5rem;
                    border-radius: 0.5rem;
                    color: #fff;
                    font-weight: 600;
                }
                .skill-row {
                    margin-bottom: 1rem;
                }
                .skill-label {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.9rem;
                    margin-bottom: 0.35rem;
                }
                .skill-track {
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #e2e8f0;
                    overflow: hidden;
                }
                .skill-fill {
                    height: 100%;
                    border-radius: 9999px;
                    transition: width 1s ease-out;
                }
                .learning-note {
                    margin-top: 3rem;
                    text-align: center;
                    color: #475569;
                }
                @media (max-width: 900px) {
                    .skill-groups {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class={classes!("section-inner", reveal)}>
                <h2 class="section-title">{"Skills & Technologies"}</h2>
                <div class="section-rule"></div>
                <p class="section-lead">{"Technologies and tools I use to bring ideas to life"}</p>
                <div class="skill-groups">
                    {
                        SKILLS.iter().map(|group| html! {
                            <div key={group.category} class="skill-group">
                                <div class="skill-category" style={format!("background: {};", group.gradient)}>
                                    {group.category}
                                </div>
                                {
                                    for group.items.iter().map(|(name, level)| {
                                        // bars grow from zero once the section is revealed
                                        let width = if revealed { *level } else { 0 };
                                        html! {
                                            <div class="skill-row">
                                                <div class="skill-label">
                                                    <span>{*name}</span>
                                                    <span>{format!("{}%", level)}</span>
                                                </div>
                                                <div class="skill-track">
                                                    <div
                                                        class="skill-fill"
                                                        style={format!("width: {}%; background: {};", width, group.gradient)}
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    })
                                }
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <p class="learning-note">
                    {"The tech world evolves rapidly, and so do I. Currently exploring Next.js, TypeScript, \
                      and cloud-native architectures to stay ahead of the curve."}
                </p>
            </div>
        </section>
    }
}

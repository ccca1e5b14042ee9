use yew::prelude::*;

use crate::pages::portfolio::PageContext;

struct Project {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
    features: &'static [&'static str],
    demo_url: &'static str,
    code_url: &'static str,
}

const PROJECTS: [Project; 2] = [
    Project {
        title: "Learning Management System",
        description: "A comprehensive LMS platform enabling educators to create courses, manage students, \
                      and track progress. Features include video lessons, quizzes, assignments, and real-time \
                      progress tracking.",
        image: "https://res.cloudinary.com/dczbo1dk1/image/upload/v1764440582/10_zd1prc.png",
        tags: &["React", "Django", "PostgreSQL", "REST API", "WebSockets"],
        features: &["Course Management", "Video Streaming", "Progress Tracking", "Discussion Forums"],
        demo_url: "#",
        code_url: "https://github.com/rajPushpit",
    },
    Project {
        title: "Freelancing Platform",
        description: "A full-featured marketplace connecting freelancers with clients. Includes project bidding, \
                      escrow payments, real-time messaging, and review systems to ensure quality transactions.",
        image: "https://res.cloudinary.com/dczbo1dk1/image/upload/v1764440253/pixel_mbjpqa.jpg",
        tags: &["React", "Django", "Redux", "Stripe API", "WebRTC"],
        features: &["Project Bidding", "Secure Payments", "Live Chat", "Rating System"],
        demo_url: "#",
        code_url: "https://github.com/rajPushpit",
    },
];

fn project_card(project: &Project, on_image_load: &Callback<()>) -> Html {
    let onload = on_image_load.reform(|_: Event| ());
    html! {
        <div key={project.title} class="project-card">
            <div class="project-image">
                <img src={project.image} alt={project.title} {onload} />
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <ul class="project-features">
                    { for project.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                </ul>
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                </div>
                <div class="project-links">
                    <a href={project.demo_url} target="_blank" rel="noopener noreferrer">{"Live Demo"}</a>
                    <a href={project.code_url} target="_blank" rel="noopener noreferrer">{"View Code"}</a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let page = use_context::<PageContext>();
    let reveal = page
        .as_ref()
        .map(|page| page.reveal_classes("projects"))
        .unwrap_or_default();
    let on_image_load = page.map(|page| page.relayout).unwrap_or_default();

    html! {
        <section id="projects" class="projects">
            <style>
                {r#"
                .project-card {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    margin-bottom: 3rem;
                    border-radius: 1rem;
                    overflow: hidden;
                    background: #fff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
                }
                .project-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.4s;
                }
                .project-image img:hover {
                    transform: scale(1.05);
                }
                .project-body {
                    padding: 2rem;
                }
                .project-body h3 {
                    font-size: 1.75rem;
                    margin-bottom: 1rem;
                }
                .project-body p {
                    color: #475569;
                    margin-bottom: 1rem;
                }
                .project-features {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.25rem;
                    margin-bottom: 1rem;
                    color: #334155;
                }
                .project-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }
                .tag {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: #f1f5f9;
                    font-size: 0.8rem;
                }
                .project-links {
                    display: flex;
                    gap: 1rem;
                }
                .project-links a {
                    color: #3b82f6;
                    font-weight: 500;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .project-card {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class={classes!("section-inner", reveal)}>
                <h2 class="section-title">{"Featured Projects"}</h2>
                <div class="section-rule"></div>
                <p class="section-lead">
                    {"Here are some of the projects I've built that showcase my skills and passion for development"}
                </p>
                { for PROJECTS.iter().map(|project| project_card(project, &on_image_load)) }
            </div>
        </section>
    }
}

use chrono::{Datelike, Utc};
use yew::prelude::*;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/rajPushpit"),
    ("LinkedIn", "https://www.linkedin.com/in/pushpit-raj-19jan/"),
    ("Email", "mailto:pushpitraj19jan@gmail.com"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    margin-top: 2.5rem;
                    padding: 2.5rem 1.5rem;
                    background: #0f172a;
                    color: #fff;
                    text-align: center;
                }
                .site-footer p {
                    color: #94a3b8;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 1rem;
                }
                .footer-links a {
                    color: #fff;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .footer-links a:hover {
                    color: #60a5fa;
                }
                "#}
            </style>
            <p>
                {format!("© {} ", year)}
                <span style="font-weight: 600;">{"Pushpit Raj"}</span>
                {". Built with Rust & Yew."}
            </p>
            <div class="footer-links">
                {
                    SOCIAL_LINKS.iter().map(|(label, href)| {
                        let external = href.starts_with("http");
                        html! {
                            <a
                                key={*label}
                                href={*href}
                                target={external.then(|| "_blank")}
                                rel={external.then(|| "noopener noreferrer")}
                            >
                                {*label}
                            </a>
                        }
                    }).collect::<Html>()
                }
            </div>
        </footer>
    }
}

use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::{Toast, ToastMessage};
use crate::contact::{send_message, ContactMessage};
use crate::pages::portfolio::PageContext;

const CONTACT_METHODS: [(&str, &str, Option<&str>); 4] = [
    ("Email", "pushpitraj19jan@gmail.com", Some("mailto:pushpitraj19jan@gmail.com")),
    (
        "LinkedIn",
        "linkedin.com/in/pushpit-raj-19jan",
        Some("https://www.linkedin.com/in/pushpit-raj-19jan/"),
    ),
    ("GitHub", "github.com/rajPushpit", Some("https://github.com/rajPushpit")),
    ("Location", "India", None),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let reveal = use_context::<PageContext>()
        .map(|page| page.reveal_classes("contact"))
        .unwrap_or_default();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let body = use_state(String::new);
    let sending = use_state(|| false);
    let toast = use_state(|| None::<ToastMessage>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let body = body.clone();
        let sending = sending.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let message = ContactMessage::new(&name, &email, &body);
            if let Err(err) = message.validate() {
                toast.set(Some(ToastMessage::error(err.to_string())));
                return;
            }

            sending.set(true);
            let name = name.clone();
            let email = email.clone();
            let body = body.clone();
            let sending = sending.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match send_message(&message).await {
                    Ok(()) => {
                        info!("contact form submitted");
                        toast.set(Some(ToastMessage::success("Message sent! I'll get back to you soon.")));
                        name.set(String::new());
                        email.set(String::new());
                        body.set(String::new());
                    }
                    Err(err) => {
                        warn!("contact form failed: {}", err);
                        toast.set(Some(ToastMessage::error(err.to_string())));
                    }
                }
                sending.set(false);
            });
        })
    };

    let close_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                .portfolio section.contact {
                    background: #f8fafc;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: #fff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
                }
                .contact-card label {
                    display: block;
                    margin: 1rem 0 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #334155;
                }
                .contact-card input,
                .contact-card textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .contact-card textarea {
                    resize: none;
                }
                .send-button {
                    width: 100%;
                    margin-top: 1.5rem;
                    padding: 0.875rem;
                    border: none;
                    border-radius: 0.5rem;
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                    background: linear-gradient(to right, #3b82f6, #a855f7);
                }
                .send-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .get-in-touch {
                    padding: 2rem;
                    margin-bottom: 1.5rem;
                    border-radius: 1rem;
                    color: #fff;
                    background: linear-gradient(135deg, #0f172a, #1e293b);
                }
                .get-in-touch p {
                    color: #cbd5e1;
                }
                .pill {
                    display: inline-block;
                    margin: 0.75rem 0.75rem 0 0;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 0.875rem;
                }
                .contact-method {
                    display: block;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 0.75rem;
                    background: #fff;
                    color: inherit;
                    text-decoration: none;
                }
                .contact-method .method-label {
                    font-size: 0.875rem;
                    color: #64748b;
                }
                a.contact-method:hover {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                }
                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class={classes!("section-inner", reveal)}>
                <h2 class="section-title">{"Let's Work Together"}</h2>
                <div class="section-rule"></div>
                <p class="section-lead">
                    {"Have a project in mind or want to discuss freelancing opportunities? I'd love to hear from you!"}
                </p>
                <div class="contact-grid">
                    <div class="contact-card">
                        <h3>{"Send a Message"}</h3>
                        <form {onsubmit}>
                            <label>{"Your Name"}</label>
                            <input
                                type="text"
                                placeholder="Your name"
                                value={(*name).clone()}
                                oninput={let name = name.clone(); move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    name.set(input.value());
                                }}
                            />
                            <label>{"Email Address"}</label>
                            <input
                                type="email"
                                placeholder="you@example.com"
                                value={(*email).clone()}
                                oninput={let email = email.clone(); move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                }}
                            />
                            <label>{"Message"}</label>
                            <textarea
                                rows="6"
                                placeholder="Tell me about your project..."
                                value={(*body).clone()}
                                oninput={let body = body.clone(); move |e: InputEvent| {
                                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                                    body.set(input.value());
                                }}
                            />
                            <button type="submit" class="send-button" disabled={*sending}>
                                { if *sending { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    </div>
                    <div>
                        <div class="get-in-touch">
                            <h3>{"Get in Touch"}</h3>
                            <p>
                                {"I'm always excited to take on new challenges and collaborate on interesting projects. \
                                  Whether you need a full-stack developer for your team or a freelancer for your next \
                                  big idea, let's connect!"}
                            </p>
                            <span class="pill">{"Open to Freelance"}</span>
                            <span class="pill">{"Available for Hire"}</span>
                        </div>
                        {
                            CONTACT_METHODS.iter().map(|(label, value, link)| {
                                let content = html! {
                                    <>
                                        <div class="method-label">{*label}</div>
                                        <div>{*value}</div>
                                    </>
                                };
                                match link {
                                    Some(href) => html! {
                                        <a key={*label} class="contact-method" href={*href} target="_blank" rel="noopener noreferrer">
                                            {content}
                                        </a>
                                    },
                                    None => html! {
                                        <div key={*label} class="contact-method">{content}</div>
                                    },
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
            {
                if let Some(message) = (*toast).clone() {
                    html! { <Toast {message} on_close={close_toast} /> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

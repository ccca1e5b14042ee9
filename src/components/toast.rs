use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

/// Every constructed message gets its own serial, so showing the same text
/// twice still counts as a new toast and restarts the dismiss timer.
#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
    serial: u64,
}

impl ToastMessage {
    fn new(kind: ToastKind, text: String) -> Self {
        Self {
            kind,
            text,
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, text.into())
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: ToastMessage,
    pub on_close: Callback<()>,
}

/// Transient notification; closes itself after `TOAST_DURATION_MS`.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || on_close.emit(()));
                // dropping the timeout cancels it
                move || drop(timeout)
            },
            props.message.serial,
        );
    }

    let kind_class = match props.message.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status" {onclick}>
            <style>
                {r#"
                @keyframes toastIn {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .toast {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 60;
                    max-width: 24rem;
                    padding: 1rem 1.25rem;
                    border-radius: 0.75rem;
                    color: #fff;
                    font-size: 0.95rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                    animation: toastIn 0.3s ease-out;
                }
                .toast-success {
                    background: #16a34a;
                }
                .toast-error {
                    background: #dc2626;
                }
                "#}
            </style>
            {&props.message.text}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_text_is_a_new_toast() {
        let first = ToastMessage::error("Please enter your name");
        let again = ToastMessage::error("Please enter your name");
        assert_eq!(first.text, again.text);
        assert_ne!(first, again);
        assert_ne!(first.serial, again.serial);
    }

    #[test]
    fn clones_are_the_same_toast() {
        let message = ToastMessage::success("Message sent!");
        assert_eq!(message.clone(), message);
        assert_eq!(message.kind, ToastKind::Success);
    }
}

use yew::prelude::*;

use crate::pages::portfolio::PageContext;

#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let progress = use_context::<PageContext>()
        .map(|page| page.snapshot.progress)
        .unwrap_or(0.0);

    html! {
        <>
            <style>
                {r#"
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    z-index: 50;
                    transform-origin: left;
                    background: linear-gradient(to right, #3b82f6, #a855f7, #ec4899);
                }
                "#}
            </style>
            <div class="scroll-progress" style={format!("transform: scaleX({});", progress)}></div>
        </>
    }
}

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use super::controller::{ScrollTarget, Viewport};
use super::sections::{SectionNotFound, SectionRegistry};

/// Current scroll offset, viewport height and document height.
pub fn read_viewport(window: &Window) -> Viewport {
    let offset = window.scroll_y().unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(height);
    Viewport {
        offset,
        height,
        document_height,
    }
}

/// Builds the registry from the rendered anchors. Anchors that are not in
/// the DOM yet are left out.
pub fn measure_sections<'a>(window: &Window, ids: impl IntoIterator<Item = &'a str>) -> SectionRegistry {
    let mut registry = SectionRegistry::new();
    let document = match window.document() {
        Some(document) => document,
        None => return registry,
    };
    for id in ids {
        match document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        {
            Some(element) => {
                registry.register(id, element.offset_top() as f64, element.offset_height() as f64);
            }
            None => warn!("anchor #{} not rendered yet", id),
        }
    }
    registry
}

/// Smooth-scrolls the window to a section anchor.
pub struct AnchorScroller;

impl ScrollTarget for AnchorScroller {
    fn scroll_to(&self, section_id: &str) -> Result<(), SectionNotFound> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section_id))
            .ok_or_else(|| SectionNotFound(section_id.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// A window event listener that is removed when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn attach(window: &Window, event: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        if window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("could not attach {} listener", event);
            return None;
        }
        info!("{} listener attached", event);
        Some(Self {
            window: window.clone(),
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        match self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => info!("{} listener detached", self.event),
            Err(_) => warn!("could not detach {} listener", self.event),
        }
    }
}

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::nav_state::{FloatingNavState, NavVisibility};
use super::progress::{scroll_progress, total_scrollable};
use super::reveal::RevealTracker;
use super::sections::{resolve_active_section, SectionNotFound, SectionRegistry};
use crate::config;

/// Host capability that animates the viewport to a section anchor.
pub trait ScrollTarget {
    fn scroll_to(&self, section_id: &str) -> Result<(), SectionNotFound>;
}

/// One reading of the browser viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub offset: f64,
    pub height: f64,
    pub document_height: f64,
}

/// What the nav and progress bar render from.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub active_section: String,
    pub visibility: NavVisibility,
    pub progress: f64,
    /// Revealed section ids in document order.
    pub revealed: Vec<String>,
}

impl Snapshot {
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_section == section_id
    }

    pub fn is_revealed(&self, section_id: &str) -> bool {
        self.revealed.iter().any(|id| id == section_id)
    }
}

type Listener = Rc<dyn Fn(&Snapshot)>;

#[derive(Default)]
struct Listeners {
    next_id: usize,
    entries: Vec<(usize, Listener)>,
}

/// Keeps a listener registered until dropped.
pub struct Subscription {
    id: usize,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Owns all scroll-derived page state. Fed from the single scroll handler;
/// every recomputation is published to the subscribers.
pub struct PageController {
    registry: SectionRegistry,
    nav: FloatingNavState,
    reveal: RevealTracker,
    reveal_amount: fn(&str) -> f64,
    active: String,
    progress: f64,
    viewport: Viewport,
    listeners: Rc<RefCell<Listeners>>,
}

impl PageController {
    pub fn new(registry: SectionRegistry, hide_threshold: f64) -> Self {
        let active = registry
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_else(|| config::SECTION_IDS[0].to_string());
        Self {
            registry,
            nav: FloatingNavState::new(hide_threshold),
            reveal: RevealTracker::new(),
            reveal_amount: |_| config::REVEAL_AMOUNT,
            active,
            progress: 0.0,
            viewport: Viewport::default(),
            listeners: Rc::new(RefCell::new(Listeners::default())),
        }
    }

    pub fn with_reveal_amount(mut self, reveal_amount: fn(&str) -> f64) -> Self {
        self.reveal_amount = reveal_amount;
        self
    }

    /// Runs the scroll handler: nav visibility, active section, progress and
    /// reveals, in that order.
    pub fn on_scroll(&mut self, viewport: Viewport) -> Snapshot {
        let before = self.nav.visibility();
        let after = self.nav.on_scroll(viewport.offset);
        if before != after {
            debug!(
                "nav {:?} at offset {} ({:?})",
                after,
                viewport.offset,
                self.nav.scroll().direction
            );
        }
        self.viewport = viewport;
        self.recompute()
    }

    /// Scroll handler for a page whose layout may have shifted since the last
    /// measurement (late images, fonts). An empty measurement keeps the old
    /// geometry.
    pub fn on_scroll_with_layout(&mut self, registry: SectionRegistry, viewport: Viewport) -> Snapshot {
        if !registry.is_empty() && registry != self.registry {
            debug!("layout shifted, {} sections remeasured", registry.len());
            self.registry = registry;
        }
        self.on_scroll(viewport)
    }

    /// Swaps in freshly measured geometry. Nav visibility is untouched since
    /// no scroll happened.
    pub fn relayout(&mut self, registry: SectionRegistry, viewport: Viewport) -> Snapshot {
        if registry.is_empty() {
            warn!("relayout without any rendered section");
        } else {
            debug!("relayout with {} sections", registry.len());
        }
        self.registry = registry;
        self.viewport = viewport;
        self.recompute()
    }

    /// Smooth-scrolls to a section. A missing anchor is logged and otherwise
    /// ignored; the active section only changes once the scroll events arrive.
    pub fn navigate_to(&self, target: &impl ScrollTarget, section_id: &str) -> Result<(), SectionNotFound> {
        if let Some(section) = self.registry.get(section_id) {
            debug!(
                "scrolling from {} to section {} ({}) at {}",
                self.active, section.order_index, section.id, section.top_offset
            );
        }
        target.scroll_to(section_id).map_err(|e| {
            warn!("navigation skipped: {}", e);
            e
        })
    }

    pub fn subscribe(&self, listener: impl Fn(&Snapshot) + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        let listener: Listener = Rc::new(listener);
        listeners.entries.push((id, listener));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active_section: self.active.clone(),
            visibility: self.nav.visibility(),
            progress: self.progress,
            revealed: self
                .registry
                .ids()
                .filter(|id| self.reveal.is_revealed(id))
                .map(str::to_string)
                .collect(),
        }
    }

    fn recompute(&mut self) -> Snapshot {
        let Viewport {
            offset,
            height,
            document_height,
        } = self.viewport;

        let resolved = resolve_active_section(&self.registry, offset, height, &self.active).to_string();
        if resolved != self.active {
            debug!("active section {} -> {}", self.active, resolved);
            self.active = resolved;
        }

        self.progress = scroll_progress(offset, total_scrollable(document_height, height));

        for id in self.reveal.update(&self.registry, offset, height, self.reveal_amount) {
            debug!("revealed {}", id);
        }

        let snapshot = self.snapshot();
        self.publish(&snapshot);
        snapshot
    }

    fn publish(&self, snapshot: &Snapshot) {
        // listeners may subscribe or unsubscribe while being called
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn page() -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        registry.register("home", 0.0, 800.0);
        registry.register("about", 800.0, 800.0);
        registry.register("projects", 1600.0, 800.0);
        registry
    }

    fn at(offset: f64) -> Viewport {
        Viewport {
            offset,
            height: 600.0,
            document_height: 2800.0,
        }
    }

    struct FakeTarget {
        rendered: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl ScrollTarget for FakeTarget {
        fn scroll_to(&self, section_id: &str) -> Result<(), SectionNotFound> {
            self.calls.borrow_mut().push(section_id.to_string());
            if self.rendered.contains(&section_id) {
                Ok(())
            } else {
                Err(SectionNotFound(section_id.to_string()))
            }
        }
    }

    #[test]
    fn defaults_to_first_section_and_visible_nav() {
        let controller = PageController::new(page(), 100.0);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.active_section, "home");
        assert_eq!(snapshot.visibility, NavVisibility::Visible);
        assert_eq!(snapshot.progress, 0.0);
        assert!(snapshot.revealed.is_empty());
    }

    #[test]
    fn scroll_updates_every_derived_value() {
        let mut controller = PageController::new(page(), 100.0);
        let snapshot = controller.on_scroll(at(900.0));
        assert_eq!(snapshot.active_section, "about");
        assert_eq!(snapshot.visibility, NavVisibility::Hidden);
        assert_eq!(snapshot.progress, 900.0 / 2200.0);
        assert!(snapshot.is_revealed("about"));

        let snapshot = controller.on_scroll(at(850.0));
        assert_eq!(snapshot.visibility, NavVisibility::Visible);
        assert!(snapshot.is_active("about"));
    }

    #[test]
    fn footer_keeps_last_section() {
        let mut controller = PageController::new(page(), 100.0);
        assert_eq!(controller.on_scroll(at(1700.0)).active_section, "projects");
        let snapshot = controller.on_scroll(at(2200.0));
        assert_eq!(snapshot.active_section, "projects");
        assert_eq!(snapshot.progress, 1.0);
    }

    #[test]
    fn subscribers_receive_each_recomputation_until_dropped() {
        let mut controller = PageController::new(page(), 100.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = seen.clone();
            controller.subscribe(move |s| seen.borrow_mut().push(s.active_section.clone()))
        };

        controller.on_scroll(at(0.0));
        controller.on_scroll(at(900.0));
        controller.on_scroll(at(901.0));
        assert_eq!(*seen.borrow(), vec!["home", "about", "about"]);

        drop(subscription);
        controller.on_scroll(at(1700.0));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn subscription_outliving_controller_is_harmless() {
        let controller = PageController::new(page(), 100.0);
        let subscription = controller.subscribe(|_| {});
        drop(controller);
        drop(subscription);
    }

    #[test]
    fn independent_subscriptions() {
        let mut controller = PageController::new(page(), 100.0);
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let sub_a = {
            let a = a.clone();
            controller.subscribe(move |_| a.set(a.get() + 1))
        };
        let _sub_b = {
            let b = b.clone();
            controller.subscribe(move |_| b.set(b.get() + 1))
        };
        controller.on_scroll(at(10.0));
        drop(sub_a);
        controller.on_scroll(at(20.0));
        assert_eq!((a.get(), b.get()), (1, 2));
    }

    #[test]
    fn relayout_reresolves_without_touching_visibility() {
        let mut controller = PageController::new(page(), 100.0);
        controller.on_scroll(at(900.0));
        assert_eq!(controller.snapshot().visibility, NavVisibility::Hidden);

        let mut taller = SectionRegistry::new();
        taller.register("home", 0.0, 1400.0);
        taller.register("about", 1400.0, 800.0);
        taller.register("projects", 2200.0, 800.0);
        let snapshot = controller.relayout(taller, Viewport { document_height: 3000.0, ..at(900.0) });

        assert_eq!(snapshot.active_section, "home");
        assert_eq!(snapshot.visibility, NavVisibility::Hidden);
    }

    #[test]
    fn scroll_picks_up_layout_shift() {
        let mut stale = SectionRegistry::new();
        stale.register("home", 0.0, 600.0);
        stale.register("about", 600.0, 800.0);
        let mut controller = PageController::new(stale, 100.0);

        // the hero grew once its image loaded
        let mut grown = SectionRegistry::new();
        grown.register("home", 0.0, 1000.0);
        grown.register("about", 1000.0, 800.0);
        let viewport = Viewport {
            offset: 400.0,
            height: 600.0,
            document_height: 1800.0,
        };
        let snapshot = controller.on_scroll_with_layout(grown, viewport);
        assert_eq!(snapshot.active_section, "home");

        let snapshot = controller.on_scroll(Viewport { offset: 800.0, ..viewport });
        assert_eq!(snapshot.active_section, "about");
    }

    #[test]
    fn empty_measurement_keeps_known_layout() {
        let mut controller = PageController::new(page(), 100.0);
        let snapshot = controller.on_scroll_with_layout(SectionRegistry::new(), at(900.0));
        assert_eq!(snapshot.active_section, "about");
    }

    #[test]
    fn navigation_to_missing_anchor_is_a_no_op() {
        let mut controller = PageController::new(page(), 100.0);
        controller.on_scroll(at(900.0));
        let target = FakeTarget {
            rendered: vec!["home", "about"],
            calls: RefCell::new(Vec::new()),
        };

        assert!(controller.navigate_to(&target, "about").is_ok());
        assert_eq!(
            controller.navigate_to(&target, "skills"),
            Err(SectionNotFound("skills".to_string()))
        );
        assert_eq!(controller.snapshot().active_section, "about");
        assert_eq!(*target.calls.borrow(), vec!["about", "skills"]);
    }

    #[test]
    fn custom_reveal_amount() {
        let mut controller = PageController::new(page(), 100.0).with_reveal_amount(|id| {
            if id == "projects" {
                0.1
            } else {
                0.9
            }
        });
        // viewport [1100, 1700]: 100px of projects (12.5%)
        let snapshot = controller.on_scroll(at(1100.0));
        assert!(snapshot.is_revealed("projects"));
        assert!(!snapshot.is_revealed("about"));
    }
}

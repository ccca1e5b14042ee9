use std::collections::HashSet;

use super::sections::{Section, SectionRegistry};

/// Share of `section` inside the viewport, in `[0, 1]`.
pub fn visible_fraction(section: &Section, scroll_offset: f64, viewport_height: f64) -> f64 {
    if section.height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let top = section.top_offset.max(scroll_offset);
    let bottom = section.bottom().min(scroll_offset + viewport_height);
    ((bottom - top) / section.height).clamp(0.0, 1.0)
}

/// Sections that have animated in. Once revealed, always revealed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latches every section whose visible share reaches `amount(id)`.
    /// Returns the ids revealed by this call.
    pub fn update(
        &mut self,
        registry: &SectionRegistry,
        scroll_offset: f64,
        viewport_height: f64,
        amount: impl Fn(&str) -> f64,
    ) -> Vec<String> {
        let mut newly = Vec::new();
        for section in registry.iter() {
            if self.revealed.contains(&section.id) {
                continue;
            }
            let fraction = visible_fraction(section, scroll_offset, viewport_height);
            if fraction > 0.0 && fraction >= amount(&section.id) {
                self.revealed.insert(section.id.clone());
                newly.push(section.id.clone());
            }
        }
        newly
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

use thiserror::Error;

/// Lookup of a section id that has no rendered anchor (yet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("section `{0}` is not rendered")]
pub struct SectionNotFound(pub String);

/// A vertically bounded region of the page, in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub order_index: usize,
    pub top_offset: f64,
    pub height: f64,
}

impl Section {
    pub fn bottom(&self) -> f64 {
        self.top_offset + self.height
    }

    /// Half-open: the top edge belongs to the section, the bottom edge does not.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top_offset && y < self.bottom()
    }
}

/// Sections in document order, unique by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every id with empty geometry, keeping the given order.
    /// Later duplicates are ignored.
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut registry = Self::new();
        for id in ids {
            if !registry.contains(id) {
                registry.register(id, 0.0, 0.0);
            }
        }
        registry
    }

    /// Adds a section at the end, or updates the geometry of an existing one
    /// without changing its position.
    pub fn register(&mut self, id: impl Into<String>, top_offset: f64, height: f64) -> &Section {
        let id = id.into();
        let height = height.max(0.0);
        let index = match self.index_of(&id) {
            Some(index) => {
                let section = &mut self.sections[index];
                section.top_offset = top_offset;
                section.height = height;
                index
            }
            None => {
                let order_index = self.sections.len();
                self.sections.push(Section {
                    id,
                    order_index,
                    top_offset,
                    height,
                });
                order_index
            }
        };
        &self.sections[index]
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Vertical midpoint of the viewport in document coordinates.
pub fn probe(scroll_offset: f64, viewport_height: f64) -> f64 {
    scroll_offset + viewport_height / 2.0
}

/// Resolves which section holds the viewport midpoint.
///
/// Before the first section the first section wins. When nothing matches
/// (past the last section, or a gap between sections) the previous id is
/// kept, as long as it is still registered.
pub fn resolve_active_section<'a>(
    registry: &'a SectionRegistry,
    scroll_offset: f64,
    viewport_height: f64,
    previous: &'a str,
) -> &'a str {
    let first = match registry.first() {
        Some(first) => first,
        None => return previous,
    };

    let probe = probe(scroll_offset, viewport_height);
    if probe < first.top_offset {
        return &first.id;
    }

    if let Some(section) = registry.iter().find(|s| s.contains(probe)) {
        return &section.id;
    }

    if registry.contains(previous) {
        previous
    } else {
        &first.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SectionRegistry {
        let mut registry = SectionRegistry::new();
        registry.register("home", 0.0, 800.0);
        registry.register("about", 800.0, 800.0);
        registry.register("projects", 1600.0, 800.0);
        registry
    }

    #[test]
    fn midpoint_selects_containing_section() {
        let registry = page();
        assert_eq!(probe(900.0, 600.0), 1200.0);
        assert_eq!(resolve_active_section(&registry, 900.0, 600.0, "home"), "about");
    }

    #[test]
    fn top_edge_belongs_to_section() {
        let registry = page();
        // probe == 800 exactly
        assert_eq!(resolve_active_section(&registry, 500.0, 600.0, "home"), "about");
        // probe == 799.5 is still home
        assert_eq!(resolve_active_section(&registry, 499.5, 600.0, "about"), "home");
    }

    #[test]
    fn before_first_section_returns_first() {
        let mut registry = SectionRegistry::new();
        registry.register("home", 400.0, 800.0);
        registry.register("about", 1200.0, 800.0);
        assert_eq!(resolve_active_section(&registry, 0.0, 600.0, "about"), "home");
    }

    #[test]
    fn past_last_section_keeps_previous() {
        let registry = page();
        assert_eq!(resolve_active_section(&registry, 5000.0, 600.0, "projects"), "projects");
        assert_eq!(resolve_active_section(&registry, 5000.0, 600.0, "about"), "about");
    }

    #[test]
    fn gap_between_sections_keeps_previous() {
        let mut registry = SectionRegistry::new();
        registry.register("home", 0.0, 500.0);
        registry.register("about", 700.0, 500.0);
        assert_eq!(resolve_active_section(&registry, 300.0, 600.0, "home"), "home");
    }

    #[test]
    fn unregistered_previous_falls_back_to_first() {
        let registry = page();
        assert_eq!(resolve_active_section(&registry, 5000.0, 600.0, "footer"), "home");
    }

    #[test]
    fn empty_registry_keeps_previous() {
        let registry = SectionRegistry::new();
        assert_eq!(resolve_active_section(&registry, 100.0, 600.0, "home"), "home");
    }

    #[test]
    fn resolution_is_idempotent() {
        let registry = page();
        let first = resolve_active_section(&registry, 1700.0, 600.0, "home");
        let second = resolve_active_section(&registry, 1700.0, 600.0, first);
        assert_eq!(first, second);
    }

    #[test]
    fn resolved_index_never_moves_backwards_when_scrolling_down() {
        let registry = page();
        let mut active = "home".to_string();
        let mut last_index = 0;
        let mut offset = 0.0;
        while offset < 3000.0 {
            active = resolve_active_section(&registry, offset, 600.0, &active).to_string();
            let index = registry.index_of(&active).unwrap();
            assert!(index >= last_index, "went back to {} at offset {}", active, offset);
            last_index = index;
            offset += 37.0;
        }
        assert_eq!(active, "projects");
    }

    #[test]
    fn every_offset_resolves_to_registered_id() {
        let registry = page();
        let mut active = "home".to_string();
        for step in 0..200 {
            let offset = step as f64 * 25.0 - 400.0;
            active = resolve_active_section(&registry, offset, 600.0, &active).to_string();
            assert!(registry.contains(&active));
        }
    }

    #[test]
    fn register_updates_existing_geometry_in_place() {
        let mut registry = page();
        let updated = registry.register("about", 900.0, 1000.0).clone();
        assert_eq!(updated.order_index, 1);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("about").unwrap().bottom(), 1900.0);
    }

    #[test]
    fn from_ids_skips_duplicates() {
        let registry = SectionRegistry::from_ids(["home", "about", "home"]);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["home", "about"]);
        assert_eq!(registry.get("about").unwrap().order_index, 1);
    }
}

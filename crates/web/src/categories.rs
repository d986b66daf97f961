//! Category strip.
//!
//! Selection is display state only: the grid is not filtered by it.

pub const DEFAULT_CATEGORIES: &[&str] = &["Electronics", "Clothing", "Home", "Books"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBar {
    categories: Vec<String>,
    selected: Option<usize>,
}

impl CategoryBar {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            selected: None,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Highlight `label`; unknown labels leave the selection unchanged.
    pub fn select(&mut self, label: &str) -> bool {
        match self.categories.iter().position(|c| c == label) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|i| self.categories[i].as_str())
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected() == Some(label)
    }
}

impl Default for CategoryBar {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().copied())
    }
}

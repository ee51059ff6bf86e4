//! Catalog articles and the multi-article selection used to add lines.

use super::adjusted_quantity;
use crate::reference::{ArticleId, CategoryId};
use serde::{Deserialize, Serialize};

/// Article offered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    code: String,
    name: String,
    category: Option<CategoryId>,
}

impl Article {
    /// Creates a catalog article.
    #[must_use]
    pub fn new(id: ArticleId, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            category: None,
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns the article identifier.
    #[must_use]
    pub const fn id(&self) -> &ArticleId {
        &self.id
    }

    /// Returns the article code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the article name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category, if any.
    #[must_use]
    pub const fn category(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }
}

/// Catalog filter: free-text search and category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    search: Option<String>,
    category: Option<CategoryId>,
}

impl CatalogQuery {
    /// Creates a query matching every article.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to articles whose name or code contains `search`,
    /// ignoring case. Blank searches are ignored.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let raw = search.into();
        let trimmed = raw.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    /// Restricts to articles in `category`.
    #[must_use]
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    /// Returns the normalized search text, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the category filter, if any.
    #[must_use]
    pub const fn category(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }

    /// Returns whether `article` passes the filter.
    #[must_use]
    pub fn matches(&self, article: &Article) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|category| article.category() == Some(category));
        let search_ok = self.search.as_deref().is_none_or(|needle| {
            article.name().to_lowercase().contains(needle)
                || article.code().to_lowercase().contains(needle)
        });
        category_ok && search_ok
    }

    /// Returns the articles passing the filter, in catalog order.
    #[must_use]
    pub fn filter<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles
            .iter()
            .filter(|article| self.matches(article))
            .collect()
    }
}

/// Articles picked from the catalog, each with its own quantity.
///
/// Quantities start at 1 and never drop below 1 while selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleSelection {
    entries: Vec<(ArticleId, u32)>,
}

impl ArticleSelection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `article` with quantity 1; already selected articles keep
    /// their quantity.
    pub fn select(&mut self, article: ArticleId) {
        if self.quantity(&article).is_none() {
            self.entries.push((article, 1));
        }
    }

    /// Selects `article` if absent, deselects it otherwise.
    pub fn toggle(&mut self, article: ArticleId) {
        if self.quantity(&article).is_some() {
            self.deselect(&article);
        } else {
            self.entries.push((article, 1));
        }
    }

    /// Removes `article` from the selection.
    pub fn deselect(&mut self, article: &ArticleId) {
        self.entries.retain(|(selected, _)| selected != article);
    }

    /// Sets the quantity of `article`, selecting it if needed. Zero is
    /// raised to 1.
    pub fn set_quantity(&mut self, article: ArticleId, quantity: u32) {
        let value = quantity.max(1);
        match self.entries.iter_mut().find(|(selected, _)| *selected == article) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((article, value)),
        }
    }

    /// Steps the quantity of a selected article; unselected articles are
    /// ignored.
    pub fn adjust(&mut self, article: &ArticleId, delta: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|(selected, _)| selected == article) {
            entry.1 = adjusted_quantity(entry.1, delta);
        }
    }

    /// Returns the quantity of `article` if selected.
    #[must_use]
    pub fn quantity(&self, article: &ArticleId) -> Option<u32> {
        self.entries
            .iter()
            .find(|(selected, _)| selected == article)
            .map(|(_, quantity)| *quantity)
    }

    /// Returns the selected articles with their quantities, in selection
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&ArticleId, u32)> {
        self.entries.iter().map(|(article, quantity)| (article, *quantity))
    }

    /// Returns the number of selected articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

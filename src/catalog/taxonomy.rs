//! Category Taxonomy
//!
//! Parent links between category slugs. Only the post-add popup consults
//! this, to resolve a product's most specific category page; pricing never
//! depends on it.

use rustc_hash::FxHashMap;

use crate::categories::CategorySet;

/// Walk limit for parent chains. A malformed taxonomy with a cycle yields
/// the depth at the cap instead of looping.
const MAX_DEPTH: usize = 32;

/// Category parent links, keyed by slug.
#[derive(Debug, Default)]
pub struct Taxonomy {
    parents: FxHashMap<String, Option<String>>,
}

impl Taxonomy {
    /// Create an empty taxonomy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parents: FxHashMap::default(),
        }
    }

    /// Register a category slug with an optional parent slug.
    pub fn insert(&mut self, slug: &str, parent: Option<&str>) {
        self.parents
            .insert(slug.to_string(), parent.map(ToString::to_string));
    }

    /// Check whether the taxonomy knows the given slug.
    pub fn contains(&self, slug: &str) -> bool {
        self.parents.contains_key(slug)
    }

    /// Number of ancestors above the slug; `None` for unknown slugs.
    fn depth(&self, slug: &str) -> Option<usize> {
        let mut current = self.parents.get(slug)?;
        let mut depth = 0;

        while let Some(parent) = current {
            if depth >= MAX_DEPTH {
                break;
            }

            depth += 1;

            match self.parents.get(parent) {
                Some(next) => current = next,
                None => break,
            }
        }

        Some(depth)
    }

    /// The most specific (deepest) known slug in the given set.
    ///
    /// Slugs the taxonomy does not know are skipped; on equal depth the
    /// first slug in set order wins, keeping the result deterministic.
    pub fn leaf_of<'s>(&self, categories: &'s CategorySet) -> Option<&'s str> {
        let mut best: Option<(&str, usize)> = None;

        for slug in categories.iter() {
            let Some(depth) = self.depth(slug) else {
                continue;
            };

            if best.is_none_or(|(_, best_depth)| depth > best_depth) {
                best = Some((slug, depth));
            }
        }

        best.map(|(slug, _)| slug)
    }

    /// Storefront page URL for a known category slug.
    pub fn page_url(&self, slug: &str) -> Option<String> {
        self.contains(slug)
            .then(|| format!("/product-category/{slug}/"))
    }
}

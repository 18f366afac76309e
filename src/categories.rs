//! Categories
//!
//! Category slugs carried by products, and the ordered configuration of
//! BOGO-eligible categories shared by the classifier, the grouping stage and
//! the badge helpers.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Errors related to loading the eligible-category configuration.
#[derive(Debug, Error)]
pub enum CategoryConfigError {
    /// The YAML document could not be parsed into a slug list.
    #[error(transparent)]
    Yaml(#[from] serde_norway::Error),

    /// The configured slug list was empty.
    #[error("eligible category list is empty")]
    Empty,
}

/// A sorted, deduplicated set of category slugs attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    slugs: SmallVec<[String; 5]>,
}

impl CategorySet {
    /// Create a new category set from a vector of slugs.
    #[must_use]
    pub fn new(slugs: SmallVec<[String; 5]>) -> Self {
        let mut set = Self { slugs };

        set.slugs.sort();
        set.slugs.dedup();

        set
    }

    /// Create a new category set from string slices.
    pub fn from_strs(slugs: &[&str]) -> Self {
        Self::new(
            slugs
                .iter()
                .map(ToString::to_string)
                .collect::<SmallVec<[String; 5]>>(),
        )
    }

    /// Create an empty category set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            slugs: SmallVec::with_capacity(0),
        }
    }

    /// Check whether the set contains the given slug.
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.binary_search_by(|entry| entry.as_str().cmp(slug)).is_ok()
    }

    /// Add a slug to the set, keeping it sorted and deduplicated.
    pub fn add(&mut self, slug: &str) {
        let slug_string = slug.to_string();

        if let Err(pos) = self.slugs.binary_search(&slug_string) {
            self.slugs.insert(pos, slug_string);
        }
    }

    /// Remove a slug from the set, if present.
    pub fn remove(&mut self, slug: &str) {
        if let Ok(pos) = self.slugs.binary_search_by(|entry| entry.as_str().cmp(slug)) {
            self.slugs.remove(pos);
        }
    }

    /// Check whether the two sets share any slug.
    pub fn intersects(&self, other: &Self) -> bool {
        // Two pointers over the sorted vectors, O(n + m).
        let mut left = self.slugs.iter();
        let mut right = other.slugs.iter();
        let mut left_slug = left.next();
        let mut right_slug = right.next();

        while let (Some(left_slug_ref), Some(right_slug_ref)) = (left_slug, right_slug) {
            match left_slug_ref.cmp(right_slug_ref) {
                Ordering::Equal => return true,
                Ordering::Less => left_slug = left.next(),
                Ordering::Greater => right_slug = right.next(),
            }
        }

        false
    }

    /// Iterate over the slugs in the set.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }

    /// Get the number of slugs in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Check whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

/// The ordered list of BOGO-eligible category slugs.
///
/// This is the single source of truth for eligibility: the classifier, the
/// grouping stage, the mutation guard and the badge helpers are all handed
/// the same value, so the list cannot drift between code paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EligibleCategories {
    slugs: Vec<String>,
}

impl EligibleCategories {
    /// Create an eligible-category list from owned slugs, keeping their order.
    pub fn new(slugs: impl Into<Vec<String>>) -> Self {
        Self {
            slugs: slugs.into(),
        }
    }

    /// Create an eligible-category list from string slices, keeping their order.
    pub fn from_strs(slugs: &[&str]) -> Self {
        Self::new(slugs.iter().map(ToString::to_string).collect::<Vec<_>>())
    }

    /// Load an eligible-category list from a YAML sequence of slugs.
    ///
    /// # Errors
    ///
    /// - [`CategoryConfigError::Yaml`]: the document is not a sequence of strings.
    /// - [`CategoryConfigError::Empty`]: the sequence parsed but held no slugs.
    pub fn from_yaml(document: &str) -> Result<Self, CategoryConfigError> {
        let config: Self = serde_norway::from_str(document)?;

        if config.slugs.is_empty() {
            return Err(CategoryConfigError::Empty);
        }

        Ok(config)
    }

    /// Iterate over the slugs in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }

    /// Get the number of configured slugs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Check whether no slugs are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Return the first configured slug present in the given category set.
    ///
    /// Configured order decides the winner when a product sits in several
    /// eligible categories.
    pub fn first_match<'s>(&'s self, categories: &CategorySet) -> Option<&'s str> {
        self.iter().find(|slug| categories.contains(slug))
    }
}

impl Default for EligibleCategories {
    fn default() -> Self {
        Self::from_strs(&[
            "contrast-stitch",
            "cotton-casual-full-sleeve-shirt",
            "cotton-casual-half-sleeve-shirt",
            "denim-shirt",
            "flannel-shirt",
            "kaftan-shirt",
            "sweatshirt",
            "turtle-neck",
            "full-sleeves",
        ])
    }
}

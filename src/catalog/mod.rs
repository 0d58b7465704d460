//! Compiled-in marathon catalog.

mod data;

use once_cell::sync::Lazy;

use crate::entities::Marathon;

static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog::new(data::marathons()));

/// Read-only list of events, built once per process.
#[derive(Debug)]
pub struct Catalog {
    marathons: Vec<Marathon>,
}

impl Catalog {
    pub fn new(marathons: Vec<Marathon>) -> Self {
        Self { marathons }
    }

    /// The process-wide catalog.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    pub fn all(&self) -> &[Marathon] {
        &self.marathons
    }

    pub fn len(&self) -> usize {
        self.marathons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marathons.is_empty()
    }

    /// Looks up an event by its routing token. Unknown tokens are not an error here;
    /// callers decide how to render the miss.
    pub fn find_by_token(&self, token: &str) -> Option<&Marathon> {
        self.marathons.iter().find(|m| m.token == token)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Catalog;

    #[test]
    fn find_by_token() {
        let catalog = Catalog::global();

        let kazan = catalog.find_by_token("kazan").unwrap();
        assert_eq!(kazan.name, "Казанский марафон");
        assert_eq!(kazan.date.to_string(), "2025-05-12");

        assert!(catalog.find_by_token("nonexistent").is_none());
        assert!(catalog.find_by_token("Kazan").is_none());
    }

    #[test]
    fn tokens_are_unique() {
        let catalog = Catalog::global();
        let tokens: HashSet<&str> = catalog.all().iter().map(|m| m.token.as_str()).collect();

        assert_eq!(catalog.len(), 15);
        assert_eq!(tokens.len(), catalog.len());
    }

    #[test]
    fn detailed_events_carry_points_of_interest() {
        let catalog = Catalog::global();

        for token in ["moscow", "omsk", "saint-petersburg", "kazan", "sochi", "vladivostok"] {
            let marathon = catalog.find_by_token(token).unwrap();
            assert_eq!(marathon.accommodations.len(), 5, "{}", token);
            assert_eq!(marathon.restaurants.len(), 5, "{}", token);
            assert_eq!(marathon.attractions.len(), 5, "{}", token);
            assert!(!marathon.images.is_empty(), "{}", token);
        }

        let irkutsk = catalog.find_by_token("irkutsk").unwrap();
        assert!(!irkutsk.has_points_of_interest());
    }
}

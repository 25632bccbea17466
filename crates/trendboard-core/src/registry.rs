//! Chart handles retained by key
//!
//! Charts are created on the first render of their tab and never torn down.
//! The registry hands back the same handle for a key so later interactions
//! (legend clicks, bulk show/hide) mutate the chart already on screen.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ChartRegistry<H> {
    charts: HashMap<String, H>,
}

impl<H> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self {
            charts: HashMap::new(),
        }
    }
}

impl<H> ChartRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing handle for `key`, or the one built by `create`
    pub fn get_or_insert_with(&mut self, key: &str, create: impl FnOnce() -> H) -> &H {
        self.charts.entry(key.to_string()).or_insert_with(create)
    }

    pub fn get(&self, key: &str) -> Option<&H> {
        self.charts.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut H> {
        self.charts.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.charts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &H)> {
        self.charts.iter().map(|(k, h)| (k.as_str(), h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_insert_reuses_handle() {
        let mut registry = ChartRegistry::new();
        let mut created = 0;

        registry.get_or_insert_with("colorDynamicsChart", || {
            created += 1;
            10
        });
        let handle = *registry.get_or_insert_with("colorDynamicsChart", || {
            created += 1;
            20
        });

        assert_eq!(handle, 10);
        assert_eq!(created, 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_mut_mutates_in_place() {
        let mut registry: ChartRegistry<Vec<bool>> = ChartRegistry::new();
        registry.get_or_insert_with("a", || vec![true, true]);
        if let Some(flags) = registry.get_mut("a") {
            flags[1] = false;
        }
        assert_eq!(registry.get("a"), Some(&vec![true, false]));
        assert!(!registry.contains("b"));
    }
}

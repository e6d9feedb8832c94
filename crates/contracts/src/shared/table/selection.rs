//! Row selection for bulk actions, keyed by composite string keys.

use std::collections::BTreeSet;

/// Joins key parts with `+`, e.g. `composite_key(&["0171234", "NAGAD"])`
pub fn composite_key(parts: &[&str]) -> String {
    parts.join("+")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, checked: bool) {
        let key = key.into();
        if checked {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }

    pub fn toggle(&mut self, key: &str) {
        if !self.keys.remove(key) {
            self.keys.insert(key.to_string());
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.keys.iter()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }

    /// Header checkbox: select every visible key, or clear them
    pub fn set_all<I, S>(&mut self, visible: I, checked: bool)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in visible {
            self.set(key, checked);
        }
    }

    /// True when `visible` is non-empty and every key in it is selected
    pub fn all_selected<I, S>(&self, visible: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut any = false;
        for key in visible {
            any = true;
            if !self.keys.contains(key.as_ref()) {
                return false;
            }
        }
        any
    }

    /// Drop keys whose rows are no longer in the data set
    pub fn retain_visible<I, S>(&mut self, visible: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let visible: BTreeSet<String> = visible.into_iter().map(|s| s.as_ref().to_string()).collect();
        self.keys.retain(|k| visible.contains(k));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_key() {
        assert_eq!(composite_key(&["0171234", "NAGAD"]), "0171234+NAGAD");
    }

    #[test]
    fn test_set_and_toggle() {
        let mut selection = SelectionSet::new();
        selection.set("a+DBBL", true);
        selection.toggle("b+BKASH");
        assert_eq!(selection.len(), 2);
        selection.toggle("a+DBBL");
        selection.set("b+BKASH", false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_all_selected_and_retain() {
        let mut selection = SelectionSet::new();
        selection.set_all(["1", "2", "3"], true);
        assert!(selection.all_selected(["1", "2"]));
        assert!(!selection.all_selected(Vec::<String>::new()));

        selection.retain_visible(["2", "3", "4"]);
        assert_eq!(selection.to_vec(), vec!["2".to_string(), "3".to_string()]);
        assert!(!selection.all_selected(["2", "4"]));
    }
}

//! Pass-scoped, collision-free variable naming.

use std::collections::HashSet;

use indexmap::IndexMap;

/// Namespace a name is requested under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// User-visible workspace variable, resolved through the variable map.
    Variable,
    /// Internal bookkeeping variable owned by the generator.
    Developer,
}

/// Registry mapping internal identifiers to emitted, collision-free names.
///
/// A table lives for exactly one generation pass: [`NameTable::reset`] wipes
/// every assignment while keeping the reserved-word set. Emitted names never
/// collide with each other (compared case-insensitively) or with a reserved
/// word; collisions resolve by suffixing `2`, `3`, … onto the base name.
#[derive(Debug, Clone)]
pub struct NameTable {
    reserved: HashSet<String>,
    /// Variable id → declared display name.
    variable_map: IndexMap<String, String>,
    /// (namespace, identifier) → emitted name.
    assigned: IndexMap<(NameKind, String), String>,
    /// Lowercased emitted names.
    in_use: HashSet<String>,
}

impl NameTable {
    /// Create a table that avoids the given reserved words.
    pub fn new(reserved_words: &[&str]) -> Self {
        Self {
            reserved: reserved_words.iter().map(|w| w.to_string()).collect(),
            variable_map: IndexMap::new(),
            assigned: IndexMap::new(),
            in_use: HashSet::new(),
        }
    }

    /// Drop all assignments, keeping the reserved-word set.
    pub fn reset(&mut self) {
        self.variable_map.clear();
        self.assigned.clear();
        self.in_use.clear();
    }

    /// Install the id → declared-name map for the current program.
    pub fn set_variable_map<I>(&mut self, variables: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.variable_map = variables.into_iter().collect();
    }

    /// The emitted name for an identifier, assigning one on first use.
    ///
    /// Repeated lookups of the same (kind, identifier) pair return the same
    /// name for the lifetime of the pass. Variable identifiers not present
    /// in the variable map fall back to the identifier itself as the
    /// display name.
    pub fn get_name(&mut self, identifier: &str, kind: NameKind) -> String {
        let key = (kind, identifier.to_string());
        if let Some(name) = self.assigned.get(&key) {
            return name.clone();
        }

        let display = match kind {
            NameKind::Variable => self
                .variable_map
                .get(identifier)
                .cloned()
                .unwrap_or_else(|| identifier.to_string()),
            NameKind::Developer => identifier.to_string(),
        };
        let name = self.distinct_name(&Self::safe_name(&display));
        self.assigned.insert(key, name.clone());
        name
    }

    /// Sanitize a display name into a valid identifier.
    pub fn safe_name(name: &str) -> String {
        if name.is_empty() {
            return "unnamed".to_string();
        }
        let mut safe: String = name
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        if safe.starts_with(|c: char| c.is_ascii_digit()) {
            safe.insert_str(0, "my_");
        }
        safe
    }

    fn distinct_name(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut suffix = 2usize;
        while self.reserved.contains(&candidate) || self.in_use.contains(&candidate.to_lowercase())
        {
            candidate = format!("{base}{suffix}");
            suffix += 1;
        }
        self.in_use.insert(candidate.to_lowercase());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_through_variable_map() {
        let mut table = NameTable::new(&[]);
        table.set_variable_map([("v1".to_string(), "count".to_string())]);

        assert_eq!(table.get_name("v1", NameKind::Variable), "count");
        // Stable across repeated lookups.
        assert_eq!(table.get_name("v1", NameKind::Variable), "count");
    }

    #[test]
    fn test_reserved_words_avoided() {
        let mut table = NameTable::new(&["print", "if"]);
        table.set_variable_map([("v1".to_string(), "print".to_string())]);

        assert_eq!(table.get_name("v1", NameKind::Variable), "print2");
    }

    #[test]
    fn test_case_insensitive_collisions() {
        let mut table = NameTable::new(&[]);
        table.set_variable_map([
            ("v1".to_string(), "item".to_string()),
            ("v2".to_string(), "Item".to_string()),
        ]);

        assert_eq!(table.get_name("v1", NameKind::Variable), "item");
        assert_eq!(table.get_name("v2", NameKind::Variable), "Item2");
    }

    #[test]
    fn test_namespaces_share_emitted_names() {
        let mut table = NameTable::new(&[]);
        table.set_variable_map([("v1".to_string(), "step".to_string())]);

        assert_eq!(table.get_name("step", NameKind::Developer), "step");
        assert_eq!(table.get_name("v1", NameKind::Variable), "step2");
    }

    #[test]
    fn test_safe_name() {
        assert_eq!(NameTable::safe_name("my var"), "my_var");
        assert_eq!(NameTable::safe_name("3rd"), "my_3rd");
        assert_eq!(NameTable::safe_name(""), "unnamed");
        assert_eq!(NameTable::safe_name("ok_name"), "ok_name");
    }

    #[test]
    fn test_reset_clears_assignments() {
        let mut table = NameTable::new(&[]);
        table.set_variable_map([("v1".to_string(), "x".to_string())]);
        assert_eq!(table.get_name("v1", NameKind::Variable), "x");

        table.reset();
        table.set_variable_map([("v9".to_string(), "x".to_string())]);
        // Fresh pass: no suffix carried over from the previous one.
        assert_eq!(table.get_name("v9", NameKind::Variable), "x");
    }

    #[test]
    fn test_unmapped_variable_falls_back_to_id() {
        let mut table = NameTable::new(&[]);
        assert_eq!(table.get_name("orphan", NameKind::Variable), "orphan");
    }
}

//! Ordered directive storage shared by the multi-directive builders.
//!
//! Directives are kept as raw strings in the order they were added and are
//! joined with the header's separator at render time. Nothing is sorted and
//! same-key entries are never merged.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveList {
    directives: Vec<String>,
}

impl DirectiveList {
    pub fn new() -> Self {
        Self {
            directives: Vec::new(),
        }
    }

    /// Appends a directive unconditionally.
    pub fn push(&mut self, directive: String) {
        self.directives.push(directive);
    }

    /// Appends a directive unless the exact same string is already present.
    pub fn push_unique(&mut self, directive: String) {
        if !self.directives.contains(&directive) {
            self.directives.push(directive);
        }
    }

    /// Drops every directive and keeps only `value`.
    pub fn replace(&mut self, value: &str) {
        self.directives.clear();
        self.directives.push(value.to_string());
    }

    pub fn clear(&mut self) {
        self.directives.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.directives
    }

    /// Joins the directives with `separator`, or returns `default` when empty.
    pub fn render(&self, separator: &str, default: &str) -> String {
        if self.directives.is_empty() {
            default.to_string()
        } else {
            self.directives.join(separator)
        }
    }
}

/// `directive` alone, or `directive v1 v2 ...` when values are given.
pub fn spaced(directive: &str, values: &[&str]) -> String {
    if values.is_empty() {
        directive.to_string()
    } else {
        format!("{} {}", directive, values.join(" "))
    }
}

/// `directive=(v1 v2 ...)`, including the empty `directive=()` form.
pub fn parenthesized(directive: &str, values: &[&str]) -> String {
    format!("{}=({})", directive, values.join(" "))
}

//! Extension list module
//!
//! Holds the ordered list of candidate file extensions tried during path
//! resolution. Entries are normalized once at construction; the list is
//! immutable afterwards and safe to share across concurrent requests.

/// Ordered, normalized list of candidate file extensions.
///
/// Order is significant: it defines probe priority. Every entry is
/// guaranteed to start with a `.` separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionList {
    entries: Vec<String>,
}

impl ExtensionList {
    /// Build a normalized list from raw configuration entries.
    ///
    /// Entries that do not already start with `.` get one prepended;
    /// order is preserved exactly as given.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = raw
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref();
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        Self { entries }
    }

    /// Iterate extensions in probe order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_missing_dot() {
        let list = ExtensionList::new(["html", ".json"]);
        let entries: Vec<&str> = list.iter().collect();
        assert_eq!(entries, vec![".html", ".json"]);
    }

    #[test]
    fn test_preserves_configured_order() {
        let list = ExtensionList::new(["htm", "html", "json"]);
        let entries: Vec<&str> = list.iter().collect();
        assert_eq!(entries, vec![".htm", ".html", ".json"]);
    }

    #[test]
    fn test_keeps_dotted_entries_verbatim() {
        let list = ExtensionList::new([".html"]);
        let entries: Vec<&str> = list.iter().collect();
        assert_eq!(entries, vec![".html"]);
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        let list = ExtensionList::new(Vec::<String>::new());
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_empty_entry_normalizes_to_bare_dot() {
        let list = ExtensionList::new([""]);
        let entries: Vec<&str> = list.iter().collect();
        assert_eq!(entries, vec!["."]);
    }
}

//! Page-level types.

use serde::{Deserialize, Serialize};

/// A single page and its accumulated content stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Content stream lines in emission order
    pub lines: Vec<String>,
}

impl Page {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    /// Append operator lines to the content stream.
    pub fn append<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.lines.extend(ops);
    }

    /// The content stream body.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Byte length of the content stream body.
    pub fn content_len(&self) -> usize {
        if self.lines.is_empty() {
            return 0;
        }
        self.lines.iter().map(String::len).sum::<usize>() + self.lines.len() - 1
    }

    /// Check if no operators were emitted on this page.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_new() {
        let page = Page::new(3);
        assert_eq!(page.number, 3);
        assert!(page.is_empty());
        assert_eq!(page.content(), "");
        assert_eq!(page.content_len(), 0);
    }

    #[test]
    fn test_page_append_and_content() {
        let mut page = Page::new(1);
        page.append(vec!["BT".to_string(), "ET".to_string()]);
        page.append(vec!["S".to_string()]);

        assert_eq!(page.content(), "BT\nET\nS");
        assert_eq!(page.content_len(), page.content().len());
    }

    #[test]
    fn test_content_len_counts_bytes() {
        let mut page = Page::new(1);
        page.append(vec!["(é) Tj".to_string()]);
        assert_eq!(page.content_len(), 7);
    }
}

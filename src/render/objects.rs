//! PDF object table.
//!
//! Objects are laid out in emission order first; an object's number is its
//! position in that order plus one. References between objects are resolved
//! by kind through the table, so the numbering scheme lives in exactly one
//! place:
//!
//! | Object | Number |
//! |--------|--------|
//! | Catalog | 1 |
//! | Pages root | 2 |
//! | Font | 3 |
//! | Page *i* | 4 + 2*i* |
//! | Contents *i* | 5 + 2*i* |
//! | Outlines | 4 + 2*n* |
//! | ProcSet | 5 + 2*n* |
//!
//! where *n* is the page count.

use std::collections::HashMap;

/// PDF object number.
pub type ObjectId = u32;

/// The logical entity an object represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Document catalog
    Catalog,
    /// Pages root
    PageTree,
    /// Shared built-in font
    Font,
    /// Page dictionary for the zero-based page index
    Page(usize),
    /// Content stream for the zero-based page index
    Contents(usize),
    /// Empty document outline
    Outlines,
    /// Procedure set array shared by all pages
    ProcSet,
}

/// Objects of a document in emission order, with their numbers.
#[derive(Debug, Clone)]
pub struct ObjectTable {
    order: Vec<ObjectKind>,
    numbers: HashMap<ObjectKind, ObjectId>,
}

impl ObjectTable {
    /// Build the table for a document with `page_count` pages.
    pub fn for_pages(page_count: usize) -> Self {
        let mut order = vec![ObjectKind::Catalog, ObjectKind::PageTree, ObjectKind::Font];
        for i in 0..page_count {
            order.push(ObjectKind::Page(i));
            order.push(ObjectKind::Contents(i));
        }
        order.push(ObjectKind::Outlines);
        order.push(ObjectKind::ProcSet);

        let numbers = order
            .iter()
            .enumerate()
            .map(|(index, kind)| (*kind, index as ObjectId + 1))
            .collect();

        Self { order, numbers }
    }

    /// Number assigned to `kind`.
    ///
    /// # Panics
    ///
    /// Panics if `kind` refers to a page outside the table.
    pub fn number(&self, kind: ObjectKind) -> ObjectId {
        self.numbers[&kind]
    }

    /// Number assigned to `kind`, if it exists.
    pub fn get(&self, kind: ObjectKind) -> Option<ObjectId> {
        self.numbers.get(&kind).copied()
    }

    /// Objects with their numbers, in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, ObjectKind)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(index, kind)| (index as ObjectId + 1, *kind))
    }

    /// Number of objects, excluding the free-list head.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the table holds no objects.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cross-reference table size: objects plus the free-list head.
    pub fn xref_size(&self) -> usize {
        self.len() + 1
    }

    /// Page object numbers in page order.
    pub fn page_numbers(&self) -> Vec<ObjectId> {
        self.iter()
            .filter(|(_, kind)| matches!(kind, ObjectKind::Page(_)))
            .map(|(number, _)| number)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_objects() {
        let table = ObjectTable::for_pages(0);
        assert_eq!(table.number(ObjectKind::Catalog), 1);
        assert_eq!(table.number(ObjectKind::PageTree), 2);
        assert_eq!(table.number(ObjectKind::Font), 3);
        assert_eq!(table.number(ObjectKind::Outlines), 4);
        assert_eq!(table.number(ObjectKind::ProcSet), 5);
        assert_eq!(table.len(), 5);
        assert!(table.page_numbers().is_empty());
    }

    #[test]
    fn test_two_page_numbering() {
        let table = ObjectTable::for_pages(2);
        assert_eq!(table.number(ObjectKind::Page(0)), 4);
        assert_eq!(table.number(ObjectKind::Contents(0)), 5);
        assert_eq!(table.number(ObjectKind::Page(1)), 6);
        assert_eq!(table.number(ObjectKind::Contents(1)), 7);
        assert_eq!(table.page_numbers(), vec![4, 6]);
        assert_eq!(table.number(ObjectKind::Outlines), 8);
        assert_eq!(table.number(ObjectKind::ProcSet), 9);
        assert_eq!(table.get(ObjectKind::Page(2)), None);
    }

    #[test]
    fn test_numbering_is_contiguous() {
        for pages in 0..6 {
            let table = ObjectTable::for_pages(pages);
            let numbers: Vec<_> = table.iter().map(|(n, _)| n).collect();
            let expected: Vec<_> = (1..=table.len() as ObjectId).collect();
            assert_eq!(numbers, expected);
            assert_eq!(table.xref_size(), 5 + pages * 2 + 1);
            for i in 0..pages {
                assert_eq!(table.number(ObjectKind::Page(i)), 4 + i as ObjectId * 2);
                assert_eq!(table.number(ObjectKind::Contents(i)), 5 + i as ObjectId * 2);
            }
        }
    }
}

//! Derived views over in-memory collections.
//!
//! Every list page narrows its collection the same way: a free-text query
//! matched case-insensitively against the record's searchable fields, plus
//! any number of categorical predicates (tabs, toggles). Results keep the
//! collection's order and borrow from it; the collection is never touched.

/// A record that can be matched by a free-text query.
pub trait Searchable {
    /// Fields the query is matched against, in no particular order.
    fn search_fields(&self) -> Vec<&str>;

    fn matches_query(&self, query: &str) -> bool {
        matches_needle(self, &normalize(query))
    }
}

/// A categorical filter applied on top of the text query.
pub type Predicate<'p, T> = &'p dyn Fn(&T) -> bool;

pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

fn matches_needle<T: Searchable + ?Sized>(record: &T, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .into_iter()
            .any(|field| normalize(field).contains(needle))
}

/// Records satisfying every predicate, in collection order.
pub fn filter_view<'a, T>(records: &'a [T], predicates: &[Predicate<'_, T>]) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| predicates.iter().all(|p| p(*record)))
        .collect()
}

/// Records matching `query` and every predicate, in collection order.
pub fn derive_view<'a, T: Searchable>(
    records: &'a [T],
    query: &str,
    predicates: &[Predicate<'_, T>],
) -> Vec<&'a T> {
    let needle = normalize(query);
    records
        .iter()
        .filter(|record| matches_needle(*record, &needle))
        .filter(|record| predicates.iter().all(|p| p(*record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        code: &'static str,
        label: &'static str,
        flag: bool,
    }

    impl Searchable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.code, self.label]
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { code: "A-1", label: "Fresh Milk", flag: true },
            Item { code: "B-2", label: "Dark Chocolate", flag: false },
            Item { code: "C-3", label: "Milk Chocolate", flag: true },
            Item { code: "D-4", label: "Rye Bread", flag: false },
        ]
    }

    fn codes(view: &[&Item]) -> Vec<&'static str> {
        view.iter().map(|i| i.code).collect()
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let items = items();
        assert_eq!(codes(&derive_view(&items, "", &[])), vec!["A-1", "B-2", "C-3", "D-4"]);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let items = items();
        assert_eq!(codes(&derive_view(&items, "MILK", &[])), vec!["A-1", "C-3"]);
        assert_eq!(codes(&derive_view(&items, "b-", &[])), vec!["B-2"]);
        assert!(derive_view(&items, "cheese", &[]).is_empty());
    }

    #[test]
    fn whitespace_in_query_is_significant() {
        let items = items();
        assert_eq!(codes(&derive_view(&items, "k c", &[])), vec!["B-2", "C-3"]);
        assert_eq!(codes(&derive_view(&items, "milk c", &[])), vec!["C-3"]);
        assert!(derive_view(&items, " milk ", &[]).is_empty());
    }

    #[test]
    fn predicates_are_conjunctive() {
        let items = items();
        let flagged = |i: &Item| i.flag;
        let chocolate = |i: &Item| i.label.contains("Chocolate");
        assert_eq!(codes(&derive_view(&items, "", &[&flagged])), vec!["A-1", "C-3"]);
        assert_eq!(codes(&derive_view(&items, "", &[&flagged, &chocolate])), vec!["C-3"]);
        assert_eq!(codes(&filter_view(&items, &[&chocolate])), vec!["B-2", "C-3"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = items();
        let flagged = |i: &Item| i.flag;
        for query in ["", "milk", "o", "zzz", "A-"] {
            let once: Vec<Item> = derive_view(&items, query, &[&flagged])
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<Item> = derive_view(&once, query, &[&flagged])
                .into_iter()
                .cloned()
                .collect();
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn membership_matches_substring_rule() {
        let items = items();
        for query in ["milk", "CHOC", "4", "bread", "x"] {
            let view = derive_view(&items, query, &[]);
            for item in &items {
                let expected = item.matches_query(query);
                assert_eq!(view.contains(&item), expected, "{} / {query}", item.code);
            }
        }
    }

    #[test]
    fn empty_collection_yields_empty_view() {
        let items: Vec<Item> = Vec::new();
        assert!(derive_view(&items, "milk", &[]).is_empty());
        assert!(filter_view(&items, &[]).is_empty());
    }

    #[test]
    fn unicode_queries_case_fold() {
        let items = vec![Item { code: "É-1", label: "Crème Brûlée", flag: true }];
        assert_eq!(derive_view(&items, "CRÈME", &[]).len(), 1);
        assert_eq!(derive_view(&items, "é-1", &[]).len(), 1);
    }
}

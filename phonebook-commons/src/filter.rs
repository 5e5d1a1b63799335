use crate::model::Record;

/// Records whose name contains `term`, ignoring case. Order is kept, an empty term matches
/// everything.
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    let term = term.to_lowercase();

    records.iter().filter(|record| record.name.to_lowercase().contains(&term)).collect()
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    fn record(id: u64, name: &str) -> Record {
        Record { id: id.into(), name: name.to_string(), number: "0".to_string() }
    }

    fn names(filtered: Vec<&Record>) -> Vec<&str> {
        filtered.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn substring_in_any_position_test() {
        let records = vec![record(1, "Arto Hellas"), record(2, "Martti Tervonen")];

        assert_eq!(vec!["Arto Hellas", "Martti Tervonen"], names(filter_records(&records, "art")));
        assert_eq!(vec!["Arto Hellas"], names(filter_records(&records, "Hellas")));
    }

    #[test]
    fn case_insensitive_test() {
        let records = vec![record(1, "Arto Hellas"), record(2, "Dan Abramov")];

        assert_eq!(vec!["Dan Abramov"], names(filter_records(&records, "ABRA")));
    }

    #[test]
    fn empty_term_matches_all_in_order_test() {
        let records = vec![record(1, "b"), record(2, "a"), record(3, "c")];

        assert_eq!(vec!["b", "a", "c"], names(filter_records(&records, "")));
    }

    #[test]
    fn no_match_test() {
        let records = vec![record(1, "Arto Hellas")];

        assert!(filter_records(&records, "zz").is_empty());
    }
}

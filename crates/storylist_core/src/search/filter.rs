//! Case-insensitive title filter.
//!
//! # Invariants
//! - Output preserves input order.
//! - An empty term matches every record.
//! - Comparison lowercases both sides; no trimming or tokenizing.

use crate::model::record::Record;

/// Returns whether `record`'s title contains `term`, ignoring case.
pub fn matches_term(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(&term.to_lowercase())
}

/// Narrows `records` to those whose title contains `term`, ignoring case.
pub fn filter_records<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    if term.is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_records, matches_term};
    use crate::model::record::{Record, RecordId};
    use crate::model::seed::seed_records;

    fn titles<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|record| record.title.as_str()).collect()
    }

    #[test]
    fn empty_term_keeps_everything_in_order() {
        let records = seed_records();
        assert_eq!(titles(&filter_records(&records, "")), vec!["React", "Redux"]);
    }

    #[test]
    fn shared_prefix_matches_both_seed_records() {
        let records = seed_records();
        assert_eq!(titles(&filter_records(&records, "re")), vec!["React", "Redux"]);
    }

    #[test]
    fn match_ignores_case_on_both_sides() {
        let records = seed_records();
        assert_eq!(titles(&filter_records(&records, "rEDu")), vec!["Redux"]);
        assert_eq!(titles(&filter_records(&records, "ACT")), vec!["React"]);
    }

    #[test]
    fn unmatched_term_yields_empty_list() {
        let records = seed_records();
        assert!(filter_records(&records, "angular").is_empty());
    }

    #[test]
    fn whitespace_is_part_of_the_term() {
        let records = vec![Record::with_id(RecordId::Seed(5), "Vue Router")];
        assert!(matches_term(&records[0], "e r"));
        assert!(!matches_term(&records[0], " vue"));
        assert_eq!(filter_records(&records, " vue").len(), 0);
    }

    #[test]
    fn predicate_agrees_with_filter() {
        let records = seed_records();
        for term in ["", "r", "re", "dux", "x", "React", "zzz"] {
            let filtered = filter_records(&records, term);
            for record in &records {
                assert_eq!(
                    matches_term(record, term),
                    filtered.iter().any(|hit| hit.id == record.id),
                    "term `{term}` disagrees for {}",
                    record.title
                );
            }
        }
    }
}

//! Property tests for grouping correctness and count conservation.

use std::collections::HashMap;

use combo_count::{
    aggregate::Aggregator,
    record::Record,
    schema::{FieldIndexMap, LogicalField},
};
use proptest::prelude::*;

fn record_strategy() -> impl Strategy<Value = [String; 7]> {
    // Small alphabets keep collisions, and therefore repeated combinations, likely.
    (
        prop_oneof![Just("Apple"), Just("Samsung"), Just("apple")],
        prop_oneof![Just("iPhone12"), Just("S21")],
        prop_oneof![Just(""), Just("Black"), Just("White")],
        prop_oneof![Just(""), Just("64GB")],
        prop_oneof![Just(""), Just("EE")],
        prop_oneof![Just(""), Just("A"), Just("B")],
        prop_oneof![Just(""), Just("Working")],
    )
        .prop_map(|(make, model, colour, capacity, network, grade, condition)| {
            [make, model, colour, capacity, network, grade, condition].map(str::to_string)
        })
}

proptest! {
    #[test]
    fn counts_match_occurrences(rows in proptest::collection::vec(record_strategy(), 0..60)) {
        let mut aggregator = Aggregator::new();
        let mut expected: HashMap<[String; 7], usize> = HashMap::new();
        let mut first_seen: Vec<[String; 7]> = Vec::new();

        for (ingested, values) in rows.iter().enumerate() {
            if !expected.contains_key(values) {
                first_seen.push(values.clone());
            }
            *expected.entry(values.clone()).or_insert(0) += 1;
            aggregator.ingest(Record::from_values(values.clone()));
            prop_assert_eq!(aggregator.total_count(), ingested + 1);
        }

        prop_assert_eq!(aggregator.entries().len(), expected.len());
        prop_assert_eq!(aggregator.records().len(), rows.len());
        for (entry, values) in aggregator.entries().iter().zip(&first_seen) {
            prop_assert_eq!(entry.record.values(), &values[..]);
            prop_assert_eq!(entry.count, expected[values]);
        }
    }

    #[test]
    fn header_permutation_does_not_change_records(
        values in record_strategy(),
        order in Just((0..7usize).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let header = order
            .iter()
            .map(|idx| LogicalField::ALL[*idx].header_name().to_string())
            .collect::<Vec<_>>();
        let row = order.iter().map(|idx| values[*idx].clone()).collect::<Vec<_>>();
        prop_assume!(!row[0].is_empty() && !row[1].is_empty());

        let map = FieldIndexMap::from_header(&header);
        let record = Record::normalize(&row, &map, 2).expect("required columns populated");
        prop_assert_eq!(record, Record::from_values(values));
    }
}

// Property tests: join then split returns the original fields

use proptest::prelude::*;
use textcolumns::{
    join_quoted_row, join_quoted_rows, join_quoted_rows_parallel, split_quoted_row, Signals,
};

/// Characters that collide with every signal used below, plus filler
const ALPHABET: &[char] = &[
    'a', 'b', ' ', 'ü', ',', '\t', '|', '"', '\\', '\n', '\r', '<', '>', 'd', 'n', 'l',
];

fn field() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET), 0..10)
        .prop_map(|chars| chars.into_iter().collect())
}

fn fields() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(field(), 1..6)
}

fn signal_sets() -> Vec<Signals> {
    vec![
        Signals::csv(),
        Signals::tab_delimited(),
        Signals::pipe_delimited(),
        Signals::new(",", "", "\n", "\\").unwrap(),
        Signals::new(",", "\"", "\n", "\\").unwrap(),
        Signals::new("<d>", "\"", "<nl>", "").unwrap(),
    ]
}

proptest! {
    #[test]
    fn join_then_split_round_trips(fields in fields()) {
        for signals in signal_sets() {
            let row = join_quoted_row(&fields, &signals, false).unwrap();
            prop_assert_eq!(split_quoted_row(&row, &signals).unwrap(), fields.clone());
        }
    }

    #[test]
    fn forced_quotes_round_trip(fields in fields()) {
        let signals = Signals::csv();
        let row = join_quoted_row(&fields, &signals, true).unwrap();
        prop_assert_eq!(split_quoted_row(&row, &signals).unwrap(), fields);
    }

    #[test]
    fn parallel_join_matches_sequential(rows in prop::collection::vec(fields(), 0..20)) {
        let signals = Signals::new(",", "\"", "\n", "\\").unwrap();
        let sequential = join_quoted_rows(&rows, &signals, false).unwrap();
        let parallel = join_quoted_rows_parallel(&rows, &signals, false).unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}

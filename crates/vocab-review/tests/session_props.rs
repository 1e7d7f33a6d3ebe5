//! Property tests: the cursor and the match list only ever point at words
//! offered for review, whatever sequence of operations is applied.

use std::sync::Arc;

use proptest::prelude::*;
use vocab_model::{Catalog, ExclusionSet, FilterConfig, WordState};
use vocab_review::filter::{count_accepted, evaluate};
use vocab_review::{Direction, Session};

const WORDS: [(&str, u32); 8] = [
    ("the", 1204),
    ("Oliver", 412),
    ("back", 96),
    ("country", 41),
    ("Surgeon", 12),
    ("parish", 40),
    ("trying", 7),
    ("Workhouse", 3),
];

#[derive(Debug, Clone)]
enum Step {
    Classify(usize, WordState),
    ClassifyCurrent(WordState),
    Filter {
        min_letters: usize,
        min_occurrences: u32,
        capital: bool,
        exclude_first: bool,
    },
    FiltersEnabled(bool),
    Query(&'static str),
    Advance(Direction),
    ClearSearch,
}

fn state() -> impl Strategy<Value = WordState> {
    prop_oneof![
        Just(WordState::Unclassified),
        Just(WordState::Known),
        Just(WordState::Unknown),
    ]
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..WORDS.len(), state()).prop_map(|(index, state)| Step::Classify(index, state)),
        state().prop_map(Step::ClassifyCurrent),
        (0usize..10, 0u32..500, any::<bool>(), any::<bool>()).prop_map(
            |(min_letters, min_occurrences, capital, exclude_first)| Step::Filter {
                min_letters,
                min_occurrences,
                capital,
                exclude_first,
            }
        ),
        any::<bool>().prop_map(Step::FiltersEnabled),
        prop::sample::select(vec!["t", "try", "o", "ish", "zzz", "TH"]).prop_map(Step::Query),
        prop_oneof![Just(Direction::Next), Just(Direction::Previous)].prop_map(Step::Advance),
        Just(Step::ClearSearch),
    ]
}

fn apply(session: &mut Session, step: &Step) {
    // Rejected operations leave the session unchanged, so errors are ignored.
    match step {
        Step::Classify(index, state) => {
            let _ = session.classify(*index, *state);
        }
        Step::ClassifyCurrent(state) => {
            let _ = session.classify_current(*state);
        }
        Step::Filter {
            min_letters,
            min_occurrences,
            capital,
            exclude_first,
        } => {
            let mut config = FilterConfig::default()
                .with_min_letters(*min_letters)
                .with_min_occurrences(*min_occurrences)
                .with_initial_capital(*capital);
            if *exclude_first {
                config.add_exclusion_set(ExclusionSet::from_words("common", ["the"]));
            }
            let _ = session.apply_filter(config);
        }
        Step::FiltersEnabled(enabled) => {
            let _ = session.set_filters_enabled(*enabled);
        }
        Step::Query(query) => {
            session.set_query(query);
        }
        Step::Advance(direction) => {
            session.advance(*direction);
        }
        Step::ClearSearch => session.clear_search(),
    }
}

fn accepted(session: &Session) -> Vec<usize> {
    session
        .catalog()
        .iter()
        .filter(|word| {
            evaluate(session.filter(), word)
                && session.state_of(word.index) == WordState::Unclassified
        })
        .map(|word| word.index)
        .collect()
}

proptest! {
    #[test]
    fn cursor_and_matches_stay_on_accepted_words(
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let catalog = Catalog::from_words(WORDS).unwrap();
        let mut session = Session::new("props", Arc::new(catalog)).unwrap();

        for step in &steps {
            apply(&mut session, step);
            let accepted = accepted(&session);

            prop_assert_eq!(session.cursor().is_some(), !accepted.is_empty(), "after {:?}", step);
            if let Some(cursor) = session.cursor() {
                prop_assert!(accepted.contains(&cursor), "cursor {} after {:?}", cursor, step);
            }
            for index in session.search().matches() {
                prop_assert!(accepted.contains(index), "match {} after {:?}", index, step);
            }
            prop_assert!(
                !session.filter().filters_enabled
                    || count_accepted(session.filter(), session.catalog()) > 0
            );
        }
    }
}

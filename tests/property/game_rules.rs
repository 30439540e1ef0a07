//! Property-based tests for game rule invariants

use std::collections::HashSet;
use proptest::prelude::*;
use shiritori::{GameConfig, PlayerId, Rejection, Submission, TurnOutcome, TurnResolver};

#[derive(Debug, Clone)]
enum Action {
    Submit { word: String, in_dictionary: bool },
    Tick,
}

/// Short words over a small alphabet so chains and repeats actually happen
fn arb_word() -> impl Strategy<Value = String> {
    "[a-e]{0,6}"
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (arb_word(), any::<bool>()).prop_map(|(word, in_dictionary)| Action::Submit { word, in_dictionary }),
        1 => Just(Action::Tick),
    ]
}

fn apply(resolver: &mut TurnResolver, action: &Action) -> Option<TurnOutcome> {
    match action {
        Action::Submit { word, in_dictionary } => {
            resolver.set_pending_word(word.clone());
            match resolver.submit() {
                Submission::Resolved(outcome) => Some(outcome),
                Submission::AwaitingLookup(lookup) => Some(resolver.complete_lookup(lookup, *in_dictionary)),
                Submission::Busy => None,
            }
        }
        Action::Tick => resolver.tick(),
    }
}

proptest! {
    #[test]
    fn prop_short_words_rejected_without_penalty(word in "[a-z]{0,3}") {
        let mut resolver = TurnResolver::new(GameConfig::default());
        resolver.set_pending_word(word.clone());

        let submission = resolver.submit();

        prop_assert_eq!(
            submission,
            Submission::Resolved(TurnOutcome::Rejected {
                player: PlayerId::One,
                rejection: Rejection::TooShort { min_length: 4 },
            })
        );
        prop_assert_eq!(resolver.state().score(PlayerId::One), 0);
        prop_assert_eq!(resolver.state().pending_word(), word.as_str());
    }

    #[test]
    fn prop_turn_invariants_hold(actions in prop::collection::vec(arb_action(), 1..80)) {
        let mut resolver = TurnResolver::new(GameConfig::default());

        for action in &actions {
            let before = resolver.state().clone();
            let outcome = apply(&mut resolver, action);
            let after = resolver.state();

            prop_assert!(after.remaining_seconds() <= 12);
            prop_assert!(!resolver.lookup_in_flight());

            match outcome {
                Some(TurnOutcome::Accepted { player, word }) => {
                    prop_assert_eq!(player, before.active_turn());
                    prop_assert_eq!(after.active_turn(), player.other());
                    prop_assert_eq!(after.remaining_seconds(), 12);
                    prop_assert_eq!(after.word_history(player).last(), Some(&word));
                    prop_assert_eq!(after.word_history(player).len(), before.word_history(player).len() + 1);
                    prop_assert_eq!(after.word_history(player.other()), before.word_history(player.other()));
                    prop_assert_eq!(after.score(player), before.score(player) + 1);
                }
                Some(TurnOutcome::Rejected { player, rejection }) => {
                    prop_assert_eq!(after.active_turn(), before.active_turn());
                    prop_assert_eq!(after.remaining_seconds(), before.remaining_seconds());
                    prop_assert_eq!(after.players().map(|p| p.word_history.clone()),
                                    before.players().map(|p| p.word_history.clone()));
                    let penalty = if matches!(rejection, Rejection::ChainMismatch { .. }) { 1 } else { 0 };
                    prop_assert_eq!(after.score(player), before.score(player) - penalty);
                }
                Some(TurnOutcome::Forfeited { player }) => {
                    prop_assert_eq!(before.remaining_seconds(), 1);
                    prop_assert_eq!(after.active_turn(), player.other());
                    prop_assert_eq!(after.remaining_seconds(), 12);
                    prop_assert_eq!(after.score(player), before.score(player) - 1);
                }
                Some(TurnOutcome::Stale { .. }) => prop_assert!(false, "no lookup can go stale here"),
                None => {
                    prop_assert_eq!(after.active_turn(), before.active_turn());
                    prop_assert_eq!(after.remaining_seconds(), before.remaining_seconds() - 1);
                }
            }

            for player in PlayerId::ALL {
                let history = after.word_history(player);
                let unique: HashSet<_> = history.iter().collect();
                prop_assert_eq!(unique.len(), history.len());
            }
        }
    }

    #[test]
    fn prop_accepted_words_follow_the_chain(actions in prop::collection::vec(arb_action(), 1..80)) {
        let mut resolver = TurnResolver::new(GameConfig::default());

        for action in &actions {
            let required = resolver.state().required_initial();
            if let Some(TurnOutcome::Accepted { word, .. }) = apply(&mut resolver, action) {
                if let Some(required) = required {
                    prop_assert_eq!(word.chars().next(), Some(required));
                }
            }
        }
    }
}

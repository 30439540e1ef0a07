//! Unit tests for the word rules

use shiritori::game::validation::{check_chain, check_length, check_local, validate_word};
use shiritori::{GameConfig, PlayerId, Rejection, TurnResolver, WordListDictionary};

use crate::mocks::MockDictionary;

/// Resolver where Player 1 has opened with `first` and Player 2 is to move
fn after_opening(first: &str) -> TurnResolver {
    let mut resolver = TurnResolver::new(GameConfig::default());
    resolver.set_pending_word(first);
    match resolver.submit() {
        shiritori::Submission::AwaitingLookup(lookup) => {
            resolver.complete_lookup(lookup, true);
        }
        other => panic!("opening word not sent to the dictionary: {:?}", other),
    }
    resolver
}

#[test]
fn test_min_length_is_configurable() {
    let config = GameConfig {
        min_word_length: 6,
        ..GameConfig::default()
    };
    let resolver = TurnResolver::new(config.clone());

    assert_eq!(
        check_local("snake", PlayerId::One, resolver.state(), &config),
        Err(Rejection::TooShort { min_length: 6 })
    );
    assert!(check_local("snakes", PlayerId::One, resolver.state(), &config).is_ok());
}

#[test]
fn test_exact_minimum_length_passes() {
    assert!(check_length("lion", 4).is_ok());
    assert!(check_length("ant", 4).is_err());
}

#[test]
fn test_chain_uses_opponents_latest_word() {
    let mut resolver = after_opening("snake");

    // Player 2 answers, Player 1 answers, then Player 2 again
    for (word, expected_next) in [("eagle", PlayerId::One), ("elephant", PlayerId::Two)] {
        resolver.set_pending_word(word);
        if let shiritori::Submission::AwaitingLookup(lookup) = resolver.submit() {
            resolver.complete_lookup(lookup, true);
        }
        assert_eq!(resolver.state().active_turn(), expected_next);
    }

    let state = resolver.state();
    let config = resolver.config();
    // Player 1's latest word is "elephant": 't' is required, not the 'e' of "snake"
    assert_eq!(state.required_initial(), Some('t'));
    assert!(check_local("tiger", PlayerId::Two, state, config).is_ok());
    assert_eq!(
        check_local("eland", PlayerId::Two, state, config),
        Err(Rejection::ChainMismatch { expected: 't' })
    );
}

#[test]
fn test_cross_player_repetition_is_allowed() {
    let resolver = after_opening("else");
    let config = resolver.config();

    // Player 2 may reuse a word Player 1 played
    assert!(check_local("else", PlayerId::Two, resolver.state(), config).is_ok());
}

#[test]
fn test_own_repetition_is_rejected() {
    let mut resolver = after_opening("snake");
    resolver.set_pending_word("eagle");
    if let shiritori::Submission::AwaitingLookup(lookup) = resolver.submit() {
        resolver.complete_lookup(lookup, true);
    }
    // Player 1 to move; opponent's last word "eagle" ends in 'e'
    let config = resolver.config();
    assert!(check_local("eerie", PlayerId::One, resolver.state(), config).is_ok());

    let mut resolver = after_opening("eerie");
    resolver.set_pending_word("eerie");
    if let shiritori::Submission::AwaitingLookup(lookup) = resolver.submit() {
        resolver.complete_lookup(lookup, true);
    }
    let config = resolver.config();
    assert_eq!(
        check_local("eerie", PlayerId::One, resolver.state(), config),
        Err(Rejection::AlreadyUsed)
    );
}

#[test]
fn test_chain_ignores_case_of_both_words() {
    assert!(check_chain("Eagle", Some("SNAKE")).is_ok());
    assert!(check_chain("ÉCLAIR", Some("café")).is_ok());
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        Rejection::TooShort { min_length: 4 }.to_string(),
        "Word must contain at least 4 characters"
    );
    assert_eq!(
        Rejection::ChainMismatch { expected: 'e' }.to_string(),
        "Word must start with 'e', the last character of your opponent's word"
    );
    assert_eq!(Rejection::InvalidWord.to_string(), "Word is not in the dictionary");
}

#[tokio::test]
async fn test_dictionary_outage_fails_closed() {
    let resolver = TurnResolver::new(GameConfig::default());
    let dictionary = MockDictionary::unavailable();

    let result = validate_word("snake", PlayerId::One, resolver.state(), resolver.config(), &dictionary).await;

    assert_eq!(result, Err(Rejection::InvalidWord));
    assert_eq!(dictionary.calls(), 1);
}

#[tokio::test]
async fn test_local_failure_skips_dictionary() {
    let resolver = TurnResolver::new(GameConfig::default());
    let dictionary = MockDictionary::with_words(&["cat"]);

    let result = validate_word("cat", PlayerId::One, resolver.state(), resolver.config(), &dictionary).await;

    assert_eq!(result, Err(Rejection::TooShort { min_length: 4 }));
    assert_eq!(dictionary.calls(), 0);
}

#[test]
fn test_word_list_lookup_blocks_on_runtime() {
    let dictionary = WordListDictionary::from_words(["snake"]);
    let found = tokio_test::block_on(shiritori::Dictionary::exists(&dictionary, "SNAKE"));
    assert!(found);
}

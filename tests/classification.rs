//! Property tests for reply classification and relationship state.

use proptest::collection::hash_set;
use proptest::prelude::*;
use std::collections::HashSet;
use userstream::{
    classify, ClassificationOutcome, RelationshipState, ReplyLabel, Status, StatusId, User,
    UserId, VisibilityConfig,
};

const ME: UserId = UserId(1);

fn reply(author: i64, target: i64) -> Status {
    Status {
        id: StatusId(1),
        user: User {
            id: UserId(author),
            name: String::new(),
            screen_name: format!("user{author}"),
        },
        text: String::new(),
        in_reply_to_user_id: Some(UserId(target)),
        in_reply_to_status_id: None,
    }
}

/// Reply visibility decision table. Rows are evaluated top to bottom.
fn decision_table(
    reply_to_me: bool,
    author_is_friend: bool,
    target_is_friend: bool,
    author_is_me: bool,
    config: VisibilityConfig,
) -> ClassificationOutcome {
    use ClassificationOutcome::*;

    let from = config.show_replies_from_non_followed;
    let to = config.show_replies_to_non_followed;
    let rows = [
        (reply_to_me && author_is_friend, ShowPlain),
        (reply_to_me && !author_is_friend, ShowLabeled(ReplyLabel::FromStranger)),
        (!reply_to_me && author_is_friend && target_is_friend, ShowPlain),
        (!reply_to_me && author_is_friend && !target_is_friend && !from, Suppress),
        (
            !reply_to_me && author_is_friend && !target_is_friend && from,
            ShowLabeled(ReplyLabel::ToStranger),
        ),
        (!reply_to_me && !author_is_friend && !author_is_me && !to, Suppress),
        (
            !reply_to_me && !author_is_friend && !author_is_me && to,
            ShowLabeled(ReplyLabel::FromStranger),
        ),
        (!reply_to_me && author_is_me, ShowPlain),
    ];

    rows.iter()
        .find(|(matches, _)| *matches)
        .map(|(_, outcome)| *outcome)
        .expect("decision table covers every reply")
}

fn visibility() -> impl Strategy<Value = VisibilityConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(from, to)| VisibilityConfig {
        show_replies_from_non_followed: from,
        show_replies_to_non_followed: to,
    })
}

proptest! {
    // --- Classification ---

    #[test]
    fn classify_matches_decision_table(
        author in 1i64..6,
        target in 1i64..6,
        friends in hash_set(1i64..6, 0..5),
        known in any::<bool>(),
        config in visibility(),
    ) {
        let mut state = RelationshipState::new(ME);
        if known {
            state.replace_friends(friends.iter().copied().map(UserId));
        }
        let is_friend = |id: i64| known && friends.contains(&id);

        let expected = decision_table(
            UserId(target) == ME,
            is_friend(author),
            is_friend(target),
            UserId(author) == ME,
            config,
        );

        prop_assert_eq!(classify(&reply(author, target), ME, &state, &config), expected);
    }

    #[test]
    fn plain_outcomes_never_carry_labels(
        author in 1i64..6,
        target in 1i64..6,
        friends in hash_set(1i64..6, 0..5),
        config in visibility(),
    ) {
        let mut state = RelationshipState::new(ME);
        state.replace_friends(friends.iter().copied().map(UserId));

        let outcome = classify(&reply(author, target), ME, &state, &config);
        prop_assert_eq!(
            outcome.label().is_some(),
            matches!(outcome, ClassificationOutcome::ShowLabeled(_))
        );
    }

    #[test]
    fn non_positive_targets_are_plain(
        author in 1i64..6,
        target in -3i64..=0,
        config in visibility(),
    ) {
        let state = RelationshipState::new(ME);
        prop_assert_eq!(
            classify(&reply(author, target), ME, &state, &config),
            ClassificationOutcome::ShowPlain
        );
    }

    // --- Relationship State ---

    #[test]
    fn replace_friends_is_total_overwrite(
        first in hash_set(1i64..20, 0..10),
        second in hash_set(1i64..20, 0..10),
        candidate in 1i64..20,
    ) {
        let mut state = RelationshipState::new(ME);
        state.replace_friends(first.iter().copied().map(UserId));
        state.replace_friends(second.iter().copied().map(UserId));

        prop_assert_eq!(state.is_friend(UserId(candidate)), second.contains(&candidate));
    }

    #[test]
    fn follows_by_other_accounts_change_nothing(
        friends in hash_set(1i64..20, 0..10),
        other in 2i64..20,
        target in 1i64..20,
    ) {
        let mut state = RelationshipState::new(ME);
        state.replace_friends(friends.iter().copied().map(UserId));

        let before = state.is_friend(UserId(target));
        state.apply_follow(UserId(other), UserId(target));
        prop_assert_eq!(state.is_friend(UserId(target)), before);

        state.apply_follow(ME, UserId(target));
        prop_assert!(state.is_friend(UserId(target)));
    }

    #[test]
    fn follow_unfollow_sequences_match_set_model(
        initial in hash_set(1i64..10, 0..6),
        ops in prop::collection::vec((any::<bool>(), 1i64..3, 1i64..10), 0..30),
    ) {
        let mut state = RelationshipState::new(ME);
        state.replace_friends(initial.iter().copied().map(UserId));
        let mut model: HashSet<i64> = initial;

        for (follow, source, target) in ops {
            if follow {
                state.apply_follow(UserId(source), UserId(target));
                if UserId(source) == ME {
                    model.insert(target);
                }
            } else {
                state.apply_unfollow(UserId(source), UserId(target));
                if UserId(source) == ME {
                    model.remove(&target);
                }
            }
        }

        for id in 1i64..10 {
            prop_assert_eq!(state.is_friend(UserId(id)), model.contains(&id));
        }
    }
}

#[test]
fn test_unknown_follow_set_is_distinct_from_empty() {
    let unknown = RelationshipState::new(ME);
    let mut empty = RelationshipState::new(ME);
    empty.replace_friends([]);

    assert!(!unknown.is_known());
    assert!(empty.is_known());
    assert_eq!(unknown.friend_count(), None);
    assert_eq!(empty.friend_count(), Some(0));

    // Both classify a stranger's reply to the account the same way.
    let status = reply(5, 1);
    let config = VisibilityConfig::strict();
    assert_eq!(
        classify(&status, ME, &unknown, &config),
        classify(&status, ME, &empty, &config)
    );
}

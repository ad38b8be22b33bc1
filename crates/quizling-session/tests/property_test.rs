use proptest::prelude::*;
use quizling_question::QuestionItem;
use quizling_session::{Outcome, Session, SessionClock, SessionConfig, SessionInput, SessionState};

fn deck(len: usize) -> Vec<QuestionItem> {
    (0..len)
        .map(|i| {
            QuestionItem::new(
                format!("question {i}"),
                vec!["a".to_string(), "b".to_string()],
                0,
            )
            .unwrap()
        })
        .collect()
}

proptest! {
    /// remaining = max(0, duration - sum of elapsed), for any tick sequence.
    #[test]
    fn clock_monotonicity(
        duration_ms in 1u64..=600_000,
        ticks in proptest::collection::vec(0u64..=20_000, 0..64),
    ) {
        let mut clock = SessionClock::new(duration_ms).unwrap();
        clock.start();

        let mut prev = duration_ms;
        for &elapsed in &ticks {
            clock.tick(elapsed);
            prop_assert!(clock.remaining_ms() <= prev);
            prev = clock.remaining_ms();
        }

        let total: u64 = ticks.iter().sum();
        prop_assert_eq!(clock.remaining_ms(), duration_ms.saturating_sub(total));
    }

    /// Lives never go below zero and the session ends exactly when the
    /// configured number of wrong answers has been delivered.
    #[test]
    fn lives_floor_at_zero(
        initial_lives in 1u32..=10,
        extra_attempts in 0usize..=5,
    ) {
        let config = SessionConfig::builder().initial_lives(initial_lives).build();
        let mut session = Session::new(deck(3), config).unwrap();

        let attempts = initial_lives as usize + extra_attempts;
        for i in 0..attempts {
            let events = session.handle_input(SessionInput::Answer(1));
            if i + 1 < initial_lives as usize {
                prop_assert_eq!(events.len(), 1);
            } else if i + 1 == initial_lives as usize {
                prop_assert_eq!(session.state(), SessionState::Ended(Outcome::LivesExhausted));
            } else {
                // Stray input after the end is a no-op
                prop_assert!(events.is_empty());
            }
        }

        prop_assert_eq!(session.lives_remaining(), 0);
        prop_assert_eq!(session.answered_count(), 0);
    }

    /// Score is exactly award * correct answers, whatever wrong answers
    /// were interleaved before completion.
    #[test]
    fn score_counts_only_correct_answers(
        deck_len in 1usize..=8,
        wrong_before in proptest::collection::vec(0usize..=1, 1..=8),
    ) {
        // Enough lives that wrong answers never end the session
        let config = SessionConfig::builder().initial_lives(100).build();
        let mut session = Session::new(deck(deck_len), config).unwrap();

        for (i, &wrongs) in wrong_before.iter().take(deck_len).enumerate() {
            for _ in 0..wrongs {
                session.handle_input(SessionInput::Answer(1));
            }
            session.handle_input(SessionInput::Answer(0));
            prop_assert_eq!(session.score(), (i as u32 + 1) * 10);
        }

        let answered = wrong_before.len().min(deck_len);
        prop_assert_eq!(session.answered_count(), answered);
        if answered == deck_len {
            prop_assert_eq!(session.state(), SessionState::Ended(Outcome::Completed));
        }
    }
}

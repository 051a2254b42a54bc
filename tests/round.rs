//! Round engine integration tests.

use std::collections::HashSet;

use rstest::rstest;
use spacedeck::{
    ActionError, Card, DECK_SIZE, Deck, DeckError, HandStatus, Notification, Round, RoundOptions,
    RoundOutcome, RoundState, Seat, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a full deck whose first draws are `draws`, in order.
fn deck_from_draws(draws: &[Card]) -> Vec<Card> {
    let mut deck: Vec<Card> = Deck::standard()
        .cards()
        .iter()
        .copied()
        .filter(|c| !draws.contains(c))
        .collect();
    deck.extend(draws.iter().rev());
    deck
}

fn started(draws: &[Card]) -> Round {
    started_with(RoundOptions::default(), draws)
}

fn started_with(options: RoundOptions, draws: &[Card]) -> Round {
    let mut round = Round::new(options, 7);
    round.start_with_deck(deck_from_draws(draws)).unwrap();
    round
}

fn assert_all_cards_accounted_for(round: &Round) {
    let mut seen = HashSet::new();
    for c in round.deck().cards() {
        assert!(seen.insert(*c), "duplicate {c} in deck");
    }
    for participant in round.participants() {
        for c in participant.hand().cards() {
            assert!(seen.insert(*c), "duplicate {c} in hand");
        }
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[rstest]
#[case(1, 1)]
#[case(2, 2)]
#[case(7, 7)]
#[case(10, 10)]
#[case(11, 10)]
#[case(12, 10)]
#[case(13, 10)]
fn card_values(#[case] rank: u8, #[case] value: u16) {
    assert_eq!(card(Suit::Spades, rank).value(), value);
}

#[test]
fn card_codes() {
    assert_eq!(card(Suit::Hearts, 1).to_string(), "AH");
    assert_eq!(card(Suit::Spades, 10).to_string(), "10S");
    assert_eq!(card(Suit::Diamonds, 12).to_string(), "QD");
    assert_eq!(card(Suit::Spades, 10).image_code(), ['0', 'S']);
    assert_eq!(card(Suit::Clubs, 13).image_code(), ['K', 'C']);
}

#[test]
fn new_round_is_not_started() {
    let mut round = Round::new(RoundOptions::default(), 1);
    assert_eq!(round.state(), RoundState::NotStarted);
    assert_eq!(round.cards_remaining(), 0);
    assert_eq!(round.draw().unwrap_err(), ActionError::NotStarted);
    assert_eq!(round.pass().unwrap_err(), ActionError::NotStarted);
    assert_eq!(round.stand().unwrap_err(), ActionError::NotStarted);
}

#[test]
fn start_deals_full_deck_to_first_seat() {
    let mut round = Round::new(RoundOptions::default(), 1);
    let events = round.start();

    assert_eq!(events, vec![Notification::RoundStarted { first: Seat::Mario }]);
    assert_eq!(round.state(), RoundState::InProgress { current: Seat::Mario });
    assert_eq!(round.cards_remaining(), DECK_SIZE);
    assert_all_cards_accounted_for(&round);
}

#[test]
fn start_fully_resets_a_played_round() {
    let mut round = Round::new(RoundOptions::default(), 3);
    round.start();
    round.draw().unwrap();
    round.stand().unwrap();
    round.draw().unwrap();
    round.pass().unwrap();

    for _ in 0..3 {
        round.start();
        assert_eq!(round.state(), RoundState::InProgress { current: Seat::Mario });
        assert_eq!(round.cards_remaining(), DECK_SIZE);
        for participant in round.participants() {
            assert!(participant.hand().is_empty());
            assert_eq!(participant.total(), 0);
            assert_eq!(participant.hand().status(), HandStatus::Active);
        }
    }
}

#[test]
fn same_seed_shuffles_the_same_way() {
    let mut a = Round::new(RoundOptions::default(), 99);
    let mut b = Round::new(RoundOptions::default(), 99);
    a.start();
    b.start();
    assert_eq!(a.deck(), b.deck());
    assert_ne!(a.deck(), &Deck::standard());
}

#[test]
fn draw_adds_card_value_and_keeps_turn() {
    let mut round = started(&[card(Suit::Hearts, 13), card(Suit::Clubs, 1)]);

    let events = round.draw().unwrap();
    assert_eq!(
        events,
        vec![Notification::CardDrawn {
            participant: Seat::Mario,
            card: card(Suit::Hearts, 13),
            total: 10,
        }]
    );
    assert_eq!(round.cards_remaining(), DECK_SIZE - 1);

    let events = round.draw().unwrap();
    assert_eq!(
        events,
        vec![Notification::CardDrawn {
            participant: Seat::Mario,
            card: card(Suit::Clubs, 1),
            total: 11,
        }]
    );
    assert_eq!(round.current(), Some(Seat::Mario));
    assert_eq!(round.participant(Seat::Mario).hand().len(), 2);
    assert_eq!(round.cards_remaining(), DECK_SIZE - 2);
    assert_all_cards_accounted_for(&round);
}

#[test]
fn bust_stands_participant_and_moves_turn() {
    let mut round = started(&[
        card(Suit::Hearts, 13),
        card(Suit::Hearts, 12),
        card(Suit::Hearts, 2),
    ]);

    round.draw().unwrap();
    round.draw().unwrap();
    let events = round.draw().unwrap();

    assert_eq!(
        events,
        vec![
            Notification::ParticipantBusted {
                participant: Seat::Mario,
                card: card(Suit::Hearts, 2),
                total: 22,
            },
            Notification::TurnChanged { participant: Seat::Luigi },
        ]
    );
    let mario = round.participant(Seat::Mario);
    assert!(mario.is_standing());
    assert_eq!(mario.hand().status(), HandStatus::Busted);
    assert_eq!(round.current(), Some(Seat::Luigi));
}

#[test]
fn exactly_twenty_one_does_not_bust() {
    let mut round = started(&[
        card(Suit::Hearts, 13),
        card(Suit::Hearts, 12),
        card(Suit::Hearts, 1),
    ]);

    round.draw().unwrap();
    round.draw().unwrap();
    let events = round.draw().unwrap();

    assert!(matches!(events[..], [Notification::CardDrawn { total: 21, .. }]));
    assert!(!round.participant(Seat::Mario).is_standing());
}

#[test]
fn draw_for_checks_standing_and_turn() {
    let mut round = started(&[]);

    assert_eq!(round.draw_for(Seat::Luigi).unwrap_err(), ActionError::NotYourTurn);

    round.stand().unwrap();
    assert_eq!(
        round.draw_for(Seat::Mario).unwrap_err(),
        ActionError::ParticipantStanding
    );
    assert_eq!(round.cards_remaining(), DECK_SIZE);

    assert!(round.draw_for(Seat::Luigi).is_ok());
}

#[test]
fn pass_cycles_through_table_order() {
    let mut round = started(&[]);
    let mut seen = Vec::new();

    for _ in 0..5 {
        let events = round.pass().unwrap();
        let Notification::TurnChanged { participant } = events[1] else {
            panic!("expected turn change, got {events:?}");
        };
        seen.push(participant);
    }

    assert_eq!(
        seen,
        vec![Seat::Luigi, Seat::Yoshi, Seat::Dealer, Seat::Mario, Seat::Luigi]
    );
    for participant in round.participants() {
        assert!(!participant.is_standing());
    }
}

#[test]
fn turn_skips_standing_participants() {
    let mut round = started(&[]);

    round.stand().unwrap(); // Mario
    round.pass().unwrap(); // Luigi
    round.stand().unwrap(); // Yoshi
    assert_eq!(round.current(), Some(Seat::Dealer));

    let events = round.pass().unwrap();
    assert_eq!(events[1], Notification::TurnChanged { participant: Seat::Luigi });
}

#[test]
fn pass_by_last_active_participant_returns_to_them() {
    let mut round = started(&[]);
    round.stand().unwrap();
    round.stand().unwrap();
    round.stand().unwrap();
    assert_eq!(round.current(), Some(Seat::Dealer));

    let events = round.pass().unwrap();
    assert_eq!(
        events,
        vec![
            Notification::ParticipantPassed { participant: Seat::Dealer },
            Notification::TurnChanged { participant: Seat::Dealer },
        ]
    );
    assert!(!round.is_terminal());
}

#[test]
fn highest_total_wins_and_ties_go_to_earlier_seat() {
    let mut round = started(&[
        card(Suit::Hearts, 13),
        card(Suit::Hearts, 12),
        card(Suit::Diamonds, 13),
        card(Suit::Diamonds, 12),
        card(Suit::Diamonds, 3),
        card(Suit::Clubs, 13),
        card(Suit::Clubs, 9),
        card(Suit::Spades, 13),
        card(Suit::Spades, 12),
    ]);

    // Mario 20
    round.draw().unwrap();
    round.draw().unwrap();
    round.stand().unwrap();
    // Luigi 23
    round.draw().unwrap();
    round.draw().unwrap();
    round.draw().unwrap();
    assert_eq!(round.current(), Some(Seat::Yoshi));
    // Yoshi 19
    round.draw().unwrap();
    round.draw().unwrap();
    round.stand().unwrap();
    // Dealer 20
    round.draw().unwrap();
    round.draw().unwrap();
    let events = round.stand().unwrap();

    assert_eq!(
        events,
        vec![
            Notification::ParticipantStood { participant: Seat::Dealer },
            Notification::RoundEnded {
                winner: Some(Seat::Mario),
                total: Some(20),
            },
        ]
    );
    assert_eq!(
        round.outcome(),
        Some(RoundOutcome::Winner {
            seat: Seat::Mario,
            total: 20,
        })
    );
    let totals = round.totals();
    assert_eq!(totals[Seat::Luigi], 23);
    assert_eq!(totals[Seat::Yoshi], 19);
    assert_all_cards_accounted_for(&round);
}

#[test]
fn everyone_busting_means_all_lose() {
    let mut draws = Vec::new();
    for suit in Suit::ALL {
        draws.extend([card(suit, 13), card(suit, 12), card(suit, 2)]);
    }
    let mut round = started(&draws);

    let mut last = Vec::new();
    for _ in 0..draws.len() {
        last = round.draw().unwrap();
    }

    assert_eq!(
        last,
        vec![
            Notification::ParticipantBusted {
                participant: Seat::Dealer,
                card: card(Suit::Spades, 2),
                total: 22,
            },
            Notification::RoundEnded {
                winner: None,
                total: None,
            },
        ]
    );
    assert_eq!(round.state(), RoundState::Terminal(RoundOutcome::AllLose));
}

#[test]
fn empty_hands_standing_goes_to_first_seat() {
    let mut round = started(&[]);
    for _ in 0..Seat::COUNT {
        round.stand().unwrap();
    }

    assert_eq!(
        round.outcome(),
        Some(RoundOutcome::Winner {
            seat: Seat::Mario,
            total: 0,
        })
    );
}

#[test]
fn terminal_round_rejects_commands() {
    let mut round = started(&[]);
    for _ in 0..Seat::COUNT {
        round.stand().unwrap();
    }
    let before = round.state();

    assert_eq!(round.draw().unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.pass().unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.stand().unwrap_err(), ActionError::RoundOver);
    assert_eq!(round.state(), before);
    assert_eq!(round.cards_remaining(), DECK_SIZE);

    round.start();
    assert_eq!(round.state(), RoundState::InProgress { current: Seat::Mario });
}

#[test]
fn empty_deck_is_reported() {
    let options = RoundOptions::default().with_bust_limit(1000);
    let mut round = started_with(options, &[]);

    for _ in 0..DECK_SIZE {
        round.draw().unwrap();
    }
    assert_eq!(round.participant(Seat::Mario).total(), 340);

    assert_eq!(round.draw().unwrap_err(), ActionError::DeckExhausted);
    assert_eq!(round.current(), Some(Seat::Mario));
    assert_eq!(round.participant(Seat::Mario).hand().len(), DECK_SIZE);
    assert!(!round.participant(Seat::Mario).is_standing());
}

#[test]
fn empty_deck_can_stand_instead() {
    let options = RoundOptions::default()
        .with_bust_limit(1000)
        .with_stand_on_empty_deck(true);
    let mut round = started_with(options, &[]);

    for _ in 0..DECK_SIZE {
        round.draw().unwrap();
    }

    let events = round.draw().unwrap();
    assert_eq!(
        events,
        vec![
            Notification::ParticipantStood { participant: Seat::Mario },
            Notification::TurnChanged { participant: Seat::Luigi },
        ]
    );
}

#[test]
fn start_with_deck_rejects_bad_decks() {
    let mut round = Round::new(RoundOptions::default(), 1);
    round.start();
    round.draw().unwrap();
    let remaining = round.cards_remaining();

    let short = Deck::standard().cards()[1..].to_vec();
    assert_eq!(
        round.start_with_deck(short).unwrap_err(),
        DeckError::WrongSize(DECK_SIZE - 1)
    );

    let mut duplicated = Deck::standard().cards().to_vec();
    duplicated[0] = duplicated[1];
    assert_eq!(
        round.start_with_deck(duplicated.clone()).unwrap_err(),
        DeckError::Duplicate(duplicated[1])
    );

    let mut invalid = Deck::standard().cards().to_vec();
    invalid[5] = card(Suit::Hearts, 14);
    assert_eq!(
        round.start_with_deck(invalid).unwrap_err(),
        DeckError::InvalidCard(card(Suit::Hearts, 14))
    );

    assert_eq!(round.cards_remaining(), remaining);
}

#[test]
fn cards_are_conserved_through_a_seeded_game() {
    for seed in 0..20 {
        let mut round = Round::new(RoundOptions::default(), seed);
        round.start();

        let mut step = seed as usize;
        while !round.is_terminal() {
            let _ = match step % 4 {
                0 | 1 => round.draw(),
                2 => round.pass(),
                _ => round.stand(),
            };
            step += 1;
            assert_all_cards_accounted_for(&round);

            for participant in round.participants() {
                let sum: u16 = participant.hand().cards().iter().map(Card::value).sum();
                assert_eq!(participant.total(), sum);
                if participant.total() > 21 {
                    assert!(participant.is_standing());
                }
            }
            if let Some(current) = round.current() {
                assert!(!round.participant(current).is_standing());
            }
        }
    }
}

#[test]
fn notifications_render_status_line() {
    let cases = [
        (
            Notification::RoundStarted { first: Seat::Mario },
            "🎮 Game started! Mario's turn first.",
        ),
        (
            Notification::CardDrawn {
                participant: Seat::Luigi,
                card: card(Suit::Hearts, 4),
                total: 4,
            },
            "🃏 Luigi drew a card!",
        ),
        (
            Notification::ParticipantBusted {
                participant: Seat::Yoshi,
                card: card(Suit::Hearts, 13),
                total: 25,
            },
            "💥 Yoshi Loses!",
        ),
        (
            Notification::ParticipantPassed { participant: Seat::Dealer },
            "⏭ Dealer passes.",
        ),
        (
            Notification::ParticipantStood { participant: Seat::Mario },
            "🛑 Mario stands.",
        ),
        (
            Notification::TurnChanged { participant: Seat::Luigi },
            "🎯 Luigi's turn!",
        ),
        (
            Notification::RoundEnded {
                winner: Some(Seat::Yoshi),
                total: Some(19),
            },
            "🏆 Yoshi wins with 19!",
        ),
        (
            Notification::RoundEnded {
                winner: None,
                total: None,
            },
            "💥 All players lose!",
        ),
    ];

    for (notification, text) in cases {
        assert_eq!(notification.to_string(), text);
    }
}

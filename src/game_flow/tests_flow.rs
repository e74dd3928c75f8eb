//! End-to-end games driven through the public API.

use crate::domain::deck::full_deck;
use crate::domain::rules::TOTAL_POINTS;
use crate::domain::state::Phase;
use crate::domain::{Card, Rank, Suit};
use crate::errors::GameError;
use crate::game_flow::events::{GameEvent, NullSink, RecordingSink};
use crate::game_flow::GameFlow;

/// Drive a full game: P1 bids 75, everyone else passes, P1 calls the Asso
/// di Oro, and every player always plays their first card.
fn play_full_game(seed: u64) -> GameFlow<RecordingSink> {
    let mut flow = GameFlow::with_sink(RecordingSink::default());
    flow.setup_game_seeded(0, seed).unwrap();

    flow.auction_phase(1, Some(75)).unwrap();
    for p in [2, 3, 4, 0] {
        flow.auction_phase(p, None).unwrap();
    }
    assert_eq!(flow.state().phase, Phase::DeadTrickPlay);

    for p in [1, 2, 3, 4, 0] {
        assert_eq!(flow.state().turn.current_player, p);
        flow.play_card(p, 0).unwrap();
    }
    assert_eq!(flow.state().phase, Phase::DeadTrickCall);

    flow.make_call(Suit::Oro, Rank::Asso).unwrap();
    assert_eq!(flow.state().phase, Phase::TrickPlay);

    while flow.state().phase == Phase::TrickPlay {
        let p = flow.state().turn.current_player;
        flow.play_card(p, 0).unwrap();
    }
    assert_eq!(flow.state().phase, Phase::GameOver);
    flow
}

#[test]
fn setup_partitions_full_deck() {
    let mut flow = GameFlow::with_sink(NullSink);
    flow.setup_game_seeded(0, 1234).unwrap();

    let mut all: Vec<Card> = flow.state().hands.iter().flatten().copied().collect();
    all.sort();
    let mut expected = full_deck();
    expected.sort();
    assert_eq!(all, expected);
}

#[test]
fn full_game_reaches_game_over_with_120_points() {
    let flow = play_full_game(2024);
    let state = flow.state();

    // Eight tricks: the dead trick plus seven more.
    assert_eq!(state.trick.index, 8);
    for p in 0..5 {
        assert_eq!(state.remaining_cards_in_hand(p).unwrap(), 0);
    }

    let total: u16 = state.score.player_points.iter().map(|&p| p as u16).sum();
    assert_eq!(total, TOTAL_POINTS);

    let captured: usize = state.score.won_cards.iter().map(|w| w.len()).sum();
    assert_eq!(captured, 40);
}

#[test]
fn partner_revealed_exactly_once() {
    let flow = play_full_game(77);
    let state = flow.state();

    // The called card is in the deck, so the reveal must have happened.
    assert!(state.call.partner_revealed);
    assert!(state.call.partner_player.is_some());

    let reveals = flow
        .sink()
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::PartnerRevealed { .. }))
        .count();
    assert_eq!(reveals, 1);

    // The revealed identity matches the state, and the called card ended
    // up captured in some trick.
    let called = Card::new(Suit::Oro, Rank::Asso);
    assert!(state.score.won_cards.iter().flatten().any(|&c| c == called));
    let revealed_to = flow.sink().events.iter().find_map(|e| match e {
        GameEvent::PartnerRevealed { partner } => Some(*partner),
        _ => None,
    });
    assert_eq!(revealed_to, state.call.partner_player);
}

#[test]
fn end_game_scores_the_contract() {
    let mut flow = play_full_game(9);
    let result = flow.end_game().unwrap();

    assert_eq!(result.caller, 1);
    assert_eq!(result.target_points, 75);
    assert_eq!(
        result.caller_team_points + result.others_points,
        TOTAL_POINTS
    );
    assert_eq!(
        result.caller_team_won,
        result.caller_team_points >= 75
    );
    assert_eq!(flow.state().call.caller_team_won, Some(result.caller_team_won));

    // With caller and partner both known, the state query agrees.
    assert_eq!(
        flow.state().team_points_if_known(),
        Some((result.caller_team_points, result.others_points))
    );
}

#[test]
fn fixed_seed_and_actions_are_deterministic() {
    let a = play_full_game(31337);
    let b = play_full_game(31337);
    assert_eq!(a.state(), b.state());
    assert_eq!(a.sink().events, b.sink().events);
}

#[test]
fn play_rejected_after_game_over() {
    let mut flow = play_full_game(5);
    let p = flow.state().turn.current_player;
    assert!(matches!(
        flow.play_card(p, 0),
        Err(GameError::Phase { phase: Phase::GameOver, .. })
    ));
}

#[test]
fn event_stream_follows_phase_order() {
    let flow = play_full_game(64);
    let events = &flow.sink().events;

    let pos = |pred: &dyn Fn(&GameEvent) -> bool| events.iter().position(|e| pred(e)).unwrap();

    let setup = pos(&|e| matches!(e, GameEvent::GameSetup { .. }));
    let concluded = pos(&|e| matches!(e, GameEvent::AuctionConcluded { .. }));
    let dead = pos(&|e| matches!(e, GameEvent::DeadTrickFinished));
    let call = pos(&|e| matches!(e, GameEvent::CallDeclared { .. }));
    let first_resolve = pos(&|e| matches!(e, GameEvent::TrickResolved { .. }));
    let over = pos(&|e| matches!(e, GameEvent::GameOver));

    assert!(setup < concluded);
    assert!(concluded < dead);
    assert!(dead < call);
    assert!(call < first_resolve);
    assert!(first_resolve < over);

    let resolves = events
        .iter()
        .filter(|e| matches!(e, GameEvent::TrickResolved { .. }))
        .count();
    assert_eq!(resolves, 8);
}

#[test]
fn team_and_others_points_sum_to_total() {
    let flow = play_full_game(480);
    let (team, others) = flow.state().team_points_if_known().unwrap();
    assert_eq!(team + others, TOTAL_POINTS);
}

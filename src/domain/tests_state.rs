use crate::domain::rules::PLAYERS;
use crate::domain::state::{auction_start_seat, next_player, GameState, Phase};
use crate::domain::trick::PlayedCard;
use crate::domain::{Card, Rank, Suit};

#[test]
fn initial_state_defaults() {
    let state = GameState::new();

    assert_eq!(state.phase, Phase::Auction);
    assert_eq!(state.turn.current_player, 0);
    assert_eq!(state.turn.dealer_player, 0);

    for hand in &state.hands {
        assert!(hand.is_empty());
    }

    assert_eq!(state.auction.last_bid, None);
    assert_eq!(state.auction.last_bidder, None);
    assert_eq!(state.auction.passed, [false; PLAYERS]);

    assert!(state.trick.played.is_empty());
    assert_eq!(state.trick.index, 0);
    assert!(!state.current_trick_is_complete());

    assert_eq!(state.call.caller_player, None);
    assert_eq!(state.call.partner_player, None);
    assert!(!state.call.partner_revealed);
    assert_eq!(state.call.caller_team_won, None);

    assert_eq!(state.score.player_points, [0; PLAYERS]);
    for won in &state.score.won_cards {
        assert!(won.is_empty());
    }

    assert!(!state.is_game_over());
}

#[test]
fn player_id_bounds_enforced() {
    let state = GameState::new();
    assert_eq!(state.remaining_cards_in_hand(0).unwrap(), 0);
    assert_eq!(state.remaining_cards_in_hand(4).unwrap(), 0);
    assert!(state.remaining_cards_in_hand(5).is_err());
    assert!(state.hand(200).is_err());
}

#[test]
fn trick_completion_at_five_plays() {
    let mut state = GameState::new();
    for p in 0..PLAYERS as u8 {
        assert!(!state.current_trick_is_complete());
        state.trick.played.push(PlayedCard {
            player_id: p,
            card: Card::new(Suit::Oro, Rank::Due),
        });
    }
    assert!(state.current_trick_is_complete());
}

#[test]
fn team_points_unknown_without_partner() {
    let mut state = GameState::new();
    state.call.caller_player = Some(0);
    assert_eq!(state.team_points_if_known(), None);

    state.call.caller_player = None;
    state.call.partner_player = Some(2);
    assert_eq!(state.team_points_if_known(), None);
}

#[test]
fn team_points_when_both_known() {
    let mut state = GameState::new();
    state.call.caller_player = Some(0);
    state.call.partner_player = Some(2);
    state.score.player_points = [30, 10, 40, 5, 5];

    assert_eq!(state.team_points_if_known(), Some((70, 20)));
}

#[test]
fn game_over_flag_follows_phase() {
    let mut state = GameState::new();
    assert!(!state.is_game_over());
    state.phase = Phase::GameOver;
    assert!(state.is_game_over());
}

#[test]
fn seat_math_wraps() {
    assert_eq!(next_player(0), 1);
    assert_eq!(next_player(4), 0);
    assert_eq!(auction_start_seat(0), 1);
    assert_eq!(auction_start_seat(4), 0);
}

//! The phase-transition orchestrator.
//!
//! [`GameFlow`] owns the [`GameState`] root for one game and is the only
//! code that mutates it. Every public operation validates phase and turn
//! legality first; a rejected action returns an error with state untouched.

pub mod events;

#[cfg(test)]
mod tests_flow;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use tracing::{debug, info};

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::dealing::{deal_hands, shuffled_deck};
use crate::domain::rules::{assert_player_id, BID_FLOOR};
use crate::domain::state::{
    auction_start_seat, next_player, AuctionState, GameState, Phase, PlayerId,
};
use crate::domain::trick::{resolve_trick, trick_points, PlayedCard};
use crate::errors::GameError;
use events::{EventSink, GameEvent, TracingSink};

/// Result of one auction action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionOutcome {
    /// Whether this action concluded the auction.
    pub concluded: bool,
    /// Caller and contract target, set once concluded. The caller may be
    /// `None` if everybody passed without a single bid.
    pub caller: Option<PlayerId>,
    pub target_points: Option<u8>,
}

/// Result of playing one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Whether this play completed a trick (5 cards on the table).
    pub trick_completed: bool,
    /// Winner of the completed trick. `None` while the dead trick awaits
    /// its call, and for ordinary non-completing plays.
    pub trick_winner: Option<PlayerId>,
    pub phase_after: Phase,
}

/// Result of the call: the dead trick resolves immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOutcome {
    pub trick_winner: PlayerId,
    pub partner_revealed: bool,
}

/// Final contract outcome computed by [`GameFlow::end_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub caller: PlayerId,
    pub target_points: u8,
    pub caller_team_points: u16,
    pub others_points: u16,
    pub caller_team_won: bool,
}

/// Orchestrator for one game: owns the state, applies player actions, and
/// emits transition events to its sink.
pub struct GameFlow<S: EventSink = TracingSink> {
    state: GameState,
    sink: S,
    set_up: bool,
}

impl GameFlow<TracingSink> {
    pub fn new() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl Default for GameFlow<TracingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> GameFlow<S> {
    pub fn with_sink(sink: S) -> Self {
        Self {
            state: GameState::new(),
            sink,
            set_up: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn emit(&mut self, event: GameEvent) {
        self.sink.on_event(&event);
    }

    /// Shuffle, deal 8 cards to each of 5 players, and open the auction
    /// with the player left of the dealer. Must be called exactly once,
    /// before any other operation.
    pub fn setup_game<R: Rng + ?Sized>(
        &mut self,
        dealer: PlayerId,
        rng: &mut R,
    ) -> Result<(), GameError> {
        assert_player_id(dealer)?;
        if self.set_up {
            return Err(GameError::validation(
                "setup_game may only be called once per game",
            ));
        }

        let deck = shuffled_deck(rng);
        self.state.hands = deal_hands(&deck)?;

        let first = auction_start_seat(dealer);
        self.state.turn.dealer_player = dealer;
        self.state.turn.current_player = first;
        self.state.auction = AuctionState::new(first)?;
        self.state.phase = Phase::Auction;
        self.set_up = true;

        info!(dealer, first_to_act = first, "game set up");
        self.emit(GameEvent::GameSetup {
            dealer,
            first_to_act: first,
        });
        Ok(())
    }

    /// [`setup_game`](Self::setup_game) with a seeded ChaCha RNG, for
    /// reproducible games.
    pub fn setup_game_seeded(&mut self, dealer: PlayerId, seed: u64) -> Result<(), GameError> {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        self.setup_game(dealer, &mut rng)
    }

    /// One auction action: `None` passes, `Some(offer)` bids. An offer is
    /// accepted only if strictly above the current floor (highest bid so
    /// far, or 60 before any bid). The auction concludes as soon as exactly
    /// one player remains un-passed.
    pub fn auction_phase(
        &mut self,
        player_id: PlayerId,
        offer: Option<u8>,
    ) -> Result<AuctionOutcome, GameError> {
        assert_player_id(player_id)?;
        self.require_set_up("auction_phase")?;
        if self.state.phase != Phase::Auction {
            return Err(GameError::phase(self.state.phase, "auction_phase"));
        }
        let expected = self.state.turn.current_player;
        if player_id != expected {
            return Err(GameError::turn(expected, player_id));
        }

        match offer {
            None => {
                self.state.auction.passed[player_id as usize] = true;
                debug!(player_id, "pass accepted");
                self.emit(GameEvent::PlayerPassed { player: player_id });
            }
            Some(offer) => {
                let floor = self.state.auction.last_bid.unwrap_or(BID_FLOOR);
                if offer <= floor {
                    return Err(GameError::auction(offer, floor));
                }
                self.state.auction.last_bid = Some(offer);
                self.state.auction.last_bidder = Some(player_id);
                debug!(player_id, offer, "bid accepted");
                self.emit(GameEvent::BidPlaced {
                    player: player_id,
                    offer,
                });
            }
        }

        if self.state.auction.active_players_count() == 1 {
            self.conclude_auction();
            Ok(AuctionOutcome {
                concluded: true,
                caller: self.state.call.caller_player,
                target_points: self.state.call.target_points,
            })
        } else {
            self.next_auction_player();
            Ok(AuctionOutcome {
                concluded: false,
                caller: None,
                target_points: None,
            })
        }
    }

    /// Play the card at `card_index` from the player's hand into the
    /// current trick. Legal in the dead trick and in normal trick play.
    pub fn play_card(
        &mut self,
        player_id: PlayerId,
        card_index: usize,
    ) -> Result<PlayOutcome, GameError> {
        assert_player_id(player_id)?;
        self.require_set_up("play_card")?;
        match self.state.phase {
            Phase::DeadTrickPlay | Phase::TrickPlay => {}
            phase => return Err(GameError::phase(phase, "play_card")),
        }
        let expected = self.state.turn.current_player;
        if player_id != expected {
            return Err(GameError::turn(expected, player_id));
        }

        let hand = &mut self.state.hands[player_id as usize];
        if card_index >= hand.len() {
            return Err(GameError::invalid_move(format!(
                "card index {card_index} out of range for hand of {}",
                hand.len()
            )));
        }
        let card = hand.remove(card_index);
        self.state.trick.played.push(PlayedCard { player_id, card });
        debug!(player_id, card = %card, "card played");
        self.emit(GameEvent::CardPlayed {
            player: player_id,
            card,
        });

        let mut outcome = PlayOutcome {
            trick_completed: false,
            trick_winner: None,
            phase_after: self.state.phase,
        };

        if self.state.current_trick_is_complete() {
            outcome.trick_completed = true;
            if self.state.phase == Phase::DeadTrickPlay {
                // The dead trick stays on the table, unresolved, and the
                // turn is frozen until the call.
                self.state.phase = Phase::DeadTrickCall;
                info!("dead trick finished; awaiting call");
                self.emit(GameEvent::DeadTrickFinished);
            } else {
                let winner = self.resolve_completed_trick()?;
                outcome.trick_winner = Some(winner);
                if self.state.hands[winner as usize].is_empty() {
                    self.state.phase = Phase::GameOver;
                    info!("all hands empty; game over");
                    self.emit(GameEvent::GameOver);
                }
            }
        } else {
            let next = next_player(player_id);
            self.state.turn.current_player = next;
            self.emit(GameEvent::TurnBecame { player: next });
        }

        outcome.phase_after = self.state.phase;
        Ok(outcome)
    }

    /// Declare trump and called card, then resolve the pending dead trick
    /// with that trump. Legal only while the dead trick awaits its call.
    pub fn make_call(&mut self, suit: Suit, rank: Rank) -> Result<CallOutcome, GameError> {
        if self.state.phase != Phase::DeadTrickCall {
            return Err(GameError::phase(self.state.phase, "make_call"));
        }

        let called_card = Card::new(suit, rank);
        self.state.call.trump_suit = Some(suit);
        self.state.call.called_card = Some(called_card);
        info!(trump = %suit, called = %called_card, "call declared");
        self.emit(GameEvent::CallDeclared {
            trump_suit: suit,
            called_card,
        });

        let winner = self.resolve_completed_trick()?;
        self.state.phase = Phase::TrickPlay;

        Ok(CallOutcome {
            trick_winner: winner,
            partner_revealed: self.state.call.partner_revealed,
        })
    }

    /// Score the contract. Valid any time, intended after `GameOver`;
    /// errors if the auction never produced a caller and target.
    pub fn end_game(&mut self) -> Result<GameResult, GameError> {
        let caller = self
            .state
            .call
            .caller_player
            .ok_or_else(|| GameError::validation("auction never concluded: no caller"))?;
        let target = self
            .state
            .call
            .target_points
            .ok_or_else(|| GameError::validation("auction never concluded: no target points"))?;

        let caller_points = self.state.score.player_points[caller as usize] as u16;
        // An unrevealed partner contributes nothing; a caller who called
        // their own card plays alone and is counted once.
        let partner_points = self
            .state
            .call
            .partner_player
            .filter(|&p| p != caller)
            .map(|p| self.state.score.player_points[p as usize] as u16)
            .unwrap_or(0);
        let caller_team_points = caller_points + partner_points;
        let total: u16 = self
            .state
            .score
            .player_points
            .iter()
            .map(|&p| p as u16)
            .sum();
        let others_points = total.saturating_sub(caller_team_points);
        let caller_team_won = caller_team_points >= target as u16;
        self.state.call.caller_team_won = Some(caller_team_won);

        info!(caller_team_points, target, caller_team_won, "game scored");
        self.emit(GameEvent::GameScored {
            caller_team_points,
            others_points,
            caller_team_won,
        });

        Ok(GameResult {
            caller,
            target_points: target,
            caller_team_points,
            others_points,
            caller_team_won,
        })
    }

    fn require_set_up(&self, action: &'static str) -> Result<(), GameError> {
        if self.set_up {
            Ok(())
        } else {
            Err(GameError::validation(format!(
                "{action} before setup_game"
            )))
        }
    }

    fn conclude_auction(&mut self) {
        let caller = self.state.auction.last_bidder;
        let target = self.state.auction.last_bid;
        self.state.call.caller_player = caller;
        self.state.call.target_points = target;
        self.state.phase = Phase::DeadTrickPlay;

        // The dead trick starts from the player after the dealer, like the
        // auction did.
        let first = auction_start_seat(self.state.turn.dealer_player);
        self.state.turn.current_player = first;

        info!(?caller, ?target, "auction concluded");
        self.emit(GameEvent::AuctionConcluded {
            caller,
            target_points: target,
        });
        self.emit(GameEvent::TurnBecame { player: first });
    }

    fn next_auction_player(&mut self) {
        let mut current = self.state.turn.current_player;
        for _ in 0..self.state.auction.passed.len() {
            current = next_player(current);
            if self.state.auction.is_player_active(current) {
                self.state.turn.current_player = current;
                self.state.auction.current_player = current;
                self.emit(GameEvent::TurnBecame { player: current });
                return;
            }
        }
        // Conclusion fires at one active player, so at least two are
        // active whenever this runs.
        debug_assert!(false, "no active player left in auction");
    }

    /// Resolve the complete trick on the table: credit points and cards to
    /// the winner, reveal the partner on the first appearance of the called
    /// card, clear the trick, and hand the lead to the winner.
    fn resolve_completed_trick(&mut self) -> Result<PlayerId, GameError> {
        let trump = self.state.call.trump_suit;
        let winner = resolve_trick(&self.state.trick.played, trump)?;
        let points = trick_points(&self.state.trick.played);
        let trick_index = self.state.trick.index;

        self.state.score.player_points[winner as usize] += points;

        let partner = if self.state.call.partner_revealed {
            None
        } else {
            self.state.call.called_card.and_then(|called| {
                self.state
                    .trick
                    .played
                    .iter()
                    .find(|pc| pc.card == called)
                    .map(|pc| pc.player_id)
            })
        };

        let taken: Vec<Card> = self.state.trick.played.drain(..).map(|pc| pc.card).collect();
        self.state.score.won_cards[winner as usize].extend(taken);
        self.state.trick.index += 1;
        self.state.turn.current_player = winner;

        info!(winner, points, trick_index, "trick resolved");
        self.emit(GameEvent::TrickResolved {
            winner,
            points,
            trick_index,
        });

        if let Some(partner) = partner {
            self.state.call.partner_player = Some(partner);
            self.state.call.partner_revealed = true;
            info!(partner, "partner revealed");
            self.emit(GameEvent::PartnerRevealed { partner });
        }

        self.emit(GameEvent::TurnBecame { player: winner });
        Ok(winner)
    }
}

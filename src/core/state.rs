//! Game state: everything the rules read and write.
//!
//! ## GameState
//!
//! Owns the participants, board, bank, jail tracker, turn cursor and the
//! history of turn events. Other modules refer to participants by
//! `PlayerId` and change them only through the methods here, which route
//! every cash movement through the bank.
//!
//! Collections are `im` persistent structures, so cloning a state for
//! look-ahead or snapshots is cheap.
//!
//! ## Movement
//!
//! `advance` and `move_to` pay the pass-start bonus when the token wraps;
//! `move_back` never does. `send_to_jail` relocates without a bonus.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::{GameConfig, RulesConfig};
use super::error::{ensure_funds, GameError, InvalidOperation};
use super::player::{Participant, PlayerId, PlayerMap};
use crate::bank::{AuctionOutcome, Bank, Bidder};
use crate::board::{Board, PropertyId, SpaceKind};
use crate::jail::JailTracker;
use crate::turn::{Settlement, TurnCursor, TurnEvent};

/// Result of moving a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub from: u8,
    pub to: u8,
    /// The move wrapped past the start space.
    pub passed_start: bool,
    /// Bonus paid for it, 0 if none.
    pub bonus: i64,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    rules: RulesConfig,
    participants: PlayerMap<Participant>,
    board: Board,
    bank: Bank,
    jail: JailTracker,
    pub(crate) cursor: TurnCursor,
    history: Vector<TurnEvent>,
}

impl GameState {
    /// Set up a game on the classic board.
    ///
    /// Panics unless the configuration has 2-8 participants.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_board(config, Board::standard())
    }

    /// Set up a game on a custom board.
    ///
    /// Panics unless the rules' board size matches the board and their jail
    /// index points at a jail space.
    #[must_use]
    pub fn with_board(config: &GameConfig, board: Board) -> Self {
        config.validate();
        let rules = config.rules.clone();
        assert_eq!(
            usize::from(rules.board_size),
            board.len(),
            "board_size does not match the board"
        );
        assert!(
            usize::from(rules.jail_position) < board.len()
                && board.space(rules.jail_position).kind == SpaceKind::Jail,
            "jail_position {} is not a jail space",
            rules.jail_position
        );
        let tokens = config.resolved_tokens();
        let participants = PlayerMap::new(config.player_count(), |id| {
            let spec = &config.participants[id.index()];
            Participant::new(id, spec.name.clone(), tokens[id.index()].clone(), spec.kind, rules.starting_cash)
        });
        let bank = Bank::new(&board, &rules);
        let jail = JailTracker::new(rules.max_jail_attempts);

        info!(players = config.player_count(), "game created");
        Self {
            rules,
            participants,
            board,
            bank,
            jail,
            cursor: TurnCursor::new(),
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.participants.player_count()
    }

    /// Participant by seat. Panics on an unknown seat.
    #[must_use]
    pub fn participant(&self, player: PlayerId) -> &Participant {
        &self.participants[player]
    }

    #[must_use]
    pub fn participants(&self) -> &PlayerMap<Participant> {
        &self.participants
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    #[must_use]
    pub fn jail(&self) -> &JailTracker {
        &self.jail
    }

    #[must_use]
    pub fn cursor(&self) -> &TurnCursor {
        &self.cursor
    }

    /// Participant whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.cursor.current
    }

    /// Every turn event so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnEvent> {
        &self.history
    }

    pub(crate) fn record(&mut self, event: TurnEvent) {
        self.history.push_back(event);
    }

    /// Attach a settlement made between rolls to the latest event. Returns
    /// false if nothing has been recorded yet.
    pub(crate) fn amend_last(&mut self, settlement: Settlement) -> bool {
        match self.history.back_mut() {
            Some(event) => {
                event.settlements.push(settlement);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_confined(&self, player: PlayerId) -> bool {
        self.jail.is_confined(player)
    }

    /// Failed release attempts; 0 when free.
    #[must_use]
    pub fn jail_attempts(&self, player: PlayerId) -> u8 {
        self.jail.attempts(player)
    }

    /// Participants whose cash is below zero, in seat order.
    pub fn insolvent(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.participants
            .iter()
            .filter(|(_, p)| p.is_insolvent())
            .map(|(id, _)| id)
    }

    // === Cash ===

    pub fn pay(&mut self, player: PlayerId, amount: i64) {
        self.bank.pay(&mut self.participants[player], amount);
    }

    pub fn collect(&mut self, player: PlayerId, amount: i64) {
        self.bank.collect(&mut self.participants[player], amount);
    }

    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: i64) {
        self.bank.transfer(&mut self.participants, from, to, amount);
    }

    // === Deeds and buildings ===

    pub fn sell(&mut self, buyer: PlayerId, id: PropertyId) -> Result<i64, GameError> {
        self.bank.sell(&mut self.board, &mut self.participants[buyer], id)
    }

    pub fn auction(&mut self, id: PropertyId, bidder: &mut dyn Bidder) -> Result<AuctionOutcome, GameError> {
        self.bank.auction(&mut self.board, &mut self.participants, id, bidder)
    }

    pub fn mortgage(&mut self, owner: PlayerId, id: PropertyId) -> Result<i64, GameError> {
        self.bank.mortgage(&mut self.board, &mut self.participants[owner], id)
    }

    pub fn unmortgage(&mut self, owner: PlayerId, id: PropertyId) -> Result<i64, GameError> {
        self.bank.unmortgage(&mut self.board, &mut self.participants[owner], id)
    }

    pub fn build_house(&mut self, owner: PlayerId, id: PropertyId) -> Result<i64, GameError> {
        self.bank.build_house(&mut self.board, &mut self.participants[owner], id)
    }

    pub fn build_hotel(&mut self, owner: PlayerId, id: PropertyId) -> Result<i64, GameError> {
        self.bank.build_hotel(&mut self.board, &mut self.participants[owner], id)
    }

    /// Houses and hotels standing on `owner`'s deeds.
    #[must_use]
    pub fn building_counts(&self, owner: PlayerId) -> (i64, i64) {
        self.participants[owner]
            .properties
            .iter()
            .map(|&id| self.board.property(id))
            .fold((0, 0), |(houses, hotels), p| {
                (houses + i64::from(p.houses), hotels + i64::from(p.hotel))
            })
    }

    // === Movement ===

    /// Move forward by `steps`, paying the bonus on wrap.
    pub fn advance(&mut self, player: PlayerId, steps: u8) -> Movement {
        let from = self.participants[player].position;
        let size = u16::from(self.rules.board_size);
        let to = ((u16::from(from) + u16::from(steps)) % size) as u8;
        self.place(player, from, to)
    }

    /// Move forward to `target`, paying the bonus if that wraps.
    pub fn move_to(&mut self, player: PlayerId, target: u8) -> Movement {
        assert!(target < self.rules.board_size, "board index {target} out of range");
        let from = self.participants[player].position;
        self.place(player, from, target)
    }

    /// Move backward by `steps`. Never pays the bonus.
    pub fn move_back(&mut self, player: PlayerId, steps: u8) -> Movement {
        let from = self.participants[player].position;
        let size = i16::from(self.rules.board_size);
        let to = (i16::from(from) - i16::from(steps)).rem_euclid(size) as u8;
        self.participants[player].position = to;
        debug!(%player, from, to, "moved back");
        Movement {
            from,
            to,
            passed_start: false,
            bonus: 0,
        }
    }

    fn place(&mut self, player: PlayerId, from: u8, to: u8) -> Movement {
        let passed_start = to < from;
        self.participants[player].position = to;
        let bonus = if passed_start {
            let bonus = self.rules.pass_start_bonus;
            self.pay(player, bonus);
            bonus
        } else {
            0
        };
        debug!(%player, from, to, passed_start, "moved");
        Movement {
            from,
            to,
            passed_start,
            bonus,
        }
    }

    // === Jail ===

    /// Confine a participant: token to the jail space, fresh record. No bonus.
    pub fn send_to_jail(&mut self, player: PlayerId) {
        self.participants[player].position = self.rules.jail_position;
        self.jail.send(player);
        info!(player = %self.participants[player].name, "sent to jail");
    }

    /// Pay the fine and leave jail. The token stays on the jail space.
    pub fn pay_jail_fine(&mut self, player: PlayerId) -> Result<i64, GameError> {
        if !self.jail.is_confined(player) {
            return Err(GameError::from(InvalidOperation::NotConfined));
        }
        let fine = self.rules.jail_fine;
        ensure_funds(fine, self.participants[player].cash)?;

        self.collect(player, fine);
        self.jail.release(player);
        info!(player = %self.participants[player].name, fine, "jail fine paid");
        Ok(fine)
    }

    /// Spend a release card and leave jail. The token stays on the jail space.
    pub fn use_release_card(&mut self, player: PlayerId) -> Result<(), GameError> {
        if !self.jail.is_confined(player) {
            return Err(GameError::from(InvalidOperation::NotConfined));
        }
        let participant = &mut self.participants[player];
        if participant.release_cards == 0 {
            return Err(GameError::from(InvalidOperation::NoReleaseCard));
        }

        participant.release_cards -= 1;
        self.jail.release(player);
        info!(player = %self.participants[player].name, "release card used");
        Ok(())
    }

    pub fn grant_release_card(&mut self, player: PlayerId) {
        self.participants[player].release_cards += 1;
    }

    pub(crate) fn jail_mut(&mut self) -> &mut JailTracker {
        &mut self.jail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParticipantSpec;

    fn two_player() -> GameState {
        GameState::new(
            &GameConfig::new()
                .with_participant(ParticipantSpec::human("Ada"))
                .with_participant(ParticipantSpec::computer("Bot")),
        )
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn with_rules(rules: RulesConfig) -> GameState {
        GameState::new(
            &GameConfig::new()
                .with_rules(rules)
                .with_participant(ParticipantSpec::human("Ada"))
                .with_participant(ParticipantSpec::human("Bo")),
        )
    }

    #[test]
    #[should_panic(expected = "jail_position 12 is not a jail space")]
    fn test_jail_position_must_be_jail() {
        let mut rules = RulesConfig::default();
        rules.jail_position = 12;
        let _ = with_rules(rules);
    }

    #[test]
    #[should_panic(expected = "board_size does not match the board")]
    fn test_board_size_must_match_board() {
        let mut rules = RulesConfig::default();
        rules.board_size = 41;
        let _ = with_rules(rules);
    }

    #[test]
    fn test_new_state() {
        let state = two_player();
        assert_eq!(state.player_count(), 2);
        assert_eq!(state.current_player(), P0);
        assert_eq!(state.participant(P0).cash, 1500);
        assert_eq!(state.participant(P0).token, "Top Hat");
        assert_eq!(state.participant(P1).token, "Battleship");
        assert!(state.participant(P1).is_computer());
        assert!(state.history().is_empty());
    }

    #[test]
    #[should_panic(expected = "Player count must be 2-8")]
    fn test_single_player_rejected() {
        let _ = GameState::new(&GameConfig::new().with_participant(ParticipantSpec::human("Solo")));
    }

    #[test]
    fn test_advance_wraps_and_pays_bonus() {
        let mut state = two_player();
        state.participants[P0].position = 35;

        let mv = state.advance(P0, 6);
        assert_eq!(mv, Movement { from: 35, to: 1, passed_start: true, bonus: 200 });
        assert_eq!(state.participant(P0).cash, 1700);
    }

    #[test]
    fn test_advance_to_exact_start_pays_bonus() {
        let mut state = two_player();
        state.participants[P0].position = 38;

        let mv = state.advance(P0, 2);
        assert_eq!(mv.to, 0);
        assert!(mv.passed_start);
    }

    #[test]
    fn test_move_to_forward_without_wrap() {
        let mut state = two_player();
        state.participants[P0].position = 7;

        let mv = state.move_to(P0, 24);
        assert!(!mv.passed_start);
        assert_eq!(state.participant(P0).cash, 1500);
    }

    #[test]
    fn test_move_back_never_pays() {
        let mut state = two_player();
        state.participants[P0].position = 2;

        let mv = state.move_back(P0, 3);
        assert_eq!(mv.to, 39);
        assert!(!mv.passed_start);
        assert_eq!(state.participant(P0).cash, 1500);
    }

    #[test]
    fn test_send_to_jail_and_pay_fine() {
        let mut state = two_player();
        state.participants[P0].position = 30;

        state.send_to_jail(P0);
        assert!(state.is_confined(P0));
        assert_eq!(state.participant(P0).position, 10);
        assert_eq!(state.participant(P0).cash, 1500);

        assert_eq!(state.pay_jail_fine(P0), Ok(50));
        assert!(!state.is_confined(P0));
        assert_eq!(state.participant(P0).cash, 1450);
        assert_eq!(state.participant(P0).position, 10);
    }

    #[test]
    fn test_pay_fine_when_free() {
        let mut state = two_player();
        assert_eq!(
            state.pay_jail_fine(P0),
            Err(GameError::from(InvalidOperation::NotConfined))
        );
    }

    #[test]
    fn test_pay_fine_short() {
        let mut state = two_player();
        state.participants[P0].cash = 20;
        state.send_to_jail(P0);

        assert_eq!(
            state.pay_jail_fine(P0),
            Err(GameError::InsufficientFunds { needed: 50, available: 20 })
        );
        assert!(state.is_confined(P0));
        assert_eq!(state.participant(P0).cash, 20);
    }

    #[test]
    fn test_release_card() {
        let mut state = two_player();
        state.send_to_jail(P0);
        assert_eq!(
            state.use_release_card(P0),
            Err(GameError::from(InvalidOperation::NoReleaseCard))
        );

        state.grant_release_card(P0);
        assert_eq!(state.use_release_card(P0), Ok(()));
        assert!(!state.is_confined(P0));
        assert_eq!(state.participant(P0).release_cards, 0);
    }

    #[test]
    fn test_transfer_and_insolvency() {
        let mut state = two_player();
        state.transfer(P0, P1, 1600);

        assert_eq!(state.participant(P0).cash, -100);
        assert_eq!(state.participant(P1).cash, 3100);
        assert_eq!(state.insolvent().collect::<Vec<_>>(), vec![P0]);
    }

    #[test]
    fn test_building_counts() {
        let mut state = two_player();
        let med = state.board().space(1).kind.property().unwrap();
        let baltic = state.board().space(3).kind.property().unwrap();
        state.sell(P0, med).unwrap();
        state.sell(P0, baltic).unwrap();
        state.build_house(P0, med).unwrap();
        state.build_house(P0, med).unwrap();
        state.build_house(P0, baltic).unwrap();

        assert_eq!(state.building_counts(P0), (3, 0));
        assert_eq!(state.building_counts(P1), (0, 0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = two_player();
        let snapshot = state.clone();
        state.pay(P0, 100);

        assert_eq!(snapshot.participant(P0).cash, 1500);
        assert_eq!(state.participant(P0).cash, 1600);
    }
}

//! Builder for a ready-to-play game.

use super::engine::TurnEngine;
use crate::cards::{CardSource, StandardDecks};
use crate::core::{Dice, GameConfig, GameState, ParticipantSpec, RollSource, RulesConfig};
use crate::policy::{AutomatedPolicy, BuyIfAffordable};

/// Builder for creating a [`TurnEngine`].
///
/// ```
/// use rust_monopoly::turn::GameBuilder;
///
/// let mut engine = GameBuilder::new()
///     .human("Ada")
///     .computer("Bot")
///     .starting_cash(1000)
///     .build(42);
///
/// let event = engine.roll().unwrap();
/// assert!((2..=12).contains(&event.roll.total()));
/// ```
pub struct GameBuilder {
    config: GameConfig,
    policy: Box<dyn AutomatedPolicy>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            policy: Box::new(BuyIfAffordable::default()),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn human(self, name: impl Into<String>) -> Self {
        self.participant(ParticipantSpec::human(name))
    }

    pub fn computer(self, name: impl Into<String>) -> Self {
        self.participant(ParticipantSpec::computer(name))
    }

    pub fn participant(mut self, spec: ParticipantSpec) -> Self {
        self.config = self.config.with_participant(spec);
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.config = self.config.with_rules(rules);
        self
    }

    pub fn starting_cash(mut self, cash: i64) -> Self {
        self.config.rules = self.config.rules.with_starting_cash(cash);
        self
    }

    pub fn group_rules(mut self, enabled: bool) -> Self {
        self.config.rules = self.config.rules.with_group_rules(enabled);
        self
    }

    /// Policy for computer seats.
    pub fn policy(mut self, policy: impl AutomatedPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build with seeded dice and the classic card piles.
    ///
    /// Panics unless 2-8 participants were added.
    pub fn build(self, seed: u64) -> TurnEngine {
        self.build_with(Dice::new(seed), StandardDecks::new(seed))
    }

    /// Build with custom roll and card sources.
    pub fn build_with<R: RollSource, C: CardSource>(self, dice: R, cards: C) -> TurnEngine<R, C> {
        let state = GameState::new(&self.config);
        let mut engine = TurnEngine::new(state, dice, cards);
        engine.set_policy(self.policy);
        engine
    }
}

//! Deed, mortgage and building operations through the engine.

use rust_monopoly::bank::SealedBids;
use rust_monopoly::cards::{CardEffect, ScriptedCards};
use rust_monopoly::core::{
    Building, GameConfig, GameError, GameState, InvalidOperation, ParticipantSpec, PlayerId, RulesConfig,
    ScriptedDice,
};
use rust_monopoly::turn::{Settlement, TurnEngine};
use rust_monopoly::{Participant, Property};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn engine(rules: RulesConfig, rolls: &[(u8, u8)]) -> TurnEngine<ScriptedDice, ScriptedCards> {
    let config = GameConfig::new()
        .with_rules(rules)
        .with_participant(ParticipantSpec::human("Ada"))
        .with_participant(ParticipantSpec::human("Bo"));
    TurnEngine::new(
        GameState::new(&config),
        ScriptedDice::new(rolls),
        ScriptedCards::new(&[CardEffect::Collect(0)]),
    )
}

#[test]
fn test_accept_offer_then_collect_improved_rent() {
    let mut engine = engine(RulesConfig::default(), &[(1, 2), (1, 2)]);
    engine.roll().unwrap();
    let baltic = engine.pending_offer().unwrap().property;
    assert_eq!(engine.accept_offer(), Ok(60));

    assert_eq!(engine.build_house(P0, baltic), Ok(50));
    assert_eq!(engine.build_house(P0, baltic), Ok(50));
    assert_eq!(engine.state().bank().houses_remaining(), 30);

    let event = engine.roll().unwrap();
    assert_eq!(event.player, P1);
    assert!(event.settlements.contains(&Settlement::Rent {
        payer: P1,
        owner: P0,
        property: baltic,
        amount: 60,
    }));
    assert_eq!(engine.state().participant(P0).cash, 1500 - 60 - 100 + 60);
}

fn history_net_cash(engine: &TurnEngine<ScriptedDice, ScriptedCards>, player: PlayerId) -> i64 {
    engine.state().history().iter().map(|event| event.net_cash(player)).sum()
}

#[test]
fn test_history_explains_cash_after_offers_and_improvements() {
    let mut engine = engine(RulesConfig::default(), &[(1, 2), (1, 2), (2, 3)]);
    engine.roll().unwrap();
    let baltic = engine.pending_offer().unwrap().property;
    engine.accept_offer().unwrap();
    engine.mortgage(P0, baltic).unwrap();
    engine.unmortgage(P0, baltic).unwrap();
    engine.build_house(P0, baltic).unwrap();

    let first = engine.state().history().front().unwrap().clone();
    assert!(first.settlements.contains(&Settlement::Purchase {
        player: P0,
        property: baltic,
        price: 60,
    }));
    assert!(first.settlements.contains(&Settlement::Build {
        player: P0,
        property: baltic,
        building: Building::House,
        cost: 50,
    }));

    engine.roll().unwrap();
    engine.roll().unwrap();
    let mut bidder = |p: &Participant, _: &Property, high: i64| if p.id == P1 { high + 30 } else { 0 };
    let outcome = engine.auction_offer(&mut bidder).unwrap();
    let last = engine.state().history().back().unwrap().clone();
    assert!(last.settlements.contains(&Settlement::Auction(outcome)));

    for player in [P0, P1] {
        assert_eq!(
            history_net_cash(&engine, player),
            engine.state().participant(player).cash - 1500
        );
    }
}

#[test]
fn test_fine_paid_before_first_roll_lands_in_first_event() {
    let config = GameConfig::new()
        .with_participant(ParticipantSpec::human("Ada"))
        .with_participant(ParticipantSpec::human("Bo"));
    let mut state = GameState::new(&config);
    state.send_to_jail(P0);
    let mut engine = TurnEngine::new(state, ScriptedDice::new(&[(1, 2)]), ScriptedCards::new(&[CardEffect::Collect(0)]));

    assert_eq!(engine.pay_jail_fine(P0), Ok(50));
    assert!(engine.state().history().is_empty());

    let event = engine.roll().unwrap();
    assert!(event.settlements.contains(&Settlement::JailFine { player: P0, amount: 50 }));
    assert_eq!(history_net_cash(&engine, P0), engine.state().participant(P0).cash - 1500);
}

#[test]
fn test_refused_purchase_keeps_offer() {
    let mut engine = engine(RulesConfig::default().with_starting_cash(50), &[(1, 2)]);
    engine.roll().unwrap();

    assert_eq!(
        engine.accept_offer(),
        Err(GameError::InsufficientFunds { needed: 60, available: 50 })
    );
    assert!(engine.pending_offer().is_some());
    assert_eq!(engine.state().participant(P0).cash, 50);

    let offer = engine.decline_offer().unwrap();
    assert!(engine.state().bank().is_unowned(offer.property));
}

#[test]
fn test_auction_with_closure_bidder() {
    let mut engine = engine(RulesConfig::default(), &[(1, 2)]);
    engine.roll().unwrap();

    let mut bidder = |p: &Participant, _: &Property, high: i64| if p.id == P1 { high + 25 } else { 0 };
    let outcome = engine.auction_offer(&mut bidder).unwrap();

    assert_eq!(outcome.winner, Some(P1));
    assert_eq!(outcome.price, 25);
    assert_eq!(engine.state().participant(P1).cash, 1475);
    assert_eq!(engine.pending_offer(), None);
}

#[test]
fn test_auction_without_offer() {
    let mut engine = engine(RulesConfig::default(), &[(1, 2)]);
    assert_eq!(
        engine.auction_offer(&mut SealedBids::new()),
        Err(GameError::from(InvalidOperation::NoPendingOffer))
    );
}

#[test]
fn test_mortgage_through_engine() {
    let mut state = GameState::new(
        &GameConfig::new()
            .with_participant(ParticipantSpec::human("Ada"))
            .with_participant(ParticipantSpec::human("Bo")),
    );
    let boardwalk = state.board().space(39).kind.property().unwrap();
    state.sell(P0, boardwalk).unwrap();
    let mut engine = TurnEngine::new(state, ScriptedDice::new(&[(1, 2)]), ScriptedCards::new(&[CardEffect::Collect(0)]));

    assert_eq!(engine.mortgage(P1, boardwalk), Err(GameError::from(InvalidOperation::NotOwner)));
    assert_eq!(engine.mortgage(P0, boardwalk), Ok(200));
    assert_eq!(
        engine.build_house(P0, boardwalk),
        Err(GameError::from(InvalidOperation::Mortgaged))
    );
    assert_eq!(engine.unmortgage(P0, boardwalk), Ok(220));
    assert_eq!(engine.state().participant(P0).cash, 1500 - 400 + 200 - 220);
}

#[test]
fn test_group_rules_gate_building() {
    let config = GameConfig::new()
        .with_rules(RulesConfig::default().with_group_rules(true))
        .with_participant(ParticipantSpec::human("Ada"))
        .with_participant(ParticipantSpec::human("Bo"));
    let mut state = GameState::new(&config);
    let park = state.board().space(37).kind.property().unwrap();
    let boardwalk = state.board().space(39).kind.property().unwrap();
    state.sell(P0, park).unwrap();
    state.sell(P0, boardwalk).unwrap();
    state.mortgage(P0, park).unwrap();

    assert_eq!(
        state.build_house(P0, boardwalk),
        Err(GameError::from(InvalidOperation::IncompleteGroup))
    );

    state.unmortgage(P0, park).unwrap();
    assert_eq!(state.build_house(P0, boardwalk), Ok(200));
}

#[test]
fn test_hotel_supply() {
    let mut state = GameState::new(
        &GameConfig::new()
            .with_rules(RulesConfig::default().with_supply(32, 0).with_starting_cash(5000))
            .with_participant(ParticipantSpec::human("Ada"))
            .with_participant(ParticipantSpec::human("Bo")),
    );
    let med = state.board().space(1).kind.property().unwrap();
    state.sell(P0, med).unwrap();
    assert_eq!(
        state.build_hotel(P0, med),
        Err(GameError::from(InvalidOperation::NeedsFourHouses))
    );
    for _ in 0..4 {
        state.build_house(P0, med).unwrap();
    }

    assert_eq!(state.build_hotel(P0, med), Err(GameError::SupplyExhausted(Building::Hotel)));
    assert_eq!(state.board().property(med).houses, 4);
}

#[test]
fn test_operations_refused_after_game_over() {
    let mut engine = engine(RulesConfig::default(), &[(1, 2)]);
    engine.roll().unwrap();
    engine.end_game();

    let over = GameError::from(InvalidOperation::GameOver);
    assert_eq!(engine.accept_offer(), Err(over.clone()));
    assert_eq!(engine.pay_jail_fine(P0), Err(over.clone()));
    assert_eq!(engine.decline_offer(), Err(over));
    assert_eq!(engine.pending_offer(), None);
}

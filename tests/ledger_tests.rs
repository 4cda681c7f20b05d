//! Ledger mutation contract: per-player isolation, negative deltas,
//! and the structured log trail.

use terracore::{
    Board, Game, GlobalParameters, LogEntry, PlayerId, Resource, SpaceDefinition, Track,
};

fn test_game() -> Game {
    let board = Board::new(vec![
        SpaceDefinition::land(0, &[1]),
        SpaceDefinition::land(1, &[]),
    ]);
    let params = GlobalParameters::new().with_track("habitat-rate", Track::new(0, 8, 1));
    Game::new(3, board, params)
}

#[test]
fn production_delta_applies_exactly() {
    let mut game = test_game();
    let p0 = PlayerId::new(0);

    let before = game.player(p0).ledger().production_of(Resource::Plants);
    game.add_production(p0, Resource::Plants, 4, None);

    assert_eq!(
        game.player(p0).ledger().production_of(Resource::Plants),
        before + 4
    );
}

#[test]
fn production_may_go_negative() {
    let mut game = test_game();
    let p0 = PlayerId::new(0);

    game.add_production(p0, Resource::MegaCredits, -5, None);
    assert_eq!(
        game.player(p0).ledger().production_of(Resource::MegaCredits),
        -5
    );
}

#[test]
fn mutation_never_leaks_to_other_players() {
    let mut game = test_game();
    let p1 = PlayerId::new(1);

    game.add_stock(p1, Resource::Steel, 7, None);
    game.add_production(p1, Resource::Steel, 2, None);

    for other in [PlayerId::new(0), PlayerId::new(2)] {
        for resource in Resource::ALL {
            assert_eq!(game.player(other).ledger().stock_of(resource), 0);
            assert_eq!(game.player(other).ledger().production_of(resource), 0);
        }
    }
}

#[test]
fn stock_and_production_are_independent_counters() {
    let mut game = test_game();
    let p0 = PlayerId::new(0);

    game.add_stock(p0, Resource::Heat, 3, None);
    assert_eq!(game.player(p0).ledger().production_of(Resource::Heat), 0);

    game.add_production(p0, Resource::Heat, 2, None);
    assert_eq!(game.player(p0).ledger().stock_of(Resource::Heat), 3);
}

#[test]
fn every_mutation_is_logged() {
    let mut game = test_game();
    let p0 = PlayerId::new(0);

    game.add_stock(p0, Resource::Titanium, 1, None);
    game.add_production(p0, Resource::Titanium, 1, None);

    let entries = game.log();
    assert_eq!(entries.len(), 2);
    assert!(matches!(
        entries[0],
        LogEntry::StockChange {
            player,
            resource: Resource::Titanium,
            delta: 1,
            ..
        } if player == p0
    ));
    assert!(matches!(
        entries[1],
        LogEntry::ProductionChange {
            player,
            resource: Resource::Titanium,
            delta: 1,
            ..
        } if player == p0
    ));
}

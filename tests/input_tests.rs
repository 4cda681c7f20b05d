//! Interactive input chaining: a bespoke effect composing two
//! decisions, resolved one answer at a time.

use terracore::{
    Answer, Board, Card, CardBehavior, CardDefinition, Game, GameError, GlobalParameters,
    InputOptions, NextStep, PlayerId, PlayerInput, Resource, ResolutionDriver,
    ResolutionStatus, SpaceDefinition, SpaceId, TileType,
};

fn test_game() -> Game {
    let board = Board::new(vec![
        SpaceDefinition::land(0, &[1]),
        SpaceDefinition::land(1, &[]),
    ]);
    Game::new(1, board, GlobalParameters::new())
}

// Spend 1 or 2 plants, then place a greenery; the second choice only
// appears after the first is answered.
struct TerraformGrant;

impl CardBehavior for TerraformGrant {
    fn bespoke_can_play(&self, game: &Game, player: PlayerId) -> Result<bool, GameError> {
        Ok(game.player(player).ledger().stock_of(Resource::Plants) >= 1
            && !game.board.available_spaces_on_land().is_empty())
    }

    fn bespoke_play(&self, game: &mut Game, player: PlayerId) -> Result<NextStep, GameError> {
        let max = game.player(player).ledger().stock_of(Resource::Plants).min(2);

        Ok(NextStep::AwaitingInput(PlayerInput::select_amount(
            "Select plants to spend",
            1,
            max,
            move |game, amount| {
                game.add_stock(player, Resource::Plants, -amount, None);
                let spaces = game.board.available_spaces_on_land();

                Ok(NextStep::AwaitingInput(PlayerInput::select_space(
                    "Select space for greenery",
                    spaces,
                    move |game, space| {
                        game.place_tile(player, space, TileType::Greenery, None)?;
                        Ok(NextStep::Complete)
                    },
                )))
            },
        )))
    }
}

#[test]
fn chained_inputs_resolve_one_answer_at_a_time() {
    let mut game = test_game();
    let mut driver = ResolutionDriver::new();
    let p0 = PlayerId::new(0);

    game.add_stock(p0, Resource::Plants, 4, None);

    let card = Card::automated(CardDefinition::new("Terraform Grant", 6))
        .with_bespoke(TerraformGrant);

    let status = driver.play(&mut game, &card, p0).unwrap();
    assert_eq!(
        status,
        ResolutionStatus::AwaitingInput {
            player: p0,
            prompt: "Select plants to spend".to_string(),
            options: InputOptions::Amount { min: 1, max: 2 },
        }
    );
    assert_eq!(driver.pending_player(), Some(p0));

    // First answer yields exactly one further node.
    let status = driver
        .submit_answer(&mut game, &Answer::Amount(2))
        .unwrap();
    let ResolutionStatus::AwaitingInput { options, .. } = status else {
        panic!("Expected a second node");
    };
    assert_eq!(
        options,
        InputOptions::Spaces(vec![SpaceId::new(0), SpaceId::new(1)])
    );
    assert_eq!(game.player(p0).ledger().stock_of(Resource::Plants), 2);

    // The stale first node cannot be answered again.
    let err = driver
        .submit_answer(&mut game, &Answer::Amount(1))
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidChoice(_)));

    let status = driver
        .submit_answer(&mut game, &Answer::Space(SpaceId::new(1)))
        .unwrap();
    assert_eq!(status, ResolutionStatus::Complete);
    assert!(game
        .board
        .space(SpaceId::new(1))
        .unwrap()
        .has_tile(TileType::Greenery));
    assert!(!driver.has_pending());
}

#[test]
fn bespoke_eligibility_gates_can_play() {
    let game = test_game();
    let driver = ResolutionDriver::new();
    let p0 = PlayerId::new(0);

    let card = Card::automated(CardDefinition::new("Terraform Grant", 6))
        .with_bespoke(TerraformGrant);

    // No plants banked: the bespoke check refuses.
    assert!(!driver.can_play(&game, &card, p0).unwrap());
}

use broadside::{
    random_target, AttackResult, GameEngine, GameError, GameStatus, Orientation, Side, BOARD_SIZE,
    STANDARD_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn started(seed: u64) -> (GameEngine, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = GameEngine::new("Alice");
    game.place_human_ships_randomly(&mut rng).unwrap();
    game.start(&mut rng).unwrap();
    (game, rng)
}

#[test]
fn test_cannot_start_with_partial_fleet() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut game = GameEngine::new("Alice");
    game.place_human_ship("carrier", (0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(game.start(&mut rng).unwrap_err(), GameError::FleetIncomplete);
    assert_eq!(game.status(), GameStatus::Placement);
    assert_eq!(game.human_attack((0, 0)).unwrap_err(), GameError::NotStarted);
}

#[test]
fn test_manual_placement_then_start() {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut game = GameEngine::new("Alice");
    for (i, def) in STANDARD_FLEET.iter().enumerate() {
        game.place_human_ship(def.name(), (i * 2, 0), Orientation::Horizontal)
            .unwrap();
    }
    game.start(&mut rng).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress(Side::Human));
    assert!(game.computer().board().all_ships_placed());
    assert_eq!(
        game.place_human_ship("carrier", (0, 0), Orientation::Vertical)
            .unwrap_err(),
        GameError::AlreadyStarted
    );
}

#[test]
fn test_turns_alternate() {
    let (mut game, mut rng) = started(3);
    assert_eq!(game.turn(), Some(Side::Human));
    assert_eq!(
        game.computer_attack(&mut rng).unwrap_err(),
        GameError::OutOfTurn
    );

    game.human_attack((0, 0)).unwrap();
    assert_eq!(game.turn(), Some(Side::Computer));
    assert_eq!(game.human_attack((0, 1)).unwrap_err(), GameError::OutOfTurn);

    game.computer_attack(&mut rng).unwrap();
    assert_eq!(game.turn(), Some(Side::Human));
    assert_eq!(game.turns(), 1);
}

#[test]
fn test_repeat_keeps_turn() {
    let (mut game, mut rng) = started(4);
    game.human_attack((4, 4)).unwrap();
    game.computer_attack(&mut rng).unwrap();
    let repeat = game.human_attack((4, 4)).unwrap();
    assert_eq!(repeat.result(), AttackResult::Already);
    assert_eq!(game.turn(), Some(Side::Human));
}

#[test]
fn test_human_wins_by_sweeping() {
    let (mut game, mut rng) = started(5);
    let targets: Vec<_> = game
        .computer()
        .board()
        .fleet()
        .iter()
        .flat_map(|p| p.coordinates.clone())
        .collect();
    for coord in targets {
        let outcome = game.human_attack(coord).unwrap();
        assert!(matches!(
            outcome.result(),
            AttackResult::Hit | AttackResult::Sunk
        ));
        if game.winner().is_some() {
            break;
        }
        game.computer_attack(&mut rng).unwrap();
    }
    assert_eq!(game.winner(), Some(Side::Human));
    assert!(game.computer().board().all_ships_sunk());
    assert_eq!(game.human_attack((0, 0)).unwrap_err(), GameError::GameOver);
}

#[test]
fn test_match_runs_to_completion() {
    let (mut game, mut rng) = started(6);
    while game.winner().is_none() {
        let coord = random_target(game.rules(), game.human().attacked(), &mut rng).unwrap();
        game.human_attack(coord).unwrap();
        if game.winner().is_some() {
            break;
        }
        game.computer_attack(&mut rng).unwrap();
    }
    let loser = match game.winner().unwrap() {
        Side::Human => game.computer(),
        Side::Computer => game.human(),
    };
    assert!(loser.board().all_ships_sunk());
    assert!(game.turns() <= BOARD_SIZE * BOARD_SIZE);
}

#[test]
fn test_reset_returns_to_placement() {
    let (mut game, mut rng) = started(7);
    game.human_attack((0, 0)).unwrap();
    game.computer_attack(&mut rng).unwrap();

    game.reset();
    assert_eq!(game.status(), GameStatus::Placement);
    assert_eq!(game.turns(), 0);
    assert_eq!(game.human().name(), "Alice");
    assert!(game.human().board().fleet().is_empty());
    assert!(game.human().attacked().is_empty());
    assert!(game.computer().attacked().is_empty());
}

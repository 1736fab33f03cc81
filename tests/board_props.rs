use broadside::{AttackResult, Board, Cell, Orientation, BOARD_SIZE, STANDARD_FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::standard();
    board.auto_place_fleet(&mut rng).unwrap();
    let guesses = rng.random_range(0..BOARD_SIZE * 3);
    for _ in 0..guesses {
        let r = rng.random_range(0..BOARD_SIZE);
        let c = rng.random_range(0..BOARD_SIZE);
        board.receive_attack((r, c));
    }
    board
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_is_all_or_nothing(
        seed in any::<u64>(),
        ship in 0..STANDARD_FLEET.len(),
        row in 0..BOARD_SIZE + 2,
        col in 0..BOARD_SIZE + 2,
        axis in orientation(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::standard();
        // place everything except the ship under test
        let name = STANDARD_FLEET[ship].name();
        for def in STANDARD_FLEET.iter().filter(|d| d.name() != name) {
            loop {
                let start = (rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE));
                let axis = if rng.random_bool(0.5) { Orientation::Horizontal } else { Orientation::Vertical };
                if board.place_ship(def.name(), start, axis).is_ok() {
                    break;
                }
            }
        }
        let before = board.clone();
        if board.place_ship(name, (row, col), axis).is_err() {
            prop_assert_eq!(board, before);
        } else {
            prop_assert!(board.all_ships_placed());
        }
    }

    #[test]
    fn repeated_attack_is_idempotent(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = random_board(seed);
        let already_attacked = board.cell((row, col)).unwrap().is_attacked();
        let first = board.receive_attack((row, col));
        if already_attacked {
            prop_assert_eq!(first.result, AttackResult::Already);
        } else {
            prop_assert_ne!(first.result, AttackResult::Already);
        }
        let after_first = board.clone();
        for _ in 0..3 {
            let again = board.receive_attack((row, col));
            prop_assert_eq!(again.result, AttackResult::Already);
            prop_assert_eq!(&board, &after_first);
        }
    }

    #[test]
    fn sunk_ships_cover_only_sunk_cells(seed in any::<u64>()) {
        let board = random_board(seed);
        for placement in board.fleet() {
            let sunk = placement.ship.is_sunk();
            for &coord in &placement.coordinates {
                let cell = board.cell(coord).unwrap();
                prop_assert_eq!(cell.ship_name(), Some(placement.ship.name()));
                prop_assert_eq!(matches!(cell, Cell::Sunk(_)), sunk);
            }
        }
        let all_sunk = board.fleet().iter().all(|p| p.ship.is_sunk());
        prop_assert_eq!(board.all_ships_sunk(), all_sunk);
    }
}

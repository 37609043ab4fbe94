//! Property tests over random playouts.

use proptest::prelude::*;

use rust_othello::core::{
    Board, Cell, Difficulty, Direction, EngineConfig, GamePhase, Player, Position, ScriptedRng,
};
use rust_othello::rules::{GameEngine, MoveRecord, TurnOutcome};

struct Ply {
    before: Board,
    record: MoveRecord,
    turn: TurnOutcome,
    after: Board,
}

/// Play from the opening, each side choosing a legal move by index from
/// `picks`, until the picks run out or the game ends.
fn random_playout(picks: &[usize]) -> (GameEngine<ScriptedRng>, Vec<Ply>) {
    let mut engine = GameEngine::with_rng(EngineConfig::default(), ScriptedRng::new(vec![0]));
    engine.start_game(Difficulty::Easy).unwrap();

    let mut plies = Vec::new();
    for &pick in picks {
        if engine.phase() != GamePhase::InProgress {
            break;
        }
        let before = *engine.board();
        let mover = engine.to_move();
        let moves = engine.legal_moves(mover);
        let record = engine.apply_move_as(mover, moves[pick % moves.len()]).unwrap();
        let after = *engine.board();
        let turn = engine.advance_turn().unwrap();
        plies.push(Ply {
            before,
            record,
            turn,
            after,
        });
    }
    (engine, plies)
}

/// Discs between `pos` and the nearest own disc along `dir`, if bracketed.
fn bracketed(board: &Board, pos: Position, player: Player, dir: Direction) -> Vec<Position> {
    let mut run = Vec::new();
    let mut cur = pos.step(dir);
    while let Some(p) = cur {
        match board.get(p).owner() {
            Some(owner) if owner == player.opponent() => run.push(p),
            Some(_) => return run,
            None => return Vec::new(),
        }
        cur = p.step(dir);
    }
    Vec::new()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_disc_count_grows_by_one(picks in prop::collection::vec(0usize..32, 0..60)) {
        let (engine, plies) = random_playout(&picks);

        for ply in &plies {
            prop_assert_eq!(ply.after.score().total(), ply.before.score().total() + 1);
            prop_assert!(!ply.record.flipped.is_empty());
        }
        prop_assert!(engine.score().total() <= 64);
        prop_assert_eq!(engine.score().total() as usize, 4 + plies.len());
    }

    #[test]
    fn prop_flips_are_exactly_the_bracketed_runs(
        picks in prop::collection::vec(0usize..32, 1..60)
    ) {
        let (_, plies) = random_playout(&picks);

        for ply in &plies {
            let player = ply.record.player;
            let position = ply.record.position;
            let flipped = &ply.record.flipped;
            let expected: Vec<Position> = Direction::ALL
                .iter()
                .flat_map(|&dir| bracketed(&ply.before, position, player, dir))
                .collect();
            prop_assert_eq!(flipped.as_slice(), expected.as_slice());

            // every changed cell is the placed disc or a flip
            for (p, cell) in ply.after.cells() {
                let was = ply.before.get(p);
                if p == position {
                    prop_assert_eq!(cell, player.to_cell());
                } else if flipped.contains(&p) {
                    prop_assert_eq!(was, player.opponent().to_cell());
                    prop_assert_eq!(cell, player.to_cell());
                } else {
                    prop_assert_eq!(cell, was);
                }
            }
        }
    }

    #[test]
    fn prop_game_ends_iff_nobody_can_move(
        picks in prop::collection::vec(0usize..32, 0..64)
    ) {
        let (engine, plies) = random_playout(&picks);

        for ply in &plies {
            let black = ply.after.has_legal_move(Player::Black);
            let white = ply.after.has_legal_move(Player::White);
            match ply.turn {
                TurnOutcome::GameEnded(_) => prop_assert!(!black && !white),
                TurnOutcome::SwitchedPlayer(p) => {
                    prop_assert_eq!(p, ply.record.player.opponent());
                    prop_assert!(ply.after.has_legal_move(p));
                }
                TurnOutcome::ContinueSamePlayer(p) => {
                    prop_assert_eq!(p, ply.record.player);
                    prop_assert!(!ply.after.has_legal_move(p.opponent()));
                    prop_assert!(ply.after.has_legal_move(p));
                }
            }
        }
        prop_assert_eq!(engine.is_terminal(), engine.phase() == GamePhase::Ended);
    }

    #[test]
    fn prop_legal_moves_are_empty_and_row_major(
        picks in prop::collection::vec(0usize..32, 0..40)
    ) {
        let (engine, _) = random_playout(&picks);
        let board = engine.board();

        for player in Player::ALL {
            let moves = board.legal_moves(player);
            prop_assert!(moves.windows(2).all(|w| w[0].index() < w[1].index()));
            for pos in &moves {
                prop_assert_eq!(board.get(*pos), Cell::Empty);
                prop_assert!(board.flip_count(*pos, player) > 0);
            }
        }
    }
}

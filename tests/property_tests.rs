//! Property tests - board invariants under arbitrary play

use proptest::prelude::*;

use melt_tetris::core::{shape_for, Board, BoardModel, GridSize, TickOutcome};
use melt_tetris::types::{Direction, PieceKind};

#[derive(Debug, Clone, Copy)]
enum Step {
    Left,
    Right,
    Down,
    Rotate,
    Tick,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        1 => Just(Step::Left),
        1 => Just(Step::Right),
        1 => Just(Step::Down),
        1 => Just(Step::Rotate),
        3 => Just(Step::Tick),
    ]
}

fn apply(model: &mut BoardModel, step: Step) {
    match step {
        Step::Left => {
            model.move_piece(Direction::Left);
        }
        Step::Right => {
            model.move_piece(Direction::Right);
        }
        Step::Down => {
            model.move_piece(Direction::Down);
        }
        Step::Rotate => {
            model.rotate();
        }
        Step::Tick => {
            model.tick();
        }
    }
}

fn grid_size() -> impl Strategy<Value = GridSize> {
    (8u8..=32, 8u8..=64).prop_map(|(w, h)| GridSize::new(w, h).unwrap())
}

proptest! {
    #[test]
    fn rows_stay_within_width(seed in any::<u64>(), steps in prop::collection::vec(step(), 0..400)) {
        let mut model = BoardModel::seeded(seed);
        let mask = model.board().full_row_mask();
        for s in steps {
            apply(&mut model, s);
            prop_assert!(model.board().rows().iter().all(|&r| r <= mask));
            prop_assert_eq!(model.board().rows().len(), model.height() as usize);
        }
    }

    #[test]
    fn active_piece_never_collides_while_playing(
        seed in any::<u64>(),
        steps in prop::collection::vec(step(), 0..400),
    ) {
        let mut model = BoardModel::seeded(seed);
        for s in steps {
            apply(&mut model, s);
            if model.is_game_over() {
                break;
            }
            let p = model.active().placement;
            // A fresh spawn may overlap; everything the piece moved into may not.
            if model.previous() != p {
                prop_assert!(!model.collides(p.x, p.y, p.rotation));
            }
        }
    }

    #[test]
    fn no_full_rows_survive_a_lock(seed in any::<u64>(), ticks in 0usize..600) {
        let mut model = BoardModel::seeded(seed);
        for _ in 0..ticks {
            if let TickOutcome::Locked { .. } = model.tick() {
                let board = model.board();
                for y in 1..board.height() as usize {
                    prop_assert!(!board.is_row_full(y));
                }
                prop_assert!(model.clone().clear_rows().is_empty());
            }
        }
    }

    #[test]
    fn clearing_preserves_height_and_drops_full_rows(
        size in grid_size(),
        fill in prop::collection::vec(any::<u32>(), 64),
        full in prop::collection::vec(any::<bool>(), 64),
    ) {
        let mut board = Board::new(size);
        let mask = board.full_row_mask();
        let height = board.height() as usize;
        // Row 0 is never melted, and would be once shifted down, so keep it partial.
        for y in 0..height {
            let bits = if full[y] && y > 0 { mask } else { fill[y] & mask & !1 };
            board.set_row(y, bits);
        }
        let expected_cleared = (1..height).filter(|&y| full[y]).count();
        let before = board.occupied_count();

        let cleared = board.clear_full_rows();

        prop_assert_eq!(cleared.len(), expected_cleared);
        prop_assert_eq!(board.rows().len(), height);
        prop_assert_eq!(
            board.occupied_count(),
            before - expected_cleared as u32 * size.width() as u32
        );
        prop_assert!(board.clear_full_rows().is_empty());
    }

    #[test]
    fn collision_matches_cell_overlap(
        kind_index in 0usize..PieceKind::COUNT,
        rotation in 0usize..4,
        x in -2i8..12,
        y in -3i8..22,
        cells in prop::collection::vec((0i8..10, 0i8..20), 0..40),
    ) {
        let mut board = Board::default();
        for (cx, cy) in cells {
            board.set(cx, cy, true);
        }
        let shape = shape_for(PieceKind::ALL[kind_index], rotation);

        let in_bounds = x >= 0
            && x as i16 + shape.width() as i16 <= board.width() as i16
            && y as i16 + shape.height() as i16 <= board.height() as i16;
        let overlaps = shape
            .cells()
            .any(|(w, h)| board.is_occupied(x + w as i8, y + h as i8));

        prop_assert_eq!(board.collides(shape, x, y), !in_bounds || overlaps);
    }

    #[test]
    fn merge_adds_shape_cells(
        kind_index in 0usize..PieceKind::COUNT,
        rotation in 0usize..4,
        x in 0i8..7,
        y in 0i8..17,
    ) {
        let mut board = Board::default();
        let shape = shape_for(PieceKind::ALL[kind_index], rotation);
        prop_assume!(!board.collides(shape, x, y));
        board.merge(shape, x, y);
        prop_assert_eq!(board.occupied_count(), 4);
        for (w, h) in shape.cells() {
            prop_assert!(board.is_occupied(x + w as i8, y + h as i8));
        }
    }
}

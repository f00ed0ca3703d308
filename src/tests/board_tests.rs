use board_game_traits::Color;

use crate::position::{
    squares_iterator, Board, Direction, IllegalMove, IllegalStone, Orientation, Square, Stone,
    StoneKind,
};

/// Build a stack at `square` by sliding stones in from the west neighbour, one at a time.
fn stack_up(board: &mut Board, square: Square, stones: &[Stone]) {
    let west = square.go_direction(Direction::West).unwrap();
    board.add_stone(stones[0], square).unwrap();
    for &stone in &stones[1..] {
        board.add_stone(stone, west).unwrap();
        board.move_stack(1, Direction::East, &[1], west).unwrap();
    }
    assert_eq!(board.stack(square).unwrap().iter().collect::<Vec<_>>(), stones);
}

#[test]
fn default_board_test() {
    let board = Board::default();
    for square in squares_iterator() {
        assert!(board.stack(square).unwrap().is_empty());
    }
    assert_eq!(board.empty_cells().len(), 25);
    assert!(!board.is_full());
}

#[test]
fn go_in_directions_test() {
    let corner = Square::new(0, 0);
    assert_eq!(corner.go_direction(Direction::North), Some(Square::new(1, 0)));
    assert_eq!(corner.go_direction(Direction::East), Some(Square::new(0, 1)));
    assert_eq!(corner.go_direction(Direction::South), None);
    assert_eq!(corner.go_direction(Direction::West), None);
    assert_eq!(corner.neighbours().count(), 2);
    assert_eq!(Square::new(2, 2).neighbours().count(), 4);
    assert_eq!(
        Square::new(2, 2).jump_direction(Direction::East, 2),
        Some(Square::new(2, 4))
    );
    assert_eq!(Square::new(2, 2).jump_direction(Direction::East, 3), None);
    for square in squares_iterator() {
        for direction in Direction::all() {
            if let Some(neighbour) = square.go_direction(direction) {
                assert_eq!(neighbour.go_direction(direction.reverse()), Some(square));
            }
        }
    }
}

#[test]
fn capstone_cannot_be_flat_test() {
    assert_eq!(
        Stone::new(Color::White, StoneKind::Capstone, Orientation::Flat),
        Err(IllegalStone)
    );
    let mut capstone = Stone::capstone(Color::Black);
    assert_eq!(capstone.set_orientation(Orientation::Flat), Err(IllegalStone));
    assert!(capstone.is_capstone());

    let mut stone = Stone::new(Color::Black, StoneKind::Regular, Orientation::Flat).unwrap();
    stone.set_orientation(Orientation::Standing).unwrap();
    assert!(stone.is_wall());
    assert!(!stone.is_road_stone());
}

#[test]
fn stone_display_test() {
    assert_eq!(Stone::flat(Color::White).to_string(), "w");
    assert_eq!(Stone::standing(Color::Black).to_string(), "Sb");
    assert_eq!(Stone::capstone(Color::White).to_string(), "W");
}

#[test]
fn place_on_occupied_square_test() {
    let mut board = Board::default();
    let square = Square::new(1, 3);
    board.add_stone(Stone::flat(Color::White), square).unwrap();
    assert_eq!(
        board.add_stone(Stone::capstone(Color::Black), square),
        Err(IllegalMove::Occupied)
    );
    assert_eq!(board.top_stone(square), Ok(Some(Stone::flat(Color::White))));
    assert_eq!(board.top_color(square), Ok(Some(Color::White)));
}

#[test]
fn out_of_bounds_test() {
    let mut board = Board::default();
    assert_eq!(
        board.add_stone(Stone::flat(Color::White), Square::new(5, 0)),
        Err(IllegalMove::OutOfBounds)
    );
    assert_eq!(board.top_stone(Square::new(0, 9)), Err(IllegalMove::OutOfBounds));
    assert_eq!(
        board.move_stack(1, Direction::North, &[1], Square::new(7, 7)),
        Err(IllegalMove::OutOfBounds)
    );

    board.add_stone(Stone::flat(Color::White), Square::new(0, 4)).unwrap();
    assert_eq!(
        board.move_stack(1, Direction::East, &[1], Square::new(0, 4)),
        Err(IllegalMove::OutOfBounds)
    );
    assert_eq!(
        board.move_stack(1, Direction::South, &[1], Square::new(0, 4)),
        Err(IllegalMove::OutOfBounds)
    );
}

#[test]
fn spread_stack_east_test() {
    let mut board = Board::default();
    let stones = [
        Stone::flat(Color::Black),
        Stone::flat(Color::White),
        Stone::flat(Color::Black),
        Stone::flat(Color::White),
        Stone::flat(Color::White),
    ];
    stack_up(&mut board, Square::new(2, 2), &stones);

    board
        .move_stack(5, Direction::East, &[3, 2], Square::new(2, 2))
        .unwrap();

    assert!(board.stack(Square::new(2, 2)).unwrap().is_empty());
    assert_eq!(
        board.stack(Square::new(2, 3)).unwrap().iter().collect::<Vec<_>>(),
        stones[..3]
    );
    assert_eq!(
        board.stack(Square::new(2, 4)).unwrap().iter().collect::<Vec<_>>(),
        stones[3..]
    );
}

#[test]
fn partial_stack_move_test() {
    let mut board = Board::default();
    let stones = [
        Stone::flat(Color::White),
        Stone::flat(Color::Black),
        Stone::flat(Color::White),
    ];
    stack_up(&mut board, Square::new(3, 1), &stones);
    board.add_stone(Stone::flat(Color::Black), Square::new(4, 1)).unwrap();

    board
        .move_stack(2, Direction::North, &[2], Square::new(3, 1))
        .unwrap();

    assert_eq!(
        board.stack(Square::new(3, 1)).unwrap().iter().collect::<Vec<_>>(),
        stones[..1]
    );
    assert_eq!(
        board.stack(Square::new(4, 1)).unwrap().iter().collect::<Vec<_>>(),
        [Stone::flat(Color::Black), stones[1], stones[2]]
    );
    assert_eq!(board.top_color(Square::new(4, 1)), Ok(Some(Color::White)));
}

#[test]
fn capstone_flattens_wall_test() {
    let mut board = Board::default();
    board.add_stone(Stone::standing(Color::Black), Square::new(0, 1)).unwrap();
    board.add_stone(Stone::capstone(Color::White), Square::new(0, 0)).unwrap();

    board
        .move_stack(1, Direction::East, &[1], Square::new(0, 0))
        .unwrap();

    let stack = board.stack(Square::new(0, 1)).unwrap();
    assert_eq!(stack.get(0), Some(Stone::flat(Color::Black)));
    assert_eq!(stack.top_stone(), Some(Stone::capstone(Color::White)));
}

/// A white flat with the white capstone on top at (2,0), an empty (2,1) and a black wall at (2,2).
fn capstone_stack_before_wall() -> Board {
    let mut board = Board::default();
    board.add_stone(Stone::flat(Color::White), Square::new(2, 0)).unwrap();
    board.add_stone(Stone::capstone(Color::White), Square::new(2, 1)).unwrap();
    board
        .move_stack(1, Direction::West, &[1], Square::new(2, 1))
        .unwrap();
    board.add_stone(Stone::standing(Color::Black), Square::new(2, 2)).unwrap();
    board
}

#[test]
fn capstone_flattens_wall_at_end_of_spread_test() {
    let mut board = capstone_stack_before_wall();
    board
        .move_stack(2, Direction::East, &[1, 1], Square::new(2, 0))
        .unwrap();

    assert!(board.stack(Square::new(2, 0)).unwrap().is_empty());
    assert_eq!(board.top_stone(Square::new(2, 1)), Ok(Some(Stone::flat(Color::White))));
    assert_eq!(
        board.stack(Square::new(2, 2)).unwrap().iter().collect::<Vec<_>>(),
        [Stone::flat(Color::Black), Stone::capstone(Color::White)]
    );
}

#[test]
fn capstone_cannot_bring_company_onto_wall_test() {
    let mut board = capstone_stack_before_wall();
    board.add_stone(Stone::standing(Color::Black), Square::new(2, 1)).unwrap();
    let before = board.clone();

    assert_eq!(
        board.move_stack(2, Direction::East, &[2], Square::new(2, 0)),
        Err(IllegalMove::ToppleStanding)
    );
    assert_eq!(board, before);
}

#[test]
fn flat_cannot_topple_wall_test() {
    let mut board = Board::default();
    board.add_stone(Stone::flat(Color::White), Square::new(1, 0)).unwrap();
    board.add_stone(Stone::standing(Color::Black), Square::new(1, 1)).unwrap();
    let before = board.clone();

    assert_eq!(
        board.move_stack(1, Direction::East, &[1], Square::new(1, 0)),
        Err(IllegalMove::ToppleStanding)
    );
    assert_eq!(board, before);
}

#[test]
fn nothing_moves_onto_capstone_test() {
    let mut board = Board::default();
    board.add_stone(Stone::capstone(Color::White), Square::new(1, 0)).unwrap();
    board.add_stone(Stone::capstone(Color::Black), Square::new(1, 1)).unwrap();

    assert_eq!(
        board.move_stack(1, Direction::East, &[1], Square::new(1, 0)),
        Err(IllegalMove::CaptureCapstone)
    );
}

#[test]
fn failed_spread_leaves_board_unchanged_test() {
    let mut board = Board::default();
    let stones = [Stone::flat(Color::White), Stone::flat(Color::Black)];
    stack_up(&mut board, Square::new(0, 1), &stones);
    board.add_stone(Stone::capstone(Color::Black), Square::new(0, 3)).unwrap();
    let before = board.clone();

    // The first stop is fine, the second is a capstone
    assert_eq!(
        board.move_stack(2, Direction::East, &[1, 1], Square::new(0, 1)),
        Err(IllegalMove::CaptureCapstone)
    );
    assert_eq!(board, before);
}

#[test]
fn stack_move_argument_errors_test() {
    let mut board = Board::default();
    let square = Square::new(0, 0);
    assert_eq!(
        board.move_stack(1, Direction::North, &[1], square),
        Err(IllegalMove::EmptyStack)
    );
    board.add_stone(Stone::flat(Color::White), square).unwrap();

    assert_eq!(
        board.move_stack(2, Direction::North, &[1], square),
        Err(IllegalMove::DropsMismatch)
    );
    assert_eq!(
        board.move_stack(1, Direction::North, &[1, 0], square),
        Err(IllegalMove::DropsMismatch)
    );
    assert_eq!(
        board.move_stack(2, Direction::North, &[2], square),
        Err(IllegalMove::NotEnoughStones)
    );
    assert_eq!(
        board.move_stack(6, Direction::North, &[6], square),
        Err(IllegalMove::CarryLimit(6))
    );
    assert_eq!(
        board.move_stack(0, Direction::North, &[], square),
        Err(IllegalMove::CarryLimit(0))
    );
}

#[test]
fn walls_block_roads_test() {
    let mut board = Board::default();
    for col in 0..5 {
        board.add_stone(Stone::flat(Color::White), Square::new(3, col)).unwrap();
    }
    assert!(board.to_graph(Color::White).has_road());
    assert!(!board.to_graph(Color::Black).has_road());

    let mut board = Board::default();
    for col in 0..5 {
        let stone = if col == 2 {
            Stone::standing(Color::White)
        } else {
            Stone::flat(Color::White)
        };
        board.add_stone(stone, Square::new(3, col)).unwrap();
    }
    assert!(!board.to_graph(Color::White).has_road());
    assert_eq!(board.num_owned_stacks(Color::White), 5);
    assert_eq!(board.num_owned_road_cells(Color::White), 4);
}

#[test]
fn capstone_counts_for_vertical_road_test() {
    let mut board = Board::default();
    for row in 0..5 {
        let stone = if row == 4 {
            Stone::capstone(Color::Black)
        } else {
            Stone::flat(Color::Black)
        };
        board.add_stone(stone, Square::new(row, 4)).unwrap();
    }
    assert!(board.to_graph(Color::Black).has_road());
}

#[test]
fn winding_road_test() {
    let mut board = Board::default();
    for square in [
        Square::new(1, 0),
        Square::new(1, 1),
        Square::new(2, 1),
        Square::new(3, 1),
        Square::new(3, 2),
        Square::new(3, 3),
        Square::new(2, 3),
        Square::new(2, 4),
    ] {
        board.add_stone(Stone::flat(Color::White), square).unwrap();
    }
    assert!(board.to_graph(Color::White).has_road());
}

#[test]
fn road_graph_degree_test() {
    let mut board = Board::default();
    board.add_stone(Stone::flat(Color::White), Square::new(0, 0)).unwrap();
    board.add_stone(Stone::flat(Color::White), Square::new(0, 1)).unwrap();
    board.add_stone(Stone::capstone(Color::White), Square::new(1, 1)).unwrap();
    board.add_stone(Stone::standing(Color::White), Square::new(1, 0)).unwrap();

    let graph = board.to_graph(Color::White);
    assert_eq!(graph.neighbours(Square::new(0, 1)).len(), 2);
    assert!(graph.neighbours(Square::new(1, 0)).is_empty());
    // Two adjacent pairs, each counted from both ends
    assert_eq!(graph.total_degree(), 4);
    assert_eq!(board.to_graph(Color::Black).total_degree(), 0);
}

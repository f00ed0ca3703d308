use std::collections::VecDeque;
use std::fmt;

use arrayvec::ArrayVec;
use board_game_traits::Color;

use crate::position::error::IllegalMove;
use crate::position::square::{squares_iterator, AbstractBoard, Direction, Square};
use crate::position::stone::Stone;
use crate::position::{BOARD_SIZE, CARRY_LIMIT};

/// The stones on a single square, from the bottom of the stack to the top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    stones: Vec<Stone>,
}

impl Stack {
    pub fn top_stone(&self) -> Option<Stone> {
        self.stones.last().copied()
    }

    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Get the stone at `i`, counting from the bottom.
    pub fn get(&self, i: usize) -> Option<Stone> {
        self.stones.get(i).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Stone> + '_ {
        self.stones.iter().copied()
    }

    fn push(&mut self, stone: Stone) {
        self.stones.push(stone)
    }

    /// Lift the top `count` stones, bottom-most first.
    fn take(&mut self, count: usize) -> Vec<Stone> {
        let split_at = self.stones.len() - count;
        self.stones.split_off(split_at)
    }
}

/// A 5x5 Tak board. Only holds the stacks: inventories and turn order live in `GameState`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: AbstractBoard<Stack>,
}

impl Board {
    fn cell(&self, square: Square) -> Result<&Stack, IllegalMove> {
        self.cells.get(square).ok_or(IllegalMove::OutOfBounds)
    }

    /// Full contents of a square. Fails if the square is off the board.
    pub fn stack(&self, square: Square) -> Result<&Stack, IllegalMove> {
        self.cell(square)
    }

    pub fn top_stone(&self, square: Square) -> Result<Option<Stone>, IllegalMove> {
        Ok(self.cell(square)?.top_stone())
    }

    pub fn top_color(&self, square: Square) -> Result<Option<Color>, IllegalMove> {
        Ok(self.top_stone(square)?.map(Stone::color))
    }

    /// Place a new stone on an empty square.
    pub fn add_stone(&mut self, stone: Stone, square: Square) -> Result<(), IllegalMove> {
        if !self.cell(square)?.is_empty() {
            return Err(IllegalMove::Occupied);
        }
        self.cells[square].push(stone);
        Ok(())
    }

    /// Lift the top `count` stones from `square` and carry them in `direction`,
    /// leaving `drops[i]` stones on the `i`th square along the way.
    ///
    /// The whole move is checked before the board is touched: if any part of it is illegal,
    /// the board is left unchanged.
    pub fn move_stack(
        &mut self,
        count: u8,
        direction: Direction,
        drops: &[u8],
        square: Square,
    ) -> Result<(), IllegalMove> {
        self.check_stack_move(count, direction, drops, square)?;

        let mut carried = self.cells[square].take(count as usize);
        for (i, &drop) in drops.iter().enumerate() {
            let to = square
                .jump_direction(direction, i as u8 + 1)
                .ok_or(IllegalMove::OutOfBounds)?;
            let destination = &mut self.cells[to];
            if let Some(top) = destination.stones.last_mut() {
                top.flatten();
            }
            destination.stones.extend(carried.drain(..drop as usize));
        }
        debug_assert!(carried.is_empty());
        Ok(())
    }

    fn check_stack_move(
        &self,
        count: u8,
        direction: Direction,
        drops: &[u8],
        square: Square,
    ) -> Result<(), IllegalMove> {
        if drops.iter().map(|&drop| drop as u32).sum::<u32>() != count as u32
            || drops.contains(&0)
        {
            return Err(IllegalMove::DropsMismatch);
        }
        let origin = self.cell(square)?;
        if origin.is_empty() {
            return Err(IllegalMove::EmptyStack);
        }
        if count < 1 || count as usize > CARRY_LIMIT {
            return Err(IllegalMove::CarryLimit(count));
        }
        if origin.len() < count as usize {
            return Err(IllegalMove::NotEnoughStones);
        }
        if drops.len() >= BOARD_SIZE
            || square
                .jump_direction(direction, drops.len() as u8)
                .is_none()
        {
            return Err(IllegalMove::OutOfBounds);
        }

        let mut carried = count;
        for (i, &drop) in drops.iter().enumerate() {
            let to = square
                .jump_direction(direction, i as u8 + 1)
                .ok_or(IllegalMove::OutOfBounds)?;
            match self.cells[to].top_stone() {
                Some(top) if top.is_capstone() => return Err(IllegalMove::CaptureCapstone),
                Some(top) if top.is_wall() => {
                    // The stone that touches the wall is the bottom one still being carried
                    let bottom = origin.get(origin.len() - carried as usize);
                    if carried != 1 || !bottom.is_some_and(Stone::is_capstone) {
                        return Err(IllegalMove::ToppleStanding);
                    }
                }
                _ => (),
            }
            carried -= drop;
        }
        Ok(())
    }

    pub fn owns_stack(&self, color: Color, square: Square) -> bool {
        self.cells
            .get(square)
            .and_then(Stack::top_stone)
            .is_some_and(|stone| stone.color() == color)
    }

    pub fn owns_road_cell(&self, color: Color, square: Square) -> bool {
        self.cells
            .get(square)
            .and_then(Stack::top_stone)
            .is_some_and(|stone| stone.color() == color && stone.is_road_stone())
    }

    pub fn num_owned_stacks(&self, color: Color) -> u8 {
        squares_iterator()
            .filter(|&square| self.owns_stack(color, square))
            .count() as u8
    }

    pub fn num_owned_road_cells(&self, color: Color) -> u8 {
        squares_iterator()
            .filter(|&square| self.owns_road_cell(color, square))
            .count() as u8
    }

    pub fn empty_cells(&self) -> Vec<Square> {
        squares_iterator()
            .filter(|&square| self.cells[square].is_empty())
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|stack| !stack.is_empty())
    }

    /// Adjacency between orthogonal neighbours that are both road stones of `color`.
    pub fn to_graph(&self, color: Color) -> RoadGraph {
        RoadGraph {
            neighbours: AbstractBoard::new_from_fn(|square| {
                if !self.owns_road_cell(color, square) {
                    return ArrayVec::new();
                }
                square
                    .neighbours()
                    .filter(|&neighbour| self.owns_road_cell(color, neighbour))
                    .collect()
            }),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", row)?;
            for col in 0..BOARD_SIZE {
                let stack = &self.cells[Square::new(row as u8, col as u8)];
                if stack.is_empty() {
                    write!(f, "[{:^8}]", ".")?;
                } else {
                    let stones: String = stack.iter().map(|stone| stone.to_string()).collect();
                    write!(f, "[{:>8}]", stones)?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{:^10}", col)?;
        }
        writeln!(f)
    }
}

/// Road adjacency for one color, built fresh from the board whenever it is needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadGraph {
    neighbours: AbstractBoard<ArrayVec<Square, 4>>,
}

impl RoadGraph {
    pub fn neighbours(&self, square: Square) -> &[Square] {
        &self.neighbours[square]
    }

    /// Sum of the out-degree of every square.
    pub fn total_degree(&self) -> usize {
        self.neighbours.iter().map(ArrayVec::len).sum()
    }

    /// Breadth-first search from every square in `starts`,
    /// looking for any square satisfying `is_end`.
    pub fn has_path<I, F>(&self, starts: I, is_end: F) -> bool
    where
        I: IntoIterator<Item = Square>,
        F: Fn(Square) -> bool,
    {
        let mut visited: AbstractBoard<bool> = Default::default();
        let mut frontier: VecDeque<Square> = VecDeque::new();
        for start in starts {
            visited[start] = true;
            frontier.push_back(start);
        }
        while let Some(square) = frontier.pop_front() {
            for &neighbour in self.neighbours(square) {
                if visited[neighbour] {
                    continue;
                }
                if is_end(neighbour) {
                    return true;
                }
                visited[neighbour] = true;
                frontier.push_back(neighbour);
            }
        }
        false
    }

    /// True if the graph connects the left and right edges, or the bottom and top edges.
    pub fn has_road(&self) -> bool {
        let last = BOARD_SIZE as u8 - 1;
        let edge = |f: fn(u8) -> Square| (0..BOARD_SIZE as u8).map(f);
        self.has_path(edge(|row| Square::new(row, 0)), |square| square.col == last)
            || self.has_path(edge(|col| Square::new(0, col)), |square| square.row == last)
    }
}

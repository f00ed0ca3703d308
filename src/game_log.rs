use std::io;
use std::io::Write;

use board_game_traits::GameResult;

pub fn result_string(result: Option<GameResult>) -> &'static str {
    match result {
        Some(GameResult::WhiteWin) => "Player 1 wins",
        Some(GameResult::BlackWin) => "Player 2 wins",
        Some(GameResult::Draw) => "Draw",
        None => "Ongoing",
    }
}

/// Write a finished game's moves, one per line prefixed by the mover's number,
/// followed by the result.
pub fn write_result_log<W: Write>(
    f: &mut W,
    history: &[String],
    result: Option<GameResult>,
) -> Result<(), io::Error> {
    for (i, mv) in history.iter().enumerate() {
        writeln!(f, "{} {}", i % 2 + 1, mv)?;
    }
    writeln!(f, "Result: {}", result_string(result))?;
    Ok(())
}

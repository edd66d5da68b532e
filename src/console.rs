//! Line-oriented text console for playing a game from a terminal.
//!
//! Each input line is one command:
//!
//! | input       | effect                                   |
//! |-------------|------------------------------------------|
//! | `e2e4`      | play a move given as origin and target   |
//! | `undo`      | take back the last move                  |
//! | `moves`     | list the legal moves                     |
//! | `board`     | print the board                          |
//! | `fen`       | print the position as FEN                |
//! | `perft <n>` | count leaf nodes to depth `n`            |
//! | `quit`      | leave the loop                           |

use std::io::{self, BufRead, Write};

use crate::board::{Color, GameState, GameStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(String),
    Undo,
    Moves,
    Board,
    Fen,
    Perft(usize),
    Quit,
    Unknown(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = parts.first()?;

    let cmd = match *first {
        "undo" | "u" => Command::Undo,
        "moves" => Command::Moves,
        "board" => Command::Board,
        "fen" => Command::Fen,
        "perft" => {
            let depth = parts.get(1).and_then(|v| v.parse::<usize>().ok()).unwrap_or(1);
            Command::Perft(depth)
        }
        "quit" | "exit" | "e" => Command::Quit,
        mv if parts.len() == 1 && looks_like_move(mv) => Command::Move(mv.to_string()),
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

fn looks_like_move(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 4
        && b[0].is_ascii_lowercase()
        && b[1].is_ascii_digit()
        && b[2].is_ascii_lowercase()
        && b[3].is_ascii_digit()
}

/// One line describing whose turn it is and whether the game is over.
pub fn describe_status(side: Color, status: GameStatus) -> String {
    match status {
        GameStatus::NotInCheck => format!("{side} to move"),
        GameStatus::SingleCheck => format!("{side} to move, in check"),
        GameStatus::DoubleCheck => format!("{side} to move, in double check"),
        GameStatus::Checkmate => format!("checkmate, {} wins", side.opponent()),
        GameStatus::Stalemate => "stalemate".to_string(),
    }
}

fn print_position<W: Write>(game: &mut GameState, out: &mut W) -> io::Result<()> {
    let status = game.status();
    write!(out, "{}", game.board())?;
    writeln!(out, "{}", describe_status(game.side_to_move(), status))
}

/// Run the command loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<()> {
    let mut game = GameState::new();
    print_position(&mut game, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd {
            Command::Move(notation) => match game.parse_move(&notation) {
                Ok(mv) => {
                    game.make_move(mv);
                    print_position(&mut game, &mut out)?;
                }
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Undo => {
                if game.last_move().is_none() {
                    writeln!(out, "nothing to undo")?;
                } else {
                    game.undo_move();
                    print_position(&mut game, &mut out)?;
                }
            }
            Command::Moves => {
                let mut moves: Vec<String> =
                    game.get_valid_moves().iter().map(ToString::to_string).collect();
                moves.sort();
                writeln!(out, "{}", moves.join(" "))?;
            }
            Command::Board => print_position(&mut game, &mut out)?,
            Command::Fen => writeln!(out, "{}", game.to_fen())?,
            Command::Perft(depth) => {
                let nodes = game.perft(depth);
                writeln!(out, "perft {depth}: {nodes}")?;
            }
            Command::Quit => break,
            Command::Unknown(text) => writeln!(out, "unknown command: {text}")?,
        }
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("e2e4"), Some(Command::Move("e2e4".to_string())));
        assert_eq!(parse_command("undo"), Some(Command::Undo));
        assert_eq!(parse_command("u"), Some(Command::Undo));
        assert_eq!(parse_command("perft 3"), Some(Command::Perft(3)));
        assert_eq!(parse_command("perft"), Some(Command::Perft(1)));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(
            parse_command("castle now"),
            Some(Command::Unknown("castle now".to_string()))
        );
    }

    #[test]
    fn test_initial_board_is_printed() {
        let out = run_script("");
        assert!(out.starts_with("8 r n b q k b n r\n"));
        assert!(out.contains("  a b c d e f g h\n"));
        assert!(out.ends_with("White to move\n"));
    }

    #[test]
    fn test_move_then_fen() {
        let out = run_script("e2e4\nfen\nquit\n");
        assert!(out.contains("Black to move"));
        assert!(out.contains("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - e3 0 1"));
    }

    #[test]
    fn test_illegal_move_reports_error() {
        let out = run_script("e2e5\n");
        assert!(out.contains("error:"));
        assert!(!out.contains("Black to move"));
    }

    #[test]
    fn test_undo_with_empty_history() {
        let out = run_script("undo\n");
        assert!(out.contains("nothing to undo"));
    }

    #[test]
    fn test_fools_mate_is_reported() {
        let out = run_script("f2f3\ne7e5\ng2g4\nd8h4\n");
        assert!(out.ends_with("checkmate, Black wins\n"));
    }

    #[test]
    fn test_perft_and_moves() {
        let out = run_script("perft 2\nmoves\n");
        assert!(out.contains("perft 2: 400"));
        assert!(out.contains("a2a3 a2a4 b1a3 b1c3"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = run_script("quit\nfen\n");
        assert!(!out.contains(" w - - 0 1"));
    }
}

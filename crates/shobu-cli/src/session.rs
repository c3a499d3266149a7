//! The prompt loop.
//!
//! Humans type the passive move as `quadrant,start,end` and pick the
//! aggressive move from a numbered menu. `undo` takes back the last human
//! turn (and any computer replies after it); `quit` abandons the game.

use crate::player::Player;
use shobu_core::Turn;
use shobu_engine::{Game, GameResult};
use std::io::{self, BufRead, Write};

/// What a player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(Turn),
    Undo,
    Quit,
}

/// A game plus the players seated at it.
pub struct Session {
    game: Game,
    players: [Player; 2],
    show_board: bool,
}

impl Session {
    pub fn new(game: Game, black: Player, white: Player, show_board: bool) -> Self {
        Session {
            game,
            players: [black, white],
            show_board,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs until the game ends, a player quits, or input runs out.
    ///
    /// Returns the result if the game was finished.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> anyhow::Result<Option<GameResult>> {
        tracing::info!(
            black = self.players[0].name(),
            white = self.players[1].name(),
            "starting game"
        );

        while !self.game.is_game_over() {
            let color = self.game.side_to_move();
            if self.show_board {
                writeln!(output, "{}", self.game.board())?;
            }

            let command = match &mut self.players[color.index()] {
                Player::Human => read_turn(&self.game, input, output)?,
                Player::Bot(strategy) => match strategy.select_turn(self.game.board(), color) {
                    Some(turn) => {
                        tracing::debug!(strategy = strategy.name(), %turn, "computer turn");
                        writeln!(output, "{color} plays {turn}")?;
                        Command::Play(turn)
                    }
                    None => {
                        tracing::warn!(%color, "strategy found no turn");
                        Command::Quit
                    }
                },
            };

            match command {
                Command::Play(turn) => self.game.play(turn)?,
                Command::Undo => self.undo(output)?,
                Command::Quit => {
                    writeln!(output, "Game abandoned after {} turns", self.game.turn_count())?;
                    return Ok(None);
                }
            }
        }

        if self.show_board {
            writeln!(output, "{}", self.game.board())?;
        }
        let result = self.game.result();
        if let Some(result) = result {
            writeln!(output, "{result}")?;
        }
        Ok(result)
    }

    fn undo<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        match self.game.undo() {
            Ok(turn) => writeln!(output, "Took back {turn}")?,
            Err(err) => {
                writeln!(output, "{err}")?;
                return Ok(());
            }
        }
        // Keep going until a human is to move again.
        while !self.players[self.game.side_to_move().index()].is_human() {
            match self.game.undo() {
                Ok(turn) => writeln!(output, "Took back {turn}")?,
                Err(_) => break,
            }
        }
        Ok(())
    }
}

/// Prompts the side to move for a full turn.
fn read_turn<R: BufRead, W: Write>(
    game: &Game,
    input: &mut R,
    output: &mut W,
) -> io::Result<Command> {
    let color = game.side_to_move();
    loop {
        let Some(line) = prompt(input, output, &format!("{color} passive move: "))? else {
            return Ok(Command::Quit);
        };
        match line.as_str() {
            "" => continue,
            "quit" => return Ok(Command::Quit),
            "undo" => return Ok(Command::Undo),
            _ => {}
        }

        let passive = match game.validate_passive(&line) {
            Ok(passive) => passive,
            Err(err) => {
                writeln!(output, "Illegal passive move: {err}")?;
                continue;
            }
        };

        let options = game.aggressive_options(passive);
        writeln!(output, "Aggressive moves after {passive}:")?;
        for (i, mv) in options.iter().enumerate() {
            writeln!(output, "  {}) {}", i + 1, mv)?;
        }

        loop {
            let text = format!("Choose 1-{} or 'back': ", options.len());
            let Some(choice) = prompt(input, output, &text)? else {
                return Ok(Command::Quit);
            };
            match choice.as_str() {
                "back" => break,
                "quit" => return Ok(Command::Quit),
                _ => {}
            }
            let picked = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i));
            match picked {
                Some(&aggressive) => return Ok(Command::Play(Turn::new(passive, aggressive))),
                None => writeln!(output, "Enter a number from 1 to {}", options.len())?,
            }
        }
    }
}

/// Writes `text` and reads one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerKind;
    use shobu_core::{Color, Quadrant};
    use shobu_engine::{Board, WinReason};
    use std::io::Cursor;

    fn humans(game: Game) -> Session {
        Session::new(game, Player::Human, Player::Human, false)
    }

    fn run(session: &mut Session, script: &str) -> (Option<GameResult>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = session.run(&mut input, &mut output).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn human_turn_from_menu() {
        let mut session = humans(Game::new());
        let (result, output) = run(&mut session, "botLeft,D4,C4\n5\nquit\n");

        assert_eq!(result, None);
        assert!(output.contains("  5) topRight,D1,C1"));
        assert_eq!(session.game().turn_count(), 1);
        assert_eq!(
            session.game().history()[0].turn.to_string(),
            "botLeft,D4,C4 topRight,D1,C1"
        );
    }

    #[test]
    fn bad_input_reprompts() {
        let mut session = humans(Game::new());
        let (result, output) = run(&mut session, "topLeft,A1,B1\nbotLeft,D4,C4\n9\nback\nquit\n");

        assert_eq!(result, None);
        assert!(output.contains("Illegal passive move"));
        assert!(output.contains("Enter a number from 1 to 8"));
        assert_eq!(session.game().turn_count(), 0);
    }

    #[test]
    fn end_of_input_abandons() {
        let mut session = humans(Game::new());
        let (result, output) = run(&mut session, "");
        assert_eq!(result, None);
        assert!(output.contains("Game abandoned after 0 turns"));
    }

    #[test]
    fn winning_turn_ends_the_loop() {
        let board = Board::from_layout(
            "XXXX/----/----/OOOO -X--/-O--/----/O-OO XXXX/----/----/OOOO XXXX/----/----/OOOO",
        )
        .unwrap();
        let mut session = humans(Game::from_board(board, Color::Black));
        let (result, output) = run(&mut session, "botLeft,D2,C2\n5\n");

        assert_eq!(
            result,
            Some(GameResult {
                winner: Color::Black,
                reason: WinReason::Elimination(Quadrant::TopRight),
            })
        );
        assert!(output.contains("Black wins by clearing topRight of White stones"));
    }

    #[test]
    fn undo_skips_computer_replies() {
        let white = Player::new(PlayerKind::First, Color::White, None);
        let mut session = Session::new(Game::new(), Player::Human, white, false);
        let (result, output) = run(&mut session, "botLeft,D4,C4\n5\nundo\nquit\n");

        assert_eq!(result, None);
        assert!(output.contains("White plays "));
        assert_eq!(output.matches("Took back").count(), 2);
        assert_eq!(session.game().turn_count(), 0);
        assert_eq!(*session.game().board(), Board::new());
    }

    #[test]
    fn undo_with_empty_history() {
        let mut session = humans(Game::new());
        let (_, output) = run(&mut session, "undo\nquit\n");
        assert!(output.contains("no turn to take back"));
    }
}

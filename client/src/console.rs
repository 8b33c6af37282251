use std::io::{self, BufRead, Write};

use common::games::tictactoe::{
    BOARD_SIZE, Board, Cell, GameMode, GameOutcome, Position, ScoreTally, TicTacToeSession,
};
use common::log;

const HELP: &str = "\
Commands:
  <row> <col>   place a mark, rows and columns count from 1 (e.g. '2 3' or '2,3')
  restart       clear the board, keep the score
  new           clear the board and reset the score
  mode cpu|2p   play against the computer or another person (starts a new game)
  help          show this text
  quit          leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Place(Position),
    Restart,
    NewGame,
    Mode(GameMode),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let line = line.trim().to_ascii_lowercase();

    match line.as_str() {
        "restart" | "r" => return Ok(ConsoleCommand::Restart),
        "new" | "n" => return Ok(ConsoleCommand::NewGame),
        "help" | "h" | "?" => return Ok(ConsoleCommand::Help),
        "quit" | "q" | "exit" => return Ok(ConsoleCommand::Quit),
        _ => {}
    }

    if let Some(mode) = line.strip_prefix("mode") {
        return match mode.trim() {
            "cpu" => Ok(ConsoleCommand::Mode(GameMode::VsComputer)),
            "2p" => Ok(ConsoleCommand::Mode(GameMode::TwoPlayers)),
            other => Err(format!("Unknown mode '{}', use 'cpu' or '2p'", other)),
        };
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    if let [row, col] = parts[..] {
        let row = parse_coordinate(row)?;
        let col = parse_coordinate(col)?;
        return Ok(ConsoleCommand::Place(Position::new(row, col)));
    }

    Err(format!("Unknown command '{}', type 'help' for the list", line))
}

fn parse_coordinate(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| format!("'{}' is not a row or column number", value))
}

pub fn render_board(board: &Board) -> String {
    let mut lines = Vec::with_capacity(BOARD_SIZE * 2);
    let header: Vec<String> = (1..=BOARD_SIZE).map(|col| format!(" {} ", col)).collect();
    lines.push(format!("  {}", header.join(" ")));

    for (row, cells) in board.rows().iter().enumerate() {
        let marks: Vec<String> = cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => "   ".to_string(),
                Cell::Marked(player) => format!(" {} ", player),
            })
            .collect();
        lines.push(format!("{} {}", row + 1, marks.join("|")));
        if row + 1 < BOARD_SIZE {
            lines.push(format!("  {}", vec!["---"; BOARD_SIZE].join("+")));
        }
    }

    lines.join("\n")
}

pub fn score_line(scores: &ScoreTally) -> String {
    format!(
        "Score  X: {}   O: {}   Ties: {}",
        scores.x_wins, scores.o_wins, scores.ties
    )
}

fn outcome_message(outcome: &GameOutcome) -> Option<String> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::Win(player, _) => Some(format!("Player {} wins!", player)),
        GameOutcome::Draw => Some("It's a Tie!".to_string()),
    }
}

fn report_outcome<W: Write>(
    session: &TicTacToeSession,
    outcome: &GameOutcome,
    output: &mut W,
) -> io::Result<()> {
    if let Some(message) = outcome_message(outcome) {
        writeln!(output, "{}", message)?;
        writeln!(output, "{}", score_line(&session.scores()))?;
    }
    Ok(())
}

fn play_computer_turn<W: Write>(session: &mut TicTacToeSession, output: &mut W) -> io::Result<()> {
    if !session.is_computer_turn() {
        return Ok(());
    }

    let computer = session.settings().computer_player;
    match session.play_computer_turn() {
        Ok((pos, outcome)) => {
            writeln!(output, "Computer ({}) plays {} {}", computer, pos.row + 1, pos.col + 1)?;
            report_outcome(session, &outcome, output)
        }
        Err(e) => {
            log!("Computer turn failed: {}", e);
            writeln!(output, "{}", e)
        }
    }
}

/// Reads commands until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut TicTacToeSession,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{}", HELP)?;
    let mut lines = input.lines();

    loop {
        play_computer_turn(session, output)?;

        writeln!(output, "{}", render_board(session.board()))?;
        if session.outcome().is_terminal() {
            writeln!(output, "Game over. Type 'restart', 'new' or 'quit'.")?;
        } else {
            write!(output, "Player {} > ", session.current_player())?;
        }
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match parse_command(&line?) {
            Ok(ConsoleCommand::Place(pos)) => match session.place_mark(pos) {
                Ok(outcome) => report_outcome(session, &outcome, output)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            Ok(ConsoleCommand::Restart) => session.restart(),
            Ok(ConsoleCommand::NewGame) => {
                session.new_game();
                writeln!(output, "{}", score_line(&session.scores()))?;
            }
            Ok(ConsoleCommand::Mode(mode)) => {
                session.change_mode(mode);
                writeln!(output, "Mode changed to {:?}, new game started", mode)?;
            }
            Ok(ConsoleCommand::Help) => writeln!(output, "{}", HELP)?,
            Ok(ConsoleCommand::Quit) => break,
            Err(message) => writeln!(output, "{}", message)?,
        }
    }

    writeln!(output, "{}", score_line(&session.scores()))?;
    Ok(())
}

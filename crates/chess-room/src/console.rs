//! Line-oriented console commands.

use crate::{GameStore, RoomError, RoomService};
use chess_core::{Color, Move, Position, PositionError};
use chess_engine::GameStatus;
use thiserror::Error;

/// Errors from reading a console line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// One console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(String),
    Remove(String),
    Join(String),
    Leave(String, Color),
    Start(String),
    Move(String, Move),
    Hints(String, Position),
    Score(String),
    End(String),
    Show(String),
    Rooms,
    Help,
    Quit,
    /// Blank line.
    Empty,
}

pub const HELP: &str = "\
commands:
  create <room>            create a room
  remove <room>            remove a room that is not being played
  join <room>              take the next free seat
  leave <room> <color>     free a seat (white or black)
  start <room>             start the game
  move <room> <from> <to>  play a move, e.g. 'move lobby e2 e4'
  hints <room> <from>      list where a piece may move
  score <room>             show material score
  end <room>               end the game and show the result
  show <room>              print the board
  rooms                    list rooms
  quit                     exit";

impl Command {
    /// Parses one input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Ok(Command::Empty);
        };

        let room = |usage| {
            args.first()
                .map(|r| r.to_string())
                .ok_or(CommandError::Usage(usage))
        };

        match cmd.to_ascii_lowercase().as_str() {
            "create" => Ok(Command::Create(room("create <room>")?)),
            "remove" => Ok(Command::Remove(room("remove <room>")?)),
            "join" => Ok(Command::Join(room("join <room>")?)),
            "leave" => {
                const USAGE: &str = "leave <room> <white|black>";
                let color = match args.get(1).map(|c| c.to_ascii_lowercase()).as_deref() {
                    Some("white") => Color::White,
                    Some("black") => Color::Black,
                    _ => return Err(CommandError::Usage(USAGE)),
                };
                Ok(Command::Leave(room(USAGE)?, color))
            }
            "start" => Ok(Command::Start(room("start <room>")?)),
            "move" => {
                const USAGE: &str = "move <room> <from> <to>";
                let room = room(USAGE)?;
                let rest = args[1..].join(" ");
                if rest.is_empty() {
                    return Err(CommandError::Usage(USAGE));
                }
                Ok(Command::Move(room, Move::parse(&rest)?))
            }
            "hints" => {
                const USAGE: &str = "hints <room> <from>";
                let from = args.get(1).ok_or(CommandError::Usage(USAGE))?;
                Ok(Command::Hints(room(USAGE)?, Position::parse(from)?))
            }
            "score" => Ok(Command::Score(room("score <room>")?)),
            "end" => Ok(Command::End(room("end <room>")?)),
            "show" => Ok(Command::Show(room("show <room>")?)),
            "rooms" => Ok(Command::Rooms),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(cmd.to_string())),
        }
    }
}

/// Runs a command against the service and returns the text to print.
pub fn execute<S: GameStore>(
    service: &mut RoomService<S>,
    command: &Command,
) -> Result<String, RoomError> {
    let out = match command {
        Command::Create(room) => format!("created room {}", service.create_room(room)?),
        Command::Remove(room) => {
            service.remove_room(room)?;
            format!("removed room {}", room)
        }
        Command::Join(room) => {
            let color = service.join(room)?;
            match service.opponent(room, color)? {
                Some(opponent) => format!("you play {}, {} is seated", color, opponent),
                None => format!("you play {}, waiting for {}", color, color.opposite()),
            }
        }
        Command::Leave(room, color) => {
            service.leave(room, *color)?;
            format!("{} seat is free", color)
        }
        Command::Start(room) => {
            service.start(room)?;
            format!("{}\n{} to move", service.board(room)?, service.current_turn(room)?)
        }
        Command::Move(room, mv) => {
            let result = service.move_piece(room, mv.from, mv.to)?;
            let captured = result
                .captured
                .map(|piece| format!("\ncaptured {}", piece))
                .unwrap_or_default();
            format!(
                "{}{}\n{}",
                service.board(room)?,
                captured,
                status_line(result.status, result.turn)
            )
        }
        Command::Hints(room, from) => {
            let targets: Vec<String> = service
                .movable_positions(room, *from)?
                .into_iter()
                .map(|p| p.to_text())
                .collect();
            if targets.is_empty() {
                format!("no moves from {}", from)
            } else {
                targets.join(" ")
            }
        }
        Command::Score(room) => {
            let score = service.score(room)?;
            format!("White {} : Black {}", score.white, score.black)
        }
        Command::End(room) => {
            let result = service.end(room)?;
            let verdict = match result.winner() {
                Some(color) => format!("{} wins", color),
                None => "draw".to_string(),
            };
            format!(
                "White {} : Black {}, {}",
                result.score.white, result.score.black, verdict
            )
        }
        Command::Show(room) => format!(
            "{}\n{}\nplayers {}/2",
            service.board(room)?,
            status_line(service.status(room)?, service.current_turn(room)?),
            service.occupancy(room)?
        ),
        Command::Rooms => {
            let rooms = service.rooms();
            if rooms.is_empty() {
                "no rooms".to_string()
            } else {
                rooms.join("\n")
            }
        }
        Command::Help => HELP.to_string(),
        Command::Quit | Command::Empty => String::new(),
    };
    Ok(out)
}

fn status_line(status: GameStatus, turn: Color) -> String {
    if status.is_over() {
        format!("status {}, game over", status)
    } else {
        format!("status {}, {} to move", status, turn)
    }
}

//! Room service: hosts games by name on top of a [`GameStore`].

use crate::{GameStore, RoomConfig, RoomError, RoomName, Seats};
use chess_core::{Color, Position};
use chess_engine::{
    Board, EndResult, Game, GameError, GameStatus, MoveResult, Score, StartResult,
};
use std::collections::BTreeSet;

/// Hosts games by room name.
///
/// Room names are normalized through [`RoomName::parse`] on every call, so
/// a room can be addressed by the same string it was created with. Each
/// call loads the room's snapshot, runs one game operation, and saves
/// the snapshot back only if the operation succeeded. The service takes
/// `&mut self` for every mutation; share it behind a `Mutex` to serve
/// several clients.
pub struct RoomService<S> {
    store: S,
    seats: Seats,
    config: RoomConfig,
}

impl<S: GameStore> RoomService<S> {
    pub fn new(store: S, config: RoomConfig) -> Self {
        RoomService {
            store,
            seats: Seats::new(),
            config,
        }
    }

    /// Creates a room holding an unstarted game.
    pub fn create_room(&mut self, name: &str) -> Result<RoomName, RoomError> {
        let name = RoomName::parse(name, self.config.max_room_name_length)?;
        if self.store.contains(name.as_str()) {
            return Err(RoomError::RoomAlreadyExists(name.to_string()));
        }
        if self.store.len() >= self.config.max_rooms {
            return Err(RoomError::TooManyRooms(self.config.max_rooms));
        }
        self.store.save(name.as_str(), Game::default().to_snapshot());
        tracing::info!(room = %name, "room created");
        Ok(name)
    }

    /// Deletes a room. Refused while its game is being played.
    pub fn remove_room(&mut self, room: &str) -> Result<(), RoomError> {
        let name = self.name(room)?;
        let game = self.load(room)?;
        if game.is_playing() {
            return Err(RoomError::GameInProgress(name.to_string()));
        }
        self.store.remove(name.as_str());
        self.seats.clear(name.as_str());
        tracing::info!(room = %room, "room removed");
        Ok(())
    }

    /// Names of all rooms, sorted.
    pub fn rooms(&self) -> Vec<String> {
        self.store.rooms()
    }

    /// Seats a player in an existing room and returns their color.
    pub fn join(&mut self, room: &str) -> Result<Color, RoomError> {
        let name = self.existing(room)?;
        let color = self.seats.enter(name.as_str())?;
        tracing::info!(room = %room, color = %color, "player joined");
        Ok(color)
    }

    /// Frees a player's seat.
    pub fn leave(&mut self, room: &str, color: Color) -> Result<(), RoomError> {
        let name = self.existing(room)?;
        self.seats.leave(name.as_str(), color)?;
        tracing::info!(room = %room, color = %color, "player left");
        Ok(())
    }

    /// Number of seated players in `room`.
    pub fn occupancy(&self, room: &str) -> Result<usize, RoomError> {
        let name = self.existing(room)?;
        Ok(self.seats.occupancy(name.as_str()))
    }

    /// The opponent of the player seated as `color`, if one has joined.
    pub fn opponent(&self, room: &str, color: Color) -> Result<Option<Color>, RoomError> {
        let name = self.existing(room)?;
        Ok(self.seats.opponent(name.as_str(), color))
    }

    pub fn start(&mut self, room: &str) -> Result<StartResult, RoomError> {
        let result = self.update(room, Game::start)?;
        tracing::info!(room = %room, pieces = result.pieces.len(), "game started");
        Ok(result)
    }

    pub fn move_piece(
        &mut self,
        room: &str,
        from: Position,
        to: Position,
    ) -> Result<MoveResult, RoomError> {
        match self.update(room, |game| game.move_piece(from, to)) {
            Ok(result) => {
                tracing::debug!(
                    room = %room,
                    from = %from,
                    to = %to,
                    status = %result.status,
                    "move played"
                );
                if result.status == GameStatus::KingDie {
                    tracing::info!(room = %room, "king captured");
                }
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(
                    room = %room,
                    from = %from,
                    to = %to,
                    error = %err,
                    "move rejected"
                );
                Err(err)
            }
        }
    }

    /// Legal destinations of the piece on `from`, for move hints.
    pub fn movable_positions(
        &self,
        room: &str,
        from: Position,
    ) -> Result<BTreeSet<Position>, RoomError> {
        let game = self.load(room)?;
        Ok(game.board().movable_positions(from))
    }

    pub fn score(&self, room: &str) -> Result<Score, RoomError> {
        let score = self.load(room)?.calculate_score()?;
        tracing::debug!(
            room = %room,
            white = score.white,
            black = score.black,
            "score calculated"
        );
        Ok(score)
    }

    pub fn end(&mut self, room: &str) -> Result<EndResult, RoomError> {
        let result = self.update(room, Game::end)?;
        tracing::info!(room = %room, winner = ?result.winner(), "game ended");
        Ok(result)
    }

    pub fn status(&self, room: &str) -> Result<GameStatus, RoomError> {
        Ok(self.load(room)?.status())
    }

    pub fn current_turn(&self, room: &str) -> Result<Color, RoomError> {
        Ok(self.load(room)?.current_turn())
    }

    pub fn board(&self, room: &str) -> Result<Board, RoomError> {
        Ok(self.load(room)?.board().clone())
    }

    fn name(&self, room: &str) -> Result<RoomName, RoomError> {
        RoomName::parse(room, self.config.max_room_name_length)
    }

    fn existing(&self, room: &str) -> Result<RoomName, RoomError> {
        let name = self.name(room)?;
        if self.store.contains(name.as_str()) {
            Ok(name)
        } else {
            Err(RoomError::RoomNotFound(name.to_string()))
        }
    }

    fn load(&self, room: &str) -> Result<Game, RoomError> {
        let name = self.name(room)?;
        let snapshot = self
            .store
            .load(name.as_str())
            .ok_or_else(|| RoomError::RoomNotFound(name.to_string()))?;
        Ok(Game::from_snapshot(&snapshot)?)
    }

    fn update<T>(
        &mut self,
        room: &str,
        op: impl FnOnce(&mut Game) -> Result<T, GameError>,
    ) -> Result<T, RoomError> {
        let name = self.name(room)?;
        let mut game = self.load(name.as_str())?;
        let value = op(&mut game)?;
        self.store.save(name.as_str(), game.to_snapshot());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use chess_engine::MoveError;

    fn pos(s: &str) -> Position {
        Position::parse(s).unwrap()
    }

    fn service() -> RoomService<MemoryStore> {
        RoomService::new(MemoryStore::new(), RoomConfig::default())
    }

    #[test]
    fn create_and_list_rooms() {
        let mut service = service();
        service.create_room("beta").unwrap();
        service.create_room(" alpha ").unwrap();
        assert_eq!(service.rooms(), vec!["alpha".to_string(), "beta".to_string()]);
        assert_eq!(service.status("alpha"), Ok(GameStatus::Ready));
        assert_eq!(service.current_turn("alpha"), Ok(Color::White));
    }

    #[test]
    fn room_is_addressed_by_its_creation_string() {
        let mut service = service();
        service.create_room(" alpha ").unwrap();

        service.start(" alpha ").unwrap();
        assert_eq!(service.status("alpha"), Ok(GameStatus::Playing));
        assert_eq!(service.join(" alpha "), Ok(Color::White));
        assert_eq!(service.occupancy("alpha"), Ok(1));
        service.leave(" alpha ", Color::White).unwrap();

        service.move_piece(" alpha ", pos("e2"), pos("e4")).unwrap();
        assert_eq!(service.current_turn(" alpha "), Ok(Color::Black));
        service.end(" alpha ").unwrap();
        service.remove_room(" alpha ").unwrap();
        assert!(service.rooms().is_empty());
        assert_eq!(
            service.status(" alpha "),
            Err(RoomError::RoomNotFound("alpha".to_string()))
        );
    }

    #[test]
    fn duplicate_room_is_rejected() {
        let mut service = service();
        service.create_room("lobby").unwrap();
        assert_eq!(
            service.create_room("lobby"),
            Err(RoomError::RoomAlreadyExists("lobby".to_string()))
        );
    }

    #[test]
    fn room_limit_is_enforced() {
        let config = RoomConfig {
            max_rooms: 1,
            ..RoomConfig::default()
        };
        let mut service = RoomService::new(MemoryStore::new(), config);
        service.create_room("one").unwrap();
        assert_eq!(service.create_room("two"), Err(RoomError::TooManyRooms(1)));
    }

    #[test]
    fn unknown_room() {
        let mut service = service();
        assert_eq!(
            service.start("nowhere"),
            Err(RoomError::RoomNotFound("nowhere".to_string()))
        );
        assert!(service.join("nowhere").is_err());
    }

    #[test]
    fn moves_persist_between_calls() {
        let mut service = service();
        service.create_room("r").unwrap();
        let start = service.start("r").unwrap();
        assert_eq!(start.pieces.len(), 32);

        let result = service.move_piece("r", pos("e2"), pos("e4")).unwrap();
        assert_eq!(result.turn, Color::Black);
        assert_eq!(service.current_turn("r"), Ok(Color::Black));
        assert!(service.board("r").unwrap().piece_at(pos("e4")).is_some());
    }

    #[test]
    fn rejected_move_is_not_saved() {
        let mut service = service();
        service.create_room("r").unwrap();
        service.start("r").unwrap();
        let before = service.board("r").unwrap();

        let err = service.move_piece("r", pos("a1"), pos("a3")).unwrap_err();
        assert!(matches!(
            err,
            RoomError::Game(GameError::Move(MoveError::PathObstructed(_)))
        ));
        assert_eq!(service.board("r").unwrap(), before);
    }

    #[test]
    fn hints_and_score() {
        let mut service = service();
        service.create_room("r").unwrap();
        assert!(service.score("r").is_err());
        service.start("r").unwrap();

        let hints = service.movable_positions("r", pos("g1")).unwrap();
        assert_eq!(hints.into_iter().collect::<Vec<_>>(), vec![pos("f3"), pos("h3")]);

        let score = service.score("r").unwrap();
        assert_eq!(score.white, score.black);
    }

    #[test]
    fn cannot_remove_while_playing() {
        let mut service = service();
        service.create_room("r").unwrap();
        service.start("r").unwrap();
        assert_eq!(
            service.remove_room("r"),
            Err(RoomError::GameInProgress("r".to_string()))
        );

        let end = service.end("r").unwrap();
        assert!(end.is_draw());
        assert_eq!(service.status("r"), Ok(GameStatus::End));
        service.remove_room("r").unwrap();
        assert!(service.rooms().is_empty());
    }

    #[test]
    fn join_assigns_colors() {
        let mut service = service();
        service.create_room("r").unwrap();
        assert_eq!(service.join("r"), Ok(Color::White));
        assert_eq!(service.join("r"), Ok(Color::Black));
        assert_eq!(service.join("r"), Err(RoomError::RoomFull("r".to_string())));
        assert_eq!(service.opponent("r", Color::White), Ok(Some(Color::Black)));
        service.leave("r", Color::Black).unwrap();
        assert_eq!(service.opponent("r", Color::White), Ok(None));
        assert_eq!(service.occupancy("r"), Ok(1));
        assert_eq!(service.join("r"), Ok(Color::Black));
    }
}

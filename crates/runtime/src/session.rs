use gemgrid_core::{
    Direction, EnginePhase, Event, GameConfig, GridModel, HintValidator, MoveOutcome,
    MovementEngine, SessionState,
};
use gemgrid_content::Level;

use crate::error::SessionError;

/// One level attempt in flight: the engine over a fresh grid model plus the
/// validator tracking the attempt path.
struct LevelAttempt {
    level: Level,
    engine: MovementEngine,
    validator: HintValidator,
}

impl LevelAttempt {
    fn new(level: Level) -> Self {
        let engine = MovementEngine::new(GridModel::new(level.grid.clone(), level.setup))
            .with_final_level(level.final_level);
        let validator = HintValidator::new(level.solution.clone());
        Self {
            level,
            engine,
            validator,
        }
    }
}

/// Synchronous, single-threaded driver for one play session.
///
/// Owns the session-wide counters (lives, win streak, hint budget) and the
/// current attempt. All access is serialized through `&mut self`; the core
/// never sees more than one call at a time.
pub struct GameSession {
    session: SessionState,
    attempt: Option<LevelAttempt>,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: SessionState::new(config.starting_lives, config.hint_budget),
            attempt: None,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn phase(&self) -> Option<EnginePhase> {
        self.attempt.as_ref().map(|attempt| attempt.engine.phase())
    }

    pub fn model(&self) -> Option<&GridModel> {
        self.attempt.as_ref().map(|attempt| attempt.engine.model())
    }

    pub fn validator(&self) -> Option<&HintValidator> {
        self.attempt.as_ref().map(|attempt| &attempt.validator)
    }

    /// Begins an attempt on a new level. The grid model is created fresh
    /// and the continue flag resets; the hint budget carries over.
    pub fn start_level(&mut self, level: Level) {
        tracing::info!(
            size = level.grid.size(),
            moves = level.setup.moves,
            "starting level attempt"
        );
        self.session.reset_continue();
        self.attempt = Some(LevelAttempt::new(level));
    }

    /// Restarts the current level from scratch. Attempt and purchased
    /// paths reset; the hint budget is already spent and stays spent.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let attempt = self.attempt.take().ok_or(SessionError::NoActiveAttempt)?;
        tracing::info!("restarting level attempt");
        self.attempt = Some(LevelAttempt::new(attempt.level));
        Ok(())
    }

    /// Consumes a life to retry a lost attempt, marking the session as
    /// having continued (which halves the final score).
    pub fn use_continue(&mut self) -> Result<(), SessionError> {
        let attempt = self.attempt.as_ref().ok_or(SessionError::NoActiveAttempt)?;
        if attempt.engine.phase() != EnginePhase::GameOver {
            return Err(SessionError::AttemptNotLost);
        }
        if !self.session.consume_life() {
            return Err(SessionError::NoLivesRemaining);
        }

        tracing::info!(
            lives_remaining = self.session.lives_remaining,
            "continuing lost attempt"
        );
        if let Some(attempt) = self.attempt.take() {
            self.attempt = Some(LevelAttempt::new(attempt.level));
        }
        Ok(())
    }

    /// Forwards one directional intent to the engine, records accepted
    /// moves in the validator, and updates the session counters on
    /// terminal transitions.
    pub fn advance(&mut self, direction: Direction) -> Result<MoveOutcome, SessionError> {
        let attempt = self.attempt.as_mut().ok_or(SessionError::NoActiveAttempt)?;

        let outcome = attempt.engine.handle_move(&self.session, direction);
        if outcome.is_accepted() {
            attempt.validator.append_move(direction);
        }
        attempt.validator.refresh_eligibility(&self.session);

        for event in outcome.events() {
            tracing::debug!(?event, "engine event");
            match event {
                Event::Solved(report) => {
                    self.session.record_win();
                    tracing::info!(
                        moves_remaining = report.moves_remaining,
                        win_streak = self.session.win_streak,
                        "level solved"
                    );
                }
                Event::GameOver => {
                    self.session.record_loss();
                    tracing::info!("attempt lost");
                }
                _ => {}
            }
        }

        Ok(outcome)
    }

    /// Requests the next hint, reporting the outcome as an event.
    pub fn request_hint(&mut self) -> Result<Event, SessionError> {
        let attempt = self.attempt.as_mut().ok_or(SessionError::NoActiveAttempt)?;

        let event = match attempt.validator.request_hint(&mut self.session) {
            Ok(direction) => Event::HintShown { direction },
            Err(reason) => Event::HintUnavailable { reason },
        };
        tracing::debug!(?event, "hint event");
        Ok(event)
    }

    /// Releases the one-at-a-time hint display lock.
    pub fn acknowledge_hint(&mut self) -> Result<(), SessionError> {
        let attempt = self.attempt.as_mut().ok_or(SessionError::NoActiveAttempt)?;
        attempt.validator.acknowledge_hint();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level() -> Level {
        gemgrid_content::LevelLoader::from_str(
            r#"(
                rows: ["S.E", "...", "..."],
                overlays: [(0, 1, Gem)],
                moves: 10,
                health: 3,
                solution: "right,right",
            )"#,
        )
        .expect("test level")
    }

    #[test]
    fn advance_requires_an_attempt() {
        let mut session = GameSession::new(&GameConfig::default());
        assert_eq!(
            session.advance(Direction::Right),
            Err(SessionError::NoActiveAttempt)
        );
    }

    #[test]
    fn continue_requires_a_lost_attempt() {
        let mut session = GameSession::new(&GameConfig::default());
        session.start_level(level());
        assert_eq!(session.use_continue(), Err(SessionError::AttemptNotLost));
    }

    #[test]
    fn accepted_moves_feed_the_validator() {
        let mut session = GameSession::new(&GameConfig::default());
        session.start_level(level());

        session.advance(Direction::Right).unwrap();
        // Rejected: off the top of the board.
        session.advance(Direction::Up).unwrap();

        let validator = session.validator().unwrap();
        assert_eq!(validator.attempt(), &[Direction::Right]);
        assert!(validator.is_matching_solution());
    }

    #[test]
    fn restart_resets_attempt_but_not_budget() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config);
        session.start_level(level());

        session.request_hint().unwrap();
        session.acknowledge_hint().unwrap();
        session.advance(Direction::Down).unwrap();
        session.restart().unwrap();

        let validator = session.validator().unwrap();
        assert!(validator.attempt().is_empty());
        assert!(validator.purchased().is_empty());
        assert_eq!(session.session().hint_budget, config.hint_budget - 1);
    }
}

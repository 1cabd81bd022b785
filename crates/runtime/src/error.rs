/// Errors surfaced while driving a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No level attempt has been started.
    #[error("no active level attempt")]
    NoActiveAttempt,

    /// Continues are only valid from a lost attempt.
    #[error("attempt is not in the game-over state")]
    AttemptNotLost,

    /// A continue was requested with zero lives left.
    #[error("no lives remaining")]
    NoLivesRemaining,
}

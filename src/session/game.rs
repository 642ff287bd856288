//! The game session: board, pending selection, scheduler and outbox.

use std::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::outcome::{IgnoreReason, Phase, RevealOutcome};
use crate::board::{Board, Card, CardState};
use crate::core::{BoardSize, Coord, GameConfig, GameError, GameRng};
use crate::events::{AnimationPhase, FlipAnimation, Notification};
use crate::schedule::{AnimationStep, Scheduler, Task};

/// Cards revealed and waiting to be compared. Never more than two.
pub type PendingSelection = SmallVec<[Coord; 2]>;

/// A single-player memory game.
///
/// Owns the board, the pending selection and the deferred tasks. All
/// changes go through `&mut self`; the UI drives it with [`reveal`] and
/// with clock advances, and reads back [`drain_notifications`].
///
/// [`reveal`]: GameSession::reveal
/// [`drain_notifications`]: GameSession::drain_notifications
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    phase: Phase,
    board: Option<Board>,
    pending: PendingSelection,
    scheduler: Scheduler,
    notifications: Vec<Notification>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::from_valid_config(GameConfig::default())
    }
}

impl GameSession {
    /// Create a session in the setup phase.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GameConfig) -> Self {
        Self {
            config,
            phase: Phase::Setup,
            board: None,
            pending: PendingSelection::new(),
            scheduler: Scheduler::new(),
            notifications: Vec::new(),
        }
    }

    // === Setup ===

    /// Start a game on a freshly generated board.
    ///
    /// Fails before touching the session if the image pool cannot fill the
    /// board. Any game already in progress is discarded.
    pub fn start(&mut self, size: BoardSize, rng: &mut GameRng) -> Result<(), GameError> {
        self.config.check_pool(size)?;
        let board = Board::generate(size, self.config.image_pool_size, rng)?;
        self.start_with_board(board);
        Ok(())
    }

    /// Start a game on a prebuilt board.
    pub fn start_with_board(&mut self, board: Board) {
        self.reset();

        let size = board.size();
        self.board = Some(board);
        self.phase = Phase::Playing;
        self.notifications.push(Notification::BoardReady {
            size,
            style: size.card_style(),
        });
        info!(%size, "game started");
    }

    /// Discard the board, the selection and every scheduled task.
    ///
    /// Emits [`Notification::Reset`] if a game was in progress.
    pub fn reset(&mut self) {
        let had_game = self.board.take().is_some();
        self.pending.clear();
        self.scheduler.clear();
        self.phase = Phase::Setup;

        if had_game {
            self.notifications.push(Notification::Reset);
            info!("session reset");
        }
    }

    // === Play ===

    /// Turn the card at `coord` face up.
    ///
    /// Ignored when no game is running, when `coord` is off the board, when
    /// the card is not face down, or when two cards are already waiting.
    /// Revealing the second card schedules the pair's resolution.
    pub fn reveal(&mut self, coord: Coord) -> RevealOutcome {
        let outcome = self.try_reveal(coord);
        if let RevealOutcome::Ignored(reason) = outcome {
            trace!(%coord, ?reason, "reveal ignored");
        }
        outcome
    }

    fn try_reveal(&mut self, coord: Coord) -> RevealOutcome {
        if self.phase != Phase::Playing {
            return RevealOutcome::Ignored(IgnoreReason::NotPlaying);
        }
        let Some(board) = self.board.as_mut() else {
            return RevealOutcome::Ignored(IgnoreReason::NotPlaying);
        };
        let Some(card) = board.card(coord) else {
            return RevealOutcome::Ignored(IgnoreReason::OutOfBounds);
        };
        if !card.is_hidden() {
            return RevealOutcome::Ignored(IgnoreReason::NotHidden);
        }
        if self.pending.len() >= 2 {
            return RevealOutcome::Ignored(IgnoreReason::SelectionFull);
        }

        board.set_state(coord, CardState::Revealed);
        self.pending.push(coord);
        self.notifications.push(Notification::CardChanged {
            coord,
            state: CardState::Revealed,
        });
        self.start_flip(coord, FlipAnimation::ShowCard);
        debug!(%coord, pending = self.pending.len(), "card revealed");

        if let [first, second] = self.pending[..] {
            self.scheduler
                .schedule(self.config.resolve_delay, Task::ResolvePair([first, second]));
            RevealOutcome::PairPending {
                resolves_at: self.scheduler.now() + self.config.resolve_delay,
            }
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Check whether every card is matched.
    #[must_use]
    pub fn check_victory(&self) -> bool {
        self.board.as_ref().is_some_and(Board::all_matched)
    }

    // === Time ===

    /// Advance virtual time by `delta`, firing every task that comes due.
    ///
    /// Returns the number of tasks fired.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let target = self.now().saturating_add(delta);
        self.advance_to(target)
    }

    /// Advance virtual time to `time`, firing every task due by then.
    ///
    /// Tasks scheduled while firing run in the same call if they are due.
    pub fn advance_to(&mut self, time: Duration) -> usize {
        let mut fired = 0;
        while let Some(entry) = self.scheduler.pop_due(time) {
            self.fire(entry.task);
            fired += 1;
        }
        self.scheduler.advance_clock(time);
        fired
    }

    /// Fire every scheduled task, however far in the future.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(entry) = self.scheduler.pop_next() {
            self.fire(entry.task);
            fired += 1;
        }
        fired
    }

    fn fire(&mut self, task: Task) {
        debug!(?task, now = ?self.scheduler.now(), "task fired");
        match task {
            Task::ResolvePair(pair) => self.resolve(pair),
            Task::ReturnToSetup => {
                if self.phase == Phase::Won {
                    self.reset();
                }
            }
            Task::Animate {
                coord,
                animation,
                step,
            } => {
                let phase = match step {
                    AnimationStep::SwapFace => AnimationPhase::FaceSwapped,
                    AnimationStep::Finish => AnimationPhase::Finished,
                };
                self.notifications.push(Notification::Animation {
                    coord,
                    animation,
                    phase,
                });
            }
        }
    }

    /// Compare a revealed pair: match both or flip both back.
    fn resolve(&mut self, pair: [Coord; 2]) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let matched = match (board.card(pair[0]), board.card(pair[1])) {
            (Some(a), Some(b)) => a.matches(b),
            _ => return,
        };
        self.pending.clear();

        if matched {
            for coord in pair {
                board.set_state(coord, CardState::Matched);
                self.notifications.push(Notification::CardChanged {
                    coord,
                    state: CardState::Matched,
                });
                self.notifications.push(Notification::CardVanished { coord });
            }
            debug!(first = %pair[0], second = %pair[1], "pair matched");

            if self.check_victory() {
                self.phase = Phase::Won;
                self.notifications.push(Notification::Victory);
                self.scheduler
                    .schedule(self.config.victory_delay, Task::ReturnToSetup);
                info!("all pairs matched");
            }
        } else {
            for coord in pair {
                board.set_state(coord, CardState::Hidden);
                self.notifications.push(Notification::CardChanged {
                    coord,
                    state: CardState::Hidden,
                });
            }
            for coord in pair {
                self.start_flip(coord, FlipAnimation::HideCard);
            }
            debug!(first = %pair[0], second = %pair[1], "pair mismatched");
        }
    }

    fn start_flip(&mut self, coord: Coord, animation: FlipAnimation) {
        self.notifications.push(Notification::Animation {
            coord,
            animation,
            phase: AnimationPhase::Started,
        });
        self.scheduler.schedule(
            self.config.face_swap_at,
            Task::Animate {
                coord,
                animation,
                step: AnimationStep::SwapFace,
            },
        );
        self.scheduler.schedule(
            self.config.flip_duration,
            Task::Animate {
                coord,
                animation,
                step: AnimationStep::Finish,
            },
        );
    }

    // === Queries ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The configuration this session was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board in play, if any.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// The card at `coord`, if a board is in play and `coord` is on it.
    #[must_use]
    pub fn card(&self, coord: Coord) -> Option<&Card> {
        self.board.as_ref()?.card(coord)
    }

    /// Cards revealed and awaiting resolution.
    #[must_use]
    pub fn pending(&self) -> &[Coord] {
        &self.pending
    }

    /// Number of pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.board
            .as_ref()
            .map_or(0, |board| board.matched_count() / 2)
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// When the next scheduled task fires, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Number of scheduled tasks.
    #[must_use]
    pub fn scheduled_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Notifications not yet drained.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Take every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ImageId;

    /// 4×4 board where (0,0)/(0,1) match and (0,2)/(0,3) match.
    fn paired_board() -> Board {
        let images = (0..16).map(|i| ImageId::new(i / 2)).collect();
        Board::from_images(BoardSize::Four, images).unwrap()
    }

    fn playing_session() -> GameSession {
        let mut session = GameSession::default();
        session.start_with_board(paired_board());
        session.drain_notifications();
        session
    }

    #[test]
    fn test_new_session_is_in_setup() {
        let session = GameSession::default();
        assert_eq!(session.phase(), Phase::Setup);
        assert!(session.board().is_none());
        assert!(!session.check_victory());
        assert_eq!(session.matched_pairs(), 0);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig::new().with_image_pool(0);
        assert!(GameSession::new(config).is_err());
    }

    #[test]
    fn test_start_announces_board() {
        let mut session = GameSession::default();
        session.start(BoardSize::Six, &mut GameRng::new(42)).unwrap();

        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.board().unwrap().len(), 36);
        assert_eq!(
            session.drain_notifications(),
            vec![Notification::BoardReady {
                size: BoardSize::Six,
                style: BoardSize::Six.card_style(),
            }]
        );
    }

    #[test]
    fn test_reveal_twice_appends_once() {
        let mut session = playing_session();

        assert_eq!(session.reveal(Coord::new(1, 1)), RevealOutcome::Revealed);
        assert_eq!(
            session.reveal(Coord::new(1, 1)),
            RevealOutcome::Ignored(IgnoreReason::NotHidden)
        );
        assert_eq!(session.pending(), &[Coord::new(1, 1)]);
    }

    #[test]
    fn test_second_reveal_schedules_resolution() {
        let mut session = playing_session();
        session.reveal(Coord::new(0, 0));
        let outcome = session.reveal(Coord::new(0, 1));

        assert_eq!(
            outcome,
            RevealOutcome::PairPending {
                resolves_at: Duration::from_millis(1000)
            }
        );
        assert_eq!(session.pending().len(), 2);
    }

    #[test]
    fn test_third_reveal_rejected() {
        let mut session = playing_session();
        session.reveal(Coord::new(0, 0));
        session.reveal(Coord::new(0, 2));

        assert_eq!(
            session.reveal(Coord::new(3, 3)),
            RevealOutcome::Ignored(IgnoreReason::SelectionFull)
        );
        assert_eq!(session.card(Coord::new(3, 3)).unwrap().state, CardState::Hidden);
        assert_eq!(session.pending().len(), 2);
    }

    #[test]
    fn test_reveal_in_setup_ignored() {
        let mut session = GameSession::default();
        assert_eq!(
            session.reveal(Coord::new(0, 0)),
            RevealOutcome::Ignored(IgnoreReason::NotPlaying)
        );
        assert!(session.notifications().is_empty());
    }

    #[test]
    fn test_match_resolves_after_delay() {
        let mut session = playing_session();
        session.reveal(Coord::new(0, 0));
        session.reveal(Coord::new(0, 1));

        session.advance(Duration::from_millis(999));
        assert_eq!(session.card(Coord::new(0, 0)).unwrap().state, CardState::Revealed);

        session.advance(Duration::from_millis(1));
        assert_eq!(session.card(Coord::new(0, 0)).unwrap().state, CardState::Matched);
        assert_eq!(session.card(Coord::new(0, 1)).unwrap().state, CardState::Matched);
        assert!(session.pending().is_empty());
        assert_eq!(session.matched_pairs(), 1);
    }

    #[test]
    fn test_mismatch_hides_both() {
        let mut session = playing_session();
        session.reveal(Coord::new(0, 0));
        session.reveal(Coord::new(0, 2));
        session.advance(Duration::from_millis(1000));

        assert_eq!(session.card(Coord::new(0, 0)).unwrap().state, CardState::Hidden);
        assert_eq!(session.card(Coord::new(0, 2)).unwrap().state, CardState::Hidden);
        assert!(session.pending().is_empty());
        assert_eq!(session.matched_pairs(), 0);
    }

    #[test]
    fn test_reset_drops_everything() {
        let mut session = playing_session();
        session.reveal(Coord::new(0, 0));
        session.reveal(Coord::new(0, 2));
        assert!(session.scheduled_tasks() > 0);

        session.reset();

        assert_eq!(session.phase(), Phase::Setup);
        assert!(session.board().is_none());
        assert!(session.pending().is_empty());
        assert_eq!(session.scheduled_tasks(), 0);
        assert_eq!(session.notifications().last(), Some(&Notification::Reset));

        // Nothing left to fire
        assert_eq!(session.run_until_idle(), 0);
    }

    #[test]
    fn test_reset_without_game_is_silent() {
        let mut session = GameSession::default();
        session.reset();
        assert!(session.notifications().is_empty());
    }
}

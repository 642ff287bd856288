//! Plays one game against the virtual clock and logs what a renderer would
//! draw.
//!
//! ```text
//! cargo run --example autoplay -- 6x6 42
//! RUST_LOG=flag_pairs=debug cargo run --example autoplay
//! ```
//!
//! The player remembers every card it has seen and cashes in a known pair
//! whenever it can; otherwise it turns over a random hidden card.

use std::time::Duration;

use flag_pairs::board::CardState;
use flag_pairs::core::{BoardSize, Coord, GameError, GameRng, ImageId};
use flag_pairs::events::Notification;
use flag_pairs::session::{GameSession, Phase, RevealOutcome};
use rustc_hash::FxHashMap;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// How long the player thinks between clicks.
const THINK_TIME: Duration = Duration::from_millis(250);

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let size: BoardSize = match args.next() {
        Some(label) => label.parse()?,
        None => BoardSize::Four,
    };
    let mut rng = match args.next().and_then(|s| s.parse().ok()) {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(%size, seed = rng.seed(), "starting autoplay");

    let mut session = GameSession::default();
    session.start(size, &mut rng)?;

    let mut seen: FxHashMap<Coord, ImageId> = FxHashMap::default();
    let mut clicks = 0usize;

    while session.phase() == Phase::Playing {
        let Some(coord) = pick(&session, &seen, &mut rng) else {
            warn!("no hidden card left to pick");
            break;
        };
        if let Some(card) = session.card(coord) {
            seen.insert(coord, card.image);
        }

        match session.reveal(coord) {
            RevealOutcome::PairPending { resolves_at } => {
                clicks += 1;
                session.advance_to(resolves_at);
            }
            RevealOutcome::Revealed => {
                clicks += 1;
                session.advance(THINK_TIME);
            }
            RevealOutcome::Ignored(reason) => {
                warn!(%coord, ?reason, "click ignored");
                session.advance(THINK_TIME);
            }
        }

        for note in session.drain_notifications() {
            log_notification(&note);
        }
    }

    info!(clicks, pairs = size.pair_count(), "game over");
    session.run_until_idle();
    for note in session.drain_notifications() {
        log_notification(&note);
    }
    Ok(())
}

/// Choose the next card to reveal.
fn pick(session: &GameSession, seen: &FxHashMap<Coord, ImageId>, rng: &mut GameRng) -> Option<Coord> {
    let board = session.board()?;
    let hidden: Vec<Coord> = board.coords_in_state(CardState::Hidden).collect();

    // Complete a pair whose first card is already face up.
    if let [first] = session.pending() {
        let image = board.card(*first)?.image;
        let known = hidden
            .iter()
            .find(|coord| seen.get(*coord) == Some(&image));
        if let Some(coord) = known {
            return Some(*coord);
        }
        let unseen: Vec<Coord> = hidden
            .iter()
            .copied()
            .filter(|coord| !seen.contains_key(coord))
            .collect();
        return rng.choose(&unseen).or_else(|| rng.choose(&hidden)).copied();
    }

    // Start a pair we already know both halves of.
    let known_pair = hidden.iter().find(|a| {
        hidden
            .iter()
            .any(|b| a != &b && seen.get(*a).is_some() && seen.get(*a) == seen.get(b))
    });
    if let Some(coord) = known_pair {
        return Some(*coord);
    }

    let unseen: Vec<Coord> = hidden
        .iter()
        .copied()
        .filter(|coord| !seen.contains_key(coord))
        .collect();
    rng.choose(&unseen).or_else(|| rng.choose(&hidden)).copied()
}

fn log_notification(note: &Notification) {
    match note {
        Notification::BoardReady { size, style } => {
            info!(%size, card_px = style.card_px, font_px = style.font_px, "board ready");
        }
        Notification::CardChanged { coord, state } => info!(%coord, ?state, "card changed"),
        Notification::CardVanished { coord } => info!(%coord, "card vanished"),
        Notification::Victory => info!("victory"),
        Notification::Reset => info!("back to setup"),
        Notification::Animation { .. } => {
            tracing::trace!(?note, "animation");
        }
    }
}

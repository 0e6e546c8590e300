use serde::Serialize;
use tracing::{debug, info, warn};

use crate::models::{ConfigSource, GameConfig};
use crate::redeem::resolve_redeem_code;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Probability for '{text}' is not a finite number")]
    InvalidProbability { text: String },

    #[error("Failed to encode entries: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Per-game rules for turning authored items into client entries.
pub trait GameKind {
    /// Game name used in logs.
    const NAME: &'static str;
    /// Prefix of derived redeem codes.
    const PREFIX: &'static str;

    type Authored;
    type Entry: Serialize + Clone;

    /// Display text of an authored item; blank or missing text drops it.
    fn text(item: &Self::Authored) -> Option<&str>;

    fn redeem_code(item: &Self::Authored) -> Option<&str>;

    /// Fill optional fields from per-field defaults. `text` is trimmed.
    fn complete(item: &Self::Authored, text: &str, redeem_code: String) -> Result<Self::Entry, GameError>;

    /// Fixed entries used when nothing usable was authored.
    fn defaults() -> Vec<Self::Entry>;
}

/// Build the client payload for a game.
///
/// Authored items without display text are dropped. When none remain, or
/// when the authored data cannot be turned into entries, the game's default
/// set is used and the returned [`ConfigSource`] says why. An error is
/// returned only if the default set itself cannot be encoded.
pub fn build_config<G: GameKind>(authored: &[G::Authored]) -> Result<GameConfig<G::Entry>, GameError> {
    match build_authored::<G>(authored) {
        Ok(Some(config)) => {
            debug!("{}: using {} authored entries", G::NAME, config.count);
            Ok(config)
        }
        Ok(None) => {
            info!("{}: no authored entries, using defaults", G::NAME);
            build_defaults::<G>(ConfigSource::NoAuthoredEntries)
        }
        Err(e) => {
            warn!("{}: authored entries rejected, using defaults: {}", G::NAME, e);
            build_defaults::<G>(ConfigSource::BuildFailed(e.to_string()))
        }
    }
}

fn build_authored<G: GameKind>(authored: &[G::Authored]) -> Result<Option<GameConfig<G::Entry>>, GameError> {
    let mut entries = Vec::with_capacity(authored.len());

    for item in authored {
        let Some(text) = G::text(item).map(str::trim).filter(|t| !t.is_empty()) else {
            continue;
        };
        let redeem_code = resolve_redeem_code(G::redeem_code(item), G::PREFIX, text);
        entries.push(G::complete(item, text, redeem_code)?);
    }

    if entries.is_empty() {
        return Ok(None);
    }

    let json = serde_json::to_string(&entries)?;
    Ok(Some(GameConfig::new(entries, json, ConfigSource::Authored)))
}

fn build_defaults<G: GameKind>(source: ConfigSource) -> Result<GameConfig<G::Entry>, GameError> {
    let entries = G::defaults();
    let json = serde_json::to_string(&entries)?;
    Ok(GameConfig::new(entries, json, source))
}

//! Local fallback synthesis via the platform's built-in speech engine.

use tts::Tts;

use crate::error::NarrationError;

/// Speak `text` with the platform synthesizer's default voice.
///
/// The engine queues the utterance and returns immediately; playback is
/// fire-and-forget. Used whenever remote synthesis is unavailable or fails.
pub(crate) fn speak(text: &str) -> Result<(), NarrationError> {
    let mut engine = Tts::default().map_err(|e| NarrationError::LocalSynthesis(e.to_string()))?;
    engine
        .speak(text, false)
        .map_err(|e| NarrationError::LocalSynthesis(e.to_string()))?;
    Ok(())
}

//! Narration pipeline: text + speaker in, audible speech out.
//!
//! Prefers a remote synthesis call (audio-only response, raw PCM payload)
//! and falls back to the platform's built-in speech synthesizer when no
//! credential is configured or when any step of the remote path fails.

use std::sync::Arc;

use async_trait::async_trait;

mod error;
mod local;
mod pcm;
mod playback;
mod speaker;
mod tts_api;

pub use error::NarrationError;
pub use pcm::{decode_pcm16, SAMPLE_RATE};
pub use playback::{AudioOutput, RodioOutput};
pub use speaker::{Speaker, DEFAULT_VOICE};

/// Environment variable holding the remote service credential. Its absence
/// is a supported configuration, not an error.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Remote synthesis backend.
///
/// The real implementation talks to the generateContent endpoint; tests
/// substitute a double returning canned PCM bytes.
#[async_trait]
pub trait TtsBackend: Send + Sync {
    /// Synthesize `text` with the given voice preset, returning raw s16le
    /// mono PCM at [`SAMPLE_RATE`].
    async fn synthesize(&self, text: &str, voice_name: &str) -> Result<Vec<u8>, NarrationError>;
}

/// Remote synthesis client for the Gemini TTS endpoint.
pub struct GeminiTts {
    client: reqwest::Client,
    api_key: String,
}

impl GeminiTts {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl TtsBackend for GeminiTts {
    async fn synthesize(&self, text: &str, voice_name: &str) -> Result<Vec<u8>, NarrationError> {
        tts_api::synthesize(&self.client, &self.api_key, text, voice_name).await
    }
}

/// Produces audible speech for dialogue lines and vocabulary words.
///
/// Holds an explicitly constructed backend rather than a process-wide lazy
/// client, so tests can inject a double. `None` means no credential was
/// configured and every request goes straight to the local synthesizer.
pub struct Narrator {
    backend: Option<Box<dyn TtsBackend>>,
    output: Arc<dyn AudioOutput>,
}

impl Narrator {
    pub fn new(backend: Option<Box<dyn TtsBackend>>, output: Arc<dyn AudioOutput>) -> Self {
        Self { backend, output }
    }

    /// Build from the environment: remote synthesis when [`API_KEY_VAR`] is
    /// set and non-empty, local-only otherwise.
    pub fn from_env(output: Arc<dyn AudioOutput>) -> Self {
        let backend = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .map(|key| Box::new(GeminiTts::new(key)) as Box<dyn TtsBackend>);
        if backend.is_none() {
            tracing::info!("no {API_KEY_VAR} configured, narration uses local synthesis only");
        }
        Self::new(backend, output)
    }

    /// Speak `text` as `speaker`.
    ///
    /// Resolves once remote playback has started or the fallback has been
    /// invoked. Failures are logged and recovered locally, never returned;
    /// callers serialize requests themselves via their own in-flight flag.
    pub async fn speak(&self, text: &str, speaker: Speaker) {
        let Some(backend) = &self.backend else {
            self.speak_locally(text);
            return;
        };
        if let Err(error) = self.speak_remote(backend.as_ref(), text, speaker).await {
            tracing::warn!(%error, %speaker, "remote narration failed, falling back");
            self.speak_locally(text);
        }
    }

    async fn speak_remote(
        &self,
        backend: &dyn TtsBackend,
        text: &str,
        speaker: Speaker,
    ) -> Result<(), NarrationError> {
        let bytes = backend.synthesize(text, speaker.voice_name()).await?;
        let samples = pcm::decode_pcm16(&bytes)?;
        self.output.play(samples, pcm::SAMPLE_RATE)
    }

    fn speak_locally(&self, text: &str) {
        if let Err(error) = local::speak(text) {
            tracing::warn!(%error, "local speech synthesis failed");
        }
    }
}

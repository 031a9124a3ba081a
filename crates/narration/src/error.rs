/// Errors that can occur while producing speech.
///
/// None of these are fatal to the application: every failure path falls
/// back to the local platform synthesizer and is logged, not propagated.
#[derive(Debug, thiserror::Error)]
pub enum NarrationError {
    /// The remote synthesis request failed (network or service-side).
    #[error("Speech request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service response carried no inline audio data.
    #[error("Speech service returned no audio payload")]
    MissingPayload,

    /// The inline audio data was not valid base64.
    #[error("Audio payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded payload was not a whole number of 16-bit samples.
    #[error("Audio payload is truncated: {0} bytes is not a whole number of samples")]
    TruncatedPayload(usize),

    /// Failed to open or write to the audio output device.
    #[error("Failed to open audio output: {0}")]
    Output(String),

    /// The platform speech synthesizer refused the text.
    #[error("Local speech synthesis failed: {0}")]
    LocalSynthesis(String),
}

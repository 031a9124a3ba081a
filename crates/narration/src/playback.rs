//! Audio output for decoded narration samples.
//!
//! `rodio::OutputStream` is `!Send` on some platforms, so the real output
//! confines it to a short-lived dedicated thread and reports back over a
//! channel once playback has started. The [`AudioOutput`] trait is the seam
//! that lets tests substitute a recording double.

use std::sync::mpsc;
use std::thread;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};

use crate::error::NarrationError;

/// Destination for decoded mono samples.
///
/// `play` returns once playback has started; the audio itself runs to
/// completion in the background. No seeking, looping, or pause/resume.
pub trait AudioOutput: Send + Sync {
    fn play(&self, samples: Vec<f32>, sample_rate: u32) -> Result<(), NarrationError>;
}

/// Plays through the default output device via rodio.
pub struct RodioOutput;

impl RodioOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RodioOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for RodioOutput {
    fn play(&self, samples: Vec<f32>, sample_rate: u32) -> Result<(), NarrationError> {
        let (started_tx, started_rx) = mpsc::channel();
        thread::Builder::new()
            .name("storybook-audio".into())
            .spawn(move || {
                let opened = OutputStream::try_default()
                    .map_err(|e| NarrationError::Output(e.to_string()))
                    .and_then(|(stream, handle)| {
                        let sink = Sink::try_new(&handle)
                            .map_err(|e| NarrationError::Output(e.to_string()))?;
                        Ok((stream, sink))
                    });
                match opened {
                    Ok((_stream, sink)) => {
                        sink.append(SamplesBuffer::new(1, sample_rate, samples));
                        // Playback is now running; unblock the caller.
                        let _ = started_tx.send(Ok(()));
                        tracing::debug!(sample_rate, "narration playback started");
                        // Keep the stream alive until the sink drains.
                        sink.sleep_until_end();
                    }
                    Err(error) => {
                        let _ = started_tx.send(Err(error));
                    }
                }
            })
            .map_err(|e| NarrationError::Output(format!("failed to spawn audio thread: {e}")))?;
        started_rx
            .recv()
            .map_err(|_| NarrationError::Output("audio thread exited before starting".into()))?
    }
}

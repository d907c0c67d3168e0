//! Playback controller state machine.
//!
//! Owns the explicit playback state (current noise type, playing flag,
//! volume) and exposes transitions as atomic operations. In particular,
//! switching noise type stops the old stream and starts the new buffer as
//! one operation, so two overlapping playback streams are never observable.

use tracing::{debug, warn};
use umber_noise::rng::derive_generation_seed;
use umber_noise::{
    generate, NoiseBuffer, NoiseType, WavResult, DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_RATE,
};

use crate::cache::BufferCache;
use crate::error::PlayerResult;
use crate::sink::AudioSink;

/// Volume applied to the sink when a player is created.
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Looping noise player.
///
/// Generic over the sink so tests can drive the state machine through a
/// scripted implementation. A freshly created player has a brown noise
/// buffer prepared and is stopped.
pub struct NoisePlayer<S: AudioSink> {
    sink: S,
    cache: Option<Box<dyn BufferCache>>,
    buffer: NoiseBuffer,
    noise_type: NoiseType,
    playing: bool,
    volume: f32,
    base_seed: u32,
    generation: u64,
}

impl<S: AudioSink> NoisePlayer<S> {
    /// Creates a player with an entropy-derived base seed.
    pub fn new(sink: S) -> PlayerResult<Self> {
        Self::with_seed(sink, rand::random())
    }

    /// Creates a player with a fixed base seed, for reproducible sessions.
    pub fn with_seed(mut sink: S, base_seed: u32) -> PlayerResult<Self> {
        sink.set_volume(DEFAULT_VOLUME);

        let noise_type = NoiseType::Brown;
        let seed = derive_generation_seed(base_seed, 0);
        let buffer = generate(
            noise_type,
            DEFAULT_SAMPLE_RATE,
            DEFAULT_DURATION_SECONDS,
            seed,
        )?;
        debug!(
            noise_type = noise_type.label(),
            samples = buffer.len(),
            "prepared initial noise buffer"
        );

        Ok(Self {
            sink,
            cache: None,
            buffer,
            noise_type,
            playing: false,
            volume: DEFAULT_VOLUME,
            base_seed,
            generation: 1,
        })
    }

    /// Attaches a write-through buffer cache. Subsequent generations are
    /// encoded and stored under the noise type's label; cache failures are
    /// logged and never affect playback.
    pub fn with_cache(mut self, cache: Box<dyn BufferCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The currently selected noise type.
    pub fn noise_type(&self) -> NoiseType {
        self.noise_type
    }

    /// True while the sink is looping the prepared buffer.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The current volume in [0.0, 1.0].
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// The currently prepared buffer.
    pub fn buffer(&self) -> &NoiseBuffer {
        &self.buffer
    }

    /// Starts looping playback of the prepared buffer. No-op when already
    /// playing.
    pub fn play(&mut self) -> PlayerResult<()> {
        if self.playing {
            return Ok(());
        }
        self.sink.start(&self.buffer.samples, self.buffer.sample_rate)?;
        self.playing = true;
        debug!(noise_type = self.noise_type.label(), "playback started");
        Ok(())
    }

    /// Stops playback. No-op when already stopped.
    pub fn stop(&mut self) {
        if self.playing {
            self.sink.stop();
            self.playing = false;
            debug!(noise_type = self.noise_type.label(), "playback stopped");
        }
    }

    /// Toggles between playing and stopped.
    pub fn toggle(&mut self) -> PlayerResult<()> {
        if self.playing {
            self.stop();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Switches to another noise type.
    ///
    /// No-op when the type is unchanged. Otherwise generates a fresh buffer
    /// and, as one transition, stops the old stream and resumes playback of
    /// the new buffer iff the old one was playing.
    pub fn switch_to(&mut self, noise_type: NoiseType) -> PlayerResult<()> {
        if noise_type == self.noise_type {
            return Ok(());
        }

        let was_playing = self.playing;
        self.stop();
        self.regenerate(noise_type)?;
        if was_playing {
            self.play()?;
        }
        Ok(())
    }

    /// Regenerates the current noise type with a fresh draw stream,
    /// replacing the prepared buffer. Restarts playback when audible.
    pub fn refresh(&mut self) -> PlayerResult<()> {
        let was_playing = self.playing;
        self.stop();
        self.regenerate(self.noise_type)?;
        if was_playing {
            self.play()?;
        }
        Ok(())
    }

    /// Sets the output volume, clamped to [0.0, 1.0].
    ///
    /// Idempotent; never regenerates or reloads the buffer. Non-finite
    /// input is ignored.
    pub fn set_volume(&mut self, volume: f32) {
        if !volume.is_finite() {
            debug!(volume, "ignoring non-finite volume");
            return;
        }
        let clamped = volume.clamp(0.0, 1.0);
        self.volume = clamped;
        self.sink.set_volume(clamped);
    }

    fn regenerate(&mut self, noise_type: NoiseType) -> PlayerResult<()> {
        let seed = derive_generation_seed(self.base_seed, self.generation);
        self.generation += 1;

        let buffer = generate(
            noise_type,
            DEFAULT_SAMPLE_RATE,
            DEFAULT_DURATION_SECONDS,
            seed,
        )?;
        debug!(
            noise_type = noise_type.label(),
            samples = buffer.len(),
            "generated noise buffer"
        );

        if let Some(cache) = &self.cache {
            let wav = WavResult::from_buffer(&buffer);
            if let Err(err) = cache.store(noise_type.label(), &wav.wav_data) {
                warn!(
                    noise_type = noise_type.label(),
                    error = %err,
                    "failed to cache noise buffer"
                );
            }
        }

        self.buffer = buffer;
        self.noise_type = noise_type;
        Ok(())
    }
}

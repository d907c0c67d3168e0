//! Tests for the playback controller state machine.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use umber_noise::NoiseType;

use crate::cache::{BufferCache, CacheError, CacheResult};
use crate::controller::{NoisePlayer, DEFAULT_VOLUME};
use crate::error::PlayerError;
use crate::sink::{AudioSink, SinkError};

#[derive(Debug, Clone, PartialEq)]
enum SinkEvent {
    Start { samples: usize, sample_rate: u32 },
    Stop,
    Volume(f32),
}

#[derive(Default)]
struct SinkLog {
    events: Vec<SinkEvent>,
    playing: bool,
    overlapped: bool,
}

/// Scripted sink recording every call; flags any start-while-playing.
#[derive(Clone, Default)]
struct FakeSink {
    log: Rc<RefCell<SinkLog>>,
    fail_start: Rc<Cell<bool>>,
}

impl FakeSink {
    fn events(&self) -> Vec<SinkEvent> {
        self.log.borrow().events.clone()
    }

    fn overlapped(&self) -> bool {
        self.log.borrow().overlapped
    }

    fn starts(&self) -> usize {
        self.log
            .borrow()
            .events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Start { .. }))
            .count()
    }
}

impl AudioSink for FakeSink {
    fn start(&mut self, samples: &[f32], sample_rate: u32) -> Result<(), SinkError> {
        if self.fail_start.get() {
            return Err(SinkError::new("no output device"));
        }
        let mut log = self.log.borrow_mut();
        if log.playing {
            log.overlapped = true;
        }
        log.playing = true;
        log.events.push(SinkEvent::Start {
            samples: samples.len(),
            sample_rate,
        });
        Ok(())
    }

    fn stop(&mut self) {
        let mut log = self.log.borrow_mut();
        log.playing = false;
        log.events.push(SinkEvent::Stop);
    }

    fn set_volume(&mut self, volume: f32) {
        self.log.borrow_mut().events.push(SinkEvent::Volume(volume));
    }
}

/// Cache whose contents stay inspectable after being boxed.
#[derive(Clone, Default)]
struct SharedCache {
    entries: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl BufferCache for SharedCache {
    fn store(&self, key: &str, blob: &[u8]) -> CacheResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), blob.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(self.entries.borrow().get(key).cloned())
    }
}

/// Cache that always fails to store.
struct BrokenCache;

impl BufferCache for BrokenCache {
    fn store(&self, _key: &str, _blob: &[u8]) -> CacheResult<()> {
        Err(CacheError::NoCacheDir)
    }

    fn load(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(None)
    }
}

fn player(seed: u32) -> (NoisePlayer<FakeSink>, FakeSink) {
    let sink = FakeSink::default();
    let player = NoisePlayer::with_seed(sink.clone(), seed).expect("player creation succeeds");
    (player, sink)
}

#[test]
fn test_new_player_is_prepared_and_stopped() {
    let (player, sink) = player(42);

    assert_eq!(player.noise_type(), NoiseType::Brown);
    assert!(!player.is_playing());
    assert_eq!(player.volume(), DEFAULT_VOLUME);
    // 5 seconds at 44.1 kHz.
    assert_eq!(player.buffer().len(), 220_500);

    // Only the initial volume reached the sink; nothing started.
    assert_eq!(sink.events(), vec![SinkEvent::Volume(DEFAULT_VOLUME)]);
}

#[test]
fn test_play_starts_looping_the_prepared_buffer() {
    let (mut player, sink) = player(42);

    player.play().unwrap();
    assert!(player.is_playing());
    assert_eq!(
        sink.events().last(),
        Some(&SinkEvent::Start {
            samples: 220_500,
            sample_rate: 44_100,
        })
    );

    // Playing again is a no-op.
    player.play().unwrap();
    assert_eq!(sink.starts(), 1);
}

#[test]
fn test_toggle_round_trip() {
    let (mut player, sink) = player(42);

    player.toggle().unwrap();
    assert!(player.is_playing());
    player.toggle().unwrap();
    assert!(!player.is_playing());

    assert_eq!(sink.starts(), 1);
    assert_eq!(sink.events().last(), Some(&SinkEvent::Stop));

    // Stop when already stopped does not reach the sink.
    player.stop();
    assert_eq!(sink.events().last(), Some(&SinkEvent::Stop));
    assert_eq!(
        sink.events()
            .iter()
            .filter(|e| matches!(e, SinkEvent::Stop))
            .count(),
        1
    );
}

#[test]
fn test_switch_while_playing_stops_then_starts() {
    let (mut player, sink) = player(42);
    player.play().unwrap();
    let old_buffer = player.buffer().clone();

    player.switch_to(NoiseType::Green).unwrap();

    assert_eq!(player.noise_type(), NoiseType::Green);
    assert!(player.is_playing());
    assert_ne!(player.buffer().samples, old_buffer.samples);

    // Strict order: the old stream stopped before the new one started, and
    // the sink never saw two live streams.
    let events = sink.events();
    assert_eq!(
        events,
        vec![
            SinkEvent::Volume(DEFAULT_VOLUME),
            SinkEvent::Start {
                samples: 220_500,
                sample_rate: 44_100,
            },
            SinkEvent::Stop,
            SinkEvent::Start {
                samples: 220_500,
                sample_rate: 44_100,
            },
        ]
    );
    assert!(!sink.overlapped());
}

#[test]
fn test_switch_while_stopped_stays_stopped() {
    let (mut player, sink) = player(42);

    player.switch_to(NoiseType::White).unwrap();

    assert_eq!(player.noise_type(), NoiseType::White);
    assert!(!player.is_playing());
    assert_eq!(sink.starts(), 0);
}

#[test]
fn test_switch_to_same_type_is_a_no_op() {
    let (mut player, sink) = player(42);
    let before = player.buffer().clone();

    player.switch_to(NoiseType::Brown).unwrap();

    assert_eq!(player.buffer().samples, before.samples);
    assert_eq!(sink.events(), vec![SinkEvent::Volume(DEFAULT_VOLUME)]);
}

#[test]
fn test_refresh_regenerates_current_type() {
    let (mut player, sink) = player(42);
    player.play().unwrap();
    let before = player.buffer().clone();

    player.refresh().unwrap();

    assert_eq!(player.noise_type(), NoiseType::Brown);
    assert_eq!(player.buffer().len(), before.len());
    assert_ne!(player.buffer().samples, before.samples);
    assert!(player.is_playing());
    assert!(!sink.overlapped());
}

#[test]
fn test_volume_is_clamped_and_forwarded() {
    let (mut player, sink) = player(42);

    player.set_volume(1.5);
    assert_eq!(player.volume(), 1.0);
    player.set_volume(-0.25);
    assert_eq!(player.volume(), 0.0);
    player.set_volume(0.3);
    player.set_volume(0.3);
    assert_eq!(player.volume(), 0.3);

    let volumes: Vec<SinkEvent> = sink
        .events()
        .into_iter()
        .filter(|e| matches!(e, SinkEvent::Volume(_)))
        .collect();
    assert_eq!(
        volumes,
        vec![
            SinkEvent::Volume(DEFAULT_VOLUME),
            SinkEvent::Volume(1.0),
            SinkEvent::Volume(0.0),
            SinkEvent::Volume(0.3),
            SinkEvent::Volume(0.3),
        ]
    );
}

#[test]
fn test_volume_never_regenerates_the_buffer() {
    let (mut player, sink) = player(42);
    let before = player.buffer().clone();

    player.set_volume(0.1);
    player.set_volume(0.9);

    assert_eq!(player.buffer().samples, before.samples);
    assert_eq!(sink.starts(), 0);
}

#[test]
fn test_non_finite_volume_is_ignored() {
    let (mut player, sink) = player(42);

    player.set_volume(f32::NAN);
    player.set_volume(f32::INFINITY);

    assert_eq!(player.volume(), DEFAULT_VOLUME);
    let volumes = sink
        .events()
        .into_iter()
        .filter(|e| matches!(e, SinkEvent::Volume(_)))
        .count();
    assert_eq!(volumes, 1);
}

#[test]
fn test_sink_failure_surfaces_playback_unavailable() {
    let sink = FakeSink::default();
    sink.fail_start.set(true);
    let mut player = NoisePlayer::with_seed(sink.clone(), 42).unwrap();

    let err = player.play().unwrap_err();
    assert!(matches!(err, PlayerError::PlaybackUnavailable(_)));
    assert!(!player.is_playing());
}

#[test]
fn test_switch_reports_sink_failure_and_stops() {
    let (mut player, sink) = player(42);
    player.play().unwrap();

    // Device disappears between the stop and the restart.
    sink.fail_start.set(true);
    let err = player.switch_to(NoiseType::Grey).unwrap_err();

    assert!(matches!(err, PlayerError::PlaybackUnavailable(_)));
    assert!(!player.is_playing());
    // The new buffer is still prepared; a later play can retry.
    assert_eq!(player.noise_type(), NoiseType::Grey);
}

#[test]
fn test_cache_write_through_on_generation() {
    let cache = SharedCache::default();
    let sink = FakeSink::default();
    let mut player = NoisePlayer::with_seed(sink, 42)
        .unwrap()
        .with_cache(Box::new(cache.clone()));

    player.switch_to(NoiseType::Green).unwrap();

    let blob = cache.entries.borrow().get("green").cloned().unwrap();
    // A well-formed mono WAV: 44-byte header plus 16-bit samples.
    assert_eq!(&blob[0..4], b"RIFF");
    assert_eq!(blob.len(), 44 + 220_500 * 2);
}

#[test]
fn test_cache_failure_does_not_fail_playback() {
    let sink = FakeSink::default();
    let mut player = NoisePlayer::with_seed(sink, 42)
        .unwrap()
        .with_cache(Box::new(BrokenCache));

    player.play().unwrap();
    player.switch_to(NoiseType::White).unwrap();

    assert!(player.is_playing());
    assert_eq!(player.noise_type(), NoiseType::White);
}

#[test]
fn test_seeded_players_are_reproducible() {
    let (mut a, _) = player(1234);
    let (mut b, _) = player(1234);

    assert_eq!(a.buffer().samples, b.buffer().samples);

    // Different base seeds diverge already on the initial buffer.
    let (c, _) = player(99);
    assert_ne!(a.buffer().samples, c.buffer().samples);

    a.switch_to(NoiseType::Grey).unwrap();
    b.switch_to(NoiseType::Grey).unwrap();
    assert_eq!(a.buffer().samples, b.buffer().samples);
}

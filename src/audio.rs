//! Fire-and-forget sound cues.

use std::collections::HashMap;

use fundsp::prelude::*;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle};
use tracing::{trace, warn};

use crate::error::Result;
use crate::frame::AudioCue;

pub const SAMPLE_RATE: u32 = 44_100;

/// Something that can start a cue without waiting for it to finish.
pub trait AudioPlayer {
    fn play_once(&mut self, cue: AudioCue);
}

impl<A: AudioPlayer + ?Sized> AudioPlayer for Box<A> {
    fn play_once(&mut self, cue: AudioCue) {
        (**self).play_once(cue);
    }
}

/// Used when no output device is available.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioPlayer for SilentAudio {
    fn play_once(&mut self, cue: AudioCue) {
        trace!(?cue, "audio disabled, dropping cue");
    }
}

// ── Sounds ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Wave {
    Sine,
    Saw,
}

/// One note: waveform, pitch, length and starting gain (decays linearly to zero).
#[derive(Debug, Clone, Copy)]
struct Note {
    wave: Wave,
    hz: f32,
    secs: f32,
    gain: f32,
}

const fn note(wave: Wave, hz: f32, secs: f32, gain: f32) -> Note {
    Note {
        wave,
        hz,
        secs,
        gain,
    }
}

fn score_low() -> Vec<Note> {
    vec![
        note(Wave::Sine, 660.0, 0.06, 0.25),
        note(Wave::Sine, 990.0, 0.12, 0.25),
    ]
}

fn score_high() -> Vec<Note> {
    vec![
        note(Wave::Sine, 880.0, 0.06, 0.25),
        note(Wave::Sine, 1320.0, 0.12, 0.25),
    ]
}

/// Falling sawtooth steps, roughly 400 Hz down to 80 Hz over half a second.
fn death() -> Vec<Note> {
    [400.0, 280.0, 190.0, 130.0, 80.0]
        .into_iter()
        .map(|hz| note(Wave::Saw, hz, 0.1, 0.15))
        .collect()
}

fn notes_for(cue: AudioCue) -> Vec<Note> {
    match cue {
        AudioCue::Scored1 => score_low(),
        AudioCue::Scored2 => score_high(),
        AudioCue::GameOver => death(),
    }
}

fn sample_count(secs: f32) -> usize {
    (secs * SAMPLE_RATE as f32) as usize
}

/// Render a note sequence to mono samples at [`SAMPLE_RATE`].
fn synthesize(notes: &[Note]) -> Vec<f32> {
    let mut samples = Vec::new();
    for n in notes {
        let mut osc: Box<dyn AudioUnit> = match n.wave {
            Wave::Sine => Box::new(sine_hz::<f32>(n.hz)),
            Wave::Saw => Box::new(saw_hz(n.hz)),
        };
        osc.set_sample_rate(SAMPLE_RATE as f64);
        let len = sample_count(n.secs);
        for i in 0..len {
            let fade = 1.0 - i as f32 / len as f32;
            samples.push(osc.get_mono() * n.gain * fade);
        }
    }
    samples
}

/// Plays pre-rendered cues on the default output device.
pub struct SynthAudio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    cues: HashMap<AudioCue, Vec<f32>>,
}

impl SynthAudio {
    pub fn new() -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        let cues = [AudioCue::Scored1, AudioCue::Scored2, AudioCue::GameOver]
            .into_iter()
            .map(|cue| (cue, synthesize(&notes_for(cue))))
            .collect();
        Ok(Self {
            _stream: stream,
            handle,
            cues,
        })
    }

    pub fn try_play(&self, cue: AudioCue) -> Result<()> {
        let samples = self.cues.get(&cue).cloned().unwrap_or_default();
        self.handle
            .play_raw(SamplesBuffer::new(1, SAMPLE_RATE, samples))?;
        Ok(())
    }
}

impl AudioPlayer for SynthAudio {
    fn play_once(&mut self, cue: AudioCue) {
        if let Err(err) = self.try_play(cue) {
            warn!(?cue, %err, "failed to play cue");
        }
    }
}

/// Open the default device, or fall back to silence.
pub fn open_default() -> Box<dyn AudioPlayer> {
    match SynthAudio::new() {
        Ok(audio) => Box::new(audio),
        Err(err) => {
            warn!(%err, "no audio output, continuing without sound");
            Box::new(SilentAudio)
        }
    }
}

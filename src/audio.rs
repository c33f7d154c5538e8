//! Audio cues using the Web Audio API
//!
//! Every effect is a short stack of oscillator tones, so no sample files are
//! needed. The event-to-sound mapping and tone tables are platform neutral;
//! only `AudioManager` touches the browser.

use crate::sim::{Category, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired
    Shot,
    /// A text model went down
    TextDestroyed,
    /// A video model went down
    VideoDestroyed,
    /// A boss minion went down
    GlitchDestroyed,
    /// Shot the wrong kind of model
    FuelPenalty,
    /// First penalty contact
    Overheat,
    /// Shield picked up
    ShieldUp,
    /// Shield ran out
    ShieldDown,
    BossAppear,
    BossHit,
    BossAttack,
    BossDefeated,
    /// Level cleared, next one coming
    LevelClear,
    Victory,
    GameOver,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        Some(match event {
            GameEvent::ShotFired => Self::Shot,
            GameEvent::EnemyDestroyed { category, .. } => match category {
                Category::Text => Self::TextDestroyed,
                Category::Video => Self::VideoDestroyed,
                Category::Glitch => Self::GlitchDestroyed,
            },
            GameEvent::FuelPenalty { .. } => Self::FuelPenalty,
            GameEvent::Overheat => Self::Overheat,
            GameEvent::PowerUpCollected => Self::ShieldUp,
            GameEvent::ShieldExpired => Self::ShieldDown,
            GameEvent::BossAppeared => Self::BossAppear,
            GameEvent::BossHit { .. } => Self::BossHit,
            GameEvent::BossAttack => Self::BossAttack,
            GameEvent::BossDefeated => Self::BossDefeated,
            GameEvent::LevelCleared { .. } => Self::LevelClear,
            GameEvent::GameWon => Self::Victory,
            GameEvent::GameLost { .. } => Self::GameOver,
            // Entering a level is already announced by LevelClear / BossAppear
            GameEvent::LevelAdvanced { .. } => return None,
        })
    }

    /// Oscillator layers making up this effect
    pub fn tones(self) -> &'static [Tone] {
        match self {
            Self::Shot => SHOT,
            Self::TextDestroyed => TEXT_DESTROYED,
            Self::VideoDestroyed => VIDEO_DESTROYED,
            Self::GlitchDestroyed => GLITCH_DESTROYED,
            Self::FuelPenalty => FUEL_PENALTY,
            Self::Overheat => OVERHEAT,
            Self::ShieldUp => SHIELD_UP,
            Self::ShieldDown => SHIELD_DOWN,
            Self::BossAppear => BOSS_APPEAR,
            Self::BossHit => BOSS_HIT,
            Self::BossAttack => BOSS_ATTACK,
            Self::BossDefeated => BOSS_DEFEATED,
            Self::LevelClear => LEVEL_CLEAR,
            Self::Victory => VICTORY,
            Self::GameOver => GAME_OVER,
        }
    }
}

// === Tone tables ===

use Waveform::{Sawtooth, Sine, Square, Triangle};

const SHOT: &[Tone] = &[Tone::sweep(Square, 880.0, 440.0, 0.12, 0.06)];
const TEXT_DESTROYED: &[Tone] = &[
    Tone::sweep(Triangle, 600.0, 1200.0, 0.3, 0.12),
    Tone::sweep(Sine, 120.0, 60.0, 0.25, 0.1),
];
const VIDEO_DESTROYED: &[Tone] = &[
    Tone::sweep(Sawtooth, 200.0, 50.0, 0.35, 0.25),
    Tone::sweep(Square, 1500.0, 1500.0, 0.15, 0.08),
];
const GLITCH_DESTROYED: &[Tone] = &[
    Tone::sweep(Sawtooth, 3000.0, 100.0, 0.25, 0.15),
    Tone::sweep(Square, 90.0, 45.0, 0.2, 0.12),
];
const FUEL_PENALTY: &[Tone] = &[Tone::sweep(Square, 220.0, 110.0, 0.3, 0.25)];
const OVERHEAT: &[Tone] = &[
    Tone::sweep(Sawtooth, 440.0, 880.0, 0.3, 0.15),
    Tone::sweep(Sawtooth, 880.0, 440.0, 0.3, 0.15).after(0.15),
];
const SHIELD_UP: &[Tone] = &[
    Tone::sweep(Sine, 523.0, 523.0, 0.3, 0.08),
    Tone::sweep(Sine, 659.0, 659.0, 0.3, 0.08).after(0.08),
    Tone::sweep(Sine, 784.0, 784.0, 0.3, 0.12).after(0.16),
];
const SHIELD_DOWN: &[Tone] = &[Tone::sweep(Sine, 784.0, 262.0, 0.25, 0.3)];
const BOSS_APPEAR: &[Tone] = &[
    Tone::sweep(Sawtooth, 55.0, 110.0, 0.4, 0.8),
    Tone::sweep(Square, 110.0, 220.0, 0.15, 0.8),
];
const BOSS_HIT: &[Tone] = &[Tone::sweep(Square, 300.0, 150.0, 0.25, 0.08)];
const BOSS_ATTACK: &[Tone] = &[Tone::sweep(Triangle, 1200.0, 300.0, 0.2, 0.2)];
const BOSS_DEFEATED: &[Tone] = &[
    Tone::sweep(Sawtooth, 150.0, 30.0, 0.5, 0.8),
    Tone::sweep(Square, 2000.0, 200.0, 0.2, 0.5),
];
const LEVEL_CLEAR: &[Tone] = &[
    Tone::sweep(Triangle, 523.0, 523.0, 0.3, 0.12),
    Tone::sweep(Triangle, 659.0, 659.0, 0.3, 0.12).after(0.12),
    Tone::sweep(Triangle, 784.0, 784.0, 0.3, 0.12).after(0.24),
    Tone::sweep(Triangle, 1047.0, 1047.0, 0.3, 0.3).after(0.36),
];
const VICTORY: &[Tone] = &[
    Tone::sweep(Square, 523.0, 523.0, 0.25, 0.15),
    Tone::sweep(Square, 784.0, 784.0, 0.25, 0.15).after(0.15),
    Tone::sweep(Square, 1047.0, 1047.0, 0.25, 0.6).after(0.3),
    Tone::sweep(Sine, 262.0, 262.0, 0.2, 0.9),
];
const GAME_OVER: &[Tone] = &[
    Tone::sweep(Sawtooth, 392.0, 392.0, 0.3, 0.25),
    Tone::sweep(Sawtooth, 330.0, 330.0, 0.3, 0.25).after(0.25),
    Tone::sweep(Sawtooth, 262.0, 131.0, 0.3, 0.6).after(0.5),
];

/// Oscillator shape (mirrors `OscillatorType` without the browser dependency)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One oscillator layer: exponential frequency sweep under a decaying envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub start_freq: f32,
    pub end_freq: f32,
    /// Peak gain before master/sfx volume
    pub gain: f32,
    /// Seconds from onset to silence
    pub duration: f64,
    /// Seconds after the effect starts
    pub delay: f64,
}

impl Tone {
    const fn sweep(
        waveform: Waveform,
        start_freq: f32,
        end_freq: f32,
        gain: f32,
        duration: f64,
    ) -> Self {
        Self {
            waveform,
            start_freq,
            end_freq,
            gain,
            duration,
            delay: 0.0,
        }
    }

    const fn after(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

#[cfg(target_arch = "wasm32")]
pub use manager::AudioManager;

#[cfg(target_arch = "wasm32")]
mod manager {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{SoundEffect, Tone, Waveform};
    use crate::sim::GameEvent;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        muted: bool,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                master_volume: 0.6,
                muted: false,
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        pub fn toggle_muted(&mut self) -> bool {
            self.muted = !self.muted;
            self.muted
        }

        /// Play the cue for every event of a tick
        pub fn play_events(&self, events: &[GameEvent]) {
            for effect in events.iter().filter_map(SoundEffect::for_event) {
                self.play(effect);
            }
        }

        pub fn play(&self, effect: SoundEffect) {
            if self.muted || self.master_volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            for tone in effect.tones() {
                self.play_tone(ctx, tone);
            }
        }

        fn play_tone(&self, ctx: &AudioContext, tone: &Tone) {
            let Some((osc, gain)) = self.create_osc(ctx, tone.start_freq, tone.waveform) else {
                return;
            };
            let t = ctx.current_time() + tone.delay;
            let end = t + tone.duration;

            gain.gain().set_value_at_time(0.0, ctx.current_time()).ok();
            gain.gain()
                .set_value_at_time(tone.gain * self.master_volume, t)
                .ok();
            gain.gain().exponential_ramp_to_value_at_time(0.01, end).ok();
            osc.frequency().set_value_at_time(tone.start_freq, t).ok();
            if tone.end_freq != tone.start_freq {
                osc.frequency()
                    .exponential_ramp_to_value_at_time(tone.end_freq, end)
                    .ok();
            }

            osc.start_with_when(t).ok();
            osc.stop_with_when(end + 0.02).ok();
        }

        /// Create an oscillator wired through its own gain node
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            waveform: Waveform,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(match waveform {
                Waveform::Sine => OscillatorType::Sine,
                Waveform::Square => OscillatorType::Square,
                Waveform::Sawtooth => OscillatorType::Sawtooth,
                Waveform::Triangle => OscillatorType::Triangle,
            });
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }
    }
}

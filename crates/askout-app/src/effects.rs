//! Presentation effects derived from the flow step
//!
//! Floating glyphs, the confetti burst and the wiggling date glyph are purely
//! cosmetic: they are advanced by `Message::Tick` and read by the renderer,
//! but nothing in the flow ever reads them back.

use std::time::Duration;

use askout_core::FlowStep;
use rand::Rng;

/// Length of one float-up loop
pub const FLOAT_DURATION: Duration = Duration::from_secs(2);

/// Upper bound (exclusive) on the pause between float-up loops
pub const MAX_REPEAT_DELAY: Duration = Duration::from_secs(2);

/// Length of one wiggle cycle of the confirmed date glyph
pub const WIGGLE_PERIOD: Duration = Duration::from_millis(500);

/// Downward acceleration of confetti, in card heights per second squared
const CONFETTI_GRAVITY: f32 = 0.08;

/// Glyphs floating over the card for steps that have them
pub fn floating_glyphs_for(step: FlowStep) -> Option<[&'static str; 3]> {
    match step {
        FlowStep::Confirmed => Some(["💖", "😍", "🎉"]),
        FlowStep::Rejected => Some(["😢", "💔", "😿"]),
        FlowStep::Initial | FlowStep::DateOptions => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Floating glyphs
// ─────────────────────────────────────────────────────────────────────────────

/// One looping glyph: fades in and out while rising and drifting sideways.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingGlyph {
    pub glyph: &'static str,
    /// Final horizontal offset of each loop, in `[-1, 1)` half-widths
    pub drift: f32,
    /// Pause after each loop
    pub repeat_delay: Duration,
}

/// Where a floating glyph is at a given moment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphFrame {
    /// 0 = invisible, 1 = fully visible
    pub opacity: f32,
    /// 0 = resting position, 1 = top of the rise
    pub rise: f32,
    /// Current horizontal offset in `[-1, 1]` half-widths
    pub drift: f32,
}

impl GlyphFrame {
    pub const HIDDEN: GlyphFrame = GlyphFrame {
        opacity: 0.0,
        rise: 0.0,
        drift: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

impl FloatingGlyph {
    pub fn random(glyph: &'static str, rng: &mut impl Rng) -> Self {
        Self {
            glyph,
            drift: rng.gen_range(-1.0..1.0),
            repeat_delay: Duration::from_secs_f32(
                rng.gen_range(0.0..MAX_REPEAT_DELAY.as_secs_f32()),
            ),
        }
    }

    /// Sample the loop at `elapsed` since the glyph appeared.
    ///
    /// Opacity follows the keyframes `[0, 1, 0]` and the rise `[0, 0.5, 1]`
    /// across [`FLOAT_DURATION`], then the glyph stays hidden for its repeat
    /// delay before the next loop.
    pub fn frame_at(&self, elapsed: Duration) -> GlyphFrame {
        let cycle = FLOAT_DURATION + self.repeat_delay;
        let t = Duration::from_nanos((elapsed.as_nanos() % cycle.as_nanos()) as u64);
        if t >= FLOAT_DURATION {
            return GlyphFrame::HIDDEN;
        }

        let progress = t.as_secs_f32() / FLOAT_DURATION.as_secs_f32();
        let opacity = if progress < 0.5 {
            progress * 2.0
        } else {
            (1.0 - progress) * 2.0
        };

        GlyphFrame {
            opacity,
            rise: progress,
            drift: self.drift * progress,
        }
    }
}

/// The three glyphs of a confirmed/rejected card
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingGlyphs {
    pub glyphs: Vec<FloatingGlyph>,
}

impl FloatingGlyphs {
    /// Randomize glyphs for `step`; `None` if the step has no decoration.
    pub fn for_step(step: FlowStep, rng: &mut impl Rng) -> Option<Self> {
        floating_glyphs_for(step).map(|set| Self {
            glyphs: set
                .into_iter()
                .map(|glyph| FloatingGlyph::random(glyph, rng))
                .collect(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Confetti
// ─────────────────────────────────────────────────────────────────────────────

/// A single confetti piece.
///
/// Positions are normalized to the card: `x` in `[0, 1)` across, `y` in card
/// heights from the top (negative is above the card, > 1 has fallen out).
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Index into the renderer's confetti palette
    pub color: u8,
    /// Index into the renderer's confetti shapes
    pub shape: u8,
}

/// Non-recycling burst: pieces fall through once and are not respawned.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiBurst {
    pub particles: Vec<Particle>,
}

impl ConfettiBurst {
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(-0.4..0.0),
                vx: rng.gen_range(-0.08..0.08),
                vy: rng.gen_range(0.05..0.2),
                color: rng.gen_range(0..8),
                shape: rng.gen_range(0..4),
            })
            .collect();
        Self { particles }
    }

    /// Advance the simulation by `dt`; pieces that fell out are dropped.
    pub fn step(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        for p in &mut self.particles {
            p.vy += CONFETTI_GRAVITY * dt;
            p.x = (p.x + p.vx * dt).rem_euclid(1.0);
            p.y += p.vy * dt;
        }
        self.particles.retain(|p| p.y <= 1.0);
    }

    /// Every piece has fallen out of the card
    pub fn is_settled(&self) -> bool {
        self.particles.is_empty()
    }

    /// Pieces currently inside the card
    pub fn visible(&self) -> impl Iterator<Item = &Particle> {
        self.particles
            .iter()
            .filter(|piece| (0.0..=1.0).contains(&piece.y))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wiggle
// ─────────────────────────────────────────────────────────────────────────────

/// Column offset of the wiggling date glyph.
///
/// Approximates the rotation keyframes `[0, 10, -10, 0]` over
/// [`WIGGLE_PERIOD`]: rest, lean right, lean left, rest.
pub fn wiggle_offset(elapsed: Duration) -> i16 {
    let t = elapsed.as_nanos() % WIGGLE_PERIOD.as_nanos();
    let quarter = WIGGLE_PERIOD.as_nanos() / 4;
    match t / quarter {
        1 => 1,
        2 => -1,
        _ => 0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Effects state
// ─────────────────────────────────────────────────────────────────────────────

/// All cosmetic animation state for the card
#[derive(Debug, Clone, Default)]
pub struct EffectsState {
    /// Time spent in the current step
    pub step_elapsed: Duration,
    pub floating: Option<FloatingGlyphs>,
    pub confetti: Option<ConfettiBurst>,
}

impl EffectsState {
    /// Reset the step clock and re-randomize decorations for a new step
    pub fn enter_step(&mut self, step: FlowStep, rng: &mut impl Rng) {
        self.step_elapsed = Duration::ZERO;
        self.floating = FloatingGlyphs::for_step(step, rng);
    }

    pub fn start_confetti(&mut self, count: usize, rng: &mut impl Rng) {
        self.confetti = Some(ConfettiBurst::new(count, rng));
    }

    pub fn stop_confetti(&mut self) {
        self.confetti = None;
    }

    /// Advance every animation by `dt`
    pub fn advance(&mut self, dt: Duration) {
        self.step_elapsed += dt;
        if let Some(ref mut burst) = self.confetti {
            burst.step(dt);
        }
    }

    /// Current frames of the floating glyphs, paired with their glyph
    pub fn floating_frames(&self) -> Vec<(&'static str, GlyphFrame)> {
        self.floating
            .as_ref()
            .map(|f| {
                f.glyphs
                    .iter()
                    .map(|g| (g.glyph, g.frame_at(self.step_elapsed)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn wiggle(&self) -> i16 {
        wiggle_offset(self.step_elapsed)
    }
}

use crate::{Canvas, FadeCycle, FrameThrottle, GridConfig, Layout, Oscillator, Random, Viewport};
use log::trace;
use std::f64::consts::TAU;
use std::time::Instant;

pub const BACKGROUND_COLOR: [u8; 3] = [0, 0, 0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame arrived inside the frame lock; nothing changed.
    Skipped,
    Advanced,
    /// The timer passed a full turn and restarted at zero.
    Wrapped,
}

/// An N×N grid of oscillators sharing one phase timer. Resizing is handled by
/// building a new animator rather than adjusting this one.
#[derive(Debug)]
pub struct LissajousAnimator {
    layout: Layout,
    oscillators: Vec<Oscillator>,
    timer: f64,
    fade: FadeCycle,
    throttle: FrameThrottle,
}

impl LissajousAnimator {
    pub fn new(viewport: Viewport, config: &GridConfig, rand: &mut Random, now: Instant) -> Self {
        let layout = Layout::new(viewport, config);
        Self {
            oscillators: Self::build_oscillators(&layout, config, rand),
            layout,
            timer: 0.0,
            fade: FadeCycle::new(),
            throttle: FrameThrottle::new(config.throttle, config.min_frame_interval, now),
        }
    }

    fn build_oscillators(layout: &Layout, config: &GridConfig, rand: &mut Random) -> Vec<Oscillator> {
        let mut result = Vec::with_capacity(layout.num_oscillators());
        for col in 0..layout.count() {
            for row in 0..layout.count() {
                let origin = layout.origin(col, row);
                let color = config.palette.color(origin, layout.side(), rand);
                result.push(Oscillator::new(col, row, origin, layout.radius(), color));
            }
        }
        result
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn oscillators(&self) -> &[Oscillator] {
        &self.oscillators
    }

    /// Radians, always in `[0, 2π)`.
    pub fn timer(&self) -> f64 {
        self.timer
    }

    pub fn fade(&self) -> &FadeCycle {
        &self.fade
    }

    /// One frame: advance the timer, fade the surface, then draw every
    /// oscillator's latest stroke.
    pub fn tick<C: Canvas>(&mut self, now: Instant, canvas: &mut C) -> TickOutcome {
        let Some(factor) = self.throttle.factor(now) else {
            return TickOutcome::Skipped;
        };
        let outcome = self.advance_timer(factor);
        clear_frame(canvas, self.fade.clear_alpha());
        self.draw_oscillators(canvas);
        outcome
    }

    fn advance_timer(&mut self, factor: f64) -> TickOutcome {
        self.timer += self.layout.angular_step() * factor;
        if self.timer >= TAU {
            self.timer = 0.0;
            self.fade.on_wrap();
            TickOutcome::Wrapped
        } else {
            self.fade.on_advance();
            TickOutcome::Advanced
        }
    }

    fn draw_oscillators<C: Canvas>(&mut self, canvas: &mut C) {
        let radius = self.layout.radius();
        let thickness = self.layout.stroke_thickness();
        for oscillator in self.oscillators.iter_mut() {
            oscillator.advance(self.timer, radius);
            let (from, to) = oscillator.segment();
            canvas.stroke_segment(from, to, oscillator.color(), thickness);
        }
    }

    #[cfg(test)]
    fn set_timer(&mut self, timer: f64) {
        self.timer = timer;
    }
}

/// Paints the background over the surface. An alpha that is not a number skips
/// the clear for this frame and returns false.
pub fn clear_frame<C: Canvas>(canvas: &mut C, alpha: f64) -> bool {
    if alpha.is_nan() {
        trace!("Skipping clear, overlay alpha is not a number");
        return false;
    }
    canvas.fill_overlay(BACKGROUND_COLOR, alpha);
    true
}

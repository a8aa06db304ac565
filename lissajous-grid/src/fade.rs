use log::debug;

pub const FADE_INCREMENT: f64 = 0.0001;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FadePhase {
    /// Nothing is cleared; trails persist.
    #[default]
    Steady,
    /// The overlay grows more opaque every tick, wiping old trails.
    Fading,
}

/// Alternates between steady and fading phases, switching only when the
/// timer wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FadeCycle {
    phase: FadePhase,
    intensity: f64,
}

impl FadeCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    pub fn is_fading(&self) -> bool {
        self.phase == FadePhase::Fading
    }

    /// Not capped at 1: late in a long fading phase the overlay is fully opaque.
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn clear_alpha(&self) -> f64 {
        self.intensity
    }

    pub fn on_wrap(&mut self) {
        self.phase = match self.phase {
            FadePhase::Steady => FadePhase::Fading,
            FadePhase::Fading => {
                self.intensity = 0.0;
                FadePhase::Steady
            }
        };
        debug!("Fade cycle now {:?}", self.phase);
    }

    pub fn on_advance(&mut self) {
        if self.is_fading() {
            self.intensity += FADE_INCREMENT;
        }
    }
}

use crate::config::{DecayMode, ScrollParams};

/// Wheel-driven camera pan: wheel events feed a velocity that decays every frame
/// and is accumulated into an unbounded vertical offset.
#[derive(Clone, Debug, Default)]
pub struct ScrollIntegrator {
    pub velocity: f32,
    pub offset: f32,
}

impl ScrollIntegrator {
    /// Feed one wheel event, `delta_y` in pixels.
    pub fn push_wheel(&mut self, delta_y: f32, params: &ScrollParams) {
        self.velocity += delta_y * params.damping;
    }

    /// Advance one frame and return the new offset.
    pub fn step(&mut self, dt_sec: f32, params: &ScrollParams) -> f32 {
        match params.decay_mode {
            DecayMode::PerFrame => {
                self.velocity *= params.decay;
                self.offset += self.velocity;
            }
            DecayMode::TimeScaled { frame_interval_sec } => {
                let frames = dt_sec.max(0.0) / frame_interval_sec;
                self.velocity *= params.decay.powf(frames);
                self.offset += self.velocity * frames;
            }
        }
        self.offset
    }
}

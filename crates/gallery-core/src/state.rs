//! Interaction loop state: everything the frame driver reads and writes.
//!
//! Input handlers never touch surfaces or the camera directly. They turn DOM
//! events into [`InputEvent`]s and [`InteractionState::apply`] folds them into
//! the lightweight pieces of state (scroll velocity, pointer, viewport).
//! [`InteractionState::frame`] then runs the per-frame pipeline in a fixed
//! order: scroll integration, one ray query, pose update.

use crate::camera::Camera;
use crate::config::GalleryConfig;
use crate::error::ConfigError;
use crate::picking::{intersect_surfaces, IntersectionSet};
use crate::pose::{step_pose, SurfaceState};
use crate::scroll::ScrollIntegrator;
use crate::surface::Surface;
use glam::Vec2;

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        self.width.max(1.0) / self.height.max(1.0)
    }

    /// Convert a canvas-relative pixel position to normalized device
    /// coordinates: x grows to the right, y grows upward.
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.width.max(1.0)) * 2.0 - 1.0,
            -(y / self.height.max(1.0)) * 2.0 + 1.0,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Vertical wheel delta in pixels.
    Wheel { delta_y: f32 },
    /// Pointer position relative to the canvas, in CSS pixels.
    PointerMove { x: f32, y: f32 },
    Resize { width: f32, height: f32 },
}

/// Result of one frame, handed to the renderer.
#[derive(Clone, Debug)]
pub struct FrameReport {
    pub camera_y: f32,
    pub hits: IntersectionSet,
}

pub struct InteractionState {
    pub config: GalleryConfig,
    pub scroll: ScrollIntegrator,
    pub pointer: Vec2,
    pub viewport: Viewport,
    pub camera: Camera,
    pub surfaces: Vec<Surface>,
}

impl InteractionState {
    pub fn new(
        config: GalleryConfig,
        surfaces: Vec<Surface>,
        viewport: Viewport,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if surfaces.is_empty() {
            return Err(ConfigError::NoSurfaces);
        }
        let camera = Camera::new(&config.camera, viewport.aspect());
        Ok(Self {
            config,
            scroll: ScrollIntegrator::default(),
            pointer: Vec2::ZERO,
            viewport,
            camera,
            surfaces,
        })
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Wheel { delta_y } => {
                self.scroll.push_wheel(delta_y, &self.config.scroll);
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer = self.viewport.to_ndc(x, y);
            }
            InputEvent::Resize { width, height } => {
                self.viewport = Viewport { width, height };
                self.camera.aspect = self.viewport.aspect();
            }
        }
    }

    /// Overwrite the pointer with an already-normalized position.
    pub fn set_pointer_ndc(&mut self, ndc: Vec2) {
        self.pointer = ndc;
    }

    /// Surfaces under the current pointer, without mutating anything.
    pub fn intersections(&self) -> IntersectionSet {
        let ray = self.camera.ray_from_ndc(self.pointer);
        intersect_surfaces(&ray, &self.surfaces, self.config.layout.plane_size)
    }

    pub fn frame(&mut self, dt_sec: f32) -> FrameReport {
        self.camera.eye.y = self.scroll.step(dt_sec, &self.config.scroll);

        let hits = self.intersections();

        let params = &self.config.pose;
        for s in &mut self.surfaces {
            let state = SurfaceState::from_hit(hits.iter().any(|h| h.index == s.index));
            if state != s.state {
                log::debug!("[pose] surface {} -> {:?}", s.index, state);
                s.state = state;
            }
            s.pose = step_pose(s.pose, state.target(params), dt_sec, params);
        }

        FrameReport {
            camera_y: self.camera.eye.y,
            hits,
        }
    }
}

//! Animated background: drifting particles and a few floating shapes.
//!
//! Purely decorative. Positions are normalised to the panel rect and derived
//! from a fixed seed so the layout is stable between runs.

use egui::{Color32, Painter, Pos2, Rect, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use super::theme::SHAPE_COLORS;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    /// Normalised position, each axis in `0.0..1.0`.
    origin: Vec2,
    drift: f32,
    phase: f32,
    radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FloatingShape {
    origin: Vec2,
    color: Color32,
    scale: f32,
    speed: f32,
}

/// Fixed so the layout is identical on every launch.
const SCATTER_SEED: u64 = 0x9E37_79B9;

pub struct Backdrop {
    particles: Vec<Particle>,
    shapes: Vec<FloatingShape>,
}

impl Backdrop {
    pub fn new(particle_count: usize) -> Self {
        let mut rng = Pcg64::seed_from_u64(SCATTER_SEED);
        let particles = (0..particle_count)
            .map(|_| Particle {
                origin: Vec2::new(rng.random::<f32>(), rng.random::<f32>()),
                drift: rng.random_range(0.005..0.02),
                phase: rng.random::<f32>() * std::f32::consts::TAU,
                radius: rng.random_range(1.0..2.5),
            })
            .collect();

        let anchors = [(0.15, 0.25), (0.85, 0.7), (0.7, 0.15), (0.2, 0.75), (0.5, 0.88)];
        let scales = [0.8, 1.2, 0.6, 1.0, 0.9];
        let shapes = anchors
            .iter()
            .zip(scales)
            .zip(SHAPE_COLORS)
            .enumerate()
            .map(|(i, ((&(x, y), scale), color))| FloatingShape {
                origin: Vec2::new(x, y),
                color,
                scale,
                speed: 0.6 + i as f32 * 0.15,
            })
            .collect();

        Self { particles, shapes }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn paint(&self, painter: &Painter, rect: Rect, time: f64, particle_color: Color32) {
        let t = time as f32;
        let to_screen = |normalised: Vec2| -> Pos2 { rect.min + normalised * rect.size() };

        for shape in &self.shapes {
            let bob = Vec2::new(0.0, (t * shape.speed).sin() * 0.02);
            let radius = 28.0 * shape.scale;
            painter.circle_filled(to_screen(shape.origin + bob), radius, shape.color.gamma_multiply(0.35));
        }

        for particle in &self.particles {
            let offset = Vec2::new(
                (t * 0.3 + particle.phase).cos() * particle.drift,
                (t * 0.2 + particle.phase).sin() * particle.drift,
            );
            let twinkle = 0.5 + 0.5 * (t * 1.5 + particle.phase).sin();
            painter.circle_filled(
                to_screen(particle.origin + offset),
                particle.radius,
                particle_color.gamma_multiply(0.4 + 0.4 * twinkle),
            );
        }
    }
}

//! Drawing pass for the particle field, expressed against a small surface
//! trait so the pass can run without a real display.

use super::particles::{ParticleField, LINK_DISTANCE};

/// Minimal rendering surface: whatever can clear itself, stroke a line, and
/// fill a dot. The canvas 2D context is the production implementation.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, alpha: f64);
    fn dot(&mut self, x: f64, y: f64, radius: f64, alpha: f64);
}

/// Opacity of a connecting line between two particles `dist` apart.
/// Decays linearly, reaching zero exactly at [`LINK_DISTANCE`].
pub fn link_alpha(dist: f64) -> f64 {
    0.08 * (1.0 - dist / LINK_DISTANCE)
}

/// Renders one frame: clear, connecting lines for every close pair, then
/// the particle dots.
pub fn draw(field: &ParticleField, surface: &mut impl Surface) {
    let (width, height) = field.size();
    surface.clear(width, height);

    let particles = field.particles();
    for (i, p) in particles.iter().enumerate() {
        for q in &particles[i + 1..] {
            let dx = p.x - q.x;
            let dy = p.y - q.y;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < LINK_DISTANCE {
                surface.line(p.x, p.y, q.x, q.y, link_alpha(dist));
            }
        }
    }

    for p in particles {
        surface.dot(p.x, p.y, p.radius, p.alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::particles::{Particle, ParticleField, PARTICLE_COUNT};

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Line { alpha: f64 },
        Dot,
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.ops.push(Op::Clear);
        }

        fn line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, alpha: f64) {
            self.ops.push(Op::Line { alpha });
        }

        fn dot(&mut self, _x: f64, _y: f64, _radius: f64, _alpha: f64) {
            self.ops.push(Op::Dot);
        }
    }

    fn field_with(positions: &[(f64, f64)]) -> ParticleField {
        let mut rand = || 0.5;
        let mut field = ParticleField::new(1000.0, 1000.0, &mut rand);
        let template: Vec<Particle> = positions
            .iter()
            .map(|&(x, y)| Particle {
                x,
                y,
                vx: 0.0,
                vy: 0.0,
                radius: 1.0,
                alpha: 0.3,
            })
            .collect();
        // Overwrite the spawned set with a known layout, padding far apart so
        // the extras contribute no links.
        let spare: Vec<Particle> = (0..PARTICLE_COUNT - template.len())
            .map(|i| Particle {
                x: -10_000.0 - 500.0 * i as f64,
                y: -10_000.0,
                vx: 0.0,
                vy: 0.0,
                radius: 1.0,
                alpha: 0.3,
            })
            .collect();
        *field.particles_mut() = template.into_iter().chain(spare).collect();
        field
    }

    #[test]
    fn link_alpha_is_zero_at_the_threshold() {
        assert!(link_alpha(LINK_DISTANCE).abs() < 1e-12);
    }

    #[test]
    fn link_alpha_decreases_with_distance() {
        assert!(link_alpha(10.0) > link_alpha(60.0));
        assert!(link_alpha(60.0) > link_alpha(139.0));
        assert!((link_alpha(0.0) - 0.08).abs() < 1e-12);
    }

    #[test]
    fn close_pair_draws_one_line_and_clear_comes_first() {
        let field = field_with(&[(0.0, 0.0), (100.0, 0.0)]);
        let mut surface = RecordingSurface::default();
        draw(&field, &mut surface);

        assert_eq!(surface.ops[0], Op::Clear);
        let lines = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Line { .. }))
            .count();
        assert_eq!(lines, 1);
        let dots = surface.ops.iter().filter(|op| matches!(op, Op::Dot)).count();
        assert_eq!(dots, PARTICLE_COUNT);
    }

    #[test]
    fn distant_pair_draws_no_line() {
        let field = field_with(&[(0.0, 0.0), (200.0, 0.0)]);
        let mut surface = RecordingSurface::default();
        draw(&field, &mut surface);

        assert!(!surface.ops.iter().any(|op| matches!(op, Op::Line { .. })));
    }
}

//! Particle constellation state: a fixed set of drifting points that bounce
//! off the viewport edges and lean gently toward the pointer.

/// Number of particles in the field for the lifetime of the page.
pub const PARTICLE_COUNT: usize = 80;

/// Pairs closer than this many units get a connecting line.
pub const LINK_DISTANCE: f64 = 140.0;

/// Scale applied to the normalized pointer offset to form the parallax
/// velocity target.
pub const PARALLAX_SCALE: f64 = 0.002;

/// Fraction of the remaining gap to the parallax target blended in per
/// pointer event.
pub const PARALLAX_BLEND: f64 = 0.02;

/// A single drifting point.
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    /// Spawns a particle uniformly within `width` × `height`. `rand` must
    /// yield values in [0, 1).
    fn spawn(width: f64, height: f64, rand: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: rand() * width,
            y: rand() * height,
            vx: (rand() - 0.5) * 0.3,
            vy: (rand() - 0.5) * 0.3,
            radius: rand() * 1.5 + 0.3,
            alpha: rand() * 0.4 + 0.1,
        }
    }
}

/// The particle set plus the viewport bounds it bounces inside.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, rand: &mut impl FnMut() -> f64) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(width, height, rand))
            .collect();

        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    /// Advances every particle by one frame. A particle that has crossed a
    /// viewport edge gets the corresponding velocity component reflected;
    /// its position is left to drift back on following frames rather than
    /// being clamped.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if (p.x < 0.0 && p.vx < 0.0) || (p.x > self.width && p.vx > 0.0) {
                p.vx = -p.vx;
            }
            if (p.y < 0.0 && p.vy < 0.0) || (p.y > self.height && p.vy > 0.0) {
                p.vy = -p.vy;
            }
        }
    }

    /// Blends every particle's velocity toward the pointer-derived target.
    /// `nx`/`ny` are the pointer offsets from viewport center, normalized to
    /// [-1, 1].
    pub fn nudge_toward(&mut self, nx: f64, ny: f64) {
        let tx = nx * PARALLAX_SCALE;
        let ty = ny * PARALLAX_SCALE;

        for p in &mut self.particles {
            p.vx += (tx - p.vx) * PARALLAX_BLEND;
            p.vy += (ty - p.vy) * PARALLAX_BLEND;
        }
    }

    /// Updates the bounds after a viewport resize. Positions are not
    /// rescaled; particles stranded outside the new bounds come back via
    /// reflection.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deterministic stand-in for Math::random.
    fn seeded_rand() -> impl FnMut() -> f64 {
        let mut state = 0x2545_f491_4f6c_dd1du64;
        move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn field_holds_exactly_eighty_particles() {
        let field = ParticleField::new(1280.0, 720.0, &mut seeded_rand());
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn spawned_attributes_fall_in_range() {
        let field = ParticleField::new(1280.0, 720.0, &mut seeded_rand());
        for p in field.particles() {
            assert!((0.0..=1280.0).contains(&p.x));
            assert!((0.0..=720.0).contains(&p.y));
            assert!((-0.15..=0.15).contains(&p.vx));
            assert!((-0.15..=0.15).contains(&p.vy));
            assert!((0.3..=1.8).contains(&p.radius));
            assert!((0.1..=0.5).contains(&p.alpha));
        }
    }

    #[test]
    fn crossing_the_right_edge_reflects_horizontal_velocity() {
        let mut field = ParticleField::new(100.0, 100.0, &mut seeded_rand());
        field.particles[0] = Particle {
            x: 99.95,
            y: 50.0,
            vx: 0.1,
            vy: 0.0,
            radius: 1.0,
            alpha: 0.3,
        };

        field.step();
        let p = &field.particles()[0];
        assert!(p.x > 100.0, "one-frame overshoot is expected");
        assert!(p.vx < 0.0, "velocity should point back inside");

        field.step();
        assert!(field.particles()[0].x <= 100.0);
    }

    #[test]
    fn crossing_the_top_edge_reflects_vertical_velocity() {
        let mut field = ParticleField::new(100.0, 100.0, &mut seeded_rand());
        field.particles[0] = Particle {
            x: 50.0,
            y: 0.05,
            vx: 0.0,
            vy: -0.1,
            radius: 1.0,
            alpha: 0.3,
        };

        field.step();
        assert!(field.particles()[0].vy > 0.0);
        field.step();
        assert!(field.particles()[0].y >= 0.0);
    }

    #[test]
    fn nudge_blends_two_percent_toward_target() {
        let mut field = ParticleField::new(100.0, 100.0, &mut seeded_rand());
        field.particles[0].vx = 0.0;
        field.particles[0].vy = 0.0;

        field.nudge_toward(1.0, -1.0);
        let p = &field.particles()[0];
        let expected = PARALLAX_SCALE * PARALLAX_BLEND;
        assert!((p.vx - expected).abs() < 1e-12);
        assert!((p.vy + expected).abs() < 1e-12);
    }

    #[test]
    fn repeated_nudges_converge_on_the_target() {
        let mut field = ParticleField::new(100.0, 100.0, &mut seeded_rand());
        for _ in 0..600 {
            field.nudge_toward(1.0, 0.0);
        }
        for p in field.particles() {
            assert!((p.vx - PARALLAX_SCALE).abs() < 1e-5);
        }
    }

    #[test]
    fn resize_keeps_positions_and_updates_bounds() {
        let mut field = ParticleField::new(200.0, 200.0, &mut seeded_rand());
        let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

        field.resize(120.0, 90.0);
        assert_eq!(field.size(), (120.0, 90.0));
        let after: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, after);
    }
}

//! Ambient particle field: a grid of damped-spring point masses that scatter
//! away from the pointer and spring back to their origins.

use glam::Vec2;

use super::constants::*;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub origin: Vec2,
    pub vel: Vec2,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub spacing: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub return_strength: f32,
    pub friction: f32,
    pub max_velocity: f32,
    pub base_opacity: f32,
    pub glow_opacity_span: f32,
    pub settle_eps: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            spacing: FIELD_GRID_SPACING,
            repulsion_radius: FIELD_REPULSION_RADIUS,
            repulsion_strength: FIELD_REPULSION_STRENGTH,
            return_strength: FIELD_RETURN_STRENGTH,
            friction: FIELD_FRICTION,
            max_velocity: FIELD_MAX_VELOCITY,
            base_opacity: FIELD_BASE_OPACITY,
            glow_opacity_span: FIELD_GLOW_OPACITY_SPAN,
            settle_eps: FIELD_SETTLE_EPS,
        }
    }
}

pub struct ParticleField {
    pub params: FieldParams,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new(params: FieldParams) -> Self {
        Self {
            params,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    /// Wholesale grid rebuild. Resize never repositions incrementally: the
    /// old grid is discarded and a fresh one laid out at the new dimensions.
    pub fn rebuild(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let spacing = self.params.spacing;
        let cols = (width / spacing).ceil() as usize + 1;
        let rows = (height / spacing).ceil() as usize + 1;
        self.particles.reserve(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                let p = Vec2::new(
                    col as f32 * spacing + spacing * 0.5,
                    row as f32 * spacing + spacing * 0.5,
                );
                self.particles.push(Particle {
                    pos: p,
                    origin: p,
                    vel: Vec2::ZERO,
                });
            }
        }
    }

    /// Advance the simulation one frame. `pointer` is the hover position in
    /// field space, or None while the pointer is out of bounds.
    ///
    /// Returns false when the step was skipped: with every particle settled
    /// and the pointer idle there is nothing to integrate, and the caller
    /// can redraw the resting grid without running physics.
    pub fn step(&mut self, pointer: Option<Vec2>, pointer_idle: bool) -> bool {
        if pointer_idle && self.settled() {
            return false;
        }
        let p = self.params;
        for part in &mut self.particles {
            if let Some(m) = pointer {
                let away = part.pos - m;
                let dist = away.length();
                if dist < p.repulsion_radius {
                    let force = (p.repulsion_radius - dist) / p.repulsion_radius;
                    let dir = if dist > 1e-4 { away / dist } else { Vec2::X };
                    part.vel += dir * force * p.repulsion_strength;
                }
            }
            part.vel += (part.origin - part.pos) * p.return_strength;
            part.vel *= p.friction;
            part.vel.x = part.vel.x.clamp(-p.max_velocity, p.max_velocity);
            part.vel.y = part.vel.y.clamp(-p.max_velocity, p.max_velocity);
            part.pos += part.vel;
        }
        true
    }

    /// All particles within the settle threshold of their origin, with
    /// negligible velocity.
    pub fn settled(&self) -> bool {
        let eps_sq = self.params.settle_eps * self.params.settle_eps;
        self.particles
            .iter()
            .all(|q| q.pos.distance_squared(q.origin) < eps_sq && q.vel.length_squared() < eps_sq)
    }

    /// Draw opacity: base, boosted linearly with pointer proximity inside
    /// the repulsion radius.
    pub fn opacity(&self, index: usize, pointer: Option<Vec2>) -> f32 {
        let p = self.params;
        let base = p.base_opacity;
        let Some(m) = pointer else {
            return base;
        };
        let Some(part) = self.particles.get(index) else {
            return base;
        };
        let dist = part.pos.distance(m);
        if dist < p.repulsion_radius {
            base + (p.repulsion_radius - dist) / p.repulsion_radius * p.glow_opacity_span
        } else {
            base
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

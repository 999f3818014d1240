//! A single particle: position, velocity, fixed color and size, and a life
//! scalar.
//!
//! Steady-field particles keep `life` at 1 for their whole existence (the
//! field never births or kills them); emitter particles decay it each tick
//! and are culled at zero.

use crate::flow::field_angle;
use flowcanvas_core::{Palette, Pointer, Srgb, Xorshift64};
use glam::DVec2;

/// Velocity magnitude per axis for a freshly scattered particle.
const SCATTER_SPEED: f64 = 0.25;
/// Velocity magnitude per axis for a particle emitted at the pointer.
const EMIT_SPEED: f64 = 2.0;
/// Particle radius range for the steady field.
const SIZE_MIN: f64 = 1.0;
const SIZE_MAX: f64 = 3.0;
/// Base draw radius of an emitted particle; shrinks with remaining life.
const EMITTED_SIZE: f64 = 3.0;
/// Life lost per tick by an emitted particle.
const LIFE_DECAY: f64 = 0.02;
/// Fraction of the flow strength applied to velocity per tick.
const FLOW_ACCEL: f64 = 0.008;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub color: Srgb,
    pub size: f64,
    pub life: f64,
}

impl Particle {
    /// A steady-field particle scattered uniformly over the surface.
    pub fn scattered(rng: &mut Xorshift64, width: f64, height: f64, palette: &Palette) -> Self {
        Self {
            pos: DVec2::new(rng.next_range(0.0, width), rng.next_range(0.0, height)),
            vel: DVec2::new(
                rng.next_centered(SCATTER_SPEED),
                rng.next_centered(SCATTER_SPEED),
            ),
            color: palette.pick(rng),
            size: rng.next_range(SIZE_MIN, SIZE_MAX),
            life: 1.0,
        }
    }

    /// A short-lived particle spawned at the pointer.
    pub fn emitted(pointer: Pointer, rng: &mut Xorshift64, palette: &Palette) -> Self {
        Self {
            pos: pointer.pos(),
            vel: DVec2::new(rng.next_centered(EMIT_SPEED), rng.next_centered(EMIT_SPEED)),
            color: palette.pick(rng),
            size: EMITTED_SIZE,
            life: 1.0,
        }
    }

    /// Steers velocity along the flow field at the particle's current position.
    pub fn apply_flow(&mut self, time: f64, strength: f64) {
        let angle = field_angle(self.pos, time);
        self.vel += DVec2::from_angle(angle) * strength * FLOW_ACCEL;
    }

    /// Accelerates away from the pointer when inside `radius`, scaled by
    /// proximity. A coincident pointer (distance exactly zero) applies no
    /// force; the direction would be undefined.
    pub fn apply_repulsion(&mut self, pointer: Pointer, radius: f64, strength: f64) {
        let away = self.pos - pointer.pos();
        let dist = away.length();
        if dist > 0.0 && dist < radius {
            let force = (radius - dist) / radius * strength;
            self.vel += away / dist * force;
        }
    }

    /// Multiplicative velocity damping, the sole energy sink of the system.
    pub fn damp(&mut self, factor: f64) {
        self.vel *= factor;
    }

    /// Euler position step with toroidal re-wrap into [0, width) x [0, height).
    pub fn integrate_wrapped(&mut self, width: f64, height: f64) {
        self.pos += self.vel;
        self.pos.x = wrap(self.pos.x, width);
        self.pos.y = wrap(self.pos.y, height);
    }

    /// Euler position step without boundary handling (emitted particles drift
    /// freely and die before travel matters).
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Burns one tick of life.
    pub fn decay(&mut self) {
        self.life -= LIFE_DECAY;
    }

    /// True while the particle should stay in the pool.
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Draw radius of an emitted particle, shrinking with remaining life.
    pub fn emitted_radius(&self) -> f64 {
        EMITTED_SIZE * self.life.max(0.0)
    }
}

/// Remainder in [0, modulus). `rem_euclid` alone is not enough: for a tiny
/// negative value the remainder rounds up to the modulus itself, so fold
/// that case back to zero.
fn wrap(value: f64, modulus: f64) -> f64 {
    let r = value.rem_euclid(modulus);
    if r >= modulus {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> Xorshift64 {
        Xorshift64::new(42)
    }

    #[test]
    fn scattered_lands_inside_surface_with_small_velocity() {
        let mut r = rng();
        let palette = Palette::blossom();
        for _ in 0..500 {
            let p = Particle::scattered(&mut r, 800.0, 600.0, &palette);
            assert!((0.0..800.0).contains(&p.pos.x));
            assert!((0.0..600.0).contains(&p.pos.y));
            assert!(p.vel.x.abs() < SCATTER_SPEED && p.vel.y.abs() < SCATTER_SPEED);
            assert!((SIZE_MIN..SIZE_MAX).contains(&p.size));
            assert_eq!(p.life, 1.0);
        }
    }

    #[test]
    fn emitted_starts_at_pointer_with_full_life() {
        let mut r = rng();
        let p = Particle::emitted(Pointer::new(12.0, 34.0), &mut r, &Palette::coral());
        assert_eq!(p.pos, DVec2::new(12.0, 34.0));
        assert!(p.vel.x.abs() < EMIT_SPEED && p.vel.y.abs() < EMIT_SPEED);
        assert_eq!(p.life, 1.0);
    }

    #[test]
    fn repulsion_at_zero_distance_is_a_no_op() {
        let mut r = rng();
        let mut p = Particle::scattered(&mut r, 100.0, 100.0, &Palette::blossom());
        p.pos = DVec2::new(50.0, 50.0);
        let before = p.vel;
        p.apply_repulsion(Pointer::new(50.0, 50.0), 150.0, 0.5);
        assert_eq!(p.vel, before);
        assert!(p.vel.is_finite());
    }

    #[test]
    fn repulsion_pushes_directly_away_from_pointer() {
        let mut r = rng();
        let mut p = Particle::scattered(&mut r, 200.0, 200.0, &Palette::blossom());
        p.pos = DVec2::new(120.0, 100.0);
        p.vel = DVec2::ZERO;
        p.apply_repulsion(Pointer::new(100.0, 100.0), 150.0, 0.5);
        assert!(p.vel.x > 0.0, "should push toward +x, got {:?}", p.vel);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn repulsion_outside_radius_is_inert() {
        let mut r = rng();
        let mut p = Particle::scattered(&mut r, 10_000.0, 10_000.0, &Palette::blossom());
        p.pos = DVec2::new(5_000.0, 5_000.0);
        let before = p.vel;
        p.apply_repulsion(Pointer::new(0.0, 0.0), 150.0, 0.5);
        assert_eq!(p.vel, before);
    }

    #[test]
    fn wrap_keeps_position_in_half_open_bounds() {
        let mut r = rng();
        let mut p = Particle::scattered(&mut r, 100.0, 100.0, &Palette::blossom());
        p.pos = DVec2::new(99.5, 0.25);
        p.vel = DVec2::new(1.0, -1.0);
        p.integrate_wrapped(100.0, 100.0);
        assert!((0.0..100.0).contains(&p.pos.x), "x = {}", p.pos.x);
        assert!((0.0..100.0).contains(&p.pos.y), "y = {}", p.pos.y);
        // Exiting the right edge re-enters on the left, and vice versa.
        assert!(p.pos.x < 1.0);
        assert!(p.pos.y > 99.0);
    }

    #[test]
    fn wrap_survives_a_tiny_negative_overshoot() {
        // -1e-17 rem_euclid 800 rounds to exactly 800; the wrap must fold
        // that back into the half-open interval.
        let mut r = rng();
        let mut p = Particle::scattered(&mut r, 800.0, 600.0, &Palette::blossom());
        p.pos = DVec2::ZERO;
        p.vel = DVec2::new(-1e-17, -1e-17);
        p.integrate_wrapped(800.0, 600.0);
        assert!((0.0..800.0).contains(&p.pos.x), "x = {}", p.pos.x);
        assert!((0.0..600.0).contains(&p.pos.y), "y = {}", p.pos.y);
    }

    #[test]
    fn decay_kills_after_fifty_ticks() {
        let mut r = rng();
        let mut p = Particle::emitted(Pointer::new(0.0, 0.0), &mut r, &Palette::coral());
        let mut ticks = 0;
        while p.is_alive() {
            let before = p.life;
            p.decay();
            assert!(p.life < before, "life must strictly decrease");
            ticks += 1;
            assert!(ticks <= 50, "particle outlived its decay window");
        }
        assert_eq!(ticks, 50);
        assert!(p.emitted_radius() <= f64::EPSILON);
    }

    #[test]
    fn damping_shrinks_speed() {
        let mut r = rng();
        let mut p = Particle::scattered(&mut r, 100.0, 100.0, &Palette::blossom());
        p.vel = DVec2::new(2.0, -3.0);
        let before = p.vel.length();
        p.damp(0.99);
        assert!(p.vel.length() < before);
    }
}

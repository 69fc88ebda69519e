//! Property-based tests for the simulation populations using proptest.
//!
//! These check the invariants that must hold across arbitrary surfaces,
//! timesteps, and population targets, not just the fixture values.

use bevy::math::Vec2;
use proptest::prelude::*;

use crate::sim::black_hole::{lens_displacement, BlackHole, LENS_REACH, LENS_STRENGTH};
use crate::sim::comet::{make_comet, TAIL_CAP};
use crate::sim::particle::Particle;
use crate::sim::star::{make_star, Starfield};
use crate::test_utils::seeded_rng;
use crate::view::ViewExtent;

fn arb_extent() -> impl Strategy<Value = ViewExtent> {
    (320.0f32..3840.0, 240.0f32..2160.0, 1.0f32..2.0).prop_map(|(width, height, dpr)| {
        ViewExtent { width, height, dpr }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Star drift wraps into [0, W) x [0, H) for every surface and timestep.
    #[test]
    fn prop_star_positions_stay_in_bounds(
        extent in arb_extent(),
        seed in 0u64..1000,
        dt_ms in 0.0f32..33.0,
        frames in 1usize..200,
    ) {
        let mut star = make_star(&mut seeded_rng(seed), &extent);
        for _ in 0..frames {
            star.advance(dt_ms, &extent);
            prop_assert!((0.0..extent.width).contains(&star.pos.x));
            prop_assert!((0.0..extent.height).contains(&star.pos.y));
        }
    }

    /// Twinkle opacity is a valid alpha at any instant of the global clock.
    #[test]
    fn prop_twinkle_alpha_in_unit_interval(
        seed in 0u64..1000,
        t_ms in 0.0f64..1e8,
    ) {
        let extent = ViewExtent::default();
        let star = make_star(&mut seeded_rng(seed), &extent);
        let alpha = star.twinkle_alpha(t_ms);
        prop_assert!((0.0..=1.0).contains(&alpha), "alpha {} out of range", alpha);
    }

    /// Resizing the starfield always lands on exactly the requested size and
    /// never disturbs retained stars.
    #[test]
    fn prop_starfield_resize_is_exact(
        from in 0usize..600,
        to in 0usize..600,
        seed in 0u64..1000,
    ) {
        let extent = ViewExtent::default();
        let mut rng = seeded_rng(seed);
        let mut field = Starfield::default();
        field.resize_to(from, &mut rng, &extent);

        let kept = from.min(to);
        let prefix: Vec<Vec2> = field.stars[..kept].iter().map(|s| s.pos).collect();

        field.resize_to(to, &mut rng, &extent);
        prop_assert_eq!(field.stars.len(), to);
        for (star, pos) in field.stars.iter().zip(prefix) {
            prop_assert_eq!(star.pos, pos);
        }
    }

    /// Lensing displacement is bounded by its peak strength, points toward
    /// the hole, and vanishes at or beyond the reach boundary.
    #[test]
    fn prop_lens_displacement_bounded_and_inward(
        angle in 0.0f32..std::f32::consts::TAU,
        dist_factor in 0.01f32..6.0,
        radius in 10.0f32..200.0,
        dpr in 1.0f32..2.0,
    ) {
        let hole = BlackHole {
            center: Vec2::new(500.0, 400.0),
            radius,
        };
        let dir = Vec2::new(angle.cos(), angle.sin());
        let pos = hole.center + dir * (dist_factor * radius);
        let offset = lens_displacement(pos, &hole, dpr);

        prop_assert!(offset.length() <= LENS_STRENGTH * dpr + 1e-3);
        if dist_factor >= LENS_REACH {
            prop_assert_eq!(offset, Vec2::ZERO);
        } else {
            // Inward means opposite the outward radial direction.
            prop_assert!(offset.dot(dir) <= 0.0);
        }
    }

    /// A comet tail never exceeds its cap, whatever the step size.
    #[test]
    fn prop_comet_tail_bounded(
        seed in 0u64..1000,
        dt_ms in 0.01f32..33.0,
    ) {
        let extent = ViewExtent::default();
        let mut comet = make_comet(&mut seeded_rng(seed), &extent);
        comet.vel = Vec2::ZERO;
        comet.pos = extent.center();
        for _ in 0..300 {
            if !comet.advance(dt_ms, &extent) {
                break;
            }
            prop_assert!(comet.tail.len() <= TAIL_CAP);
        }
    }

    /// Particle life decreases strictly every positive step, and speed never
    /// grows under damping.
    #[test]
    fn prop_particle_life_and_speed_decay(
        vx in -5.0f32..5.0,
        vy in -5.0f32..5.0,
        dt_ms in 0.1f32..33.0,
    ) {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(vx, vy),
            life: 1.0,
            radius: 1.0,
            hue: 30.0,
        };
        let mut last_life = p.life;
        let mut last_speed = p.vel.length();
        while p.advance(dt_ms) {
            prop_assert!(p.life < last_life);
            prop_assert!(p.vel.length() <= last_speed + 1e-6);
            last_life = p.life;
            last_speed = p.vel.length();
        }
        prop_assert!(p.life <= 0.0);
    }
}

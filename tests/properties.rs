use grid_sim::config::{Rebound, SimConfig};
use grid_sim::{Engine, ParticleId, Vec2i};
use proptest::prelude::*;

type Seed = (i32, i32, i32, i32);

/// Board size plus particles placed anywhere on it with small velocities.
fn world() -> impl Strategy<Value = (i32, i32, Vec<Seed>)> {
    (3i32..16, 3i32..16).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            prop::collection::vec((0..w, 0..h, -2i32..=2, -2i32..=2), 0..16),
        )
    })
}

fn build(w: i32, h: i32, seeds: &[Seed], rebound: Rebound) -> Engine {
    let config = SimConfig {
        rebound,
        frame_interval_ms: 0,
        ..SimConfig::with_board(w, h, ' ')
    };
    let mut engine = Engine::with_config(config).unwrap();
    for &(x, y, vx, vy) in seeds {
        engine
            .add_particle(Vec2i::new(x, y), Some(Vec2i::new(vx, vy)), None)
            .unwrap();
    }
    engine
}

proptest! {
    #[test]
    fn particles_never_leave_the_board((w, h, seeds) in world(), frames in 1usize..8, step_back in any::<bool>()) {
        let rebound = if step_back { Rebound::StepBack } else { Rebound::Hold };
        let mut engine = build(w, h, &seeds, rebound);
        for _ in 0..frames {
            engine.update().unwrap();
            for p in engine.particles() {
                prop_assert!(p.position().within(w, h), "{} left a {}x{} board", p.position(), w, h);
            }
        }
    }

    #[test]
    fn collision_membership_is_mutual((w, h, seeds) in world()) {
        let mut engine = build(w, h, &seeds, Rebound::Hold);
        let before: Vec<Vec2i> = engine.particles().iter().map(|p| p.position()).collect();

        let report = engine.update().unwrap();

        for (i, pos) in before.iter().enumerate() {
            let shares_cell = before.iter().enumerate().any(|(j, other)| j != i && other == pos);
            prop_assert_eq!(report.collided_with_peer(ParticleId(i)), shares_cell);
        }
        for (i, _) in before.iter().enumerate() {
            let memberships = report.groups.iter().filter(|g| g.contains(ParticleId(i))).count();
            prop_assert!(memberships <= 1);
        }
    }

    #[test]
    fn collided_particles_freeze_and_bounce((w, h, seeds) in world()) {
        let mut engine = build(w, h, &seeds, Rebound::Hold);
        let before: Vec<(Vec2i, Vec2i)> =
            engine.particles().iter().map(|p| (p.position(), p.velocity())).collect();

        let report = engine.update().unwrap();

        for (i, &(pos, vel)) in before.iter().enumerate() {
            let now = &engine.particles()[i];
            if report.collided_with_peer(ParticleId(i)) {
                prop_assert_eq!(now.position(), pos);
                prop_assert_eq!(now.velocity(), -vel);
            } else {
                let next = pos + vel;
                let expected = if next.strictly_within(w, h) { next } else { pos };
                prop_assert_eq!(now.position(), expected);
                prop_assert_eq!(now.velocity(), vel);
            }
        }
    }

    #[test]
    fn board_marks_exactly_the_occupied_cells((w, h, seeds) in world(), frames in 1usize..5) {
        let mut engine = build(w, h, &seeds, Rebound::Hold);
        for _ in 0..frames {
            engine.update().unwrap();
        }
        for y in 0..h {
            for x in 0..w {
                let cell = Vec2i::new(x, y);
                let occupied = engine.particles().iter().any(|p| p.position() == cell);
                let expected = if occupied { '#' } else { ' ' };
                prop_assert_eq!(engine.get_tile(cell).unwrap(), expected);
            }
        }
    }
}

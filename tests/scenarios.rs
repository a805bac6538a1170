use grid_sim::init_config::InitConfig;
use grid_sim::{Engine, Error, Vec2i};

#[test]
fn head_on_pair_bounces_in_place() -> grid_sim::Result<()> {
    let mut engine = Engine::new(25, 25, ' ')?;
    let a = engine.add_particle(Vec2i::new(5, 5), Some(Vec2i::new(0, 1)), None)?;
    let b = engine.add_particle(Vec2i::new(5, 5), Some(Vec2i::new(0, -1)), None)?;

    let report = engine.update()?;

    assert_eq!(report.groups.len(), 1);
    assert_eq!(report.groups[0].members(), &[a, b]);
    assert_eq!(report.groups[0].position(), Vec2i::new(5, 5));
    for (id, vel) in [(a, Vec2i::new(0, -1)), (b, Vec2i::new(0, 1))] {
        let p = engine.particle(id).expect("registered particle");
        assert_eq!(p.position(), Vec2i::new(5, 5));
        assert_eq!(p.velocity(), vel);
    }
    Ok(())
}

#[test]
fn lone_particle_advances_and_is_drawn() -> grid_sim::Result<()> {
    let mut engine = Engine::new(25, 25, ' ')?;
    engine.add_particle(Vec2i::new(2, 4), None, None)?;

    engine.update()?;

    let rows: Vec<String> = engine.board().rows().map(|r| r.iter().collect()).collect();
    assert_eq!(rows[5], format!("  #{}", " ".repeat(22)));
    assert_eq!(rows.iter().filter(|r| r.contains('#')).count(), 1);
    Ok(())
}

#[test]
fn blocked_move_leaves_particle_in_place() -> grid_sim::Result<()> {
    let mut engine = Engine::new(25, 25, ' ')?;
    let id = engine.add_particle(Vec2i::new(1, 1), Some(Vec2i::new(-2, 0)), None)?;

    engine.update()?;

    assert_eq!(engine.particle(id).map(|p| p.position()), Some(Vec2i::new(1, 1)));
    Ok(())
}

#[test]
fn demo_scenario_settles_against_the_floor() -> grid_sim::Result<()> {
    let mut engine = InitConfig::demo().build_engine()?;
    for _ in 0..30 {
        engine.update()?;
    }
    // Everything falls straight down and parks on the last row
    let mut columns: Vec<i32> = engine.particles().iter().map(|p| p.position().x).collect();
    columns.sort_unstable();
    assert_eq!(columns, vec![1, 1, 1, 2, 10, 10]);
    assert!(engine.particles().iter().all(|p| p.position().y == 24));
    assert_eq!(engine.frame(), 30);
    Ok(())
}

#[test]
fn setup_errors_are_reported_not_swallowed() {
    assert!(matches!(Engine::new(-1, 5, ' '), Err(Error::InvalidArgument(_))));
    let mut engine = Engine::new(5, 5, ' ').expect("valid board");
    assert!(matches!(
        engine.add_particle(Vec2i::new(2, 2), None, Some(-4)),
        Err(Error::InvalidArgument(_))
    ));
}

use approx::assert_relative_eq;
use verlet::pworld::PWorld;
use verlet::V2;

#[test]
fn resting_point_without_gravity_stays_put() {
	let starts = [V2::new(0.0, 0.0), V2::new(3.5, -2.0), V2::new(-1.0, 7.25)];
	let mut pworld = PWorld::default().with_gravity(0.0);
	let handles: Vec<_> = starts
		.iter()
		.map(|&pos| pworld.add_point(pos).unwrap())
		.collect();
	pworld.integrate(1.0 / 60.0, 0.0);
	for (h, start) in handles.iter().zip(starts) {
		assert_eq!(pworld.point(*h).unwrap().get_pos(), start);
	}
}

#[test]
fn single_step_under_gravity() {
	let mut pworld = PWorld::default();
	let h = pworld.add_point(V2::new(0.0, 0.0)).unwrap();
	pworld.integrate(1.0, 9.8);
	let p = pworld.point(h).unwrap();
	assert_relative_eq!(p.get_pos(), V2::new(0.0, -9.8));
	assert_eq!(p.get_ppos(), V2::new(0.0, 0.0));
}

#[test]
fn velocity_carries_over() {
	let mut pworld = PWorld::default();
	let h = pworld.add_point(V2::new(0.0, 0.0)).unwrap();
	pworld.integrate(1.0, 1.0);
	pworld.integrate(1.0, 1.0);
	// -1, then -1 carried plus -1 from gravity
	assert_relative_eq!(pworld.point(h).unwrap().get_pos(), V2::new(0.0, -3.0));
	let p = pworld.point(h).unwrap();
	assert_relative_eq!(p.velocity(), V2::new(0.0, -2.0));
}

#[test]
fn free_fall_matches_closed_form() {
	let mut pworld = PWorld::default();
	let h = pworld.add_point(V2::new(0.0, 100.0)).unwrap();
	let dt = 1.0 / 60.0;
	for _ in 0..60 {
		pworld.integrate(dt, 9.8);
	}
	let y = pworld.point(h).unwrap().get_pos()[1];
	let expected = 100.0 - 0.5 * 9.8;
	assert!((y - expected).abs() < 0.5, "y = {}, expected ~ {}", y, expected);
}

#[test]
fn locked_point_ignores_integration() {
	let mut pworld = PWorld::default();
	let h = pworld.add_point(V2::new(2.0, 3.0)).unwrap();
	pworld.toggle_lock(h).unwrap();
	for _ in 0..100 {
		pworld.integrate(0.5, 9.8);
	}
	let p = pworld.point(h).unwrap();
	assert_eq!(p.get_pos(), V2::new(2.0, 3.0));
	assert_eq!(p.get_ppos(), V2::new(2.0, 3.0));
}

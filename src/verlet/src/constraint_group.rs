use crate::constraint::stick::Stick;
use crate::constraint::StickHandle;
use crate::error::{Result, SimError};
use crate::particle::Particle;
use protocol::pr_model::PrConstraint;

/// Constraint store. Sticks are relaxed in insertion order.
#[derive(Default)]
pub struct ConstraintGroup {
	epoch: u32,
	sticks: Vec<Stick>,
}

impl ConstraintGroup {
	pub(crate) fn add_stick(&mut self, stick: Stick) -> StickHandle {
		self.sticks.push(stick);
		StickHandle {
			index: self.sticks.len() - 1,
			epoch: self.epoch,
		}
	}

	pub fn get(&self, handle: StickHandle) -> Result<&Stick> {
		if handle.epoch != self.epoch {
			return Err(SimError::StaleHandle {
				index: handle.index,
			});
		}
		self.sticks.get(handle.index).ok_or(SimError::InvalidHandle {
			index: handle.index,
			count: self.sticks.len(),
		})
	}

	pub fn len(&self) -> usize {
		self.sticks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sticks.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (StickHandle, &Stick)> + '_ {
		let epoch = self.epoch;
		self.sticks
			.iter()
			.enumerate()
			.map(move |(index, s)| (StickHandle { index, epoch }, s))
	}

	/// One relaxation pass. Returns the number of degenerate sticks skipped.
	pub fn solve_constraints(&self, particles: &mut [Particle]) -> usize {
		self.sticks
			.iter()
			.filter(|stick| !stick.step(particles))
			.count()
	}

	pub fn relax(&self, particles: &mut [Particle], iteration: usize) {
		for _ in 0..iteration {
			self.solve_constraints(particles);
		}
	}

	pub(crate) fn clear(&mut self) {
		self.sticks.clear();
		self.epoch = self.epoch.wrapping_add(1);
	}

	pub fn pr_constraints(&self, particles: &[Particle]) -> Vec<PrConstraint> {
		self.sticks
			.iter()
			.enumerate()
			.map(|(id, s)| s.render(id, particles))
			.collect()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::particle_group::ParticleGroup;
	use crate::V2;
	use approx::assert_relative_eq;

	fn pair(a: V2, b: V2) -> (ParticleGroup, ConstraintGroup) {
		let mut pg = ParticleGroup::default();
		let mut cg = ConstraintGroup::default();
		pg.add_particle(a);
		pg.add_particle(b);
		cg.add_stick(Stick::new(0, 1, pg.particles()));
		(pg, cg)
	}

	#[test]
	fn drifted_pair_is_restored_about_center() {
		let (mut pg, cg) = pair(V2::new(0., 0.), V2::new(4., 0.));
		assert_relative_eq!(cg.sticks[0].rest_length(), 4.0);
		pg.particles_mut()[1].set_pos(V2::new(6., 0.));
		assert_eq!(cg.solve_constraints(pg.particles_mut()), 0);
		let ps = pg.particles();
		assert_relative_eq!(ps[0].get_pos(), V2::new(1., 0.));
		assert_relative_eq!(ps[1].get_pos(), V2::new(5., 0.));
	}

	#[test]
	fn chain_is_relaxed_in_insertion_order() {
		let mut pg = ParticleGroup::default();
		let mut cg = ConstraintGroup::default();
		pg.add_particle(V2::new(0., 0.));
		pg.add_particle(V2::new(1., 0.));
		pg.add_particle(V2::new(3., 0.));
		cg.add_stick(Stick::new(0, 1, pg.particles()));
		cg.add_stick(Stick::new(1, 2, pg.particles()));
		pg.particles_mut()[2].set_pos(V2::new(5., 0.));

		cg.relax(pg.particles_mut(), 1);
		let ps = pg.particles();
		assert_relative_eq!(ps[0].get_pos(), V2::new(0., 0.));
		assert_relative_eq!(ps[1].get_pos(), V2::new(2., 0.));
		assert_relative_eq!(ps[2].get_pos(), V2::new(4., 0.));

		// the second pass starts from what the first one left
		cg.relax(pg.particles_mut(), 1);
		let ps = pg.particles();
		assert_relative_eq!(ps[0].get_pos(), V2::new(0.5, 0.));
		assert_relative_eq!(ps[1].get_pos(), V2::new(1.75, 0.));
		assert_relative_eq!(ps[2].get_pos(), V2::new(3.75, 0.));
	}

	#[test]
	fn relaxation_leaves_previous_position_alone() {
		let (mut pg, cg) = pair(V2::new(0., 0.), V2::new(4., 0.));
		pg.particles_mut()[1].set_pos(V2::new(6., 0.));
		cg.relax(pg.particles_mut(), 5);
		assert_eq!(pg.particles()[0].get_ppos(), V2::new(0., 0.));
		assert_eq!(pg.particles()[1].get_ppos(), V2::new(4., 0.));
	}

	#[test]
	fn locked_endpoint_pulls_only_the_other() {
		let (mut pg, cg) = pair(V2::new(0., 0.), V2::new(4., 0.));
		pg.particles_mut()[0].toggle_lock();
		pg.particles_mut()[1].set_pos(V2::new(6., 0.));
		cg.solve_constraints(pg.particles_mut());
		let ps = pg.particles();
		assert_eq!(ps[0].get_pos(), V2::new(0., 0.));
		assert_relative_eq!(ps[1].get_pos(), V2::new(5., 0.));
	}

	#[test]
	fn coincident_endpoints_are_skipped() {
		let (mut pg, cg) = pair(V2::new(0., 0.), V2::new(1., 0.));
		pg.particles_mut()[1].set_pos(V2::new(0., 0.));
		assert_eq!(cg.solve_constraints(pg.particles_mut()), 1);
		for p in pg.particles() {
			assert!(p.get_pos()[0].is_finite() && p.get_pos()[1].is_finite());
			assert_eq!(p.get_pos(), V2::zeros());
		}
	}
}

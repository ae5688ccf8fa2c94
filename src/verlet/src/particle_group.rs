use crate::error::{Result, SimError};
use crate::particle::{Particle, PointHandle};
use crate::V2;
use protocol::pr_model::PrParticle;

/// Point store. Insertion order is preserved and doubles as handle index.
#[derive(Default)]
pub struct ParticleGroup {
	epoch: u32,
	particles: Vec<Particle>,
}

impl ParticleGroup {
	pub(crate) fn add_particle(&mut self, pos: V2) -> PointHandle {
		let index = self.particles.len();
		self.particles.push(Particle::new(pos));
		PointHandle {
			index,
			epoch: self.epoch,
		}
	}

	pub fn resolve(&self, handle: PointHandle) -> Result<usize> {
		if handle.epoch != self.epoch {
			return Err(SimError::StaleHandle {
				index: handle.index,
			});
		}
		if handle.index >= self.particles.len() {
			return Err(SimError::InvalidHandle {
				index: handle.index,
				count: self.particles.len(),
			});
		}
		Ok(handle.index)
	}

	pub fn get(&self, handle: PointHandle) -> Result<&Particle> {
		let idx = self.resolve(handle)?;
		Ok(&self.particles[idx])
	}

	pub(crate) fn get_mut(
		&mut self,
		handle: PointHandle,
	) -> Result<&mut Particle> {
		let idx = self.resolve(handle)?;
		Ok(&mut self.particles[idx])
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (PointHandle, &Particle)> + '_ {
		let epoch = self.epoch;
		self.particles
			.iter()
			.enumerate()
			.map(move |(index, p)| (PointHandle { index, epoch }, p))
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Verlet step for every unlocked point.
	pub fn integrate(&mut self, dt: f32, gravity: f32) {
		for p in self.particles.iter_mut() {
			p.update(dt, gravity);
		}
	}

	pub(crate) fn clear(&mut self) {
		self.particles.clear();
		self.epoch = self.epoch.wrapping_add(1);
	}

	pub fn pr_particles(&self) -> Vec<PrParticle> {
		self.particles.iter().map(|p| p.render()).collect()
	}
}

use crate::particle::Particle;
use protocol::pr_model::PrConstraint;

/// Rigid-length link between two distinct points.
///
/// Endpoints are indices into the point store of the same epoch, so every
/// correction lands on the one authoritative point record.
#[derive(Clone, Debug, PartialEq)]
pub struct Stick {
	ps: [usize; 2],
	l0: f32,
}

impl Stick {
	/// Rest length is taken from the current endpoint positions.
	pub(crate) fn new(p1: usize, p2: usize, particles: &[Particle]) -> Self {
		let dp = particles[p1].get_pos() - particles[p2].get_pos();
		let l0 = dp.magnitude();
		Self { ps: [p1, p2], l0 }
	}

	pub fn particles(&self) -> [usize; 2] {
		self.ps
	}

	pub fn rest_length(&self) -> f32 {
		self.l0
	}

	/// One Jakobsen-style correction. Returns false when the endpoints
	/// coincide and the stick was skipped.
	pub(crate) fn step(&self, particles: &mut [Particle]) -> bool {
		let [i1, i2] = self.ps;
		let pos1 = particles[i1].get_pos();
		let pos2 = particles[i2].get_pos();
		let dp = pos1 - pos2;
		let l = dp.magnitude();
		if !l.is_normal() {
			log::trace!("skip stick {}-{}: bad distance {}", i1, i2, l);
			return false;
		}
		// center and direction are fixed before either endpoint moves
		let center = (pos1 + pos2) / 2.0;
		let half = dp / l * (self.l0 / 2.0);
		if !particles[i1].is_locked() {
			particles[i1].set_pos(center + half);
		}
		if !particles[i2].is_locked() {
			particles[i2].set_pos(center - half);
		}
		true
	}

	pub fn render(&self, id: usize, particles: &[Particle]) -> PrConstraint {
		let [i1, i2] = self.ps;
		let p1 = particles[i1].get_pos();
		let p2 = particles[i2].get_pos();
		PrConstraint {
			id,
			particles: self.ps,
			ends: [[p1[0], p1[1]], [p2[0], p2[1]]],
		}
	}
}

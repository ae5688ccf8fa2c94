use crate::V2;
use protocol::pr_model::PrParticle;

/// Stable reference to a point, valid until the next clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointHandle {
	pub(crate) index: usize,
	pub(crate) epoch: u32,
}

impl PointHandle {
	pub fn index(&self) -> usize {
		self.index
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pos: V2,
	ppos: V2,
	locked: bool,
}

impl Particle {
	pub fn new(pos: V2) -> Self {
		Self {
			pos,
			ppos: pos,
			locked: false,
		}
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn get_ppos(&self) -> V2 {
		self.ppos
	}

	pub fn is_locked(&self) -> bool {
		self.locked
	}

	/// Displacement over the last step.
	pub fn velocity(&self) -> V2 {
		self.pos - self.ppos
	}

	pub(crate) fn set_pos(&mut self, pos: V2) {
		self.pos = pos;
	}

	// zeroes the stored velocity in both directions
	pub(crate) fn toggle_lock(&mut self) -> bool {
		self.locked = !self.locked;
		self.ppos = self.pos;
		self.locked
	}

	pub(crate) fn update(&mut self, dt: f32, gravity: f32) {
		if self.locked {
			return;
		}
		let ppos = self.pos;
		let accel = V2::new(0., -gravity);
		let dp = self.pos - self.ppos + accel * dt * dt;
		self.pos += dp;
		self.ppos = ppos;
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1]],
			locked: self.locked,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn toggle_lock_resets_velocity() {
		let mut p = Particle::new(V2::new(0., 0.));
		p.update(1.0, 2.0);
		p.update(1.0, 2.0);
		assert!(p.velocity().magnitude() > 0.);
		assert!(p.toggle_lock());
		assert_eq!(p.velocity(), V2::zeros());
		assert!(!p.toggle_lock());
		assert_eq!(p.velocity(), V2::zeros());
	}
}

// pr_model: Physical model for rendering

#[derive(Clone, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f32; 2],
	pub locked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrConstraint {
	pub id: usize,
	pub particles: [usize; 2],
	pub ends: [[f32; 2]; 2],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	pub constraints: Vec<PrConstraint>,
}

impl PrModel {
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty() && self.constraints.is_empty()
	}

	/// Line segments in draw order, one per stick.
	pub fn segments(&self) -> impl Iterator<Item = [[f32; 2]; 2]> + '_ {
		self.constraints.iter().map(|c| c.ends)
	}
}

use log::{debug, info};

use crate::constraint::stick::Stick;
use crate::constraint::StickHandle;
use crate::constraint_group::ConstraintGroup;
use crate::controller_message::ControllerMessage;
use crate::error::{Result, SimError};
use crate::particle::{Particle, PointHandle};
use crate::particle_group::ParticleGroup;
use crate::V2;
use protocol::pr_model::PrModel;
use protocol::user_event::UpdateInfo;

/// Simulation controller: owns both stores and the run state.
///
/// A frame is one integration followed by `iteration` relaxation passes.
/// Nothing is simulated until [`PWorld::start`] is called; [`PWorld::clear`]
/// empties the scene and goes back to idle.
pub struct PWorld {
	pub dt: f32,
	pub gravity: f32,
	pub iteration: usize,
	running: bool,

	pg: ParticleGroup,
	cg: ConstraintGroup,
}

impl Default for PWorld {
	fn default() -> Self {
		Self {
			dt: 1.0 / 60.0,
			gravity: 9.8,
			iteration: 10,
			running: false,

			pg: ParticleGroup::default(),
			cg: ConstraintGroup::default(),
		}
	}
}

impl PWorld {
	pub fn with_dt(mut self, dt: f32) -> Self {
		self.dt = dt;
		self
	}

	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_iteration(mut self, iteration: usize) -> Self {
		self.iteration = iteration;
		self
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn start(&mut self) {
		if !self.running {
			info!(
				"start: {} points, {} sticks",
				self.pg.len(),
				self.cg.len()
			);
			self.running = true;
		}
	}

	pub fn clear(&mut self) {
		info!("clear");
		self.pg.clear();
		self.cg.clear();
		self.running = false;
	}

	pub fn add_point(&mut self, pos: V2) -> Result<PointHandle> {
		if !pos.iter().all(|x| x.is_finite()) {
			return Err(SimError::NonFinitePosition);
		}
		let handle = self.pg.add_particle(pos);
		debug!("add point {} at {:?}", handle.index(), pos);
		Ok(handle)
	}

	/// Returns the new locked state.
	pub fn toggle_lock(&mut self, handle: PointHandle) -> Result<bool> {
		let locked = self.pg.get_mut(handle)?.toggle_lock();
		debug!("point {} locked: {}", handle.index(), locked);
		Ok(locked)
	}

	pub fn add_constraint(
		&mut self,
		a: PointHandle,
		b: PointHandle,
	) -> Result<StickHandle> {
		let i1 = self.pg.resolve(a)?;
		let i2 = self.pg.resolve(b)?;
		if i1 == i2 {
			return Err(SimError::SelfLink { index: i1 });
		}
		let stick = Stick::new(i1, i2, self.pg.particles());
		// far apart finite points can still overflow the length
		if !stick.rest_length().is_finite() {
			return Err(SimError::NonFiniteLength { a: i1, b: i2 });
		}
		debug!("add stick {}-{} l0 {}", i1, i2, stick.rest_length());
		Ok(self.cg.add_stick(stick))
	}

	pub fn apply(&mut self, msg: ControllerMessage) -> Result<()> {
		match msg {
			ControllerMessage::Start => self.start(),
			ControllerMessage::Clear => self.clear(),
			ControllerMessage::AddPoint(pos) => {
				self.add_point(pos)?;
			}
			ControllerMessage::ToggleLock(h) => {
				self.toggle_lock(h)?;
			}
			ControllerMessage::AddStick(a, b) => {
				self.add_constraint(a, b)?;
			}
		}
		Ok(())
	}

	/// Integrator entry point; ignores the run state.
	pub fn integrate(&mut self, dt: f32, gravity: f32) {
		self.pg.integrate(dt, gravity);
	}

	/// Solver entry point; ignores the run state.
	pub fn relax(&mut self, iteration: usize) {
		self.cg.relax(self.pg.particles_mut(), iteration);
	}

	fn update_frame(&mut self, dt: f32) {
		self.integrate(dt, self.gravity);
		self.relax(self.iteration);
	}

	/// Advance one frame with the configured dt.
	pub fn step(&mut self) -> bool {
		self.step_dt(self.dt)
	}

	/// Advance one frame with a caller-supplied dt.
	pub fn step_dt(&mut self, dt: f32) -> bool {
		if !self.running || !dt.is_finite() || dt <= 0f32 {
			return false;
		}
		self.update_frame(dt);
		true
	}

	pub fn point(&self, handle: PointHandle) -> Result<&Particle> {
		self.pg.get(handle)
	}

	pub fn points(
		&self,
	) -> impl Iterator<Item = (PointHandle, &Particle)> + '_ {
		self.pg.iter()
	}

	pub fn sticks(&self) -> impl Iterator<Item = (StickHandle, &Stick)> + '_ {
		self.cg.iter()
	}

	pub fn stick_endpoints(&self, handle: StickHandle) -> Result<(V2, V2)> {
		let [i1, i2] = self.cg.get(handle)?.particles();
		let ps = self.pg.particles();
		Ok((ps[i1].get_pos(), ps[i2].get_pos()))
	}

	pub fn point_count(&self) -> usize {
		self.pg.len()
	}

	pub fn stick_count(&self) -> usize {
		self.cg.len()
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			particles: self.pg.pr_particles(),
			constraints: self.cg.pr_constraints(self.pg.particles()),
		}
	}

	pub fn update_info(&self) -> UpdateInfo {
		UpdateInfo {
			particle_len: self.pg.len(),
			constraint_len: self.cg.len(),
			running: self.running,
		}
	}
}

use log::warn;

use protocol::user_event::{Button, InputEvent, KeyCommand};
use protocol::V2;
use verlet::controller_message::ControllerMessage;
use verlet::pworld::PWorld;
use verlet::PointHandle;

/// Turns pointer and key events into edit commands.
///
/// Primary press on empty space adds a point, primary press on a point
/// starts a drag, and releasing over a different point links the two.
/// Secondary press on a point toggles its lock.
pub struct Editor {
	pick_radius: f32,
	drag_start: Option<PointHandle>,
}

impl Default for Editor {
	fn default() -> Self {
		Self {
			pick_radius: 0.25,
			drag_start: None,
		}
	}
}

impl Editor {
	pub fn with_pick_radius(mut self, pick_radius: f32) -> Self {
		self.pick_radius = pick_radius;
		self
	}

	pub fn dragging(&self) -> Option<PointHandle> {
		self.drag_start
	}

	/// First point in insertion order within the pick radius.
	pub fn pick(&self, pworld: &PWorld, c: V2) -> Option<PointHandle> {
		pworld
			.points()
			.find(|(_, p)| (p.get_pos() - c).magnitude() < self.pick_radius)
			.map(|(h, _)| h)
	}

	/// Applies the command derived from `event` and returns it. Rejected
	/// commands are logged and yield `None`.
	pub fn handle(
		&mut self,
		pworld: &mut PWorld,
		event: InputEvent,
	) -> Option<ControllerMessage> {
		let msg = self.translate(pworld, event)?;
		if let Err(e) = pworld.apply(msg.clone()) {
			warn!("rejected {:?}: {}", msg, e);
			return None;
		}
		Some(msg)
	}

	fn translate(
		&mut self,
		pworld: &PWorld,
		event: InputEvent,
	) -> Option<ControllerMessage> {
		match event {
			InputEvent::PointerDown {
				button: Button::Primary,
				pos,
			} => match self.pick(pworld, pos) {
				Some(h) => {
					self.drag_start = Some(h);
					None
				}
				None => Some(ControllerMessage::AddPoint(pos)),
			},
			InputEvent::PointerDown {
				button: Button::Secondary,
				pos,
			} => self.pick(pworld, pos).map(ControllerMessage::ToggleLock),
			InputEvent::PointerUp {
				button: Button::Primary,
				pos,
			} => {
				let start = self.drag_start.take()?;
				let end = self.pick(pworld, pos)?;
				if start == end {
					return None;
				}
				Some(ControllerMessage::AddStick(start, end))
			}
			InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. } => {
				None
			}
			InputEvent::Key(KeyCommand::Start) => {
				Some(ControllerMessage::Start)
			}
			InputEvent::Key(KeyCommand::Clear) => {
				self.drag_start = None;
				Some(ControllerMessage::Clear)
			}
		}
	}
}

use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
	Primary,
	Secondary,
	Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
	Start,
	Clear,
}

/// Input already projected into world coordinates by the frontend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
	PointerDown { button: Button, pos: V2 },
	PointerUp { button: Button, pos: V2 },
	Key(KeyCommand),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateInfo {
	pub particle_len: usize,
	pub constraint_len: usize,
	pub running: bool,
}

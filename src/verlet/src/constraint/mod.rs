pub mod stick;

/// Stable reference to a stick, valid until the next clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StickHandle {
	pub(crate) index: usize,
	pub(crate) epoch: u32,
}

impl StickHandle {
	pub fn index(&self) -> usize {
		self.index
	}
}

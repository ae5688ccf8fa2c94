use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
	#[error("handle index {index} out of bounds (count: {count})")]
	InvalidHandle { index: usize, count: usize },
	#[error("handle {index} was invalidated by a clear")]
	StaleHandle { index: usize },
	#[error("cannot link point {index} to itself")]
	SelfLink { index: usize },
	#[error("point position is not finite")]
	NonFinitePosition,
	#[error("stick {a}-{b} has no finite rest length")]
	NonFiniteLength { a: usize, b: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;

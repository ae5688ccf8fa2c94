use crate::particle::PointHandle;
use crate::V2;

#[derive(Clone, Debug, PartialEq)]
pub enum ControllerMessage {
	Start,
	Clear,
	AddPoint(V2),
	ToggleLock(PointHandle),
	AddStick(PointHandle, PointHandle),
}

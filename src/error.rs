use thiserror::Error;

use crate::detour::Stop;
use crate::geo::Axis;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DetourError {
    #[error("invalid {axis} for point {stop}: {value}")]
    InvalidCoordinate { stop: Stop, axis: Axis, value: f64 },
}

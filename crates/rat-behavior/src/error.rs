use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BehaviorError {
    #[error("{name} must lie in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error("speed range [{min}, {max}] is invalid")]
    SpeedRange { min: i32, max: i32 },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;

pub(crate) fn check_probability(name: &'static str, value: f64) -> BehaviorResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(BehaviorError::Probability { name, value })
    }
}

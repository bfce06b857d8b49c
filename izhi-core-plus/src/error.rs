use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// Structurally invalid driver input (empty chain, zero steps, ...)
    InvalidInput(&'static str),
    /// Fixed-capacity buffer exhausted
    Capacity,
    /// A parameter or drive value was NaN or infinite
    NonFinite(&'static str),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            ModelError::Capacity => write!(f, "capacity exceeded"),
            ModelError::NonFinite(msg) => write!(f, "non-finite value: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModelError {}

pub type ModelResult<T, E = ModelError> = core::result::Result<T, E>;

#[cfg(test)]
#[cfg(feature = "std")]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            format!("{}", ModelError::InvalidInput("bad")),
            "invalid input: bad"
        );
        assert_eq!(format!("{}", ModelError::Capacity), "capacity exceeded");
        assert_eq!(
            format!("{}", ModelError::NonFinite("params")),
            "non-finite value: params"
        );
    }

    #[test]
    fn result_round_trip() {
        fn may_fail(ok: bool) -> ModelResult<u32> {
            if ok {
                Ok(7)
            } else {
                Err(ModelError::InvalidInput("fail"))
            }
        }
        assert_eq!(may_fail(true).unwrap(), 7);
        assert!(may_fail(false).is_err());
    }
}

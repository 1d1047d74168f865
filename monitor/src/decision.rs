use std::fmt;

/// Outcome of a single evaluation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Continue,
    Stop,
}

impl Decision {
    #[inline]
    pub fn should_stop(self) -> bool {
        matches!(self, Decision::Stop)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Continue => write!(f, "continue"),
            Decision::Stop => write!(f, "stop"),
        }
    }
}

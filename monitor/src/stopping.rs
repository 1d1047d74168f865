use crate::decision::Decision;
use crate::error::MonitorError;

/// Tracks the lowest loss seen so far and signals a stop once the loss has
/// failed to improve for `patience` consecutive evaluations.
///
/// The monitor never resets itself after a stop. Callers halt their own loop;
/// further calls keep counting until a new minimum shows up.
#[derive(Debug, Clone)]
pub struct StoppingMonitor {
    patience: u64,
    steps_since_last_improvement: u64,
    lowest_loss: f64,
    evaluations: u64,
    improved_on_last_step: bool,
}

impl StoppingMonitor {
    pub fn new(patience: u64) -> Result<Self, MonitorError> {
        if patience == 0 {
            return Err(MonitorError::InvalidConfiguration {
                reason: "patience must be a positive integer, got 0".to_string(),
            });
        }

        Ok(Self {
            patience,
            steps_since_last_improvement: 0,
            lowest_loss: f64::INFINITY,
            evaluations: 0,
            improved_on_last_step: false,
        })
    }

    /// Records this step's loss and reports whether training should stop.
    ///
    /// Only a loss strictly below the best one counts as an improvement, so
    /// NaN is always a non-improving step.
    pub fn record_and_evaluate(&mut self, loss: f64) -> Decision {
        self.evaluations += 1;

        if loss < self.lowest_loss {
            self.lowest_loss = loss;
            self.steps_since_last_improvement = 0;
            self.improved_on_last_step = true;
        } else {
            self.steps_since_last_improvement += 1;
            self.improved_on_last_step = false;
        }

        log::trace!(
            "Evaluation {}: loss {:.6}, best {:.6}, {}/{} without improvement",
            self.evaluations,
            loss,
            self.lowest_loss,
            self.steps_since_last_improvement,
            self.patience
        );

        if self.is_exhausted() {
            Decision::Stop
        } else {
            Decision::Continue
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.steps_since_last_improvement >= self.patience
    }

    pub fn patience(&self) -> u64 {
        self.patience
    }

    pub fn steps_since_last_improvement(&self) -> u64 {
        self.steps_since_last_improvement
    }

    /// Positive infinity until the first improving step.
    pub fn lowest_loss(&self) -> f64 {
        self.lowest_loss
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    // Used by training loops to decide when to checkpoint
    pub fn improved_on_last_step(&self) -> bool {
        self.improved_on_last_step
    }
}

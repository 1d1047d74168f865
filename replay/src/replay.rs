use monitor::{Decision, StoppingMonitor};

use crate::summary::Summary;

pub struct Replay {
    monitor: StoppingMonitor,
    run_out: bool,
}

impl Replay {
    pub fn new(monitor: StoppingMonitor, run_out: bool) -> Self {
        Self { monitor, run_out }
    }

    pub fn run(&mut self, losses: &[f64]) -> Summary {
        let mut summary = Summary {
            epochs_available: losses.len(),
            ..Summary::default()
        };

        for (idx, &loss) in losses.iter().enumerate() {
            let epoch = idx + 1;
            let decision = self.monitor.record_and_evaluate(loss);
            summary.epochs_evaluated = epoch;

            if self.monitor.improved_on_last_step() {
                summary.best = Some((epoch, loss));
                log::info!("Epoch {}: loss improved to {:.6}", epoch, loss);
            } else {
                log::debug!(
                    "Epoch {}: loss {:.6}, no improvement for {}/{} epochs",
                    epoch,
                    loss,
                    self.monitor.steps_since_last_improvement(),
                    self.monitor.patience()
                );
            }

            if decision == Decision::Stop && summary.stopped_at.is_none() {
                summary.stopped_at = Some(epoch);
                log::info!("Early stopping after {} epochs", epoch);

                if !self.run_out {
                    break;
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(patience: u64, run_out: bool, losses: &[f64]) -> Summary {
        let monitor = StoppingMonitor::new(patience).unwrap();
        Replay::new(monitor, run_out).run(losses)
    }

    #[test]
    fn test_halts_at_first_stop() {
        let summary = replay(3, false, &[5.0, 4.0, 4.0, 4.0, 4.0, 1.0]);
        assert_eq!(summary.epochs_available, 6);
        assert_eq!(summary.epochs_evaluated, 5);
        assert_eq!(summary.best, Some((2, 4.0)));
        assert_eq!(summary.stopped_at, Some(5));
    }

    #[test]
    fn test_run_out_keeps_first_stop() {
        let summary = replay(3, true, &[5.0, 4.0, 4.0, 4.0, 4.0, 1.0, 2.0]);
        assert_eq!(summary.epochs_evaluated, 7);
        assert_eq!(summary.best, Some((6, 1.0)));
        assert_eq!(summary.stopped_at, Some(5));
    }

    #[test]
    fn test_never_stops_on_improving_series() {
        let summary = replay(1, false, &[3.0, 2.0, 1.0, 0.5]);
        assert_eq!(summary.epochs_evaluated, 4);
        assert_eq!(summary.best, Some((4, 0.5)));
        assert_eq!(summary.stopped_at, None);
    }

    #[test]
    fn test_nan_series_has_no_best() {
        let summary = replay(2, false, &[f64::NAN, f64::NAN, 1.0]);
        assert_eq!(summary.epochs_evaluated, 2);
        assert_eq!(summary.best, None);
        assert_eq!(summary.stopped_at, Some(2));
    }

    #[test]
    fn test_empty_series() {
        let summary = replay(2, false, &[]);
        assert_eq!(summary, Summary::default());
    }
}

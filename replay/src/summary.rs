use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub epochs_evaluated: usize,
    pub epochs_available: usize,
    pub best: Option<(usize, f64)>,
    pub stopped_at: Option<usize>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Replay Summary")?;
        writeln!(f, "==============")?;
        writeln!(
            f,
            "Epochs Evaluated: {}/{}",
            self.epochs_evaluated, self.epochs_available
        )?;

        match self.best {
            Some((epoch, loss)) => writeln!(f, "Best Loss: {:.6} (epoch {})", loss, epoch)?,
            None => writeln!(f, "Best Loss: none")?,
        }

        match self.stopped_at {
            Some(epoch) => writeln!(f, "Early Stop: epoch {}", epoch)?,
            None => writeln!(f, "Early Stop: not triggered")?,
        }

        Ok(())
    }
}

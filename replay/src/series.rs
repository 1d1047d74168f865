use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::num::ParseFloatError;
use std::path::Path;

#[derive(Debug)]
pub struct ParseError {
    line: usize,
    text: String,
    source: ParseFloatError,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: could not parse '{}' as a loss ({})",
            self.line, self.text, self.source
        )
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

pub fn load(path: Option<&Path>) -> Result<Vec<f64>, Box<dyn Error>> {
    let losses = match path {
        Some(path) => {
            log::info!("Reading losses from {:?}", path);
            read(File::open(path)?)?
        }
        None => {
            log::info!("Reading losses from stdin");
            read(io::stdin().lock())?
        }
    };

    log::info!("Loaded {} losses", losses.len());
    Ok(losses)
}

// One loss per line; blank lines and '#' comments are skipped
pub fn read<R: Read>(reader: R) -> Result<Vec<f64>, Box<dyn Error>> {
    let mut losses = Vec::new();

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let loss = text.parse::<f64>().map_err(|source| ParseError {
            line: idx + 1,
            text: text.to_string(),
            source,
        })?;
        losses.push(loss);
    }

    Ok(losses)
}

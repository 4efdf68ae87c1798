use std::io::{BufRead, Write};

use super::error::{InputField, ReportError};

/// Line-based prompt/answer channel over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` without a newline and read one trimmed line back
    pub fn prompt(&mut self, message: &str) -> Result<String, ReportError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and then fail parsing like any other typo
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(ReportError::EndOfInput);
        }

        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    pub fn prompt_number(&mut self, message: &str, field: InputField) -> Result<f64, ReportError> {
        let answer = self.prompt(message)?;
        parse_number(field, &answer)
    }
}

/// Parse a finite number typed by the user
pub fn parse_number(field: InputField, text: &str) -> Result<f64, ReportError> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ReportError::InvalidNumber {
            field,
            input: text.to_string(),
        }),
    }
}

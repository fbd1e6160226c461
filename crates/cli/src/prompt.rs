//! Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};

/// Writes prompts and reads one trimmed line per answer.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `label` and read the answer, trimmed.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until `parse` accepts the answer, reporting each rejection.
    ///
    /// Returns `None` if the input runs out first.
    pub fn ask_until<T, E: core::fmt::Display>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.ask(label)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.say(&format!("=> Error: {err}, please try again"))?,
            }
        }
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Write `text` as-is.
    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_trims_and_reports_end_of_input() {
        let mut p = Prompter::new(Cursor::new("  hello \n"), Vec::new());

        assert_eq!(p.ask("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(p.ask("> ").unwrap(), None);
    }

    #[test]
    fn ask_until_reprompts_on_rejection() {
        let mut p = Prompter::new(Cursor::new("x\n-3\n7\n"), Vec::new());

        let value = p
            .ask_until("n: ", |s| match s.parse::<i32>() {
                Ok(v) if v > 0 => Ok(v),
                _ => Err("not positive"),
            })
            .unwrap();

        assert_eq!(value, Some(7));
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("n: ").count(), 3);
        assert_eq!(out.matches("=> Error: not positive").count(), 2);
    }
}

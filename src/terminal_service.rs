use anyhow::Result;
use std::io::{stdout, Stdout, Write};
use crossterm::ExecutableCommand;
use crossterm::style::{Color, ResetColor, SetForegroundColor};

#[derive(Debug)]
pub struct TerminalService {
    stdout: Stdout
}

impl Default for TerminalService {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalService {

    pub fn new() -> Self {
        Self {
            stdout: stdout()
        }
    }

    pub fn log_heading(&mut self, text: &str) -> Result<()> {
        self.stdout.execute(SetForegroundColor(Color::Green))?;
        writeln!(self.stdout, "{}", text)?;
        self.stdout.execute(ResetColor)?;
        Ok(())
    }

    pub fn log_setting(&mut self, key: &str, value: &str) -> Result<()> {
        write!(self.stdout, "\x1b[0;90m{:<28}", key)?;
        self.stdout.execute(ResetColor)?;
        writeln!(self.stdout, "{}", value)?;
        Ok(())
    }

    pub fn log_ai(&mut self, text: &str) -> Result<()> {
        self.log_info("AI:")?;
        self.stdout.execute(SetForegroundColor(Color::Blue))?;
        writeln!(self.stdout, "{}", text)?;
        self.stdout.execute(ResetColor)?;
        Ok(())
    }

    pub fn log_error(&mut self, text: &str) -> Result<()> {
        self.stdout.execute(SetForegroundColor(Color::Red))?;
        writeln!(self.stdout, "{}", text)?;
        self.stdout.execute(ResetColor)?;
        Ok(())
    }

    pub fn log_info(&mut self, text: &str) -> Result<()> {
        writeln!(self.stdout, "\x1b[0;90m{}\x1b[0m", text)?;
        Ok(())
    }

    pub fn log_json<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        writeln!(self.stdout, "{}", serde_json::to_string_pretty(value)?)?;
        Ok(())
    }
}

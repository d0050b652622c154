//! Menu-driven console session around an intersection.

use crate::core::{Intersection, SignalEvent};
use crate::shell::error::MenuError;
use std::io::{BufRead, Write};
use std::str::FromStr;

const BANNER: &str = "========================================";
const SEPARATOR: &str = "----------------------------------------";

/// One of the four menu options.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuChoice {
    Cycle,
    SetEmergency,
    ShowStatus,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    /// Parse a trimmed menu choice.
    ///
    /// Non-numeric input and numbers outside 1..=4 are distinguished so
    /// the shell can echo the matching correction. Signed input parses
    /// as a number, so "-1" is an out-of-range choice, not garbage.
    fn from_str(input: &str) -> Result<Self, MenuError> {
        let choice: i64 = input.trim().parse().map_err(|_| MenuError::NotANumber)?;
        match choice {
            1 => Ok(Self::Cycle),
            2 => Ok(Self::SetEmergency),
            3 => Ok(Self::ShowStatus),
            4 => Ok(Self::Exit),
            _ => Err(MenuError::ChoiceOutOfRange),
        }
    }
}

/// Interpret an emergency switch token: "on" or "off", trimmed,
/// case-insensitive.
pub fn parse_switch(token: &str) -> Result<bool, MenuError> {
    match token.trim().to_lowercase().as_str() {
        "on" => Ok(true),
        "off" => Ok(false),
        _ => Err(MenuError::InvalidSwitch),
    }
}

/// Console label for a journaled event.
fn label(event: &SignalEvent) -> &'static str {
    match event {
        SignalEvent::ModeChanged { .. } => "MODE",
        _ => event.severity().name(),
    }
}

/// Interactive menu session over an [`Intersection`].
///
/// The shell owns the intersection and a pair of streams. It prints the
/// menu, parses choices, invokes core operations, and renders every
/// newly journaled event as a labeled console line. Malformed input is
/// reported and re-prompted; the session ends on the exit option or at
/// end of input, never by panicking.
///
/// Generic streams keep sessions scriptable: feed a `Cursor` and a
/// `Vec<u8>` to drive a whole session from a test.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use crosslight::builder::standard_intersection;
/// use crosslight::shell::MenuShell;
/// use crosslight::Color;
///
/// let mut output = Vec::new();
/// let mut shell = MenuShell::new(
///     standard_intersection(),
///     Cursor::new("1\n3\n4\n"),
///     &mut output,
/// );
/// shell.run().unwrap();
///
/// let intersection = shell.into_intersection();
/// assert_eq!(intersection.status().unwrap().north_south, Color::Yellow);
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("[STATUS] North/South Light: yellow."));
/// ```
pub struct MenuShell<R: BufRead, W: Write> {
    input: R,
    output: W,
    intersection: Intersection,
    rendered: usize,
}

impl<R: BufRead, W: Write> MenuShell<R, W> {
    /// Create a shell over an intersection and a pair of streams.
    pub fn new(intersection: Intersection, input: R, output: W) -> Self {
        Self {
            input,
            output,
            intersection,
            rendered: 0,
        }
    }

    /// Run the session until the exit option or end of input.
    ///
    /// Events journaled before the session starts (the construction
    /// writes, typically) are rendered first, then the start banner.
    pub fn run(&mut self) -> std::io::Result<()> {
        self.print_new_events()?;
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "Traffic Light System started.")?;
        writeln!(self.output, "{BANNER}")?;

        loop {
            self.print_menu()?;
            write!(self.output, "Choose an option: ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else { break };
            if !self.dispatch(&line)? {
                break;
            }
        }

        writeln!(self.output)?;
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output, "Traffic Light System stopped.")?;
        writeln!(self.output, "{BANNER}")?;
        Ok(())
    }

    /// The intersection as it currently stands.
    pub fn intersection(&self) -> &Intersection {
        &self.intersection
    }

    /// Hand the intersection back for post-session inspection.
    pub fn into_intersection(self) -> Intersection {
        self.intersection
    }

    /// Act on one line of input. Returns `false` when the session should
    /// stop.
    fn dispatch(&mut self, line: &str) -> std::io::Result<bool> {
        match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Cycle) => {
                self.intersection.cycle();
                self.print_new_events()?;
            }
            Ok(MenuChoice::SetEmergency) => return self.prompt_emergency(),
            Ok(MenuChoice::ShowStatus) => self.print_status()?,
            Ok(MenuChoice::Exit) => return Ok(false),
            Err(error) => writeln!(self.output, "[ERROR] {error}")?,
        }
        Ok(true)
    }

    /// Ask for the switch token and apply it. End of input at this
    /// prompt stops the session; a bad token reports and returns to the
    /// menu.
    fn prompt_emergency(&mut self) -> std::io::Result<bool> {
        write!(
            self.output,
            "Enter 'on' to activate or 'off' to deactivate emergency: "
        )?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        match parse_switch(&line) {
            Ok(active) => {
                writeln!(self.output, "{SEPARATOR}")?;
                self.intersection.set_emergency_mode(active);
                self.print_new_events()?;
                writeln!(self.output, "{SEPARATOR}")?;
            }
            Err(error) => writeln!(self.output, "[ERROR] {error}")?,
        }
        Ok(true)
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "  1. Cycle")?;
        writeln!(self.output, "  2. Set emergency")?;
        writeln!(self.output, "  3. Show status")?;
        writeln!(self.output, "  4. Exit")?;
        writeln!(self.output)
    }

    fn print_status(&mut self) -> std::io::Result<()> {
        match self.intersection.status() {
            Ok(status) => {
                writeln!(self.output, "{SEPARATOR}")?;
                writeln!(
                    self.output,
                    "[STATUS] North/South Light: {}.",
                    status.north_south
                )?;
                writeln!(
                    self.output,
                    "[STATUS] East/West Light: {}.",
                    status.east_west
                )?;
                writeln!(self.output, "[MODE] {}.", status.mode)?;
                writeln!(self.output, "{SEPARATOR}")?;
            }
            Err(error) => writeln!(self.output, "[ERROR] {error}")?,
        }
        Ok(())
    }

    /// Render every journal record not yet shown, oldest first.
    fn print_new_events(&mut self) -> std::io::Result<()> {
        let records = self.intersection.journal().records();
        for record in &records[self.rendered..] {
            writeln!(self.output, "[{}] {}", label(&record.event), record.event)?;
        }
        self.rendered = records.len();
        Ok(())
    }

    /// One line of input, `None` at end of input.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

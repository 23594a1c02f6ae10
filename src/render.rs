use std::{
    io::{self, Stdout, Write},
    ops::ControlFlow,
    time::Duration,
};

use crossterm::{cursor, queue, style::Print, terminal};

use crate::{generators::VisitObserver, maze::Canvas};

/// Writes the canvas row by row, one character per tile, followed by a blank line.
pub fn write_canvas<W: Write>(out: &mut W, canvas: &Canvas) -> io::Result<()> {
    let mut line = String::with_capacity(canvas.columns() + 1);
    for row in canvas.row_iter() {
        line.clear();
        line.extend(row.iter().map(|tile| tile.symbol()));
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.write_all(b"\n")
}

/// Prints the whole canvas after every visited cell, as plain text.
///
/// Write errors are kept until [`StepPrinter::finish`] and stop generation.
pub struct StepPrinter<W: Write> {
    out: W,
    steps: usize,
    error: Option<io::Error>,
}

impl StepPrinter<Stdout> {
    pub fn stdout() -> Self {
        StepPrinter::new(io::stdout())
    }
}

impl<W: Write> StepPrinter<W> {
    pub fn new(out: W) -> Self {
        StepPrinter {
            out,
            steps: 0,
            error: None,
        }
    }

    /// Number of frames printed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the first write error, if any, and flushes the output.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> VisitObserver for StepPrinter<W> {
    fn on_visit(&mut self, canvas: &Canvas, _cell: (usize, usize)) -> ControlFlow<()> {
        match write_canvas(&mut self.out, canvas) {
            Ok(()) => {
                self.steps += 1;
                ControlFlow::Continue(())
            }
            Err(err) => {
                self.error = Some(err);
                ControlFlow::Break(())
            }
        }
    }
}

/// Redraws the canvas in place after every visited cell, with colors.
pub struct TerminalAnimator<W: Write> {
    out: W,
    delay: Duration,
    error: Option<io::Error>,
}

impl TerminalAnimator<Stdout> {
    pub fn stdout(delay: Duration) -> Self {
        TerminalAnimator {
            out: io::stdout(),
            delay,
            error: None,
        }
    }
}

impl<W: Write> TerminalAnimator<W> {
    fn draw(&mut self, canvas: &Canvas) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;
        for row in canvas.row_iter() {
            for tile in row {
                queue!(self.out, Print(tile.styled()))?;
            }
            queue!(self.out, Print("\r\n"))?;
        }
        self.out.flush()
    }

    /// Returns the first drawing error, if any.
    pub fn finish(mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<W: Write> VisitObserver for TerminalAnimator<W> {
    fn on_visit(&mut self, canvas: &Canvas, _cell: (usize, usize)) -> ControlFlow<()> {
        if let Err(err) = self.draw(canvas) {
            tracing::warn!("Animation stopped: {}", err);
            self.error = Some(err);
            return ControlFlow::Break(());
        }
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        ControlFlow::Continue(())
    }
}

use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use lifegrid::{Coord, LifeGrid};
use std::io;

pub enum ConsoleCommand {
    Exit,
    Handled,
}

pub struct ConsoleRender {
    tl: Coord,
    alive: char,
    dead: char,
    report: String,
}
impl ConsoleRender {
    pub fn new(alive: char, dead: char) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            tl: Coord::default(),
            alive,
            dead,
            report: String::new(),
        })
    }

    pub fn render(&self, grid: &LifeGrid) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

        // last terminal row is reserved for the report footer
        for y in 0..rows.saturating_sub(1) {
            let mut line = String::with_capacity(cols as usize);
            for x in 0..cols {
                let coord = self.tl + Coord::new(y as i32, x as i32);
                // everything panned outside the grid renders dead
                let cell = grid.cell_at(coord).unwrap_or(false);
                line.push(if cell { self.alive } else { self.dead });
            }
            queue!(stdout, cursor::MoveTo(0, y))?;
            io::Write::write_all(&mut stdout, line.as_bytes())?;
        }

        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        io::Write::write_all(&mut stdout, self.report.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // only read when an event is already queued
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let mut outp = Ok(Some(ConsoleCommand::Handled));
        match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => {
                outp = Ok(Some(ConsoleCommand::Exit));
            }
            // arrows to move the view over the grid
            event::Event::Key(
                ev @ KeyEvent {
                    code: KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right,
                    ..
                },
            ) => match ev.code {
                KeyCode::Up => self.tl.row -= 1,
                KeyCode::Down => self.tl.row += 1,
                KeyCode::Left => self.tl.col -= 1,
                KeyCode::Right => self.tl.col += 1,
                _ => {}
            },
            _ => {}
        }
        outp
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // raw mode was enabled in new(), so disabling must work
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}

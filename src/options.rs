use std::time::Duration;

use lifegrid::engine::{DEFAULT_ALIVE, DEFAULT_DEAD};
use lifegrid::{Coord, GridCodec, LifeGrid, NumericRows, SymbolRows};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("t", "threads", "enables multi-threading");
        opts.optflag("", "grow", "grow the grid when life nears an edge");
        opts.optopt("o", "output", "output file", "FILE");
        opts.optopt("i", "input", "input file", "FILE");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt("f", "fill", "set fill type", "TYPE");
        opts.optopt("", "format", "grid file format (numeric, symbols)", "FORMAT");
        opts.optopt("", "alive", "symbol for live cells", "CHAR");
        opts.optopt("", "dead", "symbol for dead cells", "CHAR");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifegrid [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn width(&self) -> Option<usize> {
        self.matches.opt_get("width").unwrap()
    }
    fn height(&self) -> Option<usize> {
        self.matches.opt_get("height").unwrap()
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }
    pub fn grow(&self) -> bool {
        self.matches.opt_present("grow")
    }

    pub fn generations(&self) -> usize {
        // usize::MAX stands in for "run forever"
        self.matches.opt_get("gens").unwrap().unwrap_or(usize::MAX)
    }
    pub fn sleep(&self) -> Option<Duration> {
        match self.matches.opt_get("sleep").unwrap() {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        }
    }

    /// Grid dimensions as (rows, cols).
    pub fn grid_size(&self) -> (usize, usize) {
        let default = if self.console() {
            let (cols, rows) = crossterm::terminal::size().unwrap();
            // leave one terminal row for the report footer
            (rows.saturating_sub(1).max(1) as usize, cols as usize)
        } else {
            (30, 100)
        };

        (
            self.height().unwrap_or(default.0),
            self.width().unwrap_or(default.1),
        )
    }
    pub fn fill_mode(&self) -> FillMode {
        let mode_str = self.matches.opt_str("fill");
        FillMode::new(mode_str.as_deref().unwrap_or("random")).expect("valid fill mode string")
    }

    pub fn alive_symbol(&self) -> char {
        self.symbol_opt("alive").unwrap_or(DEFAULT_ALIVE)
    }
    pub fn dead_symbol(&self) -> char {
        self.symbol_opt("dead").unwrap_or(DEFAULT_DEAD)
    }
    fn symbol_opt(&self, name: &str) -> Option<char> {
        self.matches
            .opt_str(name)
            .and_then(|s| s.chars().next())
    }

    pub fn codec(&self) -> Box<dyn GridCodec> {
        let format_str = self.matches.opt_str("format");
        match format_str.as_deref().unwrap_or("numeric") {
            "numeric" => Box::new(NumericRows),
            "symbols" => Box::new(SymbolRows::new(self.alive_symbol(), self.dead_symbol())),
            other => panic!("unknown grid file format {other:?}"),
        }
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

pub enum FillMode {
    Random,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    pub fn create_grid(&self, rows: usize, cols: usize) -> LifeGrid {
        match self {
            Self::Random => LifeGrid::random(rows, cols),
            Self::Empty => LifeGrid::dead(rows, cols),
            Self::All => {
                let mut grid = LifeGrid::dead(rows, cols);
                for r in 0..rows as i32 {
                    for c in 0..cols as i32 {
                        grid.set_cell(Coord::new(r, c), true).expect("in-bounds fill");
                    }
                }
                grid
            }
        }
    }
}

use std::{fs, io, process, thread};

mod console;
mod options;
mod stats;

use lifegrid::{Error, GridCodec, LifeGrid};
use stats::Recorder;

fn build_grid(args: &options::Args) -> Result<LifeGrid, Error> {
    if let Some(path) = args.input_file() {
        let text = fs::read_to_string(&path)
            .map_err(|err| Error::InvalidConfiguration(format!("{}: {}", path, err)))?;
        return args.codec().decode(&text);
    }

    let (rows, cols) = args.grid_size();
    Ok(args.fill_mode().create_grid(rows, cols))
}

fn main() -> io::Result<()> {
    let Some(args) = options::Args::from_env() else {
        return Ok(());
    };

    let mut grid = match build_grid(&args) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    grid.set_growth(args.grow());
    println!("alive: {}", grid.live_count());

    // setup rendering and reporting around the engine
    let mut console = if args.console() {
        Some(console::ConsoleRender::new(
            args.alive_symbol(),
            args.dead_symbol(),
        )?)
    } else {
        None
    };
    let sleep = args.sleep();
    let multithreading = args.multithreading();

    let mut interrupted = false;
    let mut stats = stats::SwitchRecorder::new(grid.live_count(), args.stats_file().is_some());
    'generations: for _ in 0..args.generations() {
        // render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                if let console::ConsoleCommand::Exit = cmd {
                    interrupted = true;
                    break 'generations;
                }
            }
            console.render(&grid)?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                println!("{}", report);
            }
        }

        // compute the next generation
        if multithreading {
            grid.step_parallel();
        } else {
            grid.step();
        }
        stats.record(grid.live_count(), grid.rows(), grid.cols());
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    // restore the terminal before writing anything else
    std::mem::drop(console);

    if let Some(path) = args.output_file() {
        fs::write(path, args.codec().encode(&grid))?;
    }
    if let Some(path) = args.stats_file() {
        stats.save(path)?;
    }

    if interrupted {
        process::exit(1);
    }
    Ok(())
}

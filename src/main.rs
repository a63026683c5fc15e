use clap::{App, Arg, ArgMatches};
use lifegrid::data::{Grid, Pattern};
use lifegrid::simulation::Simulation;
use log::info;
use std::error::Error;
use std::fmt::Display;
use std::process::exit;
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};

fn main() {
    env_logger::init();
    exit(match inner_main() {
        Ok(_) => 0,
        Err(err) => {
            println!("{}", err);
            1
        }
    })
}

fn inner_main() -> Result<(), Box<dyn Error>> {
    let preset_help = format!(
        "Preset to seed the grid with, one of: {}",
        Pattern::preset_names().collect::<Vec<_>>().join(", ")
    );
    let matches = App::new("Game of Life")
        .version(version().as_ref())
        .about("Conway's Game of Life on a bounded grid, in your terminal")
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .default_value("40")
                .help("Number of rows in the grid"),
        )
        .arg(
            Arg::with_name("cols")
                .short("c")
                .long("cols")
                .default_value("60")
                .help("Number of columns in the grid"),
        )
        .arg(
            Arg::with_name("pattern")
                .short("p")
                .long("pattern")
                .takes_value(true)
                .help(&preset_help),
        )
        .arg(
            Arg::with_name("density")
                .short("d")
                .long("density")
                .default_value("0.3")
                .help("Chance of each cell starting alive when no pattern is given"),
        )
        .arg(
            Arg::with_name("generations")
                .short("g")
                .long("generations")
                .default_value("100")
                .help("Number of generations to run for"),
        )
        .arg(
            Arg::with_name("update-rate")
                .short("u")
                .long("update-rate")
                .default_value("10")
                .help("Number of generations per second"),
        )
        .arg(
            Arg::with_name("paused")
                .long("paused")
                .help("Start paused: print the seed without advancing it"),
        )
        .get_matches();

    let rows = get_number("rows", Some(0), &matches)?;
    let cols = get_number("cols", Some(0), &matches)?;
    let density: f64 = get_number("density", None, &matches)?;
    let generations: u64 = get_number("generations", None, &matches)?;
    let updates_per_second: u64 = get_number("update-rate", Some(0), &matches)?;

    let grid = match matches.value_of("pattern") {
        Some(name) => seeded_grid(&Pattern::preset(name)?, rows, cols)?,
        None => Grid::random(rows, cols, density, &mut rand::thread_rng())?,
    };
    let mut sim = Simulation::new(grid);
    if matches.is_present("paused") {
        sim.pause();
    }
    run(&mut sim, generations, updates_per_second);
    Ok(())
}

// Grows the requested size to fit the pattern if needed, and stamps it in the middle.
fn seeded_grid(pattern: &Pattern, rows: usize, cols: usize) -> Result<Grid, Box<dyn Error>> {
    let (p_rows, p_cols) = pattern.size();
    let (rows, cols) = (rows.max(p_rows), cols.max(p_cols));
    let mut grid = Grid::new(rows, cols)?;
    pattern.stamp(&mut grid, ((rows - p_rows) / 2, (cols - p_cols) / 2))?;
    Ok(grid)
}

fn run(sim: &mut Simulation, generations: u64, updates_per_second: u64) {
    let wait_duration = Duration::from_millis(1000 / updates_per_second);
    info!(
        "Running {}x{} grid for {} generations",
        sim.grid().rows(),
        sim.grid().cols(),
        generations
    );
    draw(sim);
    while sim.generation() < generations {
        let last_updated = Instant::now();
        if !sim.tick() {
            info!("Paused at generation {}", sim.generation());
            break;
        }
        draw(sim);
        if let Some(remaining) = wait_duration.checked_sub(last_updated.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

fn draw(sim: &Simulation) {
    // Clear the terminal and move the cursor home before each frame
    print!("\x1B[2J\x1B[H");
    println!(
        "generation {} | {} alive",
        sim.generation(),
        sim.grid().alive_count()
    );
    print!("{}", sim.grid());
}

fn version() -> String {
    let (maj, min, pat) = (
        option_env!("CARGO_PKG_VERSION_MAJOR"),
        option_env!("CARGO_PKG_VERSION_MINOR"),
        option_env!("CARGO_PKG_VERSION_PATCH"),
    );
    match (maj, min, pat) {
        (Some(maj), Some(min), Some(pat)) => format!("{}.{}.{}", maj, min, pat),
        _ => "".to_owned(),
    }
}

fn get_number<A>(name: &str, maybe_min: Option<A>, matches: &ArgMatches<'_>) -> Result<A, String>
where
    A: FromStr + PartialOrd + Display + Copy,
{
    matches
        .value_of(name)
        .and_then(|s| s.parse::<A>().ok())
        .and_then(|u| match maybe_min {
            Some(min) => {
                if u > min {
                    Some(u)
                } else {
                    None
                }
            }
            _ => Some(u),
        })
        .ok_or_else(|| {
            if let Some(min) = maybe_min {
                format!("{} should be a number greater than {}.", name, min)
            } else {
                format!("{} should be a number.", name)
            }
        })
}

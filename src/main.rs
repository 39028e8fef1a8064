use anyhow::Result;
use clap::Parser;
use flipbot::board::grid::{Board, Cell, Coord, FlipList, Marker, PlayMode};
use flipbot::search::engine::{Searcher, MAX_PLY};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Othello/Reversi against the minimax engine", long_about = None)]
struct Args {
    /// Search depth in plies, 1-10 (skill level)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=MAX_PLY as i64))]
    depth: u32,

    /// Who plays X: 'h' for human, 'c' for computer
    #[arg(long, default_value = "h")]
    x: String,

    /// Who plays O: 'h' for human, 'c' for computer
    #[arg(long, default_value = "c")]
    o: String,

    /// Seed for the tie-break RNG (reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// Print engine moves as JSON instead of the continuation listing
    #[arg(long)]
    json: bool,
}

fn parse_mode(mode_str: &str) -> Result<PlayMode> {
    match mode_str.to_lowercase().as_str() {
        "h" | "human" => Ok(PlayMode::Human),
        "c" | "computer" => Ok(PlayMode::Computer),
        _ => anyhow::bail!("Invalid mode: use 'h' or 'c'"),
    }
}

fn mode_of(marker: Marker, x_mode: PlayMode, o_mode: PlayMode) -> PlayMode {
    match marker {
        Marker::X => x_mode,
        Marker::O => o_mode,
    }
}

fn print_counts(board: &Board) {
    println!(
        "X: {};  O: {}",
        board.count(Marker::X),
        board.count(Marker::O)
    );
}

/// Prompt until a legal move is entered and applied. Returns the realized
/// gain, or None if the player quits.
fn get_human_move(
    board: &mut Board,
    marker: Marker,
    searcher: &mut Searcher,
    depth: u32,
) -> Result<Option<i32>> {
    let mut flips = FlipList::new();
    loop {
        print!("{marker} (row,col | h for hint | q to quit): ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if input.eq_ignore_ascii_case("h") {
            let hint = searcher.search(board, marker, depth);
            match hint.best() {
                Some(coord) => {
                    println!("Suggest {coord} with an effect of {}\n", hint.value)
                }
                None => println!("No legal move to suggest\n"),
            }
            continue;
        }

        let coord: Coord = match input.parse() {
            Ok(c) => c,
            Err(e) => {
                println!("{e}; re-enter:");
                continue;
            }
        };
        if board.cell(coord) != Cell::Empty {
            println!("That position is already occupied; try again:");
            continue;
        }
        let gain = board.apply_move(coord, marker, &mut flips);
        if gain == 0 {
            println!("Zero-yield move; try again:");
            continue;
        }
        return Ok(Some(gain));
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let x_mode = parse_mode(&args.x)?;
    let o_mode = parse_mode(&args.o)?;

    let mut searcher = match args.seed {
        Some(seed) => Searcher::with_seed(seed),
        None => Searcher::default(),
    };
    let mut board = Board::new();
    let mut flips = FlipList::new();
    let mut player = Marker::X;
    let mut prev_could_go = true;

    println!("{board}");
    println!("Enter moves as row,col (both in range 0-7)\n");

    loop {
        // Viability probe: a depth-1 search reporting 0 means a forced pass.
        let could_go = searcher.search(&mut board, player, 1).value > 0;

        if !could_go {
            println!("{player} cannot move");
            if !prev_could_go {
                println!("Deadlock: game over");
                break;
            }
        } else if mode_of(player, x_mode, o_mode) == PlayMode::Human {
            print_counts(&board);
            let Some(gain) = get_human_move(&mut board, player, &mut searcher, args.depth)? else {
                break;
            };
            println!("\nEffect of move == {gain}");
        } else {
            println!("Computer is thinking...");
            let outcome = searcher.search(&mut board, player, args.depth);
            // The probe said a move exists, so the line is non-empty.
            let coord = outcome
                .best()
                .ok_or_else(|| anyhow::anyhow!("search lost a viable move"))?;
            board.apply_move(coord, player, &mut flips);

            if args.json {
                println!("{}", serde_json::to_string(&outcome)?);
            } else {
                println!("Computer's move: {player} placed at {coord}");
                println!("Predicted continuation:");
                let mut mover = player;
                for step in &outcome.line {
                    println!("  {mover}: {step}");
                    mover = mover.opponent();
                }
                println!("\nEffect of move == {}", outcome.value);
            }
        }

        print_counts(&board);
        println!("{board}");

        prev_could_go = could_go;
        player = player.opponent();

        if board.count(Marker::X) == 0 || board.count(Marker::O) == 0 || board.is_full() {
            break;
        }
    }

    print_counts(&board);
    let (x, o) = (board.count(Marker::X), board.count(Marker::O));
    if x == o {
        println!("Tie game");
    } else {
        println!("{} wins", if x > o { Marker::X } else { Marker::O });
    }
    log::info!("chain pool held {} records", searcher.pool_size());
    Ok(())
}

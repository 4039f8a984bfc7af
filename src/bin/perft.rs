use std::time::Instant;

use chess_rules::{Position, START_FEN};
use clap::Parser;

#[derive(Parser)]
#[command(name = "perft")]
#[command(about = "Count legal move paths from a chess position")]
struct Args {
    /// FEN of the root position (default: standard start position)
    #[arg(short, long)]
    fen: Option<String>,

    /// Search depth in plies
    #[arg(short, long, default_value_t = 4)]
    depth: usize,

    /// Print the node count below each root move
    #[arg(long)]
    divide: bool,

    /// Worker threads for the root split
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Moves in coordinate notation to play before counting (e.g. e2e4 e7e5)
    #[arg(short, long, num_args = 1..)]
    moves: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    if args.threads == 0 {
        return Err("--threads must be >= 1".into());
    }

    let mut position = Position::from_fen(args.fen.as_deref().unwrap_or(START_FEN))?;
    for text in &args.moves {
        let mv = position.parse_move(text)?;
        let _undo = position.apply(&mv);
    }
    println!("{position}");

    let start = Instant::now();
    let nodes = if args.divide && args.depth > 0 {
        let counts = if args.threads > 1 {
            position.perft_divide_parallel(args.depth, args.threads)
        } else {
            position.perft_divide(args.depth)
        };
        for (mv, n) in &counts {
            println!("{mv}: {n}");
        }
        println!("moves: {}", counts.len());
        counts.iter().map(|&(_, n)| n).sum()
    } else if args.threads > 1 {
        position.perft_parallel(args.depth, args.threads)
    } else {
        position.perft(args.depth)
    };
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        (nodes as f64 / elapsed.as_secs_f64()) as u64
    } else {
        0
    };
    println!("depth: {}", args.depth);
    println!("nodes: {nodes}");
    println!("time: {} ms", elapsed.as_millis());
    println!("nps: {nps}");

    Ok(())
}

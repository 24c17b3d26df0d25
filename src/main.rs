use std::path::PathBuf;

use psqt::{EvalParams, Piece, Psqt, Score, Side, Sq};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let params = EvalParams::load_or_default(path.as_deref());
    let psqt = Psqt::new(&params);

    for piece in Piece::ALL {
        println!("{} ({})", piece, piece.to_char());
        print_grid("mg", psqt.side_table(Side::White, piece), Score::mg);
        print_grid("eg", psqt.side_table(Side::White, piece), Score::eg);
        println!();
    }
}

/// Print one phase of a table, rank 8 at the top.
fn print_grid(label: &str, table: &[Score; 64], phase: fn(Score) -> i32) {
    println!("  {}", label);
    for rank in (0..8).rev() {
        print!("  {} ", rank + 1);
        for file in 0..8 {
            print!("{:>6}", phase(table[Sq::file_rank(file, rank).us()]));
        }
        println!();
    }
    print!("    ");
    for file in b'a'..=b'h' {
        print!("{:>6}", file as char);
    }
    println!();
}

//! Greedy best-first search demo on a 12×12 maze.
//!
//! Run: cargo run --bin greedy-maze

use maze_core::Maze;
use maze_paths::PathField;

const MAP: &str = "\
A 0 1 0 0 0 1 0 0 1 0 0
0 0 1 0 1 0 1 0 1 0 0 0
1 0 0 0 1 0 0 0 1 1 1 0
0 1 1 0 0 1 1 0 0 0 1 0
0 0 0 0 1 0 1 1 1 0 0 0
1 1 1 0 1 0 0 0 1 1 1 0
0 0 1 0 0 0 1 0 0 0 1 0
0 1 0 1 1 0 1 1 1 0 1 0
0 0 0 0 0 0 0 0 1 0 0 0
1 1 1 1 1 1 0 1 0 1 1 0
0 0 0 0 0 0 0 1 0 0 0 0
0 1 1 1 1 1 1 1 1 1 1 B
";

fn main() {
    let maze = match Maze::parse(MAP) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("{maze}");

    let mut field = PathField::new(maze.width(), maze.height());
    match field.greedy_path(&maze, maze.start(), maze.goal()) {
        Some(path) => {
            let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!("Path from A to B: {}", cells.join(", "));
            println!();
            println!("{}", maze.with_path(&path));
        }
        None => println!("No path found."),
    }
}

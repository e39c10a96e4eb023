use std::io::Write;

use walk_art::types::{Config, WalkBoard};
use walk_art::{digest, draw, utils};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Launching...");

    // Load config
    let config = Config::from_file(&Config::default_path()).unwrap_or_else(|| {
        println!("Failed to parse config file, using defaults");
        Config::default()
    });

    let Some(input) = std::env::args().nth(1) else {
        eprintln!("usage: walk_art <md5 fingerprint>");
        std::process::exit(2);
    };
    println!("- input: {input}");

    let moves = digest::decode(&utils::normalize_fingerprint(&input))?;
    let mut board = WalkBoard::new();
    board.load(moves)?;
    println!("Finished converting key.");

    let frame_interval = config.frame_interval();
    let mut stdout = std::io::stdout().lock();

    // Run the walk
    while board.step()? {
        if config.animate() {
            draw::draw_frame(&mut stdout, &board.render()?, config.clear_screen())?;
            std::thread::sleep(frame_interval);
        }
    }

    board.finalize()?;
    draw::draw_frame(&mut stdout, &board.render()?, config.animate() && config.clear_screen())?;
    writeln!(stdout, "completed.")?;

    Ok(())
}

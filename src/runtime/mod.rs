//! Process entry: argument handling, the menu loop, and session dispatch.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use log::{error, warn};

use crate::config::Settings;
use crate::library::{self, Track};
use crate::ui::menu::{self, Selection};

mod coordinator;
mod input;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let target = args.next();
    if args.next().is_some() {
        return Err("usage: toccata [FILE|DIRECTORY]".into());
    }

    let settings = settings::load_settings();

    match target {
        Some(t) => {
            let path = Path::new(&t);
            if path.is_file() {
                // Single-file mode: play it once, fail hard on startup errors.
                let track = library::read_track(path);
                coordinator::run_session(&track, &settings)?;
                Ok(())
            } else if path.is_dir() {
                run_menu(&library::scan(path, &settings.library), &settings);
                Ok(())
            } else {
                Err(format!("no such file or directory: {t}").into())
            }
        }
        None => {
            let dir = settings.library.music_dir.clone();
            let tracks = library::scan(Path::new(&dir), &settings.library);
            if tracks.is_empty() {
                warn!("no playable tracks in {dir}");
            }
            run_menu(&tracks, &settings);
            Ok(())
        }
    }
}

/// List the catalog, read a selection, play it, repeat until `-1` or EOF.
fn run_menu(tracks: &[Track], settings: &Settings) {
    let stdin = io::stdin();
    loop {
        println!();
        menu::print_catalog(tracks);
        print!("select a track (-1 to exit): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            // EOF behaves like -1: leave the menu cleanly.
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("failed to read selection: {e}");
                break;
            }
        }

        match menu::parse_selection(&line, tracks.len()) {
            Ok(Selection::Exit) => break,
            Ok(Selection::Play(i)) => {
                if let Err(e) = coordinator::run_session(&tracks[i], settings) {
                    // Device or decode trouble ends this session, not the menu.
                    error!("{e}");
                }
            }
            Err(msg) => println!("{msg}"),
        }
    }
}

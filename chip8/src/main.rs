use std::path::PathBuf;

mod audio;
mod keymap;
mod run;
mod screen;

fn main() {
    env_logger::init();

    let args = std::env::args();
    if args.len() > 1 {
        let file_path = args.last().expect("unable to get file path from args");
        run::run(PathBuf::from(file_path));
    } else {
        panic!("expected ROM file path but got no arguments");
    }
}

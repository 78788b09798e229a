use gltut::scenes::{self, depth::Depth};

fn main() {
    if let Err(e) = gltut::logging::init() {
        eprintln!("failed to initialize logging: {e}");
    }

    if let Err(e) = scenes::run(&scenes::depth::WINDOW, Depth::new) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

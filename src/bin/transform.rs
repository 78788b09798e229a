use gltut::scenes::{self, transform::Transform};

fn main() {
    if let Err(e) = gltut::logging::init() {
        eprintln!("failed to initialize logging: {e}");
    }

    if let Err(e) = scenes::run(&scenes::transform::WINDOW, Transform::new) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

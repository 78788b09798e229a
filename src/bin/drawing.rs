use gltut::scenes::{self, drawing::Drawing};

fn main() {
    if let Err(e) = gltut::logging::init() {
        eprintln!("failed to initialize logging: {e}");
    }

    if let Err(e) = scenes::run(&scenes::drawing::WINDOW, Drawing::new) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

use gltut::scenes::{self, context_creation::ContextCreation};

fn main() {
    if let Err(e) = gltut::logging::init() {
        eprintln!("failed to initialize logging: {e}");
    }

    if let Err(e) = scenes::run(&scenes::context_creation::WINDOW, ContextCreation::new) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Run the clock board application
    progress_clocks::run_app()
}

pub mod environment;
pub mod fs;
pub mod terminal;

pub use environment::downloads_dir;
pub use fs::safe_open_file;
pub use terminal::sanitize_for_display;

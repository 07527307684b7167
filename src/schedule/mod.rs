mod directory;
pub use directory::*;
mod week_schedule;
pub use week_schedule::*;
mod work_window;
pub use work_window::*;

pub mod fs;
pub mod logging;

pub mod commands;
pub mod nav;
pub mod util;

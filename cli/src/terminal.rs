pub mod banner;
pub mod board;
pub mod colors;
pub mod input;
pub mod logging;
pub mod print;

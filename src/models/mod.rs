pub mod board;
pub mod worker;

// Export the board and worker types for use throughout the app
pub use board::{BoardData, Column, SaveAction, Task};
pub use worker::{assignee_name, Worker};

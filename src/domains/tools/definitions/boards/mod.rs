//! Board tools.

pub mod get_board;
pub mod list_boards;

pub use get_board::{GetBoardParams, GetBoardTool};
pub use list_boards::{ListBoardsParams, ListBoardsTool};

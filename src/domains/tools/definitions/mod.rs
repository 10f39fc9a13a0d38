//! Tool definitions module.
//!
//! One file per Trello tool, grouped by the resource they act on.
//! Each tool is a pure request builder; see [`super::ToolHandler`].

pub mod boards;
pub mod cards;
pub mod common;
pub mod lists;

pub use boards::{GetBoardTool, ListBoardsTool};
pub use cards::{
    AddCommentTool, ArchiveCardTool, CreateCardTool, DeleteCardTool, GetCardTool, ListCardsTool,
    MoveCardTool, UpdateCardTool,
};
pub use lists::{CreateListTool, ListListsTool};

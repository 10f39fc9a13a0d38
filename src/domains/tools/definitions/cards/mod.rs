//! Card tools.

pub mod add_comment;
pub mod archive_card;
pub mod create_card;
pub mod delete_card;
pub mod get_card;
pub mod list_cards;
pub mod move_card;
pub mod update_card;

pub use add_comment::{AddCommentParams, AddCommentTool};
pub use archive_card::{ArchiveCardParams, ArchiveCardTool};
pub use create_card::{CreateCardParams, CreateCardTool};
pub use delete_card::{DeleteCardParams, DeleteCardTool};
pub use get_card::{GetCardParams, GetCardTool};
pub use list_cards::{ListCardsParams, ListCardsTool};
pub use move_card::{MoveCardParams, MoveCardTool};
pub use update_card::{UpdateCardParams, UpdateCardTool};

//! List tools.

pub mod create_list;
pub mod list_lists;

pub use create_list::{CreateListParams, CreateListTool};
pub use list_lists::{ListListsParams, ListListsTool};

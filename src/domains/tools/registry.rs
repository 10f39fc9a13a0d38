//! Tool Registry - the fixed catalog of Trello tools.
//!
//! This module provides:
//! - The ordered list of tool descriptors advertised to clients
//! - Name lookup from tool name to its request builder

use std::collections::HashMap;

use rmcp::model::{JsonObject, Tool};

use super::definitions::{
    AddCommentTool, ArchiveCardTool, CreateCardTool, CreateListTool, DeleteCardTool, GetBoardTool,
    GetCardTool, ListBoardsTool, ListCardsTool, ListListsTool, MoveCardTool, UpdateCardTool,
};
use super::{ToolError, ToolHandler};
use crate::trello::OutboundRequest;

/// Builder entry point: raw argument bag in, request out.
pub type BuildFn = fn(JsonObject) -> Result<OutboundRequest, ToolError>;

/// One advertised tool and the builder behind it.
#[derive(Clone)]
pub struct ToolDescriptor {
    pub tool: Tool,
    pub build: BuildFn,
}

impl ToolDescriptor {
    /// Describe a tool from its handler.
    pub fn of<T: ToolHandler>() -> Self {
        Self {
            tool: T::to_tool(),
            build: T::build_from_args,
        }
    }

    pub fn name(&self) -> &str {
        &self.tool.name
    }
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.tool.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - immutable after construction.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Build the Trello catalog.
    pub fn new() -> Self {
        Self::from_descriptors(vec![
            ToolDescriptor::of::<ListBoardsTool>(),
            ToolDescriptor::of::<GetBoardTool>(),
            ToolDescriptor::of::<ListListsTool>(),
            ToolDescriptor::of::<ListCardsTool>(),
            ToolDescriptor::of::<GetCardTool>(),
            ToolDescriptor::of::<CreateCardTool>(),
            ToolDescriptor::of::<UpdateCardTool>(),
            ToolDescriptor::of::<MoveCardTool>(),
            ToolDescriptor::of::<AddCommentTool>(),
            ToolDescriptor::of::<CreateListTool>(),
            ToolDescriptor::of::<ArchiveCardTool>(),
            ToolDescriptor::of::<DeleteCardTool>(),
        ])
    }

    /// Build a registry from an explicit descriptor list.
    ///
    /// # Panics
    ///
    /// Panics if two descriptors share a name. The catalog is fixed at
    /// compile time, so this only fires on a registration mistake.
    pub fn from_descriptors(tools: Vec<ToolDescriptor>) -> Self {
        let mut index = HashMap::with_capacity(tools.len());
        for (position, descriptor) in tools.iter().enumerate() {
            let slot = index.entry(descriptor.name().to_string()).or_insert(position);
            assert_eq!(*slot, position, "duplicate tool name: {}", descriptor.name());
        }
        Self { tools, index }
    }

    /// All tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDescriptor::name).collect()
    }

    /// All tools as Tool models (metadata), in catalog order.
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|d| d.tool.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Resolve `name` and run its builder.
    pub fn build(&self, name: &str, arguments: JsonObject) -> Result<OutboundRequest, ToolError> {
        let descriptor = self.get(name).ok_or_else(|| ToolError::not_found(name))?;
        (descriptor.build)(arguments)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Parser context management for parsing different constructs
//!
//! This module provides context tracking structures used during parsing
//! to track things like current scope, parent nodes, and language constructs.

use vela_ast::nodes::NodeID;

/// The type of construct currently being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextType {
    /// Default top-level context
    Global,
    /// Function body context
    Function,
    /// Loop body context (`while`, `for`), needed to validate `break`/`continue`
    Loop,
    /// Inside a `match` expression's branches
    Match,
    /// Parsing a type expression
    TypeAnnotation,
    /// Inside a `data`, `trait`, or `ext` body
    Data,
}

/// A parsing context tracks state for a specific construct being parsed
#[derive(Debug, Clone)]
pub struct Context {
    /// The type of construct being parsed
    pub context_type: ContextType,
    /// Optional parent node ID
    pub parent: Option<NodeID>,
}

impl Context {
    /// Create a new context
    #[must_use]
    pub const fn new(context_type: ContextType, parent: Option<NodeID>) -> Self {
        Self { context_type, parent }
    }

    /// Check if this is a function context
    #[inline]
    #[must_use]
    pub fn is_function(&self) -> bool { self.context_type == ContextType::Function }

    /// Check if this is a data/trait/ext context
    #[inline]
    #[must_use]
    pub fn is_data(&self) -> bool { self.context_type == ContextType::Data }
}

/// A context stack manages nested parsing contexts
#[derive(Debug, Clone)]
pub struct ContextStack {
    /// Stack of active contexts
    stack: Vec<Context>,
}

impl Default for ContextStack {
    fn default() -> Self { Self::new() }
}

impl ContextStack {
    /// Create a new context stack seeded with the global context
    #[must_use]
    pub fn new() -> Self {
        Self { stack: vec![Context::new(ContextType::Global, None)] }
    }

    /// Push a new context onto the stack
    pub fn push(&mut self, context: Context) { self.stack.push(context); }

    /// Pop the current context off the stack
    pub fn pop(&mut self) -> Option<Context> {
        // Always keep at least the global context
        if self.stack.len() <= 1 {
            return None;
        }

        self.stack.pop()
    }

    /// Get the current context
    ///
    /// ## Panics
    ///
    /// Would panic if the stack were empty, but that will never be the case. The stack is
    /// initialized with a Global context and `pop()` prevents removing the last element.
    #[must_use]
    pub fn current(&self) -> &Context {
        self.stack.last().expect("context stack should never be empty")
    }

    /// Find the nearest parent context of the given type, searching from the
    /// top of the stack down (used to answer e.g. "are we inside a loop" even
    /// through an intervening `match` or closure context).
    #[must_use]
    pub fn find_parent_context(&self, context_type: ContextType) -> Option<&Context> {
        self.stack.iter().rev().find(|ctx| ctx.context_type == context_type)
    }

    /// Check if the current context is of the given type
    #[inline]
    #[must_use]
    pub fn in_context(&self, context_type: ContextType) -> bool {
        self.current().context_type == context_type
    }

    /// Check if we're currently inside a function (anywhere in the stack)
    #[inline]
    #[must_use]
    pub fn in_function(&self) -> bool { self.find_parent_context(ContextType::Function).is_some() }

    /// Check if we're currently inside a loop (anywhere in the stack)
    #[inline]
    #[must_use]
    pub fn in_loop(&self) -> bool { self.find_parent_context(ContextType::Loop).is_some() }

    /// Check if we're currently in a type annotation context
    #[inline]
    #[must_use]
    pub fn in_type_annotation(&self) -> bool { self.in_context(ContextType::TypeAnnotation) }
}

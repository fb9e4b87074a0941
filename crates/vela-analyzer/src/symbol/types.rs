//! Symbol definitions and metadata.

use bitflags::bitflags;
use vela_ast::nodes::NodeID;
use vela_source::types::Span;

use super::scope::ScopeID;

/// The kind of symbol.
///
/// Identifies what type of declaration the symbol represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A `data` declaration.
    Data,
    /// One variant of a `data` declaration.
    DataVariant,
    /// A `fun` declaration.
    Function,
    /// An imported module alias.
    Import,
    /// A `trait` declaration.
    Trait,
    /// A function/method parameter.
    Parameter,
    /// A `data` type parameter (generic).
    TypeParameter,
    /// A `for`-loop variable.
    LoopVariable,
    /// A `VarAssign`-introduced binding, or the wildcard/binder half of a pattern.
    Variable,
}

/// The purpose tag recorded for one entry of a declaration's assignment
/// history. Consumers of the history use the last element's purpose to
/// tell a shadowing `let` from a loop variable or a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignPurpose {
    /// An ordinary `VarAssign` binding.
    Normal,
    /// A `For` loop variable.
    ForLoop,
    /// A function parameter.
    Parameter,
    /// A `data` type parameter.
    TypeVar,
}

bitflags! {
    /// Flags indicating properties of a symbol.
    ///
    /// These flags track various properties like mutability, scope visibility,
    /// and usage patterns.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u32 {
        /// Symbol can be modified after declaration.
        const MUTABLE = 1 << 0;
        /// Symbol is declared at global (module) scope, or targeted by a `global` statement.
        const GLOBAL = 1 << 1;
        /// Symbol has been used/referenced.
        const USED = 1 << 3;
        /// Symbol has been defined/assigned.
        const DEFINED = 1 << 4;
        /// Symbol's type carries the `ante` modifier (may be used in compile-time-evaluated expressions).
        const ANTE = 1 << 5;
    }
}

/// Represents a symbol in the program.
///
/// A symbol corresponds to a declared name (variable, function, parameter,
/// loop variable, etc.) and tracks its type, location, and assignment
/// history.
#[derive(Debug, Clone)]
pub struct Symbol {
    /// The symbol's name.
    pub name: String,
    /// The kind of symbol.
    pub kind: SymbolKind,
    /// Flags indicating symbol properties.
    pub flags: SymbolFlags,
    /// The type ID of this symbol (if known).
    pub type_id: Option<usize>,
    /// The AST node that defines this symbol.
    pub definition_node: NodeID,
    /// The span of the symbol's definition.
    pub span: Span,
    /// The scope where this symbol was declared.
    pub scope_id: ScopeID,
    /// All AST nodes that reference this symbol.
    pub references: Vec<NodeID>,
    /// Scopes that capture this variable (for closure analysis).
    pub captured_by: Vec<ScopeID>,
    /// Ordered bind/rebind points for this declaration. Consumers use the
    /// last element; earlier entries exist so a later rebind (e.g. a
    /// shadowing `VarAssign`) doesn't lose the original purpose.
    pub history: Vec<(AssignPurpose, NodeID)>,
}

impl Symbol {
    /// Creates a new symbol with the given properties.
    ///
    /// The symbol's assignment history starts with one entry tagged
    /// `purpose`, pointing at `definition_node`.
    #[must_use]
    pub fn new(
        name: String,
        kind: SymbolKind,
        purpose: AssignPurpose,
        definition_node: NodeID,
        span: Span,
        scope_id: ScopeID,
    ) -> Self {
        Self {
            name,
            kind,
            flags: SymbolFlags::empty(),
            type_id: None,
            definition_node,
            span,
            scope_id,
            references: Vec::new(),
            captured_by: Vec::new(),
            history: vec![(purpose, definition_node)],
        }
    }

    /// Adds a scope that captures this variable.
    pub fn add_capture(&mut self, scope_id: ScopeID) {
        if !self.captured_by.contains(&scope_id) {
            self.captured_by.push(scope_id);
        }
    }

    /// Adds a reference to this symbol.
    pub fn add_reference(&mut self, node_id: NodeID) { self.references.push(node_id); }

    /// Records a rebind of this declaration at `node_id` for `purpose`.
    pub fn rebind(&mut self, purpose: AssignPurpose, node_id: NodeID) {
        self.history.push((purpose, node_id));
    }

    /// Returns the purpose of the most recent bind/rebind point.
    #[must_use]
    pub fn last_purpose(&self) -> AssignPurpose {
        self.history.last().map_or(AssignPurpose::Normal, |(purpose, _)| *purpose)
    }

    /// Returns true if this symbol is captured by any closure.
    #[must_use]
    pub const fn is_captured(&self) -> bool { !self.captured_by.is_empty() }

    /// Returns true if this symbol has been defined.
    #[must_use]
    pub const fn is_defined(&self) -> bool { self.flags.contains(SymbolFlags::DEFINED) }

    /// Returns true if this symbol is global.
    #[must_use]
    pub const fn is_global(&self) -> bool { self.flags.contains(SymbolFlags::GLOBAL) }

    /// Returns true if this symbol is mutable.
    #[must_use]
    pub const fn is_mutable(&self) -> bool { self.flags.contains(SymbolFlags::MUTABLE) }

    /// Returns true if this symbol's type carries the `ante` modifier.
    #[must_use]
    pub const fn is_ante(&self) -> bool { self.flags.contains(SymbolFlags::ANTE) }

    /// Returns true if this symbol has been used.
    #[must_use]
    pub const fn is_used(&self) -> bool { self.flags.contains(SymbolFlags::USED) }

    /// Marks this symbol as defined.
    pub fn mark_defined(&mut self) { self.flags.insert(SymbolFlags::DEFINED); }

    /// Marks this symbol as used.
    pub fn mark_used(&mut self) { self.flags.insert(SymbolFlags::USED); }

    /// Sets the global flag.
    pub fn set_global(&mut self, global: bool) {
        if global {
            self.flags.insert(SymbolFlags::GLOBAL);
        } else {
            self.flags.remove(SymbolFlags::GLOBAL);
        }
    }

    /// Sets the mutability flag.
    pub fn set_mutable(&mut self, mutable: bool) {
        if mutable {
            self.flags.insert(SymbolFlags::MUTABLE);
        } else {
            self.flags.remove(SymbolFlags::MUTABLE);
        }
    }

    /// Sets the ante flag.
    pub fn set_ante(&mut self, ante: bool) {
        if ante {
            self.flags.insert(SymbolFlags::ANTE);
        } else {
            self.flags.remove(SymbolFlags::ANTE);
        }
    }
}

//! Name resolution.
//!
//! The second of the two semantic-analysis passes (see
//! [`crate::visitors::SymbolCollector`] for the first). Walks the whole
//! AST once, maintaining a scope stack, and:
//!
//! - opens a new scope for `Block`, `For`, `FuncDecl`, and `MatchBranch`
//!   (`Seq` never opens one);
//! - treats a `VarAssign` with modifiers as introducing a new, shadowing
//!   binding (its value resolved in the *outer* scope first), and one
//!   without modifiers as a mutation of an existing binding;
//! - binds every fresh `Var` inside a match pattern while leaving the
//!   body's `Var`s to resolve as ordinary references;
//! - writes the resolved declaration site back onto `Var.decl`,
//!   `Global.decl`, `VarAssign.decl`, and `For.var_decl`;
//! - records an ordered assignment history per declaration via
//!   [`Symbol::rebind`];
//! - runs the ante visitor afterward, which re-walks every `ante`-marked
//!   expression and reports a [`SemanticError::AnteViolation`] for each
//!   free variable it transitively depends on whose declaration lacks
//!   the `Ante` modifier.

use rustc_hash::FxHashSet;
use vela_ast::ast::AST;
use vela_ast::nodes::{
    ASTNode,
    AnyNode,
    Block,
    For,
    FuncDecl,
    Global,
    MatchBranch,
    ModifierToken,
    NodeID,
    Seq,
    Var,
    VarAssign,
};

use crate::error::SemanticError;
use crate::symbol::{AssignPurpose, ScopeKind, Symbol, SymbolKind, SymbolTable};

/// Walks an already-hoisted module, resolving every name reference.
pub struct NameResolver<'ast> {
    ast: &'ast mut AST,
    table: SymbolTable,
    errors: Vec<SemanticError>,
    /// Set while visiting a match pattern: a fresh `Var` binds instead
    /// of being looked up.
    implicit_declare: bool,
}

impl<'ast> NameResolver<'ast> {
    #[must_use]
    pub fn new(ast: &'ast mut AST, table: SymbolTable) -> Self {
        Self { ast, table, errors: Vec::new(), implicit_declare: false }
    }

    /// Resolves `module_id` (a `Root`), returning the completed symbol
    /// table.
    ///
    /// ## Errors
    ///
    /// Returns every [`SemanticError`] accumulated during resolution
    /// (undefined names, duplicate bindings, ante violations).
    pub fn resolve(mut self, module_id: NodeID) -> Result<SymbolTable, Vec<SemanticError>> {
        self.visit(module_id);

        if !self.errors.is_empty() {
            return Err(self.errors);
        }

        let ante_errors = AnteChecker::new(self.ast, &self.table).check(module_id);
        if let Err(mut errors) = ante_errors {
            self.errors.append(&mut errors);
        }

        if self.errors.is_empty() { Ok(self.table) } else { Err(self.errors) }
    }

    fn node_data(&self, node_id: NodeID) -> Option<AnyNode> {
        self.ast.get_node(node_id).map(|node| node.data.clone())
    }

    fn span_of(&self, node_id: NodeID) -> Option<vela_source::types::Span> {
        self.ast.get_node(node_id).map(|node| node.span)
    }

    fn enter_scope(&mut self, kind: ScopeKind) {
        let parent = self.table.current_scope();
        let scope_id = self.table.create_scope(kind, parent);
        self.table.enter_scope(scope_id);
    }

    fn exit_scope(&mut self) { let _ = self.table.exit_scope(); }

    fn define_symbol(&mut self, name: String, kind: SymbolKind, purpose: AssignPurpose, node_id: NodeID) {
        let Some(span) = self.span_of(node_id) else { return };
        let scope_id = self.table.current_scope().expect("scope stack is never empty");
        let symbol = Symbol::new(name.clone(), kind, purpose, node_id, span, scope_id);
        if let Err(error) = self.table.define_symbol(name, symbol) {
            self.errors.push(error);
        }
    }

    /// Central dispatch. Node kinds with no binding behavior of their
    /// own just recurse into their children.
    fn visit(&mut self, node_id: NodeID) {
        let Some(data) = self.node_data(node_id) else { return };
        match data {
            AnyNode::Block(block) => self.visit_block(&block),
            AnyNode::Seq(seq) => self.visit_seq(&seq),
            AnyNode::VarAssign(assign) => self.visit_var_assign(node_id, &assign),
            AnyNode::For(for_loop) => self.visit_for(node_id, &for_loop),
            AnyNode::MatchBranch(branch) => self.visit_match_branch(&branch),
            AnyNode::FuncDecl(func) => self.visit_func_decl(&func),
            AnyNode::Var(var) => self.visit_var(node_id, &var),
            AnyNode::Global(global) => self.visit_global(node_id, &global),
            other => {
                for child in other.children() {
                    self.visit(child);
                }
            }
        }
    }

    /// Visits a pattern position (a match branch's `pattern` field): a
    /// `Var` binds a fresh name (unless it's the `_` wildcard), a
    /// `Tuple` destructures positionally, a `NamedVal` is a union
    /// constructor whose payload is itself a pattern, and anything else
    /// (a literal) has nothing to resolve.
    fn visit_pattern(&mut self, node_id: NodeID) {
        let Some(data) = self.node_data(node_id) else { return };
        match data {
            AnyNode::Var(var) => {
                if var.is_wildcard() {
                    return;
                }
                self.define_symbol(var.name.clone(), SymbolKind::Variable, AssignPurpose::Normal, node_id);
                self.set_var_decl(node_id, node_id);
            }
            AnyNode::Tuple(tuple) => {
                for element in tuple.elements {
                    self.visit_pattern(element);
                }
            }
            AnyNode::NamedVal(named) => self.visit_pattern(named.value),
            _ => {}
        }
    }

    fn visit_block(&mut self, block: &Block) {
        self.enter_scope(ScopeKind::Block);
        for &stmt in &block.statements {
            self.visit(stmt);
        }
        self.exit_scope();
    }

    fn visit_seq(&mut self, seq: &Seq) {
        for &stmt in &seq.statements {
            self.visit(stmt);
        }
    }

    fn visit_func_decl(&mut self, func: &FuncDecl) {
        self.enter_scope(ScopeKind::Function);
        for &param_id in &func.params {
            self.define_parameter(param_id);
        }
        if let Some(return_type) = func.return_type {
            self.visit(return_type);
        }
        self.visit(func.body);
        self.exit_scope();
    }

    fn define_parameter(&mut self, param_id: NodeID) {
        let Some(AnyNode::NamedVal(named)) = self.node_data(param_id) else { return };
        self.define_symbol(named.name.clone(), SymbolKind::Parameter, AssignPurpose::Parameter, param_id);
        self.visit(named.value);
    }

    /// Rule 2/3: a modified `VarAssign` shadows with a fresh binding,
    /// resolved value first; an unmodified one mutates whatever the
    /// name already resolves to, both sides in the existing scope.
    fn visit_var_assign(&mut self, node_id: NodeID, assign: &VarAssign) {
        self.visit(assign.value);

        if assign.modifiers.is_empty() {
            match self.table.lookup_in_scope_chain(&assign.name).map(|s| s.definition_node) {
                Some(decl_node) => {
                    self.set_var_assign_decl(node_id, decl_node);
                    if let Some(symbol) = self.table.lookup_in_scope_chain_mut(&assign.name) {
                        symbol.rebind(AssignPurpose::Normal, node_id);
                        symbol.mark_defined();
                    }
                }
                None => {
                    self.errors.push(SemanticError::UndefinedName {
                        name: assign.name.clone(),
                        span: assign.span,
                    });
                }
            }
        } else {
            self.define_symbol(assign.name.clone(), SymbolKind::Variable, AssignPurpose::Normal, node_id);
            if let Some(symbol) = self.table.lookup_in_scope_chain_mut(&assign.name) {
                if assign.modifiers.contains(&ModifierToken::Mut) {
                    symbol.set_mutable(true);
                }
                if assign.modifiers.contains(&ModifierToken::Ante) {
                    symbol.set_ante(true);
                }
            }
            self.set_var_assign_decl(node_id, node_id);
        }
    }

    /// Rule 5: the range is resolved in the outer scope, then a single
    /// new scope covers both the loop variable and the body.
    fn visit_for(&mut self, node_id: NodeID, for_loop: &For) {
        self.visit(for_loop.range);
        self.enter_scope(ScopeKind::Loop);
        self.define_symbol(
            for_loop.var_name.clone(),
            SymbolKind::LoopVariable,
            AssignPurpose::ForLoop,
            node_id,
        );
        self.set_for_var_decl(node_id, node_id);
        self.visit(for_loop.body);
        self.exit_scope();
    }

    /// Rule 6: a fresh scope per branch, with `implicit_declare` set
    /// while the pattern is visited and cleared for the guard and body.
    fn visit_match_branch(&mut self, branch: &MatchBranch) {
        self.enter_scope(ScopeKind::Match);
        self.implicit_declare = true;
        self.visit_pattern(branch.pattern);
        self.implicit_declare = false;
        if let Some(guard) = branch.guard {
            self.visit(guard);
        }
        self.visit(branch.body);
        self.exit_scope();
    }

    fn visit_var(&mut self, node_id: NodeID, var: &Var) {
        if self.implicit_declare {
            self.visit_pattern(node_id);
            return;
        }

        match self.table.lookup_in_scope_chain(&var.name).map(|s| s.definition_node) {
            Some(decl_node) => {
                self.set_var_decl(node_id, decl_node);
                if let Some(symbol) = self.table.lookup_in_scope_chain_mut(&var.name) {
                    symbol.mark_used();
                }
            }
            None => {
                self.errors.push(SemanticError::UndefinedName { name: var.name.clone(), span: var.span });
            }
        }
    }

    /// `global x` aliases an outer binding into the current scope so
    /// that subsequent mutating `VarAssign`s to `x` target it instead
    /// of shadowing.
    fn visit_global(&mut self, node_id: NodeID, global: &Global) {
        let Some(outer) = self.table.lookup_in_scope_chain(&global.name) else {
            self.errors
                .push(SemanticError::UndefinedName { name: global.name.clone(), span: global.span });
            return;
        };
        let decl_node = outer.definition_node;
        let scope_id = self.table.current_scope().expect("scope stack is never empty");
        let mut alias =
            Symbol::new(global.name.clone(), SymbolKind::Variable, AssignPurpose::Normal, decl_node, global.span, scope_id);
        alias.set_global(true);
        if let Err(error) = self.table.define_symbol(global.name.clone(), alias) {
            self.errors.push(error);
        }
        self.set_global_decl(node_id, decl_node);
    }

    fn set_var_decl(&mut self, node_id: NodeID, decl: NodeID) {
        if let Some(node) = self.ast.get_node_mut(node_id)
            && let AnyNode::Var(var) = &mut node.data
        {
            var.decl = Some(decl);
        }
    }

    fn set_global_decl(&mut self, node_id: NodeID, decl: NodeID) {
        if let Some(node) = self.ast.get_node_mut(node_id)
            && let AnyNode::Global(global) = &mut node.data
        {
            global.decl = Some(decl);
        }
    }

    fn set_var_assign_decl(&mut self, node_id: NodeID, decl: NodeID) {
        if let Some(node) = self.ast.get_node_mut(node_id)
            && let AnyNode::VarAssign(assign) = &mut node.data
        {
            assign.decl = Some(decl);
        }
    }

    fn set_for_var_decl(&mut self, node_id: NodeID, decl: NodeID) {
        if let Some(node) = self.ast.get_node_mut(node_id)
            && let AnyNode::For(for_loop) = &mut node.data
        {
            for_loop.var_decl = Some(decl);
        }
    }
}

/// Re-walks every `ante`-marked expression, reporting any free variable
/// it transitively depends on whose declaration lacks the `Ante`
/// modifier.
struct AnteChecker<'ast> {
    ast: &'ast AST,
    table: &'ast SymbolTable,
    errors: Vec<SemanticError>,
}

impl<'ast> AnteChecker<'ast> {
    fn new(ast: &'ast AST, table: &'ast SymbolTable) -> Self { Self { ast, table, errors: Vec::new() } }

    fn check(mut self, module_id: NodeID) -> Result<(), Vec<SemanticError>> {
        self.scan(module_id);
        if self.errors.is_empty() { Ok(()) } else { Err(self.errors) }
    }

    fn scan(&mut self, node_id: NodeID) {
        let Some(node) = self.ast.get_node(node_id) else { return };
        match &node.data {
            AnyNode::Mod(modifier) if modifier.token == ModifierToken::Ante => {
                let mut seen = FxHashSet::default();
                self.trace(modifier.target, &mut seen);
            }
            AnyNode::VarAssign(assign) if assign.modifiers.contains(&ModifierToken::Ante) => {
                let mut seen = FxHashSet::default();
                self.trace(assign.value, &mut seen);
            }
            _ => {}
        }
        for child in node.data.children() {
            self.scan(child);
        }
    }

    fn trace(&mut self, node_id: NodeID, seen: &mut FxHashSet<NodeID>) {
        if !seen.insert(node_id) {
            return;
        }
        let Some(node) = self.ast.get_node(node_id) else { return };
        if let AnyNode::Var(var) = &node.data {
            if let Some(decl) = var.decl {
                if let Some(symbol) = self.table.find_symbol_by_definition(decl)
                    && !symbol.is_ante()
                {
                    self.errors.push(SemanticError::AnteViolation {
                        name: var.name.clone(),
                        purpose: symbol.last_purpose(),
                        span: var.span,
                    });
                }
                self.trace(decl, seen);
            }
            return;
        }
        for child in node.data.children() {
            self.trace(child, seen);
        }
    }
}

//! A virtual filesystem tree for modules.
//!
//! Unlike the real filesystem, this tree can have content merged in from
//! several roots (the working directory, library search paths, ...), and
//! not every node corresponds to a whole file: some are submodules living
//! in the same file as their parent. Nodes are addressed by handle, the
//! same arena-plus-index discipline the AST and type universe use.

use rustc_hash::FxHashMap;

/// Handle into a `ModuleTree`'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId(u32);

impl ModuleId {
    const fn new(index: u32) -> Self { Self(index) }

    #[must_use]
    pub const fn index(self) -> u32 { self.0 }
}

#[derive(Debug)]
struct ModuleNode {
    name: String,
    children: FxHashMap<String, ModuleId>,
}

/// The module tree itself. A single tree has exactly one root, created
/// empty by [`ModuleTree::new`].
#[derive(Debug)]
pub struct ModuleTree {
    arena: Vec<ModuleNode>,
}

impl ModuleTree {
    #[must_use]
    pub fn new() -> Self {
        Self { arena: vec![ModuleNode { name: String::new(), children: FxHashMap::default() }] }
    }

    /// Returns the root node's handle.
    #[must_use]
    pub const fn root(&self) -> ModuleId { ModuleId::new(0) }

    /// The sentinel returned by a failed lookup. Mirrors `children.end()`
    /// on the underlying map: a value that is never a valid node handle
    /// for the purposes of comparison.
    #[must_use]
    pub const fn children_end(&self) -> Option<ModuleId> { None }

    /// Returns this node's own name, or the empty string for the root.
    #[must_use]
    pub fn name(&self, node: ModuleId) -> &str { &self.arena[node.index() as usize].name }

    /// Finds a single direct child of `node` with the given name.
    #[must_use]
    pub fn find(&self, node: ModuleId, name: &str) -> Option<ModuleId> {
        self.arena[node.index() as usize].children.get(name).copied()
    }

    /// Finds a descendant of `node` by walking a sequence of path
    /// components, each resolved via [`Self::find`] in turn. Returns
    /// `None` as soon as any component is missing.
    #[must_use]
    pub fn find_path<S: AsRef<str>>(&self, node: ModuleId, path: &[S]) -> Option<ModuleId> {
        let mut current = node;
        for component in path {
            current = self.find(current, component.as_ref())?;
        }
        Some(current)
    }

    /// Adds a single direct child to `node`. If a child with this name
    /// already exists, it is returned unchanged rather than replaced.
    pub fn add_child(&mut self, node: ModuleId, child_name: &str) -> ModuleId {
        if let Some(existing) = self.find(node, child_name) {
            return existing;
        }
        let id = ModuleId::new(u32::try_from(self.arena.len()).expect("module arena overflow"));
        self.arena.push(ModuleNode { name: child_name.to_owned(), children: FxHashMap::default() });
        self.arena[node.index() as usize].children.insert(child_name.to_owned(), id);
        id
    }

    /// Adds a descendant of `node` at the given relative path, creating
    /// any missing intermediate nodes. Never replaces an existing child.
    pub fn add_path<S: AsRef<str>>(&mut self, node: ModuleId, path: &[S]) -> ModuleId {
        let mut current = node;
        for component in path {
            current = self.add_child(current, component.as_ref());
        }
        current
    }
}

impl Default for ModuleTree {
    fn default() -> Self { Self::new() }
}

/// Splits and normalizes a raw source path into the component sequence
/// [`ModuleTree::find_path`] / [`ModuleTree::add_path`] expect:
///
/// 1. both `/` and `\` separate components;
/// 2. a leading or internal `.` component is discarded;
/// 3. the final component has any `.an` suffix stripped and its first
///    letter upper-cased (module names are capitalized).
#[must_use]
pub fn normalize_path(path: &str) -> Vec<String> {
    let mut components: Vec<String> = path
        .split(['/', '\\'])
        .filter(|component| !component.is_empty() && *component != ".")
        .map(ToOwned::to_owned)
        .collect();

    if let Some(last) = components.last_mut() {
        if let Some(stripped) = last.strip_suffix(".an") {
            *last = stripped.to_owned();
        }
        if let Some(first) = last.chars().next() {
            let mut capitalized = first.to_uppercase().collect::<String>();
            capitalized.push_str(&last[first.len_utf8()..]);
            *last = capitalized;
        }
    }

    components
}

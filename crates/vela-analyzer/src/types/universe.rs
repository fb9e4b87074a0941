//! The hash-consed type universe.
//!
//! Every semantic type used throughout analysis is minted once and
//! addressed forever after by its `TypeId`. Two requests for the "same"
//! type — same primitive tag, same pointee, same tuple shape, etc. —
//! return the identical handle, so type equality is `TypeId` equality.
//! There is no public way to construct a `Ty` directly; go through one
//! of the `get_*` factories on `TypeUniverse`.

use rustc_hash::FxHashMap;
use vela_ast::nodes::ModifierToken;

use super::ty::{NamedTypeFields, PrimitiveTag, Ty, TypeId};

fn modifier_ordinal(token: ModifierToken) -> u8 {
    match token {
        ModifierToken::Mut => 0,
        ModifierToken::Ante => 1,
        ModifierToken::Pub => 2,
    }
}

/// Digest key for a function or tuple's element handles, used so the
/// lookup table doesn't need `Vec<TypeId>` as a key directly.
fn digest(ids: &[TypeId]) -> String {
    let mut s = String::with_capacity(ids.len() * 6);
    for id in ids {
        s.push_str(&id.index().to_string());
        s.push(',');
    }
    s
}

/// The process-wide table of canonical types.
#[derive(Debug, Default)]
pub struct TypeUniverse {
    arena: Vec<Ty>,
    primitives: FxHashMap<u8, TypeId>,
    pointers: FxHashMap<u32, TypeId>,
    arrays: FxHashMap<(u32, usize), TypeId>,
    tuples: FxHashMap<String, TypeId>,
    functions: FxHashMap<String, TypeId>,
    type_vars: FxHashMap<String, TypeId>,
    named: FxHashMap<String, TypeId>,
    modifiers: FxHashMap<(u32, Vec<u8>), TypeId>,
}

impl TypeUniverse {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn intern(&mut self, ty: Ty) -> TypeId {
        let id = TypeId::new(u32::try_from(self.arena.len()).expect("type arena overflow"));
        self.arena.push(ty);
        id
    }

    /// Returns the `Ty` behind a handle.
    ///
    /// ## Panics
    ///
    /// Panics if `id` was not minted by this universe.
    #[must_use]
    pub fn resolve(&self, id: TypeId) -> &Ty {
        self.arena.get(id.index() as usize).expect("TypeId from a different universe")
    }

    /// Returns (minting if necessary) the canonical handle for a primitive tag.
    pub fn get_primitive(&mut self, tag: PrimitiveTag) -> TypeId {
        let key = tag as u8;
        if let Some(&id) = self.primitives.get(&key) {
            return id;
        }
        let id = self.intern(Ty::Primitive(tag));
        self.primitives.insert(key, id);
        id
    }

    /// Returns (minting if necessary) the canonical handle for `Ptr(inner)`.
    pub fn get_pointer(&mut self, inner: TypeId) -> TypeId {
        if let Some(&id) = self.pointers.get(&inner.index()) {
            return id;
        }
        let id = self.intern(Ty::Pointer(inner));
        self.pointers.insert(inner.index(), id);
        id
    }

    /// Returns (minting if necessary) the canonical handle for `[inner; len]`.
    pub fn get_array(&mut self, inner: TypeId, len: usize) -> TypeId {
        let key = (inner.index(), len);
        if let Some(&id) = self.arrays.get(&key) {
            return id;
        }
        let id = self.intern(Ty::Array { inner, len });
        self.arrays.insert(key, id);
        id
    }

    /// Returns (minting if necessary) the canonical handle for a tuple of
    /// element handles, keyed by their digest.
    pub fn get_tuple(&mut self, elements: Vec<TypeId>) -> TypeId {
        let key = digest(&elements);
        if let Some(&id) = self.tuples.get(&key) {
            return id;
        }
        let id = self.intern(Ty::Tuple(elements));
        self.tuples.insert(key, id);
        id
    }

    /// Returns (minting if necessary) the canonical handle for a function
    /// type, keyed by the digest of `params` followed by `return_type`.
    pub fn get_function(&mut self, params: Vec<TypeId>, return_type: TypeId) -> TypeId {
        let mut key = digest(&params);
        key.push('|');
        key.push_str(&return_type.index().to_string());
        if let Some(&id) = self.functions.get(&key) {
            return id;
        }
        let id = self.intern(Ty::Function { params, return_type });
        self.functions.insert(key, id);
        id
    }

    /// Returns (minting if necessary) the canonical handle for a free type
    /// variable, keyed by name.
    pub fn get_type_var(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.type_vars.get(name) {
            return id;
        }
        let id = self.intern(Ty::TypeVar(name.to_owned()));
        self.type_vars.insert(name.to_owned(), id);
        id
    }

    /// Returns the canonical handle for a `data`-declared name, keyed by
    /// name alone (never by fields). The first call for a given name
    /// mints a stub with no fields yet; later calls return the same
    /// handle. Use [`Self::create_named`] to fill the stub in once the
    /// declaration's body has been resolved.
    pub fn get_named(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.named.get(name) {
            return id;
        }
        let id = self.intern(Ty::Named {
            name: name.to_owned(),
            fields: std::cell::RefCell::new(None),
        });
        self.named.insert(name.to_owned(), id);
        id
    }

    /// Fills in the fields of a named type previously stubbed out by
    /// [`Self::get_named`]. Calling this more than once for the same
    /// handle replaces the previous fields.
    ///
    /// ## Panics
    ///
    /// Panics if `id` does not refer to a `Ty::Named`.
    pub fn create_named(&mut self, id: TypeId, fields: Vec<TypeId>, is_union: bool) {
        match self.arena.get(id.index() as usize) {
            Some(Ty::Named { fields: cell, .. }) => {
                *cell.borrow_mut() = Some(NamedTypeFields { fields, is_union });
            }
            _ => panic!("create_named called on a non-named TypeId"),
        }
    }

    /// Returns (minting if necessary) the canonical handle for a
    /// modifier-wrapped type, keyed by `(inner, sorted modifier tokens)`.
    pub fn get_modifier(&mut self, mut tokens: Vec<ModifierToken>, inner: TypeId) -> TypeId {
        let mut ordinals: Vec<u8> = tokens.iter().copied().map(modifier_ordinal).collect();
        ordinals.sort_unstable();
        ordinals.dedup();
        let key = (inner.index(), ordinals);
        if let Some(&id) = self.modifiers.get(&key) {
            return id;
        }
        // The stored `Ty::Modifier` keeps a single representative token;
        // when more than one modifier wraps the same inner type the
        // outermost-written one is kept and the rest only affect the key.
        tokens.sort_by_key(|t| modifier_ordinal(*t));
        let token = tokens.first().copied().unwrap_or(ModifierToken::Mut);
        let id = self.intern(Ty::Modifier { token, inner });
        self.modifiers.insert(key, id);
        id
    }

    /// Computes the size in bits of a type, per the ordered rules:
    ///
    /// - primitive ints/floats use their tag width, `bool` is 8 bits
    /// - pointers and functions are word-sized
    /// - arrays are `len * size_of(inner)`, 0 for an empty array
    /// - tuples and named types sum their field sizes
    /// - a lone type variable cannot be sized unless `force` is set, in
    ///   which case it is assumed to be word-sized
    /// - a modifier-wrapped type has the size of its inner type
    ///
    /// Returns `None` only for an unresolved type variable with
    /// `force == false`.
    #[must_use]
    pub fn size_in_bits(&self, id: TypeId, force: bool) -> Option<u32> {
        match self.resolve(id) {
            Ty::Primitive(tag) => Some(tag.bits()),
            Ty::Pointer(_) | Ty::Function { .. } => Some(usize::BITS),
            Ty::Array { inner, len } => {
                if *len == 0 {
                    Some(0)
                } else {
                    let inner_bits = self.size_in_bits(*inner, force)?;
                    Some(inner_bits * u32::try_from(*len).unwrap_or(u32::MAX))
                }
            }
            Ty::Tuple(elements) => {
                let mut total = 0u32;
                for e in elements {
                    total += self.size_in_bits(*e, force)?;
                }
                Some(total)
            }
            Ty::Named { fields, .. } => {
                let borrowed = fields.borrow();
                let Some(named) = borrowed.as_ref() else {
                    return if force { Some(usize::BITS) } else { None };
                };
                let mut total = 0u32;
                for e in &named.fields {
                    total += self.size_in_bits(*e, force)?;
                }
                Some(total)
            }
            Ty::TypeVar(_) => {
                if force {
                    Some(usize::BITS)
                } else {
                    None
                }
            }
            Ty::Modifier { inner, .. } => self.size_in_bits(*inner, force),
        }
    }
}

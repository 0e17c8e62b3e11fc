//! Arena-backed parse tree.
//!
//! Every string leaf and object node lives in a [`Tree`] and is addressed by a
//! typed handle. Parents refer to children by handle, so the tree owns every
//! node and the parser's nesting stack only holds copies of handles. Strings
//! and objects are kept in separate arenas: a [`StringId`] can only ever name
//! a string and an [`ObjectId`] only an object, so appending to a leaf never
//! needs a runtime kind check.
//!
//! Outside the crate the tree is read-only. It is navigated through the
//! borrowed [`ObjectRef`] and [`NodeRef`] views or exported through a
//! [`ValueFactory`].
//!
//! ```
//! use streamyjson::{ParserOptions, StreamingParser};
//!
//! let mut parser = StreamingParser::new(ParserOptions::default());
//! parser.consume(r#"{"user": {"name": "Ada"#).unwrap();
//!
//! let name = parser.root().get("user").and_then(|u| u.as_object()?.get("name"));
//! assert_eq!(name.and_then(|n| n.as_str()), Some("Ada"));
//! ```
use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::fmt;

use crate::factory::ValueFactory;

/// Handle to a string leaf in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringId(usize);

/// Handle to an object node in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

/// Handle to either kind of node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// A string leaf.
    String(StringId),
    /// An object node.
    Object(ObjectId),
}

impl From<StringId> for NodeId {
    fn from(id: StringId) -> Self {
        Self::String(id)
    }
}

impl From<ObjectId> for NodeId {
    fn from(id: ObjectId) -> Self {
        Self::Object(id)
    }
}

static NO_MEMBERS: BTreeMap<String, NodeId> = BTreeMap::new();

/// Node storage for one document.
///
/// Handles are only meaningful for the tree that issued them. Lookups with a
/// handle this tree never issued, for example one kept from before
/// [`reset`](crate::StreamingParser::reset), report absence with `None`.
///
/// Nodes are never freed while the tree lives. A value replaced by a later
/// duplicate key stays allocated, so a stream that keeps repeating a key
/// grows the tree with every repetition.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    strings: Vec<String>,
    objects: Vec<BTreeMap<String, NodeId>>,
}

impl Tree {
    /// Creates an empty string leaf.
    pub(crate) fn new_string(&mut self) -> StringId {
        let id = StringId(self.strings.len());
        self.strings.push(String::new());
        id
    }

    /// Creates an empty object node.
    pub(crate) fn new_object(&mut self) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(BTreeMap::new());
        id
    }

    /// Inserts or replaces the member `key` of `object`.
    ///
    /// A replaced child stays in the arena but is no longer reachable from
    /// `object`.
    pub(crate) fn set(&mut self, object: ObjectId, key: String, value: NodeId) {
        if let Some(members) = self.objects.get_mut(object.0) {
            members.insert(key, value);
        }
    }

    /// Creates a string leaf and attaches it to `object` under `key`.
    ///
    /// Children are always created before they are attached, so an object can
    /// never end up containing itself.
    pub(crate) fn insert_string(&mut self, object: ObjectId, key: String) -> StringId {
        let id = self.new_string();
        self.set(object, key, id.into());
        id
    }

    /// Creates an object node and attaches it to `object` under `key`.
    pub(crate) fn insert_object(&mut self, object: ObjectId, key: String) -> ObjectId {
        let id = self.new_object();
        self.set(object, key, id.into());
        id
    }

    /// Extends a string leaf by one character.
    pub(crate) fn append(&mut self, string: StringId, c: char) {
        if let Some(s) = self.strings.get_mut(string.0) {
            s.push(c);
        }
    }

    /// Looks up the member `key` of `object`.
    ///
    /// Absence is an ordinary outcome while a document is still streaming in.
    #[must_use]
    pub fn get(&self, object: ObjectId, key: &str) -> Option<NodeId> {
        self.objects.get(object.0)?.get(key).copied()
    }

    /// Returns the current contents of a string leaf.
    #[must_use]
    pub fn str(&self, string: StringId) -> Option<&str> {
        self.strings.get(string.0).map(String::as_str)
    }

    /// Returns a borrowed view of an object node.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<ObjectRef<'_>> {
        let members = self.objects.get(id.0)?;
        Some(ObjectRef {
            tree: self,
            id,
            members,
        })
    }

    /// A view of `id` that reads as empty if this tree never issued it.
    pub(crate) fn view(&self, id: ObjectId) -> ObjectRef<'_> {
        ObjectRef {
            tree: self,
            id,
            members: self.objects.get(id.0).unwrap_or(&NO_MEMBERS),
        }
    }

    /// Returns a borrowed view of any node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        match id {
            NodeId::String(s) => self.str(s).map(NodeRef::String),
            NodeId::Object(o) => self.object(o).map(NodeRef::Object),
        }
    }

    /// Converts the subtree rooted at `node` into the factory's representation.
    ///
    /// The tree is not modified; recursion depth equals the nesting depth of
    /// the subtree. Returns `None` for a handle this tree did not issue.
    pub fn export<F: ValueFactory>(&self, node: NodeId, factory: &F) -> Option<F::Any> {
        self.node(node).map(|node| node.export(factory))
    }
}

/// A borrowed view of an object node.
#[derive(Clone, Copy)]
pub struct ObjectRef<'t> {
    tree: &'t Tree,
    id: ObjectId,
    members: &'t BTreeMap<String, NodeId>,
}

impl<'t> ObjectRef<'t> {
    /// The handle of the viewed object.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Looks up a member.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<NodeRef<'t>> {
        self.members.get(key).and_then(|id| self.tree.node(*id))
    }

    /// Number of members parsed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if no member has been parsed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the members in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'t str, NodeRef<'t>)> + use<'t> {
        let tree = self.tree;
        self.members
            .iter()
            .filter_map(move |(key, id)| Some((key.as_str(), tree.node(*id)?)))
    }

    /// Exports this object through `factory`.
    pub fn export<F: ValueFactory>(&self, factory: &F) -> F::Any {
        let mut object = factory.new_object();
        for (key, child) in self.iter() {
            let child = child.export(factory);
            factory.insert_object(&mut object, key, child);
        }
        factory.into_any_object(object)
    }
}

impl fmt::Debug for ObjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// A borrowed view of any node.
#[derive(Clone, Copy)]
pub enum NodeRef<'t> {
    /// A string leaf with the characters appended so far.
    String(&'t str),
    /// An object node.
    Object(ObjectRef<'t>),
}

impl<'t> NodeRef<'t> {
    /// Returns the string contents if this is a leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&'t str> {
        match *self {
            NodeRef::String(s) => Some(s),
            NodeRef::Object(_) => None,
        }
    }

    /// Returns the object view if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<ObjectRef<'t>> {
        match *self {
            NodeRef::String(_) => None,
            NodeRef::Object(o) => Some(o),
        }
    }

    /// Exports this node through `factory`.
    pub fn export<F: ValueFactory>(&self, factory: &F) -> F::Any {
        match *self {
            NodeRef::String(s) => factory.into_any_str(factory.new_string(s)),
            NodeRef::Object(o) => o.export(factory),
        }
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::String(s) => fmt::Debug::fmt(s, f),
            NodeRef::Object(o) => fmt::Debug::fmt(o, f),
        }
    }
}

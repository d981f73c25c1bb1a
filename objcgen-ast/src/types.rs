//! Resolved types, modifiers and annotations.

use serde::{Deserialize, Serialize};

/// What a resolved type is, as far as declaration output cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRefKind {
    /// A primitive value type (`int`, `boolean`, `void`, ...).
    Primitive,
    /// A concrete or abstract class.
    Class,
    /// An interface type.
    Interface,
    /// The root object type.
    Object,
    /// The runtime class-handle type.
    ClassHandle,
    /// An array with the given element type.
    Array(Box<TypeRef>),
}

/// A resolved type.
///
/// `name` is the source-level qualified name. Nested types use `$` to
/// separate the outer and inner simple names (`com.foo.Outer$Inner`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    pub kind: TypeRefKind,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, kind: TypeRefKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(name, TypeRefKind::Primitive)
    }

    pub fn void() -> Self {
        Self::primitive("void")
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeRefKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeRefKind::Interface)
    }

    pub fn object() -> Self {
        Self::new("java.lang.Object", TypeRefKind::Object)
    }

    pub fn class_handle() -> Self {
        Self::new("java.lang.Class", TypeRefKind::ClassHandle)
    }

    pub fn string() -> Self {
        Self::class("java.lang.String")
    }

    pub fn array(element: TypeRef) -> Self {
        let name = format!("{}[]", element.name);
        Self::new(name, TypeRefKind::Array(Box::new(element)))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeRefKind::Primitive)
    }

    pub fn is_void(&self) -> bool {
        self.is_primitive() && self.name == "void"
    }

    /// The name after the last `.`, nested separators kept.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// The package part of the name, empty for the default package.
    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(i) => &self.name[..i],
            None => "",
        }
    }
}

/// A declaration modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
    Native,
    Synthetic,
}

/// The modifier set of a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers(Vec<Modifier>);

impl Modifiers {
    pub fn new(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        let mut set = Self::default();
        for m in modifiers {
            set.insert(m);
        }
        set
    }

    pub fn insert(&mut self, modifier: Modifier) {
        if !self.0.contains(&modifier) {
            self.0.push(modifier);
        }
    }

    pub fn with(mut self, modifier: Modifier) -> Self {
        self.insert(modifier);
        self
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn is_static(&self) -> bool {
        self.contains(Modifier::Static)
    }

    pub fn is_private(&self) -> bool {
        self.contains(Modifier::Private)
    }

    pub fn is_synthetic(&self) -> bool {
        self.contains(Modifier::Synthetic)
    }

    pub fn is_private_or_synthetic(&self) -> bool {
        self.is_private() || self.is_synthetic()
    }
}

/// An annotation applied to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// The annotation type name as written in source: either a bare
    /// simple name or a fully qualified one.
    pub type_name: String,
}

impl Annotation {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// Whether the annotation name was written fully qualified.
    pub fn is_qualified(&self) -> bool {
        self.type_name.contains('.')
    }
}

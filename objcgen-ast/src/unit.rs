//! Type declarations and compilation units.

use serde::{Deserialize, Serialize};

use crate::{
    AnnotationMember, BodyDeclaration, FieldDeclaration, Javadoc, Modifiers, TypeRef,
    VariableFragment,
};

/// The declared variant of a top-level or promoted type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Enum,
    Annotation,
}

/// A type declaration and its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    /// The declared type itself.
    pub ty: TypeRef,
    #[serde(default)]
    pub superclass: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub javadoc: Option<Javadoc>,
    #[serde(default)]
    pub body: Vec<BodyDeclaration>,
    /// Statements run once when the class is first used.
    #[serde(default)]
    pub class_init_statements: Vec<String>,
}

impl TypeDeclaration {
    pub fn new(kind: TypeKind, ty: TypeRef) -> Self {
        Self {
            kind,
            ty,
            superclass: None,
            interfaces: Vec::new(),
            modifiers: Modifiers::default(),
            javadoc: None,
            body: Vec::new(),
            class_init_statements: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, TypeRef::class(name))
    }

    pub fn superclass(mut self, ty: TypeRef) -> Self {
        self.superclass = Some(ty);
        self
    }

    pub fn interface(mut self, ty: TypeRef) -> Self {
        self.interfaces.push(ty);
        self
    }

    pub fn doc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub fn member(mut self, decl: impl Into<BodyDeclaration>) -> Self {
        self.body.push(decl.into());
        self
    }

    pub fn class_init(mut self, statement: impl Into<String>) -> Self {
        self.class_init_statements.push(statement.into());
        self
    }

    /// Field statements in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.body.iter().filter_map(|decl| match decl {
            BodyDeclaration::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Every field fragment, paired with its statement.
    pub fn all_fields(&self) -> impl Iterator<Item = (&FieldDeclaration, &VariableFragment)> {
        self.fields()
            .flat_map(|field| field.fragments.iter().map(move |f| (field, f)))
    }

    /// Enum constant names in declaration order.
    pub fn enum_constants(&self) -> impl Iterator<Item = &str> {
        self.body.iter().filter_map(|decl| match decl {
            BodyDeclaration::EnumConstant { name } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Whether this is a nested type that holds a reference to an outer
    /// instance.
    pub fn is_inner(&self) -> bool {
        self.ty.simple_name().contains('$') && !self.modifiers.is_static()
    }

    /// Annotation members in declaration order.
    pub fn annotation_members(&self) -> Vec<&AnnotationMember> {
        self.body
            .iter()
            .filter_map(|decl| match decl {
                BodyDeclaration::AnnotationMember(member) => Some(member),
                _ => None,
            })
            .collect()
    }
}

/// The unit of one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Path of the source file the unit was resolved from.
    pub source_path: String,
    pub types: Vec<TypeDeclaration>,
}

impl CompilationUnit {
    pub fn new(source_path: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, decl: TypeDeclaration) -> Self {
        self.types.push(decl);
        self
    }

    /// File stem of the source path (`src/com/foo/Bar.java` -> `Bar`).
    pub fn main_type_name(&self) -> &str {
        let file = self.source_path.rsplit('/').next().unwrap_or(&self.source_path);
        match file.find('.') {
            Some(i) => &file[..i],
            None => file,
        }
    }
}

macro_rules! impl_from_for_body {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for BodyDeclaration {
                fn from(value: $ty) -> Self {
                    BodyDeclaration::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_body!(
    Method(crate::MethodDeclaration),
    Field(FieldDeclaration),
    Function(crate::FunctionDeclaration),
    Native(crate::NativeDeclaration),
    AnnotationMember(AnnotationMember),
);

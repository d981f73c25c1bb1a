//! Member declarations inside a type body.

use serde::{Deserialize, Serialize};

use crate::{Annotation, Javadoc, Modifier, Modifiers, TypeRef};

/// A declaration in a type body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyDeclaration {
    Method(MethodDeclaration),
    Field(FieldDeclaration),
    Function(FunctionDeclaration),
    Native(NativeDeclaration),
    /// An instance or static initializer block.
    Initializer { is_static: bool },
    EnumConstant { name: String },
    AnnotationMember(AnnotationMember),
}

impl BodyDeclaration {
    /// A short label for the variant, used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BodyDeclaration::Method(_) => "method",
            BodyDeclaration::Field(_) => "field",
            BodyDeclaration::Function(_) => "function",
            BodyDeclaration::Native(_) => "native",
            BodyDeclaration::Initializer { .. } => "initializer",
            BodyDeclaration::EnumConstant { .. } => "enum_constant",
            BodyDeclaration::AnnotationMember(_) => "annotation_member",
        }
    }
}

/// A method or function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A resolved method or constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    /// The type that declares this method.
    pub declaring_type: TypeRef,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub is_constructor: bool,
    /// Ignored for constructors.
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub javadoc: Option<Javadoc>,
    /// Explicit selector override, used instead of the derived selector.
    #[serde(default)]
    pub selector: Option<String>,
    /// Already-translated body statements, one per line.
    #[serde(default)]
    pub body: Vec<String>,
}

impl MethodDeclaration {
    /// Create a `void` instance method.
    pub fn new(name: impl Into<String>, declaring_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            modifiers: Modifiers::default(),
            is_constructor: false,
            return_type: TypeRef::void(),
            parameters: Vec::new(),
            annotations: Vec::new(),
            javadoc: None,
            selector: None,
            body: Vec::new(),
        }
    }

    /// Create a constructor for `declaring_type`.
    pub fn constructor(declaring_type: TypeRef) -> Self {
        Self {
            is_constructor: true,
            ..Self::new("<init>", declaring_type)
        }
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = ty;
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn static_(self) -> Self {
        self.modifier(Modifier::Static)
    }

    pub fn annotation(mut self, type_name: impl Into<String>) -> Self {
        self.annotations.push(Annotation::new(type_name));
        self
    }

    pub fn doc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Add a line to the method body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }
}

/// Per-variable resolved facts for one field fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariableBinding {
    pub is_static: bool,
    /// A non-owning reference.
    pub is_weak: bool,
    /// A compile-time constant of primitive type; no storage is declared.
    pub is_primitive_constant: bool,
}

/// One declared name in a field statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableFragment {
    pub name: String,
    #[serde(default)]
    pub binding: VariableBinding,
}

impl VariableFragment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            binding: VariableBinding::default(),
        }
    }

    pub fn weak(mut self) -> Self {
        self.binding.is_weak = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.binding.is_static = true;
        self
    }

    pub fn primitive_constant(mut self) -> Self {
        self.binding.is_primitive_constant = true;
        self
    }
}

/// A field statement: one type shared by one or more fragments.
///
/// The fragment list is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    #[serde(default)]
    pub modifiers: Modifiers,
    pub ty: TypeRef,
    pub fragments: Vec<VariableFragment>,
    #[serde(default)]
    pub javadoc: Option<Javadoc>,
}

impl FieldDeclaration {
    pub fn new(ty: TypeRef, fragments: impl IntoIterator<Item = VariableFragment>) -> Self {
        let fragments: Vec<_> = fragments.into_iter().collect();
        assert!(!fragments.is_empty(), "field declaration without fragments");
        Self {
            modifiers: Modifiers::default(),
            ty,
            fragments,
            javadoc: None,
        }
    }

    /// Add a modifier. `Static` is mirrored into every fragment binding.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        if modifier == Modifier::Static {
            for fragment in &mut self.fragments {
                fragment.binding.is_static = true;
            }
        }
        self
    }

    pub fn doc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.is_static()
    }
}

/// A free function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Already-translated body statements, one per line.
    #[serde(default)]
    pub body: Vec<String>,
}

impl FunctionDeclaration {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            parameters: Vec::new(),
            modifiers: Modifiers::default(),
            body: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

/// A block of verbatim target code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeDeclaration {
    pub header_code: Option<String>,
    pub implementation_code: Option<String>,
}

/// A member of an annotation type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationMember {
    pub name: String,
    pub ty: TypeRef,
}

impl AnnotationMember {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "without fragments")]
    fn test_field_requires_fragments() {
        FieldDeclaration::new(TypeRef::string(), []);
    }

    #[test]
    fn test_static_modifier_reaches_bindings() {
        let field = FieldDeclaration::new(
            TypeRef::primitive("int"),
            [VariableFragment::new("a"), VariableFragment::new("b")],
        )
        .modifier(Modifier::Static);
        assert!(field.is_static());
        assert!(field.fragments.iter().all(|f| f.binding.is_static));
    }

    #[test]
    fn test_constructor_builder() {
        let ctor = MethodDeclaration::constructor(TypeRef::class("com.foo.Bar"))
            .param("x", TypeRef::primitive("int"));
        assert!(ctor.is_constructor);
        assert_eq!(ctor.parameters.len(), 1);
        assert!(!ctor.is_static());
    }

    #[test]
    fn test_body_declaration_tagging() {
        let decl: BodyDeclaration = serde_json::from_str(
            r#"{"kind":"field","ty":{"name":"int","kind":"primitive"},"fragments":[{"name":"count"}]}"#,
        )
        .unwrap();
        assert_eq!(decl.kind_name(), "field");

        let decl: BodyDeclaration =
            serde_json::from_str(r#"{"kind":"initializer","is_static":true}"#).unwrap();
        assert_eq!(decl, BodyDeclaration::Initializer { is_static: true });
    }
}

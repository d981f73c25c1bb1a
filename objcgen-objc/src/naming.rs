//! Objective-C naming conventions.

use objcgen_ast::{MethodDeclaration, TypeRef, TypeRefKind};
use objcgen_codegen::NameTable;
use objcgen_core::{camel_case_package, capitalize};

/// Identifiers that cannot name a variable in generated code.
const RESERVED_WORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "id", "self", "super", "nil", "Nil", "YES",
    "NO", "BOOL", "SEL", "Class", "IMP", "NULL", "in", "out", "inout", "bycopy", "byref",
    "oneway",
];

/// The default naming table for Objective-C output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjcNameTable;

impl ObjcNameTable {
    pub fn is_reserved(&self, name: &str) -> bool {
        RESERVED_WORDS.contains(&name)
    }

    fn primitive_type(name: &str) -> &str {
        match name {
            "boolean" => "BOOL",
            "byte" => "char",
            "char" => "unichar",
            "long" => "long long",
            other => other,
        }
    }

    /// The selector keyword naming a parameter type (`Int`, `NSString`, `Id`).
    fn parameter_keyword(&self, ty: &TypeRef) -> String {
        match &ty.kind {
            TypeRefKind::Primitive => capitalize(&ty.name),
            TypeRefKind::Object => "Id".to_string(),
            TypeRefKind::ClassHandle => "IOSClass".to_string(),
            TypeRefKind::Array(element) => format!("{}Array", self.parameter_keyword(element)),
            TypeRefKind::Class | TypeRefKind::Interface => self.full_name(ty),
        }
    }

    /// Selectors fixed by the host object model.
    fn reserved_selector(method: &MethodDeclaration) -> Option<&'static str> {
        match (method.name.as_str(), method.parameters.len()) {
            ("hashCode", 0) => Some("hash"),
            ("toString", 0) => Some("description"),
            ("equals", 1) => Some("isEqual:"),
            _ => None,
        }
    }
}

impl NameTable for ObjcNameTable {
    fn objc_type(&self, ty: &TypeRef) -> String {
        match &ty.kind {
            TypeRefKind::Primitive => Self::primitive_type(&ty.name).to_string(),
            TypeRefKind::Object | TypeRefKind::Interface => "id".to_string(),
            TypeRefKind::ClassHandle => "IOSClass *".to_string(),
            TypeRefKind::Array(element) if element.is_primitive() => {
                format!("IOS{}Array *", capitalize(&element.name))
            }
            TypeRefKind::Array(_) => "IOSObjectArray *".to_string(),
            TypeRefKind::Class => format!("{} *", self.full_name(ty)),
        }
    }

    fn specific_objc_type(&self, ty: &TypeRef) -> String {
        match ty.kind {
            TypeRefKind::Interface => format!("id<{}>", self.full_name(ty)),
            _ => self.objc_type(ty),
        }
    }

    fn full_name(&self, ty: &TypeRef) -> String {
        match ty.name.as_str() {
            "java.lang.String" => "NSString".to_string(),
            "java.lang.Object" => "NSObject".to_string(),
            _ => format!(
                "{}{}",
                camel_case_package(ty.package()),
                ty.simple_name().replace('$', "_")
            ),
        }
    }

    fn method_selector(&self, method: &MethodDeclaration) -> String {
        if let Some(selector) = &method.selector {
            return selector.clone();
        }
        if !method.is_constructor {
            if let Some(selector) = Self::reserved_selector(method) {
                return selector.to_string();
            }
        }
        let mut selector = if method.is_constructor {
            "init".to_string()
        } else {
            self.variable_name(&method.name)
        };
        for (i, param) in method.parameters.iter().enumerate() {
            selector.push_str(if i == 0 { "With" } else { "with" });
            selector.push_str(&self.parameter_keyword(&param.ty));
            selector.push(':');
        }
        selector
    }

    fn variable_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            format!("{name}_")
        } else {
            name.to_string()
        }
    }

    fn field_name(&self, name: &str) -> String {
        // The trailing underscore already keeps reserved words apart.
        format!("{name}_")
    }
}

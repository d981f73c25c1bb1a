//! Test utilities for declaration generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use objcgen_ast::{MethodDeclaration, TypeRef, TypeRefKind};

use crate::language::NameTable;

/// A small, predictable naming table.
///
/// - primitives keep their source name
/// - the root object is `id`, the class handle `Class`
/// - `java.lang.String` is `NSString *`
/// - interfaces are `id`, arrays `IOSObjectArray *`
/// - other classes are `<SimpleName> *`, with `$` replaced by `_`
/// - selectors are the explicit override, or the method name followed by
///   `:` and then `<param>:` for every further parameter
#[derive(Debug, Clone, Copy, Default)]
pub struct StubNames;

impl NameTable for StubNames {
    fn objc_type(&self, ty: &TypeRef) -> String {
        match &ty.kind {
            TypeRefKind::Primitive => ty.name.clone(),
            TypeRefKind::Object => "id".to_string(),
            TypeRefKind::ClassHandle => "Class".to_string(),
            TypeRefKind::Interface => "id".to_string(),
            TypeRefKind::Array(_) => "IOSObjectArray *".to_string(),
            TypeRefKind::Class if ty.name == "java.lang.String" => "NSString *".to_string(),
            TypeRefKind::Class => format!("{} *", self.full_name(ty)),
        }
    }

    fn full_name(&self, ty: &TypeRef) -> String {
        ty.simple_name().replace('$', "_")
    }

    fn method_selector(&self, method: &MethodDeclaration) -> String {
        if let Some(selector) = &method.selector {
            return selector.clone();
        }
        let head = if method.is_constructor {
            "init"
        } else {
            method.name.as_str()
        };
        let mut selector = head.to_string();
        for (i, param) in method.parameters.iter().enumerate() {
            if i != 0 {
                selector.push_str(&param.name);
            }
            selector.push(':');
        }
        selector
    }
}

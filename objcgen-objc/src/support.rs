//! Pieces shared by the header and implementation passes.

use objcgen_ast::{
    BodyDeclaration, CompilationUnit, FunctionDeclaration, MethodDeclaration, Modifiers,
    TypeDeclaration, TypeRef, VariableFragment,
};
use objcgen_codegen::{FieldVisibility, NameTable, SourceWriter};
use objcgen_core::Options;

/// Superclass of every translated enum.
pub const ENUM_SUPERCLASS: &str = "JavaLangEnum";
/// Protocol adopted by every translated annotation type.
pub const ANNOTATION_PROTOCOL: &str = "JavaLangAnnotationAnnotation";
pub const ROOT_CLASS: &str = "NSObject";

/// Print the comment block that opens every generated file.
pub fn print_preamble(w: &mut SourceWriter<'_>, unit: &CompilationUnit) {
    w.out()
        .println("//")
        .println("//  Generated by the objcgen translator.")
        .println(&format!("//  source: {}", unit.source_path))
        .println("//")
        .newline();
}

/// A type followed by a declarator, keeping `*` against the name.
pub fn declarator(objc_type: &str, name: &str) -> String {
    if objc_type.ends_with('*') {
        format!("{objc_type}{name}")
    } else {
        format!("{objc_type} {name}")
    }
}

/// The C name of a static field's storage (`ComFooBar_DEFAULT`).
pub fn static_variable_name(
    names: &dyn NameTable,
    node: &TypeDeclaration,
    fragment: &VariableFragment,
) -> String {
    format!(
        "{}_{}",
        names.full_name(&node.ty),
        names.variable_name(&fragment.name)
    )
}

/// The C name of an enum's constant array.
pub fn enum_values_name(names: &dyn NameTable, node: &TypeDeclaration) -> String {
    format!("{}_values_", names.full_name(&node.ty))
}

/// Whether a member belongs in the implementation's class extension
/// instead of the public header.
pub fn is_hidden(modifiers: &Modifiers, options: Options) -> bool {
    options.hide_private_members && modifiers.is_private_or_synthetic()
}

/// Whether the implementation needs a class extension for `node`.
pub fn has_hidden_members(node: &TypeDeclaration, options: Options) -> bool {
    let hidden_fields = node.fields().any(|f| {
        !f.is_static() && FieldVisibility::PrivateOnly.includes(&f.modifiers, options)
    });
    hidden_fields
        || node.body.iter().any(|decl| match decl {
            BodyDeclaration::Method(m) => is_hidden(&m.modifiers, options),
            _ => false,
        })
}

/// Whether any instance variable of `node` is printed in this pass.
pub fn has_instance_variables(
    node: &TypeDeclaration,
    visibility: FieldVisibility,
    options: Options,
) -> bool {
    node.fields()
        .any(|f| !f.is_static() && visibility.includes(&f.modifiers, options))
}

/// The class methods every enum provides, with their bodies.
pub fn enum_support_methods(
    names: &dyn NameTable,
    node: &TypeDeclaration,
) -> [MethodDeclaration; 2] {
    let full_name = names.full_name(&node.ty);
    let values = enum_values_name(names, node);
    let count = node.enum_constants().count();
    let values_method = MethodDeclaration::new("values", node.ty.clone())
        .static_()
        .returns(TypeRef::array(node.ty.clone()))
        .body_line(format!(
            "return [IOSObjectArray arrayWithObjects:{values} count:{count} type:{full_name}_class_()];"
        ));
    let value_of = MethodDeclaration::new("valueOf", node.ty.clone())
        .static_()
        .returns(node.ty.clone())
        .param("name", TypeRef::string())
        .body_line(format!("for (int i = 0; i < {count}; i++) {{"))
        .body_line(format!("  {full_name} *e = {values}[i];"))
        .body_line("  if ([name isEqual:[e name]]) {")
        .body_line("    return e;")
        .body_line("  }")
        .body_line("}")
        .body_line("@throw create_JavaLangIllegalArgumentException_initWithNSString_(name);");
    [values_method, value_of]
}

/// Whether a function stays private to the implementation file.
pub fn is_private_function(function: &FunctionDeclaration) -> bool {
    function.modifiers.is_private()
}

#[cfg(test)]
mod tests {
    use objcgen_ast::{FieldDeclaration, Modifier, VariableFragment};

    use super::*;
    use crate::ObjcNameTable;

    #[test]
    fn test_declarator_keeps_star_against_name() {
        assert_eq!(declarator("NSString *", "name"), "NSString *name");
        assert_eq!(declarator("int", "count"), "int count");
        assert_eq!(declarator("id", "value"), "id value");
    }

    #[test]
    fn test_static_variable_name() {
        let node = TypeDeclaration::class("com.foo.Bar");
        let fragment = VariableFragment::new("DEFAULT").static_();
        assert_eq!(
            static_variable_name(&ObjcNameTable, &node, &fragment),
            "ComFooBar_DEFAULT"
        );
    }

    #[test]
    fn test_hidden_members() {
        let owner = TypeRef::class("com.foo.Bar");
        let node = TypeDeclaration::class("com.foo.Bar").member(
            MethodDeclaration::new("helper", owner).modifier(Modifier::Private),
        );
        assert!(!has_hidden_members(&node, Options::default()));
        assert!(has_hidden_members(
            &node,
            Options::default().with_hidden_private_members(true)
        ));
    }

    #[test]
    fn test_instance_variables_ignore_statics() {
        let node = TypeDeclaration::class("com.foo.Bar").member(
            FieldDeclaration::new(TypeRef::primitive("int"), [VariableFragment::new("n")])
                .modifier(Modifier::Static),
        );
        assert!(!has_instance_variables(
            &node,
            FieldVisibility::NonPrivate,
            Options::default()
        ));
    }
}

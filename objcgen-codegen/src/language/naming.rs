//! The naming collaborator.

use objcgen_ast::{AnnotationMember, MethodDeclaration, TypeRef};

/// Maps resolved source entities to target names, types and selectors.
///
/// Implementations must be pure and deterministic: the same input always
/// yields the same text, so generated output is a function of the unit,
/// the naming table and the options alone.
pub trait NameTable {
    /// The general target type text (`NSString *`, `id`, `int`).
    fn objc_type(&self, ty: &TypeRef) -> String;

    /// The most specific target type text, e.g. `id<Foo>` for interfaces.
    fn specific_objc_type(&self, ty: &TypeRef) -> String {
        self.objc_type(ty)
    }

    /// The target name of a type (`com.foo.Bar` -> `ComFooBar`).
    fn full_name(&self, ty: &TypeRef) -> String;

    /// The full selector of a method, colon-terminated per parameter.
    fn method_selector(&self, method: &MethodDeclaration) -> String;

    /// The target identifier for a parameter or local variable.
    fn variable_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// The target identifier for an instance variable.
    fn field_name(&self, name: &str) -> String {
        format!("{}_", self.variable_name(name))
    }

    /// The property name for an annotation member.
    fn annotation_property_name(&self, member: &AnnotationMember) -> String {
        member.name.clone()
    }

    fn capitalize(&self, s: &str) -> String {
        objcgen_core::capitalize(s)
    }

    /// Annotation members in the stable order used for constructor
    /// selectors.
    fn sorted_annotation_members<'m>(
        &self,
        members: &[&'m AnnotationMember],
    ) -> Vec<&'m AnnotationMember> {
        let mut sorted = members.to_vec();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }
}

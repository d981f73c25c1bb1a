//! Instance variable blocks and field setter registration.

use objcgen_ast::{FieldDeclaration, Modifiers, TypeDeclaration, TypeRef, VariableFragment};
use objcgen_core::Options;

use super::SourceWriter;

/// Ownership qualifier for non-owning references.
pub const WEAK_QUALIFIER: &str = "__weak";

/// Macro registering a write barrier for an object-typed field.
pub const FIELD_SETTER_MACRO: &str = "J2OBJC_FIELD_SETTER";

/// Which instance variables a pass prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisibility {
    /// Only private (or synthetic) fields.
    PrivateOnly,
    /// Non-private fields. Unless private members are hidden, private
    /// fields are printed as well, since nothing else declares them.
    NonPrivate,
}

impl FieldVisibility {
    /// Whether a field with `modifiers` is printed in this pass.
    pub fn includes(self, modifiers: &Modifiers, options: Options) -> bool {
        let print_all = !options.hide_private_members && self == FieldVisibility::NonPrivate;
        print_all || (self == FieldVisibility::PrivateOnly) == modifiers.is_private_or_synthetic()
    }
}

/// Whether each declared name of this type needs its own `*`.
///
/// False for primitives and for the pseudo-types that are already
/// references: `id`, `id<...>` and `Class`.
pub fn needs_pointer_marker(ty: &TypeRef, objc_type: &str) -> bool {
    !ty.is_primitive() && !is_reference_pseudo_type(objc_type)
}

fn is_reference_pseudo_type(objc_type: &str) -> bool {
    objc_type == "id"
        || objc_type == "Class"
        || (objc_type.starts_with("id<") && objc_type.ends_with('>'))
}

/// Every static fragment of the type; each gets accessors.
pub fn static_fields_needing_accessors(
    node: &TypeDeclaration,
) -> impl Iterator<Item = (&FieldDeclaration, &VariableFragment)> {
    node.all_fields().filter(|(_, f)| f.binding.is_static)
}

/// Static fragments that need storage initialized at class load.
///
/// Primitive constants are excluded; no variable is declared for them.
pub fn static_fields_needing_initialization(
    node: &TypeDeclaration,
) -> impl Iterator<Item = (&FieldDeclaration, &VariableFragment)> {
    node.all_fields()
        .filter(|(_, f)| f.binding.is_static && !f.binding.is_primitive_constant)
}

/// Whether the type needs a class initializer method.
pub fn has_initialize_method(node: &TypeDeclaration) -> bool {
    !node.class_init_statements.is_empty()
}

impl SourceWriter<'_> {
    /// Print the instance variables of `node` selected by `visibility`.
    ///
    /// The first printed field is preceded by a ` @public` section header;
    /// nothing at all is printed when no field matches.
    pub fn print_instance_variables(&mut self, node: &TypeDeclaration, visibility: FieldVisibility) {
        self.out.indent();
        let mut first = true;
        for field in node.fields() {
            if field.is_static() || !visibility.includes(&field.modifiers, self.options) {
                continue;
            }
            assert!(
                !field.fragments.is_empty(),
                "field of type `{}` in `{}` has no fragments",
                field.ty.name,
                node.ty.name
            );
            if first {
                // Promoted inner types reach these directly, so every
                // printed field is public.
                self.out.println(" @public");
                first = false;
            }
            self.print_doc_comment(field.javadoc.as_ref());
            self.out.print_indent();
            if field.fragments[0].binding.is_weak {
                // Consumers may compile the header with a different
                // memory management mode.
                self.out.print(WEAK_QUALIFIER).print(" ");
            }
            let mut objc_type = self.names.specific_objc_type(&field.ty);
            let needs_pointer = needs_pointer_marker(&field.ty, &objc_type);
            if needs_pointer {
                // Each declarator carries its own `*`: `Foo *one, *two;`
                if let Some(stripped) = objc_type.strip_suffix(" *") {
                    objc_type = stripped.to_string();
                }
            }
            let marker = if needs_pointer { "*" } else { "" };
            let declarators: Vec<String> = field
                .fragments
                .iter()
                .map(|f| format!("{marker}{}", self.names.field_name(&f.name)))
                .collect();
            self.out
                .print(&objc_type)
                .print(" ")
                .print(&declarators.join(", "))
                .println(";");
        }
        self.out.unindent();
    }

    /// Print one setter registration per object-typed instance fragment
    /// selected by `visibility`, preceded by a single blank line.
    ///
    /// Weak fragments are skipped: a non-owning reference needs no write
    /// barrier.
    pub fn print_field_setters(&mut self, node: &TypeDeclaration, visibility: FieldVisibility) {
        let declaring_name = self.names.full_name(&node.ty);
        let mut newline_printed = false;
        for field in node.fields() {
            if field.is_static()
                || field.ty.is_primitive()
                || !visibility.includes(&field.modifiers, self.options)
            {
                continue;
            }
            let type_name = self.names.objc_type(&field.ty);
            for fragment in &field.fragments {
                if fragment.binding.is_weak {
                    continue;
                }
                if !newline_printed {
                    newline_printed = true;
                    self.out.newline();
                }
                let field_name = self.names.field_name(&fragment.name);
                self.out.println(&format!(
                    "{FIELD_SETTER_MACRO}({declaring_name}, {field_name}, {type_name})"
                ));
            }
        }
    }
}

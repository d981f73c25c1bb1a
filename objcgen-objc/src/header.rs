//! The public header pass.

use objcgen_ast::{
    CompilationUnit, FunctionDeclaration, MethodDeclaration, NativeDeclaration, TypeDeclaration,
};
use objcgen_codegen::{
    DeclarationStrategy, FieldVisibility, SourceWriter,
    declaration::fields::{has_initialize_method, static_fields_needing_accessors},
    generate, print_declarations, print_functions, print_method,
};
use tracing::trace;

use crate::support::{
    ANNOTATION_PROTOCOL, ENUM_SUPERCLASS, ROOT_CLASS, declarator, enum_support_methods,
    enum_values_name, has_instance_variables, is_hidden, is_private_function, print_preamble,
    static_variable_name,
};

const HEADER_INCLUDE: &str = "#include \"J2ObjC_header.h\"";

/// Emits the `.h` file of a compilation unit.
///
/// Everything reachable from other translation units is declared here:
/// the `@interface` with its instance variables, non-hidden methods and
/// constructors, field setters, static field accessors and exported
/// functions. With [`hide_private_members`](objcgen_core::Options) set,
/// private members are left to [`ImplementationStrategy`](crate::ImplementationStrategy).
#[derive(Debug, Default)]
pub struct HeaderStrategy {
    is_inner: bool,
}

impl HeaderStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the whole header for `unit`. `file_name` is the output name
    /// without extension and forms the include guard.
    pub fn print_file(&mut self, w: &mut SourceWriter<'_>, unit: &CompilationUnit, file_name: &str) {
        let guard = format!("_{file_name}_H_");
        print_preamble(w, unit);
        w.out()
            .println(&format!("#ifndef {guard}"))
            .println(&format!("#define {guard}"))
            .newline()
            .println(HEADER_INCLUDE);
        w.ignoring_deprecations(|w| {
            for node in &unit.types {
                generate(self, w, node);
            }
        });
        w.out().newline().println(&format!("#endif // {guard}"));
    }

    fn print_interface(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration, superclass: &str) {
        let names = w.names();
        let full_name = names.full_name(&node.ty);
        let protocols: Vec<String> = node.interfaces.iter().map(|i| names.full_name(i)).collect();
        w.out().newline();
        w.print_doc_comment(node.javadoc.as_ref());
        w.out().print(&format!("@interface {full_name} : {superclass}"));
        if !protocols.is_empty() {
            w.out().print(&format!(" < {} >", protocols.join(", ")));
        }
        if has_instance_variables(node, FieldVisibility::NonPrivate, w.options()) {
            w.out().println(" {");
            w.print_instance_variables(node, FieldVisibility::NonPrivate);
            w.out().println("}");
        } else {
            w.out().newline();
        }
    }

    /// Everything after `@end`: class initialization, setters, static
    /// accessors, exported functions and the type literal.
    fn print_trailer(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration, static_init: bool) {
        let names = w.names();
        let full_name = names.full_name(&node.ty);
        let init_macro = if static_init {
            "J2OBJC_STATIC_INIT"
        } else {
            "J2OBJC_EMPTY_STATIC_INIT"
        };
        w.out().newline().println(&format!("{init_macro}({full_name})"));

        w.print_field_setters(node, FieldVisibility::NonPrivate);

        let mut first = true;
        for (field, fragment) in static_fields_needing_accessors(node) {
            if first {
                w.out().newline();
                first = false;
            }
            let objc_type = names.objc_type(&field.ty);
            let name = names.variable_name(&fragment.name);
            let accessor = if fragment.binding.is_primitive_constant {
                "J2OBJC_STATIC_FIELD_CONSTANT"
            } else if field.ty.is_primitive() {
                "J2OBJC_STATIC_FIELD_PRIMITIVE"
            } else {
                "J2OBJC_STATIC_FIELD_OBJ"
            };
            if !fragment.binding.is_primitive_constant {
                let storage = static_variable_name(names, node, fragment);
                w.out()
                    .println(&format!("FOUNDATION_EXPORT {};", declarator(&objc_type, &storage)));
            }
            w.out()
                .println(&format!("{accessor}({full_name}, {name}, {objc_type})"));
        }

        print_functions(self, w, &node.body);

        w.out()
            .newline()
            .println(&format!("J2OBJC_TYPE_LITERAL_HEADER({full_name})"));
    }
}

impl DeclarationStrategy for HeaderStrategy {
    fn generate_class(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        self.is_inner = node.is_inner();
        let superclass = match &node.superclass {
            Some(superclass) => w.names().full_name(superclass),
            None => ROOT_CLASS.to_string(),
        };
        self.print_interface(w, node, &superclass);
        print_declarations(self, w, &node.body);
        w.out().newline().println("@end");
        self.print_trailer(w, node, has_initialize_method(node));
    }

    fn generate_enum(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        self.is_inner = false;
        let names = w.names();
        let full_name = names.full_name(&node.ty);
        let enum_name = format!("{full_name}_Enum");

        w.out()
            .newline()
            .println(&format!("typedef NS_ENUM(NSUInteger, {enum_name}) {{"))
            .indent();
        for (ordinal, constant) in node.enum_constants().enumerate() {
            w.out().line(&format!("{enum_name}_{constant} = {ordinal},"));
        }
        w.out().unindent().println("};");

        self.print_interface(w, node, ENUM_SUPERCLASS);
        for method in enum_support_methods(names, node) {
            print_method(self, w, &method);
        }
        print_declarations(self, w, &node.body);
        w.out().newline().println("@end");

        let values = enum_values_name(names, node);
        w.out()
            .newline()
            .println(&format!("FOUNDATION_EXPORT {full_name} *{values}[];"));
        let constants: Vec<&str> = node.enum_constants().collect();
        if !constants.is_empty() {
            w.out().newline();
        }
        for constant in constants {
            w.out()
                .println(&format!("J2OBJC_ENUM_CONSTANT({full_name}, {constant})"));
        }

        // Constants are created by the class initializer.
        self.print_trailer(w, node, true);
    }

    fn generate_annotation(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        self.is_inner = false;
        let names = w.names();
        let full_name = names.full_name(&node.ty);
        let members = node.annotation_members();

        w.out().newline();
        w.print_doc_comment(node.javadoc.as_ref());
        w.out()
            .println(&format!("@protocol {full_name} < {ANNOTATION_PROTOCOL} >"));
        if !members.is_empty() {
            w.out().newline();
        }
        for member in &members {
            let objc_type = names.specific_objc_type(&member.ty);
            let property = names.annotation_property_name(member);
            w.out()
                .println(&format!("@property (readonly) {};", declarator(&objc_type, &property)));
        }
        w.out().newline().println("@end");

        w.out()
            .newline()
            .println(&format!("@interface {full_name} : {ROOT_CLASS} < {full_name} > {{"));
        if !members.is_empty() {
            w.out().indent().println(" @public");
            for member in &members {
                let objc_type = names.specific_objc_type(&member.ty);
                let ivar = names.field_name(&names.annotation_property_name(member));
                w.out().line(&format!("{};", declarator(&objc_type, &ivar)));
            }
            w.out().unindent();
        }
        w.out().println("}");
        if !members.is_empty() {
            let decl = w.annotation_constructor_declaration(&members);
            w.out().newline().println(&format!("{decl};"));
        }
        w.out().newline().println("@end");
        self.print_trailer(w, node, false);
    }

    fn print_normal_method(&mut self, w: &mut SourceWriter<'_>, method: &MethodDeclaration) {
        if is_hidden(&method.modifiers, w.options()) {
            trace!(method = %method.name, "hidden from header");
            return;
        }
        w.print_normal_method_declaration(method);
    }

    fn print_constructor(&mut self, w: &mut SourceWriter<'_>, method: &MethodDeclaration) {
        if is_hidden(&method.modifiers, w.options()) {
            trace!(ty = %method.declaring_type.name, "constructor hidden from header");
            return;
        }
        w.print_constructor_declaration(method, self.is_inner);
    }

    fn print_function(&mut self, w: &mut SourceWriter<'_>, function: &FunctionDeclaration) {
        if is_private_function(function) {
            return;
        }
        let signature = w.function_signature(function);
        w.out()
            .newline()
            .println(&format!("FOUNDATION_EXPORT {signature};"));
    }

    fn print_native_declaration(&mut self, w: &mut SourceWriter<'_>, native: &NativeDeclaration) {
        if let Some(code) = &native.header_code {
            w.out().newline().println(code.trim_end());
        }
    }
}

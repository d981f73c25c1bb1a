//! The implementation file pass.

use objcgen_ast::{
    CompilationUnit, FunctionDeclaration, MethodDeclaration, Modifier, NativeDeclaration,
    TypeDeclaration,
};
use objcgen_codegen::{
    DeclarationStrategy, FieldVisibility, SourceWriter,
    declaration::fields::{has_initialize_method, static_fields_needing_initialization},
    generate, print_declarations, print_functions, print_method,
};

use crate::support::{
    declarator, enum_support_methods, enum_values_name, has_hidden_members,
    has_instance_variables, is_hidden, is_private_function, print_preamble, static_variable_name,
};

const SOURCE_INCLUDE: &str = "#include \"J2ObjC_source.h\"";

/// Which part of the file the strategy hooks are printing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Pass {
    /// Declarations of hidden members and private function prototypes.
    #[default]
    Extension,
    /// Method, constructor and function definitions.
    Definitions,
}

/// Emits the `.m` file of a compilation unit.
#[derive(Debug, Default)]
pub struct ImplementationStrategy {
    pass: Pass,
    is_inner: bool,
}

impl ImplementationStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the whole implementation file for `unit`, which includes the
    /// header named `file_name`.
    pub fn print_file(&mut self, w: &mut SourceWriter<'_>, unit: &CompilationUnit, file_name: &str) {
        print_preamble(w, unit);
        w.out()
            .println(&format!("#include \"{file_name}.h\""))
            .println(SOURCE_INCLUDE);
        w.ignoring_deprecations(|w| {
            for node in &unit.types {
                generate(self, w, node);
            }
        });
    }

    /// The `@interface X ()` block for members kept out of the header.
    fn print_class_extension(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        let options = w.options();
        if !has_hidden_members(node, options) {
            return;
        }
        self.pass = Pass::Extension;
        let full_name = w.names().full_name(&node.ty);
        w.out().newline().print(&format!("@interface {full_name} ()"));
        if has_instance_variables(node, FieldVisibility::PrivateOnly, options) {
            w.out().println(" {");
            w.print_instance_variables(node, FieldVisibility::PrivateOnly);
            w.out().println("}");
        } else {
            w.out().newline();
        }
        print_declarations(self, w, &node.body);
        w.out().newline().println("@end");
        w.print_field_setters(node, FieldVisibility::PrivateOnly);
    }

    fn print_private_function_prototypes(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        self.pass = Pass::Extension;
        print_functions(self, w, &node.body);
    }

    fn print_static_storage(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        let names = w.names();
        let mut first = true;
        for (field, fragment) in static_fields_needing_initialization(node) {
            if first {
                w.out().newline();
                first = false;
            }
            let storage = static_variable_name(names, node, fragment);
            let objc_type = names.objc_type(&field.ty);
            w.out().println(&format!("{};", declarator(&objc_type, &storage)));
        }
    }

    fn print_initialize(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        let full_name = w.names().full_name(&node.ty);
        w.out()
            .newline()
            .println("+ (void)initialize {")
            .indent()
            .line(&format!("if (self == [{full_name} class]) {{"))
            .indent();
        for statement in &node.class_init_statements {
            w.out().line(statement);
        }
        w.out()
            .line(&format!("J2OBJC_SET_INITIALIZED({full_name})"))
            .unindent()
            .line("}")
            .unindent()
            .println("}");
    }

    /// Print `decl` followed by a braced, indented body.
    fn print_body(w: &mut SourceWriter<'_>, decl: &str, body: &[String]) {
        w.out().newline().print(decl).println(" {").indent();
        for line in body {
            w.out().line(line);
        }
        w.out().unindent().println("}");
    }

    fn print_definitions(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        self.pass = Pass::Definitions;
        print_declarations(self, w, &node.body);
    }

    fn print_type_literal(w: &mut SourceWriter<'_>, node: &TypeDeclaration, macro_name: &str) {
        let full_name = w.names().full_name(&node.ty);
        w.out().newline().println(&format!("{macro_name}({full_name})"));
    }
}

impl DeclarationStrategy for ImplementationStrategy {
    fn generate_class(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        self.is_inner = node.is_inner();
        let full_name = w.names().full_name(&node.ty);
        self.print_class_extension(w, node);
        self.print_private_function_prototypes(w, node);
        self.print_static_storage(w, node);

        w.out()
            .newline()
            .println(&format!("@implementation {full_name}"));
        self.print_definitions(w, node);
        if has_initialize_method(node) {
            self.print_initialize(w, node);
        }
        w.out().newline().println("@end");

        print_functions(self, w, &node.body);
        Self::print_type_literal(w, node, "J2OBJC_CLASS_TYPE_LITERAL_SOURCE");
    }

    fn generate_enum(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        self.is_inner = false;
        let names = w.names();
        let full_name = names.full_name(&node.ty);
        self.print_class_extension(w, node);
        self.print_private_function_prototypes(w, node);

        let values = enum_values_name(names, node);
        let count = node.enum_constants().count();
        w.out()
            .newline()
            .println(&format!("{full_name} *{values}[{count}];"));
        self.print_static_storage(w, node);

        w.out()
            .newline()
            .println(&format!("@implementation {full_name}"));
        self.pass = Pass::Definitions;
        for method in enum_support_methods(names, node) {
            print_method(self, w, &method);
        }
        self.print_definitions(w, node);
        self.print_initialize(w, node);
        w.out().newline().println("@end");

        print_functions(self, w, &node.body);
        Self::print_type_literal(w, node, "J2OBJC_CLASS_TYPE_LITERAL_SOURCE");
    }

    fn generate_annotation(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
        self.is_inner = false;
        let names = w.names();
        let full_name = names.full_name(&node.ty);
        let members = node.annotation_members();

        w.out()
            .newline()
            .println(&format!("@implementation {full_name}"));
        if !members.is_empty() {
            w.out().newline();
        }
        for member in &members {
            let property = names.annotation_property_name(member);
            let ivar = names.field_name(&property);
            w.out()
                .println(&format!("@synthesize {property} = {ivar};"));
        }
        if !members.is_empty() {
            let decl = w.annotation_constructor_declaration(&members);
            let mut body = vec!["if (self = [super init]) {".to_string()];
            for member in names.sorted_annotation_members(&members) {
                let property = names.annotation_property_name(member);
                body.push(format!("  {} = {property}__;", names.field_name(&property)));
            }
            body.push("}".to_string());
            body.push("return self;".to_string());
            Self::print_body(w, &decl, &body);
        }
        Self::print_body(
            w,
            "- (IOSClass *)annotationType",
            &[format!("return {full_name}_class_();")],
        );
        w.out().newline().println("@end");
        Self::print_type_literal(w, node, "J2OBJC_INTERFACE_TYPE_LITERAL_SOURCE");
    }

    fn print_normal_method(&mut self, w: &mut SourceWriter<'_>, method: &MethodDeclaration) {
        match self.pass {
            Pass::Extension => {
                if is_hidden(&method.modifiers, w.options()) {
                    w.print_normal_method_declaration(method);
                }
            }
            Pass::Definitions => {
                let decl = w.method_declaration(method);
                if method.modifiers.contains(Modifier::Abstract) {
                    let mut body = vec![
                        "// can't call an abstract method".to_string(),
                        "[self doesNotRecognizeSelector:_cmd];".to_string(),
                    ];
                    if !method.return_type.is_void() {
                        body.push("return 0;".to_string());
                    }
                    Self::print_body(w, &decl, &body);
                } else {
                    Self::print_body(w, &decl, &method.body);
                }
            }
        }
    }

    fn print_constructor(&mut self, w: &mut SourceWriter<'_>, method: &MethodDeclaration) {
        match self.pass {
            Pass::Extension => {
                if is_hidden(&method.modifiers, w.options()) {
                    w.print_constructor_declaration(method, self.is_inner);
                }
            }
            Pass::Definitions => {
                let decl = w.constructor_declaration(method, self.is_inner);
                if method.body.is_empty() {
                    Self::print_body(w, &decl, &["return [super init];".to_string()]);
                } else {
                    Self::print_body(w, &decl, &method.body);
                }
            }
        }
    }

    fn print_function(&mut self, w: &mut SourceWriter<'_>, function: &FunctionDeclaration) {
        let signature = w.function_signature(function);
        let private = is_private_function(function);
        match self.pass {
            Pass::Extension => {
                if private {
                    w.out()
                        .newline()
                        .println(&format!("__attribute__((unused)) static {signature};"));
                }
            }
            Pass::Definitions => {
                let decl = if private {
                    format!("static {signature}")
                } else {
                    signature
                };
                Self::print_body(w, &decl, &function.body);
            }
        }
    }

    fn print_native_declaration(&mut self, w: &mut SourceWriter<'_>, native: &NativeDeclaration) {
        if self.pass != Pass::Definitions {
            return;
        }
        if let Some(code) = &native.implementation_code {
            w.out().newline().println(code.trim_end());
        }
    }
}

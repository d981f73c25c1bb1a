//! Routing of type and body declarations to strategy hooks.
//!
//! Header-style and implementation-style output share everything in this
//! crate and differ only in the hooks of [`DeclarationStrategy`].

use objcgen_ast::{
    BodyDeclaration, FunctionDeclaration, MethodDeclaration, NativeDeclaration, TypeDeclaration,
    TypeKind,
};
use tracing::{debug, trace};

use super::SourceWriter;

/// Per-variant emission hooks supplied by a concrete output style.
pub trait DeclarationStrategy {
    fn generate_class(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration);

    fn generate_enum(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration);

    fn generate_annotation(&mut self, w: &mut SourceWriter<'_>, node: &TypeDeclaration);

    fn print_normal_method(&mut self, w: &mut SourceWriter<'_>, method: &MethodDeclaration);

    fn print_constructor(&mut self, w: &mut SourceWriter<'_>, method: &MethodDeclaration);

    fn print_function(&mut self, w: &mut SourceWriter<'_>, function: &FunctionDeclaration);

    fn print_native_declaration(&mut self, w: &mut SourceWriter<'_>, native: &NativeDeclaration);
}

/// Emit one type through the hook matching its declared variant.
pub fn generate<S>(strategy: &mut S, w: &mut SourceWriter<'_>, node: &TypeDeclaration)
where
    S: DeclarationStrategy + ?Sized,
{
    debug!(ty = %node.ty.name, kind = ?node.kind, "generating type");
    match node.kind {
        TypeKind::Class => strategy.generate_class(w, node),
        TypeKind::Enum => strategy.generate_enum(w, node),
        TypeKind::Annotation => strategy.generate_annotation(w, node),
    }
}

/// Emit a method as either a constructor or a normal method.
pub fn print_method<S>(strategy: &mut S, w: &mut SourceWriter<'_>, method: &MethodDeclaration)
where
    S: DeclarationStrategy + ?Sized,
{
    if method.is_constructor {
        strategy.print_constructor(w, method);
    } else {
        strategy.print_normal_method(w, method);
    }
}

/// Emit the methods and native blocks of a body, in order.
///
/// Every other variant is emitted through its own explicit call
/// (instance variables, field setters, functions) and passes through here.
pub fn print_declarations<'d, S, I>(strategy: &mut S, w: &mut SourceWriter<'_>, declarations: I)
where
    S: DeclarationStrategy + ?Sized,
    I: IntoIterator<Item = &'d BodyDeclaration>,
{
    for declaration in declarations {
        trace!(kind = declaration.kind_name(), "dispatching declaration");
        match declaration {
            BodyDeclaration::Method(method) => print_method(strategy, w, method),
            BodyDeclaration::Native(native) => strategy.print_native_declaration(w, native),
            BodyDeclaration::Field(_)
            | BodyDeclaration::Function(_)
            | BodyDeclaration::Initializer { .. }
            | BodyDeclaration::EnumConstant { .. }
            | BodyDeclaration::AnnotationMember(_) => {
                trace!(kind = declaration.kind_name(), "not emitted by print_declarations");
            }
        }
    }
}

/// Emit the free functions of a body, in source order.
pub fn print_functions<'d, S, I>(strategy: &mut S, w: &mut SourceWriter<'_>, declarations: I)
where
    S: DeclarationStrategy + ?Sized,
    I: IntoIterator<Item = &'d BodyDeclaration>,
{
    for declaration in declarations {
        if let BodyDeclaration::Function(function) = declaration {
            strategy.print_function(w, function);
        }
    }
}

#[cfg(test)]
mod tests {
    use objcgen_ast::{
        FieldDeclaration, FunctionDeclaration, MethodDeclaration, NativeDeclaration, TypeRef,
        VariableFragment,
    };
    use objcgen_core::Options;

    use super::*;
    use crate::testing::StubNames;

    /// Records which hook saw what.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl DeclarationStrategy for Recorder {
        fn generate_class(&mut self, _w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
            self.calls.push(format!("class {}", node.ty.name));
        }

        fn generate_enum(&mut self, _w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
            self.calls.push(format!("enum {}", node.ty.name));
        }

        fn generate_annotation(&mut self, _w: &mut SourceWriter<'_>, node: &TypeDeclaration) {
            self.calls.push(format!("annotation {}", node.ty.name));
        }

        fn print_normal_method(&mut self, _w: &mut SourceWriter<'_>, method: &MethodDeclaration) {
            self.calls.push(format!("method {}", method.name));
        }

        fn print_constructor(&mut self, _w: &mut SourceWriter<'_>, method: &MethodDeclaration) {
            self.calls
                .push(format!("constructor/{}", method.parameters.len()));
        }

        fn print_function(&mut self, _w: &mut SourceWriter<'_>, function: &FunctionDeclaration) {
            self.calls.push(format!("function {}", function.name));
        }

        fn print_native_declaration(
            &mut self,
            _w: &mut SourceWriter<'_>,
            native: &NativeDeclaration,
        ) {
            self.calls.push(format!(
                "native {}",
                native.header_code.as_deref().unwrap_or_default()
            ));
        }
    }

    fn body() -> Vec<BodyDeclaration> {
        let owner = TypeRef::class("com.foo.Bar");
        vec![
            FieldDeclaration::new(TypeRef::primitive("int"), [VariableFragment::new("x")]).into(),
            FunctionDeclaration::new("Bar_first", TypeRef::void()).into(),
            MethodDeclaration::constructor(owner.clone())
                .param("x", TypeRef::primitive("int"))
                .into(),
            MethodDeclaration::new("run", owner.clone()).into(),
            NativeDeclaration {
                header_code: Some("#define BAR 1".into()),
                implementation_code: None,
            }
            .into(),
            BodyDeclaration::Initializer { is_static: true },
            BodyDeclaration::EnumConstant { name: "A".into() },
            FunctionDeclaration::new("Bar_second", TypeRef::void()).into(),
        ]
    }

    #[test]
    fn test_generate_dispatches_by_kind() {
        let names = StubNames;
        let mut writer = SourceWriter::new(Options::default(), &names);
        let mut recorder = Recorder::default();
        for kind in [TypeKind::Class, TypeKind::Enum, TypeKind::Annotation] {
            let node = TypeDeclaration::new(kind, TypeRef::class("com.foo.T"));
            generate(&mut recorder, &mut writer, &node);
        }
        assert_eq!(
            recorder.calls,
            ["class com.foo.T", "enum com.foo.T", "annotation com.foo.T"]
        );
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_print_declarations_routes_methods_and_natives() {
        let names = StubNames;
        let mut writer = SourceWriter::new(Options::default(), &names);
        let mut recorder = Recorder::default();
        print_declarations(&mut recorder, &mut writer, &body());
        assert_eq!(
            recorder.calls,
            ["constructor/1", "method run", "native #define BAR 1"]
        );
    }

    #[test]
    fn test_print_functions_keeps_source_order() {
        let names = StubNames;
        let mut writer = SourceWriter::new(Options::default(), &names);
        let mut recorder = Recorder::default();
        print_functions(&mut recorder, &mut writer, &body());
        assert_eq!(recorder.calls, ["function Bar_first", "function Bar_second"]);
    }

    #[test]
    fn test_dyn_strategy() {
        let names = StubNames;
        let mut writer = SourceWriter::new(Options::default(), &names);
        let mut recorder = Recorder::default();
        let strategy: &mut dyn DeclarationStrategy = &mut recorder;
        print_method(
            strategy,
            &mut writer,
            &MethodDeclaration::new("stop", TypeRef::class("com.foo.Bar")),
        );
        assert_eq!(recorder.calls, ["method stop"]);
    }
}

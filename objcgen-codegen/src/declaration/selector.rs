//! Method, constructor and function signatures.
//!
//! A selector is split into colon-terminated segments, one per parameter.
//! Continuation lines are padded so every segment's colon lines up under
//! the first one:
//!
//! ```text
//! - (void)putKey:(NSString *)key
//!          value:(id)value
//! ```

use objcgen_ast::{AnnotationMember, FunctionDeclaration, MethodDeclaration};
use objcgen_core::pad;

use super::SourceWriter;
use crate::language::NameTable;

/// Return type rendered for every constructor.
pub const INSTANCE_TYPE: &str = "instancetype";

/// The selector whose return type is fixed by the host object model.
pub const HASH_SELECTOR: &str = "hash";

/// Return type rendered for [`HASH_SELECTOR`].
pub const HASH_RETURN_TYPE: &str = "NSUInteger";

/// Head every constructor selector starts with.
pub const INIT_HEAD: &str = "init";

/// Appended to annotation constructor parameter names so they cannot
/// collide with reserved identifiers.
pub const ANNOTATION_PARAM_SUFFIX: &str = "__";

/// Split a selector into its segments, dropping the colons.
///
/// `putKey:value:` yields `["putKey", "value"]`; `run` yields `["run"]`.
pub fn selector_segments(selector: &str) -> Vec<&str> {
    selector.split_terminator(':').collect()
}

fn width(s: &str) -> usize {
    s.chars().count()
}

/// Render a method declaration for `selector`, without the trailing `;`.
///
/// # Panics
///
/// When the selector does not have one segment per parameter, or a
/// parameterless method's selector ends in a colon.
pub fn construct_method_declaration(
    method: &MethodDeclaration,
    selector: &str,
    names: &dyn NameTable,
) -> String {
    let prefix = if method.is_static() { '+' } else { '-' };
    let return_type = if method.is_constructor {
        INSTANCE_TYPE.to_string()
    } else if selector == HASH_SELECTOR {
        HASH_RETURN_TYPE.to_string()
    } else {
        names.objc_type(&method.return_type)
    };
    let mut decl = format!("{prefix} ({return_type})");

    let segments = selector_segments(selector);
    if method.parameters.is_empty() {
        assert!(
            segments.len() == 1 && !selector.ends_with(':'),
            "selector `{selector}` of `{}` must be a single segment without a colon",
            method.name
        );
        decl.push_str(segments[0]);
        return decl;
    }

    assert_eq!(
        segments.len(),
        method.parameters.len(),
        "selector `{selector}` of `{}` does not match its parameter count",
        method.name
    );
    let base = width(&decl) + width(segments[0]);
    for (i, (segment, param)) in segments.iter().zip(&method.parameters).enumerate() {
        if i != 0 {
            decl.push('\n');
            decl.push_str(&pad(base.saturating_sub(width(segment))));
        }
        decl.push_str(&format!(
            "{segment}:({}){}",
            names.specific_objc_type(&param.ty),
            names.variable_name(&param.name)
        ));
    }
    decl
}

/// Replace the `init` head of a constructor selector with `init` followed
/// by the owning type's full name.
///
/// Promoted inner-type constructors would otherwise collide with the
/// overloads of their outer type.
pub fn inner_constructor_selector(selector: &str, owner_full_name: &str) -> String {
    let rest = selector.strip_prefix(INIT_HEAD).unwrap_or_else(|| {
        panic!("constructor selector `{selector}` does not start with `{INIT_HEAD}`")
    });
    format!("{INIT_HEAD}{owner_full_name}{rest}")
}

/// Render the constructor of an annotation type from its members.
///
/// Members are visited in the naming table's stable order; the selector
/// is `initWith<Member0>:` followed by ` with<MemberN>:` per member.
pub fn annotation_constructor_declaration(
    members: &[&AnnotationMember],
    names: &dyn NameTable,
) -> String {
    let mut decl = format!("- ({INSTANCE_TYPE}){INIT_HEAD}");
    for (i, member) in names.sorted_annotation_members(members).into_iter().enumerate() {
        decl.push_str(if i == 0 { "With" } else { " with" });
        let name = names.annotation_property_name(member);
        decl.push_str(&format!(
            "{}:({}){name}{ANNOTATION_PARAM_SUFFIX}",
            names.capitalize(&name),
            names.specific_objc_type(&member.ty)
        ));
    }
    decl
}

/// Render a free-function prototype, without the trailing `;`.
///
/// Pointer types keep their `*` against the name: `NSString *Foo_bar(int x)`.
pub fn function_signature(function: &FunctionDeclaration, names: &dyn NameTable) -> String {
    let mut sig = spaced(names.objc_type(&function.return_type));
    sig.push_str(&function.name);
    sig.push('(');
    let params: Vec<String> = function
        .parameters
        .iter()
        .map(|param| {
            let mut p = spaced(names.specific_objc_type(&param.ty));
            p.push_str(&names.variable_name(&param.name));
            p
        })
        .collect();
    sig.push_str(&params.join(", "));
    sig.push(')');
    sig
}

fn spaced(mut ty: String) -> String {
    if !ty.ends_with('*') {
        ty.push(' ');
    }
    ty
}

impl SourceWriter<'_> {
    /// Declaration text of a normal (non-constructor) method.
    pub fn method_declaration(&self, method: &MethodDeclaration) -> String {
        assert!(
            !method.is_constructor,
            "`{}` is a constructor; use constructor_declaration",
            method.name
        );
        let selector = self.names.method_selector(method);
        construct_method_declaration(method, &selector, self.names)
    }

    /// Declaration text of a constructor.
    ///
    /// With `is_inner`, the selector is rewritten with
    /// [`inner_constructor_selector`].
    pub fn constructor_declaration(&self, method: &MethodDeclaration, is_inner: bool) -> String {
        assert!(
            method.is_constructor,
            "`{}` is not a constructor",
            method.name
        );
        let mut selector = self.names.method_selector(method);
        if is_inner {
            let owner = self.names.full_name(&method.declaring_type);
            selector = inner_constructor_selector(&selector, &owner);
        }
        construct_method_declaration(method, &selector, self.names)
    }

    pub fn annotation_constructor_declaration(&self, members: &[&AnnotationMember]) -> String {
        annotation_constructor_declaration(members, self.names)
    }

    pub fn function_signature(&self, function: &FunctionDeclaration) -> String {
        function_signature(function, self.names)
    }
}

#[cfg(test)]
mod tests {
    use objcgen_ast::{MethodDeclaration, TypeRef};
    use objcgen_core::Options;

    use super::*;
    use crate::testing::StubNames;

    fn owner() -> TypeRef {
        TypeRef::class("com.foo.Map")
    }

    #[test]
    fn test_segments() {
        assert_eq!(selector_segments("run"), ["run"]);
        assert_eq!(selector_segments("putKey:value:"), ["putKey", "value"]);
        assert_eq!(selector_segments("at:"), ["at"]);
    }

    #[test]
    fn test_zero_parameters() {
        let m = MethodDeclaration::new("run", owner());
        assert_eq!(construct_method_declaration(&m, "run", &StubNames), "- (void)run");
    }

    #[test]
    fn test_static_prefix() {
        let m = MethodDeclaration::new("count", owner())
            .static_()
            .returns(TypeRef::primitive("int"));
        assert_eq!(construct_method_declaration(&m, "count", &StubNames), "+ (int)count");
    }

    #[test]
    fn test_continuation_lines_align_colons() {
        let m = MethodDeclaration::new("put", owner())
            .param("key", TypeRef::string())
            .param("value", TypeRef::object());
        let decl = construct_method_declaration(&m, "putKey:value:", &StubNames);
        let pad = "- (void)putKey:".len() - "value:".len();
        assert_eq!(
            decl,
            format!("- (void)putKey:(NSString *)key\n{}value:(id)value", " ".repeat(pad))
        );
        let lines: Vec<_> = decl.lines().collect();
        assert_eq!(lines[0].find(':'), lines[1].find(':'));
    }

    #[test]
    fn test_three_segments() {
        let m = MethodDeclaration::new("set", owner())
            .param("a", TypeRef::primitive("int"))
            .param("bb", TypeRef::primitive("int"))
            .param("c", TypeRef::primitive("int"));
        let decl = construct_method_declaration(&m, "setA:withLongerName:c:", &StubNames);
        let lines: Vec<_> = decl.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "withLongerName:(int)bb");
        assert_eq!(lines[2], "           c:(int)c");
    }

    #[test]
    fn test_hash_selector_return_type() {
        let m = MethodDeclaration::new("hashCode", owner()).returns(TypeRef::primitive("int"));
        assert_eq!(
            construct_method_declaration(&m, "hash", &StubNames),
            "- (NSUInteger)hash"
        );
    }

    #[test]
    fn test_constructor_return_type() {
        let m = MethodDeclaration::constructor(owner()).returns(TypeRef::string());
        assert_eq!(
            construct_method_declaration(&m, "init", &StubNames),
            "- (instancetype)init"
        );
    }

    #[test]
    #[should_panic(expected = "does not match its parameter count")]
    fn test_arity_mismatch_panics() {
        let m = MethodDeclaration::new("put", owner()).param("key", TypeRef::string());
        construct_method_declaration(&m, "putKey:value:", &StubNames);
    }

    #[test]
    #[should_panic(expected = "single segment without a colon")]
    fn test_trailing_colon_without_parameters_panics() {
        let m = MethodDeclaration::new("run", owner());
        construct_method_declaration(&m, "run:", &StubNames);
    }

    #[test]
    fn test_inner_constructor_selector() {
        assert_eq!(
            inner_constructor_selector("initWithInt:", "Outer_Inner"),
            "initOuter_InnerWithInt:"
        );
        assert_eq!(inner_constructor_selector("init", "Outer_Inner"), "initOuter_Inner");
    }

    #[test]
    #[should_panic(expected = "does not start with `init`")]
    fn test_inner_constructor_selector_requires_init() {
        inner_constructor_selector("create", "Outer");
    }

    #[test]
    fn test_writer_constructor_declaration() {
        let names = StubNames;
        let writer = SourceWriter::new(Options::default(), &names);
        let ctor = MethodDeclaration::constructor(TypeRef::class("com.foo.Outer$Inner"))
            .param("size", TypeRef::primitive("int"))
            .selector("initWithSize:");
        assert_eq!(
            writer.constructor_declaration(&ctor, false),
            "- (instancetype)initWithSize:(int)size"
        );
        assert_eq!(
            writer.constructor_declaration(&ctor, true),
            "- (instancetype)initOuter_InnerWithSize:(int)size"
        );
    }

    #[test]
    #[should_panic(expected = "is a constructor")]
    fn test_method_declaration_rejects_constructor() {
        let names = StubNames;
        let writer = SourceWriter::new(Options::default(), &names);
        writer.method_declaration(&MethodDeclaration::constructor(owner()));
    }

    #[test]
    fn test_annotation_constructor() {
        let value = AnnotationMember::new("value", TypeRef::primitive("int"));
        let name = AnnotationMember::new("name", TypeRef::string());
        assert_eq!(
            annotation_constructor_declaration(&[&value, &name], &StubNames),
            "- (instancetype)initWithName:(NSString *)name__ withValue:(int)value__"
        );
    }

    #[test]
    fn test_annotation_constructor_without_members() {
        assert_eq!(
            annotation_constructor_declaration(&[], &StubNames),
            "- (instancetype)init"
        );
    }

    #[test]
    fn test_function_signature() {
        let f = FunctionDeclaration::new("Map_hashOf", TypeRef::string())
            .param("self", TypeRef::class("com.foo.Map"))
            .param("seed", TypeRef::primitive("int"));
        assert_eq!(
            function_signature(&f, &StubNames),
            "NSString *Map_hashOf(Map *self, int seed)"
        );

        let f = FunctionDeclaration::new("Map_clear", TypeRef::void());
        assert_eq!(function_signature(&f, &StubNames), "void Map_clear()");
    }
}

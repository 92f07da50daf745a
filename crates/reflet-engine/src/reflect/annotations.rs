//! Annotation lookup
//!
//! Finds a type-level annotation, optionally searching the superclass chain
//! and then the interface closure. Types whose namespace starts with one of
//! the excluded prefixes are skipped entirely.

use super::hierarchy::{interface_closure, super_types};
use super::registry::TypeRegistry;
use super::type_info::{AnnotationRecord, TypeId};

/// Check if a type's namespace starts with one of `prefixes`
pub fn is_in_namespaces<S: AsRef<str>>(registry: &TypeRegistry, ty: TypeId, prefixes: &[S]) -> bool {
    let Some(descriptor) = registry.get(ty) else {
        return false;
    };
    prefixes
        .iter()
        .any(|prefix| descriptor.namespace.starts_with(prefix.as_ref()))
}

/// Find the annotation of type `kind` attached to `ty`
///
/// Returns `None` straight away when `ty` sits in an excluded namespace.
/// Otherwise the type's own annotations are checked; when nothing is found
/// and `search_hierarchy` is set, each super type (nearest first) and then
/// each interface of the closure is checked in turn, without expanding
/// their own hierarchies.
pub fn find_annotation<'r, S: AsRef<str>>(
    registry: &'r TypeRegistry,
    ty: TypeId,
    kind: TypeId,
    search_hierarchy: bool,
    excluded_namespaces: &[S],
) -> Option<&'r AnnotationRecord> {
    if is_in_namespaces(registry, ty, excluded_namespaces) {
        return None;
    }
    let direct = registry.get(ty)?.declared_annotation(kind);
    if direct.is_some() || !search_hierarchy {
        return direct;
    }

    super_types(registry, ty)
        .into_iter()
        .chain(interface_closure(registry, ty))
        .find_map(|ancestor| find_annotation(registry, ancestor, kind, false, excluded_namespaces))
}

/// Check whether `find_annotation` would find anything
pub fn has_annotation<S: AsRef<str>>(
    registry: &TypeRegistry,
    ty: TypeId,
    kind: TypeId,
    search_hierarchy: bool,
    excluded_namespaces: &[S],
) -> bool {
    find_annotation(registry, ty, kind, search_hierarchy, excluded_namespaces).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::TypeBuilder;
    use crate::value::Value;

    const NONE: &[&str] = &[];

    struct Fixture {
        registry: TypeRegistry,
        route: TypeId,
        base: TypeId,
        screen: TypeId,
        home: TypeId,
        plain: TypeId,
    }

    fn fixture() -> Fixture {
        let mut registry = TypeRegistry::new();
        let route = registry.register(TypeBuilder::annotation("app.meta", "Route")).unwrap();
        let screen = registry
            .register(
                TypeBuilder::interface("app.ui", "Screen")
                    .annotate(AnnotationRecord::new(route).with("path", "/screen")),
            )
            .unwrap();
        let base = registry
            .register(
                TypeBuilder::class("lib.base", "BaseScreen")
                    .annotate(AnnotationRecord::new(route).with("path", "/base")),
            )
            .unwrap();
        let home = registry
            .register(TypeBuilder::class("app.ui", "Home").extends(base).implements(screen))
            .unwrap();
        let plain = registry.register(TypeBuilder::class("app.ui", "Plain")).unwrap();
        Fixture {
            registry,
            route,
            base,
            screen,
            home,
            plain,
        }
    }

    fn path(record: Option<&AnnotationRecord>) -> Option<&str> {
        record.and_then(|r| r.get("path")).and_then(Value::as_str)
    }

    #[test]
    fn test_direct_annotation() {
        let f = fixture();
        let found = find_annotation(&f.registry, f.base, f.route, false, NONE);
        assert_eq!(path(found), Some("/base"));
        assert!(find_annotation(&f.registry, f.plain, f.route, true, NONE).is_none());
    }

    #[test]
    fn test_superclass_annotation_found_first() {
        let f = fixture();
        // Without hierarchy search nothing is declared on Home itself
        assert!(find_annotation(&f.registry, f.home, f.route, false, NONE).is_none());
        // Superclass chain is searched before interfaces
        let found = find_annotation(&f.registry, f.home, f.route, true, NONE);
        assert_eq!(path(found), Some("/base"));
    }

    #[test]
    fn test_excluded_ancestor_is_skipped() {
        let f = fixture();
        let found = find_annotation(&f.registry, f.home, f.route, true, &["lib"]);
        assert_eq!(path(found), Some("/screen"));
        assert!(has_annotation(&f.registry, f.screen, f.route, false, NONE));
    }

    #[test]
    fn test_excluded_type_short_circuits() {
        let f = fixture();
        for search in [true, false] {
            assert!(find_annotation(&f.registry, f.home, f.route, search, &["app"]).is_none());
            assert!(find_annotation(&f.registry, f.base, f.route, search, &["lib.base"]).is_none());
        }
    }

    #[test]
    fn test_is_in_namespaces() {
        let f = fixture();
        assert!(is_in_namespaces(&f.registry, f.home, &["app"]));
        assert!(is_in_namespaces(&f.registry, TypeId::OBJECT, &["core"]));
        assert!(!is_in_namespaces(&f.registry, f.home, &["lib", "core"]));
        assert!(!is_in_namespaces(&f.registry, f.home, NONE));
    }
}

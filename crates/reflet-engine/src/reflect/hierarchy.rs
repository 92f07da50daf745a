//! Type graph queries
//!
//! Walks the superclass chain and interface closure of a registered type.
//! Every query is recomputed on each call; nothing is cached.

use rustc_hash::FxHashSet;

use super::registry::TypeRegistry;
use super::type_info::{TypeId, TypeKind};

/// Superclass chain of `ty`, nearest first, excluding `ty` itself
///
/// Each ancestor appears once. The walk ends at the root class; unknown
/// ids yield an empty chain.
pub fn super_types(registry: &TypeRegistry, ty: TypeId) -> Vec<TypeId> {
    let mut chain = Vec::new();
    let mut current = registry.get(ty).and_then(|descriptor| descriptor.superclass);

    while let Some(id) = current {
        if id == ty || chain.contains(&id) {
            break;
        }
        chain.push(id);
        current = registry.get(id).and_then(|descriptor| descriptor.superclass);
    }

    chain
}

/// The class itself followed by its superclass chain
pub fn type_hierarchy(registry: &TypeRegistry, ty: TypeId) -> Vec<TypeId> {
    if registry.get(ty).is_none() {
        return Vec::new();
    }
    let mut hierarchy = vec![ty];
    hierarchy.extend(super_types(registry, ty));
    hierarchy
}

/// Interfaces declared by `ty` and by each of its superclasses
///
/// Outer loop over `ty` and its superclass chain, inner loop over each
/// type's directly declared interfaces; duplicates are dropped, first
/// discovery wins. Interfaces extended by those interfaces are not
/// expanded here (see [`is_assignable`] for the transitive view).
pub fn interface_closure(registry: &TypeRegistry, ty: TypeId) -> Vec<TypeId> {
    let mut interfaces = Vec::new();
    let mut seen = FxHashSet::default();

    for owner in type_hierarchy(registry, ty) {
        let Some(descriptor) = registry.get(owner) else {
            continue;
        };
        for &interface in &descriptor.interfaces {
            if seen.insert(interface) {
                interfaces.push(interface);
            }
        }
    }

    interfaces
}

/// Check if a class is a subclass of another class (or the same class)
pub fn is_subclass_of(registry: &TypeRegistry, sub: TypeId, sup: TypeId) -> bool {
    sub == sup || super_types(registry, sub).contains(&sup)
}

/// Check whether a value of type `actual` can be used where `formal` is
/// expected
///
/// True when the types are equal, when `formal` is a superclass of
/// `actual`, or when `formal` is an interface reachable from `actual`
/// (directly, through a superclass, or through interface inheritance).
/// Primitives are only assignable to themselves; no numeric widening.
pub fn is_assignable(registry: &TypeRegistry, formal: TypeId, actual: TypeId) -> bool {
    if formal == actual {
        return true;
    }
    let (Some(formal_desc), Some(actual_desc)) = (registry.get(formal), registry.get(actual)) else {
        return false;
    };

    match (formal_desc.kind, actual_desc.kind) {
        (TypeKind::Primitive(_), _) | (_, TypeKind::Primitive(_)) => false,
        (TypeKind::Void, _) | (_, TypeKind::Void) => false,
        (TypeKind::Class, _) => {
            // every reference type is assignable to the root
            formal == TypeId::OBJECT || super_types(registry, actual).contains(&formal)
        }
        (TypeKind::Interface, _) | (TypeKind::Annotation, _) => {
            implemented_interfaces(registry, actual).contains(&formal)
        }
    }
}

/// Every interface reachable from `ty`, including super-interfaces
fn implemented_interfaces(registry: &TypeRegistry, ty: TypeId) -> FxHashSet<TypeId> {
    let mut reached = FxHashSet::default();
    let mut pending = interface_closure(registry, ty);
    if registry.get(ty).is_some_and(|descriptor| descriptor.is_interface()) {
        pending.push(ty);
    }

    while let Some(interface) = pending.pop() {
        if !reached.insert(interface) {
            continue;
        }
        if let Some(descriptor) = registry.get(interface) {
            pending.extend(descriptor.interfaces.iter().copied());
        }
    }

    reached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::TypeBuilder;
    use crate::value::PrimitiveKind;

    struct Fixture {
        registry: TypeRegistry,
        animal: TypeId,
        dog: TypeId,
        labrador: TypeId,
        pet: TypeId,
        named: TypeId,
        trained: TypeId,
    }

    // Animal <- Dog <- Labrador; Named <- Pet; Dog: Pet, Labrador: Trained + Pet
    fn fixture() -> Fixture {
        let mut registry = TypeRegistry::new();
        let named = registry.register(TypeBuilder::interface("zoo", "Named")).unwrap();
        let pet = registry
            .register(TypeBuilder::interface("zoo", "Pet").implements(named))
            .unwrap();
        let trained = registry.register(TypeBuilder::interface("zoo", "Trained")).unwrap();
        let animal = registry.register(TypeBuilder::class("zoo", "Animal")).unwrap();
        let dog = registry
            .register(TypeBuilder::class("zoo", "Dog").extends(animal).implements(pet))
            .unwrap();
        let labrador = registry
            .register(
                TypeBuilder::class("zoo", "Labrador")
                    .extends(dog)
                    .implements(trained)
                    .implements(pet),
            )
            .unwrap();
        Fixture {
            registry,
            animal,
            dog,
            labrador,
            pet,
            named,
            trained,
        }
    }

    #[test]
    fn test_super_types_nearest_first() {
        let f = fixture();
        assert_eq!(
            super_types(&f.registry, f.labrador),
            vec![f.dog, f.animal, TypeId::OBJECT]
        );
        assert_eq!(super_types(&f.registry, TypeId::OBJECT), Vec::<TypeId>::new());
        assert!(super_types(&f.registry, f.pet).is_empty());
    }

    #[test]
    fn test_type_hierarchy() {
        let f = fixture();
        assert_eq!(
            type_hierarchy(&f.registry, f.dog),
            vec![f.dog, f.animal, TypeId::OBJECT]
        );
    }

    #[test]
    fn test_interface_closure_order_and_dedup() {
        let f = fixture();
        // Labrador's own interfaces first, then Dog's; Pet only once
        assert_eq!(interface_closure(&f.registry, f.labrador), vec![f.trained, f.pet]);
        // Super-interfaces are not expanded
        assert!(!interface_closure(&f.registry, f.dog).contains(&f.named));
    }

    #[test]
    fn test_is_subclass_of() {
        let f = fixture();
        assert!(is_subclass_of(&f.registry, f.labrador, f.animal));
        assert!(is_subclass_of(&f.registry, f.dog, f.dog));
        assert!(!is_subclass_of(&f.registry, f.animal, f.dog));
    }

    #[test]
    fn test_is_assignable() {
        let f = fixture();
        let r = &f.registry;

        assert!(is_assignable(r, f.animal, f.labrador));
        assert!(is_assignable(r, f.pet, f.labrador));
        assert!(is_assignable(r, f.named, f.labrador));
        assert!(is_assignable(r, f.named, f.pet));
        assert!(is_assignable(r, TypeId::OBJECT, f.dog));
        assert!(is_assignable(r, TypeId::OBJECT, f.pet));
        assert!(!is_assignable(r, f.labrador, f.animal));
        assert!(!is_assignable(r, f.trained, f.dog));
    }

    #[test]
    fn test_primitives_assign_only_to_themselves() {
        let f = fixture();
        let r = &f.registry;
        let int = PrimitiveKind::Int.type_id();
        let long = PrimitiveKind::Long.type_id();

        assert!(is_assignable(r, int, int));
        assert!(!is_assignable(r, long, int));
        assert!(!is_assignable(r, TypeId::OBJECT, int));
        assert!(!is_assignable(r, int, PrimitiveKind::Int.wrapper_type_id()));
    }
}

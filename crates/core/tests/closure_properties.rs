use fca_core::{closure, duquenne_guigues_basis, next_closure, Concept, Context, ElementSet};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn build(objects: usize, attributes: usize, cells: &[bool]) -> Context {
    let pairs = cells
        .iter()
        .enumerate()
        .filter(|(_, on)| **on)
        .map(|(i, _)| (i / attributes.max(1), i % attributes.max(1)));
    Context::binary(objects, attributes, pairs).expect("valid context")
}

fn small_context() -> impl Strategy<Value = Context> {
    (0usize..=5, 1usize..=5).prop_flat_map(|(objects, attributes)| {
        proptest::collection::vec(any::<bool>(), objects * attributes)
            .prop_map(move |cells| build(objects, attributes, &cells))
    })
}

fn subsets(size: usize) -> impl Iterator<Item = ElementSet> {
    (0u32..(1u32 << size)).map(move |mask| (0..size).filter(|i| mask & (1 << i) != 0).collect())
}

proptest! {
    #[test]
    fn galois_closure_is_idempotent(ctx in small_context(), mask in 0u32..32) {
        let objects: ElementSet = (0..ctx.object_count()).filter(|i| mask & (1 << i) != 0).collect();
        let once = ctx.object_closure(&objects).unwrap();
        let twice = ctx.object_closure(&once).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(objects.is_subset(&once));
    }

    #[test]
    fn next_closure_lists_every_concept_once(ctx in small_context()) {
        let concepts = next_closure(&ctx).unwrap();
        let distinct: BTreeSet<Concept> = concepts.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), concepts.len());

        let expected: BTreeSet<ElementSet> = subsets(ctx.object_count())
            .map(|s| ctx.object_closure(&s).unwrap())
            .collect();
        let extents: BTreeSet<ElementSet> = concepts.iter().map(|c| c.extent().clone()).collect();
        prop_assert_eq!(extents, expected);

        for concept in &concepts {
            prop_assert!(concept.is_concept_of(&ctx).unwrap());
        }
    }

    #[test]
    fn canonical_basis_is_sound_and_complete(ctx in small_context()) {
        let basis = duquenne_guigues_basis(&ctx).unwrap();
        let attributes = ctx.attribute_count().unwrap();

        for implication in &basis.implications {
            prop_assert!(implication.holds_in(&ctx).unwrap());
        }
        for premise in subsets(attributes) {
            prop_assert_eq!(basis.close(&premise), ctx.attribute_closure(&premise).unwrap());
        }
        for object in 0..ctx.object_count() {
            let intent = ctx.intent(&[object].into_iter().collect()).unwrap();
            prop_assert_eq!(basis.close(&intent), intent);
        }
    }

    #[test]
    fn canonical_basis_is_minimal(ctx in small_context()) {
        let basis = duquenne_guigues_basis(&ctx).unwrap();
        for dropped in 0..basis.len() {
            let rest: Vec<_> = basis
                .implications
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != dropped)
                .map(|(_, imp)| imp.clone())
                .collect();
            let premise = basis.implications[dropped].premise();
            prop_assert_ne!(
                closure(premise, &rest),
                ctx.attribute_closure(premise).unwrap()
            );
        }
    }
}

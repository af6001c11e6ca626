use crate::context::ElementSet;
use crate::implication::{closure, Implication};

/// One minimal generator of `set`: drop elements, in ascending order, as
/// long as the closure under `implications` stays the same.
pub fn minimal_generator(set: &ElementSet, implications: &[Implication]) -> ElementSet {
    let target = closure(set, implications);
    let mut generator = set.clone();

    for &element in set {
        generator.remove(&element);
        if closure(&generator, implications) != target {
            generator.insert(element);
        }
    }
    generator
}

/// Every minimal generator of `set` reachable from the greedy one.
///
/// Worklist: for each recorded generator `G` and implication `P -> Q` with
/// `G ∪ P ∪ Q ⊆ set`, the candidate `P ∪ (G \ Q)` generates the same closed
/// set. It is minimized and recorded unless some recorded generator is
/// already contained in it.
pub fn all_minimal_generators(set: &ElementSet, implications: &[Implication]) -> Vec<ElementSet> {
    let mut generators = vec![minimal_generator(set, implications)];
    let mut next = 0;

    while next < generators.len() {
        let generator = generators[next].clone();
        next += 1;

        for implication in implications {
            let within = generator.is_subset(set)
                && implication.premise().is_subset(set)
                && implication.conclusion().is_subset(set);
            if !within {
                continue;
            }

            let candidate: ElementSet = implication
                .premise()
                .iter()
                .chain(generator.difference(implication.conclusion()))
                .copied()
                .collect();

            if generators.iter().any(|known| known.is_subset(&candidate)) {
                continue;
            }
            generators.push(minimal_generator(&candidate, implications));
        }
    }

    generators
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(items: &[usize]) -> ElementSet {
        items.iter().copied().collect()
    }

    #[test]
    fn test_minimal_generator_drops_redundant_elements() {
        let rules = vec![Implication::new(set(&[0]), set(&[1, 2]))];
        assert_eq!(minimal_generator(&set(&[0, 1, 2]), &rules), set(&[0]));
    }

    #[test]
    fn test_closed_set_without_rules_is_its_own_generator() {
        assert_eq!(minimal_generator(&set(&[1, 3]), &[]), set(&[1, 3]));
    }

    #[test]
    fn test_all_minimal_generators() {
        // {0} and {1} each generate {0, 1, 2}
        let rules = vec![
            Implication::new(set(&[0]), set(&[0, 1, 2])),
            Implication::new(set(&[1]), set(&[0, 1, 2])),
        ];
        let mut generators = all_minimal_generators(&set(&[0, 1, 2]), &rules);
        generators.sort();
        assert_eq!(generators, vec![set(&[0]), set(&[1])]);
    }

    #[test]
    fn test_generators_share_closure() {
        let rules = vec![
            Implication::new(set(&[0, 1]), set(&[2])),
            Implication::new(set(&[3]), set(&[0, 1, 2])),
            Implication::new(set(&[2]), set(&[1])),
        ];
        let target = set(&[0, 1, 2, 3]);
        let expected = closure(&target, &rules);
        for generator in all_minimal_generators(&target, &rules) {
            assert_eq!(closure(&generator, &rules), expected);
            for &element in &generator {
                let mut smaller = generator.clone();
                smaller.remove(&element);
                assert_ne!(closure(&smaller, &rules), expected);
            }
        }
    }
}

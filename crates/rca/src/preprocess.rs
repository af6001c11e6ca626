use crate::error::Result;
use crate::family::LabeledContext;
use fca_core::{Context, CrossProduct, ElementSet};

/// Give every attribute dimension a trailing disjunction element.
///
/// The disjunction element of dimension `i` stands for "some element of
/// `i`": every tuple is repeated with any of its attribute coordinates
/// swapped for the matching disjunction element, and objects without tuples
/// receive the all-disjunction tuple `(o, d1, .., dk)`. Contexts with no
/// attribute dimension are returned unchanged.
pub fn add_disjunctions(member: &LabeledContext, label: &str) -> Result<LabeledContext> {
    let context = member.context();
    if context.dimensions() < 2 {
        return Ok(member.clone());
    }

    let disjunctions: Vec<usize> = context.sizes()[1..].to_vec();
    let mut sizes = context.sizes().to_vec();
    for size in &mut sizes[1..] {
        *size += 1;
    }

    let mut tuples: Vec<Vec<usize>> = Vec::new();
    let mut covered = ElementSet::new();
    for tuple in context.tuples() {
        covered.insert(tuple[0]);
        let choices = tuple[1..]
            .iter()
            .zip(&disjunctions)
            .map(|(&element, &disjunction)| vec![element, disjunction])
            .collect();
        for attributes in CrossProduct::new(choices) {
            let mut extended = Vec::with_capacity(sizes.len());
            extended.push(tuple[0]);
            extended.extend(attributes);
            tuples.push(extended);
        }
    }

    for object in (0..context.object_count()).filter(|o| !covered.contains(o)) {
        let mut lone = Vec::with_capacity(sizes.len());
        lone.push(object);
        lone.extend_from_slice(&disjunctions);
        tuples.push(lone);
    }

    let mut labels = member.labels().to_vec();
    for row in &mut labels[1..] {
        row.push(label.to_string());
    }

    log::debug!(
        "Added disjunction elements: {} -> {} tuples",
        context.len(),
        tuples.len()
    );

    LabeledContext::new(Context::new(sizes, tuples)?, labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_binary_disjunction() {
        // Object 1 has no attribute
        let member = LabeledContext::unlabeled(Context::binary(2, 2, [(0, 0)]).unwrap());
        let processed = add_disjunctions(&member, "*").unwrap();

        let expected = Context::binary(2, 3, [(0, 0), (0, 2), (1, 2)]).unwrap();
        assert_eq!(processed.context(), &expected);
        assert_eq!(processed.labels()[1], vec!["0", "1", "*"]);
        assert_eq!(processed.labels()[0], vec!["0", "1"]);
    }

    #[test]
    fn test_triadic_disjunction() {
        let member = LabeledContext::unlabeled(Context::new(vec![1, 2, 2], [vec![0, 0, 1]]).unwrap());
        let processed = add_disjunctions(&member, "*").unwrap();

        let expected = Context::new(
            vec![1, 3, 3],
            [vec![0, 0, 1], vec![0, 0, 2], vec![0, 2, 1], vec![0, 2, 2]],
        )
        .unwrap();
        assert_eq!(processed.context(), &expected);
    }

    #[test]
    fn test_every_object_gets_a_tuple() {
        let member = LabeledContext::unlabeled(Context::new(vec![3, 1, 1], []).unwrap());
        let processed = add_disjunctions(&member, "any").unwrap();

        let expected = Context::new(
            vec![3, 2, 2],
            [vec![0, 1, 1], vec![1, 1, 1], vec![2, 1, 1]],
        )
        .unwrap();
        assert_eq!(processed.context(), &expected);
        assert_eq!(processed.label(2, 1), Some("any"));
    }

    #[test]
    fn test_object_only_context_unchanged() {
        let member = LabeledContext::unlabeled(Context::new(vec![2], [vec![0]]).unwrap());
        assert_eq!(add_disjunctions(&member, "*").unwrap(), member);
    }
}

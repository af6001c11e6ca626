//! Lectic-order walkers over closed sets.
//!
//! Both walkers share one successor step: from a closed set `A` and an index
//! `i` not in `A`, take `A ∩ {0..i} ∪ {i}`, close it, and accept the result
//! only if it adds nothing below `i`. Trying `i` from the highest index down
//! yields the lectically next closed set, so every closed set is visited
//! exactly once and no deduplication is needed.

use crate::concept::Concept;
use crate::context::{Context, ElementSet};
use crate::error::Result;
use crate::flatten::Flattening;
use crate::implication::{closure, Implication};
use serde::{Deserialize, Serialize};

/// Lectically next closed set after `current` over `0..universe`, or `None`
/// when `current` is the last one.
fn lectic_successor<F>(current: &ElementSet, universe: usize, mut close: F) -> Result<Option<ElementSet>>
where
    F: FnMut(&ElementSet) -> Result<ElementSet>,
{
    for i in (0..universe).rev() {
        if current.contains(&i) {
            continue;
        }

        let mut generator: ElementSet = current.range(..i).copied().collect();
        generator.insert(i);
        let closed = close(&generator)?;

        if closed.range(..i).all(|j| current.contains(j)) {
            return Ok(Some(closed));
        }
    }
    Ok(None)
}

/// All concepts of a binary context in lectic order of their extents
pub fn next_closure(context: &Context) -> Result<Vec<Concept>> {
    context.ensure_binary()?;
    let objects = context.object_count();

    let mut concepts = Vec::new();
    let mut extent = context.object_closure(&ElementSet::new())?;

    loop {
        let intent = context.intent(&extent)?;
        concepts.push(Concept::binary(extent.clone(), intent));
        if extent.len() == objects {
            break;
        }
        match lectic_successor(&extent, objects, |s| context.object_closure(s))? {
            Some(next) => extent = next,
            None => break,
        }
    }

    log::debug!("NextClosure produced {} concepts", concepts.len());
    Ok(concepts)
}

/// Canonical implication basis, with the flattening it was computed over
/// when the context had more than two dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalBasis {
    pub implications: Vec<Implication>,
    pub flattening: Option<Flattening>,
}

impl CanonicalBasis {
    /// Close an attribute set under the basis
    pub fn close(&self, attributes: &ElementSet) -> ElementSet {
        closure(attributes, &self.implications)
    }

    pub fn len(&self) -> usize {
        self.implications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.implications.is_empty()
    }
}

/// Duquenne-Guigues basis.
///
/// Walks the sets closed under the implications found so far, in lectic
/// order. Each visited set `A` whose Galois closure `A''` differs is a
/// pseudo-intent and contributes `A -> A''`.
pub fn duquenne_guigues_basis(context: &Context) -> Result<CanonicalBasis> {
    let flattening = if context.dimensions() > 2 {
        Some(context.flatten()?)
    } else {
        None
    };
    let binary = flattening.as_ref().map_or(context, Flattening::context);

    let attributes = binary.attribute_count()?;
    let mut implications: Vec<Implication> = Vec::new();
    let mut current = closure(&ElementSet::new(), &implications);

    while current.len() < attributes {
        let closed = binary.attribute_closure(&current)?;
        if closed != current {
            implications.push(Implication::new(current.clone(), closed));
        }
        match lectic_successor(&current, attributes, |s| Ok(closure(s, &implications)))? {
            Some(next) => current = next,
            None => break,
        }
    }

    log::debug!(
        "Duquenne-Guigues basis over {} attributes has {} implications",
        attributes,
        implications.len()
    );

    Ok(CanonicalBasis {
        implications,
        flattening,
    })
}

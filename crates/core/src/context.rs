use crate::concept::Concept;
use crate::error::{Result, ValidationError};
use crate::product::CrossProduct;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Ordered set of element indices within one dimension
pub type ElementSet = BTreeSet<usize>;

/// Incidence relation over `D0 (objects) x D1 x .. x Dk`.
///
/// Immutable once built: every operation that changes the shape returns a
/// new `Context`. Tuples are kept in a sorted set so equality, iteration
/// order and membership tests are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContext", into = "RawContext")]
pub struct Context {
    sizes: Vec<usize>,
    tuples: BTreeSet<Vec<usize>>,
}

/// Unvalidated wire shape of a context
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawContext {
    sizes: Vec<usize>,
    tuples: Vec<Vec<usize>>,
}

impl TryFrom<RawContext> for Context {
    type Error = ValidationError;

    fn try_from(raw: RawContext) -> Result<Self> {
        Context::new(raw.sizes, raw.tuples)
    }
}

impl From<Context> for RawContext {
    fn from(context: Context) -> Self {
        Self {
            sizes: context.sizes,
            tuples: context.tuples.into_iter().collect(),
        }
    }
}

impl Context {
    /// Build a context, rejecting ragged tuples and out-of-range coordinates.
    /// Duplicate tuples collapse.
    pub fn new<I>(sizes: Vec<usize>, tuples: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<usize>>,
    {
        if sizes.is_empty() {
            return Err(ValidationError::NoDimensions);
        }

        let mut set = BTreeSet::new();
        for (index, tuple) in tuples.into_iter().enumerate() {
            if tuple.len() != sizes.len() {
                return Err(ValidationError::RaggedTuple {
                    index,
                    expected: sizes.len(),
                    found: tuple.len(),
                });
            }
            if let Some((dimension, (&value, &size))) = tuple
                .iter()
                .zip(&sizes)
                .enumerate()
                .find(|(_, (value, size))| value >= size)
            {
                return Err(ValidationError::CoordinateOutOfRange {
                    index,
                    dimension,
                    value,
                    size,
                });
            }
            set.insert(tuple);
        }

        Ok(Self { sizes, tuples: set })
    }

    /// Build a binary (objects x attributes) context from incidence pairs
    pub fn binary<I>(objects: usize, attributes: usize, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self::new(
            vec![objects, attributes],
            pairs.into_iter().map(|(o, a)| vec![o, a]),
        )
    }

    /// Number of dimensions, objects included
    pub fn dimensions(&self) -> usize {
        self.sizes.len()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Size of one dimension
    pub fn dimension_size(&self, dimension: usize) -> Result<usize> {
        self.sizes
            .get(dimension)
            .copied()
            .ok_or_else(|| ValidationError::dimension(dimension, self.sizes.len()))
    }

    pub fn object_count(&self) -> usize {
        self.sizes[0]
    }

    /// Attribute count of a binary context
    pub fn attribute_count(&self) -> Result<usize> {
        self.ensure_binary()?;
        Ok(self.sizes[1])
    }

    pub fn is_binary(&self) -> bool {
        self.sizes.len() == 2
    }

    pub fn tuples(&self) -> impl Iterator<Item = &[usize]> {
        self.tuples.iter().map(Vec::as_slice)
    }

    /// Number of incidences
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn contains(&self, tuple: &[usize]) -> bool {
        self.tuples.contains(tuple)
    }

    pub fn ensure_binary(&self) -> Result<()> {
        if self.is_binary() {
            Ok(())
        } else {
            Err(ValidationError::NotBinary(self.sizes.len()))
        }
    }

    fn ensure_dimension(&self, dimension: usize) -> Result<usize> {
        self.dimension_size(dimension)
    }

    fn ensure_elements(&self, dimension: usize, elements: &ElementSet) -> Result<()> {
        let size = self.ensure_dimension(dimension)?;
        match elements.iter().next_back() {
            Some(&max) if max >= size => Err(ValidationError::element(dimension, max, size)),
            _ => Ok(()),
        }
    }

    /// Attributes shared by every object of `objects` (binary contexts)
    pub fn intent(&self, objects: &ElementSet) -> Result<ElementSet> {
        self.ensure_binary()?;
        self.ensure_elements(0, objects)?;

        Ok((0..self.sizes[1])
            .filter(|&a| objects.iter().all(|&o| self.contains(&[o, a])))
            .collect())
    }

    /// Objects having every attribute of `attributes` (binary contexts)
    pub fn extent(&self, attributes: &ElementSet) -> Result<ElementSet> {
        self.ensure_binary()?;
        self.ensure_elements(1, attributes)?;

        Ok((0..self.sizes[0])
            .filter(|&o| attributes.iter().all(|&a| self.contains(&[o, a])))
            .collect())
    }

    /// Galois closure of an object set: `extent(intent(objects))`
    pub fn object_closure(&self, objects: &ElementSet) -> Result<ElementSet> {
        self.extent(&self.intent(objects)?)
    }

    /// Galois closure of an attribute set: `intent(extent(attributes))`
    pub fn attribute_closure(&self, attributes: &ElementSet) -> Result<ElementSet> {
        self.intent(&self.extent(attributes)?)
    }

    /// Keep the tuples whose coordinate at `dimension` equals `element`, then
    /// drop that coordinate and that dimension.
    pub fn slice(&self, element: usize, dimension: usize) -> Result<Context> {
        if self.sizes.len() < 2 {
            return Err(ValidationError::TooFewDimensions {
                required: 2,
                found: self.sizes.len(),
            });
        }
        let size = self.ensure_dimension(dimension)?;
        if element >= size {
            return Err(ValidationError::element(dimension, element, size));
        }

        let mut sizes = self.sizes.clone();
        sizes.remove(dimension);

        let tuples = self
            .tuples
            .iter()
            .filter(|t| t[dimension] == element)
            .map(|t| {
                let mut reduced = t.clone();
                reduced.remove(dimension);
                reduced
            })
            .collect();

        Ok(Context { sizes, tuples })
    }

    /// Elements `e` of `dimension` such that inserting `e` at that coordinate
    /// into every tuple of the concept's cross product yields an incidence.
    ///
    /// `concept` lives over this context with `dimension` removed, so it has
    /// one component fewer than the context has dimensions.
    pub fn support(&self, concept: &Concept, dimension: usize) -> Result<ElementSet> {
        let size = self.ensure_dimension(dimension)?;
        let expected = self.sizes.len() - 1;
        if concept.arity() != expected {
            return Err(ValidationError::arity(expected, concept.arity()));
        }

        let crosses: Vec<Vec<usize>> = CrossProduct::new(
            concept
                .components()
                .iter()
                .map(|c| c.iter().copied().collect())
                .collect(),
        )
        .collect();

        let mut probe = vec![0; self.sizes.len()];
        Ok((0..size)
            .filter(|&e| {
                crosses.iter().all(|cross| {
                    probe[..dimension].copy_from_slice(&cross[..dimension]);
                    probe[dimension] = e;
                    probe[dimension + 1..].copy_from_slice(&cross[dimension..]);
                    self.contains(&probe)
                })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(items: &[usize]) -> ElementSet {
        items.iter().copied().collect()
    }

    fn sample() -> Context {
        Context::binary(3, 2, [(0, 0), (1, 0), (1, 1), (2, 1)]).unwrap()
    }

    #[test]
    fn test_rejects_ragged_tuple() {
        let err = Context::new(vec![2, 2], vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RaggedTuple {
                index: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_coordinate() {
        let err = Context::new(vec![2, 2], vec![vec![0, 2]]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::CoordinateOutOfRange {
                dimension: 1,
                value: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_no_dimensions() {
        assert_eq!(
            Context::new(vec![], Vec::new()).unwrap_err(),
            ValidationError::NoDimensions
        );
    }

    #[test]
    fn test_duplicate_tuples_collapse() {
        let ctx = Context::binary(1, 1, [(0, 0), (0, 0)]).unwrap();
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_intent_and_extent() {
        let ctx = sample();
        assert_eq!(ctx.intent(&set(&[0, 1])).unwrap(), set(&[0]));
        assert_eq!(ctx.intent(&set(&[])).unwrap(), set(&[0, 1]));
        assert_eq!(ctx.extent(&set(&[1])).unwrap(), set(&[1, 2]));
        assert_eq!(ctx.extent(&set(&[0, 1])).unwrap(), set(&[1]));
    }

    #[test]
    fn test_intent_rejects_unknown_object() {
        let err = sample().intent(&set(&[5])).unwrap_err();
        assert_eq!(err, ValidationError::element(0, 5, 3));
    }

    #[test]
    fn test_intent_requires_binary() {
        let ctx = Context::new(vec![1, 1, 1], vec![vec![0, 0, 0]]).unwrap();
        assert_eq!(
            ctx.intent(&set(&[0])).unwrap_err(),
            ValidationError::NotBinary(3)
        );
    }

    #[test]
    fn test_slice_drops_dimension() {
        let ctx = Context::new(
            vec![2, 2, 3],
            vec![vec![0, 0, 1], vec![1, 0, 2], vec![1, 1, 0]],
        )
        .unwrap();

        let sliced = ctx.slice(0, 1).unwrap();
        assert_eq!(sliced.sizes(), &[2, 3]);
        let tuples: Vec<_> = sliced.tuples().map(<[usize]>::to_vec).collect();
        assert_eq!(tuples, vec![vec![0, 1], vec![1, 2]]);
    }

    #[test]
    fn test_slice_rejects_unknown_element() {
        let err = sample().slice(4, 1).unwrap_err();
        assert_eq!(err, ValidationError::element(1, 4, 2));
    }

    #[test]
    fn test_support_on_attribute_dimension() {
        // Objects {0, 1} share attribute 0 only
        let concept = Concept::new(vec![set(&[0, 1])]);
        assert_eq!(sample().support(&concept, 1).unwrap(), set(&[0]));
    }

    #[test]
    fn test_support_on_object_dimension() {
        let concept = Concept::new(vec![set(&[1])]);
        assert_eq!(sample().support(&concept, 0).unwrap(), set(&[1, 2]));
    }

    #[test]
    fn test_support_checks_arity() {
        let concept = Concept::new(vec![set(&[0]), set(&[0])]);
        assert_eq!(
            sample().support(&concept, 1).unwrap_err(),
            ValidationError::arity(1, 2)
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Context =
            serde_json::from_str(r#"{"sizes":[2,1],"tuples":[[0,0],[1,0]]}"#).unwrap();
        assert_eq!(ok.len(), 2);

        let bad = serde_json::from_str::<Context>(r#"{"sizes":[2,1],"tuples":[[0,3]]}"#);
        assert!(bad.is_err());
    }
}

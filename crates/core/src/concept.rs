use crate::context::{Context, ElementSet};
use crate::error::{Result, ValidationError};
use crate::product::CrossProduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Galois-closed box `(A0, .., Ak)`, one component per context dimension.
///
/// Components are sorted sets, so the derived `Ord`/`Hash` give a canonical
/// representation: two concepts are equal exactly when they are equal as a
/// tuple of sets, and they can live in ordered or hashed collections directly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Concept {
    components: Vec<ElementSet>,
}

impl Concept {
    pub fn new(components: Vec<ElementSet>) -> Self {
        Self { components }
    }

    /// Classical `(extent, intent)` pair
    pub fn binary(extent: ElementSet, intent: ElementSet) -> Self {
        Self {
            components: vec![extent, intent],
        }
    }

    pub fn components(&self) -> &[ElementSet] {
        &self.components
    }

    pub fn into_components(self) -> Vec<ElementSet> {
        self.components
    }

    pub fn component(&self, dimension: usize) -> Option<&ElementSet> {
        self.components.get(dimension)
    }

    /// Number of components
    pub fn arity(&self) -> usize {
        self.components.len()
    }

    /// Object component
    pub fn extent(&self) -> &ElementSet {
        &self.components[0]
    }

    /// First attribute component (the intent of a binary concept), absent
    /// for object-only concepts
    pub fn intent(&self) -> Option<&ElementSet> {
        self.components.get(1)
    }

    /// Components after the object component
    pub fn attribute_components(&self) -> &[ElementSet] {
        self.components.get(1..).unwrap_or_default()
    }

    /// Copy of this concept with `component` inserted at position `dimension`
    pub fn with_component(&self, dimension: usize, component: ElementSet) -> Result<Concept> {
        if dimension > self.components.len() {
            return Err(ValidationError::dimension(dimension, self.components.len() + 1));
        }
        let mut components = self.components.clone();
        components.insert(dimension, component);
        Ok(Concept { components })
    }

    /// Copy of this concept without the component at `dimension`
    pub fn without_component(&self, dimension: usize) -> Result<Concept> {
        if dimension >= self.components.len() {
            return Err(ValidationError::dimension(dimension, self.components.len()));
        }
        let mut components = self.components.clone();
        components.remove(dimension);
        Ok(Concept { components })
    }

    /// Componentwise inclusion on every non-object component
    pub fn attributes_within(&self, other: &Concept) -> bool {
        self.components.len() == other.components.len()
            && self
                .attribute_components()
                .iter()
                .zip(other.attribute_components())
                .all(|(mine, theirs)| mine.is_subset(theirs))
    }

    /// `attributes_within` and not the same concept
    pub fn strictly_below(&self, other: &Concept) -> bool {
        self != other && self.attributes_within(other)
    }

    /// Every tuple of the cross product
    pub fn crosses(&self) -> CrossProduct {
        CrossProduct::new(
            self.components
                .iter()
                .map(|c| c.iter().copied().collect())
                .collect(),
        )
    }

    /// Whether this box lies inside the relation and cannot grow on any side
    pub fn is_concept_of(&self, context: &Context) -> Result<bool> {
        if self.arity() != context.dimensions() {
            return Err(ValidationError::arity(context.dimensions(), self.arity()));
        }
        for (dimension, component) in self.components.iter().enumerate() {
            let size = context.dimension_size(dimension)?;
            if let Some(&max) = component.iter().next_back() {
                if max >= size {
                    return Err(ValidationError::element(dimension, max, size));
                }
            }
        }

        if !self.crosses().all(|t| context.contains(&t)) {
            return Ok(false);
        }

        if context.dimensions() == 1 {
            let present: ElementSet = context.tuples().map(|t| t[0]).collect();
            return Ok(present == self.components[0]);
        }

        for dimension in 0..self.arity() {
            let rest = self.without_component(dimension)?;
            if context.support(&rest, dimension)? != self.components[dimension] {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{{")?;
            for (j, element) in component.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{element}")?;
            }
            write!(f, "}}")?;
        }
        write!(f, ")")
    }
}

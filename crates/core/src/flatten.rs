use crate::context::{Context, ElementSet};
use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Binary view of a multi-dimensional context.
///
/// Dimensions `1..k` collapse into one synthetic attribute dimension whose
/// elements are exactly the attribute tuples realized in the relation, in
/// sorted order. `table[i]` is the original attribute tuple behind synthetic
/// attribute `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flattening {
    context: Context,
    table: Vec<Vec<usize>>,
    original_sizes: Vec<usize>,
}

impl Flattening {
    /// The binary context
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Synthetic attribute -> original attribute tuple
    pub fn table(&self) -> &[Vec<usize>] {
        &self.table
    }

    /// Original attribute tuple behind one synthetic attribute
    pub fn lookup(&self, synthetic: usize) -> Option<&[usize]> {
        self.table.get(synthetic).map(Vec::as_slice)
    }

    /// Re-expand a synthetic attribute set into original attribute tuples
    pub fn expand(&self, synthetic: &ElementSet) -> Result<Vec<Vec<usize>>> {
        synthetic
            .iter()
            .map(|&i| {
                self.lookup(i)
                    .map(<[usize]>::to_vec)
                    .ok_or_else(|| ValidationError::element(1, i, self.table.len()))
            })
            .collect()
    }

    /// Rebuild the original context from the binary one
    pub fn restore(&self) -> Result<Context> {
        let tuples = self
            .context
            .tuples()
            .map(|t| {
                let mut tuple = Vec::with_capacity(self.original_sizes.len());
                tuple.push(t[0]);
                tuple.extend_from_slice(&self.table[t[1]]);
                tuple
            })
            .collect::<Vec<_>>();
        Context::new(self.original_sizes.clone(), tuples)
    }
}

impl Context {
    /// Collapse every non-object dimension into one synthetic dimension.
    ///
    /// Only realized attribute tuples become synthetic attributes, so the map
    /// is injective and `restore` gives the original context back.
    pub fn flatten(&self) -> Result<Flattening> {
        if self.dimensions() < 2 {
            return Err(ValidationError::TooFewDimensions {
                required: 2,
                found: self.dimensions(),
            });
        }

        let realized: BTreeSet<&[usize]> = self.tuples().map(|t| &t[1..]).collect();
        let index: BTreeMap<&[usize], usize> = realized
            .iter()
            .enumerate()
            .map(|(i, &attrs)| (attrs, i))
            .collect();

        let pairs = self
            .tuples()
            .map(|t| (t[0], index[&t[1..]]))
            .collect::<Vec<_>>();

        let context = Context::binary(self.object_count(), realized.len(), pairs)?;
        let table = realized.into_iter().map(<[usize]>::to_vec).collect();

        log::debug!(
            "Flattened {}-dimensional context into {} synthetic attributes",
            self.dimensions(),
            context.sizes()[1]
        );

        Ok(Flattening {
            context,
            table,
            original_sizes: self.sizes().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triadic() -> Context {
        Context::new(
            vec![2, 2, 2],
            vec![vec![0, 0, 1], vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]],
        )
        .unwrap()
    }

    #[test]
    fn test_only_realized_tuples_become_attributes() {
        let flat = triadic().flatten().unwrap();
        assert_eq!(flat.table(), &[vec![0, 1], vec![1, 0], vec![1, 1]]);
        assert_eq!(flat.context().sizes(), &[2, 3]);
        assert_eq!(flat.lookup(1), Some(&[1, 0][..]));
        assert_eq!(flat.lookup(3), None);
    }

    #[test]
    fn test_restore_is_lossless() {
        let ctx = triadic();
        assert_eq!(ctx.flatten().unwrap().restore().unwrap(), ctx);
    }

    #[test]
    fn test_expand() {
        let flat = triadic().flatten().unwrap();
        let synthetic: ElementSet = [0, 2].into_iter().collect();
        assert_eq!(
            flat.expand(&synthetic).unwrap(),
            vec![vec![0, 1], vec![1, 1]]
        );
        let unknown: ElementSet = [7].into_iter().collect();
        assert!(flat.expand(&unknown).is_err());
    }

    #[test]
    fn test_flatten_rejects_one_dimension() {
        let ctx = Context::new(vec![3], vec![vec![0]]).unwrap();
        assert!(ctx.flatten().is_err());
    }
}

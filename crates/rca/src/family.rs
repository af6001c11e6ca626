use crate::error::{RcaError, Result};
use fca_core::{Concept, Context, ElementSet};
use std::collections::BTreeMap;

/// Context together with a display name for every element of every dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledContext {
    context: Context,
    labels: Vec<Vec<String>>,
}

impl LabeledContext {
    /// Pair a context with its labels; `labels[d]` must name every element
    /// of dimension `d`
    pub fn new(context: Context, labels: Vec<Vec<String>>) -> Result<Self> {
        if labels.len() != context.dimensions() {
            return Err(RcaError::ShapeMismatch(format!(
                "{} label rows for {} dimensions",
                labels.len(),
                context.dimensions()
            )));
        }
        for (dimension, (row, &size)) in labels.iter().zip(context.sizes()).enumerate() {
            if row.len() != size {
                return Err(RcaError::ShapeMismatch(format!(
                    "dimension {dimension} has {size} elements but {} labels",
                    row.len()
                )));
            }
        }
        Ok(Self { context, labels })
    }

    /// Label every element with its index
    pub fn unlabeled(context: Context) -> Self {
        let labels = context
            .sizes()
            .iter()
            .map(|&size| (0..size).map(|e| e.to_string()).collect())
            .collect();
        Self { context, labels }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn labels(&self) -> &[Vec<String>] {
        &self.labels
    }

    pub fn label(&self, dimension: usize, element: usize) -> Option<&str> {
        self.labels
            .get(dimension)
            .and_then(|row| row.get(element))
            .map(String::as_str)
    }

    /// Render a concept of this context with element labels,
    /// e.g. `({alice,bob}, {red})`
    pub fn render(&self, concept: &Concept) -> String {
        let components: Vec<String> = concept
            .components()
            .iter()
            .enumerate()
            .map(|(dimension, component)| {
                let names: Vec<String> = component
                    .iter()
                    .map(|&e| {
                        self.label(dimension, e)
                            .map_or_else(|| e.to_string(), str::to_string)
                    })
                    .collect();
                format!("{{{}}}", names.join(","))
            })
            .collect();
        format!("({})", components.join(", "))
    }
}

/// Many-to-many mapping from the objects of one context to the objects of
/// another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    source: usize,
    target: usize,
    images: Vec<ElementSet>,
}

impl Relation {
    /// `images[o]` holds the target objects related to source object `o`
    pub fn new(source: usize, target: usize, images: Vec<ElementSet>) -> Self {
        Self {
            source,
            target,
            images,
        }
    }

    /// Build from `(source object, target object)` pairs
    pub fn from_pairs<I>(source: usize, target: usize, source_objects: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut images = vec![ElementSet::new(); source_objects];
        for (from, to) in pairs {
            if from >= images.len() {
                images.resize(from + 1, ElementSet::new());
            }
            images[from].insert(to);
        }
        Self::new(source, target, images)
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Target objects related to `object`
    pub fn image(&self, object: usize) -> Option<&ElementSet> {
        self.images.get(object)
    }

    pub fn images(&self) -> &[ElementSet] {
        &self.images
    }
}

/// Ordered list of contexts linked by named relations.
///
/// Members are replaced by index, never edited in place: `with_member`
/// returns a new family and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextFamily {
    members: Vec<LabeledContext>,
    relations: BTreeMap<String, Relation>,
}

impl ContextFamily {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a context and return its index
    pub fn add_context(&mut self, member: LabeledContext) -> usize {
        self.members.push(member);
        self.members.len() - 1
    }

    /// Register a relation between two member contexts.
    ///
    /// The relation must name existing contexts, give one image per source
    /// object, and only reach target objects that exist.
    pub fn add_relation(&mut self, name: impl Into<String>, relation: Relation) -> Result<()> {
        let name = name.into();
        let source = self.context(relation.source)?;
        let target = self.context(relation.target)?;

        if relation.images.len() != source.object_count() {
            return Err(RcaError::mismatch(
                name,
                format!(
                    "{} images for {} source objects",
                    relation.images.len(),
                    source.object_count()
                ),
            ));
        }
        let targets = target.object_count();
        if let Some(&beyond) = relation
            .images
            .iter()
            .flat_map(|image| image.iter())
            .find(|&&o| o >= targets)
        {
            return Err(RcaError::mismatch(
                name,
                format!("target object {beyond} out of range for {targets} objects"),
            ));
        }

        self.relations.insert(name, relation);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member(&self, index: usize) -> Result<&LabeledContext> {
        self.members
            .get(index)
            .ok_or_else(|| RcaError::context_index(index, self.members.len()))
    }

    pub fn context(&self, index: usize) -> Result<&Context> {
        self.member(index).map(LabeledContext::context)
    }

    pub fn members(&self) -> &[LabeledContext] {
        &self.members
    }

    pub fn contexts(&self) -> impl Iterator<Item = &Context> {
        self.members.iter().map(LabeledContext::context)
    }

    pub fn relation(&self, name: &str) -> Result<&Relation> {
        self.relations
            .get(name)
            .ok_or_else(|| RcaError::UnknownRelation(name.to_string()))
    }

    /// Copy of the family with member `index` replaced.
    ///
    /// The replacement must keep the object count, so every relation stays
    /// valid.
    pub fn with_member(&self, index: usize, member: LabeledContext) -> Result<ContextFamily> {
        let current = self.context(index)?;
        if current.object_count() != member.context().object_count() {
            return Err(RcaError::ShapeMismatch(format!(
                "replacement for context {index} has {} objects, expected {}",
                member.context().object_count(),
                current.object_count()
            )));
        }

        let mut members = self.members.clone();
        members[index] = member;
        Ok(ContextFamily {
            members,
            relations: self.relations.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(items: &[usize]) -> ElementSet {
        items.iter().copied().collect()
    }

    fn labels(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn family() -> ContextFamily {
        let mut family = ContextFamily::new();
        family.add_context(LabeledContext::unlabeled(
            Context::binary(3, 1, [(0, 0)]).unwrap(),
        ));
        family.add_context(LabeledContext::unlabeled(
            Context::binary(2, 2, [(0, 0), (1, 1)]).unwrap(),
        ));
        family
    }

    #[test]
    fn test_labeled_context_shape_checked() {
        let context = Context::binary(2, 1, [(0, 0)]).unwrap();
        assert!(LabeledContext::new(context.clone(), labels(&[&["a", "b"], &["x"]])).is_ok());
        assert!(matches!(
            LabeledContext::new(context.clone(), labels(&[&["a", "b"]])),
            Err(RcaError::ShapeMismatch(_))
        ));
        assert!(matches!(
            LabeledContext::new(context, labels(&[&["a"], &["x"]])),
            Err(RcaError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_render_uses_labels() {
        let context = Context::binary(2, 2, [(0, 0), (1, 1)]).unwrap();
        let member =
            LabeledContext::new(context, labels(&[&["alice", "bob"], &["red", "blue"]])).unwrap();
        let concept = Concept::binary(set(&[0, 1]), set(&[]));
        assert_eq!(member.render(&concept), "({alice,bob}, {})");
        let concept = Concept::binary(set(&[1]), set(&[1]));
        assert_eq!(member.render(&concept), "({bob}, {blue})");
    }

    #[test]
    fn test_relation_from_pairs() {
        let relation = Relation::from_pairs(0, 1, 3, [(0, 0), (1, 0), (1, 1)]);
        assert_eq!(relation.images(), &[set(&[0]), set(&[0, 1]), set(&[])]);
        assert_eq!(relation.image(2), Some(&set(&[])));
        assert_eq!(relation.image(3), None);
    }

    #[test]
    fn test_add_relation_validation() {
        let mut family = family();
        assert!(family
            .add_relation("likes", Relation::from_pairs(0, 1, 3, [(0, 0), (1, 1)]))
            .is_ok());
        assert!(family.relation("likes").is_ok());

        assert!(matches!(
            family.add_relation("bad", Relation::from_pairs(0, 5, 3, [])),
            Err(RcaError::ContextIndex { index: 5, contexts: 2 })
        ));
        assert!(matches!(
            family.add_relation("bad", Relation::from_pairs(0, 1, 2, [])),
            Err(RcaError::RelationMismatch { .. })
        ));
        assert!(matches!(
            family.add_relation("bad", Relation::from_pairs(0, 1, 3, [(0, 2)])),
            Err(RcaError::RelationMismatch { .. })
        ));
        assert!(matches!(
            family.relation("bad"),
            Err(RcaError::UnknownRelation(_))
        ));
    }

    #[test]
    fn test_with_member_replaces_by_index() {
        let family = family();
        let replacement =
            LabeledContext::unlabeled(Context::binary(3, 2, [(0, 0), (2, 1)]).unwrap());

        let updated = family.with_member(0, replacement.clone()).unwrap();
        assert_eq!(updated.member(0).unwrap(), &replacement);
        assert_eq!(updated.member(1).unwrap(), family.member(1).unwrap());
        assert_eq!(family.context(0).unwrap().attribute_count().unwrap(), 1);

        let wrong_objects = LabeledContext::unlabeled(Context::binary(1, 1, []).unwrap());
        assert!(family.with_member(0, wrong_objects).is_err());
        assert!(family.with_member(7, replacement).is_err());
    }
}

use crate::config::RcaConfig;
use crate::error::{RcaError, Result};
use crate::family::{ContextFamily, LabeledContext};
use crate::preprocess::add_disjunctions;
use crate::strategy::{Rule, Strategy};
use fca_core::{Concept, Context};
use fca_transversal::{ConceptEnumerator, TransversalSolver};
use std::iter;

/// Final state of a relational growth run
#[derive(Debug, Clone)]
pub struct RcaOutput {
    /// Family after preprocessing and every iteration
    pub family: ContextFamily,

    /// `concepts[i]` holds the concepts of context `i` of `family`
    pub concepts: Vec<Vec<Concept>>,
}

/// HubRCA: grows every context of a family with relational attributes.
///
/// Each iteration applies the strategy's rules in order. A rule enumerates
/// the concepts of its target context and appends one dimension to its
/// source context holding one relational attribute per target concept plus
/// a disjunction element. Later rules see the contexts produced by earlier
/// ones. The number of iterations is fixed by `depth`; convergence is not
/// checked.
pub struct RelationalEngine<S> {
    enumerator: ConceptEnumerator<S>,
    config: RcaConfig,
}

impl<S: TransversalSolver> RelationalEngine<S> {
    pub fn new(solver: S, config: RcaConfig) -> Result<Self> {
        config.validate().map_err(RcaError::InvalidConfig)?;
        Ok(Self {
            enumerator: ConceptEnumerator::new(solver),
            config,
        })
    }

    pub fn config(&self) -> &RcaConfig {
        &self.config
    }

    pub fn enumerator(&self) -> &ConceptEnumerator<S> {
        &self.enumerator
    }

    /// Preprocess, grow for `depth` iterations, and enumerate the concepts of
    /// every resulting context
    pub fn run(&self, family: &ContextFamily, strategy: &Strategy) -> Result<RcaOutput> {
        check_strategy(family, strategy)?;

        let mut current = self.preprocess(family)?;
        for iteration in 1..=self.config.depth {
            current = self.iterate(&current, strategy)?;
            log::info!(
                "RCA iteration {}/{}: dimensions {:?}",
                iteration,
                self.config.depth,
                current.contexts().map(Context::dimensions).collect::<Vec<_>>()
            );
        }

        let concepts = current
            .contexts()
            .map(|context| self.enumerator.concepts(context))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(RcaOutput {
            family: current,
            concepts,
        })
    }

    /// Add the disjunction element to every attribute dimension of every
    /// context
    pub fn preprocess(&self, family: &ContextFamily) -> Result<ContextFamily> {
        let mut processed = family.clone();
        for (index, member) in family.members().iter().enumerate() {
            let member = add_disjunctions(member, &self.config.disjunction_label)?;
            processed = processed.with_member(index, member)?;
        }
        Ok(processed)
    }

    /// Apply every rule of the strategy once, in order
    pub fn iterate(&self, family: &ContextFamily, strategy: &Strategy) -> Result<ContextFamily> {
        let mut current = family.clone();
        for rule in &strategy.rules {
            current = self.apply_rule(&current, rule)?;
        }
        Ok(current)
    }

    /// Scale the rule's source context by the concepts of its target context
    pub fn apply_rule(&self, family: &ContextFamily, rule: &Rule) -> Result<ContextFamily> {
        check_rule(family, rule)?;
        let relation = family.relation(&rule.relation)?;
        let source = family.member(rule.source)?;
        let target = family.member(rule.target)?;

        let concepts = self.enumerator.concepts(target.context())?;

        let mut names: Vec<String> = concepts
            .iter()
            .map(|concept| {
                format!(
                    "{}{}:{}",
                    rule.quantifier,
                    rule.relation,
                    target.render(concept)
                )
            })
            .collect();
        let disjunction = names.len();
        names.push(self.config.disjunction_label.clone());

        let context = source.context();
        let satisfied: Vec<Vec<usize>> = (0..context.object_count())
            .map(|object| {
                let image = relation.image(object);
                concepts
                    .iter()
                    .enumerate()
                    .filter(|(_, concept)| {
                        image.is_some_and(|image| rule.quantifier.holds(image, concept.extent()))
                    })
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();

        let mut tuples = Vec::new();
        for tuple in context.tuples() {
            for &attribute in satisfied[tuple[0]].iter().chain(iter::once(&disjunction)) {
                let mut extended = Vec::with_capacity(tuple.len() + 1);
                extended.extend_from_slice(tuple);
                extended.push(attribute);
                tuples.push(extended);
            }
        }

        let mut sizes = context.sizes().to_vec();
        sizes.push(names.len());
        let mut labels = source.labels().to_vec();
        labels.push(names);

        log::debug!(
            "Rule {}{} ({} -> {}): {} relational attributes, {} tuples",
            rule.quantifier,
            rule.relation,
            rule.source,
            rule.target,
            concepts.len(),
            tuples.len()
        );

        let grown = LabeledContext::new(Context::new(sizes, tuples)?, labels)?;
        family.with_member(rule.source, grown)
    }
}

/// Rule must name a registered relation between the same two contexts
fn check_rule(family: &ContextFamily, rule: &Rule) -> Result<()> {
    let relation = family.relation(&rule.relation)?;
    family.context(rule.source)?;
    family.context(rule.target)?;
    if relation.source() != rule.source || relation.target() != rule.target {
        return Err(RcaError::mismatch(
            rule.relation.clone(),
            format!(
                "relation links {} -> {}, rule uses {} -> {}",
                relation.source(),
                relation.target(),
                rule.source,
                rule.target
            ),
        ));
    }
    Ok(())
}

fn check_strategy(family: &ContextFamily, strategy: &Strategy) -> Result<()> {
    strategy
        .rules
        .iter()
        .try_for_each(|rule| check_rule(family, rule))
}

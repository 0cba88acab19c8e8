use crate::validator::ValidationContext;
use gqlcheck_parser::ast::Definition;
use gqlcheck_parser::ast::Field;
use gqlcheck_parser::ast::FieldDefinition;

/// A function run once for every [`Field`] the walker reaches.
///
/// Arguments are the statically known parent type (absent when it could not
/// be resolved), the field's definition on that parent (absent when the
/// parent has no such field), and the field node itself.
pub type FieldVisitor = dyn Fn(
        &mut ValidationContext<'_>,
        Option<&Definition>,
        Option<&FieldDefinition>,
        &Field,
    ) + Send + Sync;

pub(crate) struct NamedFieldVisitor {
    pub(crate) rule: String,
    pub(crate) visit: Box<FieldVisitor>,
}

/// Collects field visitors before any validation runs. Call
/// [`FieldVisitorRegistryBuilder::build`] to freeze the set.
#[derive(Default)]
pub struct FieldVisitorRegistryBuilder {
    visitors: Vec<NamedFieldVisitor>,
}

impl FieldVisitorRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `visitor` under `rule`. Errors it reports are tagged with
    /// that name. Visitors run in registration order.
    pub fn add_field_visitor<F>(mut self, rule: impl Into<String>, visitor: F) -> Self
    where
        F: Fn(
            &mut ValidationContext<'_>,
            Option<&Definition>,
            Option<&FieldDefinition>,
            &Field,
        ) + Send + Sync + 'static,
    {
        self.visitors.push(NamedFieldVisitor {
            rule: rule.into(),
            visit: Box::new(visitor),
        });
        self
    }

    pub fn build(self) -> FieldVisitorRegistry {
        FieldVisitorRegistry {
            visitors: self.visitors,
        }
    }
}

/// The immutable set of field visitors a walk dispatches to.
///
/// Shareable across threads: any number of concurrent validations may read
/// one registry.
#[derive(Default)]
pub struct FieldVisitorRegistry {
    visitors: Vec<NamedFieldVisitor>,
}

impl FieldVisitorRegistry {
    pub fn builder() -> FieldVisitorRegistryBuilder {
        FieldVisitorRegistryBuilder::new()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.visitors.iter().map(|visitor| visitor.rule.as_str())
    }

    pub(crate) fn visitors(&self) -> &[NamedFieldVisitor] {
        &self.visitors
    }
}

impl std::fmt::Debug for FieldVisitorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rule_names()).finish()
    }
}

impl std::fmt::Debug for FieldVisitorRegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.visitors.iter().map(|visitor| visitor.rule.as_str()))
            .finish()
    }
}

//! Convenient access to a datamodel as understood by ParserDatabase.
//!
//! The walkers:
//! - Know about specific declarations and what kind they are (types, enums).
//! - Know about directives and which ones are defined and allowed.
//! - Know about relations.

mod r#enum;
mod relation;
mod relation_field;
mod scalar_field;
mod r#type;

pub use r#enum::*;
pub use relation::*;
pub use relation_field::*;
pub use scalar_field::*;
pub use r#type::*;

/// A generic walker. Only walkers instantiated with a concrete ID type
/// (`I`) are useful.
#[derive(Clone, Copy)]
pub struct Walker<'db, I> {
    /// The parser database being traversed.
    pub db: &'db crate::ParserDatabase,
    /// The identifier of the focused element.
    pub id: I,
}

impl<'db, I> Walker<'db, I> {
    /// Traverse something else in the same schema.
    pub fn walk<J>(self, other: J) -> Walker<'db, J> {
        self.db.walk(other)
    }
}

impl<I> PartialEq for Walker<'_, I>
where
    I: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.id.eq(&other.id)
    }
}

impl crate::ParserDatabase {
    /// Traverse a schema element by id.
    pub fn walk<I>(&self, id: I) -> Walker<'_, I> {
        Walker { db: self, id }
    }

    /// Walk all the type declarations in the schema.
    pub fn walk_types(&self) -> impl Iterator<Item = TypeWalker<'_>> {
        (0..self.types.types.len()).map(move |idx| self.walk(crate::TypeId(idx as u32)))
    }

    /// Walk all the enum declarations in the schema.
    pub fn walk_enums(&self) -> impl Iterator<Item = EnumWalker<'_>> {
        (0..self.types.enums.len()).map(move |idx| self.walk(crate::EnumId(idx as u32)))
    }

    /// Walk all the relations in the schema. A relation may be defined by
    /// one or two fields; in both cases, it is still a single relation.
    pub fn walk_relations(&self) -> impl ExactSizeIterator<Item = RelationWalker<'_>> {
        (0..self.relations.relations.len()).map(move |idx| self.walk(crate::RelationId(idx as u32)))
    }

    /// Find a type declaration by name.
    pub fn find_type<'db>(&'db self, name: &str) -> Option<TypeWalker<'db>> {
        self.interner
            .lookup(name)
            .and_then(|name_id| self.names.tops.get(&name_id))
            .and_then(|top_ref| match top_ref {
                crate::names::TopRef::Type(type_id) => Some(self.walk(*type_id)),
                _ => None,
            })
    }

    /// Find an enum declaration by name.
    pub fn find_enum<'db>(&'db self, name: &str) -> Option<EnumWalker<'db>> {
        self.interner
            .lookup(name)
            .and_then(|name_id| self.names.tops.get(&name_id))
            .and_then(|top_ref| match top_ref {
                crate::names::TopRef::Enum(enum_id) => Some(self.walk(*enum_id)),
                _ => None,
            })
    }
}

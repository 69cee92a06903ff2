use crate::{
    attributes,
    context::Context,
    ids::{EnumId, StringId, TypeId},
    names::TopRef,
};
use diagnostics::{DatamodelError, FileId};
use schema_ast::ast::{self, WithName};

/// The resolved types and fields of the schema, addressed by id.
#[derive(Default)]
pub(crate) struct Types {
    pub(crate) types: Vec<TypeRecord>,
    pub(crate) enums: Vec<EnumRecord>,
    pub(crate) scalar_fields: Vec<ScalarField>,
    pub(crate) relation_fields: Vec<RelationField>,
}

pub(crate) struct TypeRecord {
    pub(crate) file_id: FileId,
    pub(crate) top_id: ast::TopId,
    pub(crate) name: StringId,
    /// The table name set with `@db(name: ...)`.
    pub(crate) db_name: Option<StringId>,
    /// The type is annotated with `@relationTable`.
    pub(crate) is_relation_table: bool,
}

pub(crate) struct EnumRecord {
    pub(crate) file_id: FileId,
    pub(crate) top_id: ast::TopId,
    pub(crate) name: StringId,
}

/// A field resolving to a scalar or enum type.
pub(crate) struct ScalarField {
    pub(crate) type_id: TypeId,
    pub(crate) field_id: ast::FieldId,
    pub(crate) r#type: ScalarFieldType,
    pub(crate) is_id: bool,
    pub(crate) is_unique: bool,
    pub(crate) is_created_at: bool,
    pub(crate) is_updated_at: bool,
    pub(crate) default: Option<DefaultValue>,
    /// The column name set with `@db(name: ...)`.
    pub(crate) db_name: Option<StringId>,
    /// The field carries `@scalarList(strategy: RELATION)`.
    pub(crate) is_scalar_list: bool,
}

impl ScalarField {
    pub(crate) fn new(type_id: TypeId, field_id: ast::FieldId, r#type: ScalarFieldType) -> Self {
        ScalarField {
            type_id,
            field_id,
            r#type,
            is_id: false,
            is_unique: false,
            is_created_at: false,
            is_updated_at: false,
            default: None,
            db_name: None,
            is_scalar_list: false,
        }
    }
}

/// A field resolving to another declared type.
#[derive(Clone, Copy)]
pub(crate) struct RelationField {
    pub(crate) type_id: TypeId,
    pub(crate) field_id: ast::FieldId,
    pub(crate) referenced_type: TypeId,
    /// The relation name set with `@relation(name: ...)`.
    pub(crate) name: Option<StringId>,
    /// The link strategy set with `@relation(link: ...)`.
    pub(crate) link: Option<RelationLink>,
    /// The cascade behavior set with `@relation(onDelete: ...)`.
    pub(crate) on_delete: Option<OnDeleteStrategy>,
    /// The foreign key column name set with `@db(name: ...)`.
    pub(crate) db_name: Option<StringId>,
}

/// What a scalar field's type reference resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarFieldType {
    Scalar(ScalarType),
    Enum(EnumId),
}

/// The built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    String,
    Int,
    Float,
    Boolean,
    DateTime,
    Json,
    Id,
}

impl ScalarType {
    pub fn try_from_str(s: &str) -> Option<ScalarType> {
        match s {
            "String" => Some(ScalarType::String),
            "Int" => Some(ScalarType::Int),
            "Float" => Some(ScalarType::Float),
            "Boolean" => Some(ScalarType::Boolean),
            "DateTime" => Some(ScalarType::DateTime),
            "Json" => Some(ScalarType::Json),
            "ID" => Some(ScalarType::Id),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::Boolean => "Boolean",
            ScalarType::DateTime => "DateTime",
            ScalarType::Json => "Json",
            ScalarType::Id => "ID",
        }
    }
}

/// The storage strategy of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationLink {
    /// A foreign key column on the single side.
    Inline,
    /// A dedicated relation table.
    Table,
}

/// The cascade behavior of one relation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDeleteStrategy {
    SetNull,
    Cascade,
}

impl OnDeleteStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnDeleteStrategy::SetNull => "SET_NULL",
            OnDeleteStrategy::Cascade => "CASCADE",
        }
    }
}

/// A `@default(value: ...)` declaration. The literal is kept as parsed, with
/// its span, so later phases can check it against the field type.
pub(crate) struct DefaultValue {
    pub(crate) value: ast::Expression,
}

pub(super) fn resolve_types(ctx: &mut Context<'_>) {
    for type_idx in 0..ctx.types.types.len() {
        let type_id = TypeId(type_idx as u32);
        let (file_id, top_id) = {
            let record = &ctx.types.types[type_idx];
            (record.file_id, record.top_id)
        };
        let ast_type = ctx.files[file_id][top_id]
            .as_type()
            .expect("type record pointing to a non-type declaration");

        visit_type(type_id, ast_type, ctx);
    }

    for enum_idx in 0..ctx.types.enums.len() {
        let (file_id, top_id) = {
            let record = &ctx.types.enums[enum_idx];
            (record.file_id, record.top_id)
        };
        let ast_enum = ctx.files[file_id][top_id]
            .as_enum()
            .expect("enum record pointing to a non-enum declaration");

        attributes::resolve_enum_directives(ast_enum, ctx);
    }
}

fn visit_type(type_id: TypeId, ast_type: &ast::TypeDecl, ctx: &mut Context<'_>) {
    attributes::resolve_type_directives(type_id, ast_type, ctx);

    for (field_id, ast_field) in ast_type.iter_fields() {
        let referenced = &ast_field.field_type.name;

        if let Some(scalar_type) = ScalarType::try_from_str(&referenced.name) {
            validate_field_name(ast_field, true, ctx);
            let mut field = ScalarField::new(type_id, field_id, ScalarFieldType::Scalar(scalar_type));
            attributes::resolve_scalar_field_directives(&mut field, ast_field, ctx);
            ctx.types.scalar_fields.push(field);
            continue;
        }

        match ctx.interner.lookup(&referenced.name).and_then(|name_id| ctx.names.tops.get(&name_id)) {
            Some(TopRef::Type(referenced_type)) => {
                let referenced_type = *referenced_type;
                validate_field_name(ast_field, false, ctx);
                let mut field = RelationField {
                    type_id,
                    field_id,
                    referenced_type,
                    name: None,
                    link: None,
                    on_delete: None,
                    db_name: None,
                };
                attributes::resolve_relation_field_directives(&mut field, ast_field, ctx);
                ctx.types.relation_fields.push(field);
            }
            Some(TopRef::Enum(enum_id)) => {
                let enum_id = *enum_id;
                validate_field_name(ast_field, true, ctx);
                let mut field = ScalarField::new(type_id, field_id, ScalarFieldType::Enum(enum_id));
                attributes::resolve_scalar_field_directives(&mut field, ast_field, ctx);
                ctx.types.scalar_fields.push(field);
            }
            None => {
                ctx.push_error(DatamodelError::new_field_validation_error(
                    &format!(
                        "Type \"{}\" is neither a built-in type nor refers to another type or enum.",
                        referenced.name
                    ),
                    ast_type.name(),
                    ast_field.name(),
                    referenced.span,
                ));
            }
        }
    }
}

/// Field names are limited to 64 alphanumeric characters. Scalar field
/// names must start with a lowercase letter; relation field casing is only
/// a convention and not enforced.
fn validate_field_name(ast_field: &ast::FieldDecl, is_scalar: bool, ctx: &mut Context<'_>) {
    let name = ast_field.name();
    let span = ast_field.name.span;

    if name.len() > 64 {
        ctx.push_error(DatamodelError::new_name_error(
            "field",
            name,
            "Field names must be no longer than 64 characters.",
            span,
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        ctx.push_error(DatamodelError::new_name_error(
            "field",
            name,
            "Field names may only contain alphanumeric characters.",
            span,
        ));
    }

    if is_scalar && !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        ctx.push_error(DatamodelError::new_name_error(
            "field",
            name,
            "Field names must start with a lowercase letter.",
            span,
        ));
    }
}

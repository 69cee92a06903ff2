use crate::{ListFeatures, Operation, OperationCatalog, OperationKind, pluralize};
use heck::{ToLowerCamelCase, ToUpperCamelCase};
use parser_database::ParserDatabase;

/// Derives the operation catalog from a validated datamodel. Relation
/// table types carry no API of their own.
pub fn build(db: &ParserDatabase) -> OperationCatalog {
    let mut catalog = OperationCatalog::default();

    for ty in db.walk_types().filter(|ty| !ty.is_relation_table()) {
        let type_name = ty.name();
        let singular = type_name.to_lower_camel_case();
        let plural = pluralize(&singular);
        let suffix = type_name.to_upper_camel_case();

        let mut push = |kind: OperationKind, field_name: String, unique_field: Option<String>| {
            let list_features = matches!(kind, OperationKind::List).then(ListFeatures::default);

            catalog.push_operation(Operation {
                type_name: type_name.to_owned(),
                kind,
                field_name,
                unique_field,
                list_features,
            });
        };

        push(OperationKind::Get, singular.clone(), None);

        // One extra single-read variant per unique scalar field.
        for unique in ty.unique_scalar_fields() {
            push(OperationKind::Get, singular.clone(), Some(unique.name().to_owned()));
        }

        push(OperationKind::List, plural, None);
        push(OperationKind::Create, format!("create{suffix}"), None);
        push(OperationKind::Update, format!("update{suffix}"), None);
        push(OperationKind::Delete, format!("delete{suffix}"), None);
        push(OperationKind::Exists, format!("{singular}Exists"), None);
        push(OperationKind::Subscribe, singular, None);
    }

    catalog
}

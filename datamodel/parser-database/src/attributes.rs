//! Validation of directive instances against the static rule table: host
//! kind, argument names and literal kinds, and cardinality. The semantic
//! cross-field checks live in the validation pipeline of `datamodel-core`.

use crate::{
    context::Context,
    ids::TypeId,
    types::{OnDeleteStrategy, RelationField, RelationLink, ScalarField, DefaultValue},
};
use diagnostics::DatamodelError;
use schema_ast::ast::{self, WithName, WithSpan};

/// Where a directive may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Host {
    Type,
    Enum,
    ScalarField,
    RelationField,
}

impl Host {
    fn description(self) -> &'static str {
        match self {
            Host::Type => "types",
            Host::Enum => "enums",
            Host::ScalarField => "scalar fields",
            Host::RelationField => "relation fields",
        }
    }
}

/// The expected literal kind of a directive argument.
#[derive(Debug, Clone, Copy)]
enum ArgKind {
    String,
    Constant(&'static [&'static str]),
    /// Any literal. The value is checked against the field type later.
    Any,
}

struct ArgRule {
    name: &'static str,
    required: bool,
    kind: ArgKind,
}

struct DirectiveRule {
    name: &'static str,
    hosts: &'static [Host],
    args: &'static [ArgRule],
}

/// The nine supported directives. Anything else is a validation error, not
/// an extension point.
static DIRECTIVE_RULES: &[DirectiveRule] = &[
    DirectiveRule {
        name: "id",
        hosts: &[Host::ScalarField],
        args: &[],
    },
    DirectiveRule {
        name: "unique",
        hosts: &[Host::ScalarField],
        args: &[],
    },
    DirectiveRule {
        name: "createdAt",
        hosts: &[Host::ScalarField],
        args: &[],
    },
    DirectiveRule {
        name: "updatedAt",
        hosts: &[Host::ScalarField],
        args: &[],
    },
    DirectiveRule {
        name: "default",
        hosts: &[Host::ScalarField],
        args: &[ArgRule {
            name: "value",
            required: true,
            kind: ArgKind::Any,
        }],
    },
    DirectiveRule {
        name: "db",
        hosts: &[Host::Type, Host::ScalarField, Host::RelationField],
        args: &[ArgRule {
            name: "name",
            required: true,
            kind: ArgKind::String,
        }],
    },
    DirectiveRule {
        name: "relation",
        hosts: &[Host::RelationField],
        args: &[
            ArgRule {
                name: "name",
                required: false,
                kind: ArgKind::String,
            },
            ArgRule {
                name: "link",
                required: false,
                kind: ArgKind::Constant(&["INLINE", "TABLE"]),
            },
            ArgRule {
                name: "onDelete",
                required: false,
                kind: ArgKind::Constant(&["SET_NULL", "CASCADE"]),
            },
        ],
    },
    DirectiveRule {
        name: "relationTable",
        hosts: &[Host::Type],
        args: &[],
    },
    DirectiveRule {
        name: "scalarList",
        hosts: &[Host::ScalarField],
        args: &[ArgRule {
            name: "strategy",
            required: true,
            kind: ArgKind::Constant(&["RELATION"]),
        }],
    },
];

pub(super) fn resolve_type_directives(type_id: TypeId, ast_type: &ast::TypeDecl, ctx: &mut Context<'_>) {
    for directive in validate_directives(&ast_type.directives, Host::Type, ctx) {
        match directive.name() {
            "db" => {
                if let Some((name, _)) = directive.argument("name").and_then(|arg| arg.value.as_string_value()) {
                    let name = ctx.interner.intern(name);
                    ctx.types.types[type_id.0 as usize].db_name = Some(name);
                }
            }
            "relationTable" => ctx.types.types[type_id.0 as usize].is_relation_table = true,
            _ => unreachable!(),
        }
    }
}

pub(super) fn resolve_enum_directives(ast_enum: &ast::EnumDecl, ctx: &mut Context<'_>) {
    // No directive may appear on enums; this reports them all.
    validate_directives(&ast_enum.directives, Host::Enum, ctx);
}

pub(super) fn resolve_scalar_field_directives(
    field: &mut ScalarField,
    ast_field: &ast::FieldDecl,
    ctx: &mut Context<'_>,
) {
    for directive in validate_directives(&ast_field.directives, Host::ScalarField, ctx) {
        match directive.name() {
            "id" => field.is_id = true,
            "unique" => field.is_unique = true,
            "createdAt" => field.is_created_at = true,
            "updatedAt" => field.is_updated_at = true,
            "default" => {
                field.default = directive.argument("value").map(|arg| DefaultValue {
                    value: arg.value.clone(),
                })
            }
            "db" => {
                if let Some((name, _)) = directive.argument("name").and_then(|arg| arg.value.as_string_value()) {
                    field.db_name = Some(ctx.interner.intern(name));
                }
            }
            "scalarList" => field.is_scalar_list = true,
            _ => unreachable!(),
        }
    }
}

pub(super) fn resolve_relation_field_directives(
    field: &mut RelationField,
    ast_field: &ast::FieldDecl,
    ctx: &mut Context<'_>,
) {
    for directive in validate_directives(&ast_field.directives, Host::RelationField, ctx) {
        match directive.name() {
            "relation" => {
                if let Some(arg) = directive.argument("name") {
                    match arg.value.as_string_value() {
                        Some(("", span)) => ctx.push_error(DatamodelError::new_directive_validation_error(
                            "A relation name must not be empty.",
                            "relation",
                            span,
                        )),
                        Some((name, _)) => field.name = Some(ctx.interner.intern(name)),
                        None => (),
                    }
                }

                if let Some((constant, _)) = directive.argument("link").and_then(|arg| arg.value.as_constant_value()) {
                    field.link = match constant {
                        "INLINE" => Some(RelationLink::Inline),
                        "TABLE" => Some(RelationLink::Table),
                        _ => unreachable!(),
                    };
                }

                if let Some((constant, _)) = directive
                    .argument("onDelete")
                    .and_then(|arg| arg.value.as_constant_value())
                {
                    field.on_delete = match constant {
                        "SET_NULL" => Some(OnDeleteStrategy::SetNull),
                        "CASCADE" => Some(OnDeleteStrategy::Cascade),
                        _ => unreachable!(),
                    };
                }
            }
            "db" => {
                if let Some((name, _)) = directive.argument("name").and_then(|arg| arg.value.as_string_value()) {
                    field.db_name = Some(ctx.interner.intern(name));
                }
            }
            _ => unreachable!(),
        }
    }
}

fn validate_directives<'ast>(
    directives: &'ast [ast::Directive],
    host: Host,
    ctx: &mut Context<'_>,
) -> Vec<&'ast ast::Directive> {
    let mut seen: Vec<&str> = Vec::new();
    let mut valid: Vec<&'ast ast::Directive> = Vec::new();

    for directive in directives {
        let rule = match DIRECTIVE_RULES.iter().find(|rule| rule.name == directive.name()) {
            Some(rule) => rule,
            None => {
                ctx.push_error(DatamodelError::new_unknown_directive_error(
                    directive.name(),
                    directive.name.span,
                ));
                continue;
            }
        };

        if !rule.hosts.contains(&host) {
            ctx.push_error(DatamodelError::new_directive_validation_error(
                &format!("This directive is not allowed on {}.", host.description()),
                rule.name,
                directive.span(),
            ));
            continue;
        }

        if seen.contains(&directive.name()) {
            ctx.push_error(DatamodelError::new_duplicate_directive_error(
                directive.name(),
                directive.name.span,
            ));
            continue;
        }

        seen.push(directive.name());

        if validate_arguments(directive, rule, ctx) {
            valid.push(directive);
        }
    }

    valid
}

fn validate_arguments(directive: &ast::Directive, rule: &DirectiveRule, ctx: &mut Context<'_>) -> bool {
    let mut ok = true;
    let mut seen: Vec<&str> = Vec::new();

    for argument in &directive.arguments {
        let name = argument.name.name.as_str();

        if seen.contains(&name) {
            ctx.push_error(DatamodelError::new_directive_validation_error(
                &format!("Argument \"{name}\" is defined more than once."),
                rule.name,
                argument.span(),
            ));
            ok = false;
            continue;
        }

        seen.push(name);

        match rule.args.iter().find(|arg_rule| arg_rule.name == name) {
            None => {
                ctx.push_error(DatamodelError::new_directive_validation_error(
                    &format!("Argument \"{name}\" is unknown."),
                    rule.name,
                    argument.span(),
                ));
                ok = false;
            }
            Some(arg_rule) => {
                if !literal_matches(&argument.value, arg_rule.kind, rule.name, ctx) {
                    ok = false;
                }
            }
        }
    }

    for arg_rule in rule.args.iter().filter(|arg_rule| arg_rule.required) {
        if directive.argument(arg_rule.name).is_none() {
            ctx.push_error(DatamodelError::new_directive_validation_error(
                &format!("Argument \"{}\" is missing.", arg_rule.name),
                rule.name,
                directive.span(),
            ));
            ok = false;
        }
    }

    ok
}

fn literal_matches(value: &ast::Expression, kind: ArgKind, directive_name: &str, ctx: &mut Context<'_>) -> bool {
    match kind {
        ArgKind::Any => true,
        ArgKind::String => {
            if value.as_string_value().is_some() {
                true
            } else {
                ctx.push_error(DatamodelError::new_directive_validation_error(
                    &format!("Expected a string value, but received {} value `{value}`.", value.describe_value_type()),
                    directive_name,
                    value.span(),
                ));
                false
            }
        }
        ArgKind::Constant(allowed) => match value.as_constant_value() {
            Some((constant, _)) if allowed.contains(&constant) => true,
            _ => {
                ctx.push_error(DatamodelError::new_directive_validation_error(
                    &format!("Expected one of {}, but received `{value}`.", allowed.join(", ")),
                    directive_name,
                    value.span(),
                ));
                false
            }
        },
    }
}

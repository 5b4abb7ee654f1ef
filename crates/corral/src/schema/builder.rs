use super::{
    BelongsTo, Field, FieldId, ForeignKey, HasMany, Model, ModelId, ModelMethod, Relation, Schema,
};
use crate::{stmt, Error, Result};

use indexmap::IndexMap;

/// Assembles a [`Schema`] from model and relation declarations.
///
/// Declarations are collected first and resolved in `build`, so relations may
/// reference models declared later, and a model may reference itself.
#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<ModelBuilder>,
}

#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    fields: Vec<FieldDecl>,
    primary_key: Option<String>,
    belongs_to: Vec<BelongsToDecl>,
    has_many: Vec<HasManyDecl>,
}

#[derive(Debug)]
struct FieldDecl {
    name: String,
    ty: stmt::Type,
    nullable: bool,
}

#[derive(Debug)]
struct BelongsToDecl {
    accessor: String,
    target: String,
    foreign_key: String,
}

#[derive(Debug)]
struct HasManyDecl {
    accessor: String,
    target: String,
    via: Option<String>,
}

impl Builder {
    /// Declare a model and return its builder.
    pub fn model(&mut self, name: &str) -> &mut ModelBuilder {
        self.models.push(ModelBuilder {
            name: name.to_string(),
            fields: vec![],
            primary_key: None,
            belongs_to: vec![],
            has_many: vec![],
        });
        self.models.last_mut().unwrap()
    }

    pub fn build(self) -> Result<Schema> {
        let mut models = IndexMap::new();

        // First pass: materialize the models and their primitive fields.
        for (index, decl) in self.models.iter().enumerate() {
            let id = ModelId(index);

            if models.values().any(|model: &Model| model.name == decl.name) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` is declared more than once",
                    decl.name
                )));
            }

            let mut fields = vec![];
            for (field_index, field) in decl.fields.iter().enumerate() {
                if fields.iter().any(|f: &Field| f.name == field.name) {
                    return Err(Error::invalid_schema(format!(
                        "field `{}::{}` is declared more than once",
                        decl.name, field.name
                    )));
                }
                fields.push(Field {
                    id: id.field(field_index),
                    name: field.name.clone(),
                    ty: field.ty,
                    nullable: field.nullable,
                });
            }

            let primary_key = match &decl.primary_key {
                Some(name) => {
                    let field = fields
                        .iter()
                        .find(|field| &field.name == name)
                        .expect("key() always declares the field");
                    field.id
                }
                None => {
                    return Err(Error::invalid_schema(format!(
                        "model `{}` has no key field",
                        decl.name
                    )));
                }
            };

            models.insert(
                id,
                Model {
                    id,
                    name: decl.name.clone(),
                    fields,
                    primary_key,
                    relations: IndexMap::new(),
                },
            );
        }

        let mut schema = Schema { models };

        // Second pass: link BelongsTo relations. These go first because
        // HasMany linking resolves against them.
        for (index, decl) in self.models.iter().enumerate() {
            let id = ModelId(index);

            for rel in &decl.belongs_to {
                let target = resolve_target(&schema, &decl.name, &rel.accessor, &rel.target)?;
                let field = match schema.models[&id].field_by_name(&rel.foreign_key) {
                    Some(field) => field.id,
                    None => {
                        return Err(Error::invalid_schema(format!(
                            "relation `{}::{}` names foreign key `{}`, which is not a field",
                            decl.name, rel.accessor, rel.foreign_key
                        )));
                    }
                };
                let references = schema.models[&target].primary_key;

                register(
                    &mut schema,
                    id,
                    &rel.accessor,
                    BelongsTo {
                        target,
                        foreign_key: ForeignKey { field, references },
                    }
                    .into(),
                )?;
            }
        }

        // Third pass: link HasMany relations against their BelongsTo pairs.
        for (index, decl) in self.models.iter().enumerate() {
            let id = ModelId(index);

            for rel in &decl.has_many {
                let target = resolve_target(&schema, &decl.name, &rel.accessor, &rel.target)?;
                let field = find_pair(&schema, id, target, &decl.name, rel)?.foreign_key.field;
                let references = schema.models[&id].primary_key;

                register(
                    &mut schema,
                    id,
                    &rel.accessor,
                    HasMany {
                        target,
                        foreign_key: ForeignKey { field, references },
                    }
                    .into(),
                )?;
            }
        }

        Ok(schema)
    }
}

fn resolve_target(
    schema: &Schema,
    model: &str,
    accessor: &str,
    target: &str,
) -> Result<ModelId> {
    match schema.model_by_name(target) {
        Some(model) => Ok(model.id),
        None => Err(Error::invalid_schema(format!(
            "relation `{model}::{accessor}` references model `{target}`, \
             which was not declared with the schema"
        ))),
    }
}

/// Validate the accessor name and register the relation on the model.
fn register(schema: &mut Schema, id: ModelId, accessor: &str, relation: Relation) -> Result<()> {
    let model = &schema.models[&id];

    if ModelMethod::lookup(accessor).is_some() {
        return Err(Error::invalid_schema(format!(
            "relation `{}::{accessor}` shadows a model method",
            model.name
        )));
    }
    if model.field_by_name(accessor).is_some() {
        return Err(Error::invalid_schema(format!(
            "relation `{}::{accessor}` shadows a field",
            model.name
        )));
    }
    if model.relations.contains_key(accessor) {
        return Err(Error::invalid_schema(format!(
            "relation `{}::{accessor}` is registered more than once",
            model.name
        )));
    }

    schema
        .models
        .get_mut(&id)
        .unwrap()
        .relations
        .insert(accessor.to_string(), relation);

    Ok(())
}

/// Find the BelongsTo relation on `target` that pairs with a HasMany declared
/// on `source`.
fn find_pair<'a>(
    schema: &'a Schema,
    source: ModelId,
    target: ModelId,
    source_name: &str,
    decl: &HasManyDecl,
) -> Result<&'a BelongsTo> {
    let target_model = &schema.models[&target];

    if let Some(via) = &decl.via {
        return match target_model.relation(via) {
            Some(Relation::BelongsTo(pair)) if pair.target == source => Ok(pair),
            Some(_) => Err(Error::invalid_schema(format!(
                "relation `{source_name}::{}` names `{}::{via}` as its pair, \
                 but it is not a `BelongsTo` targeting `{source_name}`",
                decl.accessor, target_model.name
            ))),
            None => Err(Error::invalid_schema(format!(
                "relation `{source_name}::{}` names `{}::{via}` as its pair, \
                 which is not registered",
                decl.accessor, target_model.name
            ))),
        };
    }

    let pairs: Vec<_> = target_model
        .relations
        .values()
        .filter_map(|relation| match relation {
            Relation::BelongsTo(pair) if pair.target == source => Some(pair),
            _ => None,
        })
        .collect();

    match pairs[..] {
        [pair] => Ok(pair),
        [] => Err(Error::invalid_schema(format!(
            "relation `{source_name}::{}` has no matching `BelongsTo` relation on `{}`",
            decl.accessor, target_model.name
        ))),
        _ => Err(Error::invalid_schema(format!(
            "relation `{source_name}::{}` is ambiguous: `{}` has more than one \
             `BelongsTo` relation targeting `{source_name}`; disambiguate with `has_many_via`",
            decl.accessor, target_model.name
        ))),
    }
}

impl ModelBuilder {
    /// Declare the identity-key field. Key fields are not nullable.
    pub fn key(&mut self, name: &str, ty: stmt::Type) -> &mut Self {
        self.fields.push(FieldDecl {
            name: name.to_string(),
            ty,
            nullable: false,
        });
        self.primary_key = Some(name.to_string());
        self
    }

    /// Declare a nullable field.
    pub fn field(&mut self, name: &str, ty: stmt::Type) -> &mut Self {
        self.fields.push(FieldDecl {
            name: name.to_string(),
            ty,
            nullable: true,
        });
        self
    }

    /// Declare a `belongs_to` relation. `foreign_key` names the field on this
    /// model holding the target's identity key.
    pub fn belongs_to(&mut self, accessor: &str, target: &str, foreign_key: &str) -> &mut Self {
        self.belongs_to.push(BelongsToDecl {
            accessor: accessor.to_string(),
            target: target.to_string(),
            foreign_key: foreign_key.to_string(),
        });
        self
    }

    /// Declare a `has_many` relation. The pairing `belongs_to` on the target
    /// is inferred; it must be unique.
    pub fn has_many(&mut self, accessor: &str, target: &str) -> &mut Self {
        self.has_many.push(HasManyDecl {
            accessor: accessor.to_string(),
            target: target.to_string(),
            via: None,
        });
        self
    }

    /// Declare a `has_many` relation paired with the named `belongs_to`
    /// accessor on the target model.
    pub fn has_many_via(&mut self, accessor: &str, target: &str, via: &str) -> &mut Self {
        self.has_many.push(HasManyDecl {
            accessor: accessor.to_string(),
            target: target.to_string(),
            via: Some(via.to_string()),
        });
        self
    }
}

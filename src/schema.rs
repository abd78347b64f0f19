//! Input protocol description: domains with their types, commands and events.
//!
//! Passive data only. Mirrors the JSON shape of a protocol domain file; absent
//! names, lists and descriptions default to empty and unknown keys are ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Domain {
    #[serde(rename = "domain", default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub types: Vec<TypeDefinition>,
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A named type declared by a domain. `ty.kind` is the kind tag: `object`
/// declares an interface, anything else declares an alias.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TypeDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub ty: TypeRef,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub properties: Vec<TypeProperty>,
}

/// Raw reference triple as it appears in the JSON.
///
/// Use [`TypeRef::shape`] rather than reading the fields directly; it applies
/// the precedence between `type`, `items` and `$ref`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TypeRef {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub items: Option<Box<TypeRef>>,
}

/// Classified view of a [`TypeRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape<'a> {
    Primitive(&'a str),
    /// `items` may be missing in a malformed schema.
    Array(Option<&'a TypeRef>),
    Named(&'a str),
    Unresolved,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TypeProperty {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub ty: TypeRef,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<TypeProperty>,
    #[serde(default)]
    pub returns: Vec<TypeProperty>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<TypeProperty>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl TypeRef {
    pub fn primitive(kind: impl Into<String>) -> Self {
        Self { kind: Some(kind.into()), ..Self::default() }
    }
    pub fn array(items: TypeRef) -> Self {
        Self {
            kind: Some(String::from("array")),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }
    pub fn named(reference: impl Into<String>) -> Self {
        Self { reference: Some(reference.into()), ..Self::default() }
    }

    /// A non-empty `type` wins over `$ref`; `array` then reads `items`.
    pub fn shape(&self) -> TypeShape<'_> {
        match (self.kind.as_deref(), self.reference.as_deref()) {
            (Some("array"), _) => TypeShape::Array(self.items.as_deref()),
            (Some(kind), _) if !kind.is_empty() => TypeShape::Primitive(kind),
            (_, Some(reference)) => TypeShape::Named(reference),
            _ => TypeShape::Unresolved,
        }
    }
}

impl TypeProperty {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self { name: name.into(), ty, ..Self::default() }
    }
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl TypeDefinition {
    pub fn is_object(&self) -> bool {
        self.ty.kind.as_deref() == Some("object")
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_wins_over_reference() {
        let r = TypeRef {
            kind: Some("string".into()),
            reference: Some("Node".into()),
            items: None,
        };
        assert_eq!(r.shape(), TypeShape::Primitive("string"));
    }

    #[test]
    fn empty_kind_falls_through_to_reference() {
        let r = TypeRef { kind: Some(String::new()), reference: Some("Node".into()), items: None };
        assert_eq!(r.shape(), TypeShape::Named("Node"));
        assert_eq!(TypeRef::default().shape(), TypeShape::Unresolved);
    }

    #[test]
    fn array_shape_borrows_its_items() {
        let r = TypeRef::array(TypeRef::named("Node"));
        assert_eq!(r.shape(), TypeShape::Array(Some(&TypeRef::named("Node"))));
    }

    #[test]
    fn array_without_items_is_kept_as_array() {
        let r = TypeRef::primitive("array");
        assert_eq!(r.shape(), TypeShape::Array(None));
    }

    #[test]
    fn property_flattens_reference_fields() {
        let prop: TypeProperty = serde_json::from_value(json!({
            "name": "children",
            "type": "array",
            "items": { "$ref": "Node" },
            "optional": true,
            "description": "Child nodes."
        }))
        .unwrap();
        assert_eq!(prop.name, "children");
        assert!(prop.optional);
        assert_eq!(prop.ty, TypeRef::array(TypeRef::named("Node")));
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let domain: Domain = serde_json::from_value(json!({ "domain": "Console" })).unwrap();
        assert_eq!(domain.name, "Console");
        assert!(domain.description.is_empty());
        assert!(domain.types.is_empty() && domain.commands.is_empty() && domain.events.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let def: TypeDefinition = serde_json::from_value(json!({
            "id": "Level",
            "type": "string",
            "enum": ["log", "warning"],
            "description": "Message level."
        }))
        .unwrap();
        assert!(!def.is_object());
        assert_eq!(def.ty.shape(), TypeShape::Primitive("string"));
    }
}

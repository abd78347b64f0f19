//! Schema → declaration tree.
//!
//! The shared core (`convert_type_ref`, `convert_type`, `convert_property`)
//! lives here. The two output layouts are independent strategies in
//! [`separated`] and [`unified`]; one is picked once through [`GeneratorConfig`].

pub mod naming;
pub mod separated;
pub mod unified;

use rayon::prelude::*;

use crate::ast::{Declaration, Interface, Namespace, Parameter, Property, Typedef};
use crate::schema::{Command, Domain, TypeDefinition, TypeProperty, TypeRef, TypeShape};

pub const NUMBER_TYPE: &str = "number";
pub const ANY_TYPE: &str = "any";
/// Emitted wherever a malformed reference cannot be resolved.
pub const UNRESOLVED_TYPE: &str = "undefined";
pub const ARRAY_MARKER: &str = "[]";
pub const DEFAULT_RESULT_SUFFIX: &str = "Result";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Output layout of each domain namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Style {
    /// Raw types plus `Commands` / `Events` sub-namespaces of call-signature interfaces.
    #[default]
    Separated,
    /// Flat type list plus one interface named after the domain with a method per command/event.
    Unified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub style: Style,
    /// Appended to the PascalCase command name to name its result interface.
    pub result_suffix: String,
}

#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

/// A converted command or event: its callable member plus the auxiliary
/// types synthesized for it, in the order they should be declared.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted<M> {
    pub member: M,
    pub types: Vec<Declaration>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { style: Style::default(), result_suffix: DEFAULT_RESULT_SUFFIX.to_string() }
    }
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn with_style(style: Style) -> Self {
        Self::new(GeneratorConfig { style, ..GeneratorConfig::default() })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// One domain → one namespace, laid out per the configured style.
    pub fn convert_domain(&self, domain: &Domain) -> Namespace {
        let namespace = match self.config.style {
            Style::Separated => separated::convert_domain(self, domain),
            Style::Unified => unified::convert_domain(self, domain),
        };
        tracing::debug!(
            domain = %domain.name,
            types = namespace.types.len(),
            commands = domain.commands.len(),
            events = domain.events.len(),
            "converted domain"
        );
        namespace
    }

    /// Wraps every domain into a single ambient root namespace.
    ///
    /// Domains are independent, so they are converted in parallel; the child
    /// order still follows `domains`.
    pub fn convert_protocol(&self, root_name: &str, domains: &[Domain]) -> Namespace {
        let mut root = Namespace::new(
            root_name,
            true,
            format!("Root namespace holding all {root_name} protocol related interfaces."),
        );
        root.namespaces = domains.par_iter().map(|domain| self.convert_domain(domain)).collect();
        root
    }

    /// `object` definitions become interfaces, everything else an alias.
    pub fn convert_type(&self, definition: &TypeDefinition) -> Declaration {
        if definition.is_object() {
            self.object_interface(&definition.id, &definition.description, &definition.properties)
                .into()
        } else {
            Typedef::new(&definition.id, convert_type_ref(&definition.ty), &definition.description).into()
        }
    }

    pub fn convert_property(&self, property: &TypeProperty) -> Property {
        Property::new(
            &property.name,
            convert_type_ref(&property.ty),
            property.optional,
            &property.description,
        )
    }

    pub(crate) fn convert_parameter(&self, parameter: &TypeProperty) -> Parameter {
        Parameter::new(
            &parameter.name,
            convert_type_ref(&parameter.ty),
            parameter.optional,
            &parameter.description,
        )
    }

    pub(crate) fn object_interface(&self, name: &str, comment: &str, properties: &[TypeProperty]) -> Interface {
        let mut interface = Interface::new(name, comment);
        interface.properties = properties.iter().map(|p| self.convert_property(p)).collect();
        interface
    }

    /// `<Name><suffix>` holding the command's return fields, if it has any.
    pub(crate) fn result_interface(&self, command: &Command) -> Option<Interface> {
        if command.returns.is_empty() {
            return None;
        }
        let name = naming::result_type_name(&command.name, &self.config.result_suffix);
        let comment = format!("The returned object from {} command", command.name);
        Some(self.object_interface(&name, &comment, &command.returns))
    }

    /// `<Name>EventArgs` wrapping the event's parameters, if it has any.
    pub(crate) fn event_args_interface(&self, name: &str, parameters: &[TypeProperty]) -> Option<Interface> {
        if parameters.is_empty() {
            return None;
        }
        let comment = format!("Arguments passed to the '{name}' event.");
        Some(self.object_interface(&naming::event_args_type_name(name), &comment, parameters))
    }
}

/// Maps a schema reference to the text of a type reference.
///
/// `integer` → `number`, bare `object` → `any`, arrays append `[]` to their
/// element type (recursively), named references pass through verbatim.
pub fn convert_type_ref(type_ref: &TypeRef) -> String {
    match type_ref.shape() {
        TypeShape::Primitive("integer") => NUMBER_TYPE.to_string(),
        TypeShape::Primitive("object") => ANY_TYPE.to_string(),
        TypeShape::Primitive(kind) => kind.to_string(),
        TypeShape::Array(Some(items)) => format!("{}{ARRAY_MARKER}", convert_type_ref(items)),
        TypeShape::Array(None) => format!("{UNRESOLVED_TYPE}{ARRAY_MARKER}"),
        TypeShape::Named(reference) => reference.to_string(),
        TypeShape::Unresolved => UNRESOLVED_TYPE.to_string(),
    }
}

// ------------------------------- Tests ------------------------------------ //

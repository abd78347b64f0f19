//! Declaration tree for the output text. No resolution or formatting here.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespace {
    pub name: String,
    /// Rendered with the `declare` modifier (top-level ambient scope).
    pub is_declaration: bool,
    pub comment: String,
    pub namespaces: Vec<Namespace>,
    /// Interfaces and aliases, in insertion order.
    pub types: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Interface(Interface),
    Typedef(Typedef),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interface {
    pub name: String,
    pub comment: String,
    pub properties: Vec<Property>,
    pub callable: Callable,
}

/// How an interface can be invoked. Only one representation per interface.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Callable {
    #[default]
    None,
    Methods(Vec<Method>),
    Signature(CallSignature),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Typedef {
    pub name: String,
    pub underlying: String,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Property {
    pub name: String,
    /// Type reference as text, possibly with `[]` markers.
    pub ty: String,
    pub is_optional: bool,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Method {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: String,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallSignature {
    pub parameters: Vec<Parameter>,
    pub return_type: String,
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
    pub is_optional: bool,
    pub comment: String,
}

/// Borrowed view over every node kind, for exhaustive dispatch.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Namespace(&'a Namespace),
    Interface(&'a Interface),
    Typedef(&'a Typedef),
    Property(&'a Property),
    Method(&'a Method),
    CallSignature(&'a CallSignature),
}

// ————————————————————————————————————————————————————————————————————————————
// CONSTRUCTORS
// ————————————————————————————————————————————————————————————————————————————

impl Namespace {
    pub fn new(name: impl Into<String>, is_declaration: bool, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_declaration,
            comment: comment.into(),
            ..Self::default()
        }
    }

    /// Looks up a declared type by name in this scope only.
    pub fn find_type(&self, name: &str) -> Option<&Declaration> {
        self.types.iter().find(|decl| decl.name() == name)
    }

    pub fn find_namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Interface(x) => &x.name,
            Self::Typedef(x) => &x.name,
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        match self {
            Self::Interface(x) => Node::Interface(x),
            Self::Typedef(x) => Node::Typedef(x),
        }
    }
}

impl From<Interface> for Declaration {
    fn from(value: Interface) -> Self {
        Self::Interface(value)
    }
}

impl From<Typedef> for Declaration {
    fn from(value: Typedef) -> Self {
        Self::Typedef(value)
    }
}

impl Interface {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self { name: name.into(), comment: comment.into(), ..Self::default() }
    }

    pub fn methods(&self) -> &[Method] {
        match &self.callable {
            Callable::Methods(methods) => methods,
            Callable::None | Callable::Signature(_) => &[],
        }
    }

    pub fn call_signature(&self) -> Option<&CallSignature> {
        match &self.callable {
            Callable::Signature(signature) => Some(signature),
            Callable::None | Callable::Methods(_) => None,
        }
    }
}

impl Typedef {
    pub fn new(name: impl Into<String>, underlying: impl Into<String>, comment: impl Into<String>) -> Self {
        Self { name: name.into(), underlying: underlying.into(), comment: comment.into() }
    }
}

impl Property {
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        is_optional: bool,
        comment: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), ty: ty.into(), is_optional, comment: comment.into() }
    }
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        is_optional: bool,
        comment: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), ty: ty.into(), is_optional, comment: comment.into() }
    }
}

impl CallSignature {
    pub fn new(return_type: impl Into<String>, comment: impl Into<String>) -> Self {
        Self { return_type: return_type.into(), comment: comment.into(), parameters: Vec::new() }
    }
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            comment: comment.into(),
            parameters: Vec::new(),
        }
    }
}

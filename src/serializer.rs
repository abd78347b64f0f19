//! Declaration tree → indented text lines.
//!
//! Output layout is fixed and order-sensitive:
//! - block constructs (namespaces, interfaces) take a leading `// comment`
//! - property, alias and method lines always end with `// comment`
//! - call signatures get a trailing comment only when they have one
//! - a blank line precedes every nested namespace and every declared type
//! - call signatures with two or more parameters put one parameter per line

use std::io::Write;

use crate::ast::{CallSignature, Callable, Interface, Method, Namespace, Node, Parameter, Property, Typedef};
use crate::error::Result;

pub const DEFAULT_TAB: &str = "    ";

/// Immutable indentation cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializationContext {
    tab_level: usize,
    tab: String,
}

impl Default for SerializationContext {
    fn default() -> Self {
        Self { tab_level: 0, tab: DEFAULT_TAB.to_string() }
    }
}

impl SerializationContext {
    pub fn new(tab_level: usize, tab: impl Into<String>) -> Self {
        Self { tab_level, tab: tab.into() }
    }

    /// Indentation unit made of `width` spaces.
    pub fn with_tab_width(width: usize) -> Self {
        Self::new(0, " ".repeat(width))
    }

    pub fn tab_level(&self) -> usize {
        self.tab_level
    }

    pub fn tab(&self) -> &str {
        &self.tab
    }

    pub fn indented(&self) -> Self {
        self.indented_by(1)
    }

    pub fn indented_by(&self, levels: usize) -> Self {
        Self { tab_level: self.tab_level + levels, tab: self.tab.clone() }
    }

    fn indentation(&self) -> String {
        self.tab.repeat(self.tab_level)
    }
}

pub struct AstSerializer<W: Write> {
    output: W,
}

impl<W: Write> AstSerializer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    pub fn write_node(&mut self, node: Node<'_>, context: &SerializationContext) -> Result<()> {
        match node {
            Node::Namespace(x) => self.write_namespace(x, context),
            Node::Interface(x) => self.write_interface(x, context),
            Node::Typedef(x) => self.write_typedef(x, context),
            Node::Property(x) => self.write_property(x, context),
            Node::Method(x) => self.write_method(x, context),
            Node::CallSignature(x) => self.write_call_signature(x, context),
        }
    }

    pub fn write_namespace(&mut self, namespace: &Namespace, context: &SerializationContext) -> Result<()> {
        if !namespace.comment.is_empty() {
            self.write_comment_line(&namespace.comment, context)?;
        }
        let declare = if namespace.is_declaration { "declare " } else { "" };
        self.write_line(&format!("{declare}namespace {} {{", namespace.name), context)?;

        let inner = context.indented();
        for child in &namespace.namespaces {
            self.write_line("", &inner)?;
            self.write_namespace(child, &inner)?;
        }
        for declaration in &namespace.types {
            self.write_line("", &inner)?;
            self.write_node(declaration.as_node(), &inner)?;
        }

        self.write_line("}", context)
    }

    pub fn write_typedef(&mut self, typedef: &Typedef, context: &SerializationContext) -> Result<()> {
        self.write_line(
            &format!("type {} = {}; // {}", typedef.name, typedef.underlying, typedef.comment),
            context,
        )
    }

    pub fn write_interface(&mut self, interface: &Interface, context: &SerializationContext) -> Result<()> {
        if !interface.comment.is_empty() {
            self.write_comment_line(&interface.comment, context)?;
        }
        self.write_line(&format!("interface {} {{", interface.name), context)?;

        let inner = context.indented();
        for property in &interface.properties {
            self.write_property(property, &inner)?;
        }
        match &interface.callable {
            Callable::None => {}
            Callable::Methods(methods) => {
                for method in methods {
                    self.write_method(method, &inner)?;
                }
            }
            Callable::Signature(signature) => self.write_call_signature(signature, &inner)?,
        }

        self.write_line("}", context)
    }

    pub fn write_property(&mut self, property: &Property, context: &SerializationContext) -> Result<()> {
        let optional = if property.is_optional { "?" } else { "" };
        self.write_line(
            &format!("{}{optional}: {}; // {}", property.name, property.ty, property.comment),
            context,
        )
    }

    pub fn write_method(&mut self, method: &Method, context: &SerializationContext) -> Result<()> {
        let params = method.parameters.iter().map(param_string).collect::<Vec<_>>().join(", ");
        self.write_line(
            &format!("{}({params}): {}; // {}", method.name, method.return_type, method.comment),
            context,
        )
    }

    pub fn write_call_signature(&mut self, signature: &CallSignature, context: &SerializationContext) -> Result<()> {
        let closing = format!("{};{}", signature.return_type, trailing_comment(&signature.comment));
        match signature.parameters.as_slice() {
            [] => self.write_line(&format!("(): {closing}"), context),
            [only] => self.write_line(&format!("({}): {closing}", param_string(only)), context),
            [first, rest @ ..] => {
                self.write_line(&format!("({},", param_string(first)), context)?;
                let last = rest.len() - 1;
                for (i, param) in rest.iter().enumerate() {
                    let separator = if i == last { "" } else { "," };
                    self.write_line(&format!(" {}{separator}", param_string(param)), context)?;
                }
                self.write_line(&format!("): {closing}"), context)
            }
        }
    }

    pub fn write_comment_line(&mut self, comment: &str, context: &SerializationContext) -> Result<()> {
        self.write_line(&format!("// {comment}"), context)
    }

    /// Writes `value` at the context's indentation, even when `value` is empty.
    pub fn write_line(&mut self, value: &str, context: &SerializationContext) -> Result<()> {
        writeln!(self.output, "{}{value}", context.indentation())?;
        Ok(())
    }
}

/// Serializes a namespace tree into an owned string.
pub fn render_to_string(namespace: &Namespace, context: &SerializationContext) -> Result<String> {
    let mut serializer = AstSerializer::new(Vec::new());
    serializer.write_namespace(namespace, context)?;
    let bytes = serializer.into_inner();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn param_string(param: &Parameter) -> String {
    let optional = if param.is_optional { "?" } else { "" };
    if param.comment.is_empty() {
        format!("{}{optional}: {}", param.name, param.ty)
    } else {
        format!("{}{optional}: {} /* {} */", param.name, param.ty, param.comment)
    }
}

fn trailing_comment(comment: &str) -> String {
    if comment.is_empty() { String::new() } else { format!(" // {comment}") }
}

// ------------------------------- Tests ------------------------------------ //

//! Protocol description → ambient declaration text.
//!
//! `schema` (input) → [`generator`] → `ast` → [`serializer`] → text.
//! Loading files, argument parsing and choosing an output sink live in the
//! binary; the library only transforms already-parsed domains.

pub mod ast;
pub mod error;
pub mod generator;
pub mod load;
pub mod schema;
pub mod serializer;
pub mod validate;

pub use error::{Error, Issue, Result};
pub use generator::{Generator, GeneratorConfig, Style};
pub use serializer::{AstSerializer, SerializationContext, render_to_string};

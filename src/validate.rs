//! Optional strict pass over a generated tree.
//!
//! The generator is best-effort; this reports the two ways its output can be
//! wrong: two declarations sharing a name in one scope, and type references
//! that resolve to nothing.

use indexmap::IndexMap;

use crate::ast::{Declaration, Namespace};
use crate::error::Issue;
use crate::generator::ARRAY_MARKER;

/// Names that always resolve.
pub const BUILTIN_TYPES: &[&str] = &["number", "string", "boolean", "any", "void"];

pub fn validate(root: &Namespace) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut scopes = Vec::new();
    visit(root, &mut scopes, &mut issues);
    issues
}

fn visit<'a>(namespace: &'a Namespace, scopes: &mut Vec<&'a Namespace>, issues: &mut Vec<Issue>) {
    scopes.push(namespace);
    let scope = scopes.iter().map(|ns| ns.name.as_str()).collect::<Vec<_>>().join(".");

    let namespace_names = namespace.namespaces.iter().map(|ns| ns.name.as_str());
    report_duplicates(namespace_names, &scope, issues);
    report_duplicates(namespace.types.iter().map(Declaration::name), &scope, issues);

    for declaration in &namespace.types {
        for reference in references(declaration) {
            if !resolves(reference, scopes) {
                issues.push(Issue::DanglingReference { scope: scope.clone(), name: reference.to_string() });
            }
        }
    }

    for child in &namespace.namespaces {
        visit(child, scopes, issues);
    }
    scopes.pop();
}

fn report_duplicates<'a>(names: impl Iterator<Item = &'a str>, scope: &str, issues: &mut Vec<Issue>) {
    let mut counts = IndexMap::<&str, usize>::new();
    for name in names {
        *counts.entry(name).or_default() += 1;
    }
    for (name, count) in counts {
        if count > 1 {
            issues.push(Issue::NameCollision { scope: scope.to_string(), name: name.to_string() });
        }
    }
}

/// Every type reference a declaration makes, in source order.
fn references(declaration: &Declaration) -> Vec<&str> {
    match declaration {
        Declaration::Typedef(typedef) => vec![typedef.underlying.as_str()],
        Declaration::Interface(interface) => {
            let mut out: Vec<&str> = interface.properties.iter().map(|p| p.ty.as_str()).collect();
            for method in interface.methods() {
                out.extend(method.parameters.iter().map(|p| p.ty.as_str()));
                out.push(&method.return_type);
            }
            if let Some(signature) = interface.call_signature() {
                out.extend(signature.parameters.iter().map(|p| p.ty.as_str()));
                out.push(&signature.return_type);
            }
            out
        }
    }
}

/// Unqualified names search every enclosing scope, innermost first. Dotted
/// names descend from the innermost scope that declares their head.
fn resolves(reference: &str, scopes: &[&Namespace]) -> bool {
    let base = reference.trim_end_matches(ARRAY_MARKER);
    if BUILTIN_TYPES.contains(&base) {
        return true;
    }
    let segments: Vec<&str> = base.split('.').collect();
    match segments.as_slice() {
        [name] => scopes.iter().rev().any(|ns| ns.find_type(name).is_some()),
        [head, rest @ ..] => scopes
            .iter()
            .rev()
            .find_map(|ns| ns.find_namespace(head))
            .is_some_and(|ns| lookup(ns, rest)),
        [] => false,
    }
}

fn lookup(namespace: &Namespace, segments: &[&str]) -> bool {
    match segments {
        [name] => namespace.find_type(name).is_some(),
        [head, rest @ ..] => namespace.find_namespace(head).is_some_and(|ns| lookup(ns, rest)),
        [] => false,
    }
}

//! Synthesized identifiers for types that have no name in the schema.
//!
//! Every name is derived from the owning command/event name plus a fixed
//! suffix, so distinct lower-camel names never collide within a domain.

/// Uppercases the first character and keeps the rest verbatim.
///
/// Input is assumed to be an identifier-safe name; an empty name stays empty.
pub fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// `getDocument` + `Result` → `GetDocumentResult`.
pub fn result_type_name(command: &str, suffix: &str) -> String {
    format!("{}{suffix}", pascal_case(command))
}

pub fn params_type_name(command: &str) -> String {
    format!("{}Params", pascal_case(command))
}

pub fn event_args_type_name(event: &str) -> String {
    format!("{}EventArgs", pascal_case(event))
}

/// `nodeInserted` → `onNodeInserted`.
pub fn event_handler_name(event: &str) -> String {
    format!("on{}", pascal_case(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::btree_set;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn pascal_case_rules() {
        assert_eq!(pascal_case("getDocument"), "GetDocument");
        assert_eq!(pascal_case("Already"), "Already");
        assert_eq!(pascal_case("x"), "X");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn synthesized_names() {
        assert_eq!(result_type_name("getDocument", "Result"), "GetDocumentResult");
        assert_eq!(result_type_name("getDocument", "Response"), "GetDocumentResponse");
        assert_eq!(params_type_name("setAttribute"), "SetAttributeParams");
        assert_eq!(event_args_type_name("nodeInserted"), "NodeInsertedEventArgs");
        assert_eq!(event_handler_name("nodeInserted"), "onNodeInserted");
    }

    proptest! {
        #[test]
        fn distinct_commands_never_share_synthesized_names(
            names in btree_set("[a-z][a-zA-Z0-9]{0,12}", 1..24)
        ) {
            let mut seen = HashSet::new();
            for name in &names {
                prop_assert!(seen.insert(result_type_name(name, "Result")));
                prop_assert!(seen.insert(params_type_name(name)));
                prop_assert!(seen.insert(event_args_type_name(name)));
            }
        }
    }
}

//! Keyword policy: the reserved-word table and the renaming rule.
//!
//! A display name collides when it is a Scala keyword, the type-cased form
//! of a keyword, or a method every value inherits from `java.lang.Object` /
//! `scala.Any`. The sole escape is a single `_` prefix; no suffixing, no
//! synonyms. Protection must always be derived from the cased original
//! name: protecting an already-protected name would stack prefixes.
//!
//! The table is pure read-only data for the whole process, matched
//! case-sensitively.

/// Every token the emitter must never print as a bare identifier.
///
/// Three groups, all case-sensitive:
/// - Scala hard keywords (2.x and 3.x).
/// - The type-cased form of each keyword. Declaration names are type-cased
///   before the check, so `class` arrives here as `Class`; a generated
///   `Class` or `Object` would also shadow the `java.lang` type of the same
///   name in every unit the emitter produces.
/// - Methods inherited from `java.lang.Object` and `scala.Any`, which
///   silently shadow user-defined members of the same name.
pub static RESERVED_WORDS: &[&str] = &[
    // Scala keywords
    "abstract",
    "case",
    "catch",
    "class",
    "def",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "final",
    "finally",
    "for",
    "forSome",
    "given",
    "if",
    "implicit",
    "import",
    "lazy",
    "macro",
    "match",
    "new",
    "null",
    "object",
    "override",
    "package",
    "private",
    "protected",
    "return",
    "sealed",
    "super",
    "then",
    "this",
    "throw",
    "trait",
    "true",
    "try",
    "type",
    "val",
    "var",
    "while",
    "with",
    "yield",
    // Type-cased keyword forms
    "Abstract",
    "Case",
    "Catch",
    "Class",
    "Def",
    "Do",
    "Else",
    "Enum",
    "Export",
    "Extends",
    "False",
    "Final",
    "Finally",
    "For",
    "ForSome",
    "Given",
    "If",
    "Implicit",
    "Import",
    "Lazy",
    "Macro",
    "Match",
    "New",
    "Null",
    "Object",
    "Override",
    "Package",
    "Private",
    "Protected",
    "Return",
    "Sealed",
    "Super",
    "Then",
    "This",
    "Throw",
    "Trait",
    "True",
    "Try",
    "Type",
    "Val",
    "Var",
    "While",
    "With",
    "Yield",
    // java.lang.Object / scala.Any methods
    "asInstanceOf",
    "clone",
    "eq",
    "equals",
    "finalize",
    "getClass",
    "hashCode",
    "isInstanceOf",
    "ne",
    "notify",
    "notifyAll",
    "synchronized",
    "toString",
    "wait",
];

/// Check whether a name is in the reserved-word table.
#[inline]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Protect a name against the reserved-word table.
///
/// Returns the name unchanged, or prefixed with a single `_` when reserved.
pub fn protect(name: &str) -> String {
    if is_reserved(name) {
        tracing::trace!(name, "protected reserved identifier");
        format!("_{name}")
    } else {
        name.to_owned()
    }
}

/// Force the first character to uppercase (type casing).
///
/// The rest of the name is left as-is; names whose first character has no
/// uppercase form (digits, underscores) come back unchanged.
pub fn type_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Force the first character to lowercase (member casing).
pub fn member_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Type-case then protect: the rule for all type-level names.
#[inline]
pub fn protect_type(name: &str) -> String {
    protect(&type_case(name))
}

/// Member-case then protect: the rule for field- and case-level names.
#[inline]
pub fn protect_member(name: &str) -> String {
    protect(&member_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_protected() {
        assert_eq!(protect("match"), "_match");
        assert_eq!(protect("type"), "_type");
        assert_eq!(protect("yield"), "_yield");
    }

    #[test]
    fn type_cased_keyword_forms_are_protected() {
        assert_eq!(protect("Class"), "_Class");
        assert_eq!(protect("Trait"), "_Trait");
        assert_eq!(protect("ForSome"), "_ForSome");
    }

    #[test]
    fn object_methods_are_protected() {
        assert_eq!(protect("toString"), "_toString");
        assert_eq!(protect("hashCode"), "_hashCode");
        assert_eq!(protect("wait"), "_wait");
    }

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(protect("Forecast"), "Forecast");
        // Not a keyword, only ubiquitous; stays untouched.
        assert_eq!(protect("Option"), "Option");
        // Already-protected names are not reserved, so a second application
        // from the protected form would be identity.
        assert_eq!(protect("_match"), "_match");
    }

    #[test]
    fn type_case_upcases_first_char_only() {
        assert_eq!(type_case("class"), "Class");
        assert_eq!(type_case("getForecast"), "GetForecast");
        assert_eq!(type_case("Already"), "Already");
        assert_eq!(type_case("_leading"), "_leading");
        assert_eq!(type_case(""), "");
    }

    #[test]
    fn member_case_downcases_first_char_only() {
        assert_eq!(member_case("Type"), "type");
        assert_eq!(member_case("GetForecast"), "getForecast");
        assert_eq!(member_case("already"), "already");
        assert_eq!(member_case(""), "");
    }

    #[test]
    fn combined_rules() {
        assert_eq!(protect_type("class"), "_Class");
        assert_eq!(protect_member("Type"), "_type");
        assert_eq!(protect_member("toString"), "_toString");
        assert_eq!(protect_type("weather"), "Weather");
    }

    #[test]
    fn table_has_no_duplicates() {
        let unique: std::collections::HashSet<&str> = RESERVED_WORDS.iter().copied().collect();
        assert_eq!(unique.len(), RESERVED_WORDS.len());
    }

    #[test]
    fn every_keyword_is_reserved_in_both_casings() {
        // The table carries the type-cased form of each lowercase keyword.
        for word in RESERVED_WORDS {
            if word.chars().next().is_some_and(char::is_lowercase) && !is_object_method(word) {
                let cased = type_case(word);
                assert!(is_reserved(&cased), "missing type-cased form of {word}");
            }
        }
    }

    fn is_object_method(word: &str) -> bool {
        matches!(
            word,
            "asInstanceOf"
                | "clone"
                | "eq"
                | "equals"
                | "finalize"
                | "getClass"
                | "hashCode"
                | "isInstanceOf"
                | "ne"
                | "notify"
                | "notifyAll"
                | "synchronized"
                | "toString"
                | "wait"
        )
    }

    mod properties {
        #![allow(clippy::ignored_unit_patterns, reason = "proptest macro expansion")]

        use super::super::{is_reserved, protect};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn protect_returns_original_or_prefixed(name in "[A-Za-z_][A-Za-z0-9_]{0,24}") {
                let out = protect(&name);
                let prefixed = format!("_{name}");
                prop_assert!(out == name || out == prefixed);
            }

            #[test]
            fn protect_changes_exactly_the_reserved(name in "[A-Za-z_][A-Za-z0-9_]{0,24}") {
                prop_assert_eq!(protect(&name) == name, !is_reserved(&name));
            }

            #[test]
            fn protect_is_a_pure_function(name in ".{0,40}") {
                prop_assert_eq!(protect(&name), protect(&name));
            }
        }
    }
}

//! Patterns for the `export extern` script format.
//!
//! The regex engine keeps only the last capture of a repeated group, so a
//! block's suggestion definitions are captured as one run (`definitions`) and
//! re-scanned with [`SUGGESTION_DEFINITION`]; the same applies to the quoted
//! entries of a value list and [`SUGGESTION_VALUE`].
//!
//! The compiled patterns are immutable and shared read-only.

use regex::Regex;
use std::sync::LazyLock;

/// A bracketed list of one or more double-quoted strings: `["red" "green"]`.
///
/// Matched against the whole candidate text (anchored at both ends).
pub static SUGGESTION_VALUES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)
        \A
        \[\s*
        "[^"]+"
        (?:\s*"[^"]+")*
        \s*\]
        \z
        "#,
    )
    .unwrap()
});

/// One quoted entry of a value list, quotes excluded from `value`.
pub static SUGGESTION_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?P<value>[^"]+)""#).unwrap());

/// A single `def "<id>" [] { <values> }` sub-block.
pub static SUGGESTION_DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?mx)
        ^\x20{2}def\x20"(?P<id>[^"]+)"\x20\[\]\x20\{
        \s*(?P<values>[\s\S]+?)\s*
        \}\n\n
        "#,
    )
    .unwrap()
});

/// One option/argument line of a command body.
///
/// The name alternation is ordered: a token made only of letters, digits,
/// hyphens and underscores is a flag, and the positional branch (with its
/// `...` and `?` markers) is only reached when the flag branch cannot match
/// the whole line.
pub static OPTION_OR_ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)
        \A\x20{4}
        (?:
            (?P<flag>[-_a-zA-Z0-9]+)
        |
            (?P<variadic>\.{3})?
            (?P<positional>[_a-zA-Z0-9]+)
            (?P<optional>\?)?
        )
        (?:\((?P<alias>[^()\n]+)\))?
        (?:
            :[^\S\r\n]*
            (?P<type>[a-zA-Z]+)
            (?:@"(?P<suggestion_id>[^"\n]+)")?
        )?
        (?:[^\S\r\n]+\#[^\S\r\n]*(?P<description>.+?))?
        [^\S\r\n]*
        \z
        "#,
    )
    .unwrap()
});

/// A complete command block: suggestion definitions, optional description,
/// the `export extern` declaration, its body and the closing bracket.
pub static COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?mx)
        (?P<definitions>
            (?:
                ^\x20{2}def\x20"[^"]+"\x20\[\]\x20\{
                \s*[\s\S]+?\s*
                \}\n\n
            )*
        )
        (?:^\x20{2}\#\x20(?P<description>.+)\n)?
        ^\x20{2}export\x20extern\x20
        (?:(?P<name>[-_a-zA-Z0-9]+)|"(?P<quoted_name>[^"]+)")
        \x20\[\n
        (?P<body>(?:.+\n)*?)
        \x20{2}\]$
        "#,
    )
    .unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_values_accepts_quoted_list() {
        assert!(SUGGESTION_VALUES.is_match(r#"["red" "green" "blue"]"#));
        assert!(SUGGESTION_VALUES.is_match("[\n    \"always\"\n    \"never\"\n  ]"));
        assert!(SUGGESTION_VALUES.is_match(r#"[ "one" ]"#));
    }

    #[test]
    fn test_suggestion_values_rejects_malformed() {
        assert!(!SUGGESTION_VALUES.is_match("[]"));
        assert!(!SUGGESTION_VALUES.is_match(r#"["red" green]"#));
        assert!(!SUGGESTION_VALUES.is_match(r#"["red" "green""#));
        assert!(!SUGGESTION_VALUES.is_match(r#"x ["red"]"#));
    }

    #[test]
    fn test_option_flag_branch_wins() {
        let caps = OPTION_OR_ARGUMENT.captures("    --bar: string # help").unwrap();

        assert_eq!(&caps["flag"], "--bar");
        assert!(caps.name("positional").is_none());
        assert_eq!(&caps["type"], "string");
        assert_eq!(&caps["description"], "help");
    }

    #[test]
    fn test_option_positional_markers() {
        let caps = OPTION_OR_ARGUMENT.captures("    ...paths: string").unwrap();
        assert_eq!(&caps["positional"], "paths");
        assert!(caps.name("variadic").is_some());

        let caps = OPTION_OR_ARGUMENT.captures("    target?").unwrap();
        assert_eq!(&caps["positional"], "target");
        assert!(caps.name("optional").is_some());
    }

    #[test]
    fn test_option_requires_four_spaces() {
        assert!(!OPTION_OR_ARGUMENT.is_match("  --bar"));
        assert!(!OPTION_OR_ARGUMENT.is_match("\t--bar"));
    }

    #[test]
    fn test_command_captures_quoted_name() {
        let script = "  export extern \"git commit\" [\n    --all(-a)\n  ]\n";
        let caps = COMMAND.captures(script).unwrap();

        assert_eq!(&caps["quoted_name"], "git commit");
        assert_eq!(&caps["body"], "    --all(-a)\n");
        assert_eq!(&caps["definitions"], "");
    }

    #[test]
    fn test_command_captures_definitions_run() {
        let script = concat!(
            "  def \"a\" [] {\n    [\"x\"]\n  }\n\n",
            "  def \"b\" [] {\n    [\"y\"]\n  }\n\n",
            "  export extern foo [\n  ]\n",
        );
        let caps = COMMAND.captures(script).unwrap();
        let definitions = &caps["definitions"];

        assert_eq!(SUGGESTION_DEFINITION.captures_iter(definitions).count(), 2);
        assert_eq!(&caps["name"], "foo");
    }
}

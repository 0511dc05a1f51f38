//! Property tests over arbitrary input

use proptest::prelude::*;
use swiftlet::frontend::lexer::TokenKind;
use swiftlet::Frontend;

/// Mostly language characters, with some noise mixed in
fn source_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            8 => prop::sample::select(vec![
                "let", "var", "x", "y1", "Int32", "Double", ":", ";", "+", "-", "*", "/", "%",
                "<", "<=", ">", ">=", "!=", "(", ")", "42", ".5", "\"s\"", " ", "\t", "\n", "# c\n",
            ])
            .prop_map(str::to_string),
            1 => any::<char>().prop_map(|c| c.to_string()),
        ],
        0..64,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_lexing_ends_with_single_eof(source in source_text()) {
        let output = Frontend::default().tokenize_str("p.swift", &source);
        let eofs = output.tokens.iter().filter(|t| t.is(TokenKind::EndOfFile)).count();
        prop_assert_eq!(eofs, 1);
        prop_assert!(output.tokens.last().unwrap().is(TokenKind::EndOfFile));
    }

    #[test]
    fn prop_token_locations_increase(source in source_text()) {
        let output = Frontend::default().tokenize_str("p.swift", &source);
        for pair in output.tokens.windows(2) {
            prop_assert!(pair[0].location() < pair[1].location());
        }
    }

    #[test]
    fn prop_every_location_expands(source in source_text()) {
        let output = Frontend::default().tokenize_str("p.swift", &source);
        for token in &output.tokens {
            prop_assert!(output.line_table.expand(token.location()).is_some());
        }
        for diag in &output.diagnostics {
            prop_assert!(output.line_table.expand(diag.location.unwrap()).is_some());
        }
    }

    #[test]
    fn prop_parse_failure_always_explained(source in source_text()) {
        let output = Frontend::default().parse_str("p.swift", &source);
        if output.program.is_none() {
            prop_assert!(output.diagnostics.iter().any(|d| d.is_error()));
        }
    }
}

use super::{kinds, lex, positions};
use crate::frontend::lexer::TokenKind;

#[cfg(test)]
mod lexer_comment_tests {
    use super::*;

    #[test]
    fn test_comment_to_end_of_line() {
        assert_eq!(
            kinds("a # b c ; !@\nd"),
            vec![TokenKind::Identifier, TokenKind::Identifier, TokenKind::EndOfFile]
        );
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let (tokens, diags) = lex("x # trailing");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is(TokenKind::EndOfFile));
        assert!(!diags.has_errors());
    }

    #[test]
    fn test_comment_only() {
        assert_eq!(kinds("# nothing here"), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn test_trivia_only_eof_after_last_character() {
        assert_eq!(positions("  # note"), vec![(TokenKind::EndOfFile, 1, 9)]);
        assert_eq!(positions("# a\n\t"), vec![(TokenKind::EndOfFile, 2, 9)]);
    }

    #[test]
    fn test_line_after_comment() {
        let pos = positions("# header\n  x");
        assert_eq!(pos[0], (TokenKind::Identifier, 2, 3));
    }
}

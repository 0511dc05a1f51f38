//! Token definitions
//!
//! Every token kind, its human-readable description and (for keywords) its
//! spelling are declared once in `define_tokens!`, which keeps the enum, the
//! description table and the keyword table in lockstep.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::util::location::Location;

macro_rules! define_tokens {
    (
        tokens { $( $tok:ident => $desc:literal, )* }
        keywords { $( $kw:ident => $spelling:literal, )* }
        markers { $( $marker:ident => $marker_desc:literal, )* }
    ) => {
        /// Token kind
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum TokenKind {
            $( $tok, )*
            $( $kw, )*
            $( $marker, )*
        }

        impl TokenKind {
            /// Every kind, in declaration order
            pub const ALL: &'static [TokenKind] = &[
                $( TokenKind::$tok, )*
                $( TokenKind::$kw, )*
                $( TokenKind::$marker, )*
            ];

            /// Human-readable description used in diagnostics
            pub fn description(self) -> &'static str {
                match self {
                    $( TokenKind::$tok => $desc, )*
                    $( TokenKind::$kw => $spelling, )*
                    $( TokenKind::$marker => $marker_desc, )*
                }
            }

            /// Variant name, as printed by token dumps
            pub fn name(self) -> &'static str {
                match self {
                    $( TokenKind::$tok => stringify!($tok), )*
                    $( TokenKind::$kw => stringify!($kw), )*
                    $( TokenKind::$marker => stringify!($marker), )*
                }
            }

            pub fn is_keyword(self) -> bool {
                matches!(self, $( TokenKind::$kw )|*)
            }
        }

        /// Reserved words and the kinds they lex to
        pub static KEYWORDS: &[(&str, TokenKind)] = &[
            $( ($spelling, TokenKind::$kw), )*
        ];
    };
}

define_tokens! {
    tokens {
        FirstMarker => "<first marker>",
        EndOfFile => "end of file",

        Asterisk => "*",
        Eq => "=",
        Neq => "!=",
        LeftParen => "(",
        RightParen => ")",
        LeftCurly => "{",
        RightCurly => "}",
        Minus => "-",
        Plus => "+",
        Colon => ":",
        Semicolon => ";",
        Slash => "/",
        Percent => "%",
        Gt => ">",
        Lt => "<",
        Geq => ">=",
        Leq => "<=",

        Identifier => "identifier",
        IntegerLiteral => "integer literal",
        FloatLiteral => "floating point literal",
        StringLiteral => "string literal",
    }
    keywords {
        KwLet => "let",
        KwVar => "var",
        KwIf => "if",
        KwElse => "else",
        KwFor => "for",
        KwIn => "in",
        KwWhile => "while",
        KwInt32 => "Int32",
        KwInt64 => "Int64",
        KwUint32 => "Uint32",
        KwUint64 => "Uint64",
        KwFloat => "Float",
        KwDouble => "Double",
        KwFalse => "false",
        KwTrue => "true",
    }
    markers {
        LastMarker => "<last marker>",
    }
}

static KEYWORD_TABLE: Lazy<HashMap<&'static str, TokenKind>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

/// Keyword kind for `text`, if it is a reserved word (case-sensitive)
pub fn keyword_from_str(text: &str) -> Option<TokenKind> {
    KEYWORD_TABLE.get(text).copied()
}

impl TokenKind {
    /// Kinds whose description is a phrase rather than source text
    fn is_descriptive(self) -> bool {
        matches!(
            self,
            TokenKind::EndOfFile
                | TokenKind::Identifier
                | TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::FirstMarker
                | TokenKind::LastMarker
        )
    }
}

/// Renders source-text kinds quoted (`` `;` ``) and phrases bare
/// (`end of file`)
impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.is_descriptive() {
            f.write_str(self.description())
        } else {
            write!(f, "`{}`", self.description())
        }
    }
}

/// A lexed token. Immutable once built.
///
/// Identifiers and literals carry their source text (string literals without
/// the quotes); every other kind has empty text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    kind: TokenKind,
    location: Location,
    text: String,
}

/// Tokens are shared between the lookahead buffer and whoever peeked them
pub type TokenPtr = Rc<Token>;

impl Token {
    pub fn new(
        kind: TokenKind,
        location: Location,
    ) -> Self {
        Self {
            kind,
            location,
            text: String::new(),
        }
    }

    pub fn with_text(
        kind: TokenKind,
        location: Location,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            location,
            text: text.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

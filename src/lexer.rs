// SPDX-License-Identifier: Unlicense
/// A token is the raw text of one space-delimited piece. Whether it is a
/// number or an operator is decided by the parser.
pub type Token<'a> = &'a str;

peg::parser! {
    grammar pieces() for str {
        rule space() = " "

        rule piece() -> &'input str = $((!space() [_])+)

        pub rule split() -> Vec<&'input str> = space()* p:(piece() ** (space()+)) space()* { p }
    }
}

/// Splits `input` on ASCII spaces, trims each piece and drops empty ones.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    // the grammar matches every input
    pieces::split(input)
        .unwrap_or_default()
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

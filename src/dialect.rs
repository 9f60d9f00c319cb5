// SPDX-License-Identifier: Unlicense
use std::{fmt, str::FromStr};

use anyhow::anyhow;

/// Operator spelling accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `sum`, `sub`, `div`, `mul`
    #[default]
    Word,
    /// `+`, `-`, `/`, `*`
    Symbolic,
    /// Either spelling, decided per token.
    Mixed,
}

impl Dialect {
    pub fn accepts_word(self) -> bool {
        matches!(self, Dialect::Word | Dialect::Mixed)
    }

    pub fn accepts_symbol(self) -> bool {
        matches!(self, Dialect::Symbolic | Dialect::Mixed)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dialect::Word => "word",
            Dialect::Symbolic => "symbolic",
            Dialect::Mixed => "mixed",
        };
        f.write_str(name)
    }
}

impl FromStr for Dialect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" => Ok(Dialect::Word),
            "symbolic" => Ok(Dialect::Symbolic),
            "mixed" => Ok(Dialect::Mixed),
            other => Err(anyhow!("unknown dialect: {}", other)),
        }
    }
}

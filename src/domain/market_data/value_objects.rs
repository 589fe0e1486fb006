use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, IntoStaticStr};

/// Ticker symbol as returned by the symbol search, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(symbol))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One-click shortcuts offered under the lookup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, IntoStaticStr)]
pub enum ExampleCompany {
    #[strum(serialize = "Apple Inc.")]
    Apple,
    #[strum(serialize = "Microsoft Corporation")]
    Microsoft,
    #[strum(serialize = "Amazon.com Inc.")]
    Amazon,
    #[strum(serialize = "Alphabet Inc.")]
    Alphabet,
    #[strum(serialize = "Facebook Inc.")]
    Facebook,
}

impl ExampleCompany {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Parse a decimal field from the upstream; anything unparseable becomes NaN.
pub fn parse_decimal(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Operator {
    Airtel,
    Jio,
    Vi,
    #[serde(rename = "BSNL")]
    Bsnl,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Airtel,
        Operator::Jio,
        Operator::Vi,
        Operator::Bsnl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Airtel => "Airtel",
            Operator::Jio => "Jio",
            Operator::Vi => "Vi",
            Operator::Bsnl => "BSNL",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Airtel" => Some(Operator::Airtel),
            "Jio" => Some(Operator::Jio),
            "Vi" => Some(Operator::Vi),
            "BSNL" => Some(Operator::Bsnl),
            _ => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlanType {
    Prepaid,
    Postpaid,
    #[serde(rename = "DTH")]
    Dth,
}

impl PlanType {
    pub const ALL: [PlanType; 3] = [PlanType::Prepaid, PlanType::Postpaid, PlanType::Dth];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Prepaid => "Prepaid",
            PlanType::Postpaid => "Postpaid",
            PlanType::Dth => "DTH",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Prepaid" => Some(PlanType::Prepaid),
            "Postpaid" => Some(PlanType::Postpaid),
            "DTH" => Some(PlanType::Dth),
            _ => None,
        }
    }
}

impl Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

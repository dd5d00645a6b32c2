use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    entities::plans::{InsertRechargePlanEntity, RechargePlanEntity},
    value_objects::enums::{operators::Operator, plan_types::PlanType},
};

/// Plan as returned to portal clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanModel {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub operator: String,
    pub plan_type: String,
    pub amount: i32,
    pub validity: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RechargePlanEntity> for PlanModel {
    fn from(value: RechargePlanEntity) -> Self {
        Self {
            id: value.id,
            operator: value.operator,
            plan_type: value.plan_type,
            amount: value.amount,
            validity: value.validity,
            description: value.description,
            benefits: value.benefits,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Equality filters applied on top of the implicit `is_active = true` predicate.
///
/// Values are not checked against the known operators or plan types: an
/// unknown value simply matches nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListPlansFilter {
    pub operator: Option<String>,
    pub plan_type: Option<String>,
    pub search: Option<String>,
}

impl ListPlansFilter {
    /// Trims every value and drops the empty ones.
    pub fn new(
        operator: Option<String>,
        plan_type: Option<String>,
        search: Option<String>,
    ) -> Self {
        Self {
            operator: non_blank(operator),
            plan_type: non_blank(plan_type),
            search: non_blank(search),
        }
    }

    pub fn by_operator(operator: &str) -> Self {
        Self::new(Some(operator.to_string()), None, None)
    }

    /// `LIKE`/`ILIKE` pattern for the search term with wildcards escaped.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|term| {
            let mut pattern = String::with_capacity(term.len() + 2);
            pattern.push('%');
            for ch in term.chars() {
                if matches!(ch, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(ch);
            }
            pattern.push('%');
            pattern
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Outcome of a catalog read. `Unavailable` means the store could not be
/// queried, which is distinct from an empty catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanCatalog {
    Available(Vec<PlanModel>),
    Unavailable,
}

impl PlanCatalog {
    pub fn is_degraded(&self) -> bool {
        matches!(self, PlanCatalog::Unavailable)
    }

    pub fn into_plans(self) -> Vec<PlanModel> {
        match self {
            PlanCatalog::Available(plans) => plans,
            PlanCatalog::Unavailable => Vec::new(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanValidationError {
    #[error("description is required")]
    MissingDescription,
    #[error("validity is required")]
    MissingValidity,
    #[error("amount must not be negative: {0}")]
    NegativeAmount(i32),
}

/// A plan to be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlanModel {
    pub operator: Operator,
    pub plan_type: PlanType,
    pub amount: i32,
    pub validity: String,
    pub description: String,
    pub benefits: Vec<String>,
}

impl NewPlanModel {
    pub fn validate(&self) -> Result<(), PlanValidationError> {
        if self.description.trim().is_empty() {
            return Err(PlanValidationError::MissingDescription);
        }
        if self.validity.trim().is_empty() {
            return Err(PlanValidationError::MissingValidity);
        }
        if self.amount < 0 {
            return Err(PlanValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }

    pub fn to_entity(
        &self,
        now: DateTime<Utc>,
    ) -> Result<InsertRechargePlanEntity, PlanValidationError> {
        self.validate()?;

        Ok(InsertRechargePlanEntity {
            operator: self.operator.to_string(),
            plan_type: self.plan_type.to_string(),
            amount: self.amount,
            validity: self.validity.clone(),
            description: self.description.clone(),
            benefits: self.benefits.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_plan() -> NewPlanModel {
        NewPlanModel {
            operator: Operator::Bsnl,
            plan_type: PlanType::Dth,
            amount: 99,
            validity: "30 days".to_string(),
            description: "Basic pack".to_string(),
            benefits: vec![],
        }
    }

    #[test]
    fn filter_drops_blank_values() {
        let filter = ListPlansFilter::new(
            Some("  ".to_string()),
            Some(" Prepaid ".to_string()),
            Some(String::new()),
        );

        assert_eq!(filter.operator, None);
        assert_eq!(filter.plan_type.as_deref(), Some("Prepaid"));
        assert_eq!(filter.search, None);
    }

    #[test]
    fn filter_keeps_unknown_operator_verbatim() {
        let filter = ListPlansFilter::by_operator("Vodafone");
        assert_eq!(filter.operator.as_deref(), Some("Vodafone"));
    }

    #[test]
    fn search_pattern_escapes_wildcards() {
        let filter = ListPlansFilter::new(None, None, Some("100%_data".to_string()));
        assert_eq!(
            filter.search_pattern().as_deref(),
            Some("%100\\%\\_data%")
        );
        assert_eq!(ListPlansFilter::default().search_pattern(), None);
    }

    #[test]
    fn new_plan_is_active_with_matching_timestamps() {
        let now = Utc::now();
        let entity = sample_new_plan().to_entity(now).unwrap();

        assert!(entity.is_active);
        assert_eq!(entity.operator, "BSNL");
        assert_eq!(entity.plan_type, "DTH");
        assert_eq!(entity.created_at, now);
        assert_eq!(entity.updated_at, now);
        assert!(entity.benefits.is_empty());
    }

    #[test]
    fn new_plan_requires_description_and_validity() {
        let mut plan = sample_new_plan();
        plan.description = " ".to_string();
        assert_eq!(plan.validate(), Err(PlanValidationError::MissingDescription));

        let mut plan = sample_new_plan();
        plan.validity = String::new();
        assert_eq!(
            plan.to_entity(Utc::now()),
            Err(PlanValidationError::MissingValidity)
        );
    }

    #[test]
    fn new_plan_rejects_negative_amount() {
        let mut plan = sample_new_plan();
        plan.amount = -1;
        assert_eq!(plan.validate(), Err(PlanValidationError::NegativeAmount(-1)));
    }

    #[test]
    fn plan_model_serializes_id_as_underscore_id() {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let model = PlanModel::from(RechargePlanEntity {
            id,
            operator: "Jio".to_string(),
            plan_type: "Prepaid".to_string(),
            amount: 149,
            validity: "24 days".to_string(),
            description: "Unlimited calls + 1GB/day".to_string(),
            benefits: vec![],
            is_active: true,
            created_at: now,
            updated_at: now,
        });

        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(json["_id"], id.to_string());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn unavailable_catalog_is_degraded_and_empty() {
        assert!(PlanCatalog::Unavailable.is_degraded());
        assert!(PlanCatalog::Unavailable.into_plans().is_empty());
        assert!(!PlanCatalog::Available(vec![]).is_degraded());
    }
}

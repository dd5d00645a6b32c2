use crate::domain::value_objects::{
    enums::{operators::Operator, plan_types::PlanType},
    plans::NewPlanModel,
};

fn benefits(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Sample catalog written by the reseed operation.
pub fn sample_plans() -> Vec<NewPlanModel> {
    vec![
        NewPlanModel {
            operator: Operator::Jio,
            plan_type: PlanType::Prepaid,
            amount: 149,
            validity: "24 days".to_string(),
            description: "Unlimited calls + 1GB/day".to_string(),
            benefits: benefits(&["Unlimited Voice", "1GB/day Data", "SMS 100/day", "JioApps"]),
        },
        NewPlanModel {
            operator: Operator::Jio,
            plan_type: PlanType::Prepaid,
            amount: 299,
            validity: "28 days".to_string(),
            description: "Unlimited calls + 2GB/day".to_string(),
            benefits: benefits(&["Unlimited Voice", "2GB/day Data", "SMS 100/day", "JioApps"]),
        },
        NewPlanModel {
            operator: Operator::Airtel,
            plan_type: PlanType::Prepaid,
            amount: 179,
            validity: "28 days".to_string(),
            description: "Unlimited calls + 1.5GB/day".to_string(),
            benefits: benefits(&[
                "Unlimited Voice",
                "1.5GB/day Data",
                "SMS 100/day",
                "Airtel Thanks",
            ]),
        },
        NewPlanModel {
            operator: Operator::Vi,
            plan_type: PlanType::Prepaid,
            amount: 199,
            validity: "28 days".to_string(),
            description: "Unlimited calls + 1.5GB/day".to_string(),
            benefits: benefits(&[
                "Unlimited Voice",
                "1.5GB/day Data",
                "SMS 100/day",
                "Vi Movies & TV",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixture_passes_validation() {
        for plan in sample_plans() {
            assert!(plan.validate().is_ok(), "{plan:?}");
        }
    }

    #[test]
    fn fixture_has_no_bsnl_plan() {
        assert!(sample_plans().iter().all(|p| p.operator != Operator::Bsnl));
    }
}

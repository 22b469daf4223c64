use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Billing period attached to a plan, derived client-side from the plan
/// id. Ids the mapping does not know fall back to the quarterly label.
/// TODO: have /get_payment_plans supply the period per plan instead of
/// inferring it from the id here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingPeriod {
    OneTime,
    Monthly,
    Quarterly,
}

impl BillingPeriod {
    pub fn from_plan_id(id: &str) -> BillingPeriod {
        match id {
            "starter" => BillingPeriod::OneTime,
            "monthly" => BillingPeriod::Monthly,
            _ => BillingPeriod::Quarterly,
        }
    }

    /// The suffix rendered after the price.
    pub fn suffix(&self) -> &'static str {
        match self {
            BillingPeriod::OneTime => "/one-time",
            BillingPeriod::Monthly => "/month",
            BillingPeriod::Quarterly => "/3 months",
        }
    }
}

/// One purchasable plan, as served by the catalog endpoint. Held as a
/// transient read-only copy for a single render pass.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Plan {
    pub id: String,
    pub plan_name: String,
    pub badge: String,
    pub amount: u64,
    pub credits: u32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_priority: bool,
    #[serde(default)]
    pub savings: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub features: Vec<String>,
    pub button_class: String,
    pub button_text: String,
}

impl Plan {
    pub fn period(&self) -> BillingPeriod {
        BillingPeriod::from_plan_id(&self.id)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionNote {
    pub rule: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FreeTrial {
    pub credits: u32,
    pub description: String,
}

/// Wire shape of /get_payment_plans. A populated `error` field replaces
/// the catalog entirely.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub free_trial: Option<FreeTrial>,
    #[serde(default)]
    pub conversion: Option<ConversionNote>,
}

/// A validated catalog, ready to render. Plan order is the server's.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub plans: Vec<Plan>,
    pub free_trial: Option<FreeTrial>,
    pub conversion: ConversionNote,
}

impl Catalog {
    pub fn from_response(response: CatalogResponse) -> Result<Catalog, PricingError> {
        if let Some(error) = response.error {
            return Err(PricingError::ServerError(error));
        }
        if response.plans.iter().any(|plan| plan.id.is_empty()) {
            return Err(PricingError::MissingPlanId);
        }
        let conversion = response
            .conversion
            .ok_or(PricingError::MissingConversionNote)?;

        Ok(Catalog {
            plans: response.plans,
            free_trial: response.free_trial,
            conversion,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{BillingPeriod, Catalog, CatalogResponse};
    use crate::error::PricingError;

    fn full_response() -> serde_json::Value {
        json!({
            "plans": [
                {
                    "id": "starter",
                    "plan_name": "Starter Plan",
                    "amount": 99,
                    "credits": 10,
                    "badge": "New Entry",
                    "description": "₹99 → 10 credits - Entry-level for new users",
                    "features": ["✅ 1 credit = 1 solved pdf (max 20 questions)"],
                    "button_text": "🚀 Pay Now",
                    "button_class": "secondary",
                },
                {
                    "id": "monthly",
                    "plan_name": "Monthly Saver",
                    "amount": 299,
                    "credits": 50,
                    "badge": "Best Value",
                    "is_featured": true,
                    "savings": "Save 33% per question!",
                    "features": ["✅ 50 pdf Solutions"],
                    "button_text": "💳 Pay Now",
                    "button_class": "featured",
                },
                {
                    "id": "power",
                    "plan_name": "Power Plan",
                    "amount": 799,
                    "credits": 150,
                    "is_priority": true,
                    "badge": "3 Months Access",
                    "savings": "Save 45% vs Starter!",
                    "features": ["✅ 150 pdf solved", "✅ Valid for 3 months"],
                    "button_text": "⚡ Pay Now",
                    "button_class": "primary",
                },
            ],
            "free_trial": {
                "credits": 5,
                "description": "5 free credits tied to phone number to avoid abuse",
            },
            "conversion": {
                "rule": "1 credit = 1 PDF",
                "description": "Each PDF can contain up to 20 coding questions",
            },
        })
    }

    #[test]
    fn parses_the_full_endpoint_shape() {
        let response: CatalogResponse = serde_json::from_value(full_response()).unwrap();
        let catalog = Catalog::from_response(response).unwrap();

        assert_eq!(catalog.plans.len(), 3);
        assert_eq!(catalog.plans[0].id, "starter");
        assert!(!catalog.plans[0].is_featured);
        assert!(catalog.plans[1].is_featured);
        assert!(catalog.plans[2].is_priority);
        assert_eq!(catalog.free_trial.as_ref().unwrap().credits, 5);
        assert_eq!(catalog.conversion.rule, "1 credit = 1 PDF");
    }

    #[test]
    fn an_error_field_wins_over_everything_else() {
        let response: CatalogResponse =
            serde_json::from_value(json!({"error": "database unavailable"})).unwrap();

        match Catalog::from_response(response) {
            Err(PricingError::ServerError(message)) => {
                assert_eq!(message, "database unavailable")
            }
            other => panic!("expected ServerError, got {:?}", other),
        }
    }

    #[test]
    fn a_plan_without_an_id_is_rejected() {
        let mut value = full_response();
        value["plans"][1]["id"] = json!("");
        let response: CatalogResponse = serde_json::from_value(value).unwrap();

        assert!(matches!(
            Catalog::from_response(response),
            Err(PricingError::MissingPlanId)
        ));
    }

    #[test]
    fn billing_period_mapping() {
        assert_eq!(BillingPeriod::from_plan_id("starter").suffix(), "/one-time");
        assert_eq!(BillingPeriod::from_plan_id("monthly").suffix(), "/month");
        // Unknown ids land in the quarterly bucket.
        assert_eq!(BillingPeriod::from_plan_id("power").suffix(), "/3 months");
        assert_eq!(BillingPeriod::from_plan_id("whatever").suffix(), "/3 months");
    }
}

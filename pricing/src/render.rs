use crate::catalog::{ConversionNote, Plan};

/// Build the markup fragment for one plan card.
///
/// Featured plans get the `featured` class; a savings badge renders only
/// when the plan declares one; features keep their server order.
pub fn pricing_card(plan: &Plan) -> String {
    let featured_class = if plan.is_featured { " featured" } else { "" };
    let badge_class = if plan.badge == "Best Value" {
        " best-value"
    } else {
        ""
    };

    let savings = plan
        .savings
        .as_deref()
        .map(|savings| format!(r#"<div class="savings">{}</div>"#, savings))
        .unwrap_or_default();

    let features = plan
        .features
        .iter()
        .map(|feature| format!("<li>{}</li>", feature))
        .collect::<String>();

    format!(
        r#"<div class="pricing-card autoShow{featured_class}">
  <div class="pricing-header">
    <h3>{name}</h3>
    <div class="pricing-badge{badge_class}">{badge}</div>
  </div>
  <div class="pricing-price">
    <span class="currency">₹</span>
    <span class="amount">{amount}</span>
    <span class="period">{period}</span>
  </div>
  <div class="pricing-credits">
    <span class="credits-number">{credits}</span>
    <span class="credits-text">Credits</span>
  </div>
  {savings}
  <ul class="pricing-features">{features}</ul>
  <button class="pricing-button {button_class}" onclick="initiatePayment('{id}')">
    <span>{button_text}</span>
  </button>
</div>"#,
        featured_class = featured_class,
        name = plan.plan_name,
        badge_class = badge_class,
        badge = plan.badge,
        amount = plan.amount,
        period = plan.period().suffix(),
        credits = plan.credits,
        savings = savings,
        features = features,
        button_class = plan.button_class,
        id = plan.id,
        button_text = plan.button_text,
    )
}

/// Full replacement text for the pricing note paragraph.
pub fn pricing_note(conversion: &ConversionNote) -> String {
    format!(
        "💡 <strong>Pro Tip:</strong> {}. {}. Perfect for last-minute submissions and exam prep! Choose the plan that fits your semester workload.",
        conversion.rule, conversion.description
    )
}

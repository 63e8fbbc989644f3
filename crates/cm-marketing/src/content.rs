//! Static site content
//!
//! Typed records for everything the pages render from ordered lists. The
//! shapes are serde-derived so the same records can deserialize from a
//! CMS payload later without touching the components; for now the site
//! ships with the static arrays below. The carousel and accordion treat
//! these records as opaque; they only ever see the list length.

use serde::{Deserialize, Serialize};

/// A customer quote shown in the rotating testimonial section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
}

/// One collapsible entry in the pricing FAQ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// A single line on a pricing card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFeature {
    pub text: String,
    pub included: bool,
}

/// A pricing tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub blurb: String,
    pub cta: String,
    pub highlighted: bool,
    pub features: Vec<PlanFeature>,
}

/// A headline number for the landing-page stat row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// A top-level navigation link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

fn nav_link(label: &str, href: &str) -> NavLink {
    NavLink {
        label: label.into(),
        href: href.into(),
    }
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        nav_link("Features", "/features"),
        nav_link("Pricing", "/pricing"),
        nav_link("Privacy", "/privacy"),
    ]
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.into(),
        label: label.into(),
    }
}

pub fn stats() -> Vec<Stat> {
    vec![
        stat("12B+", "events processed monthly"),
        stat("40ms", "median query latency"),
        stat("99.99%", "ingestion uptime"),
        stat("2,400+", "product teams"),
    ]
}

fn testimonial(quote: &str, author: &str, role: &str, rating: u8) -> Testimonial {
    Testimonial {
        quote: quote.into(),
        author: author.into(),
        role: role.into(),
        rating,
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            "We replaced three dashboards and a weekly SQL ritual with one funnel view. \
             The whole team finally argues about the same numbers.",
            "Dana Whitfield",
            "VP Product, Hatchboard",
            5,
        ),
        testimonial(
            "Retention cohorts that load before my coffee does. I didn't think that was \
             a feature until I had it.",
            "Marcus Oyelaran",
            "Growth Lead, Pinemail",
            5,
        ),
        testimonial(
            "The event schema checks caught a broken tracking release before it poisoned \
             a quarter of reporting. That alone paid for the year.",
            "Ines Kovač",
            "Data Engineer, Loopstore",
            5,
        ),
        testimonial(
            "Our PMs build their own segments now. The analytics backlog I used to triage \
             every Monday is just gone.",
            "Priya Raman",
            "Head of Data, Fernly",
            4,
        ),
        testimonial(
            "Setup was an afternoon, including the parts the docs warned would hurt. \
             Nothing hurt.",
            "Tom Albrecht",
            "CTO, Quartzline",
            5,
        ),
        testimonial(
            "Alerts that fire on real regressions instead of noise. First tool where I \
             haven't muted the integration within a week.",
            "Sofia Marques",
            "Engineering Manager, Driftkit",
            4,
        ),
    ]
}

fn faq(question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        question: question.into(),
        answer: answer.into(),
    }
}

pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        faq(
            "What counts as a tracked event?",
            "Any event your SDKs or the HTTP API send us. Page views, clicks, and custom \
             events all count the same; properties on an event are free.",
        ),
        faq(
            "Can I change plans at any time?",
            "Yes. Upgrades take effect immediately and are prorated; downgrades apply at \
             the start of your next billing cycle.",
        ),
        faq(
            "Is there a free trial?",
            "Every plan starts with a 14-day trial on full features, no card required. \
             Your data stays if you convert, and exports stay open if you don't.",
        ),
        faq(
            "What happens if I go over my event limit?",
            "We keep ingesting. You'll get a notice at 80% and 100%, and overage is billed \
             at the rate listed on your plan. Ingestion never silently drops.",
        ),
        faq(
            "Where is my data stored?",
            "In the region you pick at signup (EU or US). Data never leaves the region, \
             and Enterprise customers can bring their own cloud account.",
        ),
        faq(
            "Do you support self-serve data deletion?",
            "Yes. User-level deletion requests run from the dashboard or API and propagate \
             to all derived tables within 24 hours.",
        ),
    ]
}

fn plan_feature(text: &str, included: bool) -> PlanFeature {
    PlanFeature {
        text: text.into(),
        included,
    }
}

pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Starter".into(),
            price: "$49".into(),
            period: "/month".into(),
            blurb: "For early products finding their footing".into(),
            cta: "Start Free Trial".into(),
            highlighted: false,
            features: vec![
                plan_feature("1M events per month", true),
                plan_feature("Funnels and trends", true),
                plan_feature("90-day data retention", true),
                plan_feature("Email support", true),
                plan_feature("Retention cohorts", false),
                plan_feature("Schema enforcement", false),
                plan_feature("SAML SSO", false),
            ],
        },
        PricingPlan {
            name: "Growth".into(),
            price: "$199".into(),
            period: "/month".into(),
            blurb: "For teams shipping and measuring weekly".into(),
            cta: "Start Free Trial".into(),
            highlighted: true,
            features: vec![
                plan_feature("20M events per month", true),
                plan_feature("Funnels and trends", true),
                plan_feature("13-month data retention", true),
                plan_feature("Priority support", true),
                plan_feature("Retention cohorts", true),
                plan_feature("Schema enforcement", true),
                plan_feature("SAML SSO", false),
            ],
        },
        PricingPlan {
            name: "Enterprise".into(),
            price: "Custom".into(),
            period: "".into(),
            blurb: "For organizations with compliance needs".into(),
            cta: "Talk to Sales".into(),
            highlighted: false,
            features: vec![
                plan_feature("Unlimited events", true),
                plan_feature("Funnels and trends", true),
                plan_feature("Unlimited retention", true),
                plan_feature("Dedicated support", true),
                plan_feature("Retention cohorts", true),
                plan_feature("Schema enforcement", true),
                plan_feature("SAML SSO", true),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_ratings_in_range() {
        let records = testimonials();
        assert!(!records.is_empty());
        assert!(records.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        let plans = pricing_plans();
        assert_eq!(plans.iter().filter(|p| p.highlighted).count(), 1);
    }

    #[test]
    fn test_plans_share_a_feature_grid() {
        // Cards render feature lines row by row, so every plan carries
        // the same number of lines.
        let plans = pricing_plans();
        let rows = plans[0].features.len();
        assert!(plans.iter().all(|p| p.features.len() == rows));
    }

    #[test]
    fn test_records_deserialize_from_cms_shape() {
        let raw = r#"{"question": "Can I export?", "answer": "Yes, CSV and Parquet."}"#;
        let entry: FaqEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.question, "Can I export?");
    }
}

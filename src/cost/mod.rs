//! Remediation cost analyzer: a pure function of page counts, tech stack,
//! timeline urgency, and selected add-on services, plus one optional
//! exchange-rate lookup for non-USD output.

pub mod exchange;

use serde::{Deserialize, Serialize};

/// Per-page cost by complexity tier, in USD.
const BASIC_PAGE_COST: f64 = 100.0;
const INTERMEDIATE_PAGE_COST: f64 = 200.0;
const ADVANCED_PAGE_COST: f64 = 300.0;

/// Base day estimate per page before timeline scaling.
const DAYS_PER_PAGE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TechStack {
    Wordpress,
    React,
    Angular,
    Vue,
    #[default]
    HtmlCssJs,
    Other,
}

impl TechStack {
    /// Surcharge factor for auditing framework-rendered markup.
    pub fn multiplier(&self) -> f64 {
        match self {
            TechStack::React | TechStack::Angular | TechStack::Vue => 1.2,
            TechStack::Other => 1.3,
            TechStack::Wordpress | TechStack::HtmlCssJs => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    #[default]
    Standard,
    Expedited,
    Urgent,
}

impl Timeline {
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            Timeline::Standard => 1.0,
            Timeline::Expedited => 1.5,
            Timeline::Urgent => 2.0,
        }
    }

    /// Compression factor applied to the day estimate.
    pub fn time_factor(&self) -> f64 {
        match self {
            Timeline::Standard => 1.0,
            Timeline::Expedited => 0.7,
            Timeline::Urgent => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceAddOn {
    WcagTesting,
    Remediation,
    Session,
    DevSession,
    Training,
}

impl ServiceAddOn {
    /// Flat USD cost, added after page multipliers.
    pub fn cost(&self) -> f64 {
        match self {
            ServiceAddOn::WcagTesting => 500.0,
            ServiceAddOn::Remediation => 1000.0,
            ServiceAddOn::Session => 300.0,
            ServiceAddOn::DevSession => 500.0,
            ServiceAddOn::Training => 800.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceAddOn::WcagTesting => "WCAG Compliance Testing",
            ServiceAddOn::Remediation => "Accessibility Remediation",
            ServiceAddOn::Session => "Accessibility Consultation Session",
            ServiceAddOn::DevSession => "Accessibility Remediation Session for Developers",
            ServiceAddOn::Training => "Accessibility Training Workshop",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CostInputs {
    #[serde(default)]
    pub basic_pages: u32,
    #[serde(default)]
    pub intermediate_pages: u32,
    #[serde(default)]
    pub advanced_pages: u32,
    #[serde(default)]
    pub tech_stack: TechStack,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub services: Vec<ServiceAddOn>,
}

impl CostInputs {
    /// Summed in u64 so extreme wire inputs cannot overflow.
    pub fn total_pages(&self) -> u64 {
        self.basic_pages as u64 + self.intermediate_pages as u64 + self.advanced_pages as u64
    }
}

/// One row of the presentation breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRow {
    pub name: &'static str,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostEstimate {
    pub base_cost: f64,
    pub tech_stack_multiplier: f64,
    pub timeline_multiplier: f64,
    pub service_add_ons: f64,
    /// Grand total in the requested currency.
    pub total_cost: f64,
    pub estimated_days: u32,
    pub currency: String,
    pub exchange_rate: f64,
    pub breakdown: Vec<BreakdownRow>,
}

/// Compute an estimate. `exchange_rate` converts from USD into the named
/// currency and scales every monetary output; pass 1.0 for USD.
pub fn estimate(inputs: &CostInputs, currency: &str, exchange_rate: f64) -> CostEstimate {
    let base = inputs.basic_pages as f64 * BASIC_PAGE_COST
        + inputs.intermediate_pages as f64 * INTERMEDIATE_PAGE_COST
        + inputs.advanced_pages as f64 * ADVANCED_PAGE_COST;

    let stack = inputs.tech_stack.multiplier();
    let timeline = inputs.timeline.cost_multiplier();
    let services: f64 = inputs.services.iter().map(|s| s.cost()).sum();

    let total = (base * stack * timeline + services) * exchange_rate;

    let days = inputs.total_pages() as f64 * DAYS_PER_PAGE * inputs.timeline.time_factor();

    CostEstimate {
        base_cost: base * exchange_rate,
        tech_stack_multiplier: stack,
        timeline_multiplier: timeline,
        service_add_ons: services * exchange_rate,
        total_cost: total,
        estimated_days: days.ceil() as u32,
        currency: currency.to_string(),
        exchange_rate,
        breakdown: vec![
            BreakdownRow { name: "Base Cost", cost: base * exchange_rate },
            BreakdownRow { name: "Tech Stack", cost: base * (stack - 1.0) * exchange_rate },
            BreakdownRow { name: "Timeline", cost: base * stack * (timeline - 1.0) * exchange_rate },
            BreakdownRow { name: "Services", cost: services * exchange_rate },
        ],
    }
}

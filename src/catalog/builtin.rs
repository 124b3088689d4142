//! Built-in module catalog.
//!
//! Curated onboarding deliverables used when no catalog file is supplied.
//! Kept in Rust so that a renamed id breaks a test rather than a session.
//!
//! | Module                 | Category   | Size | Requires |
//! |------------------------|------------|------|----------|
//! | market-research        | Strategy   | 3    | - |
//! | business-plan          | Strategy   | 5    | market-research |
//! | company-registration   | Legal      | 2    | - |
//! | contracts-templates    | Legal      | 2    | company-registration |
//! | bookkeeping-setup      | Finance    | 2    | company-registration |
//! | brand-identity         | Branding   | 4    | market-research |
//! | logo-design            | Branding   | 2    | brand-identity |
//! | website                | Technology | 8    | brand-identity |
//! | seo-setup              | Marketing  | 3    | website |
//! | email-marketing        | Marketing  | 2    | website |
//! | social-media-launch    | Marketing  | 3    | brand-identity |
//! | pitch-deck             | Finance    | 3    | business-plan, brand-identity |
//! | crm-setup              | Sales      | 3    | website |
//! | sales-playbook         | Sales      | 4    | market-research, crm-setup |
//! | hiring-plan            | Operations | 3    | business-plan |
//! | onboarding-handbook    | Operations | 2    | hiring-plan, contracts-templates |

use super::Module;
use crate::types::Category;

/// (id, category, size, description, prerequisites)
type ModuleRow = (
    &'static str,
    Category,
    u32,
    &'static str,
    &'static [&'static str],
);

const MODULES: &[ModuleRow] = &[
    (
        "market-research",
        Category::Strategy,
        3,
        "Competitor scan, target segments and sizing",
        &[],
    ),
    (
        "business-plan",
        Category::Strategy,
        5,
        "Lean business plan with revenue model",
        &["market-research"],
    ),
    (
        "company-registration",
        Category::Legal,
        2,
        "Entity registration and tax numbers",
        &[],
    ),
    (
        "contracts-templates",
        Category::Legal,
        2,
        "Customer, supplier and employment contract templates",
        &["company-registration"],
    ),
    (
        "bookkeeping-setup",
        Category::Finance,
        2,
        "Accounting software, chart of accounts, invoicing",
        &["company-registration"],
    ),
    (
        "brand-identity",
        Category::Branding,
        4,
        "Positioning, tone of voice, colour palette",
        &["market-research"],
    ),
    (
        "logo-design",
        Category::Branding,
        2,
        "Logo and favicon set",
        &["brand-identity"],
    ),
    (
        "website",
        Category::Technology,
        8,
        "Marketing website with contact forms",
        &["brand-identity"],
    ),
    (
        "seo-setup",
        Category::Marketing,
        3,
        "Search console, sitemap and keyword baseline",
        &["website"],
    ),
    (
        "email-marketing",
        Category::Marketing,
        2,
        "Newsletter tooling and welcome sequence",
        &["website"],
    ),
    (
        "social-media-launch",
        Category::Marketing,
        3,
        "Profiles, content calendar and launch posts",
        &["brand-identity"],
    ),
    (
        "pitch-deck",
        Category::Finance,
        3,
        "Investor pitch deck",
        &["business-plan", "brand-identity"],
    ),
    (
        "crm-setup",
        Category::Sales,
        3,
        "CRM pipeline and lead capture from the website",
        &["website"],
    ),
    (
        "sales-playbook",
        Category::Sales,
        4,
        "Ideal customer profile, scripts and objection handling",
        &["market-research", "crm-setup"],
    ),
    (
        "hiring-plan",
        Category::Operations,
        3,
        "First hires, roles and budget",
        &["business-plan"],
    ),
    (
        "onboarding-handbook",
        Category::Operations,
        2,
        "Employee handbook and onboarding checklist",
        &["hiring-plan", "contracts-templates"],
    ),
];

/// Materialize the built-in catalog in declaration order.
pub fn modules() -> Vec<Module> {
    MODULES
        .iter()
        .map(|&(id, category, size, description, prerequisites)| Module {
            id: id.into(),
            category,
            description: description.to_string(),
            size,
            prerequisites: prerequisites.iter().map(|&p| p.into()).collect(),
        })
        .collect()
}

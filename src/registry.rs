//! Built-in landing-page templates.
//!
//! Each entry carries the copy for one page: display name, tagline, the
//! problem statement, a five-item service list, a visual accent tag, and the
//! lead-capture call to action. Adding a template is a data-only change here;
//! the renderer only ever sees field names and values.

/// A field value in a template record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Scalar copy, substituted as-is.
    Text(&'static str),
    /// Ordered items, expanded to `<li>` fragments.
    List(&'static [&'static str]),
}

/// A named template and its default field values.
#[derive(Debug)]
pub struct TemplateRecord {
    pub id: &'static str,
    pub fields: &'static [(&'static str, Field)],
}

impl TemplateRecord {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<Field> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// Scalar field, or `""` when absent or a list.
    pub fn text(&self, name: &str) -> &'static str {
        match self.field(name) {
            Some(Field::Text(text)) => text,
            _ => "",
        }
    }
}

/// Default form target; the dev server handles it.
pub const DEFAULT_LEADS_ACTION: &str = "/submit";

/// All templates, in listing order.
pub static TEMPLATES: &[TemplateRecord] = &[
    TemplateRecord {
        id: "concierge",
        fields: &[
            ("name", Field::Text("Elite Concierge")),
            ("tagline", Field::Text("Life, handled.")),
            ("problem", Field::Text("Your time is worth more than the mundane.")),
            (
                "services",
                Field::List(&[
                    "24/7 lifestyle management",
                    "Exclusive access coordination",
                    "Private event curation",
                    "Global reservation privileges",
                    "White-glove relocation",
                ]),
            ),
            ("accent", Field::Text("champagne")),
            ("cta_heading", Field::Text("Request a private introduction")),
            ("cta_text", Field::Text("Membership is by referral. Leave your address and a lifestyle manager will be in touch.")),
            ("cta_button", Field::Text("Request access")),
            ("leads_action", Field::Text(DEFAULT_LEADS_ACTION)),
        ],
    },
    TemplateRecord {
        id: "aviation",
        fields: &[
            ("name", Field::Text("Apex Air")),
            ("tagline", Field::Text("The sky, yours alone.")),
            ("problem", Field::Text("Commercial travel diminishes those who've transcended it.")),
            (
                "services",
                Field::List(&[
                    "Fully crewed private aircraft",
                    "Empty-leg optimization",
                    "Global FBO network access",
                    "Helicopter transfer coordination",
                    "Discretion at every altitude",
                ]),
            ),
            ("accent", Field::Text("obsidian")),
            ("cta_heading", Field::Text("Reserve your first flight")),
            ("cta_text", Field::Text("Share your address and our charter desk will send availability within the hour.")),
            ("cta_button", Field::Text("Contact the charter desk")),
            ("leads_action", Field::Text(DEFAULT_LEADS_ACTION)),
        ],
    },
    TemplateRecord {
        id: "estate",
        fields: &[
            ("name", Field::Text("Vestry Estates")),
            ("tagline", Field::Text("Where legacy meets landscape.")),
            ("problem", Field::Text("Your next residence deserves more than a listing.")),
            (
                "services",
                Field::List(&[
                    "Off-market property access",
                    "Confidential acquisition advisory",
                    "Estate valuation & structuring",
                    "Cross-border property coordination",
                    "Legacy planning integration",
                ]),
            ),
            ("accent", Field::Text("forest")),
            ("cta_heading", Field::Text("See what never reaches the market")),
            ("cta_text", Field::Text("Receive our confidential portfolio, shared only with qualified buyers.")),
            ("cta_button", Field::Text("Request the portfolio")),
            ("leads_action", Field::Text(DEFAULT_LEADS_ACTION)),
        ],
    },
    TemplateRecord {
        id: "art",
        fields: &[
            ("name", Field::Text("Atelier Advisory")),
            ("tagline", Field::Text("Collecting with intention.")),
            ("problem", Field::Text("The art market rewards those with the right counsel.")),
            (
                "services",
                Field::List(&[
                    "Primary market placement",
                    "Provenance research & authentication",
                    "Collection strategy development",
                    "Private sale facilitation",
                    "Estate planning for collections",
                ]),
            ),
            ("accent", Field::Text("gallery")),
            ("cta_heading", Field::Text("Begin a conversation")),
            ("cta_text", Field::Text("Our advisors accept a limited number of new collectors each season.")),
            ("cta_button", Field::Text("Speak with an advisor")),
            ("leads_action", Field::Text(DEFAULT_LEADS_ACTION)),
        ],
    },
    TemplateRecord {
        id: "wealth",
        fields: &[
            ("name", Field::Text("Meridian Family Office")),
            ("tagline", Field::Text("Wealth orchestrated.")),
            ("problem", Field::Text("Complexity demands a single, trusted hand.")),
            (
                "services",
                Field::List(&[
                    "Unified wealth architecture",
                    "Multi-generational structuring",
                    "Philanthropic strategy",
                    "Concierge tax & legal coordination",
                    "Next-generation preparation",
                ]),
            ),
            ("accent", Field::Text("banker")),
            ("cta_heading", Field::Text("Arrange a confidential review")),
            ("cta_text", Field::Text("A principal will contact you personally to discuss your family's priorities.")),
            ("cta_button", Field::Text("Arrange a review")),
            ("leads_action", Field::Text(DEFAULT_LEADS_ACTION)),
        ],
    },
    TemplateRecord {
        id: "wellness",
        fields: &[
            ("name", Field::Text("Apex Longevity")),
            ("tagline", Field::Text("Years, not days.")),
            ("problem", Field::Text("Peak performance requires more than a gym membership.")),
            (
                "services",
                Field::List(&[
                    "Executive health optimization",
                    "Biohacking & longevity protocols",
                    "Private medical concierge",
                    "Regenerative medicine access",
                    "Discretion-first care",
                ]),
            ),
            ("accent", Field::Text("sage")),
            ("cta_heading", Field::Text("Join the founding cohort")),
            ("cta_text", Field::Text("Places in each intake are limited. Leave your address to be considered.")),
            ("cta_button", Field::Text("Apply for a place")),
            ("leads_action", Field::Text(DEFAULT_LEADS_ACTION)),
        ],
    },
];

/// Find a template by identifier.
pub fn get(id: &str) -> Option<&'static TemplateRecord> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// All identifiers, in listing order.
pub fn ids() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|t| t.id)
}

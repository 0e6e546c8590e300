use serde::Serialize;
use xerago_core::{bind_collection, bind_fields, FieldSpec, FromContent};
use xerago_shared::ContentNode;

pub const WEALTH_RESOURCE_TYPE: &str = "citi/components/wealth";
pub const WEALTH_MANAGEMENT_RESOURCE_TYPE: &str = "citi/components/citi-wealth-management";

const ICON_ROOT: &str = "/content/dam/citi/images/icons";

const WEALTH_FIELDS: &[FieldSpec] = &[FieldSpec::text("title"), FieldSpec::text("description")];

const CARD_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("cardTitle"),
    FieldSpec::text("cardDescription"),
    FieldSpec::text("cardImageReference"),
];

const SECTION_FIELDS: &[FieldSpec] = &[FieldSpec::text("sectionTitle"), FieldSpec::text("sectionDescription")];

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "Investment Planning",
        "Get expert guidance on building a diversified investment portfolio tailored to your financial goals.",
        "investment-planning",
    ),
    (
        "Wealth Protection",
        "Secure your financial future with comprehensive insurance and protection strategies.",
        "wealth-protection",
    ),
    (
        "Retirement Planning",
        "Plan for a comfortable retirement with our specialized retirement planning services.",
        "retirement-planning",
    ),
    (
        "Estate Planning",
        "Ensure your legacy with professional estate planning and wealth transfer solutions.",
        "estate-planning",
    ),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthCard {
    pub card_title: Option<String>,
    pub card_description: Option<String>,
    pub card_image_reference: Option<String>,
}

impl FromContent for WealthCard {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, CARD_FIELDS);
        Self {
            card_title: f.string("cardTitle"),
            card_description: f.string("cardDescription"),
            card_image_reference: f.string("cardImageReference"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthModel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub wealth_cards: Vec<WealthCard>,
}

impl FromContent for WealthModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, WEALTH_FIELDS);
        Self {
            title: f.string("title"),
            description: f.string("description"),
            wealth_cards: bind_collection(node, "wealthCards"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    pub icon_image: String,
    pub icon_alt: String,
    pub link: String,
}

/// Wealth management section: authored heading over a fixed set of service cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthManagement {
    pub section_title: Option<String>,
    pub section_description: Option<String>,
    pub wealth_cards: Vec<ServiceCard>,
}

impl FromContent for WealthManagement {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, SECTION_FIELDS);

        let wealth_cards = SERVICES
            .iter()
            .map(|(title, description, icon)| ServiceCard {
                title: title.to_string(),
                description: description.to_string(),
                icon_image: format!("{}/{}.png", ICON_ROOT, icon),
                icon_alt: format!("{} Icon", title),
                link: "#".to_string(),
            })
            .collect();

        Self {
            section_title: f.string("sectionTitle"),
            section_description: f.string("sectionDescription"),
            wealth_cards,
        }
    }
}

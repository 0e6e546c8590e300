use serde::Serialize;
use xerago_core::{bind_collection, bind_fields, FieldSpec, FromContent};
use xerago_shared::ContentNode;

pub const HEADER_RESOURCE_TYPE: &str = "citi/components/header";
pub const SITE_HEADER_RESOURCE_TYPE: &str = "citi/components/citi-header";

const HEADER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("logoReference"),
    FieldSpec::text("language"),
    FieldSpec::text("signText"),
    FieldSpec::text("applyButtonText"),
    FieldSpec::text("applyButtonUrl"),
];

const SIGN_ON_FIELDS: &[FieldSpec] = &[FieldSpec::text("signOnMenuName"), FieldSpec::text("signOnMenuUrl")];

const SITE_HEADER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("logoLink"),
    FieldSpec::text("logoImage"),
    FieldSpec::text("logoAlt"),
    FieldSpec::text("languageCode"),
    FieldSpec::text("searchLabel"),
    FieldSpec::text("signOnText"),
    FieldSpec::text("mobileMenuLabel"),
];

const NAVIGATION: &[(&str, bool)] = &[
    ("Wealth Management", false),
    ("Personal Banking", false),
    ("Credit Cards", false),
    ("Ready Credit", false),
    ("Home Loans", false),
    ("Deposits", false),
    ("Investments", false),
    ("Insurance", false),
    ("More", false),
    ("Apply Now", true),
];

const SIGN_ON_LINKS: &[&str] = &["Citibank Online", "IPB Singapore Online"];

const PLACEHOLDER_LINK: &str = "#";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOnMenuItem {
    pub sign_on_menu_name: Option<String>,
    pub sign_on_menu_url: Option<String>,
}

impl FromContent for SignOnMenuItem {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, SIGN_ON_FIELDS);
        Self {
            sign_on_menu_name: f.string("signOnMenuName"),
            sign_on_menu_url: f.string("signOnMenuUrl"),
        }
    }
}

/// Authorable header with a sign-on drop-down.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderModel {
    pub logo_reference: Option<String>,
    pub language: Option<String>,
    pub sign_text: Option<String>,
    pub apply_button_text: Option<String>,
    pub apply_button_url: Option<String>,
    pub sign_on_menu: Vec<SignOnMenuItem>,
}

impl FromContent for HeaderModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, HEADER_FIELDS);
        Self {
            logo_reference: f.string("logoReference"),
            language: f.string("language"),
            sign_text: f.string("signText"),
            apply_button_text: f.string("applyButtonText"),
            apply_button_url: f.string("applyButtonUrl"),
            sign_on_menu: bind_collection(node, "signOnMenu"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub text: String,
    pub link: String,
    #[serde(rename = "isCTA")]
    pub is_cta: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignOnLink {
    pub text: String,
    pub link: String,
    pub target: String,
}

/// Site header. Navigation and sign-on links are fixed; only the branding
/// and labels are authored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteHeader {
    pub logo_link: Option<String>,
    pub logo_image: Option<String>,
    pub logo_alt: Option<String>,
    pub language_code: Option<String>,
    pub search_label: Option<String>,
    pub sign_on_text: Option<String>,
    pub mobile_menu_label: Option<String>,
    pub navigation_items: Vec<NavigationItem>,
    pub sign_on_links: Vec<SignOnLink>,
}

impl FromContent for SiteHeader {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, SITE_HEADER_FIELDS);

        let navigation_items = NAVIGATION
            .iter()
            .map(|(text, is_cta)| NavigationItem {
                text: text.to_string(),
                link: PLACEHOLDER_LINK.to_string(),
                is_cta: *is_cta,
            })
            .collect();

        let sign_on_links = SIGN_ON_LINKS
            .iter()
            .map(|text| SignOnLink {
                text: text.to_string(),
                link: PLACEHOLDER_LINK.to_string(),
                target: "_blank".to_string(),
            })
            .collect();

        Self {
            logo_link: f.string("logoLink"),
            logo_image: f.string("logoImage"),
            logo_alt: f.string("logoAlt"),
            language_code: f.string("languageCode"),
            search_label: f.string("searchLabel"),
            sign_on_text: f.string("signOnText"),
            mobile_menu_label: f.string("mobileMenuLabel"),
            navigation_items,
            sign_on_links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_sign_on_menu_in_order() {
        let node = ContentNode::from_json(
            "/content/home/header",
            &json!({
                "signText": "Sign on",
                "signOnMenu": {
                    "item0": { "signOnMenuName": "Citibank Online", "signOnMenuUrl": "/online" },
                    "item1": { "signOnMenuName": "Citi Alerts" }
                }
            }),
        );
        let header = HeaderModel::from_content(&node);
        assert_eq!(header.sign_text.as_deref(), Some("Sign on"));
        assert_eq!(header.sign_on_menu.len(), 2);
        assert_eq!(header.sign_on_menu[0].sign_on_menu_url.as_deref(), Some("/online"));
        assert_eq!(header.sign_on_menu[1].sign_on_menu_name.as_deref(), Some("Citi Alerts"));
        assert_eq!(header.sign_on_menu[1].sign_on_menu_url, None);
    }

    #[test]
    fn test_header_without_menu() {
        let header = HeaderModel::from_content(&ContentNode::from_json("/h", &json!({})));
        assert!(header.sign_on_menu.is_empty());
    }

    #[test]
    fn test_site_header_fixed_navigation() {
        let header = SiteHeader::from_content(&ContentNode::from_json("/h", &json!({ "logoAlt": "Citi" })));
        assert_eq!(header.logo_alt.as_deref(), Some("Citi"));
        assert_eq!(header.navigation_items.len(), 10);
        assert_eq!(header.navigation_items.iter().filter(|i| i.is_cta).count(), 1);

        let last = header.navigation_items.last().unwrap();
        assert_eq!(last.text, "Apply Now");
        assert!(last.is_cta);

        assert_eq!(header.sign_on_links.len(), 2);
        assert!(header.sign_on_links.iter().all(|l| l.target == "_blank"));

        let value = serde_json::to_value(&header).unwrap();
        assert_eq!(value["navigationItems"][9]["isCTA"], json!(true));
    }
}

use serde::Serialize;
use xerago_core::{bind_collection, bind_fields, FieldSpec, FromContent};
use xerago_shared::ContentNode;

pub const FOOTER_RESOURCE_TYPE: &str = "citi/components/footer";
pub const SITE_FOOTER_RESOURCE_TYPE: &str = "citi/components/citi-footer";

const FOOTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("appTitle"),
    FieldSpec::text("googlePlayImageReference"),
    FieldSpec::text("googlePlayLink"),
    FieldSpec::text("appleStoreImageReference"),
    FieldSpec::text("appleStoreLink"),
    FieldSpec::text("sdicLogoReference"),
    FieldSpec::text("copyright"),
];

const MENU_FIELDS: &[FieldSpec] = &[FieldSpec::text("menuTitle")];

const SUB_MENU_FIELDS: &[FieldSpec] = &[FieldSpec::text("subMenuTitle"), FieldSpec::text("subMenuUrl")];

const SITE_FOOTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("appsTitle"),
    FieldSpec::text("googlePlayLink"),
    FieldSpec::text("googlePlayImage"),
    FieldSpec::text("appStoreLink"),
    FieldSpec::text("appStoreImage"),
    FieldSpec::text("instagramLink"),
    FieldSpec::text("youtubeLink"),
    FieldSpec::text("facebookLink"),
    FieldSpec::text("sdicLogo"),
    FieldSpec::text("copyrightText1"),
    FieldSpec::text("copyrightText2"),
];

const COLUMNS: &[(&str, [&str; 4])] = &[
    ("Personal Banking", ["Savings Account", "Current Account", "Fixed Deposits", "Ready Credit"]),
    ("Credit Cards", ["Credit Cards", "Rewards Program", "Card Benefits", "Apply Now"]),
    ("Wealth Management", ["Investment Planning", "Insurance", "Retirement Planning", "Estate Planning"]),
    ("Support", ["Contact Us", "Branch Locator", "FAQs", "Security"]),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSubMenu {
    pub sub_menu_title: Option<String>,
    pub sub_menu_url: Option<String>,
}

impl FromContent for FooterSubMenu {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, SUB_MENU_FIELDS);
        Self {
            sub_menu_title: f.string("subMenuTitle"),
            sub_menu_url: f.string("subMenuUrl"),
        }
    }
}

/// One footer column; its links are a nested multifield.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterMenu {
    pub menu_title: Option<String>,
    pub menu_items: Vec<FooterSubMenu>,
}

impl FromContent for FooterMenu {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, MENU_FIELDS);
        Self {
            menu_title: f.string("menuTitle"),
            menu_items: bind_collection(node, "menuItems"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterModel {
    pub app_title: Option<String>,
    pub google_play_image_reference: Option<String>,
    pub google_play_link: Option<String>,
    pub apple_store_image_reference: Option<String>,
    pub apple_store_link: Option<String>,
    pub sdic_logo_reference: Option<String>,
    pub copyright: Option<String>,
    pub footer_menu: Vec<FooterMenu>,
}

impl FromContent for FooterModel {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, FOOTER_FIELDS);
        Self {
            app_title: f.string("appTitle"),
            google_play_image_reference: f.string("googlePlayImageReference"),
            google_play_link: f.string("googlePlayLink"),
            apple_store_image_reference: f.string("appleStoreImageReference"),
            apple_store_link: f.string("appleStoreLink"),
            sdic_logo_reference: f.string("sdicLogoReference"),
            copyright: f.string("copyright"),
            footer_menu: bind_collection(node, "footerMenu"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// Site footer with fixed link columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteFooter {
    pub apps_title: Option<String>,
    pub google_play_link: Option<String>,
    pub google_play_image: Option<String>,
    pub app_store_link: Option<String>,
    pub app_store_image: Option<String>,
    pub instagram_link: Option<String>,
    pub youtube_link: Option<String>,
    pub facebook_link: Option<String>,
    pub sdic_logo: Option<String>,
    pub copyright_text1: Option<String>,
    pub copyright_text2: Option<String>,
    pub footer_columns: Vec<FooterColumn>,
}

impl FromContent for SiteFooter {
    fn from_content(node: &ContentNode) -> Self {
        let f = bind_fields(&node.properties, SITE_FOOTER_FIELDS);

        let footer_columns = COLUMNS
            .iter()
            .map(|(title, links)| FooterColumn {
                title: title.to_string(),
                links: links
                    .iter()
                    .map(|text| FooterLink { text: text.to_string(), url: "#".to_string() })
                    .collect(),
            })
            .collect();

        Self {
            apps_title: f.string("appsTitle"),
            google_play_link: f.string("googlePlayLink"),
            google_play_image: f.string("googlePlayImage"),
            app_store_link: f.string("appStoreLink"),
            app_store_image: f.string("appStoreImage"),
            instagram_link: f.string("instagramLink"),
            youtube_link: f.string("youtubeLink"),
            facebook_link: f.string("facebookLink"),
            sdic_logo: f.string("sdicLogo"),
            copyright_text1: f.string("copyrightText1"),
            copyright_text2: f.string("copyrightText2"),
            footer_columns,
        }
    }
}

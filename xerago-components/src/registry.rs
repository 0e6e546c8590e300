//! Resource type → component model lookup.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use xerago_core::FromContent;
use xerago_games::{pick_a_gift, scratch_card, wheel, PickAGiftModel, ScratchCardModel, WheelSpinGameModel};
use xerago_shared::ContentNode;

use crate::content::{
    KnowledgeCard, MobileBankingModel, TestimonialModel, KNOWLEDGE_CARD_RESOURCE_TYPE,
    MOBILE_BANKING_RESOURCE_TYPE, TESTIMONIAL_RESOURCE_TYPE,
};
use crate::footer::{FooterModel, SiteFooter, FOOTER_RESOURCE_TYPE, SITE_FOOTER_RESOURCE_TYPE};
use crate::game_screens::{
    GameScreenModel, GameStartScreenModel, GAME_SCREEN_RESOURCE_TYPE, GAME_START_SCREEN_RESOURCE_TYPE,
};
use crate::header::{HeaderModel, SiteHeader, HEADER_RESOURCE_TYPE, SITE_HEADER_RESOURCE_TYPE};
use crate::hero::{BannerModel, HeroModel, BANNER_RESOURCE_TYPE, HERO_RESOURCE_TYPE};
use crate::wealth::{WealthManagement, WealthModel, WEALTH_MANAGEMENT_RESOURCE_TYPE, WEALTH_RESOURCE_TYPE};

#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    #[error("Node {0} has no resource type")]
    Untyped(String),

    #[error("No component model for resource type {0}")]
    Unsupported(String),

    #[error("Failed to render component: {0}")]
    Render(#[from] serde_json::Error),
}

type Renderer = fn(&ContentNode) -> Result<Value, serde_json::Error>;

fn render_as<T: FromContent + Serialize>(node: &ContentNode) -> Result<Value, serde_json::Error> {
    serde_json::to_value(T::from_content(node))
}

pub struct ComponentRegistry {
    renderers: HashMap<&'static str, Renderer>,
}

impl ComponentRegistry {
    pub fn empty() -> Self {
        Self { renderers: HashMap::new() }
    }

    /// Registry with every component this site ships.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry
            .register::<HeroModel>(HERO_RESOURCE_TYPE)
            .register::<BannerModel>(BANNER_RESOURCE_TYPE)
            .register::<HeaderModel>(HEADER_RESOURCE_TYPE)
            .register::<SiteHeader>(SITE_HEADER_RESOURCE_TYPE)
            .register::<FooterModel>(FOOTER_RESOURCE_TYPE)
            .register::<SiteFooter>(SITE_FOOTER_RESOURCE_TYPE)
            .register::<TestimonialModel>(TESTIMONIAL_RESOURCE_TYPE)
            .register::<MobileBankingModel>(MOBILE_BANKING_RESOURCE_TYPE)
            .register::<KnowledgeCard>(KNOWLEDGE_CARD_RESOURCE_TYPE)
            .register::<WealthModel>(WEALTH_RESOURCE_TYPE)
            .register::<WealthManagement>(WEALTH_MANAGEMENT_RESOURCE_TYPE)
            .register::<GameScreenModel>(GAME_SCREEN_RESOURCE_TYPE)
            .register::<GameStartScreenModel>(GAME_START_SCREEN_RESOURCE_TYPE)
            .register::<ScratchCardModel>(scratch_card::RESOURCE_TYPE)
            .register::<WheelSpinGameModel>(wheel::RESOURCE_TYPE)
            .register::<PickAGiftModel>(pick_a_gift::RESOURCE_TYPE);
        registry
    }

    pub fn register<T: FromContent + Serialize>(&mut self, resource_type: &'static str) -> &mut Self {
        self.renderers.insert(resource_type, render_as::<T>);
        self
    }

    pub fn supports(&self, resource_type: &str) -> bool {
        self.renderers.contains_key(resource_type)
    }

    /// Bind `node` to the model registered for its resource type and render it.
    pub fn render(&self, node: &ContentNode) -> Result<Value, ComponentError> {
        let resource_type = node
            .resource_type
            .as_deref()
            .ok_or_else(|| ComponentError::Untyped(node.path.clone()))?;

        let render = self
            .renderers
            .get(resource_type)
            .ok_or_else(|| ComponentError::Unsupported(resource_type.to_string()))?;

        tracing::debug!("Rendering {} as {}", node.path, resource_type);
        Ok(render(node)?)
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_by_resource_type() {
        let registry = ComponentRegistry::new();
        let node = ContentNode::from_json(
            "/content/home/wheel",
            &json!({ "sling:resourceType": wheel::RESOURCE_TYPE, "title": "Spin now" }),
        );

        let value = registry.render(&node).unwrap();
        assert_eq!(value["title"], json!("Spin now"));
        assert_eq!(value["wheelSize"], json!(400));
        assert_eq!(value["segments"]["count"], json!(6));
    }

    #[test]
    fn test_every_shipped_type_is_registered() {
        let registry = ComponentRegistry::default();
        for resource_type in [
            HERO_RESOURCE_TYPE,
            SITE_HEADER_RESOURCE_TYPE,
            SITE_FOOTER_RESOURCE_TYPE,
            GAME_START_SCREEN_RESOURCE_TYPE,
            scratch_card::RESOURCE_TYPE,
            pick_a_gift::RESOURCE_TYPE,
        ] {
            assert!(registry.supports(resource_type), "{} missing", resource_type);
        }
    }

    #[test]
    fn test_unknown_and_untyped_nodes() {
        let registry = ComponentRegistry::new();

        let untyped = ContentNode::from_json("/content/plain", &json!({ "title": "x" }));
        assert!(matches!(registry.render(&untyped), Err(ComponentError::Untyped(_))));

        let unknown = ContentNode::from_json("/content/x", &json!({ "sling:resourceType": "foundation/components/text" }));
        assert!(matches!(registry.render(&unknown), Err(ComponentError::Unsupported(_))));
    }
}

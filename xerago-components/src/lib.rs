pub mod content;
pub mod footer;
pub mod game_screens;
pub mod header;
pub mod hero;
pub mod registry;
pub mod wealth;

pub use content::{KnowledgeCard, MobileBankingModel, TestimonialModel};
pub use footer::{FooterModel, SiteFooter};
pub use game_screens::{GameScreenModel, GameStartScreenModel};
pub use header::{HeaderModel, SiteHeader};
pub use hero::{BannerModel, HeroModel};
pub use registry::{ComponentError, ComponentRegistry};
pub use wealth::{WealthManagement, WealthModel};

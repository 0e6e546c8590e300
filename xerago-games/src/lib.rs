pub mod builder;
pub mod models;
pub mod pick_a_gift;
pub mod redeem;
pub mod scratch_card;
pub mod wheel;

pub use builder::{build_config, GameError, GameKind};
pub use models::{ConfigSource, GameConfig, PrizeEntry, SegmentEntry, Weight};
pub use pick_a_gift::PickAGiftModel;
pub use scratch_card::ScratchCardModel;
pub use wheel::WheelSpinGameModel;

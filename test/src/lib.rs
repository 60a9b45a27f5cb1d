pub mod local_link;
pub mod test_roster;

pub use local_link::LocalLink;
pub use test_roster::TestRoster;

use ctc_shared::{CtcConfig, MapInfo, Position};

/// Map used across the integration tests: a 20x15 tile arena with the coin
/// spawning in the middle
pub fn test_map() -> MapInfo {
    MapInfo::new(Position::new(320.0, 240.0))
        .with_bounds(ctc_shared::MapBounds::from_tiles(20, 15, 32.0))
}

pub fn test_config() -> CtcConfig {
    CtcConfig::default()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

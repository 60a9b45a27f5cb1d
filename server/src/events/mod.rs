mod match_events;

pub use match_events::{MatchEvent, MatchEvents};

use std::collections::BTreeMap;

use trench_engine::Rng;

/// Score a location needs before the next one on the world map opens.
pub const WORLD_GATE: i64 = 10;
/// Score a location needs before its second fishing spot opens.
pub const SUB_GATE: i64 = 5;
/// Score awarded for landing a fish.
pub const REWARD: i64 = 5;

/// Map tiles are 16px squares.
pub const TILE: f32 = 16.0;

const SCORE: &str = "score";

/// (name, row, col) of every world map location, in unlock order.
const LOCATIONS: [(&str, u32, u32); 8] = [
    ("crocodile island", 2, 3),
    ("zambezi", 7, 4),
    ("boiling pot", 8, 8),
    ("baobab island", 8, 12),
    ("falty rocks", 4, 13),
    ("tranquil isle", 8, 17),
    ("Mosi-oa-Tunya", 3, 15),
    ("devils pool", 3, 5),
];

/// (row, col) of the fishing spots inside a location.
pub const SUB_LOCATIONS: [(u32, u32); 2] = [(4, 4), (5, 16)];

const FORTUNES: [&str; 9] = [
    "Fishing is a dirty game\nBut someone has to do it!",
    "My little mermaid",
    "Time Attack!",
    "Use them wisely",
    "There's plenty fish in the sea",
    "Don't count your fish\nbefore they're caught!",
    "Like a fish needs water",
    "Fish or cut bait",
    "Every fish has It's day",
];

pub const GUIDE: &str = "Hint:
Move the hook above the fish to bait.
use arrow keys to maintain...
acceleration of the hook.
fishing is about patience. enjoy";

/// A fishing location and its saved state.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// 1-based id shown on the map label.
    pub id: u32,
    pub name: &'static str,
    pub row: u32,
    pub col: u32,
    /// Saved key/value state. Always holds `score`.
    pub state: BTreeMap<String, i64>,
}

impl Location {
    pub fn new(id: u32, name: &'static str, row: u32, col: u32) -> Self {
        let mut state = BTreeMap::new();
        state.insert(SCORE.to_string(), 0);
        Self { id, name, row, col, state }
    }

    pub fn score(&self) -> i64 {
        self.state.get(SCORE).copied().unwrap_or(0)
    }

    /// Add to the score and return the new value.
    pub fn add_score(&mut self, points: i64) -> i64 {
        let score = self.state.entry(SCORE.to_string()).or_insert(0);
        *score += points;
        *score
    }

    /// Fishing spot `index` is open once the location has scored `SUB_GATE`.
    pub fn spot_unlocked(&self, index: usize) -> bool {
        index == 0 || self.score() >= SUB_GATE
    }

    /// `key: value` pairs joined by spaces, as shown in the HUD.
    pub fn state_line(&self) -> String {
        self.state
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Everything that outlives a single slide. Slides refer to locations by index.
#[derive(Debug, Clone)]
pub struct Session {
    pub locations: Vec<Location>,
}

impl Session {
    pub fn new() -> Self {
        let locations = LOCATIONS
            .iter()
            .enumerate()
            .map(|(i, &(name, row, col))| Location::new(i as u32 + 1, name, row, col))
            .collect();
        Self { locations }
    }

    pub fn location(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    pub fn location_mut(&mut self, index: usize) -> Option<&mut Location> {
        self.locations.get_mut(index)
    }

    /// Location `index` is open once the previous one has scored `WORLD_GATE`.
    pub fn location_unlocked(&self, index: usize) -> bool {
        match index.checked_sub(1) {
            None => true,
            Some(prev) => self.locations.get(prev).map(|l| l.score() >= WORLD_GATE).unwrap_or(false),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// A random fortune, quoted, for the loading screen.
pub fn fortune(rng: &mut Rng) -> String {
    let text = rng.choose(&FORTUNES).copied().unwrap_or(FORTUNES[0]);
    format!("\"{}\"", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_are_numbered_from_one() {
        let session = Session::new();
        assert_eq!(session.locations.len(), 8);
        assert_eq!(session.locations[0].id, 1);
        assert_eq!(session.locations[0].name, "crocodile island");
        assert_eq!(session.locations[7].id, 8);
        assert!(session.locations.iter().all(|l| l.score() == 0));
    }

    #[test]
    fn world_gate_needs_previous_score() {
        let mut session = Session::new();
        assert!(session.location_unlocked(0));
        assert!(!session.location_unlocked(1));

        session.locations[0].add_score(5);
        assert!(!session.location_unlocked(1));
        session.locations[0].add_score(5);
        assert!(session.location_unlocked(1));
        assert!(!session.location_unlocked(2), "only the next location opens");
        assert!(!session.location_unlocked(8), "out of range stays closed");
    }

    #[test]
    fn spot_gate_needs_own_score() {
        let mut location = Location::new(1, "test", 0, 0);
        assert!(location.spot_unlocked(0));
        assert!(!location.spot_unlocked(1));
        assert_eq!(location.add_score(SUB_GATE), SUB_GATE);
        assert!(location.spot_unlocked(1));
    }

    #[test]
    fn state_line_lists_entries() {
        let mut location = Location::new(1, "test", 0, 0);
        location.add_score(REWARD);
        assert_eq!(location.state_line(), "score: 5");
    }

    #[test]
    fn fortunes_are_quoted() {
        let mut rng = Rng::new(7);
        for _ in 0..20 {
            let text = fortune(&mut rng);
            assert!(text.starts_with('"') && text.ends_with('"'), "{}", text);
        }
    }
}

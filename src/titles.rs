//! Rank titles awarded on the game-over screen

/// Score thresholds, ascending
const TITLES: [(u32, &str); 11] = [
    (0, "Egg Dweller"),
    (10, "Hatchling"),
    (20, "Backyard Explorer"),
    (30, "Local Celebrity"),
    (40, "Town Favorite"),
    (50, "Regional Hero"),
    (60, "National Idol"),
    (70, "World Superstar"),
    (80, "Legendary Aviator"),
    (90, "Cosmic Chicken"),
    (100, "Guardian of the Galaxy"),
];

/// Highest title whose threshold the score reaches
pub fn rank_title(score: u32) -> &'static str {
    TITLES
        .iter()
        .rev()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, title)| *title)
        .unwrap_or(TITLES[0].1)
}

//! D&D 5th Edition calculation rules.
//!
//! Free functions so the formulas can be used (and tested) without a
//! character record. [`crate::Character`] is built on top of these.

use crate::entities::ClassLevel;
use std::collections::BTreeMap;

/// Base armor class before the dexterity modifier.
pub const UNARMORED_BASE_AC: i32 = 10;

/// Ability modifier: floor((score - 10) / 2).
pub fn ability_modifier(score: i32) -> i32 {
    // D&D uses floor division, Rust's / rounds toward zero
    let diff = score - 10;
    if diff >= 0 {
        diff / 2
    } else {
        (diff - 1) / 2
    }
}

/// Proficiency bonus: ceil(level / 4) + 1.
///
/// Level 0 (no classes) yields 1.
pub fn proficiency_bonus(level: u32) -> i32 {
    level.div_ceil(4) as i32 + 1
}

/// Twice the average roll of an n-sided die.
///
/// The average of 1..=n is (n + 1) / 2, so doubling keeps it integral and
/// lets hit point totals be floored exactly once.
pub fn average_die_roll_halves(sides: u32) -> i64 {
    i64::from(sides) + 1
}

/// Total character level across all classes.
pub fn total_level(classes: &[ClassLevel]) -> u32 {
    classes.iter().map(|c| c.level).sum()
}

/// Maximum hit points.
///
/// At total level 1: the first class's full hit die plus the constitution
/// modifier. Above level 1: for each class, level x (average die roll +
/// constitution modifier), summed and floored at the end.
pub fn max_hit_points(classes: &[ClassLevel], constitution_modifier: i32) -> i32 {
    let level = total_level(classes);
    if level == 0 {
        return 0;
    }
    if level == 1 {
        let first_die = classes.first().map(|c| c.hit_dice as i32).unwrap_or(0);
        return first_die + constitution_modifier;
    }

    let total_halves: i64 = classes
        .iter()
        .map(|c| {
            i64::from(c.level)
                * (average_die_roll_halves(c.hit_dice) + 2 * i64::from(constitution_modifier))
        })
        .sum();

    total_halves.div_euclid(2) as i32
}

/// Hit dice pool, e.g. `"1d10 + 4d6"`.
///
/// Levels are grouped by die size; the resulting terms are sorted as strings.
pub fn hit_dice_summary(classes: &[ClassLevel]) -> String {
    let mut by_die: BTreeMap<u32, u32> = BTreeMap::new();
    for class in classes {
        *by_die.entry(class.hit_dice).or_insert(0) += class.level;
    }

    let mut terms: Vec<String> = by_die
        .into_iter()
        .map(|(die, count)| format!("{}d{}", count, die))
        .collect();
    terms.sort();
    terms.join(" + ")
}

/// Unarmored armor class: 10 + dexterity modifier.
pub fn armor_class(dexterity_modifier: i32) -> i32 {
    UNARMORED_BASE_AC + dexterity_modifier
}

/// Format a modifier with an explicit sign: `+3`, `+0`, `-1`.
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{}", modifier)
    } else {
        modifier.to_string()
    }
}

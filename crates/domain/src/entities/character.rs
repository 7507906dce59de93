//! Character - a character base plus runtime play state
//!
//! Everything derived (modifiers, saves, skills, AC, max HP) is recomputed on
//! each call from the immutable [`CharacterBase`]. Only inspiration and hit
//! point tracking are stored here.

use crate::entities::{ClassLevel, CharacterBase, RacialTrait};
use crate::game_systems::dnd5e;
use crate::types::{Ability, Size, Skill};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    base: CharacterBase,
    inspired: bool,
    current_hit_points: i32,
    temporary_hit_points: i32,
}

impl Character {
    /// Wrap a base record. Starts uninspired at full hit points.
    pub fn new(base: CharacterBase) -> Self {
        let max = dnd5e::max_hit_points(
            &base.classes,
            dnd5e::ability_modifier(base.base_ability_scores.constitution),
        );
        Self {
            base,
            inspired: false,
            current_hit_points: max,
            temporary_hit_points: 0,
        }
    }

    pub fn base(&self) -> &CharacterBase {
        &self.base
    }

    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.base.name
    }

    pub fn player_name(&self) -> &str {
        &self.base.player_name
    }

    pub fn classes(&self) -> &[ClassLevel] {
        &self.base.classes
    }

    pub fn background(&self) -> &str {
        &self.base.background.name
    }

    pub fn race(&self) -> &str {
        &self.base.race.name
    }

    pub fn subrace(&self) -> &str {
        &self.base.race.subrace.name
    }

    pub fn alignment(&self) -> &str {
        &self.base.alignment
    }

    pub fn languages(&self) -> &[String] {
        &self.base.race.languages
    }

    pub fn speed(&self) -> u32 {
        self.base.race.speed
    }

    pub fn size(&self) -> Size {
        self.base.race.size
    }

    pub fn ideals(&self) -> &[String] {
        &self.base.ideals
    }

    pub fn bonds(&self) -> &[String] {
        &self.base.bonds
    }

    pub fn flaws(&self) -> &[String] {
        &self.base.flaws
    }

    /// Race traits followed by subrace traits.
    pub fn racial_traits(&self) -> Vec<RacialTrait> {
        self.base
            .race
            .traits
            .iter()
            .chain(self.base.race.subrace.traits.iter())
            .cloned()
            .collect()
    }

    // -------------------------------------------------------------------------
    // Derived stats
    // -------------------------------------------------------------------------

    /// Sum of all class levels.
    pub fn level(&self) -> u32 {
        dnd5e::total_level(&self.base.classes)
    }

    pub fn proficiency_bonus(&self) -> i32 {
        dnd5e::proficiency_bonus(self.level())
    }

    pub fn ability_score(&self, ability: Ability) -> i32 {
        self.base.base_ability_scores.get(ability)
    }

    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        dnd5e::ability_modifier(self.ability_score(ability))
    }

    pub fn is_proficient_in_save(&self, ability: Ability) -> bool {
        self.base.saving_throw_proficiencies.contains(&ability)
    }

    pub fn saving_throw(&self, ability: Ability) -> i32 {
        let modifier = self.ability_modifier(ability);
        if self.is_proficient_in_save(ability) {
            modifier + self.proficiency_bonus()
        } else {
            modifier
        }
    }

    pub fn skill_ability(&self, skill: Skill) -> Ability {
        skill.ability()
    }

    pub fn is_proficient_in_skill(&self, skill: Skill) -> bool {
        self.base.skill_proficiencies.contains(&skill)
    }

    pub fn skill_modifier(&self, skill: Skill) -> i32 {
        let modifier = self.ability_modifier(self.skill_ability(skill));
        if self.is_proficient_in_skill(skill) {
            modifier + self.proficiency_bonus()
        } else {
            modifier
        }
    }

    /// Skill modifier with an explicit sign, e.g. "+5" or "-1".
    pub fn skill_display(&self, skill: Skill) -> String {
        dnd5e::format_modifier(self.skill_modifier(skill))
    }

    pub fn armor_class(&self) -> i32 {
        dnd5e::armor_class(self.ability_modifier(Ability::Dexterity))
    }

    pub fn max_hit_points(&self) -> i32 {
        dnd5e::max_hit_points(
            &self.base.classes,
            self.ability_modifier(Ability::Constitution),
        )
    }

    /// Hit dice pool, e.g. "1d10 + 4d6".
    pub fn max_hit_dice(&self) -> String {
        dnd5e::hit_dice_summary(&self.base.classes)
    }

    // -------------------------------------------------------------------------
    // Inspiration
    // -------------------------------------------------------------------------

    pub fn has_inspiration(&self) -> bool {
        self.inspired
    }

    pub fn inspire(&mut self) {
        self.inspired = true;
    }

    pub fn use_inspiration(&mut self) {
        self.inspired = false;
    }

    // -------------------------------------------------------------------------
    // Hit point tracking
    // -------------------------------------------------------------------------

    pub fn current_hit_points(&self) -> i32 {
        self.current_hit_points
    }

    pub fn temporary_hit_points(&self) -> i32 {
        self.temporary_hit_points
    }

    /// Apply damage. Temporary hit points absorb it first; current hit points
    /// never drop below zero.
    pub fn take_damage(&mut self, amount: u32) {
        let amount = clamp_amount(amount);
        let absorbed = amount.min(self.temporary_hit_points);
        self.temporary_hit_points -= absorbed;
        self.current_hit_points = self
            .current_hit_points
            .saturating_sub(amount - absorbed)
            .max(0);
    }

    /// Restore hit points, capped at the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.current_hit_points = self
            .current_hit_points
            .saturating_add(clamp_amount(amount))
            .min(self.max_hit_points());
    }

    /// Temporary hit points don't stack: keep whichever is higher.
    pub fn set_temporary_hit_points(&mut self, amount: u32) {
        self.temporary_hit_points = self.temporary_hit_points.max(clamp_amount(amount));
    }
}

/// Hit point amounts beyond `i32::MAX` behave as `i32::MAX`.
fn clamp_amount(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}

impl From<CharacterBase> for Character {
    fn from(base: CharacterBase) -> Self {
        Self::new(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Background, Race, Subrace};
    use crate::types::AbilityScores;
    use std::collections::BTreeMap;

    fn test_base(classes: Vec<ClassLevel>, scores: AbilityScores) -> CharacterBase {
        CharacterBase {
            name: "Varis Skyshadow".to_string(),
            player_name: "Chris".to_string(),
            classes,
            race: Race {
                name: "Elf".to_string(),
                subrace: Subrace {
                    name: "High Elf".to_string(),
                    ability_score_increase: BTreeMap::new(),
                    traits: vec![RacialTrait::new("Cantrip", "Know one cantrip.")],
                },
                age: 750,
                ability_score_increase: BTreeMap::new(),
                size: Size::Medium,
                speed: 30,
                languages: vec!["Common".to_string(), "Elvish".to_string()],
                traits: vec![
                    RacialTrait::new("Darkvision", "See in the dark."),
                    RacialTrait::new("Trance", "Meditate instead of sleeping."),
                ],
            },
            background: Background {
                name: "Disavowed Noble".to_string(),
            },
            alignment: "Neutral Good".to_string(),
            base_ability_scores: scores,
            skill_proficiencies: vec![Skill::Acrobatics, Skill::Arcana, Skill::Persuasion],
            saving_throw_proficiencies: vec![Ability::Dexterity, Ability::Charisma],
            ideals: vec![],
            bonds: vec![],
            flaws: vec![],
        }
    }

    fn varis() -> Character {
        Character::new(test_base(
            vec![
                ClassLevel::new("Sorcerer", 4, 6),
                ClassLevel::new("Fighter", 1, 10),
            ],
            AbilityScores::new(6, 16, 14, 12, 10, 18),
        ))
    }

    #[test]
    fn level_and_proficiency_bonus() {
        let character = varis();
        assert_eq!(character.level(), 5);
        assert_eq!(character.proficiency_bonus(), 3);
    }

    #[test]
    fn saving_throws_add_proficiency_only_when_proficient() {
        let character = varis();
        // DEX 16 -> +3, proficient -> +6
        assert_eq!(character.saving_throw(Ability::Dexterity), 6);
        // STR 6 -> -2, not proficient
        assert_eq!(character.saving_throw(Ability::Strength), -2);
        // CHA 18 -> +4, proficient -> +7
        assert_eq!(character.saving_throw(Ability::Charisma), 7);
    }

    #[test]
    fn skill_modifiers_follow_governing_ability() {
        let character = varis();
        assert_eq!(character.skill_modifier(Skill::Acrobatics), 6);
        assert_eq!(character.skill_modifier(Skill::Stealth), 3);
        assert_eq!(character.skill_modifier(Skill::Arcana), 4);
        assert_eq!(character.skill_modifier(Skill::Athletics), -2);
        assert_eq!(character.skill_display(Skill::Persuasion), "+7");
        assert_eq!(character.skill_display(Skill::Medicine), "+0");
        assert_eq!(character.skill_display(Skill::Athletics), "-2");
    }

    #[test]
    fn armor_class_is_ten_plus_dex() {
        assert_eq!(varis().armor_class(), 13);
    }

    #[test]
    fn hit_points_start_at_max() {
        let character = varis();
        // CON 14 -> +2; 4 * 5.5 + 1 * 7.5 = 29.5 -> 29
        assert_eq!(character.max_hit_points(), 29);
        assert_eq!(character.current_hit_points(), 29);
        assert_eq!(character.temporary_hit_points(), 0);
        assert_eq!(character.max_hit_dice(), "1d10 + 4d6");
    }

    #[test]
    fn level_one_max_hp_uses_flat_die() {
        let character = Character::new(test_base(
            vec![ClassLevel::new("Sorcerer", 1, 6)],
            AbilityScores::new(10, 10, 14, 10, 10, 10),
        ));
        assert_eq!(character.max_hit_points(), 8);
    }

    #[test]
    fn inspiration_toggle() {
        let mut character = varis();
        assert!(!character.has_inspiration());
        character.inspire();
        assert!(character.has_inspiration());
        character.use_inspiration();
        assert!(!character.has_inspiration());
    }

    #[test]
    fn racial_traits_list_race_then_subrace() {
        let names: Vec<String> = varis().racial_traits().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Darkvision", "Trance", "Cantrip"]);
    }

    #[test]
    fn temporary_hit_points_absorb_damage_first() {
        let mut character = varis();
        character.set_temporary_hit_points(5);
        character.take_damage(8);
        assert_eq!(character.temporary_hit_points(), 0);
        assert_eq!(character.current_hit_points(), 26);

        character.take_damage(100);
        assert_eq!(character.current_hit_points(), 0);
    }

    #[test]
    fn healing_is_capped_at_max() {
        let mut character = varis();
        character.take_damage(10);
        character.heal(4);
        assert_eq!(character.current_hit_points(), 23);
        character.heal(50);
        assert_eq!(character.current_hit_points(), 29);
    }

    #[test]
    fn temporary_hit_points_do_not_stack() {
        let mut character = varis();
        character.set_temporary_hit_points(6);
        character.set_temporary_hit_points(3);
        assert_eq!(character.temporary_hit_points(), 6);
    }

    #[test]
    fn huge_damage_drops_to_zero() {
        for amount in [u32::MAX, 3_000_000_000, i32::MAX as u32 + 1] {
            let mut character = varis();
            character.set_temporary_hit_points(5);
            character.take_damage(amount);
            assert_eq!(character.current_hit_points(), 0, "damage {amount}");
            assert_eq!(character.temporary_hit_points(), 0, "damage {amount}");
        }
    }

    #[test]
    fn huge_healing_stops_at_max() {
        for amount in [i32::MAX as u32, u32::MAX] {
            let mut character = varis();
            character.take_damage(20);
            character.heal(amount);
            assert_eq!(character.current_hit_points(), 29, "healing {amount}");
        }
    }

    #[test]
    fn huge_temporary_hit_points_saturate() {
        let mut character = varis();
        character.set_temporary_hit_points(u32::MAX);
        assert_eq!(character.temporary_hit_points(), i32::MAX);

        character.take_damage(u32::MAX);
        assert_eq!(character.temporary_hit_points(), 0);
        assert_eq!(character.current_hit_points(), 29);
    }

    #[test]
    fn pass_through_getters() {
        let character = varis();
        assert_eq!(character.race(), "Elf");
        assert_eq!(character.subrace(), "High Elf");
        assert_eq!(character.background(), "Disavowed Noble");
        assert_eq!(character.speed(), 30);
        assert_eq!(character.size(), Size::Medium);
        assert_eq!(character.languages(), ["Common", "Elvish"]);
    }
}

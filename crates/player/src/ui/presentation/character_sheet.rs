//! Character sheet view-model
//!
//! Flattens a [`Character`] into display strings. The terminal shell prints
//! it through `Display`.

use std::fmt;

use ttrpgz_domain::game_systems::dnd5e::format_modifier;
use ttrpgz_domain::{Ability, Character, Skill};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityRow {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub score: i32,
    pub modifier: String,
    pub saving_throw: String,
    pub save_proficient: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRow {
    pub name: &'static str,
    pub ability: &'static str,
    pub modifier: String,
    pub proficient: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitRow {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSheetView {
    pub name: String,
    pub player_name: String,
    /// "Sorcerer 4 / Fighter 1"
    pub classes: String,
    pub level: u32,
    /// "High Elf (Elf)"
    pub race: String,
    pub size: &'static str,
    pub background: String,
    pub alignment: String,
    pub proficiency_bonus: String,
    pub inspiration: bool,
    pub armor_class: i32,
    pub speed: String,
    pub hit_points: String,
    pub hit_dice: String,
    pub abilities: Vec<AbilityRow>,
    pub skills: Vec<SkillRow>,
    pub traits: Vec<TraitRow>,
    pub languages: String,
    pub ideals: Vec<String>,
    pub bonds: Vec<String>,
    pub flaws: Vec<String>,
}

impl CharacterSheetView {
    pub fn from_character(character: &Character) -> Self {
        let classes = character
            .classes()
            .iter()
            .map(|class| format!("{} {}", class.name, class.level))
            .collect::<Vec<_>>()
            .join(" / ");

        let race = if character.subrace().is_empty() {
            character.race().to_string()
        } else {
            format!("{} ({})", character.subrace(), character.race())
        };

        let mut hit_points = format!(
            "{} / {}",
            character.current_hit_points(),
            character.max_hit_points()
        );
        if character.temporary_hit_points() > 0 {
            hit_points.push_str(&format!(" (+{} temp)", character.temporary_hit_points()));
        }

        let abilities = Ability::ALL
            .iter()
            .map(|&ability| AbilityRow {
                name: ability.display_name(),
                abbreviation: ability.abbreviation(),
                score: character.ability_score(ability),
                modifier: format_modifier(character.ability_modifier(ability)),
                saving_throw: format_modifier(character.saving_throw(ability)),
                save_proficient: character.is_proficient_in_save(ability),
            })
            .collect();

        let skills = Skill::ALL
            .iter()
            .map(|&skill| SkillRow {
                name: skill.display_name(),
                ability: character.skill_ability(skill).abbreviation(),
                modifier: character.skill_display(skill),
                proficient: character.is_proficient_in_skill(skill),
            })
            .collect();

        let traits = character
            .racial_traits()
            .into_iter()
            .map(|t| TraitRow {
                name: t.name,
                description: t.description,
            })
            .collect();

        Self {
            name: character.name().to_string(),
            player_name: character.player_name().to_string(),
            classes,
            level: character.level(),
            race,
            size: character.size().name(),
            background: character.background().to_string(),
            alignment: character.alignment().to_string(),
            proficiency_bonus: format_modifier(character.proficiency_bonus()),
            inspiration: character.has_inspiration(),
            armor_class: character.armor_class(),
            speed: format!("{} ft.", character.speed()),
            hit_points,
            hit_dice: character.max_hit_dice(),
            abilities,
            skills,
            traits,
            languages: character.languages().join(", "),
            ideals: character.ideals().to_vec(),
            bonds: character.bonds().to_vec(),
            flaws: character.flaws().to_vec(),
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn marker(proficient: bool) -> &'static str {
    if proficient {
        "*"
    } else {
        " "
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "{heading}")?;
    for item in items {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}

impl fmt::Display for CharacterSheetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Level {} {}", self.level, self.classes)?;
        writeln!(
            f,
            "{} | {} | {} | {}",
            self.race, self.size, self.background, self.alignment
        )?;
        writeln!(f, "Player: {}", self.player_name)?;
        writeln!(f)?;
        writeln!(
            f,
            "AC {}   Speed {}   HP {}   Hit Dice {}",
            self.armor_class, self.speed, self.hit_points, self.hit_dice
        )?;
        writeln!(
            f,
            "Proficiency Bonus {}   Inspiration {}",
            self.proficiency_bonus,
            if self.inspiration { "yes" } else { "no" }
        )?;

        writeln!(f)?;
        writeln!(f, "Abilities          Score  Mod  Save")?;
        for row in &self.abilities {
            writeln!(
                f,
                "  {:<16} {:>5} {:>4} {:>4}{}",
                row.name,
                row.score,
                row.modifier,
                row.saving_throw,
                marker(row.save_proficient)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Skills")?;
        for row in &self.skills {
            writeln!(
                f,
                " {} {:<16} ({}) {:>3}",
                marker(row.proficient),
                row.name,
                row.ability,
                row.modifier
            )?;
        }

        if !self.traits.is_empty() {
            writeln!(f)?;
            writeln!(f, "Racial Traits")?;
            for row in &self.traits {
                writeln!(f, "  {}: {}", row.name, row.description)?;
            }
        }

        if !self.languages.is_empty() {
            writeln!(f)?;
            writeln!(f, "Languages: {}", self.languages)?;
        }

        write_list(f, "Ideals", &self.ideals)?;
        write_list(f, "Bonds", &self.bonds)?;
        write_list(f, "Flaws", &self.flaws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use ttrpgz_domain::{
        AbilityScores, Background, CharacterBase, ClassLevel, Race, RacialTrait, Size, Subrace,
    };

    fn character() -> Character {
        Character::new(CharacterBase {
            name: "Grimm Blackstone".into(),
            player_name: "Sam".into(),
            classes: vec![ClassLevel::new("Fighter", 3, 10)],
            race: Race {
                name: "Dwarf".into(),
                subrace: Subrace {
                    name: "Hill Dwarf".into(),
                    ability_score_increase: BTreeMap::new(),
                    traits: vec![RacialTrait::new("Dwarven Toughness", "More hit points.")],
                },
                age: 120,
                ability_score_increase: BTreeMap::new(),
                size: Size::Medium,
                speed: 25,
                languages: vec!["Common".into(), "Dwarvish".into()],
                traits: vec![RacialTrait::new("Darkvision", "See in the dark.")],
            },
            background: Background {
                name: "Soldier".into(),
            },
            alignment: "Lawful Neutral".into(),
            base_ability_scores: AbilityScores::new(16, 8, 14, 10, 12, 10),
            skill_proficiencies: vec![Skill::Athletics],
            saving_throw_proficiencies: vec![Ability::Strength, Ability::Constitution],
            ideals: vec!["Duty.".into()],
            bonds: vec![],
            flaws: vec![],
        })
    }

    #[test]
    fn builds_rows_for_every_ability_and_skill() {
        let view = CharacterSheetView::from_character(&character());
        assert_eq!(view.abilities.len(), 6);
        assert_eq!(view.skills.len(), 18);

        let strength = &view.abilities[0];
        assert_eq!(strength.abbreviation, "STR");
        assert_eq!(strength.modifier, "+3");
        assert_eq!(strength.saving_throw, "+5");
        assert!(strength.save_proficient);

        let dexterity = &view.abilities[1];
        assert_eq!(dexterity.modifier, "-1");
        assert_eq!(dexterity.saving_throw, "-1");

        let athletics = view.skills.iter().find(|s| s.name == "Athletics").unwrap();
        assert_eq!(athletics.modifier, "+5");
        assert!(athletics.proficient);
    }

    #[test]
    fn summarises_header_fields() {
        let mut character = character();
        character.take_damage(5);
        character.set_temporary_hit_points(3);
        let view = CharacterSheetView::from_character(&character);

        assert_eq!(view.classes, "Fighter 3");
        assert_eq!(view.race, "Hill Dwarf (Dwarf)");
        assert_eq!(view.speed, "25 ft.");
        assert_eq!(view.armor_class, 9);
        assert_eq!(view.proficiency_bonus, "+2");
        assert_eq!(view.hit_dice, "3d10");
        assert_eq!(view.hit_points, "17 / 22 (+3 temp)");
        assert_eq!(view.languages, "Common, Dwarvish");
        assert_eq!(view.traits[0].name, "Darkvision");
        assert_eq!(view.traits[1].name, "Dwarven Toughness");
    }

    #[test]
    fn renders_plain_text() {
        let text = CharacterSheetView::from_character(&character()).render();
        assert!(text.starts_with("Grimm Blackstone\nLevel 3 Fighter 3\n"));
        assert!(text.contains("Hill Dwarf (Dwarf) | Medium | Soldier | Lawful Neutral"));
        assert!(text.contains("Dwarven Toughness: More hit points."));
        assert!(text.contains("Ideals\n  - Duty."));
        assert!(!text.contains("Bonds"));
    }
}

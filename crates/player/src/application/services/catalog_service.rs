//! Catalog Service - character and campaign lookups
//!
//! Serves a built-in catalog until the backend exposes character endpoints.
//! Every lookup logs what it was asked for and always succeeds.

use std::collections::BTreeMap;

use ttrpgz_domain::{
    Ability, AbilityScores, Background, CampaignListing, Character, CharacterBase, CharacterId,
    CharacterListing, ClassLevel, Race, RacialTrait, Size, Skill, Subrace, UserId,
};

#[derive(Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch the immutable definition of a character.
    pub async fn fetch_character_base(&self, character_id: &CharacterId) -> CharacterBase {
        tracing::info!(character_id = %character_id, "Fetching character base");
        varis_skyshadow()
    }

    /// Fetch a character ready for play (full hit points, no inspiration).
    pub async fn fetch_character(&self, character_id: &CharacterId) -> Character {
        Character::new(self.fetch_character_base(character_id).await)
    }

    pub async fn fetch_characters(&self, user_id: &UserId) -> Vec<CharacterListing> {
        tracing::info!(user_id = %user_id, "Fetching characters");
        vec![
            CharacterListing::new("1", "Varis Skyshadow"),
            CharacterListing::new("2", "Grimm Blackstone"),
            CharacterListing::new("3", "Arianna Silverwind"),
            CharacterListing::new("4", "Kaelin Swiftfoot"),
        ]
    }

    pub async fn fetch_campaigns(&self, user_id: &UserId) -> Vec<CampaignListing> {
        tracing::info!(user_id = %user_id, "Fetching campaigns");
        vec![
            CampaignListing::new("1", "Blue Campaign"),
            CampaignListing::new("2", "Gold Campaign"),
            CampaignListing::new("3", "Joliet Campaign"),
            CampaignListing::new("4", "Jordan's Campaign"),
        ]
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn varis_skyshadow() -> CharacterBase {
    CharacterBase {
        name: "Varis Skyshadow".into(),
        player_name: "Chris Sherman".into(),
        classes: vec![
            ClassLevel::new("Sorcerer", 4, 6),
            ClassLevel::new("Fighter", 1, 10),
        ],
        race: Race {
            name: "Elf".into(),
            age: 750,
            ability_score_increase: BTreeMap::from([(Ability::Dexterity, 2)]),
            size: Size::Medium,
            speed: 30,
            languages: strings(&["Common", "Elvish"]),
            traits: vec![
                RacialTrait::new(
                    "Darkvision",
                    "You can see in dim light within 60 feet of you as if it were bright \
                     light, and in darkness as if it were dim light. You can't discern color \
                     in darkness, only shades of gray.",
                ),
                RacialTrait::new(
                    "Fey Ancestry",
                    "You have advantage on saving throws against being charmed, and magic \
                     can't put you to sleep.",
                ),
                RacialTrait::new(
                    "Trance",
                    "Elves do not sleep. Instead they meditate deeply, remaining \
                     semi-conscious, for 4 hours a day. The Common word for this meditation \
                     is \"trance.\" While meditating, you dream after a fashion; such dreams \
                     are actually mental exercises that have become reflexive after years of \
                     practice. After resting in this way, you gain the same benefit a human \
                     would from 8 hours of sleep.",
                ),
                RacialTrait::new(
                    "Keen Senses",
                    "You have proficiency in the Perception skill.",
                ),
            ],
            subrace: Subrace {
                name: "High Elf".into(),
                ability_score_increase: BTreeMap::from([(Ability::Intelligence, 1)]),
                traits: vec![
                    RacialTrait::new(
                        "Elf Weapon Training",
                        "You have proficiency with the longsword, shortsword, shortbow, and \
                         longbow.",
                    ),
                    RacialTrait::new(
                        "Cantrip",
                        "You know one cantrip of your choice from the wizard spell list. \
                         Intelligence is your spellcasting ability for it.",
                    ),
                    RacialTrait::new(
                        "Extra Language",
                        "You can speak, read, and write one extra language.",
                    ),
                ],
            },
        },
        background: Background {
            name: "Disavowed Noble".into(),
        },
        alignment: "Neutral Good".into(),
        base_ability_scores: AbilityScores::new(6, 16, 14, 12, 10, 18),
        saving_throw_proficiencies: vec![Ability::Dexterity, Ability::Charisma],
        skill_proficiencies: vec![
            Skill::Acrobatics,
            Skill::Arcana,
            Skill::Deception,
            Skill::Insight,
            Skill::Perception,
            Skill::Persuasion,
        ],
        ideals: strings(&[
            "I must prove that I am worthy of my family name.",
            "I will do whatever it takes to protect my friends.",
        ]),
        bonds: strings(&[
            "I will not rest until my family is avenged.",
            "I will do whatever it takes to protect my friends.",
        ]),
        flaws: strings(&[
            "I am quick to anger and slow to forgive.",
            "I am haunted by the memory of my family's death.",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn character_base_is_a_valid_record() {
        let base = CatalogService::new()
            .fetch_character_base(&CharacterId::new("1"))
            .await;
        assert_eq!(base.name, "Varis Skyshadow");
        assert!(base.validate().is_ok());
    }

    #[tokio::test]
    async fn character_starts_ready_for_play() {
        let character = CatalogService::new()
            .fetch_character(&CharacterId::new("1"))
            .await;
        assert_eq!(character.level(), 5);
        assert_eq!(character.proficiency_bonus(), 3);
        assert_eq!(character.max_hit_points(), 29);
        assert_eq!(character.current_hit_points(), 29);
        assert_eq!(character.armor_class(), 13);
        assert_eq!(character.max_hit_dice(), "1d10 + 4d6");
        assert_eq!(character.saving_throw(Ability::Charisma), 7);
        assert_eq!(character.skill_modifier(Skill::Perception), 3);
        assert_eq!(character.racial_traits().len(), 7);
        assert!(!character.has_inspiration());
    }

    #[tokio::test]
    async fn listings_have_distinct_ids() {
        let service = CatalogService::new();
        let user = UserId::new("user-42");

        let characters = service.fetch_characters(&user).await;
        assert_eq!(characters.len(), 4);
        assert_eq!(characters[0].name, "Varis Skyshadow");

        let campaigns = service.fetch_campaigns(&user).await;
        let ids: Vec<&str> = campaigns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(campaigns[3].name, "Jordan's Campaign");
    }
}

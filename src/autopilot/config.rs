//! Turn planner configuration.

use serde::{Deserialize, Serialize};

use crate::core::error::check_index;
use crate::core::{BattleError, Result, COMBATANT_SLOTS, SKILL_SLOTS};

/// Whether, and on whom, a skill is auto-cast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillTarget {
    /// Never cast automatically.
    #[default]
    Off,
    /// Cast with no target prompt (self or party-wide skills).
    NoTarget,
    /// Cast on the party member in this slot (0-2).
    Ally(u8),
}

/// Planner behavior knobs.
///
/// Deserialized configs go through the same ally-slot check as
/// [`PlannerConfig::with_auto_skill`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlannerConfig")]
pub struct PlannerConfig {
    /// Auto-cast table, indexed `[combatant][skill]`.
    pub auto_skills: [[SkillTarget; SKILL_SLOTS]; COMBATANT_SLOTS],

    /// Outside the final stage, fire one special when some enemy has more HP than this.
    pub special_threshold: u64,

    /// Search the best combo; when false cards are tapped left to right.
    pub smart_cards: bool,

    /// Pick a target every turn instead of only when it matters.
    pub always_target: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            auto_skills: [[SkillTarget::Off; SKILL_SLOTS]; COMBATANT_SLOTS],
            special_threshold: 50_000,
            smart_cards: true,
            always_target: false,
        }
    }
}

/// Unchecked wire form of [`PlannerConfig`].
#[derive(Deserialize)]
struct RawPlannerConfig {
    auto_skills: [[SkillTarget; SKILL_SLOTS]; COMBATANT_SLOTS],
    special_threshold: u64,
    smart_cards: bool,
    always_target: bool,
}

impl TryFrom<RawPlannerConfig> for PlannerConfig {
    type Error = BattleError;

    fn try_from(raw: RawPlannerConfig) -> Result<Self> {
        for target in raw.auto_skills.iter().flatten() {
            check_target(*target)?;
        }
        Ok(Self {
            auto_skills: raw.auto_skills,
            special_threshold: raw.special_threshold,
            smart_cards: raw.smart_cards,
            always_target: raw.always_target,
        })
    }
}

fn check_target(target: SkillTarget) -> Result<()> {
    if let SkillTarget::Ally(ally) = target {
        check_index("ally", usize::from(ally), COMBATANT_SLOTS)?;
    }
    Ok(())
}

impl PlannerConfig {
    /// Configure one auto-cast entry.
    pub fn with_auto_skill(
        mut self,
        combatant: usize,
        skill: usize,
        target: SkillTarget,
    ) -> Result<Self> {
        check_index("combatant", combatant, COMBATANT_SLOTS)?;
        check_index("skill", skill, SKILL_SLOTS)?;
        check_target(target)?;
        self.auto_skills[combatant][skill] = target;
        Ok(self)
    }

    #[must_use]
    pub fn with_special_threshold(mut self, hp: u64) -> Self {
        self.special_threshold = hp;
        self
    }

    #[must_use]
    pub fn with_smart_cards(mut self, enabled: bool) -> Self {
        self.smart_cards = enabled;
        self
    }

    #[must_use]
    pub fn with_always_target(mut self, enabled: bool) -> Self {
        self.always_target = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.special_threshold, 50_000);
        assert!(config.smart_cards);
        assert!(!config.always_target);
        assert!(config.auto_skills.iter().flatten().all(|t| *t == SkillTarget::Off));
    }

    #[test]
    fn test_auto_skill_builder() {
        let config = PlannerConfig::default()
            .with_auto_skill(0, 2, SkillTarget::Ally(1))
            .unwrap()
            .with_auto_skill(2, 0, SkillTarget::NoTarget)
            .unwrap();

        assert_eq!(config.auto_skills[0][2], SkillTarget::Ally(1));
        assert_eq!(config.auto_skills[2][0], SkillTarget::NoTarget);
    }

    #[test]
    fn test_auto_skill_rejects_bad_indices() {
        assert!(matches!(
            PlannerConfig::default().with_auto_skill(3, 0, SkillTarget::NoTarget),
            Err(BattleError::IndexOutOfRange { what: "combatant", .. })
        ));
        assert!(PlannerConfig::default().with_auto_skill(0, 0, SkillTarget::Ally(3)).is_err());
    }

    #[test]
    fn test_serialization() {
        let config = PlannerConfig::default()
            .with_auto_skill(1, 1, SkillTarget::Ally(0))
            .unwrap()
            .with_special_threshold(120_000);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PlannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_bad_ally() {
        let mut json: serde_json::Value = serde_json::to_value(PlannerConfig::default()).unwrap();
        json["auto_skills"][0][1] = serde_json::json!({ "Ally": 7 });
        assert!(serde_json::from_value::<PlannerConfig>(json.clone()).is_err());

        json["auto_skills"][0][1] = serde_json::json!({ "Ally": 2 });
        let config: PlannerConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.auto_skills[0][1], SkillTarget::Ally(2));
    }
}

//! Skill definition loader.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use game_core::{Rank, SkillDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, parse_ron, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SkillsRon {
    skills: Vec<SkillDefinition>,
}

/// Loader for skill definitions.
///
/// Each skill lists one profile per reachable rank, Novice first. Records
/// are resolved once here into typed [`SkillDefinition`]s shared by `Arc`.
pub struct SkillLoader;

impl SkillLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Arc<SkillDefinition>>> {
        let content = read_file(path)?;
        Self::parse(path, &content)
    }

    pub(crate) fn parse(path: &Path, content: &str) -> LoadResult<Vec<Arc<SkillDefinition>>> {
        let data: SkillsRon = parse_ron(path, content)?;

        let mut ids = HashSet::new();
        for skill in &data.skills {
            anyhow::ensure!(ids.insert(skill.id), "duplicate skill id {}", skill.id);
            anyhow::ensure!(!skill.ranks.is_empty(), "skill '{}' has no ranks", skill.name);
            anyhow::ensure!(
                skill.ranks.len() <= Rank::count(),
                "skill '{}' has {} ranks, at most {} allowed",
                skill.name,
                skill.ranks.len(),
                Rank::count()
            );
            if let Some(profile) = skill.ranks.iter().find(|p| p.success_rate > 100) {
                anyhow::bail!(
                    "skill '{}' has success rate {}%",
                    skill.name,
                    profile.success_rate
                );
            }
        }

        Ok(data.skills.into_iter().map(Arc::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::SkillId;

    const MINING: &str = r#"(skills: [
        (id: SkillId(1), name: "Mining", ranks: [
            (load_ms: 800, use_ms: 400, cooldown_ms: 1500, exp_threshold: 30,
             ap_cost: 1, success_rate: 60, exp_per_use: 10),
            (load_ms: 700, use_ms: 400, cooldown_ms: 1200, exp_threshold: 60,
             ap_cost: 2, success_rate: 70, exp_per_use: 8),
        ]),
    ])"#;

    #[test]
    fn parses_rank_profiles() {
        let skills = SkillLoader::parse(Path::new("skills.ron"), MINING).unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].id, SkillId(1));
        assert_eq!(skills[0].ranks[1].success_rate, 70);
    }

    #[test]
    fn rejects_rankless_skill() {
        let text = r#"(skills: [(id: SkillId(2), name: "Nothing", ranks: [])])"#;
        let error = SkillLoader::parse(Path::new("skills.ron"), text).unwrap_err();
        assert!(error.to_string().contains("no ranks"));
    }
}

//! Loaded content bundle.

use std::sync::Arc;

use game_core::{
    BagLayout, GameConfig, ItemCatalog, ItemDefinition, ItemHandle, ItemOracle, SkillDefinition,
    SkillId,
};

use crate::loaders::{LoadResult, MapDefinition};

/// Everything loaded from one data directory, with cross-references checked.
#[derive(Debug, Clone)]
pub struct Content {
    config: GameConfig,
    items: ItemCatalog,
    bags: Vec<BagLayout>,
    skills: Vec<Arc<SkillDefinition>>,
    map: MapDefinition,
}

impl Content {
    /// Bundles loaded records. Fails if the default bag, a map resource's
    /// item, or its skill is not defined.
    pub fn new(
        config: GameConfig,
        items: Vec<ItemDefinition>,
        bags: Vec<BagLayout>,
        skills: Vec<Arc<SkillDefinition>>,
        map: MapDefinition,
    ) -> LoadResult<Self> {
        let content = Self {
            config,
            items: ItemCatalog::new(items),
            bags,
            skills,
            map,
        };

        anyhow::ensure!(
            content.bag_layout(&content.config.default_bag).is_some(),
            "default bag '{}' is not defined",
            content.config.default_bag
        );
        for node in &content.map.resources {
            anyhow::ensure!(
                content.item(node.item).is_some(),
                "map resource yields unknown {}",
                node.item
            );
            anyhow::ensure!(
                content.skill(node.skill).is_some(),
                "map resource needs unknown {}",
                node.skill
            );
        }
        Ok(content)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn items(&self) -> Vec<&ItemDefinition> {
        self.items.all_definitions()
    }

    pub fn item(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.items.definition(handle)
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn bags(&self) -> &[BagLayout] {
        &self.bags
    }

    pub fn bag_layout(&self, kind: &str) -> Option<&BagLayout> {
        self.bags.iter().find(|layout| layout.kind == kind)
    }

    pub fn skills(&self) -> &[Arc<SkillDefinition>] {
        &self.skills
    }

    pub fn skill(&self, id: SkillId) -> Option<&Arc<SkillDefinition>> {
        self.skills.iter().find(|skill| skill.id == id)
    }

    pub fn map(&self) -> &MapDefinition {
        &self.map
    }
}

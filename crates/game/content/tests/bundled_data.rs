use std::fs;
use std::path::{Path, PathBuf};

use game_content::ContentFactory;
use game_core::{GridBag, ItemHandle, SkillId};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn bundled_data_loads_and_cross_checks() {
    let content = ContentFactory::new(data_dir())
        .load_all("meadow")
        .expect("bundled content is valid");

    let bag_layout = content
        .bag_layout(&content.config().default_bag)
        .expect("default bag exists");
    let mut bag = GridBag::new(bag_layout);
    let shield = content.item(ItemHandle(5)).expect("shield");
    assert_eq!(bag.add_item(shield, 1), 1);

    let mining = content.skill(SkillId(1)).expect("mining");
    assert!(mining.ranks.len() > 1);
    assert!(!content.map().resources.is_empty());
}

#[test]
fn dangling_resource_reference_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    for file in ["items.ron", "bags.ron", "config.toml"] {
        fs::copy(data_dir().join(file), dir.path().join(file)).expect("copy");
    }
    fs::write(
        dir.path().join("skills.ron"),
        r#"(skills: [(id: SkillId(1), name: "Mining", ranks: [
            (load_ms: 1, use_ms: 1, cooldown_ms: 1, exp_threshold: 1, ap_cost: 1,
             success_rate: 50, exp_per_use: 1)
        ])])"#,
    )
    .expect("write skills");
    fs::create_dir(dir.path().join("maps")).expect("maps dir");
    fs::write(
        dir.path().join("maps").join("tiny.ron"),
        r#"(
            name: "tiny",
            dimensions: (4, 4),
            spawn: (x: 0.0, y: 0.0),
            resources: [
                (position: (x: 2.0, y: 2.0), item: ItemHandle(1), quantity: 1,
                 skill: SkillId(9), charges: 1),
            ],
        )"#,
    )
    .expect("write map");

    let error = ContentFactory::new(dir.path())
        .load_all("tiny")
        .expect_err("skill 9 is unknown");
    assert!(error.to_string().contains("skill:9"));
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ContentFactory::new(dir.path())
        .load_config()
        .expect("defaults");
    assert_eq!(config, game_core::GameConfig::default());
}

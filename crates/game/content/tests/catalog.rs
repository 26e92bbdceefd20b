//! Cross-game record arithmetic over the built-in catalog.

use std::sync::Arc;

use stat_content::{CatalogError, Game, StatCatalog, builtin_schema};
use stat_core::{RecordError, StatRecord};
use strum::IntoEnumIterator;

fn catalog() -> StatCatalog {
    StatCatalog::builtin().expect("built-in schemas are valid")
}

#[test]
fn every_game_has_a_schema() {
    let catalog = catalog();

    for game in Game::iter() {
        let schema = catalog.schema(game).unwrap();
        let expected = builtin_schema(game);

        assert_eq!(schema.id(), game.url_name());
        assert_eq!(schema.stat_names(), expected.stat_names);
        assert_eq!(schema.zero_growth(), expected.zero_growth);
    }
    assert_eq!(catalog.registry().len(), 6);
}

#[test]
fn gba_titles_share_stat_lists_but_not_identity() {
    let catalog = catalog();
    let blazing = catalog.schema(Game::BlazingSword).unwrap();
    let sacred = catalog.schema(Game::TheSacredStones).unwrap();

    assert_eq!(blazing.stat_names(), sacred.stat_names());
    assert!(!Arc::ptr_eq(&blazing, &sacred));

    // Same stat list, so arithmetic across the two titles aligns fully.
    let mut level_cap = StatRecord::filled(blazing, 20);
    let mut sacred_stats = StatRecord::filled(sacred, 25);
    sacred_stats.set("Con", 7).unwrap();
    level_cap.min_with(&sacred_stats).unwrap();

    assert_eq!(level_cap.get("Con").unwrap(), 7);
    assert_eq!(level_cap.get("HP").unwrap(), 20);
}

#[test]
fn genealogy_record_aligns_against_radiant_superset() {
    let catalog = catalog();
    let mut genealogy = catalog
        .record(
            Game::GenealogyOfTheHolyWar,
            [
                ("HP", 30),
                ("Str", 10),
                ("Mag", 0),
                ("Skl", 8),
                ("Spd", 9),
                ("Lck", 5),
                ("Def", 7),
                ("Res", 1),
            ],
        )
        .unwrap();
    let mut promotion_bonus = catalog.zeroed(Game::PathOfRadiance).unwrap();
    promotion_bonus.set("HP", 5).unwrap();
    promotion_bonus.set("Def", 2).unwrap();
    promotion_bonus.set("Wt", 3).unwrap();

    genealogy.add(&promotion_bonus).unwrap();
    assert_eq!(genealogy.get("HP").unwrap(), 35);
    assert_eq!(genealogy.get("Def").unwrap(), 9);
    assert_eq!(genealogy.get("Str").unwrap(), 10);

    // The radiant record has stats genealogy lacks, so the reverse fails.
    let err = promotion_bonus.add(&genealogy).unwrap_err();
    assert_eq!(
        err,
        RecordError::SchemaMismatch {
            stat: "Mov".into(),
            receiver: "path-of-radiance".into(),
            operand: "genealogy-of-the-holy-war".into(),
        }
    );
}

#[test]
fn thracia_and_gba_do_not_align() {
    let catalog = catalog();
    let mut thracia = catalog.zeroed(Game::Thracia776).unwrap();
    let gba = catalog.zeroed(Game::SwordOfSeals).unwrap();

    let err = thracia.max_with(&gba).unwrap_err();

    assert!(matches!(err, RecordError::SchemaMismatch { ref stat, .. } if stat == "Str"));
}

#[test]
fn incomplete_mapping_reports_every_missing_stat() {
    let err = catalog()
        .record(
            Game::TheSacredStones,
            [("HP", 18), ("Pow", 5), ("Skl", 6), ("Spd", 7), ("Lck", 4)],
        )
        .unwrap_err();

    assert_eq!(
        err,
        CatalogError::Record(RecordError::MissingStats {
            schema: "the-sacred-stones".into(),
            missing: vec!["Def".into(), "Res".into(), "Con".into(), "Mov".into()],
        })
    );
}

#[test]
fn growable_stats_exclude_zero_growth() {
    let catalog = catalog();

    for game in Game::iter() {
        let record = catalog.zeroed(game).unwrap();
        let growable = record.growable_stats();
        let schema = record.schema();

        assert_eq!(growable.len() + schema.zero_growth().len(), schema.len());
        assert!(growable.iter().all(|stat| !schema.is_zero_growth(stat)));
    }
}

#[cfg(feature = "loaders")]
#[test]
fn toml_catalog_matches_builtin_registry() {
    use stat_content::SchemaCatalogLoader;

    let mut toml = String::new();
    for game in Game::iter() {
        let schema = builtin_schema(game);
        toml.push_str(&format!(
            "[[schema]]\ngame = \"{}\"\nstat_names = {:?}\nzero_growth = {:?}\n\n",
            game.url_name(),
            schema.stat_names,
            schema.zero_growth,
        ));
    }

    let loaded = SchemaCatalogLoader::from_toml_str(&toml).unwrap();
    let builtin = catalog();

    for game in Game::iter() {
        assert_eq!(
            *loaded.lookup(game.url_name()).unwrap(),
            *builtin.schema(game).unwrap()
        );
    }
}

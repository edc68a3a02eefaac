use figment::providers::Serialized;
use figment::{Figment, Jail};
use glam::IVec2;
use gridwalk::config::{Config, OutputFormat};
use gridwalk::error::ConfigError;
use gridwalk::traversal::TraversalKind;
use speculoos::prelude::*;

#[test]
fn test_defaults() {
    let config = Config::from_figment(Figment::from(Serialized::defaults(Config::default()))).unwrap();

    assert_that(&config.traversal).is_equal_to(TraversalKind::BreadthFirst);
    assert_that(&config.canvas_size).is_equal_to(900);
    assert_that(&config.cell_size).is_equal_to(30);
    assert_that(&config.format).is_equal_to(OutputFormat::Text);
    assert_that(&config.start_pixel()).is_equal_to(IVec2::ZERO);
    assert_that(&config.layout().unwrap().side()).is_equal_to(30);
}

#[test]
fn test_environment_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("GRIDWALK_TRAVERSAL", "dfs");
        jail.set_env("GRIDWALK_CANVAS_SIZE", "100");
        jail.set_env("GRIDWALK_CELL_SIZE", "10");
        jail.set_env("GRIDWALK_START_X", "45");
        jail.set_env("GRIDWALK_START_Y", "12");
        jail.set_env("GRIDWALK_FORMAT", "json");

        let config = Config::load().map_err(|e| e.to_string())?;
        assert_that(&config.traversal).is_equal_to(TraversalKind::DepthFirst);
        assert_that(&config.format).is_equal_to(OutputFormat::Json);
        assert_that(&config.start_pixel()).is_equal_to(IVec2::new(45, 12));

        let layout = config.layout().map_err(|e| e.to_string())?;
        assert_that(&layout.side()).is_equal_to(10);
        assert_that(&layout.vertex_at_pixel(config.start_pixel()).unwrap()).is_equal_to(14);
        Ok(())
    });
}

#[test]
fn test_unknown_traversal_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("GRIDWALK_TRAVERSAL", "astar");
        assert!(matches!(Config::load(), Err(ConfigError::Extract(_))));
        Ok(())
    });
}

#[test]
fn test_invalid_sizes_are_rejected() {
    let zero_cell = Config::figment().merge(("cell_size", 0));
    assert!(matches!(Config::from_figment(zero_cell), Err(ConfigError::Invalid(_))));

    let tiny_canvas = Config::figment().merge(("canvas_size", 10)).merge(("cell_size", 20));
    assert!(matches!(Config::from_figment(tiny_canvas), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_indivisible_canvas_fails_at_layout() {
    let config = Config::from_figment(Config::figment().merge(("canvas_size", 100)).merge(("cell_size", 30))).unwrap();
    assert_that(&config.layout()).is_err();
}

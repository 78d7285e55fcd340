#[cfg(test)]
mod tests {
    use pwlab::engine::password::GenerationStrategy;
    use pwlab::libs::config::{AnalyzerConfig, Config, ExportConfig, GeneratorConfig};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives each test its own scratch directory for config files.
    struct ConfigTestContext {
        temp_dir: TempDir,
        default_count: i64,
        list_limit: i64,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                default_count: 12,
                list_limit: 8,
            }
        }
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join("config.json")
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.generator.is_none());
        assert!(config.analyzer.is_none());
        assert!(config.export.is_none());

        assert_eq!(config.generator(), GeneratorConfig::default());
        assert_eq!(config.generator().default_count, 5);
        assert_eq!(config.generator().strategy, GenerationStrategy::AttemptBudget);
        assert_eq!(config.analyzer().list_limit, 5);
        assert_eq!(config.export().passwords_file, "passwords.txt");
        assert_eq!(config.export().patterns_file, "binary_strings.csv");
        assert!(config.export().directory.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            generator: Some(GeneratorConfig {
                default_count: ctx.default_count,
                strategy: GenerationStrategy::Exact,
            }),
            analyzer: Some(AnalyzerConfig { list_limit: ctx.list_limit }),
            export: Some(ExportConfig {
                directory: Some(ctx.temp_dir.path().join("out")),
                ..ExportConfig::default()
            }),
        };
        config.save_to(&ctx.config_path()).unwrap();

        let read_config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.generator().default_count, 12);
        assert_eq!(read_config.analyzer().list_limit, 8);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_module_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), r#"{ "analyzer": { "list_limit": 3 } }"#).unwrap();

        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config.analyzer().list_limit, 3);
        assert_eq!(config.generator(), GeneratorConfig::default());
        assert_eq!(config.export(), ExportConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_strategy_defaults_when_missing(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), r#"{ "generator": { "default_count": 7 } }"#).unwrap();

        let generator = Config::read_from(&ctx.config_path()).unwrap().generator();
        assert_eq!(generator.default_count, 7);
        assert_eq!(generator.strategy, GenerationStrategy::AttemptBudget);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_strategy_uses_cli_names(ctx: &mut ConfigTestContext) {
        Config {
            generator: Some(GeneratorConfig::default()),
            ..Config::default()
        }
        .save_to(&ctx.config_path())
        .unwrap();
        let content = std::fs::read_to_string(ctx.config_path()).unwrap();
        assert!(content.contains(r#""strategy": "budget""#), "{}", content);

        std::fs::write(ctx.config_path(), r#"{ "generator": { "default_count": 3, "strategy": "exact" } }"#).unwrap();
        assert_eq!(Config::read_from(&ctx.config_path()).unwrap().generator().strategy, GenerationStrategy::Exact);

        std::fs::write(ctx.config_path(), r#"{ "generator": { "default_count": 3, "strategy": "budget" } }"#).unwrap();
        assert_eq!(Config::read_from(&ctx.config_path()).unwrap().generator().strategy, GenerationStrategy::AttemptBudget);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_modules_are_not_written(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.config_path()).unwrap();
        let content = std::fs::read_to_string(ctx.config_path()).unwrap();
        assert_eq!(content.trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path()).is_err());
    }

    #[test]
    fn test_export_resolve() {
        let export = ExportConfig::default();
        assert_eq!(export.resolve("a.txt"), PathBuf::from("a.txt"));

        let export = ExportConfig {
            directory: Some(PathBuf::from("reports")),
            ..ExportConfig::default()
        };
        assert_eq!(export.resolve("a.txt"), PathBuf::from("reports").join("a.txt"));
    }
}

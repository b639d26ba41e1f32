//! Library integration tests.

use envdoctor::EnvDoctorError;

#[test]
fn error_types_are_public() {
    let err = EnvDoctorError::UnknownRule {
        id: "no-such-rule".into(),
    };
    assert!(err.to_string().contains("no-such-rule"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> envdoctor::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use envdoctor::cli::{Cli, Commands};

    let cli = Cli::parse_from(["envdoctor", "check", "--strict"]);

    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.strict);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn stages_compose_through_public_api() {
    use envdoctor::generate::{generate, ArtifactKind};
    use envdoctor::lint::validate;
    use envdoctor::parser::parse;

    let doc = parse("NODE_ENV=production\nSTRIPE_SECRET_KEY=sk_live_abcdefghijklmnop\n");
    let results = validate(&doc);
    let outputs = generate(&doc, &results);

    assert_eq!(results.warnings.len(), 1);
    assert_eq!(results.warnings[0].rule_id.as_str(), "stripe-key-pair");
    assert!(outputs
        .get(ArtifactKind::Checklist)
        .contains("- [ ] Using correct Stripe keys for environment (test vs live)"));
}

#[test]
fn artifact_kinds_map_to_distinct_files() {
    use envdoctor::generate::ArtifactKind;

    let files: Vec<_> = ArtifactKind::ALL.iter().map(|k| k.file_name()).collect();
    assert_eq!(
        files,
        [".env.example", "DEPLOYMENT.md", "docker-compose.yml", "vercel.json"]
    );
}

#[test]
fn custom_registry_through_config() {
    use envdoctor::config::EnvDoctorConfig;
    use envdoctor::parser::parse;

    let mut config = EnvDoctorConfig::default();
    config.rules.disabled = vec!["missing-node-env".into()];

    let results = config.registry().unwrap().validate(&parse("A=1"));
    assert!(results.is_empty());
}

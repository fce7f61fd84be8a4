//! Error paths across the source, ranking and configuration layers.

use pathrank::{
    load_candidates, load_engine, rank, rank_source, CandidateStore, ConfigLoadError, MatchError,
    PathRankConfig, PipelineError, RankConfig, RankingEngine, SourceConfig, SourceError,
};

#[test]
fn long_query_that_matches_is_ranked() {
    let long = "ab_".repeat(100);
    let candidate = format!("src/{long}.rs");
    let hits = rank(&[candidate.as_str()], &long, &RankConfig::default()).expect("rank");
    assert_eq!(hits.len(), 1);
    assert!(hits[0].score > 5.0);
}

#[test]
fn zero_result_limits_are_rejected() {
    let zero_results = RankConfig::default().with_max_results(0);
    assert!(matches!(
        rank(&["a"], "a", &zero_results),
        Err(MatchError::InvalidConfig(_))
    ));

    let engine = RankingEngine::with_defaults(vec!["a".to_string()]);
    assert!(matches!(
        engine.rank_with_limit("a", 0),
        Err(MatchError::InvalidInput(_))
    ));
}

#[test]
fn no_match_is_not_an_error() {
    assert!(rank(&["base/logging.h"], "zzz", &RankConfig::default())
        .expect("rank")
        .is_empty());
}

#[test]
fn empty_path_candidate() {
    assert!(rank(&[""], "a", &RankConfig::default()).expect("rank").is_empty());

    let hits = rank(&[""], "", &RankConfig::default()).expect("rank");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 5.0);
}

#[test]
fn trailing_slash_has_an_empty_basename() {
    assert!(rank(&["base/"], "b", &RankConfig::default()).expect("rank").is_empty());
}

#[test]
fn store_is_unavailable_before_first_load() {
    let store = CandidateStore::from_config(&SourceConfig::in_memory(vec!["a".into()]))
        .expect("valid config");
    assert!(matches!(store.snapshot(), Err(SourceError::Unavailable(_))));
}

#[test]
fn missing_list_file_surfaces_as_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_candidates(&SourceConfig::file_list(dir.path().join("nope.txt"))).unwrap_err();
    assert!(matches!(err, PipelineError::Source(SourceError::Io(_))));
}

#[test]
fn git_source_outside_a_repository_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = rank_source(&SourceConfig::git(dir.path()), "a", &RankConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::Source(SourceError::Git(_))));
}

#[test]
fn invalid_source_config_is_rejected_before_loading() {
    let err = load_candidates(&SourceConfig::file_list("")).unwrap_err();
    assert!(matches!(err, PipelineError::Source(SourceError::InvalidConfig(_))));
}

#[test]
fn bad_yaml_is_a_config_error() {
    assert!(matches!(
        PathRankConfig::from_yaml("version: [unterminated"),
        Err(ConfigLoadError::YamlParse(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        PathRankConfig::from_file(dir.path().join("missing.yaml")),
        Err(ConfigLoadError::FileRead(_))
    ));
}

#[test]
fn config_errors_convert_into_pipeline_errors() {
    let err: PipelineError = PathRankConfig::from_yaml("version: \"9\"\n")
        .unwrap_err()
        .into();
    assert!(err.to_string().contains("unsupported config version: 9"));
}

#[test]
fn load_engine_rejects_invalid_matcher_settings() {
    let config = PathRankConfig {
        source: SourceConfig::in_memory(vec!["a.rs".into()]),
        matcher: pathrank::MatcherYamlConfig {
            max_results: 0,
            ..Default::default()
        },
        ..PathRankConfig::default()
    };
    assert!(matches!(
        load_engine(&config),
        Err(PipelineError::Match(MatchError::InvalidConfig(_)))
    ));
}

//! Resolution tests using recording collaborators.
//!
//! The target manager and config source are fakes so each test can observe
//! exactly which routing decision the resolver made.

use gobuild_core::config::{
    BUILD_FLAGS_ENV, DISABLE_MODULE_BOM_ENV, IMPORT_PATH_ENV, LDFLAGS_ENV, PATH_LIST_SEPARATOR,
    TARGETS_ENV,
};
use gobuild_core::{
    BuildpackYmlReader, ConfigurationResolver, Error, ErrorKind, PartialConfiguration,
};
use gobuild_test_utils::{FakeConfigSource, FakeTargetManager, TargetCall, TestProject, env_of};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn file_config() -> PartialConfiguration {
    PartialConfiguration {
        targets: strings(&["./from-file"]),
        flags: strings(&["-ldflags=old", "-race"]),
        import_path: Some("example.com/from-file".to_string()),
    }
}

// ==========================================================================
// Defaults
// ==========================================================================

#[rstest]
#[case(true)]
#[case(false)]
fn test_no_config_no_env_uses_defaults_and_marker(#[case] with_go_mod: bool) {
    let mut project = TestProject::new();
    if with_go_mod {
        project = project.with_go_mod("example.com/app");
    }
    let targets = FakeTargetManager::new(&["./cmd/app"]);
    let source = FakeConfigSource::absent();
    let env = env_of(&[]);

    let config = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap();

    assert_eq!(config.targets, strings(&["./cmd/app"]));
    assert!(config.flags.is_empty());
    assert_eq!(config.import_path, None);
    assert_eq!(config.generate_bom, with_go_mod);
    assert_eq!(
        targets.calls(),
        vec![TargetCall::GenerateDefaults {
            working_dir: project.working_dir().to_string(),
        }]
    );
}

#[test]
fn test_buildpack_version_is_forwarded_to_source() {
    let project = TestProject::new();
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::absent();
    let env = env_of(&[]);

    ConfigurationResolver::new(&targets, &source, &env)
        .resolve("2.3.4", &project.working_dir())
        .unwrap();

    assert_eq!(source.versions(), vec!["2.3.4"]);
}

// ==========================================================================
// Targets
// ==========================================================================

#[test]
fn test_file_targets_are_validated() {
    let project = TestProject::new();
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::with(file_config());
    let env = env_of(&[]);

    let config = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap();

    assert_eq!(config.targets, strings(&["./from-file"]));
    assert_eq!(
        targets.calls(),
        vec![TargetCall::CleanAndValidate {
            targets: strings(&["./from-file"]),
            working_dir: project.working_dir().to_string(),
        }]
    );
}

#[test]
fn test_env_targets_replace_file_targets() {
    let project = TestProject::new();
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::with(file_config());
    let raw_targets = format!("a{PATH_LIST_SEPARATOR}b");
    let env = env_of(&[(TARGETS_ENV, raw_targets.as_str())]);

    let config = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap();

    assert_eq!(config.targets, strings(&["a", "b"]));
    assert_eq!(
        targets.calls(),
        vec![TargetCall::CleanAndValidate {
            targets: strings(&["a", "b"]),
            working_dir: project.working_dir().to_string(),
        }]
    );
}

#[test]
fn test_empty_env_targets_discard_file_targets() {
    let project = TestProject::new();
    let targets = FakeTargetManager::new(&["./default"]);
    let source = FakeConfigSource::with(file_config());
    let env = env_of(&[(TARGETS_ENV, "")]);

    let config = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap();

    assert_eq!(config.targets, strings(&["./default"]));
    assert!(matches!(
        targets.calls().as_slice(),
        [TargetCall::GenerateDefaults { .. }]
    ));
}

#[test]
fn test_target_rejection_propagates() {
    let project = TestProject::new();
    let targets = FakeTargetManager::new(&["."]).rejecting("does not exist");
    let source = FakeConfigSource::absent();
    let env = env_of(&[(TARGETS_ENV, "./missing")]);

    let err = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap_err();

    assert!(matches!(err, Error::InvalidTarget { ref reason, .. } if reason == "does not exist"));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

// ==========================================================================
// Flags and import path
// ==========================================================================

#[test]
fn test_ldflags_override_replaces_file_ldflags_in_place() {
    let project = TestProject::new();
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::with(file_config());
    let env = env_of(&[(LDFLAGS_ENV, "-X main.version=1.0")]);

    let config = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap();

    assert_eq!(config.flags, strings(&["-ldflags=-X main.version=1.0", "-race"]));
}

#[test]
fn test_build_flags_override_replaces_file_flags() {
    let project = TestProject::new();
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::with(file_config());
    let env = env_of(&[(BUILD_FLAGS_ENV, "-buildmode=default -trimpath")]);

    let config = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap();

    assert_eq!(config.flags, strings(&["-buildmode=default", "-trimpath"]));
}

#[test]
fn test_multi_word_ldflags_fail_resolution() {
    let project = TestProject::new().with_go_mod("example.com/app");
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::with(file_config());
    let env = env_of(&[(LDFLAGS_ENV, r#"-X a=1" "-X b=2"#)]);

    let err = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap_err();

    assert!(matches!(err, Error::AmbiguousLdflags { .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[rstest]
#[case(None, Some("example.com/from-file"))]
#[case(Some("example.com/from-env"), Some("example.com/from-env"))]
#[case(Some(""), None)]
fn test_import_path_precedence(#[case] env_value: Option<&str>, #[case] expected: Option<&str>) {
    let project = TestProject::new();
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::with(file_config());
    let env = match env_value {
        Some(value) => env_of(&[(IMPORT_PATH_ENV, value)]),
        None => env_of(&[]),
    };

    let config = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap();

    assert_eq!(config.import_path.as_deref(), expected);
}

// ==========================================================================
// Module BOM
// ==========================================================================

#[rstest]
#[case(Some("true"), true, false)]
#[case(Some("true"), false, false)]
#[case(Some("false"), true, true)]
#[case(Some("false"), false, false)]
#[case(None, true, true)]
#[case(None, false, false)]
fn test_module_bom_decision(
    #[case] switch: Option<&str>,
    #[case] with_go_mod: bool,
    #[case] expected: bool,
) {
    let mut project = TestProject::new();
    if with_go_mod {
        project = project.with_go_mod("example.com/app");
    }
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::absent();
    let env = match switch {
        Some(value) => env_of(&[(DISABLE_MODULE_BOM_ENV, value)]),
        None => env_of(&[]),
    };

    let config = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap();

    assert_eq!(config.generate_bom, expected);
}

#[rstest]
#[case("")]
#[case("yes")]
#[case("disabled")]
fn test_invalid_bom_switch_is_parse_error(#[case] value: &str) {
    // The switch is rejected even without go.mod, where the result would
    // have been false anyway.
    let project = TestProject::new();
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::absent();
    let env = env_of(&[(DISABLE_MODULE_BOM_ENV, value)]);

    let err = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &project.working_dir())
        .unwrap_err();

    assert!(matches!(err, Error::InvalidBool { .. }));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[cfg(unix)]
#[test]
fn test_marker_lookup_failure_is_io_error() {
    // A file used as the project root makes the go.mod lookup fail with
    // ENOTDIR rather than "not found".
    let project = TestProject::new();
    project.write("not-a-dir", "");
    let working_dir = project.working_dir().join("not-a-dir");
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::absent();
    let env = env_of(&[]);

    let err = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &working_dir)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
}

#[cfg(unix)]
#[test]
fn test_config_lookup_failure_is_io_error() {
    // Same root as above, but the buildpack.yml lookup fails first and
    // resolution stops before any target routing.
    let project = TestProject::new();
    project.write("not-a-dir", "");
    let working_dir = project.working_dir().join("not-a-dir");
    let targets = FakeTargetManager::new(&["."]);
    let env = env_of(&[]);
    let source = BuildpackYmlReader::new(&env);

    let err = ConfigurationResolver::new(&targets, &source, &env)
        .resolve("1.0.0", &working_dir)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(targets.calls().is_empty());
}

// ==========================================================================
// Statelessness
// ==========================================================================

#[test]
fn test_repeated_resolution_is_identical() {
    let project = TestProject::new().with_go_mod("example.com/app");
    let targets = FakeTargetManager::new(&["./cmd/app"]);
    let source = FakeConfigSource::with(file_config());
    let env = env_of(&[(LDFLAGS_ENV, "-s -w"), (IMPORT_PATH_ENV, "example.com/app")]);
    let resolver = ConfigurationResolver::new(&targets, &source, &env);

    let first = resolver.resolve("1.0.0", &project.working_dir()).unwrap();
    let second = resolver.resolve("1.0.0", &project.working_dir()).unwrap();

    assert_eq!(first, second);
    assert_eq!(targets.calls().len(), 2);
}

#[test]
fn test_concurrent_resolution_of_unrelated_projects() {
    let with_module = TestProject::new().with_go_mod("example.com/a");
    let without_module = TestProject::new();
    let targets = FakeTargetManager::new(&["."]);
    let source = FakeConfigSource::absent();
    let env = env_of(&[]);
    let resolver = ConfigurationResolver::new(&targets, &source, &env);

    let (a, b) = std::thread::scope(|scope| {
        let a = scope.spawn(|| resolver.resolve("1.0.0", &with_module.working_dir()));
        let b = scope.spawn(|| resolver.resolve("1.0.0", &without_module.working_dir()));
        (a.join().unwrap(), b.join().unwrap())
    });

    assert!(a.unwrap().generate_bom);
    assert!(!b.unwrap().generate_bom);
}

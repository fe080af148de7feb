//! Tests for proofscope-core: witnesses, scope options, profiles, errors

use proofscope_core::*;
use std::any::Any;
use std::rc::Rc;
use tempfile::TempDir;

#[derive(Debug)]
struct Party {
    name: &'static str,
}

impl Actor for Party {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// ScopeOptions
// ===========================================================================

#[test]
fn options_default_is_empty() {
    let opts = ScopeOptions::default();
    assert!(opts.witnesses.is_none());
    assert!(opts.actor.is_none());
    assert!(opts.expected_accesses.is_none());
    assert!(opts.actual_accesses.is_none());
    assert_eq!(opts.modes, ModeFlags::default());
}

#[test]
fn options_hold_only_a_weak_actor() {
    let party: Rc<dyn Actor> = Rc::new(Party { name: "alice" });
    let opts = ScopeOptions::new().with_actor(&party);
    assert_eq!(Rc::strong_count(&party), 1);

    let upgraded = opts.actor.as_ref().and_then(|w| w.upgrade()).unwrap();
    let party_ref = upgraded.as_any().downcast_ref::<Party>().unwrap();
    assert_eq!(party_ref.name, "alice");

    drop(upgraded);
    drop(party);
    assert!(opts.actor.unwrap().upgrade().is_none());
}

#[test]
fn options_keep_witness_order() {
    let opts = ScopeOptions::new().with_witnesses(vec![
        Witness::new(1u32),
        Witness::new("two"),
        Witness::new(3u32),
    ]);
    let witnesses = opts.witnesses.unwrap();
    assert_eq!(witnesses.len(), 3);
    assert_eq!(witnesses[0].downcast_ref::<u32>(), Some(&1));
    assert_eq!(witnesses[1].downcast_ref::<&str>(), Some(&"two"));
    assert_eq!(witnesses[2].downcast_ref::<u32>(), Some(&3));
}

#[test]
fn options_from_json_reads_all_flags() {
    let opts: ScopeOptions = serde_json::from_str(
        r#"{
            "expectedAccesses": 4,
            "actualAccesses": 9,
            "inProver": true,
            "inCompile": true,
            "inCheckedComputation": true,
            "inAnalyze": true
        }"#,
    )
    .unwrap();
    assert_eq!(opts.expected_accesses, Some(4));
    assert_eq!(opts.actual_accesses, Some(9));
    assert!(opts.modes.in_prover);
    assert!(opts.modes.in_compile);
    assert!(opts.modes.in_checked_computation);
    assert!(opts.modes.in_analyze);
}

#[test]
fn options_reject_negative_expectation() {
    let result = serde_json::from_str::<ScopeOptions>(r#"{"expectedAccesses": -1}"#);
    assert!(result.is_err());
}

// ===========================================================================
// ScopeProfiles
// ===========================================================================

const PROFILES: &str = r#"{
    "profiles": {
        "prove": { "expectedAccesses": 2, "inProver": true },
        "compile": { "inCompile": true }
    }
}"#;

#[test]
fn profiles_from_json() {
    let profiles = ScopeProfiles::from_json(PROFILES).unwrap();
    assert!(profiles.contains("prove"));
    assert!(profiles.contains("compile"));

    let prove = profiles.options("prove");
    assert_eq!(prove.expected_accesses, Some(2));
    assert!(prove.modes.in_prover);

    let compile = profiles.options("compile");
    assert!(compile.expected_accesses.is_none());
    assert!(compile.modes.in_compile);
}

#[test]
fn profiles_unknown_call_site_gets_empty_options() {
    let profiles = ScopeProfiles::from_json(PROFILES).unwrap();
    assert!(!profiles.contains("analyze"));
    let opts = profiles.options("analyze");
    assert!(opts.expected_accesses.is_none());
    assert_eq!(opts.modes, ModeFlags::default());
}

#[test]
fn profiles_empty_document() {
    let profiles = ScopeProfiles::from_json("{}").unwrap();
    assert!(profiles.profiles.is_empty());
}

#[test]
fn profiles_load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("profiles.json");
    std::fs::write(&path, PROFILES).unwrap();
    let profiles = ScopeProfiles::load(&path).unwrap();
    assert_eq!(profiles.profiles.len(), 2);
}

#[test]
fn profiles_load_missing_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = ScopeProfiles::load(&tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn profiles_load_malformed_file_is_json_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("profiles.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = ScopeProfiles::load(&path).unwrap_err();
    assert!(matches!(err, Error::JsonError(_)));
    assert!(!err.is_conflict());
}

// ===========================================================================
// Errors
// ===========================================================================

#[test]
fn conflict_kinds_display() {
    let no_ctx = Error::conflict(ConflictKind::NoContext);
    assert!(no_ctx.is_conflict());
    assert!(no_ctx.to_string().contains(CONFLICT_MESSAGE));
    assert!(no_ctx.to_string().contains("no context is installed"));

    let mismatch = Error::conflict(ConflictKind::CountMismatch {
        expected: Some(1),
        actual: 0,
    });
    assert!(mismatch
        .to_string()
        .contains("scope ended after 0 reads, expected 1"));

    let removed = Error::conflict(ConflictKind::Displaced { actual: 3 });
    assert!(removed.to_string().contains("already removed"));
}

#[test]
fn conflict_kind_roundtrips_through_error() {
    let kind = ConflictKind::Overread {
        expected: 2,
        actual: 3,
    };
    assert_eq!(Error::conflict(kind).conflict_kind(), Some(kind));
}

// member-gate/tests/policy_table.rs
// ============================================================================
// Module: Policy Table Tests
// Description: Classification precedence and provenance coverage.
// Purpose: Ensure table construction resolves sources deterministically.
// ============================================================================

//! Tests for policy table construction and resolution.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use common::name;
use member_gate::AccessLevel;
use member_gate::GateOptions;
use member_gate::LevelSource;
use member_gate::PolicyTable;
use member_gate::Resolution;

/// Verifies that empty options produce an empty table with the error default.
#[test]
fn empty_options_produce_empty_table() {
    let table = PolicyTable::build(&GateOptions::default(), BTreeSet::new());
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert_eq!(table.default_level(), AccessLevel::Error);
}

/// Verifies that whitelisted names classify as ignore with whitelist provenance.
#[test]
fn whitelist_names_classify_as_ignore() {
    let options = GateOptions {
        whitelist: BTreeSet::from([name("helper")]),
        ..GateOptions::default()
    };
    let table = PolicyTable::build(&options, BTreeSet::new());
    assert_eq!(
        table.resolve(&name("helper")),
        Resolution::new(AccessLevel::Ignore, LevelSource::Whitelist)
    );
    assert!(table.is_classified(&name("helper")));
}

/// Verifies that exported names classify as ignore with exported provenance.
#[test]
fn exported_names_classify_as_ignore() {
    let table = PolicyTable::build(&GateOptions::default(), BTreeSet::from([name("public_fn")]));
    assert_eq!(
        table.resolve(&name("public_fn")),
        Resolution::new(AccessLevel::Ignore, LevelSource::Exported)
    );
}

/// Verifies that whitelist provenance wins when a name is also exported.
#[test]
fn whitelist_wins_over_exported_for_provenance() {
    let options = GateOptions {
        whitelist: BTreeSet::from([name("shared")]),
        ..GateOptions::default()
    };
    let table = PolicyTable::build(&options, BTreeSet::from([name("shared")]));
    assert_eq!(
        table.resolve(&name("shared")),
        Resolution::new(AccessLevel::Ignore, LevelSource::Whitelist)
    );
    assert_eq!(table.len(), 1);
}

/// Verifies that an explicit level override beats whitelist membership.
#[test]
fn explicit_level_overrides_whitelist() {
    let options = GateOptions {
        whitelist: BTreeSet::from([name("legacy")]),
        levels: BTreeMap::from([(name("legacy"), AccessLevel::Error)]),
        ..GateOptions::default()
    };
    let table = PolicyTable::build(&options, BTreeSet::new());
    assert_eq!(
        table.resolve(&name("legacy")),
        Resolution::new(AccessLevel::Error, LevelSource::Explicit)
    );
}

/// Verifies that an explicit level override beats exported membership.
#[test]
fn explicit_level_overrides_exported() {
    let options = GateOptions {
        levels: BTreeMap::from([(name("internal_fn"), AccessLevel::Warn)]),
        ..GateOptions::default()
    };
    let table = PolicyTable::build(&options, BTreeSet::from([name("internal_fn")]));
    assert_eq!(
        table.resolve(&name("internal_fn")),
        Resolution::new(AccessLevel::Warn, LevelSource::Explicit)
    );
}

/// Verifies that unclassified names fall back to the default level.
#[test]
fn unclassified_names_fall_back_to_default() {
    let options = GateOptions {
        default_level: AccessLevel::Warn,
        ..GateOptions::default()
    };
    let table = PolicyTable::build(&options, BTreeSet::new());
    assert_eq!(
        table.resolve(&name("anything")),
        Resolution::new(AccessLevel::Warn, LevelSource::Default)
    );
    assert!(!table.is_classified(&name("anything")));
    assert!(table.is_empty());
}

/// Verifies that resolving an unclassified name never materializes an entry.
#[test]
fn resolution_does_not_materialize_entries() {
    let table = PolicyTable::build(&GateOptions::default(), BTreeSet::from([name("foo")]));
    let before = table.len();
    let _ = table.resolve(&name("missing"));
    let _ = table.resolve(&name("missing"));
    assert_eq!(table.len(), before);
}

/// Verifies that classified entries iterate in deterministic name order.
#[test]
fn classified_entries_are_name_ordered() {
    let options = GateOptions {
        whitelist: BTreeSet::from([name("zeta"), name("alpha")]),
        levels: BTreeMap::from([(name("mid"), AccessLevel::Debug)]),
        ..GateOptions::default()
    };
    let table = PolicyTable::build(&options, BTreeSet::new());
    let names: Vec<_> = table.classified().keys().cloned().collect();
    assert_eq!(names, vec![name("alpha"), name("mid"), name("zeta")]);
}

/// Verifies that the summary counts classified names per level.
#[test]
fn summary_counts_entries_by_level() {
    let options = GateOptions {
        default_level: AccessLevel::Debug,
        whitelist: BTreeSet::from([name("listed")]),
        levels: BTreeMap::from([
            (name("loud"), AccessLevel::Warn),
            (name("noisy"), AccessLevel::Warn),
            (name("blocked"), AccessLevel::Error),
        ]),
        ..GateOptions::default()
    };
    let table = PolicyTable::build(&options, BTreeSet::from([name("shipped")]));
    let summary = table.summary();
    assert_eq!(summary.default_level, AccessLevel::Debug);
    assert_eq!(summary.ignore_count, 2);
    assert_eq!(summary.warn_count, 2);
    assert_eq!(summary.debug_count, 0);
    assert_eq!(summary.error_count, 1);
    assert_eq!(summary.classified_total(), 5);
}

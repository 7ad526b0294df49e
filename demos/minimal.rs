// member-gate/demos/minimal.rs
// ============================================================================
// Module: Minimal Demo
// Description: Smallest end-to-end gate usage.
// Purpose: Show construction, guarded reads, and captured diagnostics.
// ============================================================================

//! Minimal gate walkthrough over an in-memory namespace.

#![allow(
    clippy::print_stdout,
    reason = "Demo output is intentional."
)]

use member_gate::AccessLevel;
use member_gate::GateOptions;
use member_gate::InMemoryNamespace;
use member_gate::MemberGate;
use member_gate::MemberName;
use member_gate::RecordingSink;

/// Builds the demo namespace with one exported and one private member.
fn demo_namespace() -> InMemoryNamespace<String> {
    let mut namespace = InMemoryNamespace::new();
    namespace.insert_exported("greet", "hello".to_string());
    namespace.insert_private("internal_counter", "42".to_string());
    namespace
}

/// Reads one member and prints the outcome.
fn show_read(gate: &MemberGate<InMemoryNamespace<String>, RecordingSink>, member: &str) {
    match gate.read(&MemberName::new(member)) {
        Ok(value) => println!("{member} -> {value}"),
        Err(error) => println!("{member} -> {error}"),
    }
}

/// Entry point: runs the gate in locked-down and warn modes.
fn main() {
    let sink = RecordingSink::new();

    println!("locked-down default:");
    let locked = MemberGate::new(demo_namespace(), &GateOptions::default(), sink.clone());
    show_read(&locked, "greet");
    show_read(&locked, "internal_counter");

    println!("warn mode:");
    let options = GateOptions {
        default_level: AccessLevel::Warn,
        ..GateOptions::default()
    };
    let warned = MemberGate::new(demo_namespace(), &options, sink.clone());
    show_read(&warned, "greet");
    show_read(&warned, "internal_counter");

    for diagnostic in sink.records() {
        println!("[{}] {}", diagnostic.severity, diagnostic.message);
    }
}

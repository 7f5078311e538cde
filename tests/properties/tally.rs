//! Property tests for reconciliation counting against a real filesystem.

use std::fs;
use std::path::Path;

use proptest::prelude::*;
use tempfile::TempDir;

use telegraf_deploy::application::ArtifactReconciler;
use telegraf_deploy::domain::entities::{HostFacts, RoleService, RunResult};
use telegraf_deploy::domain::policies::select_in_scope;
use telegraf_deploy::domain::services::ArtifactLayout;
use telegraf_deploy::domain::value_objects::{ContentHash, ExecutionMode};
use telegraf_deploy::infrastructure::LocalFs;

#[derive(Debug, Clone, Copy)]
enum Existing {
    Absent,
    Same,
    Different,
}

fn existing() -> impl Strategy<Value = Existing> {
    prop_oneof![
        Just(Existing::Absent),
        Just(Existing::Same),
        Just(Existing::Different),
    ]
}

fn full_server() -> HostFacts {
    let mut facts = HostFacts::server().with_domain_controller(true);
    for service in RoleService::ALL {
        facts = facts.with_service(service);
    }
    facts
}

fn seed(path: &Path, content: &str, state: Existing) {
    let content = match state {
        Existing::Absent => return,
        Existing::Same => content.to_string(),
        Existing::Different => format!("{content}# drift\n"),
    };
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: created + updated + ignored equals the ledger length, the
    /// counts match the starting state, and a second pass changes nothing.
    #[test]
    fn property_tally_matches_ledger_and_converges(
        binary_deployed in any::<bool>(),
        configs in proptest::collection::vec(existing(), 6),
    ) {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let layout = ArtifactLayout::new(source.path(), target.path().join("telegraf"));
        let in_scope = select_in_scope(&layout.catalog(), &full_server());
        prop_assert_eq!(in_scope.len(), 7);

        let agent = "#!/bin/sh\nexit 0\n";
        fs::write(layout.digest_source(), ContentHash::from_bytes(agent.as_bytes()).hex()).unwrap();

        let mut expected_created = 0;
        let mut expected_updated = 0;
        for (i, artifact) in in_scope.iter().enumerate() {
            let content = if i == 0 { agent.to_string() } else { format!("# {}\n", artifact.name) };
            fs::write(&artifact.source, &content).unwrap();

            let state = if i == 0 {
                if binary_deployed { Existing::Same } else { Existing::Absent }
            } else {
                configs[i - 1]
            };
            seed(&artifact.destination, &content, state);
            match state {
                Existing::Absent => expected_created += 1,
                Existing::Different => expected_updated += 1,
                Existing::Same => {}
            }
        }
        for dir in [layout.destination.clone(), layout.config_dir()] {
            if !dir.is_dir() {
                expected_created += 1;
            }
        }

        let reconciler = ArtifactReconciler::new(LocalFs::new());
        let mut first = RunResult::new(ExecutionMode::Normal);
        reconciler.reconcile(&layout, &in_scope, ExecutionMode::Normal, &mut first).unwrap();

        prop_assert_eq!(first.tally.total(), first.entries.len());
        prop_assert_eq!(first.entries.len(), in_scope.len() + 2);
        prop_assert_eq!(first.tally.created, expected_created);
        prop_assert_eq!(first.tally.updated, expected_updated);

        let mut second = RunResult::new(ExecutionMode::Normal);
        reconciler.reconcile(&layout, &in_scope, ExecutionMode::Normal, &mut second).unwrap();
        prop_assert_eq!(second.tally.changes(), 0);
        prop_assert_eq!(second.tally.ignored, second.entries.len());

        for artifact in &in_scope {
            prop_assert_eq!(
                fs::read(&artifact.source).unwrap(),
                fs::read(&artifact.destination).unwrap()
            );
        }
    }
}

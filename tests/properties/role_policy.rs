//! Property tests for role-conditional artifact selection.

use proptest::prelude::*;

use telegraf_deploy::domain::entities::{HostFacts, RoleService};
use telegraf_deploy::domain::policies::{select_in_scope, selected_optional, OptionalConfig};
use telegraf_deploy::domain::services::ArtifactLayout;

fn host_facts() -> impl Strategy<Value = HostFacts> {
    (
        any::<bool>(),
        any::<bool>(),
        proptest::sample::subsequence(RoleService::ALL.to_vec(), 0..=3),
    )
        .prop_map(|(is_server, is_domain_controller, services)| HostFacts {
            is_server,
            is_domain_controller,
            services: services.into_iter().collect(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a workstation never gets an optional config, whatever it reports.
    #[test]
    fn property_workstation_gets_no_optional_configs(facts in host_facts()) {
        let facts = HostFacts { is_server: false, ..facts };
        prop_assert!(selected_optional(&facts).is_empty());
    }

    /// PROPERTY: on a server each optional config is selected exactly when its role holds.
    #[test]
    fn property_server_selection_follows_roles(facts in host_facts()) {
        let facts = HostFacts { is_server: true, ..facts };
        let selected = selected_optional(&facts);

        prop_assert_eq!(
            selected.contains(&OptionalConfig::ActiveDirectory),
            facts.is_domain_controller
        );
        prop_assert_eq!(
            selected.contains(&OptionalConfig::Dns),
            facts.has_service(RoleService::DnsServer)
        );
        prop_assert_eq!(
            selected.contains(&OptionalConfig::DfsReplication),
            facts.has_service(RoleService::DfsReplication)
        );
        prop_assert_eq!(
            selected.contains(&OptionalConfig::DfsNamespace),
            facts.has_service(RoleService::DfsNamespace)
        );
    }

    /// PROPERTY: the always-deployed artifacts lead, followed by one per selected role.
    #[test]
    fn property_scope_is_base_plus_selected(facts in host_facts()) {
        let catalog = ArtifactLayout::new("/media/telegraf", "/opt/telegraf").catalog();
        let in_scope = select_in_scope(&catalog, &facts);

        prop_assert_eq!(in_scope.len(), 3 + selected_optional(&facts).len());
        prop_assert!(in_scope[..3].iter().all(|a| !a.is_optional()));
    }
}

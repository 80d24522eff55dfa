use tezcache_domain::config::RoutingConfig;

#[test]
fn test_chains_prefix_is_cacheable() {
    let routing = RoutingConfig::default();

    assert!(routing.is_cacheable("/chains/main/blocks/head"));
    assert!(routing.is_cacheable("/chains"));
    assert!(routing.is_allowed("/chains/main/blocks/100"));
}

#[test]
fn test_injection_is_passthrough_only() {
    let routing = RoutingConfig::default();

    assert!(routing.is_passthrough("/injection/operation"));
    assert!(!routing.is_cacheable("/injection/operation"));
    assert!(routing.is_allowed("/injection/operation"));
}

#[test]
fn test_passthrough_requires_exact_match() {
    let routing = RoutingConfig::default();

    assert!(!routing.is_allowed("/injection/operation/extra"));
    assert!(!routing.is_allowed("/injection"));
}

#[test]
fn test_other_paths_are_not_allowed() {
    let routing = RoutingConfig::default();

    assert!(!routing.is_allowed("/other/path"));
    assert!(!routing.is_allowed("/"));
    assert!(!routing.is_allowed("/network/connections"));
}

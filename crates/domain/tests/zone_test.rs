mod helpers;

use apexdns_domain::{RecordType, ZoneError, ZoneTable};
use helpers::{name, ZoneBuilder};

#[test]
fn test_valid_zone_builds() {
    let zone = ZoneBuilder::new().build();

    assert_eq!(zone.name(), &name("example.org"));
    assert_eq!(zone.ns_records().len(), 1);
    assert_eq!(zone.glue_records().len(), 1);
    assert!(zone.is_apex(&name("EXAMPLE.org")));
}

#[test]
fn test_ns_owner_must_be_apex() {
    let err = ZoneBuilder::new()
        .ns(&["sub.example.org 60 IN NS ns1.example.org"])
        .try_build()
        .unwrap_err();

    assert!(matches!(err, ZoneError::OwnerMismatch { kind: "NS", .. }));
}

#[test]
fn test_soa_owner_must_be_apex() {
    let err = ZoneBuilder::new()
        .soa("other.org 60 IN SOA ns1.example.org hostmaster.example.org 1 2 3 4 5")
        .try_build()
        .unwrap_err();

    assert!(matches!(err, ZoneError::OwnerMismatch { kind: "SOA", .. }));
}

#[test]
fn test_soa_slot_rejects_other_types() {
    let err = ZoneBuilder::new()
        .soa("example.org 60 IN NS ns1.example.org")
        .try_build()
        .unwrap_err();

    assert!(matches!(
        err,
        ZoneError::UnexpectedRecordType { expected: "SOA", .. }
    ));
}

#[test]
fn test_empty_ns_set_is_rejected() {
    let err = ZoneBuilder::new().ns(&[]).try_build().unwrap_err();
    assert!(matches!(err, ZoneError::MissingNs { .. }));
}

#[test]
fn test_glue_must_be_address_records() {
    let err = ZoneBuilder::new()
        .glue(&["ns1.example.org 60 IN CNAME other.example.org"])
        .try_build()
        .unwrap_err();
    assert!(matches!(err, ZoneError::UnexpectedRecordType { .. }));

    let err = ZoneBuilder::new().glue(&[]).try_build().unwrap_err();
    assert!(matches!(err, ZoneError::MissingGlue { .. }));
}

#[test]
fn test_glue_lookup_matches_owner_and_type() {
    let zone = ZoneBuilder::new()
        .glue(&[
            "ns1.example.org 60 IN AAAA 2001:db8::1",
            "ns1.example.org 60 IN A 192.168.0.1",
        ])
        .build();

    let a = zone.glue_for(&name("ns1.example.org"), RecordType::A).unwrap();
    assert_eq!(a.record_type(), RecordType::A);
    assert!(zone.glue_for(&name("ns2.example.org"), RecordType::A).is_none());
}

#[test]
fn test_known_names() {
    let zone = ZoneBuilder::new().build();

    assert!(zone.is_known_name(&name("example.org")));
    assert!(zone.is_known_name(&name("ns1.example.org")));
    assert!(!zone.is_known_name(&name("www.example.org")));
}

#[test]
fn test_orphan_glue_is_reported() {
    let zone = ZoneBuilder::new()
        .glue(&[
            "ns1.example.org 60 IN A 192.168.0.1",
            "spare.example.org 60 IN A 192.168.0.9",
        ])
        .build();

    let orphans: Vec<_> = zone.orphan_glue().collect();
    assert_eq!(orphans, vec![&name("spare.example.org")]);
}

#[test]
fn test_match_zone_picks_longest_suffix() {
    let table = ZoneTable::new([
        ZoneBuilder::new().build(),
        ZoneBuilder::new()
            .name("sub.example.org")
            .soa("sub.example.org 60 IN SOA ns1.example.org hostmaster.example.org 1 2 3 4 5")
            .ns(&["sub.example.org 60 IN NS ns1.example.org"])
            .build(),
    ])
    .unwrap();

    let zone = table.match_zone(&name("www.sub.example.org")).unwrap();
    assert_eq!(zone.name(), &name("sub.example.org"));

    let zone = table.match_zone(&name("WWW.Example.Org")).unwrap();
    assert_eq!(zone.name(), &name("example.org"));

    assert!(table.match_zone(&name("badexample.org")).is_none());
    assert!(table.match_zone(&name("org")).is_none());
}

#[test]
fn test_duplicate_zone_is_rejected() {
    let err = ZoneTable::new([ZoneBuilder::new().build(), ZoneBuilder::new().build()]).unwrap_err();
    assert!(matches!(err, ZoneError::Duplicate(_)));
}

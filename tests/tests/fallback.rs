use pretty_assertions::assert_eq;
use tests::wire_test;
use tests::{BadgeKind, SectionLayout};

wire_test!(
    hero_banner,
    SectionLayout,
    Some("HERO_BANNER"),
    Some(SectionLayout::HeroBanner)
);

wire_test!(
    two_column_grid,
    SectionLayout,
    Some("TWO_COLUMN_GRID"),
    Some(SectionLayout::TwoColumnGrid)
);

wire_test!(
    unrecognized_layout,
    SectionLayout,
    Some("THREE_COLUMN_GRID"),
    Some(SectionLayout::Unknown)
);

wire_test!(absent_layout, SectionLayout, None, None);

#[test]
fn named_payload_keeps_the_token() {
    assert_eq!(
        BadgeKind::from_wire(Some("FREE_SHIPPING")),
        Some(BadgeKind::FreeShipping),
    );
    assert_eq!(
        BadgeKind::from_wire(Some("LOWEST_PRICE2_WEEKS")),
        Some(BadgeKind::LowestPrice2Weeks),
    );
    assert_eq!(
        BadgeKind::from_wire(Some("BLACK_FRIDAY")),
        Some(BadgeKind::Unknown {
            raw: "BLACK_FRIDAY".to_owned(),
        }),
    );
}

#[test]
fn reserved_name_is_not_a_token() {
    // `Unknown` never gets a match arm of its own; the literal token
    // "UNKNOWN" routes through the fallback arm like any other stranger.
    assert_eq!(
        BadgeKind::from_wire(Some("UNKNOWN")),
        Some(BadgeKind::Unknown {
            raw: "UNKNOWN".to_owned(),
        }),
    );
    assert_eq!(
        SectionLayout::from_wire(Some("UNKNOWN")),
        Some(SectionLayout::Unknown),
    );
}

use pretty_assertions::assert_eq;
use wire_enum_derive::FromWire;

// A const parameter is legal on the enum even when nothing reads it, so the
// generated impl restates the generics to attach to the type.
#[derive(FromWire, Debug, PartialEq)]
enum ProductGrid<const COLUMNS: usize> {
    Standard,
    Expanded,
    Unknown(String),
}

#[test]
fn const_generic_enums_resolve_tokens() {
    assert_eq!(
        ProductGrid::<2>::from_wire(Some("STANDARD")),
        Some(ProductGrid::<2>::Standard),
    );
    assert_eq!(
        ProductGrid::<3>::from_wire(Some("EXPANDED")),
        Some(ProductGrid::<3>::Expanded),
    );
    assert_eq!(
        ProductGrid::<2>::from_wire(Some("WIDE_GRID")),
        Some(ProductGrid::<2>::Unknown("WIDE_GRID".to_owned())),
    );
    assert_eq!(ProductGrid::<2>::from_wire(None), None);
}

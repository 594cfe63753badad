use serde::Deserialize;
use wire_enum_derive::FromWire;

#[derive(FromWire, Debug, Clone, PartialEq)]
enum EntityViewType {
    Unknown(String),
    OneColumnProductCardWithLongTitle,
    CarouselSmallProductCard,
    ChipFilterGroup,
}

#[derive(Deserialize, Debug)]
struct Feed {
    sections: Vec<Section>,
}

#[derive(Deserialize, Debug)]
struct Section {
    title: String,
    #[serde(default)]
    view_type: Option<String>,
}

fn main() {
    let feed = r#"{
        "sections": [
            {"title": "Today's deals", "view_type": "CAROUSEL_SMALL_PRODUCT_CARD"},
            {"title": "Top pick", "view_type": "ONE_COLUMN_PRODUCT_CARD_WITH_LONG_TITLE"},
            {"title": "Browse", "view_type": "CHIP_FILTER_GROUP"},
            {"title": "Holiday picks", "view_type": "WIDE_GRID_PRODUCT_CARD"},
            {"title": "Legal"}
        ]
    }"#;

    let feed = serde_json::from_str::<Feed>(feed).unwrap();

    for section in &feed.sections {
        let view = EntityViewType::from_wire(section.view_type.as_deref());
        println!("{:<16} {:?}", section.title, view);
    }
}

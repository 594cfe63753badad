use convert_case::{Boundary, Converter, Pattern};
use syn::{Ident, Type};

/// Converts a variant identifier into the upper-snake token a wire payload
/// uses for it. A separator goes between every lowercase letter or digit and
/// the uppercase letter that follows it, then the whole string is uppercased:
/// `OneColumnProductCard` becomes `ONE_COLUMN_PRODUCT_CARD`. These are the
/// only two boundaries; runs of capitals and embedded underscores survive
/// as written. Case classes are Unicode, so an accented lowercase letter
/// opens a boundary like an ASCII one.
pub fn wire_token(name: &str) -> String {
    Converter::new()
        .set_boundaries(&[Boundary::LowerUpper, Boundary::DigitUpper])
        .set_pattern(Pattern::Uppercase)
        .set_delim("_")
        .convert(name)
}

pub fn deraw(ident: &Ident) -> String {
    ident.to_string().trim_start_matches("r#").to_owned()
}

pub fn ungroup(mut ty: &Type) -> &Type {
    while let Type::Group(group) = ty {
        ty = &group.elem;
    }

    ty
}

pub fn is_string(ty: &Type) -> bool {
    let path = match ungroup(ty) {
        Type::Path(ty) => &ty.path,
        _ => return false,
    };
    let seg = match path.segments.last() {
        Some(seg) => seg,
        None => return false,
    };
    seg.ident == "String" && seg.arguments.is_none()
}

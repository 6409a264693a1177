use crate::model::Document;

/// First category containing `name`, walking the document in key order.
/// The same name may exist under several categories; callers act on the
/// first match only.
pub fn find_category<'a>(document: &'a Document, name: &str) -> Option<&'a str> {
    document
        .iter()
        .find(|(_, items)| items.contains_key(name))
        .map(|(category, _)| category.as_str())
}

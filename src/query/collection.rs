use std::collections::HashMap;

use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

use crate::store::{FieldPath, Filter, filter::COLLECTION_TYPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    Text,
    /// Values are parsed the way `parseInt` would: leading digits only.
    Integer,
}

/// One filterable attribute of a catalog collection.
#[derive(Debug, Clone, Copy)]
pub struct Facet {
    /// Query parameter name, also the key in the returned facet map.
    pub param: &'static str,
    pub field: FieldPath,
    pub kind: FacetKind,
}

const fn facet(param: &'static str, field: &'static str, kind: FacetKind) -> Facet {
    Facet {
        param,
        field: FieldPath::new(field),
        kind,
    }
}

const MOBILE_FACETS: [Facet; 6] = [
    facet("brand", "features.brand", FacetKind::Text),
    facet("ram", "features.ram", FacetKind::Text),
    facet("internalXstorage", "features.internalStorage", FacetKind::Text),
    facet("primaryXcamera", "features.primaryCamera", FacetKind::Text),
    facet("secondaryXcamera", "features.secondaryCamera", FacetKind::Text),
    facet("processorXbrand", "features.processor", FacetKind::Text),
];

const LAPTOP_FACETS: [Facet; 7] = [
    facet("brand", "features.brand", FacetKind::Text),
    facet("ram", "features.ram", FacetKind::Integer),
    facet("ssd", "features.ssd", FacetKind::Integer),
    facet("type", "features.type", FacetKind::Text),
    facet("processorXbrand", "features.processorBrand", FacetKind::Text),
    facet("processorXgeneration", "features.processorGeneration", FacetKind::Text),
    facet("processorXname", "features.processor", FacetKind::Text),
];

/// Catalog sections served under `/collection/{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
pub enum CatalogCollection {
    #[strum(serialize = "mobiles&tablets")]
    MobilesAndTablets,
    #[strum(serialize = "laptops")]
    Laptops,
}

impl CatalogCollection {
    pub fn facets(self) -> &'static [Facet] {
        match self {
            CatalogCollection::MobilesAndTablets => &MOBILE_FACETS,
            CatalogCollection::Laptops => &LAPTOP_FACETS,
        }
    }

    /// Restricts a query to this collection.
    pub fn scope(self) -> Filter {
        Filter::eq(COLLECTION_TYPE, self.as_ref())
    }

    /// Collection scope AND one membership test per non-empty facet parameter.
    pub fn filter(self, params: &HashMap<String, String>) -> Filter {
        let mut conditions = vec![self.scope()];
        for facet in self.facets() {
            let Some(raw) = params.get(facet.param).filter(|raw| !raw.is_empty()) else {
                continue;
            };
            conditions.push(Filter::is_in(facet.field, facet.values(raw)));
        }
        Filter::And(conditions)
    }
}

impl Facet {
    /// Comma separated, trimmed; integers that do not parse are dropped.
    pub fn values(&self, raw: &str) -> Vec<Value> {
        let parts = raw.split(',').map(str::trim);
        match self.kind {
            FacetKind::Text => parts.map(Value::from).collect(),
            FacetKind::Integer => parts.filter_map(leading_integer).map(Value::from).collect(),
        }
    }
}

/// `"16GB"` -> 16, `"-4"` -> -4, `"GB"` -> None.
fn leading_integer(text: &str) -> Option<i64> {
    let sign_len = usize::from(text.starts_with(['-', '+']));
    let digits_len = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    text[..sign_len + digits_len].parse().ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn collection_names_parse() {
        assert_eq!(
            "mobiles&tablets".parse::<CatalogCollection>().unwrap(),
            CatalogCollection::MobilesAndTablets
        );
        assert_eq!("laptops".parse::<CatalogCollection>().unwrap(), CatalogCollection::Laptops);
        assert!("watches".parse::<CatalogCollection>().is_err());
        assert_eq!(CatalogCollection::Laptops.to_string(), "laptops");
    }

    #[test]
    fn laptop_filters_are_and_across_fields_and_in_within_a_field() {
        let filter = CatalogCollection::Laptops.filter(&params(&[
            ("ram", "8, 16"),
            ("brand", "samsung,apple"),
        ]));
        assert_eq!(
            filter,
            Filter::And(vec![
                Filter::eq(COLLECTION_TYPE, "laptops"),
                Filter::is_in(FieldPath::new("features.brand"), vec![json!("samsung"), json!("apple")]),
                Filter::is_in(FieldPath::new("features.ram"), vec![json!(8), json!(16)]),
            ])
        );
    }

    #[test]
    fn mobile_ram_stays_textual() {
        let filter = CatalogCollection::MobilesAndTablets.filter(&params(&[("ram", "8 GB")]));
        assert!(
            filter
                .clauses()
                .contains(&Filter::is_in(FieldPath::new("features.ram"), vec![json!("8 GB")]))
        );
    }

    #[test]
    fn empty_and_unknown_params_add_nothing() {
        let filter = CatalogCollection::MobilesAndTablets
            .filter(&params(&[("brand", ""), ("colour", "red")]));
        assert_eq!(filter, Filter::And(vec![Filter::eq(COLLECTION_TYPE, "mobiles&tablets")]));
    }

    #[test]
    fn unparseable_integers_are_dropped() {
        let ssd = LAPTOP_FACETS[2];
        assert_eq!(ssd.values("512GB, 1tb, abc"), vec![json!(512), json!(1)]);
        assert!(ssd.values("abc").is_empty());
    }

    #[test]
    fn leading_integer_follows_parse_int() {
        assert_eq!(leading_integer("16GB"), Some(16));
        assert_eq!(leading_integer("-4"), Some(-4));
        assert_eq!(leading_integer("GB16"), None);
        assert_eq!(leading_integer(""), None);
    }
}

//! Free-text product search.
//!
//! A search string is split into lowercase tokens which are classified
//! independently: a known brand, a product category, a network generation,
//! a price bound ("under 50000") and a discount ("20% off"). Every
//! recognised clue becomes its own condition and the conditions are OR-ed
//! together with a substring match on the model name.

use std::sync::LazyLock;

use regex::Regex;
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::store::{
    FieldPath, Filter,
    filter::{DISCOUNT, HIGHLIGHTS, MODEL_NAME, MRP, SUB_COLLECTION_TYPE},
};

const FEATURE_BRAND: FieldPath = FieldPath::new("features.brand");

static PRICE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("under|below|less|above|more|over").expect("valid price regex"));
static UPPER_BOUND_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("under|below|less").expect("valid price regex"));
static PRICE_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]+$").expect("valid price regex"));
static DISCOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*%|(?-u:\b)([0-9]+)\s*percent(?-u:\b)").expect("valid discount regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Brand {
    Redmi,
    Samsung,
    Asus,
    Apple,
    OnePlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Mobile,
    Laptop,
    Tablet,
    Watch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Network {
    #[strum(serialize = "5g")]
    FiveG,
    #[strum(serialize = "4g")]
    FourG,
    #[strum(serialize = "3g")]
    ThreeG,
}

/// Digit runs too long for an integer keep their approximate value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceBound {
    AtMost(f64),
    AtLeast(f64),
}

/// Everything recognised in one search string.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerms {
    pub text: String,
    pub brand: Option<Brand>,
    pub category: Option<Category>,
    pub network: Option<Network>,
    pub price: Option<PriceBound>,
    pub min_discount: Option<f64>,
}

/// First token, in token order, that names one of the variants.
fn first_keyword<K: IntoEnumIterator + AsRef<str>>(tokens: &[String]) -> Option<K> {
    tokens
        .iter()
        .find_map(|token| K::iter().find(|keyword| keyword.as_ref() == token))
}

fn price_bound(tokens: &[String]) -> Option<PriceBound> {
    let word = tokens.iter().find(|token| PRICE_WORD.is_match(token))?;
    let value = tokens
        .iter()
        .find(|token| PRICE_VALUE.is_match(token))?
        .parse::<f64>()
        .ok()?;
    if UPPER_BOUND_WORD.is_match(word) {
        Some(PriceBound::AtMost(value))
    } else {
        Some(PriceBound::AtLeast(value))
    }
}

fn min_discount(text: &str) -> Option<f64> {
    let captures = DISCOUNT_PATTERN.captures(text)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))?
        .as_str()
        .parse()
        .ok()
}

impl SearchTerms {
    /// `None` for a blank search.
    pub fn parse(input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        let tokens: Vec<String> = text
            .to_lowercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect();

        Some(Self {
            text: text.to_owned(),
            brand: first_keyword(&tokens),
            category: first_keyword(&tokens),
            network: first_keyword(&tokens),
            price: price_bound(&tokens),
            min_discount: min_discount(text),
        })
    }

    pub fn to_filter(&self) -> Filter {
        let mut conditions = vec![Filter::contains(MODEL_NAME, self.text.as_str())];

        if let Some(brand) = self.brand {
            conditions.push(Filter::contains(FEATURE_BRAND, brand.as_ref()));
        }
        if let Some(category) = self.category {
            conditions.push(Filter::contains(SUB_COLLECTION_TYPE, category.as_ref()));
        }
        if let Some(network) = self.network {
            conditions.push(Filter::any_element_contains(HIGHLIGHTS, network.as_ref()));
        }
        match self.price {
            Some(PriceBound::AtMost(value)) => conditions.push(Filter::lte(MRP, value)),
            Some(PriceBound::AtLeast(value)) => conditions.push(Filter::gte(MRP, value)),
            None => {}
        }
        if let Some(discount) = self.min_discount {
            conditions.push(Filter::gte(DISCOUNT, discount));
        }

        Filter::Or(conditions)
    }
}

/// Filter for `GET /product/list?search=`; a missing or blank search matches every product.
pub fn search_filter(search: Option<&str>) -> Filter {
    search
        .and_then(SearchTerms::parse)
        .map(|terms| terms.to_filter())
        .unwrap_or(Filter::All)
}

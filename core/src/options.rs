//! Query options: field selection, filters, ordering, and paging.
//!
//! # Design
//! `Options` is a plain configuration value built up from `QueryOption`
//! directives (or the equivalent chained methods). Nothing is validated while
//! options are being applied; `Options::finalize` checks the paging bounds
//! once and produces a `Query`, the ordered key/value pairs that end up in the
//! URL. A failed check rejects the whole set, so no URL is ever built from
//! partially valid options.
//!
//! Single-valued directives (order, limit, offset, search) are last-write-wins.
//! Fields and filters accumulate.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};

/// Largest page size the API accepts.
pub const MAX_LIMIT: i64 = 50;

/// Field selector meaning "every field".
pub const ALL_FIELDS: &str = "*";

/// Comparison applied by a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Prefix,
}

impl Operator {
    /// The token used inside `filter[<field>][<op>]`.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equals => "eq",
            Operator::NotEquals => "not_eq",
            Operator::GreaterThan => "gt",
            Operator::GreaterOrEqual => "gte",
            Operator::LessThan => "lt",
            Operator::LessOrEqual => "lte",
            Operator::Prefix => "prefix",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// One `filter[<field>][<op>]=<value>` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

/// The active sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub field: String,
    pub direction: Direction,
}

/// A single user-facing query directive.
///
/// The search term is deliberately absent: it is only set by the search
/// accessors, so a search can never be combined with an ID lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOption {
    Fields(Vec<String>),
    Filter(Filter),
    Order(Order),
    Limit(i64),
    Offset(i64),
}

impl QueryOption {
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryOption::Fields(names.into_iter().map(Into::into).collect())
    }

    pub fn filter(field: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        QueryOption::Filter(Filter {
            field: field.into(),
            operator,
            value: value.into(),
        })
    }

    pub fn order(field: impl Into<String>, direction: Direction) -> Self {
        QueryOption::Order(Order {
            field: field.into(),
            direction,
        })
    }
}

/// Accumulated query configuration for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    fields: BTreeSet<String>,
    filters: Vec<Filter>,
    order: Option<Order>,
    limit: Option<i64>,
    offset: Option<i64>,
    search: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one directive.
    pub fn apply(&mut self, option: QueryOption) {
        match option {
            QueryOption::Fields(names) => {
                for name in names {
                    let name: String = name.chars().filter(|c| !c.is_whitespace()).collect();
                    if !name.is_empty() {
                        self.fields.insert(name);
                    }
                }
            }
            QueryOption::Filter(filter) => self.filters.push(filter),
            QueryOption::Order(order) => self.order = Some(order),
            QueryOption::Limit(n) => self.limit = Some(n),
            QueryOption::Offset(n) => self.offset = Some(n),
        }
    }

    pub fn fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.apply(QueryOption::fields(names));
        self
    }

    pub fn filter(mut self, field: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        self.apply(QueryOption::filter(field, operator, value));
        self
    }

    pub fn order(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.apply(QueryOption::order(field, direction));
        self
    }

    pub fn limit(mut self, n: i64) -> Self {
        self.apply(QueryOption::Limit(n));
        self
    }

    pub fn offset(mut self, n: i64) -> Self {
        self.apply(QueryOption::Offset(n));
        self
    }

    /// Set the search term. Only the search URL builder calls this.
    pub(crate) fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Selected field names in encoding order. `*` wins over everything else.
    pub fn selected_fields(&self) -> Vec<&str> {
        if self.fields.contains(ALL_FIELDS) {
            return vec![ALL_FIELDS];
        }
        self.fields.iter().map(String::as_str).collect()
    }

    /// Validate paging bounds and lay the options out as query pairs.
    pub fn finalize(&self) -> Result<Query> {
        if let Some(limit) = self.limit {
            if !(1..=MAX_LIMIT).contains(&limit) {
                return Err(Error::OutOfRange {
                    option: "limit",
                    value: limit,
                });
            }
        }
        if let Some(offset) = self.offset {
            if offset < 0 {
                return Err(Error::OutOfRange {
                    option: "offset",
                    value: offset,
                });
            }
        }

        let mut pairs = Vec::new();
        let fields = self.selected_fields();
        if !fields.is_empty() {
            pairs.push(("fields".to_string(), fields.join(",")));
        }
        for filter in &self.filters {
            pairs.push((
                format!("filter[{}][{}]", filter.field, filter.operator),
                filter.value.clone(),
            ));
        }
        if let Some(order) = &self.order {
            pairs.push(("order".to_string(), format!("{}:{}", order.field, order.direction.as_str())));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        Ok(Query { pairs })
    }
}

impl FromIterator<QueryOption> for Options {
    fn from_iter<I: IntoIterator<Item = QueryOption>>(iter: I) -> Self {
        let mut options = Options::new();
        for option in iter {
            options.apply(option);
        }
        options
    }
}

/// Validated, ordered query parameters ready for encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-encode the pairs. Repeated keys stay repeated.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(encoded: &str) -> Vec<(String, String)> {
        serde_urlencoded::from_str(encoded).unwrap()
    }

    #[test]
    fn empty_options_encode_to_nothing() {
        let query = Options::new().finalize().unwrap();
        assert!(query.is_empty());
        assert_eq!(query.encode().unwrap(), "");
    }

    #[test]
    fn limit_bounds() {
        for n in [1, 25, MAX_LIMIT] {
            assert!(Options::new().limit(n).finalize().is_ok(), "limit {n}");
        }
        for n in [0, 51, -1] {
            let err = Options::new().limit(n).finalize().unwrap_err();
            assert!(
                matches!(err, Error::OutOfRange { option: "limit", value } if value == n),
                "limit {n}"
            );
        }
    }

    #[test]
    fn offset_bounds() {
        assert!(Options::new().offset(0).finalize().is_ok());
        assert!(Options::new().offset(9999).finalize().is_ok());
        let err = Options::new().offset(-1).finalize().unwrap_err();
        assert!(matches!(err, Error::OutOfRange { option: "offset", value: -1 }));
    }

    #[test]
    fn one_bad_value_rejects_the_whole_set() {
        let err = Options::new()
            .fields(["name"])
            .limit(10)
            .offset(-99999)
            .finalize()
            .unwrap_err();
        assert!(err.is_option_error());
    }

    #[test]
    fn single_field_survives_encode_and_decode() {
        let encoded = Options::new().fields(["name"]).finalize().unwrap().encode().unwrap();
        let pairs = decode(&encoded);
        let fields: Vec<_> = pairs.iter().filter(|(k, _)| k == "fields").collect();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].1, "name");
    }

    #[test]
    fn fields_are_deduplicated_and_sorted() {
        let options = Options::new()
            .fields(["logo.url", "background.id"])
            .fields(["logo.url"]);
        assert_eq!(options.selected_fields(), vec!["background.id", "logo.url"]);
    }

    #[test]
    fn asterisk_suppresses_other_fields() {
        let options = Options::new().fields(["name", "*", "slug"]);
        assert_eq!(options.selected_fields(), vec!["*"]);
        let query = options.finalize().unwrap();
        assert_eq!(query.pairs()[0], ("fields".to_string(), "*".to_string()));
    }

    #[test]
    fn whitespace_is_removed_from_field_names() {
        let options = Options::new().fields(["  name ", "", "release dates"]);
        assert_eq!(options.selected_fields(), vec!["name", "releasedates"]);
    }

    #[test]
    fn filters_on_same_field_are_kept_separately() {
        let query = Options::new()
            .filter("rating", Operator::GreaterOrEqual, "70")
            .filter("rating", Operator::LessThan, "90")
            .finalize()
            .unwrap();
        assert_eq!(
            query.pairs(),
            &[
                ("filter[rating][gte]".to_string(), "70".to_string()),
                ("filter[rating][lt]".to_string(), "90".to_string()),
            ]
        );
        let decoded = decode(&query.encode().unwrap());
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn last_order_limit_and_offset_win() {
        let options: Options = vec![
            QueryOption::order("name", Direction::Asc),
            QueryOption::Limit(10),
            QueryOption::order("popularity", Direction::Desc),
            QueryOption::Limit(20),
            QueryOption::Offset(5),
            QueryOption::Offset(15),
        ]
        .into_iter()
        .collect();
        let query = options.finalize().unwrap();
        assert_eq!(
            query.pairs(),
            &[
                ("order".to_string(), "popularity:desc".to_string()),
                ("limit".to_string(), "20".to_string()),
                ("offset".to_string(), "15".to_string()),
            ]
        );
    }

    #[test]
    fn search_term_is_form_encoded() {
        let query = Options::new().search("zelda link").finalize().unwrap();
        assert_eq!(query.encode().unwrap(), "search=zelda+link");
    }

    #[test]
    fn operator_tokens() {
        let tokens: Vec<_> = [
            Operator::Equals,
            Operator::NotEquals,
            Operator::GreaterThan,
            Operator::GreaterOrEqual,
            Operator::LessThan,
            Operator::LessOrEqual,
            Operator::Prefix,
        ]
        .iter()
        .map(|op| op.as_str())
        .collect();
        assert_eq!(tokens, vec!["eq", "not_eq", "gt", "gte", "lt", "lte", "prefix"]);
    }
}

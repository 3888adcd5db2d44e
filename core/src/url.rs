//! Request URL construction.
//!
//! # Design
//! Every builder validates its resource selector first, then finalizes the
//! options, then appends the encoded query through `encode_url`. Any failure
//! aborts before a URL exists, so callers never send a half-built request.

use crate::endpoint::Endpoint;
use crate::error::{Error, Result};
use crate::options::{Options, Query};

/// Builds request URLs rooted at a fixed API host.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    root: String,
}

impl UrlBuilder {
    /// `root` gets a trailing `/` if it lacks one.
    pub fn new(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            root: format!("{root}/"),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// `<root><endpoint><id>[?query]`
    pub fn single(&self, endpoint: Endpoint, id: i64, options: &Options) -> Result<String> {
        if id < 0 {
            return Err(Error::NegativeId);
        }
        let query = options.finalize()?;
        encode_url(format!("{}{}{id}", self.root, endpoint.path()), &query)
    }

    /// `<root><endpoint><id>,<id>,...[?query]`, IDs kept in the given order.
    pub fn multi(&self, endpoint: Endpoint, ids: &[i64], options: &Options) -> Result<String> {
        if ids.is_empty() {
            return Err(Error::EmptyIds);
        }
        if ids.iter().any(|id| *id < 0) {
            return Err(Error::NegativeId);
        }
        let query = options.finalize()?;
        let joined = ids.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
        encode_url(format!("{}{}{joined}", self.root, endpoint.path()), &query)
    }

    /// `<root><endpoint>[?query]`
    pub fn index(&self, endpoint: Endpoint, options: &Options) -> Result<String> {
        let query = options.finalize()?;
        encode_url(format!("{}{}", self.root, endpoint.path()), &query)
    }

    /// `<root><endpoint>?...search=<term>`; the term travels as a query option.
    pub fn search(&self, endpoint: Endpoint, term: &str, options: &Options) -> Result<String> {
        let query = options.clone().search(term).finalize()?;
        encode_url(format!("{}{}", self.root, endpoint.path()), &query)
    }

    /// `<root><endpoint>count[?query]`
    pub fn count(&self, endpoint: Endpoint, options: &Options) -> Result<String> {
        let query = options.finalize()?;
        encode_url(format!("{}{}count", self.root, endpoint.path()), &query)
    }

    /// `<root><endpoint>meta`
    pub fn meta(&self, endpoint: Endpoint) -> Result<String> {
        encode_url(format!("{}{}meta", self.root, endpoint.path()), &Query::default())
    }
}

/// Strip literal spaces and append the query string when there is one.
fn encode_url(url: String, query: &Query) -> Result<String> {
    let mut url = url.replace(' ', "");
    let encoded = query.encode()?;
    if !encoded.is_empty() {
        url.push('?');
        url.push_str(&encoded);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Direction, Operator};

    const ROOT: &str = "https://api.example.com/";

    fn urls() -> UrlBuilder {
        UrlBuilder::new(ROOT)
    }

    #[test]
    fn root_gains_single_trailing_slash() {
        assert_eq!(UrlBuilder::new("http://localhost:3000").root(), "http://localhost:3000/");
        assert_eq!(UrlBuilder::new("http://localhost:3000//").root(), "http://localhost:3000/");
    }

    #[test]
    fn single_embeds_decimal_id() {
        for id in [0, 7, 296456, i64::MAX] {
            let url = urls().single(Endpoint::Games, id, &Options::new()).unwrap();
            assert_eq!(url, format!("{ROOT}games/{id}"));
        }
    }

    #[test]
    fn single_rejects_negative_id() {
        let err = urls().single(Endpoint::Games, -1, &Options::new()).unwrap_err();
        assert!(matches!(err, Error::NegativeId));
    }

    #[test]
    fn negative_id_is_reported_before_bad_options() {
        let err = urls()
            .single(Endpoint::Games, -1, &Options::new().limit(0))
            .unwrap_err();
        assert!(matches!(err, Error::NegativeId));
    }

    #[test]
    fn multi_joins_ids_in_order() {
        let url = urls()
            .multi(Endpoint::Pulses, &[296570, 714772, 124499], &Options::new())
            .unwrap();
        assert_eq!(url, format!("{ROOT}pulses/296570,714772,124499"));
    }

    #[test]
    fn multi_rejects_empty_and_negative() {
        let err = urls().multi(Endpoint::Pulses, &[], &Options::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyIds));
        let err = urls().multi(Endpoint::Pulses, &[1, -500, 3], &Options::new()).unwrap_err();
        assert!(matches!(err, Error::NegativeId));
    }

    #[test]
    fn options_are_appended_as_query() {
        let options = Options::new()
            .fields(["name"])
            .filter("popularity", Operator::GreaterThan, "75")
            .order("popularity", Direction::Desc)
            .limit(5)
            .offset(10);
        let url = urls().single(Endpoint::Games, 1, &options).unwrap();
        assert_eq!(
            url,
            format!(
                "{ROOT}games/1?fields=name&filter%5Bpopularity%5D%5Bgt%5D=75\
                 &order=popularity%3Adesc&limit=5&offset=10"
            )
        );
    }

    #[test]
    fn invalid_options_abort_url() {
        let err = urls().index(Endpoint::Games, &Options::new().offset(-1)).unwrap_err();
        assert!(err.is_option_error());
    }

    #[test]
    fn search_term_goes_into_query_not_path() {
        let url = urls()
            .search(Endpoint::Games, "mass effect", &Options::new().limit(2))
            .unwrap();
        assert_eq!(url, format!("{ROOT}games/?limit=2&search=mass+effect"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn count_and_meta_suffixes() {
        let count = urls()
            .count(Endpoint::Pulses, &Options::new().filter("popularity", Operator::GreaterThan, "75"))
            .unwrap();
        assert_eq!(count, format!("{ROOT}pulses/count?filter%5Bpopularity%5D%5Bgt%5D=75"));
        assert_eq!(urls().meta(Endpoint::Pulses).unwrap(), format!("{ROOT}pulses/meta"));
    }

    #[test]
    fn spaces_are_stripped_from_url() {
        let url = UrlBuilder::new("http://local host:3000")
            .index(Endpoint::Genres, &Options::new())
            .unwrap();
        assert_eq!(url, "http://localhost:3000/genres/");
    }
}

//! Equality filters sent with a list request.
//!
//! A [`LookupQuery`] is an ordered set of `(field, value)` pairs. It is built
//! fresh for every lookup and only carries the fields the caller supplied.
//! On the wire each pair becomes a `<field>:eq=<value>` query parameter.

use std::fmt;

/// Comparison applied by a filter. Lookups only ever use exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Exact, case-sensitive equality.
    Eq,
}

impl FilterOperator {
    /// The operator suffix used in query parameter names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
        }
    }
}

/// A single remote filter term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Remote field name.
    pub field: String,
    /// Comparison operator.
    pub operator: FilterOperator,
    /// Value in string form.
    pub value: String,
}

impl Filter {
    /// An exact-match filter.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::Eq,
            value: value.into(),
        }
    }

    /// The query parameter `(name, value)` pair for this filter.
    pub fn to_param(&self) -> (String, String) {
        (
            format!("{}:{}", self.field, self.operator.as_str()),
            self.value.clone(),
        )
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}={}", self.field, self.operator.as_str(), self.value)
    }
}

/// Ordered set of equality filters for one list request.
///
/// An empty query is legal and lists everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupQuery {
    filters: Vec<Filter>,
}

impl LookupQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality filter on `field` if `value` is present.
    ///
    /// A later filter on the same field replaces the earlier one so that a
    /// field is never sent twice.
    pub fn with_eq<V: fmt::Display>(mut self, field: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let filter = Filter::equals(field, value.to_string());
            match self.filters.iter_mut().find(|f| f.field == field) {
                Some(existing) => *existing = filter,
                None => self.filters.push(filter),
            }
        }
        self
    }

    /// Whether no filter was added.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// The filters, in insertion order.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// The value filtered on for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.value.as_str())
    }

    /// Query parameters for the HTTP request.
    pub fn to_params(&self) -> Vec<(String, String)> {
        self.filters.iter().map(Filter::to_param).collect()
    }
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filters.is_empty() {
            return f.write_str("<all>");
        }
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}", filter)?;
        }
        Ok(())
    }
}

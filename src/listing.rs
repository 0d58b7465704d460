use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::Marathon;
use crate::error::{invalid_input_error, unexpected_error, Error};

pub const PAGE_SIZE: usize = 9;

/// Active list filters. `None` means the filter is off.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

/// Raw list query as submitted by the filter form; empty fields are inactive.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListParams {
    pub city: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub page: Option<usize>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ListParams {
    pub fn filter(&self) -> Result<Filter, Error> {
        let parse = |value: &Option<String>| -> Result<Option<NaiveDate>, Error> {
            match non_empty(value) {
                Some(s) => Ok(Some(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)),
                None => Ok(None),
            }
        };

        Ok(Filter {
            city: non_empty(&self.city).map(String::from),
            start: parse(&self.start)?,
            end: parse(&self.end)?,
        })
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }
}

impl Filter {
    pub fn matches_city(&self, marathon: &Marathon) -> bool {
        match &self.city {
            Some(city) => marathon.location.to_lowercase().contains(&city.to_lowercase()),
            None => true,
        }
    }

    pub fn matches_dates(&self, marathon: &Marathon) -> bool {
        let after_start = self.start.map_or(true, |start| marathon.date >= start);
        let before_end = self.end.map_or(true, |end| marathon.date <= end);

        after_start && before_end
    }

    pub fn matches(&self, marathon: &Marathon) -> bool {
        self.matches_city(marathon) && self.matches_dates(marathon)
    }

    /// Keeps catalog order.
    pub fn apply<'a>(&self, marathons: &'a [Marathon]) -> Vec<&'a Marathon> {
        marathons.iter().filter(|m| self.matches(m)).collect()
    }

    /// Query string that reproduces this filter, without the page.
    pub fn query_string(&self) -> Result<String, Error> {
        serde_urlencoded::to_string(self).map_err(unexpected_error)
    }
}

pub fn page_count(total: usize) -> usize {
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}

#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

/// Slices `items` into the 1-based page `number`. Page 1 of an empty set is valid.
pub fn paginate<T>(items: Vec<T>, number: usize) -> Result<Page<T>, Error> {
    let total_items = items.len();
    let total_pages = page_count(total_items);

    if number == 0 || number > total_pages.max(1) {
        return Err(invalid_input_error());
    }

    let items = items
        .into_iter()
        .skip((number - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    Ok(Page {
        items,
        number,
        total_pages,
        total_items,
    })
}

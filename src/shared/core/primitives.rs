use chrono::NaiveDate;

/// How a collection of dated records is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    NewestFirst,
    OldestFirst,
}

impl DateOrder {
    /// Views `items`, which are in `self` order, in `wanted` order.
    pub fn view<'a, T>(self, items: &'a [T], wanted: DateOrder) -> Vec<&'a T> {
        if self == wanted {
            items.iter().collect()
        } else {
            items.iter().rev().collect()
        }
    }

    /// Sorts in place. Ties keep their relative order.
    pub fn sort_by_date<T>(self, items: &mut [T], date_of: impl Fn(&T) -> NaiveDate) {
        match self {
            DateOrder::NewestFirst => items.sort_by_key(|item| std::cmp::Reverse(date_of(item))),
            DateOrder::OldestFirst => items.sort_by_key(|item| date_of(item)),
        }
    }
}

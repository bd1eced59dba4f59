//! The table engine behind the user list: pure filter/sort/paginate
//! functions plus the controller that runs them, in that order, against the
//! last-fetched record set.

pub mod controller;
pub mod filter;
pub mod notify;
pub mod paginate;
pub mod sort;
pub mod view_state;

pub use controller::TableController;
pub use filter::filter;
pub use notify::{LogNotifier, Notifier, Severity};
pub use paginate::{Page, clamp_page, paginate, total_pages};
pub use sort::{SortDirection, SortKey, sort};
pub use view_state::TableViewState;

#[cfg(test)]
mod tests;

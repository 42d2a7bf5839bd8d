pub mod sort;
pub mod store;
pub mod view;

pub use sort::{SortDirection, SortKey, SortState};
pub use store::RegisterStore;
pub use view::{register_view, RegisterRow};

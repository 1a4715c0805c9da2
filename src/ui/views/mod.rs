pub mod discover;
pub mod favorites;
pub mod search;
pub mod track_screen;

pub use discover::Discover;
pub use favorites::Favorites;
pub use search::Search;

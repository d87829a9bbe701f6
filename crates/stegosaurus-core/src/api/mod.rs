pub mod hide;
pub mod show;

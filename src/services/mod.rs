pub mod scroll;
pub mod settings;
pub mod slug;
pub mod suggester;
pub mod theme;

pub mod archives;
pub mod content;
pub mod footer;
pub mod header;
pub mod image;
pub mod layout;
pub mod logo;
pub mod navigation;
pub mod newsletter;
pub mod search_form;
pub mod sponsors;

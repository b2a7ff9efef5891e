pub mod ext;
pub mod layout;
pub mod normal;
pub mod widget;

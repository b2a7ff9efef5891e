pub mod binds;

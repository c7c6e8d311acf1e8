pub mod tag_store;

pub mod locking;
pub mod store_file;

pub use store_file::StoreFile;

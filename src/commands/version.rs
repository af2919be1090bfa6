/// Crate version as reported by `mementor version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn execute() {
    println!("{VERSION}");
}

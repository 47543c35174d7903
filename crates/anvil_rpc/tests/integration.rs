// Each Cargo integration test is a separate binary, so just `mod integration;`
// would point to us (the binary crate) in a circular fashion. Instead of using
// a different name for the actual tests, we work around it with a `#[path]`
// attribute.
#[path = "integration/mod.rs"]
mod integration;

fn main() {}

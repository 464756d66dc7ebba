pub mod errors;
pub mod models;
pub mod services;
#[cfg(test)]
pub mod test_fakes;
pub mod traits;

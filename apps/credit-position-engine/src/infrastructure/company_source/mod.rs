//! Company source adapters.

mod file;
mod in_memory;

pub use file::{CompanyBatchFile, FileCompanySource};
pub use in_memory::InMemoryCompanySource;

pub mod explorer_page;
pub mod top_header;

pub use explorer_page::ExplorerPage;

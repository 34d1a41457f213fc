pub mod assemble;
pub mod catalog;
pub mod convert;
pub mod document;
pub mod encoding;
pub mod error;
pub mod page;

pub use assemble::assemble_book;
pub use catalog::{Book, list_books};
pub use convert::{EBOOK_CONVERT, conversion_command, mobi_output_path};
pub use document::{sanitize_filename, wrap_document};
pub use encoding::read_windows1250;
pub use error::{PolarisError, Result};
pub use page::{extract_page, repair_markup};

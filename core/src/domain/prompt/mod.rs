pub mod builders;
pub mod templates;

pub use builders::*;
pub use templates::PromptTemplate;

pub mod element;
pub mod document;
pub mod screenplay_properties;
pub mod conf;

pub use element::{Element, ElementKind};
pub use document::Document;
pub use screenplay_properties::ScreenplayProperties;
pub use conf::Conf;

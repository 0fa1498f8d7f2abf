pub mod drawio;

use thiserror::Error;

use crate::layout::LayoutBlock;

/// Turns laid-out blocks into the text of a diagram file.
pub trait Exporter {
    fn export(&self, blocks: &[LayoutBlock]) -> Result<String, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid style: {0}")]
    Style(String),
}

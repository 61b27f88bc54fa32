mod dto;
mod text;

pub use dto::ResolutionResponse;
pub use text::DigOutput;

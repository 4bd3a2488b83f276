pub mod error;
pub mod grid;
pub mod history;
pub mod params;
pub mod viewport;

pub use error::CoreError;
pub use grid::SampleGrid;
pub use history::ViewHistory;
pub use params::IterationParams;
pub use viewport::ViewState;

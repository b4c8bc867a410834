pub mod emit;
pub mod manifest;

// Re-export commonly used types
pub use emit::{EmitReport, Scaffolder};
pub use manifest::{OutputFile, OUTPUT_FILES};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid page geometry: content area is {0:.2}pt wide and {1:.2}pt tall.")]
    InvalidGeometry(f32, f32),
}

//! H3O error types.

mod compaction;
mod hex_grid;
mod invalid_value;
mod localij;
mod polygon_to_cells;
mod resolution_mismatch;


pub use compaction::CompactionError;
pub use hex_grid::HexGridError;
pub use invalid_value::{
    InvalidBaseCell, InvalidCellIndex, InvalidDirectedEdgeIndex,
    InvalidDirection, InvalidEdge, InvalidFace, InvalidLatLng,
    InvalidResolution, InvalidVertex, InvalidVertexIndex,
};
pub use localij::LocalIjError;
pub use polygon_to_cells::PolygonToCellsError;
pub use resolution_mismatch::ResolutionMismatch;

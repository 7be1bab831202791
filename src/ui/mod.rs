/// UI layer: panel widgets, the preview table and the pair-grid renderer.

pub mod panels;
pub mod plot;
pub mod table;

pub mod dsp;
pub mod graph; // Composable signal-source nodes
pub mod io;
pub mod patch; // Declarative source-tree descriptions

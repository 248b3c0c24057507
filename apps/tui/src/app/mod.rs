// App module for heatmap
// Holds the viewer state and maps terminal input onto it

pub mod input;
pub mod state;

pub use input::{handle_input, handle_mouse};
pub use state::App;

//! Runtime module - terminal integration
//!
//! - `app` - shell loop and `Cmd` execution (threaded file I/O, prompts)

pub mod app;

pub use app::App;

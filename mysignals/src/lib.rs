//! mysignals runtime de señales unix para los demos
//! el handler solo marca banderas atomicas y el hilo principal hace el resto

pub mod events;
pub mod flags;
pub mod ffi;
pub mod runtime;

pub use events::SignalKind;
pub use flags::SignalFlags;
pub use runtime::{InstallReport, SignalRuntime, WindowReport};

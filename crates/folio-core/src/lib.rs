pub mod backdrop;
pub mod config;
pub mod constants;
pub mod contact;
pub mod device;
pub mod navbar;
pub mod perf;
pub mod quality;
pub mod sections;
pub mod throttle;
pub mod visibility;

pub use backdrop::*;
pub use config::*;
pub use contact::*;
pub use device::*;
pub use navbar::*;
pub use perf::*;
pub use quality::*;
pub use sections::*;
pub use throttle::*;
pub use visibility::*;

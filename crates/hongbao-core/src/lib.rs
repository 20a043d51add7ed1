//! Platform-free core of the hongbao greeting card.
//!
//! The firework simulator and render loop driver paint onto an abstract
//! [`Surface`]; the synthesizer and sound library schedule voices on an
//! abstract [`AudioBackend`]. The web front-end supplies Canvas 2D and
//! WebAudio implementations of both, while tests supply recording stubs.

pub mod audio;
pub mod card;
pub mod color;
pub mod constants;
pub mod driver;
pub mod error;
pub mod fireworks;
pub mod greetings;
pub mod lifecycle;
pub mod share;
pub mod surface;

pub use audio::*;
pub use card::*;
pub use color::*;
pub use constants::*;
pub use driver::*;
pub use error::*;
pub use fireworks::*;
pub use greetings::*;
pub use lifecycle::*;
pub use share::*;
pub use surface::*;

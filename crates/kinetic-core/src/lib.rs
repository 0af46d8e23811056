//! Physics-driven value inputs.
//!
//! Two widgets replace a plain range input with a small simulation the user
//! perturbs by dragging: [`GravitySlider`] (tilt a bar, the value rolls under
//! gravity) and [`NumberLauncher`] (charge a launch angle, the landing point
//! becomes the value). Both tick at a fixed rate from a host-provided
//! [`Scheduler`], paint through a [`Surface`], and notify observers once per
//! committed change.
//!
//! Nothing here touches a platform API; the web and native front-ends supply
//! timers, input events and rendering.

pub mod commit;
pub mod config;
pub mod constants;
pub mod gesture;
pub mod launcher;
pub mod mapper;
pub mod pendulum;
pub mod projectile;
pub mod slider;
pub mod surface;
pub mod ticker;
pub mod widget;

pub use commit::{Observer, SubscriptionId, ValueChange};
pub use config::*;
pub use constants::*;
pub use gesture::*;
pub use launcher::NumberLauncher;
pub use slider::GravitySlider;
pub use surface::*;
pub use ticker::*;
pub use widget::*;

//! Render sync contract.
//!
//! Widgets push [`Paint`] commands at a [`Surface`] as their state changes.
//! Nothing a surface does can reach back into the simulation, so a headless
//! host can plug in [`NullSurface`].

use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Rotate the tilting part (slider body or launch icon). `animated`
    /// eases into the new angle instead of snapping, used when returning to
    /// neutral on release.
    Tilt { radians: f64, animated: bool },
    /// Raw continuous slider position, before rounding.
    Track { value: f64 },
    /// Projectile position relative to the start of the track.
    Projectile { position: DVec2 },
    Indicator { visible: bool },
    Readout { value: u32 },
    /// Short highlight on the readout after a commit.
    Emphasis,
}

pub trait Surface {
    fn paint(&mut self, paint: Paint);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn paint(&mut self, _paint: Paint) {}
}

/// Records every paint, in order.
#[derive(Clone, Debug, Default)]
pub struct PaintLog {
    pub paints: Vec<Paint>,
}

impl PaintLog {
    pub fn readouts(&self) -> impl Iterator<Item = u32> + '_ {
        self.paints.iter().filter_map(|p| match p {
            Paint::Readout { value } => Some(*value),
            _ => None,
        })
    }

    pub fn last_tilt(&self) -> Option<(f64, bool)> {
        self.paints.iter().rev().find_map(|p| match p {
            Paint::Tilt { radians, animated } => Some((*radians, *animated)),
            _ => None,
        })
    }
}

impl Surface for PaintLog {
    fn paint(&mut self, paint: Paint) {
        self.paints.push(paint);
    }
}

/// Lets the owner keep a handle on a surface it lends to a widget.
impl<S: Surface> Surface for Rc<RefCell<S>> {
    fn paint(&mut self, paint: Paint) {
        self.borrow_mut().paint(paint);
    }
}

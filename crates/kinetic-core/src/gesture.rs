//! Gesture capture: one drag session shape for every input modality.
//!
//! Mouse and touch each get a small adapter that produces a single client
//! point (or nothing). [`to_signal`] turns an adapter sample into one of the
//! abstract session signals, so widgets never see the modality.

use glam::DVec2;

/// Which part of the widget a press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
    Handle,
    Body,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press {
    pub point: DVec2,
    pub target: PressTarget,
}

impl Press {
    pub fn on_handle(point: DVec2) -> Self {
        Self {
            point,
            target: PressTarget::Handle,
        }
    }

    pub fn on_body(point: DVec2) -> Self {
        Self {
            point,
            target: PressTarget::Body,
        }
    }
}

/// Axis-aligned on-screen rectangle in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: DVec2::ZERO,
            max: DVec2::ZERO,
        }
    }
}

impl Bounds {
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            min: DVec2::new(left, top),
            max: DVec2::new(right, bottom),
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSignal {
    Start(Press),
    Move(DVec2),
    End,
    Cancel,
}

/// Lifecycle stage of a raw input event, shared by all modalities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputStage {
    Down,
    Move,
    Up,
    Cancel,
}

/// A modality adapter: yields the one point a drag session follows.
pub trait PointSource {
    fn primary_point(&self) -> Option<DVec2>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseSample {
    pub client: DVec2,
}

impl PointSource for MouseSample {
    fn primary_point(&self) -> Option<DVec2> {
        Some(self.client)
    }
}

/// Active touches in the order the browser reports them. Only the first one
/// drives a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample<'a> {
    pub touches: &'a [DVec2],
}

impl PointSource for TouchSample<'_> {
    fn primary_point(&self) -> Option<DVec2> {
        self.touches.first().copied()
    }
}

/// Maps one raw input event to a session signal. Down and move need a point;
/// up and cancel don't (touchend carries no active touches).
pub fn to_signal<S: PointSource>(
    stage: InputStage,
    source: &S,
    target: PressTarget,
) -> Option<GestureSignal> {
    match stage {
        InputStage::Down => source
            .primary_point()
            .map(|point| GestureSignal::Start(Press { point, target })),
        InputStage::Move => source.primary_point().map(GestureSignal::Move),
        InputStage::Up => Some(GestureSignal::End),
        InputStage::Cancel => Some(GestureSignal::Cancel),
    }
}

/// Angle of `point` around `center`, or `None` when the two coincide.
#[inline]
pub fn angle_about(center: DVec2, point: DVec2) -> Option<f64> {
    let d = point - center;
    if d.length_squared() > 0.0 {
        Some(d.y.atan2(d.x))
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub origin: DVec2,
    pub reference_center: Option<DVec2>,
    /// Angle of the press around the reference center; tilt is measured from it.
    pub grab_angle: f64,
}

impl GestureSession {
    /// Tilt of `point` relative to the grab, if the session has a reference
    /// center and `point` is not on it.
    pub fn tilt(&self, point: DVec2) -> Option<f64> {
        let center = self.reference_center?;
        angle_about(center, point).map(|a| a - self.grab_angle)
    }
}

/// Holds at most one live drag session.
#[derive(Clone, Debug, Default)]
pub struct GestureCapture {
    session: Option<GestureSession>,
}

impl GestureCapture {
    /// Starts a session, replacing any session still open.
    pub fn begin(&mut self, origin: DVec2, reference_center: Option<DVec2>) -> GestureSession {
        let grab_angle = reference_center
            .and_then(|c| angle_about(c, origin))
            .unwrap_or(0.0);
        let session = GestureSession {
            origin,
            reference_center,
            grab_angle,
        };
        self.session = Some(session);
        session
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[inline]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn end(&mut self) -> Option<GestureSession> {
        self.session.take()
    }
}

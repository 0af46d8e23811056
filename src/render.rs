use crate::constants::*;
use crate::css;
use crate::dom;
use kinetic_core::{Paint, Surface, EMPHASIS_MS};
use web_sys as web;

const SLIDER_STYLE: &str = r#"
:host { display: inline-block; font-family: sans-serif; user-select: none; }
#slider-container { position: relative; width: 200px; padding: 12px 0; transform-origin: 50% 50%; }
#slider-container.transition { transition: transform 0.3s ease-out; }
#slider { width: 100%; pointer-events: none; }
.handle { position: absolute; top: 6px; width: 14px; height: 28px; border-radius: 4px; background: #8a8a8a; cursor: grab; }
.handle.left { left: -16px; }
.handle.right { right: -16px; }
.readout { margin-top: 8px; }
.bump { display: inline-block; animation: bump 0.2s ease-out; }
@keyframes bump { 50% { transform: scale(1.3); } }
"#;

const LAUNCHER_STYLE: &str = r#"
:host { display: inline-block; font-family: sans-serif; user-select: none; }
.stage { position: relative; width: 260px; height: 120px; }
#icon { position: absolute; left: 0; bottom: 20px; width: 60px; height: 12px; background: #8a8a8a; border-radius: 3px; transform-origin: 0% 50%; cursor: pointer; }
#icon.transition { transition: transform 0.2s ease-out; }
.track { position: absolute; left: 60px; bottom: 20px; width: 200px; height: 2px; background: #c8c8c8; }
#indicator { position: absolute; left: 0; top: 0; width: 12px; height: 8px; border-radius: 50%; background: #d04040; visibility: hidden; }
.bump { display: inline-block; animation: bump 0.2s ease-out; }
@keyframes bump { 50% { transform: scale(1.3); } }
"#;

fn slider_markup(max: u32) -> String {
    format!(
        r#"<style>{style}</style>
<div id="{container}">
  <div class="{handle} left"></div>
  <input id="{range}" type="range" min="0" max="{max}" step="any" value="{half}" disabled>
  <div class="{handle} right"></div>
</div>
<div class="readout">{label}: <span id="{readout}"></span></div>"#,
        style = SLIDER_STYLE,
        container = SLIDER_CONTAINER_ID,
        handle = HANDLE_CLASS,
        range = SLIDER_RANGE_ID,
        max = max,
        half = f64::from(max) / 2.0,
        label = SLIDER_LABEL,
        readout = SLIDER_READOUT_ID,
    )
}

fn launcher_markup(max: u32) -> String {
    format!(
        r#"<style>{style}</style>
<div class="stage">
  <div id="{icon}"></div>
  <div class="track"><div id="{indicator}"></div></div>
</div>
<div class="readout">{label} = <span id="{readout}"></span> (Max: {max})</div>"#,
        style = LAUNCHER_STYLE,
        icon = LAUNCHER_ICON_ID,
        indicator = LAUNCHER_INDICATOR_ID,
        label = LAUNCHER_LABEL,
        readout = LAUNCHER_READOUT_ID,
        max = max,
    )
}

/// Paints widget state into its shadow-root markup. The readout starts empty
/// and is filled by the widget's first render.
pub struct DomSurface {
    tilting: web::HtmlElement,
    readout: web::HtmlElement,
    range: Option<web::HtmlElement>,
    indicator: Option<web::HtmlElement>,
}

impl DomSurface {
    pub fn slider(root: &web::ShadowRoot, max: u32) -> anyhow::Result<Self> {
        root.set_inner_html(&slider_markup(max));
        Ok(Self {
            tilting: dom::html_by_id(root, SLIDER_CONTAINER_ID)?,
            readout: dom::html_by_id(root, SLIDER_READOUT_ID)?,
            range: Some(dom::html_by_id(root, SLIDER_RANGE_ID)?),
            indicator: None,
        })
    }

    pub fn launcher(root: &web::ShadowRoot, max: u32) -> anyhow::Result<Self> {
        root.set_inner_html(&launcher_markup(max));
        Ok(Self {
            tilting: dom::html_by_id(root, LAUNCHER_ICON_ID)?,
            readout: dom::html_by_id(root, LAUNCHER_READOUT_ID)?,
            range: None,
            indicator: Some(dom::html_by_id(root, LAUNCHER_INDICATOR_ID)?),
        })
    }

    /// The element presses start on.
    pub fn press_zone(&self) -> web::HtmlElement {
        self.tilting.clone()
    }

    fn emphasize(&self) {
        let readout = self.readout.clone();
        dom::set_class(&readout, BUMP_CLASS, true);
        dom::after(EMPHASIS_MS, move || dom::set_class(&readout, BUMP_CLASS, false));
    }
}

impl Surface for DomSurface {
    fn paint(&mut self, paint: Paint) {
        match paint {
            Paint::Tilt { radians, animated } => {
                dom::set_class(&self.tilting, TRANSITION_CLASS, animated);
                dom::set_style(&self.tilting, "transform", &css::rotate(radians));
            }
            Paint::Track { value } => {
                if let Some(range) = &self.range {
                    _ = range.set_attribute("value", &css::range_value(value));
                }
            }
            Paint::Projectile { position } => {
                if let Some(ind) = &self.indicator {
                    dom::set_style(ind, "transform", &css::indicator_transform(position.x, position.y));
                }
            }
            Paint::Indicator { visible } => {
                if let Some(ind) = &self.indicator {
                    dom::set_style(ind, "visibility", css::visibility(visible));
                }
            }
            Paint::Readout { value } => {
                self.readout.set_text_content(Some(&value.to_string()));
            }
            Paint::Emphasis => self.emphasize(),
        }
    }
}

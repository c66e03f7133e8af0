// Window placement across the attached displays

use log::{info, warn};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::EventLoopWindowTarget;
use winit::window::{Fullscreen, WindowBuilder};

/// Display enumeration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DisplayError {
    #[error("No monitors reported by the windowing system")]
    NoMonitors,
}

/// One attached display in desktop pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub primary: bool,
}

/// Where the window goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Borderless full screen on whichever monitor the window opens on
    FullScreen,
    /// Borderless window covering exactly one monitor of several
    OnMonitor(MonitorRect),
}

/// Pick a placement for the given monitor layout
///
/// With several monitors the window is pinned to the primary one (the first
/// listed if none is marked primary), so full screen never lands on a side
/// display.
pub fn choose_placement(monitors: &[MonitorRect]) -> Result<Placement, DisplayError> {
    match monitors {
        [] => Err(DisplayError::NoMonitors),
        [_] => Ok(Placement::FullScreen),
        many => {
            let target = many.iter().find(|m| m.primary).unwrap_or(&many[0]);
            Ok(Placement::OnMonitor(*target))
        }
    }
}

/// List the monitors the event loop can see
pub fn monitor_rects<T>(target: &EventLoopWindowTarget<T>) -> Vec<MonitorRect> {
    let primary = target.primary_monitor();
    target
        .available_monitors()
        .map(|monitor| {
            let position = monitor.position();
            let size = monitor.size();
            MonitorRect {
                x: position.x,
                y: position.y,
                width: size.width,
                height: size.height,
                primary: primary.as_ref() == Some(&monitor),
            }
        })
        .collect()
}

/// Decide the placement, falling back to plain full screen on enumeration failure
pub fn resolve_placement(monitors: &[MonitorRect]) -> Placement {
    match choose_placement(monitors) {
        Ok(placement) => {
            info!(
                "{} display(s) detected, using {:?}",
                monitors.len(),
                placement
            );
            placement
        }
        Err(e) => {
            warn!("{}; falling back to full screen", e);
            Placement::FullScreen
        }
    }
}

/// Apply a placement to a window builder
pub fn apply_placement(builder: WindowBuilder, placement: Placement) -> WindowBuilder {
    match placement {
        Placement::FullScreen => builder.with_fullscreen(Some(Fullscreen::Borderless(None))),
        Placement::OnMonitor(rect) => builder
            .with_decorations(false)
            .with_position(PhysicalPosition::new(rect.x, rect.y))
            .with_inner_size(PhysicalSize::new(rect.width, rect.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(x: i32, primary: bool) -> MonitorRect {
        MonitorRect {
            x,
            y: 0,
            width: 1920,
            height: 1080,
            primary,
        }
    }

    #[test]
    fn test_no_monitors_is_error() {
        assert_eq!(choose_placement(&[]), Err(DisplayError::NoMonitors));
    }

    #[test]
    fn test_no_monitors_falls_back_to_full_screen() {
        assert_eq!(resolve_placement(&[]), Placement::FullScreen);
    }

    #[test]
    fn test_single_monitor_is_full_screen() {
        assert_eq!(
            choose_placement(&[monitor(0, true)]),
            Ok(Placement::FullScreen)
        );
    }

    #[test]
    fn test_multiple_monitors_pin_to_primary() {
        let monitors = [monitor(-1920, false), monitor(0, true), monitor(1920, false)];
        assert_eq!(
            choose_placement(&monitors),
            Ok(Placement::OnMonitor(monitors[1]))
        );
    }

    #[test]
    fn test_multiple_monitors_without_primary_use_first() {
        let monitors = [monitor(1920, false), monitor(0, false)];
        assert_eq!(
            choose_placement(&monitors),
            Ok(Placement::OnMonitor(monitors[0]))
        );
    }
}

//! Usable screen rectangle for anchoring the widget.

use dioxus::desktop::DesktopContext;
use since_core::surface::WorkArea;

/// Work area in logical pixels, or `None` if the screen cannot be queried.
pub fn query(desktop: &DesktopContext) -> Option<WorkArea> {
    let (left, top, right, bottom) = physical_work_area(desktop)?;
    let scale = desktop.scale_factor();
    if scale <= 0.0 {
        return None;
    }
    Some(WorkArea::new(
        f64::from(left) / scale,
        f64::from(top) / scale,
        f64::from(right) / scale,
        f64::from(bottom) / scale,
    ))
}

/// `SPI_GETWORKAREA` of the primary monitor, which excludes the taskbar.
#[cfg(windows)]
#[allow(unsafe_code)]
fn physical_work_area(_desktop: &DesktopContext) -> Option<(i32, i32, i32, i32)> {
    use windows::Win32::Foundation::RECT;
    use windows::Win32::UI::WindowsAndMessaging::{
        SystemParametersInfoW, SPI_GETWORKAREA, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
    };

    let mut rect = RECT::default();
    // SAFETY: SPI_GETWORKAREA writes exactly one RECT into the pointer.
    let result = unsafe {
        SystemParametersInfoW(
            SPI_GETWORKAREA,
            0,
            Some(std::ptr::addr_of_mut!(rect).cast()),
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
        )
    };
    if let Err(e) = result {
        tracing::warn!("SPI_GETWORKAREA failed: {}", e);
        return None;
    }
    Some((rect.left, rect.top, rect.right, rect.bottom))
}

/// Bounds of the monitor the widget is on.
#[cfg(not(windows))]
fn physical_work_area(desktop: &DesktopContext) -> Option<(i32, i32, i32, i32)> {
    let monitor = desktop
        .current_monitor()
        .or_else(|| desktop.primary_monitor())?;
    let position = monitor.position();
    let size = monitor.size();
    let width = i32::try_from(size.width).ok()?;
    let height = i32::try_from(size.height).ok()?;
    Some((position.x, position.y, position.x + width, position.y + height))
}

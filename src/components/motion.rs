use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// How far an element has travelled through the viewport, from its top
/// touching the bottom edge (0.0) to its bottom leaving the top edge (1.0).
pub fn scroll_progress(element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
    let distance = viewport_height + element_height;
    if distance <= 0.0 {
        return 0.0;
    }
    ((viewport_height - element_top) / distance).clamp(0.0, 1.0)
}

pub fn interpolate(progress: f64, from: f64, to: f64) -> f64 {
    from + (to - from) * progress
}

/// Offset in px for a parallax element, re-evaluated on every window scroll.
#[hook]
pub fn use_scroll_offset(node: NodeRef, from: f64, to: f64) -> f64 {
    // Re-render on scroll; the value itself is read from the element below.
    let _scroll = use_window_scroll();

    let progress = node
        .cast::<Element>()
        .and_then(|element| {
            let rect = element.get_bounding_client_rect();
            let viewport = web_sys::window()?.inner_height().ok()?.as_f64()?;
            Some(scroll_progress(rect.top(), rect.height(), viewport))
        })
        .unwrap_or(0.0);

    interpolate(progress, from, to)
}

pub fn translate_x(px: f64) -> String {
    format!("transform: translateX({:.1}px);", px)
}

pub fn translate_y(px: f64) -> String {
    format!("transform: translateY({:.1}px);", px)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_entry_to_exit() {
        // Just entering from below.
        assert_eq!(scroll_progress(800.0, 200.0, 800.0), 0.0);
        // Bottom edge just left the top of the viewport.
        assert_eq!(scroll_progress(-200.0, 200.0, 800.0), 1.0);
        assert!((scroll_progress(300.0, 200.0, 800.0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(5000.0, 200.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-5000.0, 200.0, 800.0), 1.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn interpolate_maps_range() {
        assert_eq!(interpolate(0.0, -100.0, 10.0), -100.0);
        assert_eq!(interpolate(1.0, -100.0, 10.0), 10.0);
        assert_eq!(interpolate(0.5, -50.0, 50.0), 0.0);
    }
}

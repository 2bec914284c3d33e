//! Breakpoint resolution.
//!
//! Maps the current viewport width against the ordered breakpoint table to
//! the effective layout parameters.

use crate::config::CarouselConfig;

/// Effective layout parameters for a given viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub slides_to_show: u32,
    pub step: u32,
}

/// Resolve the effective visible-slide count and step for `viewport_width`.
///
/// Starts from the base configuration (step defaulting to
/// `slides_to_show`), then walks `breakpoints` in ascending width order;
/// every breakpoint whose width fits within the viewport overwrites the
/// fields it defines, so the largest matching width wins per field. With no
/// matching breakpoint the base values apply.
///
/// `breakpoints` must already be sorted ascending by width; the engine
/// sorts them once at construction. A duplicated width keeps its original
/// order (stable sort), so the last entry wins.
pub fn resolve(viewport_width: f64, config: &CarouselConfig) -> LayoutParams {
    let mut slides_to_show = config.slides_to_show;
    let mut step = config.base_step();

    for bp in &config.breakpoints {
        if viewport_width >= bp.width as f64 {
            if let Some(s) = bp.slides_to_show {
                slides_to_show = s;
            }
            if let Some(s) = bp.step {
                step = s;
            }
        }
    }

    LayoutParams {
        slides_to_show,
        step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Breakpoint;

    fn config_with(breakpoints: Vec<Breakpoint>) -> CarouselConfig {
        CarouselConfig {
            slides_to_show: 1,
            step: None,
            breakpoints,
            wrap: false,
        }
    }

    fn bp(width: u32, slides_to_show: Option<u32>, step: Option<u32>) -> Breakpoint {
        Breakpoint {
            width,
            slides_to_show,
            step,
        }
    }

    #[test]
    fn test_no_breakpoints_uses_base() {
        let config = config_with(vec![]);
        let params = resolve(800.0, &config);
        assert_eq!(params.slides_to_show, 1);
        assert_eq!(params.step, 1);
    }

    #[test]
    fn test_largest_matching_width_wins() {
        let config = config_with(vec![bp(600, Some(2), None), bp(1024, Some(4), None)]);

        assert_eq!(resolve(800.0, &config).slides_to_show, 2);
        assert_eq!(resolve(1200.0, &config).slides_to_show, 4);
        assert_eq!(resolve(300.0, &config).slides_to_show, 1);
    }

    #[test]
    fn test_fields_resolve_independently() {
        // The larger breakpoint only overrides the step; slides_to_show is
        // still taken from the smaller match.
        let config = config_with(vec![bp(600, Some(3), None), bp(1024, None, Some(1))]);

        let params = resolve(1200.0, &config);
        assert_eq!(params.slides_to_show, 3);
        assert_eq!(params.step, 1);
    }

    #[test]
    fn test_exact_width_matches() {
        let config = config_with(vec![bp(600, Some(2), None)]);
        assert_eq!(resolve(600.0, &config).slides_to_show, 2);
        assert_eq!(resolve(599.0, &config).slides_to_show, 1);
    }

    #[test]
    fn test_duplicate_width_last_wins() {
        let config = config_with(vec![bp(600, Some(2), None), bp(600, Some(3), None)]);
        assert_eq!(resolve(700.0, &config).slides_to_show, 3);
    }

    #[test]
    fn test_step_defaults_to_slides_to_show() {
        let config = CarouselConfig {
            slides_to_show: 4,
            step: None,
            breakpoints: vec![bp(600, Some(2), None)],
            wrap: false,
        };
        // Base step follows the base slides_to_show, not the resolved one.
        let params = resolve(700.0, &config);
        assert_eq!(params.slides_to_show, 2);
        assert_eq!(params.step, 4);
    }
}
